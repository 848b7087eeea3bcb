use std::f64::consts::{FRAC_PI_2, TAU};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::camera::CameraState;
use crate::config::StarfieldConfig;
use crate::error::{Result, StarfieldError};

/// Screen size the render collaborator draws into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions must be positive and finite to project into
    pub fn validate(&self) -> Result<()> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if usable(self.width) && usable(self.height) {
            Ok(())
        } else {
            Err(StarfieldError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Render-state written for each star every tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StarSprite {
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Radians; the stretch axis points away from the viewport center
    pub rotation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Star {
    /// World depth along the camera axis
    pub depth: f64,
    /// Radial offset, resampled on every (re)spawn
    pub x: f64,
    pub y: f64,
    pub sprite: StarSprite,
}

/// Fixed pool of stars plus the camera flying through them
#[derive(Debug)]
pub struct Starfield {
    config: StarfieldConfig,
    camera: CameraState,
    stars: Vec<Star>,
    rng: StdRng,
}

impl Starfield {
    /// Create a field seeded from the OS entropy source
    pub fn new(config: StarfieldConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a deterministic field
    pub fn with_seed(config: StarfieldConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: StarfieldConfig, mut rng: StdRng) -> Result<Self> {
        config.validate()?;
        let camera = CameraState::default();
        let stars = (0..config.star_count)
            .map(|_| {
                let mut star = Star::default();
                spawn_star(&mut star, true, camera.depth, &config, &mut rng);
                star
            })
            .collect();

        tracing::debug!(stars = config.star_count, "starfield created");
        Ok(Self {
            config,
            camera,
            stars,
            rng,
        })
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraState {
        &mut self.camera
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Mutable access to the pool; its length cannot change
    pub fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }

    /// Resample one star's depth and radial offset.
    ///
    /// Returns `false` if `index` is out of range.
    pub fn spawn(&mut self, index: usize, initial: bool) -> bool {
        let Some(star) = self.stars.get_mut(index) else {
            return false;
        };
        spawn_star(star, initial, self.camera.depth, &self.config, &mut self.rng);
        true
    }

    /// Advance the camera by `delta` frame units and re-project every star.
    ///
    /// A degenerate viewport still moves the camera and recycles stars, but
    /// leaves every sprite as it was. Returns the number of stars recycled
    /// this tick.
    pub fn tick(&mut self, delta: f64, viewport: Viewport) -> usize {
        let config = &self.config;
        self.camera.smooth_speed(config.speed_smoothing);
        self.camera
            .advance(delta, config.time_scale, config.base_speed);

        let projectable = viewport.validate().is_ok();
        if !projectable {
            tracing::trace!(?viewport, "skipping projection for degenerate viewport");
        }

        let mut respawned = 0;
        for star in &mut self.stars {
            if star.depth < self.camera.depth {
                spawn_star(star, false, self.camera.depth, config, &mut self.rng);
                respawned += 1;
            }
            if projectable {
                star.sprite = project(star, &self.camera, config, viewport);
            }
        }
        respawned
    }
}

fn spawn_star(
    star: &mut Star,
    initial: bool,
    camera_depth: f64,
    config: &StarfieldConfig,
    rng: &mut StdRng,
) {
    star.depth = if initial {
        rng.random_range(0.0..config.initial_max_depth)
    } else {
        camera_depth + config.min_spawn_depth + rng.random_range(0.0..config.spawn_depth_spread)
    };

    // Radial placement keeps every star off the camera axis
    let angle = rng.random_range(0.0..TAU);
    let radius = rng.random_range(config.min_radius..config.max_radius);
    star.x = angle.cos() * radius;
    star.y = angle.sin() * radius;
}

/// Both axes scale by viewport width on purpose; see DESIGN.md.
fn project(star: &Star, camera: &CameraState, config: &StarfieldConfig, viewport: Viewport) -> StarSprite {
    let mut z = star.depth - camera.depth;
    if z < config.min_projection_depth {
        tracing::trace!(z, "clamping degenerate projection depth");
        z = config.min_projection_depth;
    }

    let (center_x, center_y) = viewport.center();
    let x = star.x * (config.field_of_view / z) * viewport.width + center_x;
    let y = star.y * (config.field_of_view / z) * viewport.width + center_y;

    let dx = x - center_x;
    let dy = y - center_y;
    let distance_center = (dx * dx + dy * dy).sqrt();
    let distance_scale = ((config.fade_depth - z) / config.fade_depth).max(0.0);

    let scale_x = distance_scale * config.star_base_size;
    let scale_y = distance_scale * config.star_base_size
        + (distance_scale * camera.speed * config.star_stretch * distance_center) / viewport.width;

    StarSprite {
        x,
        y,
        scale_x,
        scale_y,
        rotation: dy.atan2(dx) + FRAC_PI_2,
    }
}
