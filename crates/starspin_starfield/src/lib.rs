//! Starspin Starfield
//!
//! A fixed pool of stars flying past a camera that moves along the depth
//! axis. Each tick projects every star to screen space, derives its scale,
//! motion stretch and rotation, and recycles stars the camera has passed.

pub mod camera;
pub mod config;
pub mod error;
pub mod simulation;

pub use camera::CameraState;
pub use config::StarfieldConfig;
pub use error::{Result, StarfieldError};
pub use simulation::{Star, StarSprite, Starfield, Viewport};
