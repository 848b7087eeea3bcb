//! Demo configuration (starspin.toml)
//!
//! Every field has a built-in default, so an empty file is a
//! valid configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use starspin_reels::{ReelLayout, SpinPlan, SymbolPool, SymbolSize};
use starspin_starfield::{StarfieldConfig, Viewport};

use crate::overlay::BannerConfig;
use std::fs;
use std::path::Path;

/// Top-level demo configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoConfig {
    pub viewport: ViewportConfig,
    pub starfield: StarfieldConfig,
    pub reels: ReelLayout,
    pub spin: SpinPlan,
    /// Intrinsic sizes of the symbol pool
    pub symbols: Vec<SymbolSize>,
    /// Period of the warp on/off toggle
    pub warp_interval_ms: u64,
    /// Banner shown when a spin completes
    pub banner: BannerConfig,
    /// How long the frame-rate overlay stays up after a spin starts
    pub fps_overlay_ms: u64,
    /// Fixed seed for the starfield and symbol choice; OS entropy when unset
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            starfield: StarfieldConfig::default(),
            reels: ReelLayout::default(),
            spin: SpinPlan::default(),
            symbols: vec![SymbolSize {
                width: 150.0,
                height: 150.0,
            }],
            warp_interval_ms: 3500,
            banner: BannerConfig::default(),
            fps_overlay_ms: 3500,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl From<ViewportConfig> for Viewport {
    fn from(cfg: ViewportConfig) -> Self {
        Viewport::new(cfg.width as f64, cfg.height as f64)
    }
}

impl DemoConfig {
    /// Parse TOML text
    pub fn from_toml(input: &str) -> Result<Self> {
        toml::from_str(input).context("Failed to parse demo config")
    }

    /// Load from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        Self::from_toml(&content)
    }

    pub fn symbol_pool(&self) -> Result<SymbolPool> {
        Ok(SymbolPool::new(self.symbols.clone())?)
    }
}
