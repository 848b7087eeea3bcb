//! Starspin Demo Session
//!
//! Wires the starfield, the tween scheduler and the reels into one
//! frame-driven session, and runs it headless for diagnostics.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use starspin_animation::ManualClock;
//! use starspin_app::{DemoConfig, DemoSession};
//!
//! let clock = ManualClock::default();
//! let mut session = DemoSession::new(DemoConfig::default(), clock.clone()).unwrap();
//!
//! session.request_spin().unwrap();
//! for _ in 0..60 {
//!     clock.advance(Duration::from_millis(16));
//!     session.frame(Duration::from_millis(16));
//! }
//! assert!(session.is_spinning());
//! ```

pub mod config;
pub mod headless_assert;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_runtime;
pub mod headless_scenario;
pub mod overlay;
pub mod session;
pub mod timer;

pub use config::{DemoConfig, ViewportConfig};
pub use headless_report::{FrameStats, HeadlessReport, ReportStatus};
pub use headless_runner::{run_loaded_scenario, run_scenario, RunOutcome};
pub use headless_runtime::{HeadlessContext, HeadlessRunConfig, HeadlessRuntime};
pub use headless_scenario::{HeadlessScenario, ScenarioStep};
pub use overlay::{BannerConfig, BannerScale, TimedOverlay, WinBanner};
pub use session::{DemoSession, FrameOutput};
pub use timer::IntervalTimer;
