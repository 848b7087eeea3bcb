//! Starspin Animation System
//!
//! Time-based property tweening driven once per rendered frame.
//!
//! # Features
//!
//! - **Easing**: standard curves plus the overshooting `BackOut` curve
//! - **Property accessors**: tween any `f64` through a getter/setter pair
//! - **Scheduler**: registration-ordered batch update with exact arrival
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::{Duration, Instant};
//! use starspin_animation::{Easing, Property, Tween, TweenScheduler};
//!
//! let position = Rc::new(Cell::new(0.0));
//! let start = Instant::now();
//!
//! let tween = Tween::to(
//!     Property::cell(&position),
//!     10.0,
//!     Duration::from_millis(500),
//!     Easing::back_out(0.5),
//!     start,
//! )
//! .unwrap();
//!
//! let mut scheduler = TweenScheduler::new();
//! scheduler.add(tween);
//! scheduler.tick(start + Duration::from_millis(500));
//!
//! assert_eq!(position.get(), 10.0);
//! assert!(scheduler.is_empty());
//! ```

pub mod clock;
pub mod easing;
pub mod error;
pub mod property;
pub mod scheduler;
pub mod tween;

pub use clock::{Clock, ManualClock, SystemClock};
pub use easing::Easing;
pub use error::{Result, TweenError};
pub use property::Property;
pub use scheduler::{TweenId, TweenScheduler};
pub use tween::{lerp, Tween};
