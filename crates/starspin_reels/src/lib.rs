//! Starspin Reels
//!
//! Slot-machine reels whose continuous `position` is tweened by the
//! animation scheduler. A separate layout pass maps position to per-symbol
//! offsets with modular arithmetic and swaps symbols as they scroll out of
//! view, so a short strip reads as an endless one.

pub mod controller;
pub mod error;
pub mod plan;
pub mod reel;
pub mod symbols;

pub use controller::{ReelController, SymbolSwap};
pub use error::{ReelError, Result};
pub use plan::{ReelLayout, SpinPlan};
pub use reel::{Reel, SymbolSlot};
pub use symbols::{SymbolId, SymbolPool, SymbolSize};
