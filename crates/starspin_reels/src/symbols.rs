//! Symbol identities and their intrinsic sizes

use serde::{Deserialize, Serialize};

use crate::error::{ReelError, Result};

/// Index into a [`SymbolPool`]
pub type SymbolId = usize;

/// Intrinsic size of a symbol's content, as reported by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SymbolSize {
    pub width: f64,
    pub height: f64,
}

/// The fixed set of symbols a reel can show
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolPool {
    sizes: Vec<SymbolSize>,
}

impl SymbolPool {
    pub fn new(sizes: Vec<SymbolSize>) -> Result<Self> {
        if sizes.is_empty() {
            return Err(ReelError::EmptySymbolPool);
        }
        for size in &sizes {
            for dim in [size.width, size.height] {
                if !(dim.is_finite() && dim > 0.0) {
                    return Err(ReelError::InvalidSymbolSize(dim));
                }
            }
        }
        Ok(Self { sizes })
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn size(&self, symbol: SymbolId) -> Option<SymbolSize> {
        self.sizes.get(symbol).copied()
    }

    /// Uniform scale that fits `symbol` in a `slot_size` square, and the
    /// rounded horizontal offset that centers it
    pub fn fit(&self, symbol: SymbolId, slot_size: f64) -> (f64, f64) {
        let Some(size) = self.size(symbol) else {
            return (1.0, 0.0);
        };
        let scale = (slot_size / size.width).min(slot_size / size.height);
        let x = ((slot_size - size.width * scale) / 2.0).round();
        (scale, x)
    }
}

impl Default for SymbolPool {
    /// A single square symbol filling the slot
    fn default() -> Self {
        Self {
            sizes: vec![SymbolSize {
                width: 150.0,
                height: 150.0,
            }],
        }
    }
}
