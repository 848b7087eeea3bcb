//! A single reel column

use std::cell::Cell;
use std::rc::Rc;

use crate::symbols::SymbolId;

/// One visible symbol position on a reel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolSlot {
    pub symbol: SymbolId,
    /// Vertical offset inside the reel
    pub y: f64,
    /// Horizontal centering offset for the current symbol
    pub x: f64,
    pub scale: f64,
}

#[derive(Debug)]
pub struct Reel {
    /// Left edge of this reel's column
    x: f64,
    /// Shared with the tween driving this reel
    position: Rc<Cell<f64>>,
    previous_position: f64,
    blur: f64,
    symbols: Box<[SymbolSlot]>,
}

impl Reel {
    pub(crate) fn new(x: f64, symbols: Vec<SymbolSlot>) -> Self {
        Self {
            x,
            position: Rc::new(Cell::new(0.0)),
            previous_position: 0.0,
            blur: 0.0,
            symbols: symbols.into_boxed_slice(),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn position(&self) -> f64 {
        self.position.get()
    }

    pub fn set_position(&self, position: f64) {
        self.position.set(position);
    }

    /// Handle for binding a tween to this reel's position
    pub fn position_cell(&self) -> &Rc<Cell<f64>> {
        &self.position
    }

    pub fn previous_position(&self) -> f64 {
        self.previous_position
    }

    /// Vertical blur derived from the last tick's velocity
    pub fn blur(&self) -> f64 {
        self.blur
    }

    pub fn symbols(&self) -> &[SymbolSlot] {
        &self.symbols
    }

    pub(crate) fn symbols_mut(&mut self) -> &mut [SymbolSlot] {
        &mut self.symbols
    }

    /// Record velocity for this tick and return the position it was taken at
    pub(crate) fn sample_velocity(&mut self, blur_gain: f64) -> f64 {
        let position = self.position.get();
        self.blur = (position - self.previous_position) * blur_gain;
        self.previous_position = position;
        position
    }
}
