//! Property accessors
//!
//! A [`Property`] is the getter/setter pair a tween drives. It is bound once,
//! when the tween is built, so the scheduler never looks fields up by name.

use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

type Getter = Box<dyn Fn() -> Option<f64>>;
type Setter = Box<dyn Fn(f64)>;

/// Accessor pair for one numeric property on a caller-owned target
pub struct Property {
    get: Getter,
    set: Setter,
}

impl Property {
    /// Bind arbitrary accessors
    pub fn new<G, S>(get: G, set: S) -> Self
    where
        G: Fn() -> f64 + 'static,
        S: Fn(f64) + 'static,
    {
        Self {
            get: Box::new(move || Some(get())),
            set: Box::new(set),
        }
    }

    /// Bind a shared cell without keeping it alive.
    ///
    /// Once every strong handle is dropped, reads return `None` and writes are
    /// skipped.
    pub fn cell(target: &Rc<Cell<f64>>) -> Self {
        let read: Weak<Cell<f64>> = Rc::downgrade(target);
        let write = read.clone();
        Self {
            get: Box::new(move || read.upgrade().map(|cell| cell.get())),
            set: Box::new(move |value| {
                if let Some(cell) = write.upgrade() {
                    cell.set(value);
                }
            }),
        }
    }

    /// Current value, or `None` if the target is gone
    pub fn get(&self) -> Option<f64> {
        (self.get)()
    }

    pub fn set(&self, value: f64) {
        (self.set)(value)
    }

    /// Whether the target is still alive
    pub fn is_bound(&self) -> bool {
        self.get().is_some()
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}
