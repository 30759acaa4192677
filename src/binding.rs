//! Host-owned value access
//!
//! A knob never owns the number it controls. It reads and writes it
//! through a [`ValueBinding`] supplied by the host.

use std::cell::Cell;
use std::rc::Rc;

/// Getter/setter access to a host-owned value
///
/// Methods take `&self`: bindings are shared handles onto storage the
/// host keeps, so implementations use interior mutability.
pub trait ValueBinding {
    /// Read the current value
    fn get(&self) -> f32;

    /// Write a new value
    fn set(&self, value: f32);
}

impl ValueBinding for Cell<f32> {
    fn get(&self) -> f32 {
        Cell::get(self)
    }

    fn set(&self, value: f32) {
        Cell::set(self, value);
    }
}

impl<T: ValueBinding + ?Sized> ValueBinding for Rc<T> {
    fn get(&self) -> f32 {
        (**self).get()
    }

    fn set(&self, value: f32) {
        (**self).set(value);
    }
}

impl<T: ValueBinding + ?Sized> ValueBinding for &T {
    fn get(&self) -> f32 {
        (**self).get()
    }

    fn set(&self, value: f32) {
        (**self).set(value);
    }
}

/// Binding built from an explicit getter/setter pair
pub struct Binding<G, S> {
    getter: G,
    setter: S,
}

impl<G, S> Binding<G, S>
where
    G: Fn() -> f32,
    S: Fn(f32),
{
    /// Create a binding from two closures
    pub fn new(getter: G, setter: S) -> Self {
        Self { getter, setter }
    }
}

impl<G, S> ValueBinding for Binding<G, S>
where
    G: Fn() -> f32,
    S: Fn(f32),
{
    fn get(&self) -> f32 {
        (self.getter)()
    }

    fn set(&self, value: f32) {
        (self.setter)(value);
    }
}

/// Shared value slot, the binding type used by [`KnobBank`](crate::bank::KnobBank)
pub type SharedValue = Rc<Cell<f32>>;
