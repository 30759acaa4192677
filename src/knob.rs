//! Knob instance
//!
//! Ties a [`KnobSpec`] to a host-owned value and tracks whether the user
//! is currently dragging it.

use crate::binding::ValueBinding;
use crate::domain::KnobSpec;
use crate::geometry::KnobGeometry;
use crate::gesture::{DragMapper, Extent, PointerDelta};

/// A mounted knob
///
/// The value lives with the host and is only reached through the binding.
#[derive(Debug)]
pub struct Knob<B> {
    spec: KnobSpec,
    value: B,
    interacting: bool,
}

impl<B: ValueBinding> Knob<B> {
    /// Mount a knob on a host value
    pub fn new(spec: KnobSpec, value: B) -> Self {
        Self {
            spec,
            value,
            interacting: false,
        }
    }

    /// Static configuration
    pub fn spec(&self) -> &KnobSpec {
        &self.spec
    }

    /// Current value, clamped into the knob's range
    pub fn value(&self) -> f32 {
        self.spec.range().clamp(self.value.get())
    }

    /// Write a value through the binding, clamped into range
    pub fn set_value(&self, value: f32) -> f32 {
        let clamped = self.spec.range().clamp(value);
        self.value.set(clamped);
        clamped
    }

    /// Whether a drag is in progress
    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    /// Drag started: show the value instead of the label
    pub fn begin_interaction(&mut self) {
        if !self.interacting {
            log::trace!("Knob '{}' interaction started", self.spec.label());
        }
        self.interacting = true;
    }

    /// Drag ended: show the label again
    pub fn end_interaction(&mut self) {
        if self.interacting {
            log::trace!(
                "Knob '{}' interaction ended at {}",
                self.spec.label(),
                self.value()
            );
        }
        self.interacting = false;
    }

    /// Apply a pointer movement through `mapper` and store the result
    ///
    /// Returns the new (clamped) value.
    pub fn drag<D: DragMapper + ?Sized>(
        &self,
        mapper: &D,
        delta: PointerDelta,
        extent: Extent,
    ) -> f32 {
        let range = self.spec.range();
        let updated = mapper.apply(self.value(), delta, extent, &range);
        self.value.set(updated);
        updated
    }

    /// Geometry for the current value
    pub fn geometry(&self) -> KnobGeometry {
        KnobGeometry::compute(&self.spec, self.value())
    }

    /// Label or truncated value, depending on interaction state
    pub fn display_text(&self) -> String {
        self.spec.display_text(self.value(), self.interacting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::KnobRange;
    use crate::gesture::TwoDimensionalDrag;
    use std::cell::Cell;

    #[test]
    fn test_knob_reads_host_value() {
        let host = Cell::new(64.0);
        let knob = Knob::new(KnobSpec::new("Knob 1"), &host);
        assert_eq!(knob.value(), 64.0);

        host.set(10.0);
        assert_eq!(knob.value(), 10.0);
    }

    #[test]
    fn test_display_toggles_with_interaction() {
        let host = Cell::new(99.6);
        let mut knob = Knob::new(KnobSpec::new("Knob 1"), &host);
        assert_eq!(knob.display_text(), "Knob 1");

        knob.begin_interaction();
        assert!(knob.is_interacting());
        assert_eq!(knob.display_text(), "99");

        knob.end_interaction();
        assert_eq!(knob.display_text(), "Knob 1");
    }

    #[test]
    fn test_drag_writes_through_binding() {
        let host = Cell::new(0.0);
        let knob = Knob::new(KnobSpec::new("Knob"), &host);
        let mapper = TwoDimensionalDrag::new(1.0, 1.0).unwrap();

        let value = knob.drag(&mapper, PointerDelta::new(0.0, -50.0), Extent::new(100.0, 100.0));
        assert!((value - 63.5).abs() < 1e-3);
        assert_eq!(host.get(), value);
    }

    #[test]
    fn test_drag_clamps() {
        let host = Cell::new(60.0);
        let range = KnobRange::new(-64.0, 63.0).unwrap();
        let knob = Knob::new(KnobSpec::bipolar("Pan", range), &host);

        knob.drag(
            &TwoDimensionalDrag::default(),
            PointerDelta::new(1000.0, 0.0),
            Extent::new(100.0, 100.0),
        );
        assert_eq!(host.get(), 63.0);
    }

    #[test]
    fn test_out_of_range_host_value_is_clamped_on_read() {
        let host = Cell::new(-20.0);
        let knob = Knob::new(KnobSpec::new("Knob"), &host);
        assert_eq!(knob.value(), 0.0);
        assert!(knob.geometry().normalized_value >= 0.0);
    }

    #[test]
    fn test_set_value_clamps() {
        let host = Cell::new(0.0);
        let knob = Knob::new(KnobSpec::new("Knob"), &host);
        assert_eq!(knob.set_value(300.0), 127.0);
        assert_eq!(host.get(), 127.0);
    }
}
