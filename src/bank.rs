//! Host value storage for a group of knobs
//!
//! The bank owns one shared slot per knob and mounts each knob on its
//! slot. Resetting writes the slots directly; the knobs pick the new
//! values up on their next read.

use crate::binding::{SharedValue, ValueBinding};
use crate::domain::KnobSpec;
use crate::error::DomainError;
use crate::knob::Knob;
use std::cell::Cell;
use std::rc::Rc;

/// A group of knobs bound to host-owned slots
#[derive(Debug, Default)]
pub struct KnobBank {
    slots: Vec<SharedValue>,
    knobs: Vec<Knob<SharedValue>>,
}

impl KnobBank {
    /// Create a bank with every knob starting at its range's clamp of 0
    pub fn from_specs(specs: impl IntoIterator<Item = KnobSpec>) -> Self {
        Self::with_initial_values(specs.into_iter().map(|spec| (spec, 0.0)))
    }

    /// Create a bank from `(spec, initial value)` pairs
    ///
    /// Initial values are clamped into each knob's range.
    pub fn with_initial_values(entries: impl IntoIterator<Item = (KnobSpec, f32)>) -> Self {
        let mut bank = Self::default();
        for (spec, initial) in entries {
            let slot: SharedValue = Rc::new(Cell::new(spec.range().clamp(initial)));
            bank.knobs.push(Knob::new(spec, Rc::clone(&slot)));
            bank.slots.push(slot);
        }
        log::debug!("Created knob bank with {} knobs", bank.len());
        bank
    }

    /// Number of knobs
    pub fn len(&self) -> usize {
        self.knobs.len()
    }

    /// Whether the bank has no knobs
    pub fn is_empty(&self) -> bool {
        self.knobs.is_empty()
    }

    /// Knob at `index`
    ///
    /// # Errors
    /// Returns `DomainError::UnknownKnob` for an out-of-bounds index
    pub fn knob(&self, index: usize) -> Result<&Knob<SharedValue>, DomainError> {
        self.knobs.get(index).ok_or(DomainError::UnknownKnob(index))
    }

    /// Mutable knob at `index`
    ///
    /// # Errors
    /// Returns `DomainError::UnknownKnob` for an out-of-bounds index
    pub fn knob_mut(&mut self, index: usize) -> Result<&mut Knob<SharedValue>, DomainError> {
        self.knobs
            .get_mut(index)
            .ok_or(DomainError::UnknownKnob(index))
    }

    /// Iterate over all knobs in order
    pub fn knobs(&self) -> impl Iterator<Item = &Knob<SharedValue>> {
        self.knobs.iter()
    }

    /// Raw slot value at `index`
    ///
    /// # Errors
    /// Returns `DomainError::UnknownKnob` for an out-of-bounds index
    pub fn value(&self, index: usize) -> Result<f32, DomainError> {
        self.slots
            .get(index)
            .map(|slot| slot.get())
            .ok_or(DomainError::UnknownKnob(index))
    }

    /// Set a slot value, clamped into its knob's range
    ///
    /// # Errors
    /// Returns `DomainError::UnknownKnob` for an out-of-bounds index
    pub fn set_value(&self, index: usize, value: f32) -> Result<f32, DomainError> {
        Ok(self.knob(index)?.set_value(value))
    }

    /// Snapshot of all slot values
    pub fn values(&self) -> Vec<f32> {
        self.slots.iter().map(|slot| slot.get()).collect()
    }

    /// Reset every slot to `value` (clamped per knob)
    ///
    /// Returns the number of slots written.
    pub fn reset_all(&self, value: f32) -> usize {
        for (slot, knob) in self.slots.iter().zip(&self.knobs) {
            slot.set(knob.spec().range().clamp(value));
        }
        log::info!("Reset {} knob values to {}", self.slots.len(), value);
        self.slots.len()
    }
}
