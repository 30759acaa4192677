//! Domain models for logic-knob
//!
//! This module contains the validated knob types.
//! Types are validated on construction (fail-fast pattern).

pub mod range;
pub mod spec;

pub use range::KnobRange;
pub use spec::KnobSpec;
