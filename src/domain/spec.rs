//! Knob construction parameters
//!
//! A `KnobSpec` is everything a knob is mounted with except its value.

use crate::domain::KnobRange;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Static configuration of a single knob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawKnobSpec")]
pub struct KnobSpec {
    /// Text shown while the knob is not being dragged
    label: String,
    /// Valid value range
    range: KnobRange,
    /// Point the progress arc grows from
    origin: f32,
}

impl KnobSpec {
    /// Create a knob spec with the default range (0..=127) and origin 0
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            range: KnobRange::default(),
            origin: 0.0,
        }
    }

    /// Set the value range
    pub fn with_range(mut self, range: KnobRange) -> Self {
        self.range = range;
        self
    }

    /// Set the origin
    ///
    /// The origin may sit outside the range, but must be finite.
    ///
    /// # Errors
    /// Returns `DomainError::NonFiniteOrigin` for NaN or infinite input
    pub fn with_origin(mut self, origin: f32) -> Result<Self, DomainError> {
        if !origin.is_finite() {
            return Err(DomainError::NonFiniteOrigin(origin));
        }
        self.origin = origin;
        Ok(self)
    }

    /// Bipolar (pan-style) knob: origin at the middle of the range
    pub fn bipolar(label: impl Into<String>, range: KnobRange) -> Self {
        Self {
            label: label.into(),
            range,
            origin: range.midpoint(),
        }
    }

    /// Display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Value range
    pub fn range(&self) -> KnobRange {
        self.range
    }

    /// Arc origin
    pub fn origin(&self) -> f32 {
        self.origin
    }

    /// Text to show for a given value
    ///
    /// While interacting the value is shown truncated toward zero,
    /// otherwise the label.
    pub fn display_text(&self, value: f32, interacting: bool) -> String {
        if interacting {
            // `as` truncates toward zero and saturates on overflow
            (value as i64).to_string()
        } else {
            self.label.clone()
        }
    }
}

/// Unvalidated serde form of [`KnobSpec`]
#[derive(Deserialize)]
struct RawKnobSpec {
    label: String,
    #[serde(default)]
    range: KnobRange,
    #[serde(default)]
    origin: f32,
}

impl TryFrom<RawKnobSpec> for KnobSpec {
    type Error = DomainError;

    fn try_from(raw: RawKnobSpec) -> Result<Self, Self::Error> {
        KnobSpec::new(raw.label)
            .with_range(raw.range)
            .with_origin(raw.origin)
    }
}

impl Default for KnobSpec {
    fn default() -> Self {
        Self::new("")
    }
}
