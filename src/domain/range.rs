//! Knob value range
//!
//! Provides a validated closed interval with normalization helpers.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed value range `[lower, upper]` controlled by a knob
///
/// Validated on construction: both bounds finite and `lower < upper`,
/// so normalization never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f32; 2]", into = "[f32; 2]")]
pub struct KnobRange {
    lower: f32,
    upper: f32,
}

impl KnobRange {
    /// Default lower bound (MIDI-style 0..=127)
    pub const DEFAULT_LOWER: f32 = 0.0;
    /// Default upper bound
    pub const DEFAULT_UPPER: f32 = 127.0;

    /// Create a new range with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidRange` if either bound is not finite
    /// or if `lower >= upper`
    pub fn new(lower: f32, upper: f32) -> Result<Self, DomainError> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(DomainError::InvalidRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Lower bound
    #[inline]
    pub const fn lower(&self) -> f32 {
        self.lower
    }

    /// Upper bound
    #[inline]
    pub const fn upper(&self) -> f32 {
        self.upper
    }

    /// Distance between the bounds (always positive)
    #[inline]
    pub fn span(&self) -> f32 {
        self.upper - self.lower
    }

    /// Check whether a value lies inside the range (inclusive)
    pub fn contains(&self, value: f32) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Clamp a value into the range
    ///
    /// NaN maps to the lower bound.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.lower;
        }
        value.clamp(self.lower, self.upper)
    }

    /// Position of `value` relative to the range as a fraction
    ///
    /// Not clamped: values outside the range map outside `[0, 1]`.
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        (value - self.lower) / self.span()
    }

    /// Inverse of [`normalize`](Self::normalize)
    #[inline]
    pub fn denormalize(&self, fraction: f32) -> f32 {
        self.lower + fraction * self.span()
    }

    /// Midpoint of the range, the usual origin for bipolar controls
    pub fn midpoint(&self) -> f32 {
        self.lower + self.span() / 2.0
    }
}

impl Default for KnobRange {
    fn default() -> Self {
        Self {
            lower: Self::DEFAULT_LOWER,
            upper: Self::DEFAULT_UPPER,
        }
    }
}

impl fmt::Display for KnobRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}...{}", self.lower, self.upper)
    }
}

impl TryFrom<[f32; 2]> for KnobRange {
    type Error = DomainError;

    fn try_from(bounds: [f32; 2]) -> Result<Self, Self::Error> {
        Self::new(bounds[0], bounds[1])
    }
}

impl From<KnobRange> for [f32; 2] {
    fn from(range: KnobRange) -> Self {
        [range.lower, range.upper]
    }
}
