//! Drag gesture to value mapping
//!
//! The knob itself does not interpret pointer input. A [`DragMapper`]
//! turns a pointer movement into a value change, so the knob logic stays
//! testable without a GUI runtime.

use crate::domain::KnobRange;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Pointer movement since the previous event, in logical pixels
///
/// `dy` is positive downwards, as in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerDelta {
    pub dx: f32,
    pub dy: f32,
}

impl PointerDelta {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// Size of the area the control occupies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Side of the largest square that fits, used to size the dial
    pub fn dim(&self) -> f32 {
        self.width.min(self.height)
    }

    fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Translate a pointer delta into a value delta
pub trait DragMapper {
    /// Value change for `delta` on a control of size `extent`
    fn value_delta(&self, delta: PointerDelta, extent: Extent, range: &KnobRange) -> f32;

    /// Apply `delta` to `current` and clamp the result into `range`
    fn apply(&self, current: f32, delta: PointerDelta, extent: Extent, range: &KnobRange) -> f32 {
        range.clamp(current + self.value_delta(delta, extent, range))
    }
}

/// Two-axis drag: moving right or up increases the value
///
/// A drag across the full width (or height) at sensitivity 1 sweeps the
/// whole range; higher sensitivities need less travel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoDimensionalDrag {
    x_sensitivity: f32,
    y_sensitivity: f32,
}

impl TwoDimensionalDrag {
    /// Default per-axis sensitivity
    pub const DEFAULT_SENSITIVITY: f32 = 2.0;

    /// Create a mapper with validated sensitivities
    ///
    /// # Errors
    /// Returns `DomainError::InvalidSensitivity` unless both values are
    /// finite and positive
    pub fn new(x_sensitivity: f32, y_sensitivity: f32) -> Result<Self, DomainError> {
        for sensitivity in [x_sensitivity, y_sensitivity] {
            if !sensitivity.is_finite() || sensitivity <= 0.0 {
                return Err(DomainError::InvalidSensitivity(sensitivity));
            }
        }
        Ok(Self {
            x_sensitivity,
            y_sensitivity,
        })
    }

    pub fn x_sensitivity(&self) -> f32 {
        self.x_sensitivity
    }

    pub fn y_sensitivity(&self) -> f32 {
        self.y_sensitivity
    }
}

impl Default for TwoDimensionalDrag {
    fn default() -> Self {
        Self {
            x_sensitivity: Self::DEFAULT_SENSITIVITY,
            y_sensitivity: Self::DEFAULT_SENSITIVITY,
        }
    }
}

impl DragMapper for TwoDimensionalDrag {
    fn value_delta(&self, delta: PointerDelta, extent: Extent, range: &KnobRange) -> f32 {
        if extent.is_degenerate() {
            return 0.0;
        }

        // Screen y grows downwards, so an upward drag is a negative dy
        let fraction = delta.dx / extent.width * self.x_sensitivity
            - delta.dy / extent.height * self.y_sensitivity;
        fraction * range.span()
    }
}
