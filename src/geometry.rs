//! Value-to-dial geometry
//!
//! Pure functions mapping a knob value to the fractions and angles the
//! dial is drawn with. Nothing here touches a renderer.
//!
//! Angles are expressed as fractions of a full turn. Fraction 0 is the
//! bottom of the dial and fractions grow clockwise. The active sweep runs
//! from [`MIN_ANGLE_DEGREES`] to [`MAX_ANGLE_DEGREES`], leaving a gap at the
//! bottom.

use crate::domain::{KnobRange, KnobSpec};
use serde::Serialize;
use std::f32::consts::PI;

/// Start of the active sweep, in degrees from the dial bottom
pub const MIN_ANGLE_DEGREES: f32 = 35.0;
/// End of the active sweep, in degrees from the dial bottom
pub const MAX_ANGLE_DEGREES: f32 = 325.0;
/// Active sweep
pub const SPAN_DEGREES: f32 = MAX_ANGLE_DEGREES - MIN_ANGLE_DEGREES;
/// Added to the end of an above-origin arc so a value sitting on the
/// origin still draws a visible sliver
pub const ARC_EPSILON: f32 = 0.0001;

/// Pointer sweep in radians for a full-range move
const POINTER_SWEEP: f32 = 1.6 * PI;
/// Pointer rotation at the lower bound
const POINTER_OFFSET: f32 = 0.2 * PI;

/// Trim fractions of the progress arc
///
/// Which variant is produced depends on which side of the origin the
/// value sits. Both carry `from <= to` (up to the epsilon sliver).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "side", rename_all = "snake_case")]
pub enum ArcTrim {
    /// `value >= origin`: arc runs from the origin to the value
    AboveOrigin { from: f32, to: f32 },
    /// `value < origin`: arc runs from the value to the origin
    BelowOrigin { from: f32, to: f32 },
}

impl ArcTrim {
    /// Start fraction
    pub fn from(&self) -> f32 {
        match *self {
            ArcTrim::AboveOrigin { from, .. } | ArcTrim::BelowOrigin { from, .. } => from,
        }
    }

    /// End fraction
    pub fn to(&self) -> f32 {
        match *self {
            ArcTrim::AboveOrigin { to, .. } | ArcTrim::BelowOrigin { to, .. } => to,
        }
    }

    /// Length of the arc as a fraction of a full turn
    pub fn length(&self) -> f32 {
        self.to() - self.from()
    }

    /// Whether the value sits below the origin
    pub fn is_below_origin(&self) -> bool {
        matches!(self, ArcTrim::BelowOrigin { .. })
    }
}

/// Fraction of a full turn at which a normalized position sits
#[inline]
pub fn angular_position(fraction: f32) -> f32 {
    MIN_ANGLE_DEGREES / 360.0 + fraction * SPAN_DEGREES / 360.0
}

/// Trim fractions of the fixed background track
pub fn track_trim() -> (f32, f32) {
    (MIN_ANGLE_DEGREES / 360.0, MAX_ANGLE_DEGREES / 360.0)
}

/// Progress arc for `value` relative to `origin`
///
/// The value is used as given; callers clamp it beforehand if needed.
pub fn arc_trim(value: f32, origin: f32, range: &KnobRange) -> ArcTrim {
    let normalized_value = range.normalize(value);
    let normalized_origin = range.normalize(origin);

    if value >= origin {
        ArcTrim::AboveOrigin {
            from: angular_position(normalized_origin),
            to: angular_position(normalized_value) + ARC_EPSILON,
        }
    } else {
        ArcTrim::BelowOrigin {
            from: angular_position(normalized_value),
            to: angular_position(normalized_origin),
        }
    }
}

/// Clockwise pointer rotation from the dial bottom, in radians
#[inline]
pub fn pointer_rotation(normalized_value: f32) -> f32 {
    normalized_value * POINTER_SWEEP + POINTER_OFFSET
}

/// Convert a trim fraction to a canvas angle in radians
///
/// Canvas angles start at 3 o'clock and grow clockwise (y points down),
/// so the dial bottom is a quarter turn in.
#[inline]
pub fn trim_to_canvas_angle(fraction: f32) -> f32 {
    PI / 2.0 + fraction * 2.0 * PI
}

/// Everything needed to draw a knob for one value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KnobGeometry {
    /// Value position in the range, in `[0, 1]`
    pub normalized_value: f32,
    /// Origin position in the range (outside `[0, 1]` if the origin is)
    pub normalized_origin: f32,
    /// Background track trim `(from, to)`
    pub track: (f32, f32),
    /// Progress arc trim
    pub progress: ArcTrim,
    /// Pointer rotation in radians
    pub pointer_radians: f32,
}

impl KnobGeometry {
    /// Compute the geometry of `spec` at `value`
    ///
    /// Out-of-range values are clamped first so the result is always
    /// finite.
    pub fn compute(spec: &KnobSpec, value: f32) -> Self {
        let range = spec.range();
        let clamped = range.clamp(value);
        if clamped != value {
            log::debug!(
                "Knob '{}' value {} outside {}, clamped to {}",
                spec.label(),
                value,
                range,
                clamped
            );
        }

        let normalized_value = range.normalize(clamped);
        Self {
            normalized_value,
            normalized_origin: range.normalize(spec.origin()),
            track: track_trim(),
            progress: arc_trim(clamped, spec.origin(), &range),
            pointer_radians: pointer_rotation(normalized_value),
        }
    }

    /// Canvas angles `(start, end)` of the progress arc
    pub fn progress_canvas_angles(&self) -> (f32, f32) {
        (
            trim_to_canvas_angle(self.progress.from()),
            trim_to_canvas_angle(self.progress.to()),
        )
    }

    /// Canvas angles `(start, end)` of the background track
    pub fn track_canvas_angles(&self) -> (f32, f32) {
        (
            trim_to_canvas_angle(self.track.0),
            trim_to_canvas_angle(self.track.1),
        )
    }

    /// Canvas direction the pointer tick points in
    pub fn pointer_canvas_angle(&self) -> f32 {
        PI / 2.0 + self.pointer_radians
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn bipolar_spec() -> KnobSpec {
        KnobSpec::new("Pan")
            .with_range(KnobRange::new(-64.0, 63.0).unwrap())
            .with_origin(0.0)
            .unwrap()
    }

    #[test]
    fn test_span() {
        assert_eq!(SPAN_DEGREES, 290.0);
    }

    #[test]
    fn test_value_at_origin_draws_sliver() {
        let geometry = KnobGeometry::compute(&KnobSpec::new("Knob"), 0.0);
        let progress = geometry.progress;
        assert!(!progress.is_below_origin());
        assert!(approx(progress.from(), MIN_ANGLE_DEGREES / 360.0));
        assert!(approx(progress.length(), ARC_EPSILON));
        assert!(progress.length() > 0.0);
    }

    #[test]
    fn test_full_value_reaches_max_angle() {
        let geometry = KnobGeometry::compute(&KnobSpec::new("Knob"), 127.0);
        assert!(approx(geometry.progress.from(), MIN_ANGLE_DEGREES / 360.0));
        assert!(approx(
            geometry.progress.to(),
            MAX_ANGLE_DEGREES / 360.0 + ARC_EPSILON
        ));
    }

    #[test]
    fn test_below_origin_branch() {
        let spec = bipolar_spec();
        let geometry = KnobGeometry::compute(&spec, -32.0);

        let normalized_origin = 64.0 / 127.0;
        let normalized_value = 32.0 / 127.0;
        assert!(approx(geometry.normalized_origin, normalized_origin));

        match geometry.progress {
            ArcTrim::BelowOrigin { from, to } => {
                assert!(approx(from, angular_position(normalized_value)));
                assert!(approx(to, angular_position(normalized_origin)));
                assert!(from < to);
            }
            other => panic!("Expected BelowOrigin, got {:?}", other),
        }
    }

    #[test]
    fn test_above_origin_branch_bipolar() {
        let geometry = KnobGeometry::compute(&bipolar_spec(), 32.0);
        assert!(!geometry.progress.is_below_origin());
        assert!(approx(
            geometry.progress.from(),
            angular_position(64.0 / 127.0)
        ));
    }

    #[test]
    fn test_compute_is_pure() {
        let spec = bipolar_spec();
        let first = KnobGeometry::compute(&spec, 12.5);
        let second = KnobGeometry::compute(&spec, 12.5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_bounds_produce_finite_geometry() {
        let spec = bipolar_spec();
        for value in [-64.0, 63.0] {
            let geometry = KnobGeometry::compute(&spec, value);
            assert!(geometry.normalized_value.is_finite());
            assert!(geometry.progress.from().is_finite());
            assert!(geometry.progress.to().is_finite());
            assert!(geometry.pointer_radians.is_finite());
        }
    }

    #[test]
    fn test_out_of_range_value_is_clamped() {
        let spec = KnobSpec::new("Knob");
        let over = KnobGeometry::compute(&spec, 500.0);
        let max = KnobGeometry::compute(&spec, 127.0);
        assert_eq!(over, max);
    }

    #[test]
    fn test_track_is_fixed() {
        let spec = KnobSpec::new("Knob");
        let low = KnobGeometry::compute(&spec, 0.0);
        let high = KnobGeometry::compute(&spec, 100.0);
        assert_eq!(low.track, high.track);
        assert!(approx(low.track.0, 35.0 / 360.0));
        assert!(approx(low.track.1, 325.0 / 360.0));
    }

    #[test]
    fn test_pointer_rotation_extremes() {
        assert!(approx(pointer_rotation(0.0), 0.2 * PI));
        assert!(approx(pointer_rotation(1.0), 1.8 * PI));
    }

    #[test]
    fn test_canvas_angle_bottom() {
        // Fraction 0 is straight down in a y-down canvas
        assert!(approx(trim_to_canvas_angle(0.0), PI / 2.0));
        assert!(approx(trim_to_canvas_angle(0.5), 1.5 * PI));
    }
}
