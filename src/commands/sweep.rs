//! Sweep command implementation
//!
//! Samples the geometry at evenly spaced values across a range.

use crate::cli::args::{OutputFormat, SweepArgs};
use crate::cli::output::{print_output, SweepReport, SweepRow};
use crate::commands::spec_from_args;
use crate::domain::KnobSpec;
use crate::error::Result;
use crate::geometry::KnobGeometry;

/// Execute the sweep command
pub fn run_sweep(args: &SweepArgs, format: OutputFormat) -> Result<()> {
    let spec = spec_from_args(&args.knob)?;
    let report = sweep(&spec, args.steps);
    print_output(&report, format)?;
    Ok(())
}

/// Geometry at `steps + 1` values from the lower to the upper bound
pub fn sweep(spec: &KnobSpec, steps: u32) -> SweepReport {
    let range = spec.range();
    let steps = steps.max(1);

    let rows = (0..=steps)
        .map(|i| {
            // Rounding can push the last sample a hair past the bound
            let value = range.clamp(range.denormalize(i as f32 / steps as f32));
            let geometry = KnobGeometry::compute(spec, value);
            SweepRow {
                value,
                normalized: geometry.normalized_value,
                progress: geometry.progress,
                pointer_radians: geometry.pointer_radians,
            }
        })
        .collect();

    SweepReport {
        label: spec.label().to_string(),
        lower: range.lower(),
        upper: range.upper(),
        origin: spec.origin(),
        rows,
    }
}
