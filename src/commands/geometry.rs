//! Geometry command implementation
//!
//! Prints the dial geometry for a single value.

use crate::cli::args::{GeometryArgs, OutputFormat};
use crate::cli::output::{print_output, GeometryReport};
use crate::commands::spec_from_args;
use crate::error::Result;
use crate::geometry::KnobGeometry;

/// Execute the geometry command
pub fn run_geometry(args: &GeometryArgs, format: OutputFormat) -> Result<()> {
    let report = build_report(args)?;
    print_output(&report, format)?;
    Ok(())
}

fn build_report(args: &GeometryArgs) -> Result<GeometryReport> {
    let spec = spec_from_args(&args.knob)?;

    if !spec.range().contains(args.value) {
        log::warn!(
            "Value {} is outside {}, geometry uses the clamped value",
            args.value,
            spec.range()
        );
    }

    let value = spec.range().clamp(args.value);
    Ok(GeometryReport {
        label: spec.label().to_string(),
        value,
        display_text: spec.display_text(value, args.interacting),
        geometry: KnobGeometry::compute(&spec, value),
    })
}
