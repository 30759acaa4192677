//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod config;
pub mod geometry;
pub mod sweep;

pub use config::run_config;
pub use geometry::run_geometry;
pub use sweep::run_sweep;

use crate::cli::args::KnobArgs;
use crate::domain::{KnobRange, KnobSpec};
use crate::error::Result;

/// Build a validated knob spec from command-line range arguments
pub(crate) fn spec_from_args(args: &KnobArgs) -> Result<KnobSpec> {
    let range = KnobRange::new(args.lower, args.upper)?;
    let spec = KnobSpec::new(args.label.clone())
        .with_range(range)
        .with_origin(args.origin)?;
    Ok(spec)
}
