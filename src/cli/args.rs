//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Knob geometry inspector
///
/// Compute the arc and pointer geometry a knob draws for a value.
#[derive(Parser, Debug)]
#[command(name = "logic-knob")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the geometry for a single value
    Geometry(GeometryArgs),

    /// Show the geometry at evenly spaced values across the range
    Sweep(SweepArgs),

    /// Print the effective configuration as TOML
    Config(ConfigArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Range and origin shared by the geometry commands
#[derive(Parser, Debug, Clone)]
pub struct KnobArgs {
    /// Lower bound of the range
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub lower: f32,

    /// Upper bound of the range
    #[arg(long, default_value = "127", allow_hyphen_values = true)]
    pub upper: f32,

    /// Origin the progress arc grows from
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub origin: f32,

    /// Label shown when not interacting
    #[arg(long, default_value = "Knob")]
    pub label: String,
}

/// Arguments for the geometry command
#[derive(Parser, Debug)]
pub struct GeometryArgs {
    /// Knob value
    #[arg(allow_hyphen_values = true)]
    pub value: f32,

    #[command(flatten)]
    pub knob: KnobArgs,

    /// Render the display text as if the knob were being dragged
    #[arg(long)]
    pub interacting: bool,
}

/// Arguments for the sweep command
#[derive(Parser, Debug)]
pub struct SweepArgs {
    /// Number of steps across the range
    #[arg(short, long, default_value = "8", value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub steps: u32,

    #[command(flatten)]
    pub knob: KnobArgs,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Path to configuration file
    #[arg(short, long, env = "LOGIC_KNOB_CONFIG")]
    pub config: Option<String>,

    /// Also write the effective configuration to this path
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
