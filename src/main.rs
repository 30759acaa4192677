//! logic-knob - knob geometry inspector
//!
//! A command-line tool for checking the arc and pointer geometry a knob
//! draws for given values, ranges and origins.

use clap::Parser;
use logic_knob::cli::args::{generate_completions, Cli, Commands};
use logic_knob::commands::{run_config, run_geometry, run_sweep};
use logic_knob::config::ConfigBuilder;
use logic_knob::error::{AppError, ConfigError, DomainError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG still takes precedence
    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .parse_env(env_logger::Env::default())
        .format_timestamp(None)
        .init();

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

/// Default log level for the verbose flag
fn log_level(verbose: bool) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Commands::Geometry(args) => run_geometry(args, cli.format),

        Commands::Sweep(args) => run_sweep(args, cli.format),

        Commands::Config(args) => {
            let config = ConfigBuilder::new()
                .with_file(args.config.as_deref())
                .build();
            run_config(&config, args.save.as_deref())
        }

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Domain(DomainError::InvalidRange { .. }) => {
            eprintln!();
            eprintln!("Hint: --lower must be strictly below --upper.");
        }
        AppError::Config(ConfigError::InvalidValue { .. }) => {
            eprintln!();
            eprintln!("Hint: check the [[knobs]] and [drag] sections of your config file.");
        }
        _ => {}
    }
}
