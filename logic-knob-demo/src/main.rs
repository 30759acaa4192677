//! logic-knob-demo - knob demo screen
//!
//! Four rotary knobs bound to host-owned values, with a button that resets
//! them all. Built with Iced.

mod app;
mod message;
mod theme;
mod widgets;

use app::KnobDemo;
use clap::Parser;
use iced::{window, Size, Task};
use logic_knob::config::{Config, ConfigBuilder};
use std::process;

/// logic-knob-demo - rotary knob demo
#[derive(Parser, Debug)]
#[command(name = "logic-knob-demo", version, about)]
struct Args {
    /// Config file path (defaults to the standard locations)
    #[arg(short, long, env = "LOGIC_KNOB_CONFIG")]
    config: Option<String>,

    /// Drag sensitivity for both axes
    #[arg(long)]
    sensitivity: Option<f32>,

    /// Value animation length in milliseconds (0 disables)
    #[arg(long)]
    animation_ms: Option<u64>,

    /// Value the reset button writes to every knob
    #[arg(long, allow_hyphen_values = true)]
    reset_value: Option<f32>,
}

/// Merge the config file with command-line overrides
fn build_config(args: &Args) -> Config {
    ConfigBuilder::new()
        .with_file(args.config.as_deref())
        .with_sensitivity(args.sensitivity)
        .with_animation_ms(args.animation_ms)
        .with_reset_value(args.reset_value)
        .build()
}

fn main() -> iced::Result {
    // Initialize logging with wgpu noise filtered out
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("wgpu_core", log::LevelFilter::Error)
        .init();

    // Parse CLI arguments
    let args = Args::parse();

    let config = build_config(&args);

    let demo = match KnobDemo::new(&config) {
        Ok(demo) => demo,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    log::info!("Starting logic-knob-demo");

    iced::application(KnobDemo::title, KnobDemo::update, KnobDemo::view)
        .subscription(KnobDemo::subscription)
        .theme(KnobDemo::theme)
        .window(window::Settings {
            size: Size::new(480.0, 640.0),
            min_size: Some(Size::new(240.0, 320.0)),
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || (demo, Task::none()))
}
