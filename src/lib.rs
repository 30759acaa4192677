//! logic-knob - rotary knob control core
//!
//! This library maps a bounded value to the arc and pointer geometry of a
//! rotary dial, and keeps the value itself with the host.
//!
//! # Modules
//!
//! - [`bank`]: Host storage for a group of knobs
//! - [`binding`]: Getter/setter access to host-owned values
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Validated range and knob spec
//! - [`error`]: Error types
//! - [`geometry`]: Value-to-dial geometry
//! - [`gesture`]: Drag gesture to value mapping
//! - [`knob`]: Knob instance and interaction state
//! - [`transition`]: Linear value animation

pub mod bank;
pub mod binding;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod knob;
pub mod transition;

pub use bank::KnobBank;
pub use binding::{Binding, SharedValue, ValueBinding};
pub use domain::{KnobRange, KnobSpec};
pub use error::{AppError, Result};
pub use geometry::{ArcTrim, KnobGeometry};
pub use gesture::{DragMapper, Extent, PointerDelta, TwoDimensionalDrag};
pub use knob::Knob;
pub use transition::ValueTransition;
