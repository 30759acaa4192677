//! Application message definitions
//!
//! Flat message set following The Elm Architecture.

use logic_knob::{Extent, PointerDelta};
use std::time::Instant;

/// Top-level application messages
#[derive(Debug, Clone)]
pub enum Message {
    // === Knob interaction ===
    /// Pointer pressed on a knob
    KnobStarted(usize),

    /// Pointer moved while a knob is held
    KnobDragged {
        index: usize,
        delta: PointerDelta,
        extent: Extent,
    },

    /// Pointer released after dragging a knob
    KnobEnded(usize),

    // === Actions ===
    /// Reset every knob to the configured reset value
    ResetValues,

    // === Animation ===
    /// Redraw tick while a value transition is running
    Frame(Instant),
}
