//! Custom canvas widgets for the knob demo

mod knob_dial;

pub use knob_dial::KnobDial;
