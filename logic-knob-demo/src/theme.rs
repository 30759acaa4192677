//! Theme and color definitions for the knob demo
//!
//! Dark background with a warm red-to-purple wash, grey dials and an
//! orange value arc.

use iced::theme::{Custom, Palette};
use iced::Theme;
use std::sync::Arc;

/// Color definitions
pub mod colors {
    use iced::Color;

    /// Window base behind the gradient
    pub const BG_BASE: Color = Color::BLACK;

    /// Top of the background wash (red at 40% over black)
    pub const BG_GRADIENT_TOP: Color = Color::from_rgb(0.4, 0.0, 0.0);

    /// Bottom of the background wash (purple at 20% over black)
    pub const BG_GRADIENT_BOTTOM: Color = Color::from_rgb(0.1, 0.0, 0.1);

    /// Label and value text (#b3b3b3)
    pub const TEXT_KNOB: Color = Color::from_rgb(0.7, 0.7, 0.7);

    /// Dial body, outer gradient stops
    pub const BODY_OUTER_TOP: Color = Color::from_rgb(0.7, 0.7, 0.7);
    pub const BODY_OUTER_BOTTOM: Color = Color::from_rgb(0.5, 0.5, 0.5);

    /// Dial body, inner gradient stops
    pub const BODY_INNER_TOP: Color = Color::from_rgb(0.6, 0.6, 0.6);
    pub const BODY_INNER_BOTTOM: Color = Color::from_rgb(0.5, 0.5, 0.5);

    /// Drop shadow under the dial body
    pub const BODY_SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.35);

    /// Pointer tick
    pub const POINTER: Color = Color::WHITE;

    /// Background track arc
    pub const TRACK: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);

    /// Value arc (orange)
    pub const PROGRESS: Color = Color::from_rgb(1.0, 0.584, 0.0);

    /// Button background
    pub const BUTTON_BG: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.08);

    /// Button hover background
    pub const BUTTON_HOVER: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.16);

    /// Button text
    pub const BUTTON_TEXT: Color = Color::from_rgb(0.04, 0.52, 1.0);

    /// Return `color` with a different alpha
    pub fn with_alpha(color: Color, alpha: f32) -> Color {
        Color { a: alpha, ..color }
    }
}

/// Create the demo theme
pub fn knob_theme() -> Theme {
    Theme::Custom(Arc::new(Custom::new(
        "logic-knob".to_string(),
        Palette {
            background: colors::BG_BASE,
            text: colors::TEXT_KNOB,
            primary: colors::PROGRESS,
            success: colors::PROGRESS,
            danger: colors::PROGRESS,
        },
    )))
}

/// Spacing constants
pub mod spacing {
    /// Small spacing (8px)
    pub const SM: u16 = 8;
    /// Medium spacing (16px)
    pub const MD: u16 = 16;
    /// Large spacing (24px)
    pub const LG: u16 = 24;
}

/// Font sizes
pub mod font_size {
    /// Base (16px) - Button text
    pub const BASE: u16 = 16;
}
