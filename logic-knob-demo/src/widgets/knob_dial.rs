//! Rotary knob widget
//!
//! Canvas program that draws a knob from its precomputed geometry and
//! reports drags as pointer deltas. Turning deltas into values is left to
//! the application, which owns the knob values.

use crate::message::Message;
use crate::theme::colors;

use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::canvas::{self, event, gradient, Event, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Radians, Rectangle, Renderer, Size, Theme, Vector};
use logic_knob::{Extent, KnobGeometry, PointerDelta};

/// Label height as a fraction of the widget's smaller side
const TEXT_SIZE_RATIO: f32 = 0.16;
/// Arc diameter as a fraction of the dial side
const ARC_DIAMETER_RATIO: f32 = 0.8;
/// Dial body scale relative to the dial side
const BODY_SCALE: f32 = 0.6;

/// Knob widget
pub struct KnobDial {
    index: usize,
    text: String,
    geometry: KnobGeometry,
}

/// Drag state for the knob widget
#[derive(Debug, Clone, Default)]
pub struct DialState {
    /// Last cursor position (window coordinates) while the button is held
    last_position: Option<Point>,
}

impl KnobDial {
    /// Create a knob widget for the knob at `index`
    pub fn new(index: usize, text: String, geometry: KnobGeometry) -> Self {
        Self {
            index,
            text,
            geometry,
        }
    }

    /// Split the bounds into a text band and a square dial area
    ///
    /// Returns `(text_size, dial_center, dial_side)`.
    fn layout(size: Size) -> (f32, Point, f32) {
        let dim = size.width.min(size.height);
        let text_size = dim * TEXT_SIZE_RATIO;
        let text_band = text_size * 1.6;

        let dial_side = size.width.min(size.height - text_band).max(0.0);
        let center = Point::new(size.width / 2.0, text_band + (size.height - text_band) / 2.0);
        (text_size, center, dial_side)
    }
}

impl canvas::Program<Message> for KnobDial {
    type State = DialState;

    fn update(
        &self,
        state: &mut Self::State,
        event: Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        let Event::Mouse(mouse_event) = event else {
            return (event::Status::Ignored, None);
        };

        match mouse_event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                if let Some(position) = cursor.position_over(bounds) {
                    state.last_position = Some(position);
                    return (
                        event::Status::Captured,
                        Some(Message::KnobStarted(self.index)),
                    );
                }
            }
            mouse::Event::CursorMoved { position } => {
                // Keep tracking outside the bounds until the button is released
                if let Some(last) = state.last_position.replace(position) {
                    let moved = position - last;
                    let message = Message::KnobDragged {
                        index: self.index,
                        delta: PointerDelta::new(moved.x, moved.y),
                        extent: Extent::new(bounds.width, bounds.height),
                    };
                    return (event::Status::Captured, Some(message));
                }
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                if state.last_position.take().is_some() {
                    return (event::Status::Captured, Some(Message::KnobEnded(self.index)));
                }
            }
            _ => {}
        }

        (event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let (text_size, center, side) = Self::layout(bounds.size());

        // Label, or the value while dragging
        frame.fill_text(Text {
            content: self.text.clone(),
            position: Point::new(center.x, text_size * 0.8),
            color: colors::TEXT_KNOB,
            size: text_size.into(),
            horizontal_alignment: Horizontal::Center,
            vertical_alignment: Vertical::Center,
            ..Text::default()
        });

        if side <= 0.0 {
            return vec![frame.into_geometry()];
        }

        draw_body(&mut frame, center, side, self.geometry.pointer_canvas_angle());

        let arc_radius = side * ARC_DIAMETER_RATIO / 2.0;

        // Background track
        let (track_start, track_end) = self.geometry.track_canvas_angles();
        draw_arc(
            &mut frame,
            center,
            arc_radius,
            track_start,
            track_end,
            side / 16.0,
            colors::TRACK,
        );

        // Value arc
        let (start, end) = self.geometry.progress_canvas_angles();
        draw_arc(
            &mut frame,
            center,
            arc_radius,
            start,
            end,
            side / 20.0,
            colors::PROGRESS,
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.last_position.is_some() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Draw the glossy dial body and its pointer tick
fn draw_body(frame: &mut Frame, center: Point, side: f32, pointer_angle: f32) {
    let radius = side * BODY_SCALE / 2.0;

    // Soft drop shadow
    let shadow = Path::circle(center + Vector::new(0.0, radius * 0.08), radius * 1.06);
    frame.fill(&shadow, colors::BODY_SHADOW);

    // Outer shell, light at the top
    let outer = Path::circle(center, radius);
    frame.fill(
        &outer,
        vertical_gradient(center, radius, colors::BODY_OUTER_TOP, colors::BODY_OUTER_BOTTOM),
    );

    // Inner face, inset and nudged down for a bevel
    let inset = radius * 0.04;
    let inner_radius = radius - inset;
    let inner_center = center + Vector::new(0.0, inset);
    let inner = Path::circle(inner_center, inner_radius);
    frame.fill(
        &inner,
        vertical_gradient(
            inner_center,
            inner_radius,
            colors::BODY_INNER_TOP,
            colors::BODY_INNER_BOTTOM,
        ),
    );

    // Pointer tick from inside the face out towards the rim
    let direction = Vector::new(pointer_angle.cos(), pointer_angle.sin());
    let tick = Path::line(
        center + direction * (radius * 0.45),
        center + direction * (radius * 0.92),
    );
    frame.stroke(
        &tick,
        Stroke::default()
            .with_width((side / 40.0).max(1.0))
            .with_color(colors::POINTER),
    );

    // Highlight along the top edge
    draw_arc(
        frame,
        center,
        radius - inset * 2.0,
        200.0_f32.to_radians(),
        340.0_f32.to_radians(),
        (side / 80.0).max(1.0),
        colors::with_alpha(Color::WHITE, 0.25),
    );
}

/// Top-to-bottom linear gradient across a circle
fn vertical_gradient(center: Point, radius: f32, top: Color, bottom: Color) -> canvas::Gradient {
    canvas::Gradient::Linear(
        gradient::Linear::new(
            Point::new(center.x, center.y - radius),
            Point::new(center.x, center.y + radius),
        )
        .add_stop(0.0, top)
        .add_stop(1.0, bottom),
    )
}

/// Draw an arc with round caps
fn draw_arc(
    frame: &mut Frame,
    center: Point,
    radius: f32,
    start: f32,
    end: f32,
    width: f32,
    color: Color,
) {
    let arc = Path::new(|builder| {
        builder.arc(canvas::path::Arc {
            center,
            radius,
            start_angle: Radians(start),
            end_angle: Radians(end),
        });
    });

    frame.stroke(
        &arc,
        Stroke::default()
            .with_width(width)
            .with_color(color)
            .with_line_cap(canvas::LineCap::Round),
    );
}
