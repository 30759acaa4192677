//! Main application structure
//!
//! Implements the Elm Architecture (TEA) pattern for the knob demo.

use crate::message::Message;
use crate::theme::{colors, font_size, knob_theme, spacing};
use crate::widgets::KnobDial;

use iced::widget::{button, column, container, row, text, Canvas};
use iced::{gradient, window, Alignment, Background, Element, Length, Radians, Subscription, Task, Theme};
use logic_knob::config::Config;
use logic_knob::error::ConfigError;
use logic_knob::{KnobBank, KnobGeometry, TwoDimensionalDrag, ValueTransition};
use std::time::{Duration, Instant};

/// Knobs per row in the grid
const KNOBS_PER_ROW: usize = 2;

/// Main application
pub struct KnobDemo {
    /// Host-owned knob values and the knobs bound to them
    bank: KnobBank,

    /// Drag gesture mapping shared by every knob
    mapper: TwoDimensionalDrag,

    /// Displayed value per knob
    transitions: Vec<ValueTransition>,

    /// Length of value transitions
    animation: Duration,

    /// Value the reset button writes
    reset_value: f32,

    /// Time of the latest update, used to sample transitions in `view`
    now: Instant,
}

impl KnobDemo {
    /// Create the application from a configuration
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` if a knob or the drag settings
    /// fail validation
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let bank = KnobBank::with_initial_values(config.knob_entries()?);
        let mapper = config.drag_mapper()?;
        let transitions = bank.knobs().map(|k| ValueTransition::new(k.value())).collect();

        log::info!(
            "Mounted {} knobs (sensitivity {}x{}, animation {}ms)",
            bank.len(),
            mapper.x_sensitivity(),
            mapper.y_sensitivity(),
            config.animation.duration_ms
        );

        Ok(Self {
            bank,
            mapper,
            transitions,
            animation: config.animation.duration(),
            reset_value: config.reset.value,
            now: Instant::now(),
        })
    }

    /// Update application state based on a message
    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.now = Instant::now();

        match message {
            Message::KnobStarted(index) => match self.bank.knob_mut(index) {
                Ok(knob) => knob.begin_interaction(),
                Err(e) => log::warn!("{}", e),
            },

            Message::KnobDragged {
                index,
                delta,
                extent,
            } => match self.bank.knob(index) {
                Ok(knob) => {
                    let value = knob.drag(&self.mapper, delta, extent);
                    self.animate_to(index, value);
                }
                Err(e) => log::warn!("{}", e),
            },

            Message::KnobEnded(index) => match self.bank.knob_mut(index) {
                Ok(knob) => knob.end_interaction(),
                Err(e) => log::warn!("{}", e),
            },

            Message::ResetValues => {
                self.bank.reset_all(self.reset_value);
                for index in 0..self.bank.len() {
                    if let Ok(value) = self.bank.value(index) {
                        self.animate_to(index, value);
                    }
                }
            }

            Message::Frame(now) => {
                self.now = now;
            }
        }

        Task::none()
    }

    /// Start a transition of the displayed value towards `value`
    fn animate_to(&mut self, index: usize, value: f32) {
        if let Some(transition) = self.transitions.get_mut(index) {
            transition.retarget(value, self.now, self.animation);
        }
    }

    /// Whether any knob is still moving towards its value
    fn is_animating(&self) -> bool {
        self.transitions.iter().any(|t| t.is_animating(self.now))
    }

    /// Render the demo screen
    pub fn view(&self) -> Element<'_, Message> {
        let mut grid = column![].spacing(spacing::MD).align_x(Alignment::Center);
        let mut current_row = row![].spacing(spacing::MD).padding(spacing::MD);

        for (index, knob) in self.bank.knobs().enumerate() {
            let displayed = self
                .transitions
                .get(index)
                .map_or(knob.value(), |t| t.value_at(self.now));
            let geometry = KnobGeometry::compute(knob.spec(), displayed);
            let dial = KnobDial::new(index, knob.display_text(), geometry);

            let canvas: Element<'_, Message> = Canvas::new(dial)
                .width(Length::Fill)
                .height(Length::Fill)
                .into();
            current_row = current_row.push(canvas);

            if (index + 1) % KNOBS_PER_ROW == 0 {
                grid = grid.push(current_row.height(Length::Fill));
                current_row = row![].spacing(spacing::MD).padding(spacing::MD);
            }
        }
        if self.bank.len() % KNOBS_PER_ROW != 0 {
            grid = grid.push(current_row.height(Length::Fill));
        }

        let reset_btn = button(text("Reset Values").size(font_size::BASE))
            .on_press(Message::ResetValues)
            .padding([spacing::SM, spacing::MD])
            .style(reset_button_style);
        grid = grid.push(reset_btn);

        container(grid.padding(spacing::LG))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Gradient(
                    gradient::Linear::new(Radians(std::f32::consts::PI))
                        .add_stop(0.0, colors::BG_GRADIENT_TOP)
                        .add_stop(1.0, colors::BG_GRADIENT_BOTTOM)
                        .into(),
                )),
                ..Default::default()
            })
            .into()
    }

    /// Get theme
    pub fn theme(&self) -> Theme {
        knob_theme()
    }

    /// Get title
    pub fn title(&self) -> String {
        String::from("Custom Knobs")
    }

    /// Redraw every frame while a transition is running
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        }
    }
}

fn reset_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => colors::BUTTON_HOVER,
        _ => colors::BUTTON_BG,
    };
    button::Style {
        background: Some(bg.into()),
        text_color: colors::BUTTON_TEXT,
        border: iced::Border {
            color: colors::BUTTON_HOVER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}
