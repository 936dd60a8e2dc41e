mod button;
mod slider;

pub use button::Button;
pub use slider::Slider;

use macroquad::prelude::{screen_height, screen_width};

pub const WIDGET_WIDTH: f32 = 280.0;
pub const BUTTON_HEIGHT: f32 = 48.0;

/// Selectable speed range for the menu slider, in ticks per second.
pub const SPEED_MIN: u32 = 1;
pub const SPEED_MAX: u32 = 20;

/// X position that centers a standard-width widget.
pub fn widget_x() -> f32 {
    (screen_width() - WIDGET_WIDTH) / 2.0
}

/// Y position of the first menu widget; the rest stack below it.
pub fn menu_top() -> f32 {
    screen_height() * 0.4
}
