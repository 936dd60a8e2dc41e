use macroquad::prelude::*;

const TRACK_HEIGHT: f32 = 6.0;
const KNOB_RADIUS: f32 = 12.0;

/// Horizontal slider over an integer range, used on the menu screen to pick
/// the initial ticks-per-second.
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    label: String,
    min: u32,
    max: u32,
    value: u32,
    dragging: bool,
}

impl Slider {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, min: u32, max: u32, initial: u32) -> Self {
        Self {
            x,
            y,
            width,
            label: label.into(),
            min,
            max,
            value: initial.clamp(min, max),
            dragging: false,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Handle this frame's mouse interaction; returns true when the value
    /// changed.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if is_mouse_button_pressed(MouseButton::Left) && self.is_hovered(mouse_pos) {
            self.dragging = true;
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }
        if !self.dragging {
            return false;
        }

        let fraction = ((mouse_pos.0 - self.x) / self.width).clamp(0.0, 1.0);
        let span = (self.max - self.min) as f32;
        let new_value = self.min + (fraction * span).round() as u32;
        if new_value != self.value {
            self.value = new_value;
            return true;
        }
        false
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(
            &format!("{}: {}", self.label, self.value),
            self.x,
            self.y - 12.0,
            18.0,
            WHITE,
        );

        // Track with the filled portion up to the knob.
        let track_y = self.y + KNOB_RADIUS - TRACK_HEIGHT / 2.0;
        draw_rectangle(self.x, track_y, self.width, TRACK_HEIGHT, Color::from_rgba(40, 40, 40, 255));
        let fraction = (self.value - self.min) as f32 / (self.max - self.min) as f32;
        draw_rectangle(
            self.x,
            track_y,
            self.width * fraction,
            TRACK_HEIGHT,
            Color::from_rgba(70, 130, 180, 255),
        );

        let knob_x = self.x + self.width * fraction;
        let knob_color = if self.dragging || self.is_hovered(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            WHITE
        };
        draw_circle(knob_x, self.y + KNOB_RADIUS, KNOB_RADIUS, knob_color);
    }

    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x - KNOB_RADIUS
            && mouse_pos.0 <= self.x + self.width + KNOB_RADIUS
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + KNOB_RADIUS * 2.0
    }
}
