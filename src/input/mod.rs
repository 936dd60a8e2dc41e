use macroquad::prelude::*;

use crate::domain::Heading;

/// Minimum drag distance in pixels before a gesture counts as a swipe;
/// anything shorter is treated as a tap and ignored.
pub const SWIPE_THRESHOLD: f32 = 24.0;

/// Resolve a press-to-release delta into a heading along its dominant axis.
/// Screen coordinates, so a downward drag means Heading::Down. Ties go to
/// the vertical axis.
pub fn resolve_swipe(dx: f32, dy: f32) -> Option<Heading> {
    if dx.abs() < SWIPE_THRESHOLD && dy.abs() < SWIPE_THRESHOLD {
        return None;
    }
    let heading = if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Heading::Right
        } else {
            Heading::Left
        }
    } else if dy > 0.0 {
        Heading::Down
    } else {
        Heading::Up
    };
    Some(heading)
}

/// Tracks an in-progress drag (touch or left mouse button) across frames
/// and reports a heading once the gesture completes.
pub struct SwipeTracker {
    press: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self { press: None }
    }

    /// Poll this frame's input for a completed swipe.
    pub fn poll(&mut self) -> Option<Heading> {
        for touch in touches() {
            match touch.phase {
                TouchPhase::Started => {
                    self.press = Some((touch.position.x, touch.position.y));
                }
                TouchPhase::Ended => {
                    if let Some((px, py)) = self.press.take() {
                        return resolve_swipe(touch.position.x - px, touch.position.y - py);
                    }
                }
                _ => {}
            }
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            self.press = Some(mouse_position());
        } else if is_mouse_button_released(MouseButton::Left) {
            if let Some((px, py)) = self.press.take() {
                let (mx, my) = mouse_position();
                return resolve_swipe(mx - px, my - py);
            }
        }

        None
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Arrow keys as the desktop stand-in for swipe gestures.
pub fn poll_arrow_keys() -> Option<Heading> {
    if is_key_pressed(KeyCode::Up) {
        Some(Heading::Up)
    } else if is_key_pressed(KeyCode::Right) {
        Some(Heading::Right)
    } else if is_key_pressed(KeyCode::Down) {
        Some(Heading::Down)
    } else if is_key_pressed(KeyCode::Left) {
        Some(Heading::Left)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_drags_are_ignored() {
        assert_eq!(resolve_swipe(10.0, 5.0), None);
        assert_eq!(resolve_swipe(-23.9, 0.0), None);
    }

    #[test]
    fn test_dominant_axis_wins() {
        assert_eq!(resolve_swipe(100.0, 30.0), Some(Heading::Right));
        assert_eq!(resolve_swipe(-100.0, 30.0), Some(Heading::Left));
        assert_eq!(resolve_swipe(30.0, 100.0), Some(Heading::Down));
        assert_eq!(resolve_swipe(30.0, -100.0), Some(Heading::Up));
    }

    #[test]
    fn test_equal_axes_resolve_vertically() {
        assert_eq!(resolve_swipe(50.0, 50.0), Some(Heading::Down));
        assert_eq!(resolve_swipe(50.0, -50.0), Some(Heading::Up));
    }
}
