use super::Heading;

/// A cell coordinate on the grid.
/// Coordinates are signed: the head is allowed to step to -1 or to
/// width/height for exactly one tick before death detection catches it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one cell away in the given heading.
    /// Screen coordinates: y grows downward, so Up decrements y.
    pub const fn stepped(self, heading: Heading) -> Self {
        match heading {
            Heading::Up => Self::new(self.x, self.y - 1),
            Heading::Right => Self::new(self.x + 1, self.y),
            Heading::Down => Self::new(self.x, self.y + 1),
            Heading::Left => Self::new(self.x - 1, self.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepped_moves_one_cell() {
        let p = Position::new(5, 5);
        assert_eq!(p.stepped(Heading::Up), Position::new(5, 4));
        assert_eq!(p.stepped(Heading::Right), Position::new(6, 5));
        assert_eq!(p.stepped(Heading::Down), Position::new(5, 6));
        assert_eq!(p.stepped(Heading::Left), Position::new(4, 5));
    }

    #[test]
    fn test_stepped_can_leave_the_grid() {
        assert_eq!(Position::new(0, 0).stepped(Heading::Left), Position::new(-1, 0));
        assert_eq!(Position::new(0, 0).stepped(Heading::Up), Position::new(0, -1));
    }
}
