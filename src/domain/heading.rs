/// Heading is the direction the snake moves in on each tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    /// The 180° reverse of this heading.
    /// A requested change to the opposite heading is never applied,
    /// otherwise the head would step straight into the first body segment.
    pub const fn opposite(self) -> Self {
        match self {
            Heading::Up => Heading::Down,
            Heading::Right => Heading::Left,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
        }
    }
}
