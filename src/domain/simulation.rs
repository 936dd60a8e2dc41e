use rand::Rng;

use super::{Grid, Heading, Position, TickClock};

/// GridSimulation owns the whole game state: the snake body, the food, the
/// score, the heading, and the tick pacing. It is strictly single-threaded;
/// callers wanting background execution wrap it in a
/// [`SimulationWorker`](crate::application::SimulationWorker).
pub struct GridSimulation {
    grid: Grid,
    snake: Vec<Position>,
    heading: Heading,
    /// Latest not-yet-applied heading request. One slot only: a newer request
    /// overwrites an older one, since only the most recent swipe matters.
    pending_heading: Option<Heading>,
    food: Position,
    score: u32,
    clock: TickClock,
}

/// Read-only view of the renderable state, cloned out of the simulation so
/// no mutable internals escape and the value can cross a thread boundary.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub segments: Vec<Position>,
    pub food: Position,
    pub score: u32,
}

impl GridSimulation {
    /// Callers must pass a grid of at least 3x3 cells; smaller grids leave
    /// no interior for the food to spawn in.
    pub fn new(grid: Grid, ticks_per_second: u32) -> Self {
        let mut sim = Self {
            grid,
            snake: Vec::new(),
            heading: Heading::Right,
            pending_heading: None,
            food: Position::new(0, 0),
            score: 0,
            clock: TickClock::new(ticks_per_second),
        };
        sim.new_game();
        sim
    }

    /// Buffer a heading change to be applied on the next `update`.
    /// Overwrites any previously buffered request.
    pub fn request_heading_change(&mut self, heading: Heading) {
        self.pending_heading = Some(heading);
    }

    /// True when the pacing interval has elapsed; drives the caller's
    /// decision to run `update`. See [`TickClock::tick_due`].
    pub fn tick_due(&mut self, now_millis: u64) -> bool {
        self.clock.tick_due(now_millis)
    }

    /// Advance the simulation by exactly one tick: apply the buffered
    /// heading, eat if the head sits on the food, move the snake, then check
    /// for death. Death is not an error; it resets the game in place.
    pub fn update(&mut self) {
        self.apply_pending_heading();

        if self.head() == self.food {
            self.eat_food();
        }

        self.advance_snake();

        if self.detect_death() {
            self.new_game();
        }
    }

    /// Reset to the starting state: a single segment at the grid center,
    /// heading right, score zero, fresh food, and the clock forced due so
    /// the next `tick_due` check fires immediately.
    pub fn new_game(&mut self) {
        self.snake.clear();
        self.snake.push(self.grid.center());
        self.heading = Heading::Right;
        self.pending_heading = None;
        self.food = self.spawn_food();
        self.score = 0;
        self.clock.force_due();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            segments: self.snake.clone(),
            food: self.food,
            score: self.score,
        }
    }

    pub const fn grid(&self) -> Grid {
        self.grid
    }

    pub const fn heading(&self) -> Heading {
        self.heading
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    fn head(&self) -> Position {
        self.snake[0]
    }

    /// A buffered request that is the exact reverse of the current heading
    /// is dropped silently. Checking at apply time (rather than at request
    /// time) means two quick swipes within one tick still cannot turn the
    /// snake into itself.
    fn apply_pending_heading(&mut self) {
        if let Some(requested) = self.pending_heading.take() {
            if requested != self.heading.opposite() {
                self.heading = requested;
            }
        }
    }

    /// Grow by duplicating the tail segment in place: the new segment sits
    /// atop the old tail for one tick and separates as the body moves on.
    fn eat_food(&mut self) {
        let tail = self.snake[self.snake.len() - 1];
        self.snake.push(tail);
        self.food = self.spawn_food();
        self.score += 1;
    }

    /// Shift the body tail-first so each segment reads its predecessor's
    /// position before that position is overwritten, then step the head one
    /// cell along the current heading.
    fn advance_snake(&mut self) {
        for i in (1..self.snake.len()).rev() {
            self.snake[i] = self.snake[i - 1];
        }
        self.snake[0] = self.snake[0].stepped(self.heading);
    }

    /// Dead when the head has left the grid or landed on any body segment.
    /// Only meaningful immediately after `advance_snake`.
    fn detect_death(&self) -> bool {
        let head = self.head();
        !self.grid.contains(head) || self.snake[1..].contains(&head)
    }

    /// Food spawns uniformly in [1, width-1) x [1, height-1). The inset —
    /// skipping both the zero edge and the last interior column/row — is
    /// inherited behavior, kept verbatim.
    fn spawn_food(&self) -> Position {
        let mut rng = rand::rng();
        Position::new(
            rng.random_range(1..self.grid.width() - 1),
            rng.random_range(1..self.grid.height() - 1),
        )
    }
}
