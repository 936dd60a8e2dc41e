mod clock;
mod grid;
mod heading;
mod position;
mod simulation;

pub use clock::{now_millis, TickClock};
pub use grid::{Grid, GRID_COLUMNS};
pub use heading::Heading;
pub use position::Position;
pub use simulation::{GridSimulation, Snapshot};
