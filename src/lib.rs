// Domain layer - the engine-agnostic simulation
pub mod domain;

// Application layer - session coordination and the worker thread
pub mod application;

// Infrastructure layer - rendering, input, menu UI
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{GameSession, HeadingCell, SimulationWorker};
pub use domain::{Grid, GridSimulation, Heading, Position, Snapshot};
