mod session;
mod worker;

pub use session::GameSession;
pub use worker::{HeadingCell, SimulationWorker};
