use crate::application::SimulationWorker;
use crate::domain::{Grid, GridSimulation, Heading, Snapshot};

enum SessionState {
    Running(SimulationWorker),
    Paused(GridSimulation),
}

/// GameSession coordinates one play session: it derives the grid from the
/// screen size, owns the simulation via its worker thread, and handles the
/// pause/resume lifecycle (stop-and-join on pause, fresh worker on resume).
pub struct GameSession {
    block_size: f32,
    state: SessionState,
}

impl GameSession {
    /// Start playing immediately at the requested speed (ticks per second,
    /// clamped to at least 1 by the simulation).
    pub fn start(screen_width: f32, screen_height: f32, ticks_per_second: u32) -> Self {
        let (grid, block_size) = Grid::fit_to_screen(screen_width, screen_height);
        let sim = GridSimulation::new(grid, ticks_per_second);
        Self {
            block_size,
            state: SessionState::Running(SimulationWorker::start(sim)),
        }
    }

    /// Cell edge length in pixels, for the renderer.
    pub fn block_size(&self) -> f32 {
        self.block_size
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.state, SessionState::Paused(_))
    }

    /// Stop the worker (joining its thread) and park the simulation, or
    /// hand the parked simulation to a new worker. The forced-due clock
    /// reset in the simulation makes the first resumed tick fire at once.
    pub fn toggle_paused(&mut self) {
        // Throwaway parked sim so the real state can be moved out.
        let placeholder = SessionState::Paused(GridSimulation::new(Grid::new(3, 3), 1));
        self.state = match std::mem::replace(&mut self.state, placeholder) {
            SessionState::Running(worker) => SessionState::Paused(worker.stop()),
            SessionState::Paused(sim) => SessionState::Running(SimulationWorker::start(sim)),
        };
    }

    /// Forward a swipe or key press. Dropped while paused: once the game
    /// thread is joined there is nothing to apply it.
    pub fn request_heading_change(&self, heading: Heading) {
        if let SessionState::Running(worker) = &self.state {
            worker.request_heading_change(heading);
        }
    }

    /// Latest renderable state, whether running or paused.
    pub fn snapshot(&self) -> Snapshot {
        match &self.state {
            SessionState::Running(worker) => worker.latest_snapshot(),
            SessionState::Paused(sim) => sim.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;

    #[test]
    fn test_start_derives_grid_from_screen() {
        let session = GameSession::start(1080.0, 1920.0, 5);
        assert_eq!(session.block_size(), 27.0);
        // Snake starts at the center row of the 40x71 grid and heads right;
        // the worker may have ticked already, so only the row is exact.
        let snapshot = session.snapshot();
        assert_eq!(snapshot.segments[0].y, 35);
        assert!(snapshot.segments[0].x >= 20);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut session = GameSession::start(400.0, 400.0, 1);
        assert!(!session.is_paused());

        session.toggle_paused();
        assert!(session.is_paused());
        let frozen = session.snapshot();
        assert!(!frozen.segments.is_empty());

        session.toggle_paused();
        assert!(!session.is_paused());
    }
}
