use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::domain::{now_millis, GridSimulation, Heading, Snapshot};

const EMPTY: u8 = u8::MAX;

/// One-slot atomic mailbox for heading requests. The input context writes,
/// the simulation loop drains; a newer request simply overwrites an older
/// one, since only the latest swipe matters. No queue, no locking.
pub struct HeadingCell(AtomicU8);

impl HeadingCell {
    pub const fn new() -> Self {
        Self(AtomicU8::new(EMPTY))
    }

    pub fn store(&self, heading: Heading) {
        self.0.store(encode(heading), Ordering::Release);
    }

    /// Drain the cell: returns the latest stored heading, leaving it empty.
    pub fn take(&self) -> Option<Heading> {
        decode(self.0.swap(EMPTY, Ordering::Acquire))
    }
}

impl Default for HeadingCell {
    fn default() -> Self {
        Self::new()
    }
}

const fn encode(heading: Heading) -> u8 {
    match heading {
        Heading::Up => 0,
        Heading::Right => 1,
        Heading::Down => 2,
        Heading::Left => 3,
    }
}

const fn decode(value: u8) -> Option<Heading> {
    match value {
        0 => Some(Heading::Up),
        1 => Some(Heading::Right),
        2 => Some(Heading::Down),
        3 => Some(Heading::Left),
        _ => None,
    }
}

/// State shared between the simulation thread and its owner: the latest
/// published snapshot for the renderer and the heading mailbox for input.
struct SharedView {
    snapshot: Mutex<Snapshot>,
    heading: HeadingCell,
}

/// SimulationWorker runs a GridSimulation on one dedicated thread: drain the
/// heading mailbox, check the tick clock, update, publish a fresh snapshot.
/// The simulation itself stays single-threaded; only snapshots and heading
/// requests cross the boundary.
///
/// Stopping is cooperative: `stop` raises a flag, joins the thread, and
/// hands the simulation back so a paused game can be resumed with a new
/// `start` call. No update runs after `stop` returns.
pub struct SimulationWorker {
    stop: Arc<AtomicBool>,
    shared: Arc<SharedView>,
    handle: Option<JoinHandle<GridSimulation>>,
}

impl SimulationWorker {
    pub fn start(mut sim: GridSimulation) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let shared = Arc::new(SharedView {
            snapshot: Mutex::new(sim.snapshot()),
            heading: HeadingCell::new(),
        });

        let handle = thread::spawn({
            let stop = Arc::clone(&stop);
            let shared = Arc::clone(&shared);
            move || {
                while !stop.load(Ordering::Acquire) {
                    if let Some(heading) = shared.heading.take() {
                        sim.request_heading_change(heading);
                    }
                    if sim.tick_due(now_millis()) {
                        sim.update();
                        *shared.snapshot.lock().unwrap() = sim.snapshot();
                    }
                    // Idle briefly between polls instead of spinning flat out.
                    thread::sleep(Duration::from_millis(1));
                }
                sim
            }
        });

        Self {
            stop,
            shared,
            handle: Some(handle),
        }
    }

    /// Forward a heading request to the simulation thread. Applied on its
    /// next update; latest request wins.
    pub fn request_heading_change(&self, heading: Heading) {
        self.shared.heading.store(heading);
    }

    /// The most recently published renderable state.
    pub fn latest_snapshot(&self) -> Snapshot {
        self.shared.snapshot.lock().unwrap().clone()
    }

    /// Signal the loop to finish its in-flight tick, join the thread, and
    /// return the simulation for a later resume.
    pub fn stop(mut self) -> GridSimulation {
        self.signal_and_join().unwrap()
    }

    fn signal_and_join(&mut self) -> Option<GridSimulation> {
        self.stop.store(true, Ordering::Release);
        self.handle.take().map(|handle| handle.join().unwrap())
    }
}

impl Drop for SimulationWorker {
    fn drop(&mut self) {
        self.signal_and_join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Grid;

    #[test]
    fn test_heading_cell_starts_empty() {
        assert_eq!(HeadingCell::new().take(), None);
    }

    #[test]
    fn test_heading_cell_take_drains() {
        let cell = HeadingCell::new();
        cell.store(Heading::Up);
        assert_eq!(cell.take(), Some(Heading::Up));
        assert_eq!(cell.take(), None);
    }

    #[test]
    fn test_heading_cell_latest_wins() {
        let cell = HeadingCell::new();
        cell.store(Heading::Up);
        cell.store(Heading::Left);
        assert_eq!(cell.take(), Some(Heading::Left));
    }

    #[test]
    fn test_worker_runs_and_hands_back_simulation() {
        let sim = GridSimulation::new(Grid::new(10, 10), 1000);
        let worker = SimulationWorker::start(sim);
        thread::sleep(Duration::from_millis(30));

        let snapshot = worker.latest_snapshot();
        assert!(!snapshot.segments.is_empty());

        let sim = worker.stop();
        // The returned simulation is intact and usable after the join.
        assert!(!sim.snapshot().segments.is_empty());
    }

    #[test]
    fn test_stopped_worker_publishes_nothing_further() {
        let sim = GridSimulation::new(Grid::new(10, 10), 1000);
        let worker = SimulationWorker::start(sim);
        thread::sleep(Duration::from_millis(10));
        let shared = Arc::clone(&worker.shared);
        worker.stop();

        let before = shared.snapshot.lock().unwrap().segments.clone();
        thread::sleep(Duration::from_millis(20));
        let after = shared.snapshot.lock().unwrap().segments.clone();
        assert_eq!(before, after);
    }
}
