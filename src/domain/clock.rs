use std::sync::OnceLock;
use std::time::Instant;

const MILLIS_PER_SECOND: u64 = 1000;

/// Milliseconds since the first call in this process. Monotonic, shared by
/// every simulation loop so pacing survives a worker being stopped and
/// restarted.
pub fn now_millis() -> u64 {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_millis() as u64
}

/// TickClock gates the simulation to a fixed number of ticks per second.
/// It tracks the timestamp at which the next tick is due; each granted tick
/// schedules the following one a full interval after "now".
#[derive(Clone, Copy, Debug)]
pub struct TickClock {
    interval_millis: u64,
    next_due_millis: u64,
}

impl TickClock {
    /// Ticks per second is clamped to a minimum of 1 so the interval
    /// division can never be by zero.
    pub fn new(ticks_per_second: u32) -> Self {
        let ticks_per_second = ticks_per_second.max(1) as u64;
        Self {
            interval_millis: MILLIS_PER_SECOND / ticks_per_second,
            next_due_millis: 0,
        }
    }

    /// True at most once per interval. Stateful: a true result schedules the
    /// next due time at `now_millis + interval`.
    pub fn tick_due(&mut self, now_millis: u64) -> bool {
        if self.next_due_millis <= now_millis {
            self.next_due_millis = now_millis + self.interval_millis;
            return true;
        }
        false
    }

    /// Make the next `tick_due` call fire regardless of when the previous
    /// tick ran. Used on every game reset so a fresh game (or a resumed one)
    /// catches up immediately instead of waiting out a stale interval.
    pub fn force_due(&mut self) {
        self.next_due_millis = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_once_per_interval() {
        let mut clock = TickClock::new(10); // 100ms interval
        assert!(clock.tick_due(1000));
        assert!(!clock.tick_due(1050)); // same interval
        assert!(clock.tick_due(1100)); // interval elapsed
    }

    #[test]
    fn test_schedules_from_grant_time() {
        let mut clock = TickClock::new(10);
        assert!(clock.tick_due(1000));
        // Late check: next due is measured from the granting call, not from
        // some ideal schedule.
        assert!(clock.tick_due(1250));
        assert!(!clock.tick_due(1340));
        assert!(clock.tick_due(1350));
    }

    #[test]
    fn test_speed_clamped_to_one() {
        let mut clock = TickClock::new(0);
        assert!(clock.tick_due(0));
        assert!(!clock.tick_due(999));
        assert!(clock.tick_due(1000));
    }

    #[test]
    fn test_force_due() {
        let mut clock = TickClock::new(1);
        assert!(clock.tick_due(5000));
        assert!(!clock.tick_due(5001));
        clock.force_due();
        assert!(clock.tick_due(5002));
    }
}
