//! Fixed-interval tick pacing
//!
//! Stand-in for the windowing toolkit's frame clock: `wait` blocks until the
//! tick interval has elapsed since the previous wait, `hold` blocks for a
//! whole number of ticks. The unpaced constructor makes both free, for tests
//! and headless runs.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    next_deadline: Option<Instant>,
    paced: bool,
}

impl FrameClock {
    /// Real-time clock at the given tick rate
    pub fn new(tick_rate: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / tick_rate.max(1),
            next_deadline: None,
            paced: true,
        }
    }

    /// Clock that never sleeps
    pub fn unpaced(tick_rate: u32) -> Self {
        Self {
            paced: false,
            ..Self::new(tick_rate)
        }
    }

    /// Block until the fixed tick interval has elapsed since the previous tick
    pub fn wait(&mut self) {
        if !self.paced {
            return;
        }
        let now = Instant::now();
        let deadline = self.next_deadline.unwrap_or(now);
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        // Anchor to the deadline, not the wakeup time, so drift cannot
        // accumulate across ticks
        self.next_deadline = Some(deadline.max(now) + self.interval);
    }

    /// Block for a whole number of ticks (outcome banner hold)
    pub fn hold(&mut self, ticks: u32) {
        if !self.paced {
            return;
        }
        std::thread::sleep(self.interval * ticks);
        self.next_deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaced_never_blocks() {
        let mut clock = FrameClock::unpaced(60);
        let start = Instant::now();
        for _ in 0..1000 {
            clock.wait();
        }
        clock.hold(60);
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn test_paced_wait_spans_the_interval() {
        // 250 Hz keeps the test fast; two waits must span at least one interval
        let mut clock = FrameClock::new(250);
        let start = Instant::now();
        clock.wait();
        clock.wait();
        assert!(start.elapsed() >= Duration::from_millis(4));
    }
}
