//! Deadline-based timers polled from the event loop.
//!
//! Both timers are plain values owned by whoever scheduled them. Cancelling
//! clears the deadline; dropping the owner drops the timer, so nothing can
//! fire after its owner is gone.

use std::time::{Duration, Instant};

/// Repeating timer that fires once per elapsed `period`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    next: Option<Instant>,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    /// Start (or restart) with the first firing one period after `now`
    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.next = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Fire at most once if due, keeping the original cadence
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            Some(deadline) if deadline <= now => {
                self.next = Some(deadline + self.period);
                true
            }
            _ => false,
        }
    }
}

/// Single-shot timer that can be re-armed, superseding any pending deadline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OneShot {
    delay: Duration,
    deadline: Option<Instant>,
}

impl OneShot {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fire if due; a fired timer is disarmed
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_idle_until_started() {
        let mut interval = Interval::new(Duration::from_secs(1));
        let now = Instant::now();
        assert_eq!(interval.deadline(), None);
        assert!(!interval.poll(now + Duration::from_secs(10)));
    }

    #[test]
    fn test_interval_keeps_cadence() {
        let start = Instant::now();
        let mut interval = Interval::new(Duration::from_secs(1));
        interval.start(start);

        assert!(!interval.poll(start + Duration::from_millis(999)));
        assert!(interval.poll(start + Duration::from_millis(1200)));
        assert_eq!(interval.deadline(), Some(start + Duration::from_secs(2)));

        // a late poll catches up one period at a time
        let late = start + Duration::from_millis(3500);
        assert!(interval.poll(late));
        assert!(interval.poll(late));
        assert!(!interval.poll(late));
    }

    #[test]
    fn test_interval_cancel() {
        let start = Instant::now();
        let mut interval = Interval::new(Duration::from_secs(1));
        interval.start(start);
        interval.cancel();
        assert!(!interval.poll(start + Duration::from_secs(5)));
        assert_eq!(interval.deadline(), None);
    }

    #[test]
    fn test_one_shot_fires_once() {
        let start = Instant::now();
        let mut timer = OneShot::new(Duration::from_millis(300));
        timer.arm(start);

        assert!(!timer.poll(start + Duration::from_millis(299)));
        assert!(timer.poll(start + Duration::from_millis(300)));
        assert_eq!(timer.deadline(), None);
        assert!(!timer.poll(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_one_shot_rearm_supersedes() {
        let start = Instant::now();
        let mut timer = OneShot::new(Duration::from_millis(300));
        timer.arm(start);
        timer.arm(start + Duration::from_millis(200));

        assert!(!timer.poll(start + Duration::from_millis(300)));
        assert!(timer.poll(start + Duration::from_millis(500)));
    }

    #[test]
    fn test_one_shot_cancel() {
        let start = Instant::now();
        let mut timer = OneShot::new(Duration::from_millis(300));
        timer.arm(start);
        timer.cancel();
        assert!(!timer.poll(start + Duration::from_secs(1)));
    }
}
