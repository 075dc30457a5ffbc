use std::time::Duration;
use crate::MAX_CATCH_UP_TICKS;

/// Turns elapsed wall-clock time into simulation ticks.
///
/// The scheduler never reads a clock itself; the host passes in how much time
/// went by, so the simulation can be driven deterministically in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickScheduler {
    interval: Duration,
    accumulated: Duration,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        TickScheduler {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Drop any partially accumulated time.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }

    /// Feed `dt` and return how many ticks are due. A tick is due once the
    /// accumulated time reaches the interval, so a frame of exactly one
    /// interval fires. At most `MAX_CATCH_UP_TICKS` are released at once;
    /// older backlog is dropped.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }

        self.accumulated += dt;
        let mut ticks = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            ticks += 1;
            if ticks == MAX_CATCH_UP_TICKS {
                if self.accumulated >= self.interval {
                    log::debug!("Scheduler dropping {:?} of backlog", self.accumulated);
                }
                self.accumulated = self.accumulated.min(self.interval - Duration::from_nanos(1));
                break;
            }
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn no_tick_before_interval() {
        let mut s = TickScheduler::new(ms(100));
        assert_eq!(s.advance(ms(40)), 0);
        assert_eq!(s.advance(ms(40)), 0);
        assert_eq!(s.advance(ms(20)), 1);
        assert_eq!(s.advance(ms(99)), 0);
    }

    #[test]
    fn remainder_carries_over() {
        let mut s = TickScheduler::new(ms(100));
        assert_eq!(s.advance(ms(150)), 1);
        assert_eq!(s.advance(ms(50)), 1);
    }

    #[test]
    fn multiple_ticks_in_one_call() {
        let mut s = TickScheduler::new(ms(100));
        assert_eq!(s.advance(ms(320)), 3);
        assert_eq!(s.advance(ms(80)), 1);
    }

    #[test]
    fn backlog_is_capped() {
        let mut s = TickScheduler::new(ms(10));
        assert_eq!(s.advance(Duration::from_secs(5)), MAX_CATCH_UP_TICKS);
        // Remaining backlog was dropped, less than one interval left
        assert_eq!(s.advance(Duration::ZERO), 0);
        assert_eq!(s.advance(ms(10)), 1);
    }

    #[test]
    fn interval_change_and_reset() {
        let mut s = TickScheduler::new(ms(100));
        assert_eq!(s.advance(ms(60)), 0);
        s.set_interval(ms(50));
        assert_eq!(s.advance(Duration::ZERO), 1);
        s.advance(ms(30));
        s.reset();
        assert_eq!(s.advance(ms(30)), 0);
    }

    #[test]
    fn zero_interval_never_ticks() {
        let mut s = TickScheduler::new(Duration::ZERO);
        assert_eq!(s.advance(ms(1000)), 0);
    }
}
