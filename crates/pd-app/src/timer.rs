//! Clock and interval timer primitives for the replay loop.
//!
//! Time is a [`Duration`] since an arbitrary origin so tests can drive a
//! [`ManualClock`] instead of waiting on the wall clock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock: Send {
    fn now(&self) -> Duration;
}

/// Wall clock measured from construction.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock advanced by hand. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `by`, saturating at `u64::MAX` nanoseconds.
    pub fn advance(&self, by: Duration) {
        let by = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        // The closure always returns `Some`, so the update cannot fail.
        let _ = self
            .nanos
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |now| {
                Some(now.saturating_add(by))
            });
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
    }
}

/// A single repeating timer.
///
/// Callers must `cancel` before `arm`; arming a live timer is a logic error.
pub trait Timer: Send {
    fn arm(&mut self, interval: Duration);
    fn cancel(&mut self);
    fn is_armed(&self) -> bool;
    /// Number of intervals that elapsed since the last poll.
    fn poll(&mut self) -> u32;
    /// Time left before the next interval elapses, if armed.
    fn remaining(&self) -> Option<Duration>;
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    interval: Duration,
    next_due: Duration,
}

/// [`Timer`] driven by a [`Clock`].
#[derive(Debug)]
pub struct ClockTimer<C: Clock> {
    clock: C,
    armed: Option<Armed>,
}

impl<C: Clock> ClockTimer<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, armed: None }
    }
}

impl<C: Clock> Timer for ClockTimer<C> {
    fn arm(&mut self, interval: Duration) {
        debug_assert!(self.armed.is_none(), "timer armed twice without cancel");
        let interval = interval.max(Duration::from_millis(1));
        self.armed = Some(Armed {
            interval,
            next_due: self.clock.now() + interval,
        });
    }

    fn cancel(&mut self) {
        self.armed = None;
    }

    fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    fn poll(&mut self) -> u32 {
        let Some(armed) = self.armed.as_mut() else {
            return 0;
        };
        let now = self.clock.now();
        let mut fired = 0;
        while armed.next_due <= now {
            armed.next_due += armed.interval;
            fired += 1;
        }
        fired
    }

    fn remaining(&self) -> Option<Duration> {
        let armed = self.armed.as_ref()?;
        Some(armed.next_due.saturating_sub(self.clock.now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let clock = ManualClock::new();
        let mut timer = ClockTimer::new(clock.clone());
        timer.arm(Duration::from_secs(1));

        clock.advance(Duration::from_millis(999));
        assert_eq!(timer.poll(), 0);
        clock.advance(Duration::from_millis(1));
        assert_eq!(timer.poll(), 1);
        clock.advance(Duration::from_millis(3500));
        assert_eq!(timer.poll(), 3);
        assert_eq!(timer.remaining(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn cancelled_timer_is_silent() {
        let clock = ManualClock::new();
        let mut timer = ClockTimer::new(clock.clone());
        timer.arm(Duration::from_secs(1));
        timer.cancel();
        clock.advance(Duration::from_secs(10));
        assert_eq!(timer.poll(), 0);
        assert!(!timer.is_armed());
        assert_eq!(timer.remaining(), None);
    }

    #[test]
    fn manual_clock_saturates() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_secs(5));
        clock.advance(Duration::MAX);
        assert_eq!(clock.now(), Duration::from_nanos(u64::MAX));
        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.now(), Duration::from_nanos(u64::MAX));
    }
}
