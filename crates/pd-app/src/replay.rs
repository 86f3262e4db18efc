//! Looping replay over the periods of one granularity.

use crate::timer::Timer;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayState {
    Idle,
    Running { cursor: usize, len: usize },
}

/// Steps a cursor through a sequence on a fixed interval, forever.
///
/// The scheduler only holds the cursor; the sequence itself stays with the
/// caller, which renders the record at each index this yields.
pub struct ReplayScheduler<T: Timer> {
    timer: T,
    interval: Duration,
    state: ReplayState,
}

impl<T: Timer> ReplayScheduler<T> {
    pub fn new(timer: T, interval: Duration) -> Self {
        Self {
            timer,
            interval,
            state: ReplayState::Idle,
        }
    }

    pub fn state(&self) -> ReplayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, ReplayState::Running { .. })
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Begin replaying a sequence of `len` records from the start.
    ///
    /// An empty sequence leaves the scheduler idle with no timer armed.
    pub fn start(&mut self, len: usize) {
        self.cancel();
        if len == 0 {
            tracing::debug!("replay not started: empty sequence");
            return;
        }
        self.timer.arm(self.interval);
        self.state = ReplayState::Running { cursor: 0, len };
        tracing::debug!(len, "replay started");
    }

    /// Same as [`start`](Self::start); used when the granularity changes.
    pub fn restart(&mut self, len: usize) {
        self.start(len);
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
        self.state = ReplayState::Idle;
    }

    /// Advance one step and return the index to render.
    ///
    /// Past the end the cursor wraps to zero, so the cycle is exactly `len` ticks.
    pub fn tick(&mut self) -> Option<usize> {
        let ReplayState::Running { cursor, len } = &mut self.state else {
            return None;
        };
        if *cursor >= *len {
            *cursor = 0;
        }
        let index = *cursor;
        *cursor += 1;
        Some(index)
    }

    /// Run every tick that came due since the last poll; returns the index of the latest one.
    pub fn poll(&mut self) -> Option<usize> {
        let due = self.timer.poll();
        let mut latest = None;
        for _ in 0..due {
            latest = self.tick().or(latest);
        }
        latest
    }

    pub fn time_until_next_tick(&self) -> Option<Duration> {
        if self.is_running() {
            self.timer.remaining()
        } else {
            None
        }
    }
}
