//! Deadline-based countdown that drives the dial once per tick.
//!
//! The remaining time is always derived from a wall-clock deadline, so a late
//! or skipped tick never makes the countdown drift.

use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownStatus {
    Stopped,
    Running { deadline: Instant },
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing to push to the dial.
    Idle,
    Ticked(u32),
    /// Reached zero on this tick. Reported exactly once per run.
    Finished,
}

#[derive(Clone, Debug)]
pub struct Countdown {
    status: CountdownStatus,
    remaining: u32,
    initial: u32,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Countdown {
    pub fn new(initial_seconds: u32) -> Self {
        Self {
            status: CountdownStatus::Stopped,
            remaining: initial_seconds,
            initial: initial_seconds,
        }
    }

    pub fn status(&self) -> CountdownStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        matches!(self.status, CountdownStatus::Running { .. })
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    pub fn initial_seconds(&self) -> u32 {
        self.initial
    }

    /// Start or resume. Returns false if there is nothing left to count.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.status = CountdownStatus::Running {
            deadline: now + Duration::from_secs(self.remaining as u64),
        };
        log::info!("[countdown] running with {}s left", self.remaining);
        true
    }

    pub fn pause(&mut self, now: Instant) {
        if let CountdownStatus::Running { deadline } = self.status {
            self.remaining = seconds_left(deadline, now);
            self.status = CountdownStatus::Paused;
            log::info!("[countdown] paused at {}s", self.remaining);
        }
    }

    pub fn reset(&mut self) {
        self.status = CountdownStatus::Stopped;
        self.remaining = self.initial;
    }

    /// Set a new initial duration and stop.
    pub fn set_duration(&mut self, seconds: u32) {
        self.initial = seconds;
        self.reset();
    }

    /// Take over a duration the user picked on the dial. A running countdown
    /// keeps running from the new value; zero stops it.
    pub fn adopt(&mut self, seconds: u32, now: Instant) {
        self.initial = seconds;
        self.remaining = seconds;
        if self.is_running() {
            if seconds == 0 {
                self.status = CountdownStatus::Stopped;
            } else {
                self.start(now);
            }
        }
    }

    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let CountdownStatus::Running { deadline } = self.status else {
            return TickOutcome::Idle;
        };
        let left = seconds_left(deadline, now);
        self.remaining = left;
        if left == 0 {
            self.status = CountdownStatus::Stopped;
            log::info!("[countdown] finished");
            return TickOutcome::Finished;
        }
        TickOutcome::Ticked(left)
    }
}

// Rounded rather than ceiled: interval callbacks jitter both ways around the second.
fn seconds_left(deadline: Instant, now: Instant) -> u32 {
    if deadline <= now {
        return 0;
    }
    let left = deadline.duration_since(now);
    (left.as_millis() as f64 / 1000.0).round() as u32
}
