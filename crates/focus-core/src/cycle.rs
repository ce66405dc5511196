use crate::constants::CYCLE_TARGET_SECONDS;

/// Focused time accumulated toward one ninety-minute cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusCycle {
    accumulated: u32,
    target: u32,
}

impl Default for FocusCycle {
    fn default() -> Self {
        Self::with_target(CYCLE_TARGET_SECONDS)
    }
}

impl FocusCycle {
    pub fn with_target(target_seconds: u32) -> Self {
        Self {
            accumulated: 0,
            target: target_seconds,
        }
    }

    /// Resume from a previously persisted amount.
    pub fn restore(accumulated_seconds: u32) -> Self {
        Self {
            accumulated: accumulated_seconds,
            ..Self::default()
        }
    }

    pub fn record(&mut self, seconds: u32) {
        self.accumulated = self.accumulated.saturating_add(seconds);
    }

    pub fn reset(&mut self) {
        self.accumulated = 0;
    }

    pub fn accumulated_seconds(&self) -> u32 {
        self.accumulated
    }

    pub fn target_seconds(&self) -> u32 {
        self.target
    }

    pub fn is_complete(&self) -> bool {
        self.target > 0 && self.accumulated >= self.target
    }

    pub fn progress_percent(&self) -> f32 {
        if self.target == 0 {
            return 0.0;
        }
        (self.accumulated as f32 / self.target as f32 * 100.0).min(100.0)
    }

    pub fn label(&self) -> String {
        format!("{}/{} min", self.accumulated / 60, self.target / 60)
    }
}
