//! S.T.A.M.P. session guide: Check-in, Tune, Atomic, Momentum.
//!
//! Each phase collects one piece of input before the next one opens. Finishing
//! Momentum hands back the bridge note and starts over at Check-in.

use crate::constants::{FEELING_DEFAULT, FEELING_MAX, FEELING_MIN};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StampPhase {
    CheckIn,
    Tune,
    Atomic,
    Momentum,
}

impl StampPhase {
    pub const ALL: [StampPhase; 4] = [
        StampPhase::CheckIn,
        StampPhase::Tune,
        StampPhase::Atomic,
        StampPhase::Momentum,
    ];

    pub fn index(self) -> usize {
        match self {
            StampPhase::CheckIn => 0,
            StampPhase::Tune => 1,
            StampPhase::Atomic => 2,
            StampPhase::Momentum => 3,
        }
    }

    pub fn next(self) -> StampPhase {
        match self {
            StampPhase::CheckIn => StampPhase::Tune,
            StampPhase::Tune => StampPhase::Atomic,
            StampPhase::Atomic => StampPhase::Momentum,
            StampPhase::Momentum => StampPhase::CheckIn,
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            StampPhase::CheckIn => "CHECK-IN",
            StampPhase::Tune => "TUNE",
            StampPhase::Atomic => "ATOMIC",
            StampPhase::Momentum => "MOMENTUM",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            StampPhase::CheckIn => "System check",
            StampPhase::Tune => "Goal & environment",
            StampPhase::Atomic => "Setup & start",
            StampPhase::Momentum => "Deep work",
        }
    }

    pub fn action_label(self) -> &'static str {
        match self {
            StampPhase::CheckIn => "GET READY",
            StampPhase::Tune => "ON TO ATOMIC",
            StampPhase::Atomic => "ALL SET -> FLOW",
            StampPhase::Momentum => "END SESSION",
        }
    }
}

/// What the user entered for the phase being left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhaseInput {
    CheckIn { feeling: u8 },
    Tune { goal: String },
    Atomic { first_step: String },
    Momentum { bridge: String },
}

impl PhaseInput {
    pub fn phase(&self) -> StampPhase {
        match self {
            PhaseInput::CheckIn { .. } => StampPhase::CheckIn,
            PhaseInput::Tune { .. } => StampPhase::Tune,
            PhaseInput::Atomic { .. } => StampPhase::Atomic,
            PhaseInput::Momentum { .. } => StampPhase::Momentum,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RitualError {
    #[error("feeling must be between 1 and 5, got {0}")]
    FeelingOutOfRange(u8),
    #[error("define a goal for this session")]
    MissingGoal,
    #[error("define the very first, tiny step")]
    MissingAtomicStep,
    #[error("input for {got:?} does not match the current phase {expected:?}")]
    WrongPhase { expected: StampPhase, got: StampPhase },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RitualOutcome {
    Advanced(StampPhase),
    /// Momentum finished. Carries the non-blank bridge note, if any.
    Completed { bridge: Option<String> },
}

pub const GOAL_EXAMPLES: &[&str] = &[
    "Draft the email to X",
    "Fix the header bug",
    "Research for project Y",
    "Sort the meeting notes",
];

pub fn example_goal<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    GOAL_EXAMPLES.choose(rng).copied().unwrap_or("")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StampSession {
    phase: StampPhase,
    feeling: u8,
    goal: String,
    atomic_step: String,
}

impl Default for StampSession {
    fn default() -> Self {
        Self {
            phase: StampPhase::CheckIn,
            feeling: FEELING_DEFAULT,
            goal: String::new(),
            atomic_step: String::new(),
        }
    }
}

impl StampSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> StampPhase {
        self.phase
    }

    pub fn feeling(&self) -> u8 {
        self.feeling
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn atomic_step(&self) -> &str {
        &self.atomic_step
    }

    /// Abandon the current cycle and return to Check-in.
    pub fn restart(&mut self) {
        *self = Self::default();
    }

    /// Validate the input for the current phase and move on. A rejected input
    /// leaves the session untouched.
    pub fn advance(&mut self, input: PhaseInput) -> Result<RitualOutcome, RitualError> {
        if input.phase() != self.phase {
            return Err(RitualError::WrongPhase {
                expected: self.phase,
                got: input.phase(),
            });
        }
        match input {
            PhaseInput::CheckIn { feeling } => {
                if !(FEELING_MIN..=FEELING_MAX).contains(&feeling) {
                    return Err(RitualError::FeelingOutOfRange(feeling));
                }
                self.feeling = feeling;
            }
            PhaseInput::Tune { goal } => {
                let goal = goal.trim();
                if goal.is_empty() {
                    return Err(RitualError::MissingGoal);
                }
                self.goal = goal.to_string();
            }
            PhaseInput::Atomic { first_step } => {
                let step = first_step.trim();
                if step.is_empty() {
                    return Err(RitualError::MissingAtomicStep);
                }
                self.atomic_step = step.to_string();
            }
            PhaseInput::Momentum { bridge } => {
                let bridge = bridge.trim();
                let bridge = (!bridge.is_empty()).then(|| bridge.to_string());
                log::info!(
                    "[stamp] session complete (feeling={}, bridge={})",
                    self.feeling,
                    bridge.is_some()
                );
                self.restart();
                return Ok(RitualOutcome::Completed { bridge });
            }
        }
        self.phase = self.phase.next();
        log::info!("[stamp] entering {}", self.phase.badge());
        Ok(RitualOutcome::Advanced(self.phase))
    }
}
