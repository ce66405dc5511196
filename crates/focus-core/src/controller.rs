use crate::checklist::Checklist;
use crate::countdown::{Countdown, TickOutcome};
use crate::cycle::FocusCycle;
use crate::dial::{DialFrame, RadialDial};
use crate::geometry::DialBounds;
use crate::ritual::{PhaseInput, RitualError, RitualOutcome, StampPhase, StampSession};
use glam::Vec2;
use instant::Instant;

/// Downstream effects of the dial, supplied by the host.
///
/// Sound, task completion and persistence live behind this seam so the
/// controller never reaches for globals.
pub trait SessionHooks {
    /// The countdown reached zero. `task` is the task that started it, if any.
    fn countdown_finished(&mut self, _task: Option<&str>) {}
    /// The focus cycle reached its target. Fired once per cycle.
    fn cycle_completed(&mut self) {}
    fn duration_chosen(&mut self, _seconds: u32) {}
    fn ritual_completed(&mut self, _bridge: Option<&str>) {}
    /// A finished task countdown ticked `task_id` off `checklist`.
    fn task_checked(&mut self, _checklist: &Checklist, _task_id: &str) {}
}

/// Hooks that do nothing, for hosts (and tests) that only need the dial.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl SessionHooks for NoHooks {}

/// Owns the dial and everything that drives it.
pub struct FocusController<H: SessionHooks> {
    dial: RadialDial,
    countdown: Countdown,
    cycle: FocusCycle,
    session: StampSession,
    checklist: Checklist,
    active_task: Option<String>,
    cycle_notified: bool,
    hooks: H,
}

impl<H: SessionHooks> FocusController<H> {
    pub fn new(hooks: H) -> Self {
        Self::with_parts(RadialDial::new(), FocusCycle::default(), hooks)
    }

    pub fn with_parts(dial: RadialDial, cycle: FocusCycle, hooks: H) -> Self {
        let cycle_notified = cycle.is_complete();
        Self {
            dial,
            countdown: Countdown::default(),
            cycle,
            session: StampSession::default(),
            checklist: Checklist::default(),
            active_task: None,
            cycle_notified,
            hooks,
        }
    }

    pub fn with_checklist(mut self, checklist: Checklist) -> Self {
        self.checklist = checklist;
        self
    }

    pub fn dial(&self) -> &RadialDial {
        &self.dial
    }

    /// For subscribing extra observers to user-chosen durations.
    pub fn dial_mut(&mut self) -> &mut RadialDial {
        &mut self.dial
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn cycle(&self) -> &FocusCycle {
        &self.cycle
    }

    pub fn session(&self) -> &StampSession {
        &self.session
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    /// For checkbox changes and list edits made in the UI.
    pub fn checklist_mut(&mut self) -> &mut Checklist {
        &mut self.checklist
    }

    pub fn active_task(&self) -> Option<&str> {
        self.active_task.as_deref()
    }

    pub fn frame(&self) -> DialFrame {
        self.dial.frame()
    }

    // ---------------- Pointer ----------------

    pub fn pointer_down(&mut self, pointer: Vec2, bounds: DialBounds, now: Instant) -> DialFrame {
        let frame = self.dial.begin_drag(pointer, bounds);
        self.adopt_user_duration(frame.seconds, now);
        frame
    }

    pub fn pointer_move(
        &mut self,
        pointer: Vec2,
        bounds: DialBounds,
        now: Instant,
    ) -> Option<DialFrame> {
        let frame = self.dial.drag_to(pointer, bounds)?;
        self.adopt_user_duration(frame.seconds, now);
        Some(frame)
    }

    /// Ends the drag. During Momentum a freshly set dial starts counting.
    pub fn pointer_up(&mut self, now: Instant) {
        if !self.dial.is_dragging() {
            return;
        }
        self.dial.end_drag();
        if self.session.phase() == StampPhase::Momentum && !self.countdown.is_running() {
            self.countdown.start(now);
        }
    }

    fn adopt_user_duration(&mut self, seconds: u32, now: Instant) {
        self.countdown.adopt(seconds, now);
        self.hooks.duration_chosen(seconds);
    }

    // ---------------- Countdown ----------------

    pub fn start(&mut self, now: Instant) -> bool {
        self.countdown.start(now)
    }

    pub fn pause(&mut self, now: Instant) {
        self.countdown.pause(now);
    }

    /// Start/pause button. Returns whether the countdown is running afterwards.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.countdown.is_running() {
            self.pause(now);
            false
        } else {
            self.start(now)
        }
    }

    /// Typed-in duration. Stops the countdown and shows the new time;
    /// `None` for zero minutes, which leaves everything as it was.
    pub fn set_duration_minutes(&mut self, minutes: u32) -> Option<DialFrame> {
        if minutes == 0 {
            return None;
        }
        self.countdown.set_duration(minutes.saturating_mul(60));
        Some(self.reset())
    }

    pub fn reset(&mut self) -> DialFrame {
        self.countdown.reset();
        self.active_task = None;
        self.dial.set_seconds(self.countdown.remaining_seconds() as i64)
    }

    /// Start a countdown on behalf of a task; the task is reported back when it ends.
    pub fn start_task(
        &mut self,
        minutes: u32,
        task: impl Into<String>,
        now: Instant,
    ) -> Option<DialFrame> {
        if minutes == 0 {
            return None;
        }
        self.countdown.set_duration(minutes.saturating_mul(60));
        let frame = self.reset();
        self.active_task = Some(task.into());
        self.countdown.start(now);
        Some(frame)
    }

    /// Play button of a checklist task. `None` if the task is unknown or has
    /// no duration.
    pub fn start_checklist_task(&mut self, task_id: &str, now: Instant) -> Option<DialFrame> {
        let minutes = self.checklist.task(task_id)?.duration?;
        log::info!("[checklist] timer for {} ({} min)", task_id, minutes);
        self.start_task(minutes, task_id, now)
    }

    /// One driver tick. Returns a frame when the dial changed.
    pub fn tick(&mut self, now: Instant) -> Option<DialFrame> {
        let outcome = self.countdown.tick(now);
        let frame = match outcome {
            TickOutcome::Idle => return None,
            TickOutcome::Ticked(left) => self.dial.set_seconds(left as i64),
            TickOutcome::Finished => {
                let frame = self.dial.set_seconds(0);
                let task = self.active_task.take();
                self.hooks.countdown_finished(task.as_deref());
                if let Some(id) = task.as_deref() {
                    if self.checklist.auto_check(id) {
                        self.hooks.task_checked(&self.checklist, id);
                    }
                }
                frame
            }
        };
        self.cycle.record(1);
        if self.cycle.is_complete() && !self.cycle_notified {
            self.cycle_notified = true;
            log::info!("[cycle] complete: {}", self.cycle.label());
            self.hooks.cycle_completed();
        }
        Some(frame)
    }

    pub fn reset_cycle(&mut self) {
        self.cycle.reset();
        self.cycle_notified = false;
    }

    // ---------------- Ritual ----------------

    pub fn advance_ritual(&mut self, input: PhaseInput) -> Result<RitualOutcome, RitualError> {
        let outcome = self.session.advance(input)?;
        if let RitualOutcome::Completed { bridge } = &outcome {
            self.hooks.ritual_completed(bridge.as_deref());
            self.clear_dial();
        }
        Ok(outcome)
    }

    pub fn restart_ritual(&mut self) -> DialFrame {
        self.session.restart();
        self.clear_dial()
    }

    // Check-in always starts from an empty dial.
    fn clear_dial(&mut self) -> DialFrame {
        self.countdown.set_duration(0);
        self.active_task = None;
        self.dial.set_seconds(0)
    }
}
