// Host-side tests for the deadline-based countdown and the focus cycle.

use focus_core::*;
use instant::Instant;
use std::time::Duration;

fn secs(s: f64) -> Duration {
    Duration::from_secs_f64(s)
}

#[test]
fn countdown_ticks_down_and_finishes_once() {
    let t0 = Instant::now();
    let mut c = Countdown::new(3);
    assert!(c.start(t0));
    assert!(c.is_running());

    assert_eq!(c.tick(t0 + secs(1.0)), TickOutcome::Ticked(2));
    assert_eq!(c.tick(t0 + secs(2.0)), TickOutcome::Ticked(1));
    assert_eq!(c.tick(t0 + secs(3.0)), TickOutcome::Finished);
    assert!(!c.is_running());
    assert_eq!(c.remaining_seconds(), 0);
    assert_eq!(c.tick(t0 + secs(4.0)), TickOutcome::Idle);
}

#[test]
fn countdown_tolerates_interval_jitter() {
    let t0 = Instant::now();
    let mut c = Countdown::new(10);
    c.start(t0);
    assert_eq!(c.tick(t0 + secs(0.996)), TickOutcome::Ticked(9));
    assert_eq!(c.tick(t0 + secs(2.004)), TickOutcome::Ticked(8));
    // a late tick catches up instead of drifting
    assert_eq!(c.tick(t0 + secs(6.0)), TickOutcome::Ticked(4));
    assert_eq!(c.tick(t0 + secs(30.0)), TickOutcome::Finished);
}

#[test]
fn countdown_with_nothing_left_does_not_start() {
    let mut c = Countdown::default();
    assert!(!c.start(Instant::now()));
    assert_eq!(c.status(), CountdownStatus::Stopped);
    assert_eq!(c.tick(Instant::now()), TickOutcome::Idle);
}

#[test]
fn pause_holds_remaining_until_resumed() {
    let t0 = Instant::now();
    let mut c = Countdown::new(60);
    c.start(t0);
    c.pause(t0 + secs(20.0));
    assert_eq!(c.status(), CountdownStatus::Paused);
    assert_eq!(c.remaining_seconds(), 40);
    assert_eq!(c.tick(t0 + secs(50.0)), TickOutcome::Idle);

    let t1 = t0 + secs(100.0);
    assert!(c.start(t1));
    assert_eq!(c.tick(t1 + secs(1.0)), TickOutcome::Ticked(39));
}

#[test]
fn reset_restores_initial_duration() {
    let t0 = Instant::now();
    let mut c = Countdown::new(300);
    c.start(t0);
    c.tick(t0 + secs(100.0));
    c.reset();
    assert_eq!(c.remaining_seconds(), 300);
    assert_eq!(c.status(), CountdownStatus::Stopped);

    c.set_duration(120);
    assert_eq!(c.initial_seconds(), 120);
    assert_eq!(c.remaining_seconds(), 120);
}

#[test]
fn adopt_rearms_a_running_countdown() {
    let t0 = Instant::now();
    let mut c = Countdown::new(600);
    c.start(t0);
    c.adopt(900, t0 + secs(5.0));
    assert!(c.is_running());
    assert_eq!(c.initial_seconds(), 900);
    assert_eq!(c.tick(t0 + secs(6.0)), TickOutcome::Ticked(899));

    c.adopt(0, t0 + secs(7.0));
    assert!(!c.is_running());
    assert_eq!(c.tick(t0 + secs(8.0)), TickOutcome::Idle);
}

#[test]
fn adopt_while_stopped_stays_stopped() {
    let mut c = Countdown::default();
    c.adopt(1500, Instant::now());
    assert!(!c.is_running());
    assert_eq!(c.remaining_seconds(), 1500);
}

#[test]
fn focus_cycle_progress_and_label() {
    let mut cycle = FocusCycle::default();
    assert_eq!(cycle.target_seconds(), 5400);
    assert_eq!(cycle.label(), "0/90 min");

    cycle.record(600);
    assert_eq!(cycle.label(), "10/90 min");
    assert!((cycle.progress_percent() - 11.111).abs() < 0.01);
    assert!(!cycle.is_complete());

    cycle.record(5000);
    assert!(cycle.is_complete());
    assert_eq!(cycle.progress_percent(), 100.0);

    cycle.reset();
    assert_eq!(cycle.accumulated_seconds(), 0);
}

#[test]
fn focus_cycle_restore_keeps_default_target() {
    let cycle = FocusCycle::restore(5400);
    assert!(cycle.is_complete());
    assert_eq!(cycle.label(), "90/90 min");
    assert!(!FocusCycle::with_target(0).is_complete());
}
