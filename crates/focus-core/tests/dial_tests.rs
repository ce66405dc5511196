// Host-side tests for the radial duration picker: pointer math, wedge path,
// readout and the reference-relative miniature indicator.

use focus_core::*;
use glam::Vec2;
use std::cell::RefCell;
use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::rc::Rc;

fn bounds() -> DialBounds {
    DialBounds::new(Vec2::new(50.0, 50.0), 48.0)
}

fn pointer_at_minutes(minutes: f32) -> Vec2 {
    point_on_circle(bounds().center, 40.0, minutes / 60.0 * TAU)
}

#[test]
fn set_seconds_reads_back_within_range() {
    let mut dial = RadialDial::new();
    for s in [0, 1, 59, 60, 125, 1799, 1800, 1801, 3599, 3600] {
        dial.set_seconds(s);
        assert_eq!(dial.current_seconds(), s as u32);
    }
}

#[test]
fn set_seconds_clamps_out_of_range() {
    let mut dial = RadialDial::new();
    dial.set_seconds(-5);
    assert_eq!(dial.current_seconds(), 0);
    dial.set_seconds(3601);
    assert_eq!(dial.current_seconds(), 3600);
    dial.set_seconds(i64::MAX);
    assert_eq!(dial.current_seconds(), 3600);
    dial.set_seconds(i64::MIN);
    assert_eq!(dial.current_seconds(), 0);
}

#[test]
fn readout_is_zero_padded_minutes_and_seconds() {
    assert_eq!(format_mm_ss(125), "02:05");
    assert_eq!(format_mm_ss(3600), "60:00");
    assert_eq!(format_mm_ss(0), "00:00");
    assert_eq!(format_mm_ss(59), "00:59");

    let mut dial = RadialDial::new();
    assert_eq!(dial.set_seconds(125).readout, "02:05");
}

#[test]
fn large_arc_flag_flips_only_past_half() {
    let c = bounds().center;
    assert!(!Wedge::for_seconds(1, c, 48.0).large_arc());
    assert!(!Wedge::for_seconds(900, c, 48.0).large_arc());
    assert!(!Wedge::for_seconds(1800, c, 48.0).large_arc());
    assert!(Wedge::for_seconds(1801, c, 48.0).large_arc());
    assert!(Wedge::for_seconds(3599, c, 48.0).large_arc());
}

#[test]
fn wedge_path_for_quarter_and_three_quarters() {
    let c = bounds().center;
    assert_eq!(
        Wedge::for_seconds(900, c, 48.0).svg_path(),
        "M 50 50 L 50 2 A 48 48 0 0 1 98 50 Z"
    );
    assert_eq!(
        Wedge::for_seconds(2700, c, 48.0).svg_path(),
        "M 50 50 L 50 2 A 48 48 0 1 1 2 50 Z"
    );
}

#[test]
fn wedge_edge_cases_empty_and_full() {
    let c = bounds().center;
    let empty = Wedge::for_seconds(0, c, 48.0);
    assert_eq!(empty.kind, WedgeKind::Empty);
    assert_eq!(empty.svg_path(), "");

    let full = Wedge::for_seconds(3600, c, 48.0);
    assert_eq!(full.kind, WedgeKind::Full);
    assert_eq!(full.svg_path(), "M 50 2 A 48 48 0 1 1 49.99 2 L 50 50 Z");
}

#[test]
fn pointer_snaps_to_nearest_minute() {
    let mut dial = RadialDial::new();
    let frame = dial.on_pointer_interaction(pointer_at_minutes(29.4), bounds());
    assert_eq!(frame.seconds, 1740);

    let frame = dial.on_pointer_interaction(pointer_at_minutes(29.6), bounds());
    assert_eq!(frame.seconds, 1800);
}

#[test]
fn pointer_cardinal_directions() {
    let b = bounds();
    assert_eq!(angle_to_seconds(pointer_angle(b.center, Vec2::new(50.0, 10.0))), 0);
    assert_eq!(angle_to_seconds(pointer_angle(b.center, Vec2::new(90.0, 50.0))), 900);
    assert_eq!(angle_to_seconds(pointer_angle(b.center, Vec2::new(50.0, 90.0))), 1800);
    assert_eq!(angle_to_seconds(pointer_angle(b.center, Vec2::new(10.0, 50.0))), 2700);
}

#[test]
fn pointer_at_center_is_zero_not_nan() {
    let b = bounds();
    let angle = pointer_angle(b.center, b.center);
    assert_eq!(angle, 0.0);

    let mut dial = RadialDial::new();
    let frame = dial.on_pointer_interaction(b.center, b);
    assert_eq!(frame.seconds, 0);
    assert_eq!(frame.reference_seconds, 0);
    assert_eq!(frame.indicator.ratio, 0.0);
}

#[test]
fn pointer_just_left_of_noon_wraps_to_sixty_minutes() {
    let b = bounds();
    let angle = pointer_angle(b.center, Vec2::new(49.9, 10.0));
    assert!(angle > 6.0 && angle < TAU, "angle {angle}");

    let mut dial = RadialDial::new();
    let frame = dial.on_pointer_interaction(Vec2::new(49.9, 10.0), b);
    assert_eq!(frame.seconds, 3600);
    assert_eq!(frame.readout, "60:00");
    assert_eq!(frame.wedge.kind, WedgeKind::Full);
}

#[test]
fn pointer_angle_stays_in_range() {
    let c = bounds().center;
    for i in 0..360 {
        let p = point_on_circle(c, 30.0, i as f32 / 360.0 * TAU);
        let a = pointer_angle(c, p);
        assert!((0.0..TAU).contains(&a), "angle {a} out of range at {i}");
    }
}

#[test]
fn bounds_from_rect_uses_center_and_short_side() {
    let b = DialBounds::from_rect(10.0, 20.0, 200.0, 100.0);
    assert_eq!(b.center, Vec2::new(110.0, 70.0));
    assert_eq!(b.radius, 50.0);
}

#[test]
fn miniature_fill_is_relative_to_reference() {
    let mut dial = RadialDial::new();
    dial.on_pointer_interaction(pointer_at_minutes(10.0), bounds());
    assert_eq!(dial.reference_seconds(), 600);

    let frame = dial.set_seconds(300);
    assert_eq!(frame.indicator.ratio, 0.5);
    assert!((frame.indicator.start_angle + FRAC_PI_2).abs() < 1e-6);
    assert!((frame.indicator.end_angle - FRAC_PI_2).abs() < 1e-5);
}

#[test]
fn miniature_is_empty_without_reference() {
    let dial = RadialDial::new();
    let frame = dial.frame();
    assert!(frame.indicator.is_empty());
    assert_eq!(frame.indicator.ratio, 0.0);
}

#[test]
fn ticking_above_reference_raises_it() {
    let mut dial = RadialDial::new();
    dial.on_pointer_interaction(pointer_at_minutes(5.0), bounds());
    assert_eq!(dial.reference_seconds(), 300);

    let frame = dial.set_seconds(1200);
    assert_eq!(frame.reference_seconds, 1200);
    assert_eq!(frame.indicator.ratio, 1.0);

    dial.set_seconds(600);
    assert_eq!(dial.reference_seconds(), 1200);
}

#[test]
fn set_seconds_is_idempotent() {
    let mut once = RadialDial::new();
    let a = once.set_seconds(1337);

    let mut twice = RadialDial::new();
    twice.set_seconds(1337);
    let b = twice.set_seconds(1337);

    assert_eq!(a, b);
    assert_eq!(once.state(), twice.state());
}

#[test]
fn drag_moves_only_count_while_dragging() {
    let mut dial = RadialDial::new();
    assert!(dial.drag_to(Vec2::new(90.0, 50.0), bounds()).is_none());
    assert_eq!(dial.current_seconds(), 0);

    dial.begin_drag(Vec2::new(90.0, 50.0), bounds());
    assert!(dial.is_dragging());
    let frame = dial.drag_to(Vec2::new(50.0, 90.0), bounds());
    assert_eq!(frame.map(|f| f.seconds), Some(1800));

    dial.end_drag();
    assert!(!dial.is_dragging());
    assert!(dial.drag_to(Vec2::new(10.0, 50.0), bounds()).is_none());
    assert_eq!(dial.current_seconds(), 1800);
}

#[test]
fn subscribers_hear_user_changes_only() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut dial = RadialDial::new();
    let sink = seen.clone();
    let id = dial.subscribe(move |s| sink.borrow_mut().push(s));

    dial.on_pointer_interaction(Vec2::new(90.0, 50.0), bounds());
    dial.set_seconds(100);
    dial.on_pointer_interaction(Vec2::new(50.0, 90.0), bounds());
    assert_eq!(*seen.borrow(), vec![900, 1800]);

    assert!(dial.unsubscribe(id));
    assert!(!dial.unsubscribe(id));
    dial.on_pointer_interaction(Vec2::new(10.0, 50.0), bounds());
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn subject_notifies_in_subscription_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut subject = DurationSubject::new();
    let ids: Vec<_> = ["a", "b", "c"]
        .into_iter()
        .map(|tag| {
            let o = order.clone();
            subject.subscribe(move |s| o.borrow_mut().push(format!("{tag}{s}")))
        })
        .collect();
    subject.notify(7);
    assert_eq!(*order.borrow(), vec!["a7", "b7", "c7"]);

    assert!(subject.unsubscribe(ids[1]));
    subject.notify(8);
    assert_eq!(order.borrow()[3..], ["a8", "c8"]);
}

#[test]
fn clock_face_has_sixty_ticks_and_twelve_labels() {
    let face = ClockFace::default();
    assert_eq!(face.ticks().len(), 60);
    assert_eq!(face.ticks().iter().filter(|t| t.major).count(), 12);

    let minutes: Vec<u32> = face.labels().iter().map(|l| l.minutes).collect();
    assert_eq!(minutes, (0..60).step_by(5).collect::<Vec<_>>());

    let first = face.ticks()[0];
    assert!(first.major);
    assert!((first.outer - Vec2::new(50.0, 2.0)).length() < 1e-4);
    assert!((first.inner - Vec2::new(50.0, 6.0)).length() < 1e-4);

    let minor = face.ticks()[1];
    assert!(!minor.major);
    assert!(minor.stroke_width < first.stroke_width);

    let zero = face.labels()[0].position;
    assert!((zero - Vec2::new(50.0, 14.0)).length() < 1e-4);
}

#[test]
fn drag_to_three_oclock_then_tick_to_half() {
    let mut dial = RadialDial::new();

    let frame = dial.on_pointer_interaction(Vec2::new(90.0, 50.0), bounds());
    assert_eq!(frame.seconds, 900);
    assert_eq!(frame.reference_seconds, 900);
    assert_eq!(frame.readout, "15:00");
    assert!(!frame.wedge.large_arc());
    assert!((frame.wedge.sweep() - FRAC_PI_2).abs() < 1e-5);

    let frame = dial.set_seconds(450);
    assert_eq!(frame.readout, "07:30");
    assert_eq!(frame.indicator.ratio, 0.5);
    assert!((frame.wedge.sweep() - PI / 4.0).abs() < 1e-5);
    assert!(!frame.wedge.large_arc());
    assert_eq!(dial.reference_seconds(), 900);
}
