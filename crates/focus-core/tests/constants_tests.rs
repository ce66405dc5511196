// Host-side tests for dial constants and their geometric relationships.

use focus_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn dial_scale_divides_into_whole_minutes() {
    assert_eq!(DIAL_MAX_SECONDS % DIAL_STEPS, 0);
    assert_eq!(DIAL_MAX_SECONDS / DIAL_STEPS, 60);
    assert_eq!(FACE_TICK_COUNT as u32, DIAL_STEPS);
    assert_eq!(FACE_TICK_COUNT % FACE_MAJOR_EVERY, 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn face_layout_fits_inside_the_view_box() {
    // Face is drawn in a 0..100 viewBox
    assert!(FACE_CENTER.x - FACE_RADIUS >= 0.0);
    assert!(FACE_CENTER.x + FACE_RADIUS <= 100.0);
    assert!(FACE_CENTER.y - FACE_RADIUS >= 0.0);
    assert!(FACE_CENTER.y + FACE_RADIUS <= 100.0);

    // Labels sit inside the tick ring
    assert!(LABEL_RADIUS < FACE_RADIUS - MAJOR_TICK_LENGTH);
    assert!(MAJOR_TICK_LENGTH > MINOR_TICK_LENGTH);
    assert!(MAJOR_TICK_WIDTH > MINOR_TICK_WIDTH);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn session_constants_are_consistent() {
    assert!(FULL_CIRCLE_GAP > 0.0 && FULL_CIRCLE_GAP < 1.0);
    assert_eq!(CYCLE_TARGET_SECONDS, 5400);
    assert!((FEELING_MIN..=FEELING_MAX).contains(&FEELING_DEFAULT));
    assert!(TICK_INTERVAL_MS > 0);
    assert_ne!(BRIDGE_STORAGE_KEY, CYCLE_STORAGE_KEY);
}
