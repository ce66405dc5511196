// Host-side tests for the confetti particle field.

use focus_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

const EPS: f32 = 1e-4;

fn frames(field: &mut Confetti, n: usize) {
    for _ in 0..n {
        field.step(CONFETTI_FRAME_SECONDS);
    }
}

#[test]
fn burst_spawns_requested_count_above_the_top_edge() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut field = Confetti::new(800.0, 600.0);
    field.burst(&mut rng, CONFETTI_BURST_COUNT);

    assert_eq!(field.particles().len(), CONFETTI_BURST_COUNT);
    for p in field.particles() {
        assert!((0.0..800.0).contains(&p.position.x));
        assert!((-300.0..=0.0).contains(&p.position.y));
        assert!(p.velocity.y >= 2.0);
        assert_eq!(p.life, 1.0);
        assert!(CONFETTI_BURST_COLORS.contains(&p.color));
    }
}

#[test]
fn burst_replaces_what_is_still_flying() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut field = Confetti::new(800.0, 600.0);
    field.burst(&mut rng, 30);
    field.sprinkle(&mut rng, Vec2::new(10.0, 10.0), 5);
    assert_eq!(field.particles().len(), 35);

    field.burst(&mut rng, 12);
    assert_eq!(field.particles().len(), 12);
}

#[test]
fn same_seed_gives_same_burst() {
    let mut a = Confetti::new(400.0, 300.0);
    let mut b = Confetti::new(400.0, 300.0);
    a.burst(&mut StdRng::seed_from_u64(9), 20);
    b.burst(&mut StdRng::seed_from_u64(9), 20);
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn one_frame_moves_then_applies_gravity_and_fade() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = Confetti::new(100.0, 10_000.0);
    let at = Vec2::new(50.0, 50.0);
    field.sprinkle(&mut rng, at, 1);
    let before = field.particles()[0].clone();

    field.step(CONFETTI_FRAME_SECONDS);
    let after = &field.particles()[0];
    assert!((after.position - (at + before.velocity)).length() < EPS);
    assert!((after.velocity.y - (before.velocity.y + CONFETTI_GRAVITY)).abs() < EPS);
    assert!((after.velocity.x - before.velocity.x).abs() < EPS);
    assert!((after.life - (0.5 - CONFETTI_FADE_PER_FRAME)).abs() < EPS);
}

#[test]
fn particles_below_the_bottom_edge_are_culled() {
    let mut rng = StdRng::seed_from_u64(5);
    // starts at most 10px above the top, falls at least 2px per frame
    let mut field = Confetti::new(100.0, 20.0);
    field.burst(&mut rng, 50);
    frames(&mut field, 16);
    assert!(field.is_idle());
}

#[test]
fn faded_particles_are_culled() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut field = Confetti::new(100.0, 10_000.0);
    field.sprinkle(&mut rng, Vec2::new(50.0, 50.0), CONFETTI_SPRINKLE_COUNT);

    frames(&mut field, 49);
    assert_eq!(field.particles().len(), CONFETTI_SPRINKLE_COUNT);
    frames(&mut field, 3);
    assert!(field.is_idle());
}

#[test]
fn full_burst_is_gone_once_life_runs_out() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut field = Confetti::new(1920.0, 1_000_000.0);
    field.burst(&mut rng, CONFETTI_BURST_COUNT);
    frames(&mut field, 99);
    assert!(!field.is_idle());
    frames(&mut field, 2);
    assert!(field.is_idle());
}

#[test]
fn resize_tracks_the_overlay() {
    let mut field = Confetti::default();
    field.resize(1280.0, 720.0);
    assert_eq!(field.size(), Vec2::new(1280.0, 720.0));
    assert!(field.is_idle());
}
