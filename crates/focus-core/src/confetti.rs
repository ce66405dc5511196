//! Celebration particles: spawned in a burst, pulled down by gravity, culled
//! when they fade out or fall off the bottom of the overlay.

use crate::constants::{
    CONFETTI_BURST_COLORS, CONFETTI_FADE_PER_FRAME, CONFETTI_FRAME_SECONDS, CONFETTI_GRAVITY,
    CONFETTI_MAX_FALL_SPEED, CONFETTI_SPRINKLE_COLORS,
};
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Pixels per 60 Hz frame.
    pub velocity: Vec2,
    pub size: f32,
    pub color: &'static str,
    /// 1.0 when spawned; doubles as the paint alpha.
    pub life: f32,
}

/// Particle field sized to the overlay canvas, in CSS pixels.
#[derive(Clone, Debug, Default)]
pub struct Confetti {
    particles: Vec<Particle>,
    size: Vec2,
}

impl Confetti {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            particles: Vec::new(),
            size: Vec2::new(width, height),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Replace whatever is on screen with `count` particles raining in from
    /// up to half a screen above the top edge.
    pub fn burst<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) {
        self.particles.clear();
        let (w, h) = (self.size.x.max(1.0), self.size.y.max(1.0));
        for _ in 0..count {
            self.particles.push(Particle {
                position: Vec2::new(rng.gen_range(0.0..w), rng.gen_range(-0.5 * h..=0.0)),
                velocity: Vec2::new(rng.gen_range(-4.0..4.0), rng.gen_range(2.0..7.0)),
                size: rng.gen_range(2.0..7.0),
                color: pick(rng, &CONFETTI_BURST_COLORS),
                life: 1.0,
            });
        }
        log::debug!("[confetti] burst of {}", count);
    }

    /// A small short-lived puff around `at`, added to what is already flying.
    pub fn sprinkle<R: Rng + ?Sized>(&mut self, rng: &mut R, at: Vec2, count: usize) {
        for _ in 0..count {
            self.particles.push(Particle {
                position: at,
                velocity: Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)),
                size: rng.gen_range(1.0..3.0),
                color: pick(rng, &CONFETTI_SPRINKLE_COLORS),
                life: 0.5,
            });
        }
    }

    /// Advance by `dt` seconds and drop dead particles.
    pub fn step(&mut self, dt: f32) {
        let frames = (dt / CONFETTI_FRAME_SECONDS).max(0.0);
        let floor = self.size.y;
        for p in self.particles.iter_mut() {
            p.position += p.velocity * frames;
            p.velocity.y = (p.velocity.y + CONFETTI_GRAVITY * frames).min(CONFETTI_MAX_FALL_SPEED);
            p.life -= CONFETTI_FADE_PER_FRAME * frames;
        }
        self.particles.retain(|p| p.life > 0.0 && p.position.y <= floor);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Nothing left to paint.
    pub fn is_idle(&self) -> bool {
        self.particles.is_empty()
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, colors: &[&'static str]) -> &'static str {
    colors.choose(rng).copied().unwrap_or("#ffffff")
}
