//! Pointer and clock-face geometry.
//!
//! Angles are measured clockwise from 12 o'clock in screen space, where `y`
//! grows downward. A zero angle points straight up.

use crate::constants::{DIAL_MAX_SECONDS, DIAL_STEPS};
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Host-supplied placement of the dial, in the same space as pointer positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialBounds {
    pub center: Vec2,
    pub radius: f32,
}

impl DialBounds {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Derive bounds from a bounding box (e.g. a client rect).
    pub fn from_rect(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            center: Vec2::new(left + width / 2.0, top + height / 2.0),
            radius: width.min(height).max(0.0) / 2.0,
        }
    }
}

/// Angle from `center` to `pointer`, clockwise from 12 o'clock, in `[0, TAU)`.
///
/// A pointer exactly on the center has no direction and maps to 0.
#[inline]
pub fn pointer_angle(center: Vec2, pointer: Vec2) -> f32 {
    let d = pointer - center;
    if d == Vec2::ZERO {
        return 0.0;
    }
    let mut angle = d.y.atan2(d.x) + FRAC_PI_2;
    if !angle.is_finite() {
        return 0.0;
    }
    if angle < 0.0 {
        angle += TAU;
    }
    if angle >= TAU {
        angle -= TAU;
    }
    angle
}

/// Snap an angle to the nearest whole-minute step and convert it to seconds.
///
/// Snapping up to the last step yields the full sixty minutes.
#[inline]
pub fn angle_to_seconds(angle: f32) -> u32 {
    if !angle.is_finite() {
        return 0;
    }
    let steps = DIAL_STEPS as f64;
    let fraction = (angle as f64 / std::f64::consts::TAU).clamp(0.0, 1.0);
    let snapped = (fraction * steps).round() / steps;
    (snapped * DIAL_MAX_SECONDS as f64).round() as u32
}

/// Sweep of the dial for a number of seconds on the fixed sixty-minute scale.
#[inline]
pub fn seconds_to_angle(seconds: u32) -> f32 {
    let s = seconds.min(DIAL_MAX_SECONDS) as f32;
    s / DIAL_MAX_SECONDS as f32 * TAU
}

/// Point on a circle at a clockwise-from-top angle.
#[inline]
pub fn point_on_circle(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    Vec2::new(center.x + radius * angle.sin(), center.y - radius * angle.cos())
}
