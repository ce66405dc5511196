use std::f32::consts::{FRAC_PI_2, TAU};

/// Sweep of the miniature indicator, relative to the reference duration.
///
/// Angles follow the canvas convention (radians from +x, clockwise on screen),
/// so the sweep starts at `-PI/2`, i.e. 12 o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorFrame {
    pub ratio: f32,
    pub start_angle: f32,
    pub end_angle: f32,
}

impl IndicatorFrame {
    pub fn from_ratio(ratio: f32) -> Self {
        let ratio = if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            ratio,
            start_angle: -FRAC_PI_2,
            end_angle: -FRAC_PI_2 + ratio * TAU,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ratio <= 0.0
    }
}
