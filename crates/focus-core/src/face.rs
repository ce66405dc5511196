use crate::constants::{
    FACE_CENTER, FACE_MAJOR_EVERY, FACE_RADIUS, FACE_TICK_COUNT, LABEL_RADIUS, MAJOR_TICK_LENGTH,
    MAJOR_TICK_WIDTH, MINOR_TICK_LENGTH, MINOR_TICK_WIDTH,
};
use crate::geometry::point_on_circle;
use glam::Vec2;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMark {
    pub minute: u32,
    pub major: bool,
    pub inner: Vec2,
    pub outer: Vec2,
    pub stroke_width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceLabel {
    pub minutes: u32,
    pub position: Vec2,
}

/// Static description of the dial face: a minute ring and five-minute labels.
///
/// Built once per view; nothing here changes while the dial is in use.
#[derive(Clone, Debug)]
pub struct ClockFace {
    center: Vec2,
    radius: f32,
    ticks: Vec<TickMark>,
    labels: Vec<FaceLabel>,
}

impl Default for ClockFace {
    fn default() -> Self {
        Self::new(FACE_CENTER, FACE_RADIUS)
    }
}

impl ClockFace {
    pub fn new(center: Vec2, radius: f32) -> Self {
        let scale = radius / FACE_RADIUS;
        let step = TAU / FACE_TICK_COUNT as f32;

        let ticks = (0..FACE_TICK_COUNT)
            .map(|i| {
                let angle = i as f32 * step;
                let major = i % FACE_MAJOR_EVERY == 0;
                let (length, width) = if major {
                    (MAJOR_TICK_LENGTH, MAJOR_TICK_WIDTH)
                } else {
                    (MINOR_TICK_LENGTH, MINOR_TICK_WIDTH)
                };
                TickMark {
                    minute: i as u32,
                    major,
                    inner: point_on_circle(center, radius - length * scale, angle),
                    outer: point_on_circle(center, radius, angle),
                    stroke_width: width * scale,
                }
            })
            .collect();

        let labels = (0..FACE_TICK_COUNT)
            .step_by(FACE_MAJOR_EVERY)
            .map(|i| FaceLabel {
                minutes: i as u32,
                position: point_on_circle(center, LABEL_RADIUS * scale, i as f32 * step),
            })
            .collect();

        Self {
            center,
            radius,
            ticks,
            labels,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn ticks(&self) -> &[TickMark] {
        &self.ticks
    }

    pub fn labels(&self) -> &[FaceLabel] {
        &self.labels
    }
}
