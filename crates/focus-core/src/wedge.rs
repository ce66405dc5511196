//! The filled pie slice on the dial face and its SVG path.

use crate::constants::{DIAL_MAX_SECONDS, FULL_CIRCLE_GAP};
use crate::geometry::{point_on_circle, seconds_to_angle};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WedgeKind {
    Empty,
    Full,
    Slice {
        end: Vec2,
        sweep: f32,
        large_arc: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
    pub center: Vec2,
    pub radius: f32,
    pub kind: WedgeKind,
}

impl Wedge {
    /// Wedge for a duration on the fixed sixty-minute scale.
    pub fn for_seconds(seconds: u32, center: Vec2, radius: f32) -> Self {
        let kind = if seconds == 0 {
            WedgeKind::Empty
        } else if seconds >= DIAL_MAX_SECONDS {
            WedgeKind::Full
        } else {
            let sweep = seconds_to_angle(seconds);
            WedgeKind::Slice {
                end: point_on_circle(center, radius, sweep),
                sweep,
                // sweep > PI, compared in integers so exactly half never flips
                large_arc: seconds * 2 > DIAL_MAX_SECONDS,
            }
        };
        Self {
            center,
            radius,
            kind,
        }
    }

    pub fn sweep(&self) -> f32 {
        match self.kind {
            WedgeKind::Empty => 0.0,
            WedgeKind::Full => std::f32::consts::TAU,
            WedgeKind::Slice { sweep, .. } => sweep,
        }
    }

    pub fn large_arc(&self) -> bool {
        match self.kind {
            WedgeKind::Empty => false,
            WedgeKind::Full => true,
            WedgeKind::Slice { large_arc, .. } => large_arc,
        }
    }

    /// Path data for an SVG `<path d="…">`. Empty wedges produce an empty string.
    pub fn svg_path(&self) -> String {
        let cx = fmt_coord(self.center.x);
        let cy = fmt_coord(self.center.y);
        let top = fmt_coord(self.center.y - self.radius);
        let r = fmt_coord(self.radius);
        match self.kind {
            WedgeKind::Empty => String::new(),
            WedgeKind::Full => format!(
                "M {cx} {top} A {r} {r} 0 1 1 {} {top} L {cx} {cy} Z",
                fmt_coord(self.center.x - FULL_CIRCLE_GAP)
            ),
            WedgeKind::Slice { end, large_arc, .. } => format!(
                "M {cx} {cy} L {cx} {top} A {r} {r} 0 {} 1 {} {} Z",
                u8::from(large_arc),
                fmt_coord(end.x),
                fmt_coord(end.y)
            ),
        }
    }
}

// Three decimals is well below a pixel at any sane dial size.
fn fmt_coord(v: f32) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        return "0".to_string();
    }
    format!("{r}")
}
