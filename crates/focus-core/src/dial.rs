use crate::face::ClockFace;
use crate::geometry::{angle_to_seconds, pointer_angle, DialBounds};
use crate::indicator::IndicatorFrame;
use crate::readout::format_mm_ss;
use crate::state::DurationState;
use crate::subject::{DurationSubject, SubscriptionId};
use crate::wedge::Wedge;
use glam::Vec2;

/// Everything a host needs to paint one dial state.
#[derive(Clone, Debug, PartialEq)]
pub struct DialFrame {
    pub seconds: u32,
    pub reference_seconds: u32,
    pub wedge: Wedge,
    pub readout: String,
    pub indicator: IndicatorFrame,
}

/// Radial duration picker: pointer angle in, wedge/readout/indicator out.
///
/// Holds no timers. A countdown owned elsewhere pushes values in through
/// [`RadialDial::set_seconds`]; user drags are published through the subject.
#[derive(Debug, Default)]
pub struct RadialDial {
    face: ClockFace,
    state: DurationState,
    subject: DurationSubject,
    dragging: bool,
}

impl RadialDial {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_face(face: ClockFace) -> Self {
        Self {
            face,
            ..Self::default()
        }
    }

    pub fn face(&self) -> &ClockFace {
        &self.face
    }

    pub fn state(&self) -> DurationState {
        self.state
    }

    pub fn current_seconds(&self) -> u32 {
        self.state.current_seconds()
    }

    pub fn reference_seconds(&self) -> u32 {
        self.state.reference_seconds()
    }

    pub fn subscribe(&mut self, observer: impl FnMut(u32) + 'static) -> SubscriptionId {
        self.subject.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subject.unsubscribe(id)
    }

    /// Out-of-range input is clamped silently.
    pub fn set_seconds(&mut self, seconds: i64) -> DialFrame {
        self.state.set_seconds(seconds);
        self.frame()
    }

    /// Apply one pointer position. Always redefines the reference duration and
    /// notifies subscribers, even if the snapped value did not change.
    pub fn on_pointer_interaction(&mut self, pointer: Vec2, bounds: DialBounds) -> DialFrame {
        let angle = pointer_angle(bounds.center, pointer);
        let seconds = angle_to_seconds(angle);
        self.state.set_by_user(seconds as i64);
        log::debug!("[dial] pointer angle={:.3} -> {}s", angle, seconds);
        self.subject.notify(self.state.current_seconds());
        self.frame()
    }

    pub fn begin_drag(&mut self, pointer: Vec2, bounds: DialBounds) -> DialFrame {
        self.dragging = true;
        self.on_pointer_interaction(pointer, bounds)
    }

    /// Pointer moves only count while a drag is active.
    pub fn drag_to(&mut self, pointer: Vec2, bounds: DialBounds) -> Option<DialFrame> {
        if !self.dragging {
            return None;
        }
        Some(self.on_pointer_interaction(pointer, bounds))
    }

    pub fn end_drag(&mut self) {
        if self.dragging {
            log::info!("[dial] drag ended at {}s", self.state.current_seconds());
        }
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn frame(&self) -> DialFrame {
        let seconds = self.state.current_seconds();
        DialFrame {
            seconds,
            reference_seconds: self.state.reference_seconds(),
            wedge: Wedge::for_seconds(seconds, self.face.center(), self.face.radius()),
            readout: format_mm_ss(seconds),
            indicator: IndicatorFrame::from_ratio(self.state.reference_ratio()),
        }
    }
}
