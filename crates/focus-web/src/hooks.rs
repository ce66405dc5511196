use crate::confetti::SharedConfetti;
use crate::{audio, checklist_view, dom, ritual_view, storage};
use focus_core::{Checklist, SessionHooks};
use web_sys as web;

/// Browser side effects of the focus controller.
pub struct WebHooks {
    pub document: web::Document,
    pub confetti: Option<SharedConfetti>,
}

impl WebHooks {
    fn celebrate(&self) {
        if let Some(confetti) = &self.confetti {
            confetti.borrow_mut().burst();
        }
    }
}

impl SessionHooks for WebHooks {
    fn countdown_finished(&mut self, task: Option<&str>) {
        log::info!("[countdown] finished (task={:?})", task);
        audio::play(audio::FINISHED_CHIME);
        ritual_view::show_time_up(&self.document);
        dom::focus(&self.document, ritual_view::BRIDGE_INPUT_ID);
    }

    fn cycle_completed(&mut self) {
        dom::set_text(
            &self.document,
            ritual_view::CYCLE_TEXT_ID,
            ritual_view::CYCLE_COMPLETE_TEXT,
        );
        audio::play(audio::COMPLETED_CHIME);
    }

    fn duration_chosen(&mut self, seconds: u32) {
        log::debug!("[dial] user chose {}s", seconds);
    }

    fn ritual_completed(&mut self, bridge: Option<&str>) {
        if let Some(bridge) = bridge {
            storage::save_bridge(bridge);
        }
        audio::play(audio::COMPLETED_CHIME);
        self.celebrate();
    }

    fn task_checked(&mut self, checklist: &Checklist, task_id: &str) {
        log::info!("[checklist] {} done by timer", task_id);
        storage::save_checklist_state(checklist);
        checklist_view::render(&self.document, checklist);
        self.celebrate();
    }
}
