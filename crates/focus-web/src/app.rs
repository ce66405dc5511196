use crate::confetti::SharedConfetti;
use crate::hooks::WebHooks;
use crate::render::{self, DialView};
use crate::{checklist_view, controls, dom, ritual_view, storage};
use focus_core::{example_goal, DialFrame, FocusController};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type SharedController = Rc<RefCell<FocusController<WebHooks>>>;

/// Handles shared by every event closure and the tick loop.
#[derive(Clone)]
pub struct AppContext {
    pub document: web::Document,
    pub controller: SharedController,
    pub view: Rc<DialView>,
    pub rng: Rc<RefCell<StdRng>>,
    pub confetti: Option<SharedConfetti>,
}

impl AppContext {
    pub fn paint(&self, frame: &DialFrame) {
        render::apply_frame(&self.document, &self.view, frame);
    }

    pub fn paint_current(&self) {
        let frame = self.controller.borrow().frame();
        self.paint(&frame);
    }

    pub fn render_ritual(&self) {
        let bridge = storage::load_bridge();
        let example = example_goal(&mut *self.rng.borrow_mut());
        let ctl = self.controller.borrow();
        ritual_view::render(&self.document, ctl.session(), bridge.as_deref(), example);
    }

    pub fn refresh_cycle(&self) {
        let ctl = self.controller.borrow();
        let cycle = ctl.cycle();
        let text = if cycle.is_complete() {
            ritual_view::CYCLE_COMPLETE_TEXT.to_string()
        } else {
            cycle.label()
        };
        dom::set_text(&self.document, ritual_view::CYCLE_TEXT_ID, &text);
        controls::set_bar_width(&self.document, controls::CYCLE_BAR_ID, cycle.progress_percent());
    }

    pub fn sync_controls(&self) {
        controls::sync(&self.document, self.controller.borrow().countdown());
    }

    pub fn render_checklist(&self) {
        checklist_view::render(&self.document, self.controller.borrow().checklist());
    }
}
