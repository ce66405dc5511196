#![cfg(target_arch = "wasm32")]
use focus_core::{ClockFace, FocusController, FocusCycle, RadialDial};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod app;
mod audio;
mod checklist_view;
mod confetti;
mod controls;
mod dom;
mod events;
mod favicon;
mod hooks;
mod input;
mod render;
mod ritual_view;
mod storage;
mod ticker;

const SVG_ID: &str = "visual-timer-svg";
const FACE_GROUP_ID: &str = "timer-face-group";
const WEDGE_ID: &str = "timer-wedge";
const READOUT_ID: &str = "timer-display-digital";
const FAVICON_ID: &str = "favicon";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("focus-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let svg = dom::required_element(&document, SVG_ID)?;
    let face_group = dom::required_element(&document, FACE_GROUP_ID)?;
    let wedge = dom::required_element(&document, WEDGE_ID)?;
    let readout = document.get_element_by_id(READOUT_ID);
    let favicon = favicon::Favicon::attach(&document, FAVICON_ID);
    if favicon.is_none() {
        log::info!("[favicon] no #{} link; miniature indicator disabled", FAVICON_ID);
    }

    let face = ClockFace::default();
    render::draw_face(&document, &face_group, &face)?;

    let cycle = FocusCycle::restore(storage::load_cycle_seconds());
    log::info!("[cycle] restored {}", cycle.label());
    let overlay = confetti::ConfettiOverlay::attach(&document).map(|c| Rc::new(RefCell::new(c)));
    if overlay.is_none() {
        log::info!("[confetti] no #{} canvas; celebrations disabled", confetti::CANVAS_ID);
    }

    let controller = FocusController::with_parts(
        RadialDial::with_face(face),
        cycle,
        hooks::WebHooks {
            document: document.clone(),
            confetti: overlay.clone(),
        },
    )
    .with_checklist(storage::load_checklist());

    let ctx = app::AppContext {
        document,
        controller: Rc::new(RefCell::new(controller)),
        view: Rc::new(render::DialView {
            svg,
            wedge,
            readout,
            favicon,
        }),
        rng: Rc::new(RefCell::new(StdRng::from_entropy())),
        confetti: overlay,
    };

    ctx.paint_current();
    ctx.render_ritual();
    ctx.refresh_cycle();
    ctx.render_checklist();
    ctx.sync_controls();

    events::wire_pointer_handlers(&ctx);
    events::wire_ritual_buttons(&ctx);
    events::wire_timer_controls(&ctx);
    events::wire_checklist_handlers(&ctx);
    if let Some(overlay) = ctx.confetti.clone() {
        confetti::start_loop(overlay);
    }
    ticker::start_ticker(ctx)?;
    Ok(())
}
