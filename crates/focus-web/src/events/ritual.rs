use crate::app::AppContext;
use crate::{dom, ritual_view, storage};
use focus_core::RitualOutcome;
use web_sys as web;

pub fn wire_ritual_buttons(ctx: &AppContext) {
    let action_ctx = ctx.clone();
    dom::add_click_listener(&ctx.document, ritual_view::ACTION_BTN_ID, move || {
        on_action(&action_ctx);
    });

    let reset_ctx = ctx.clone();
    dom::add_click_listener(&ctx.document, ritual_view::RESET_BTN_ID, move || {
        let confirmed = web::window()
            .and_then(|w| {
                w.confirm_with_message("Abandon this cycle and start over?")
                    .ok()
            })
            .unwrap_or(false);
        if confirmed {
            let frame = reset_ctx.controller.borrow_mut().restart_ritual();
            reset_ctx.paint(&frame);
            reset_ctx.render_ritual();
        }
    });

    let cycle_ctx = ctx.clone();
    dom::add_click_listener(&ctx.document, ritual_view::CYCLE_RESET_BTN_ID, move || {
        cycle_ctx.controller.borrow_mut().reset_cycle();
        storage::save_cycle_seconds(0);
        cycle_ctx.refresh_cycle();
        log::info!("[cycle] reset");
    });
}

fn on_action(ctx: &AppContext) {
    let phase = ctx.controller.borrow().session().phase();
    let input = ritual_view::read_input(&ctx.document, phase);
    let result = ctx.controller.borrow_mut().advance_ritual(input);
    match result {
        Ok(outcome) => {
            if let RitualOutcome::Completed { .. } = outcome {
                ctx.paint_current();
            }
            ctx.render_ritual();
        }
        Err(e) => {
            log::warn!("[stamp] {}", e);
            if let Some(w) = web::window() {
                _ = w.alert_with_message(&e.to_string());
            }
            dom::focus(&ctx.document, ritual_view::input_id_for(phase));
        }
    }
}
