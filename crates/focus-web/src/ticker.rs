use crate::app::AppContext;
use crate::{ritual_view, storage};
use focus_core::{StampPhase, TICK_INTERVAL_MS};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drive the countdown once per second for the lifetime of the page.
pub fn start_ticker(ctx: AppContext) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let closure = Closure::wrap(Box::new(move || on_tick(&ctx)) as Box<dyn FnMut()>);
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TICK_INTERVAL_MS,
        )
        .map_err(|e| anyhow::anyhow!("setInterval: {:?}", e))?;
    closure.forget();
    Ok(())
}

fn on_tick(ctx: &AppContext) {
    let (frame, running, phase, cycle_secs) = {
        let mut ctl = ctx.controller.borrow_mut();
        let frame = ctl.tick(Instant::now());
        (
            frame,
            ctl.countdown().is_running(),
            ctl.session().phase(),
            ctl.cycle().accumulated_seconds(),
        )
    };

    if let Some(frame) = frame {
        ctx.paint(&frame);
        storage::save_cycle_seconds(cycle_secs);
        ctx.refresh_cycle();
        ctx.sync_controls();
    }
    if phase == StampPhase::Momentum {
        ritual_view::update_status(&ctx.document, running);
    }
}
