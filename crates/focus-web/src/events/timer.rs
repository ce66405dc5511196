use crate::app::AppContext;
use crate::{controls, dom, ritual_view};
use focus_core::{CountdownStatus, StampPhase};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_timer_controls(ctx: &AppContext) {
    let toggle_ctx = ctx.clone();
    dom::add_click_listener(&ctx.document, controls::START_PAUSE_BTN_ID, move || {
        let (running, phase) = {
            let mut ctl = toggle_ctx.controller.borrow_mut();
            (ctl.toggle(Instant::now()), ctl.session().phase())
        };
        log::info!("[countdown] {}", if running { "start" } else { "pause" });
        toggle_ctx.sync_controls();
        if phase == StampPhase::Momentum {
            ritual_view::update_status(&toggle_ctx.document, running);
        }
    });

    let reset_ctx = ctx.clone();
    dom::add_click_listener(&ctx.document, controls::RESET_BTN_ID, move || {
        let frame = reset_ctx.controller.borrow_mut().reset();
        reset_ctx.paint(&frame);
        reset_ctx.sync_controls();
    });

    let open_ctx = ctx.clone();
    dom::add_click_listener(&ctx.document, controls::OPEN_SET_TIME_BTN_ID, move || {
        let initial = {
            let mut ctl = open_ctx.controller.borrow_mut();
            if ctl.countdown().status() != CountdownStatus::Stopped {
                ctl.pause(Instant::now());
            }
            ctl.countdown().initial_seconds()
        };
        open_ctx.sync_controls();
        controls::show_time_input(&open_ctx.document, initial);
    });

    let cancel_ctx = ctx.clone();
    dom::add_click_listener(&ctx.document, controls::CANCEL_SET_TIME_BTN_ID, move || {
        controls::hide_time_input(&cancel_ctx.document);
    });

    let confirm_ctx = ctx.clone();
    dom::add_click_listener(&ctx.document, controls::CONFIRM_SET_TIME_BTN_ID, move || {
        confirm_set_time(&confirm_ctx);
    });

    wire_time_input_keys(ctx);
}

fn confirm_set_time(ctx: &AppContext) {
    let frame = controls::read_minutes(&ctx.document)
        .and_then(|minutes| ctx.controller.borrow_mut().set_duration_minutes(minutes));
    match frame {
        Some(frame) => {
            log::info!("[countdown] duration set to {}", frame.readout);
            ctx.paint(&frame);
        }
        None => log::info!("[countdown] ignored invalid duration"),
    }
    controls::hide_time_input(&ctx.document);
    ctx.sync_controls();
}

fn wire_time_input_keys(ctx: &AppContext) {
    let Some(input) = ctx.document.get_element_by_id(controls::CUSTOM_TIME_INPUT_ID) else {
        log::warn!("[dom] no #{}", controls::CUSTOM_TIME_INPUT_ID);
        return;
    };
    let ctx = ctx.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| match ev.key().as_str() {
        "Enter" => confirm_set_time(&ctx),
        "Escape" => controls::hide_time_input(&ctx.document),
        _ => {}
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
