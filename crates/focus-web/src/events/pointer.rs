use crate::app::AppContext;
use crate::input;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(ctx: &AppContext) {
    wire_pointerdown(ctx);
    wire_pointermove(ctx);
    wire_pointerup(ctx, "pointerup");
    wire_pointerup(ctx, "pointercancel");
}

fn wire_pointerdown(ctx: &AppContext) {
    let ctx = ctx.clone();
    let svg = ctx.view.svg.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !input::is_primary(&ev) {
            return;
        }
        let bounds = input::dial_bounds(&ctx.view.svg);
        let frame = ctx.controller.borrow_mut().pointer_down(
            input::pointer_client(&ev),
            bounds,
            Instant::now(),
        );
        ctx.paint(&frame);
        log::info!("[mouse] begin drag at {}", frame.readout);
        _ = ctx.view.svg.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = svg.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(ctx: &AppContext) {
    let ctx = ctx.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let bounds = input::dial_bounds(&ctx.view.svg);
        let frame = ctx.controller.borrow_mut().pointer_move(
            input::pointer_client(&ev),
            bounds,
            Instant::now(),
        );
        if let Some(frame) = frame {
            ctx.paint(&frame);
            // keeps touch drags from scrolling the page
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(ctx: &AppContext, event: &str) {
    let ctx = ctx.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        ctx.controller.borrow_mut().pointer_up(Instant::now());
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
