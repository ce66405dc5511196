use crate::app::AppContext;
use crate::checklist_view::{self, ACTION_ADD, ACTION_REMOVE, ACTION_START};
use crate::{dom, storage};
use glam::Vec2;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_checklist_handlers(ctx: &AppContext) {
    let Some(list) = ctx.document.get_element_by_id(checklist_view::CHECKLIST_ID) else {
        log::warn!("[dom] no #{}; checklist disabled", checklist_view::CHECKLIST_ID);
        return;
    };

    // rows are re-rendered, so listen once on the container
    let click_ctx = ctx.clone();
    let on_click = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(button) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest("[data-action]").ok().flatten())
        else {
            return;
        };
        let action = button.get_attribute("data-action").unwrap_or_default();
        match action.as_str() {
            ACTION_START => {
                if let Some(id) = button.get_attribute("data-task-id") {
                    start_task(&click_ctx, &id);
                }
            }
            ACTION_REMOVE => {
                if let Some(id) = button.get_attribute("data-task-id") {
                    remove_task(&click_ctx, &id);
                }
            }
            ACTION_ADD => {
                if let Some(section) = button.get_attribute("data-section") {
                    add_task(&click_ctx, &section);
                }
            }
            _ => return,
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = list.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    let change_ctx = ctx.clone();
    let on_change = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Some(checkbox) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        {
            checkbox_changed(&change_ctx, &checkbox);
        }
    }) as Box<dyn FnMut(_)>);
    _ = list.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
    on_change.forget();

    let reset_ctx = ctx.clone();
    dom::add_click_listener(&ctx.document, checklist_view::RESET_CHECKLIST_BTN_ID, move || {
        let confirmed = web::window()
            .and_then(|w| w.confirm_with_message("Uncheck every task?").ok())
            .unwrap_or(false);
        if confirmed {
            let mut ctl = reset_ctx.controller.borrow_mut();
            ctl.checklist_mut().reset_checks();
            storage::save_checklist_state(ctl.checklist());
            checklist_view::render(&reset_ctx.document, ctl.checklist());
        }
    });
}

fn start_task(ctx: &AppContext, task_id: &str) {
    let frame = ctx
        .controller
        .borrow_mut()
        .start_checklist_task(task_id, Instant::now());
    if let Some(frame) = frame {
        ctx.paint(&frame);
        ctx.sync_controls();
    }
}

fn remove_task(ctx: &AppContext, task_id: &str) {
    let mut ctl = ctx.controller.borrow_mut();
    if ctl.checklist_mut().remove_task(task_id) {
        log::info!("[checklist] removed {}", task_id);
        storage::save_checklist_content(ctl.checklist());
        storage::save_checklist_state(ctl.checklist());
        checklist_view::render(&ctx.document, ctl.checklist());
    }
}

fn add_task(ctx: &AppContext, section: &str) {
    let text_id = checklist_view::new_task_input_id(section);
    let text = dom::input_value(&ctx.document, &text_id).unwrap_or_default();
    let minutes = dom::input_value(&ctx.document, &checklist_view::new_task_minutes_id(section))
        .and_then(|v| v.trim().parse::<u32>().ok());

    let mut ctl = ctx.controller.borrow_mut();
    let added = ctl
        .checklist_mut()
        .add_task(&mut *ctx.rng.borrow_mut(), section, &text, minutes);
    match added {
        Ok(id) => {
            log::info!("[checklist] added {} to {}", id, section);
            storage::save_checklist_content(ctl.checklist());
            storage::save_checklist_state(ctl.checklist());
            checklist_view::render(&ctx.document, ctl.checklist());
        }
        Err(e) => log::warn!("[checklist] {}", e),
    }
    dom::focus(&ctx.document, &text_id);
}

fn checkbox_changed(ctx: &AppContext, checkbox: &web::HtmlInputElement) {
    let Some(id) = checkbox.get_attribute("data-task-id") else {
        return;
    };
    let done = checkbox.checked();
    let all_done = {
        let mut ctl = ctx.controller.borrow_mut();
        if !ctl.checklist_mut().set_done(&id, done) {
            return;
        }
        storage::save_checklist_state(ctl.checklist());
        checklist_view::update_progress(&ctx.document, ctl.checklist());
        ctl.checklist().progress().is_complete()
    };

    let Some(confetti) = &ctx.confetti else {
        return;
    };
    if all_done {
        confetti.borrow_mut().burst();
    } else if done {
        let rect = checkbox.get_bounding_client_rect();
        let at = Vec2::new(
            (rect.left() + rect.width() / 2.0) as f32,
            (rect.top() + rect.height() / 2.0) as f32,
        );
        confetti.borrow_mut().sprinkle(at);
    }
}
