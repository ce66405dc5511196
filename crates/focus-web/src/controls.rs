//! Start/pause, reset and typed-in duration controls under the dial.

use crate::dom;
use focus_core::{Countdown, CountdownStatus};
use web_sys as web;

pub const START_PAUSE_BTN_ID: &str = "start-pause-btn";
pub const RESET_BTN_ID: &str = "reset-btn";
pub const OPEN_SET_TIME_BTN_ID: &str = "open-set-time-btn";
pub const CONFIRM_SET_TIME_BTN_ID: &str = "confirm-set-time-btn";
pub const CANCEL_SET_TIME_BTN_ID: &str = "cancel-set-time-btn";
pub const CUSTOM_TIME_INPUT_ID: &str = "custom-time-input";
pub const MAIN_CONTROLS_ID: &str = "main-controls";
pub const TIME_SET_CONTROLS_ID: &str = "time-set-controls";
pub const CYCLE_BAR_ID: &str = "cycle-progress-bar";

pub fn start_pause_label(status: CountdownStatus) -> &'static str {
    match status {
        CountdownStatus::Running { .. } => "Pause",
        CountdownStatus::Paused => "Resume",
        CountdownStatus::Stopped => "Start",
    }
}

pub fn sync(document: &web::Document, countdown: &Countdown) {
    dom::set_text(
        document,
        START_PAUSE_BTN_ID,
        start_pause_label(countdown.status()),
    );
}

/// Swap the main buttons for the minutes field, prefilled with the current duration.
pub fn show_time_input(document: &web::Document, initial_seconds: u32) {
    dom::set_hidden(document, MAIN_CONTROLS_ID, true);
    dom::set_hidden(document, TIME_SET_CONTROLS_ID, false);
    if let Some(input) = dom::input(document, CUSTOM_TIME_INPUT_ID) {
        input.set_value(&(initial_seconds / 60).to_string());
    }
    dom::focus(document, CUSTOM_TIME_INPUT_ID);
}

pub fn hide_time_input(document: &web::Document) {
    dom::set_hidden(document, TIME_SET_CONTROLS_ID, true);
    dom::set_hidden(document, MAIN_CONTROLS_ID, false);
}

/// Minutes typed into the field; `None` unless it is a positive whole number.
pub fn read_minutes(document: &web::Document) -> Option<u32> {
    dom::input_value(document, CUSTOM_TIME_INPUT_ID)
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|m| *m > 0)
}

pub fn set_bar_width(document: &web::Document, element_id: &str, percent: f32) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.set_attribute("style", &format!("width: {:.1}%", percent.clamp(0.0, 100.0)));
    }
}
