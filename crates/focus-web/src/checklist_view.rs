//! Checklist sections, task rows and the day progress bar.

use crate::{controls, dom};
use focus_core::{Checklist, ChecklistSection, Task, TASK_MAX_MINUTES};
use std::fmt::Write;
use web_sys as web;

pub const CHECKLIST_ID: &str = "checklist-sections";
pub const PROGRESS_BAR_ID: &str = "progress-bar";
pub const PROGRESS_TEXT_ID: &str = "progress-text";
pub const RESET_CHECKLIST_BTN_ID: &str = "reset-checklist-btn";

pub const ACTION_START: &str = "start";
pub const ACTION_REMOVE: &str = "remove";
pub const ACTION_ADD: &str = "add";

pub fn new_task_input_id(section: &str) -> String {
    format!("new-task-{section}")
}

pub fn new_task_minutes_id(section: &str) -> String {
    format!("new-task-min-{section}")
}

// only plain web links become anchors
fn safe_url(url: &str) -> Option<&str> {
    let lower = url.to_ascii_lowercase();
    (lower.starts_with("https://") || lower.starts_with("http://")).then_some(url)
}

fn task_row(out: &mut String, task: &Task) {
    let id = dom::escape_html(&task.id);
    let checked = if task.done { " checked" } else { "" };
    _ = write!(
        out,
        "<li data-done='{}'><input type='checkbox' id='{id}' data-task-id='{id}'{checked}>\
         <label for='{id}'>{}</label>",
        task.done,
        dom::escape_html(&task.text)
    );
    if let Some(url) = task.url.as_deref().and_then(safe_url) {
        _ = write!(
            out,
            "<a href='{0}' target='_blank' rel='noopener noreferrer' title='Open {0}'>link</a>",
            dom::escape_html(url)
        );
    }
    if let Some(minutes) = task.duration {
        _ = write!(
            out,
            "<button data-action='{ACTION_START}' data-task-id='{id}' title='Start a {minutes} min timer'>&#9654; {minutes}m</button>"
        );
    }
    _ = write!(
        out,
        "<button data-action='{ACTION_REMOVE}' data-task-id='{id}' title='Delete'>&times;</button></li>"
    );
}

fn section_block(out: &mut String, section: &ChecklistSection) {
    let key = dom::escape_html(&section.key);
    _ = write!(
        out,
        "<section data-section='{key}'><h3>{}</h3><ul>",
        dom::escape_html(&section.title)
    );
    for task in &section.tasks {
        task_row(out, task);
    }
    _ = write!(
        out,
        "</ul><div>\
         <input type='text' id='{}' autocomplete='off' placeholder='New task...'>\
         <input type='number' id='{}' min='1' max='{TASK_MAX_MINUTES}' placeholder='Min.'>\
         <button data-action='{ACTION_ADD}' data-section='{key}'>Add</button>\
         </div></section>",
        new_task_input_id(&key),
        new_task_minutes_id(&key)
    );
}

pub fn render(document: &web::Document, checklist: &Checklist) {
    let mut html = String::new();
    for section in checklist.sections() {
        section_block(&mut html, section);
    }
    if let Some(el) = document.get_element_by_id(CHECKLIST_ID) {
        el.set_inner_html(&html);
    }
    update_progress(document, checklist);
}

pub fn update_progress(document: &web::Document, checklist: &Checklist) {
    let progress = checklist.progress();
    controls::set_bar_width(document, PROGRESS_BAR_ID, progress.percent());
    dom::set_text(document, PROGRESS_TEXT_ID, &progress.label());
}
