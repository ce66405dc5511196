use crate::dom;
use focus_core::{PhaseInput, StampPhase, StampSession, FEELING_DEFAULT, FEELING_MAX, FEELING_MIN};
use web_sys as web;

pub const CONTENT_ID: &str = "stamp-content";
pub const ACTION_BTN_ID: &str = "stamp-action-btn";
pub const RESET_BTN_ID: &str = "stamp-reset-btn";
pub const BADGE_ID: &str = "stamp-phase-badge";
pub const TITLE_ID: &str = "stamp-phase-name";
pub const CYCLE_TEXT_ID: &str = "cycle-progress-text";
pub const CYCLE_RESET_BTN_ID: &str = "reset-cycle-btn";
pub const CYCLE_COMPLETE_TEXT: &str = "90-minute cycle complete - take a real break";

pub const FEELING_INPUT_ID: &str = "feeling-slider";
pub const GOAL_INPUT_ID: &str = "session-goal-input";
pub const ATOMIC_INPUT_ID: &str = "atomic-step-input";
pub const BRIDGE_INPUT_ID: &str = "bridge-input";
pub const STATUS_ID: &str = "timer-status-text";

const STATUS_RUNNING: &str = "Focus running... good luck!";
const STATUS_IDLE: &str = "Set the dial to start";
const STATUS_TIME_UP: &str = "TIME IS UP. FILL IN THE BRIDGE!";

/// Header, action label and body for the session's current phase.
pub fn render(
    document: &web::Document,
    session: &StampSession,
    saved_bridge: Option<&str>,
    example_goal: &str,
) {
    let phase = session.phase();
    dom::set_text(document, BADGE_ID, phase.badge());
    dom::set_text(document, TITLE_ID, phase.title());
    dom::set_text(document, ACTION_BTN_ID, phase.action_label());
    if let Some(el) = document.get_element_by_id(BADGE_ID) {
        _ = el.set_attribute("data-phase", &phase.index().to_string());
    }

    let body = match phase {
        StampPhase::CheckIn => format!(
            "<label for='{FEELING_INPUT_ID}'>How do you feel? ({FEELING_MIN}-{FEELING_MAX})</label>\
             <input type='range' id='{FEELING_INPUT_ID}' min='{FEELING_MIN}' max='{FEELING_MAX}' value='{FEELING_DEFAULT}'>\
             <p>Breathe in deeply. Tense every muscle briefly. Hold... and let go.</p>"
        ),
        StampPhase::Tune => format!(
            "<label for='{GOAL_INPUT_ID}'>1. Session goal</label>\
             <input type='text' id='{GOAL_INPUT_ID}' autocomplete='off' placeholder='What do you want to get done in this session?'>\
             <p>e.g. \"{}\"</p>\
             <p>2. Secure your surroundings</p>\
             <label><input type='checkbox'> Phone out of sight / muted</label>\
             <label><input type='checkbox'> Close unneeded browser tabs</label>",
            dom::escape_html(example_goal)
        ),
        StampPhase::Atomic => {
            let prefill = saved_bridge.map(dom::escape_html).unwrap_or_default();
            let hint = if saved_bridge.is_some() {
                "Taken over from the bridge"
            } else {
                "e.g. \"Open the document\""
            };
            format!(
                "<p>Open every program, file and page you need now.</p>\
                 <label for='{ATOMIC_INPUT_ID}'>The very first step</label>\
                 <input type='text' id='{ATOMIC_INPUT_ID}' autocomplete='off' value='{prefill}' placeholder='First, ridiculously small action...'>\
                 <p>{hint}</p>"
            )
        }
        StampPhase::Momentum => format!(
            "<p>Session goal</p><p>{}</p>\
             <p>First step</p><p>{}</p>\
             <p id='{STATUS_ID}'>{STATUS_IDLE}</p>\
             <label for='{BRIDGE_INPUT_ID}'>The bridge (for next time)</label>\
             <input type='text' id='{BRIDGE_INPUT_ID}' autocomplete='off' placeholder='Next logical step / note...'>",
            dom::escape_html(session.goal()),
            dom::escape_html(session.atomic_step())
        ),
    };
    if let Some(el) = document.get_element_by_id(CONTENT_ID) {
        el.set_inner_html(&body);
    }

    match phase {
        StampPhase::Tune => dom::focus(document, GOAL_INPUT_ID),
        StampPhase::Atomic if saved_bridge.is_none() => dom::focus(document, ATOMIC_INPUT_ID),
        _ => {}
    }
}

/// Read what the user entered for `phase`. Missing inputs read as empty.
pub fn read_input(document: &web::Document, phase: StampPhase) -> PhaseInput {
    let value = |id: &str| dom::input_value(document, id).unwrap_or_default();
    match phase {
        StampPhase::CheckIn => PhaseInput::CheckIn {
            feeling: value(FEELING_INPUT_ID)
                .parse()
                .unwrap_or(FEELING_DEFAULT),
        },
        StampPhase::Tune => PhaseInput::Tune {
            goal: value(GOAL_INPUT_ID),
        },
        StampPhase::Atomic => PhaseInput::Atomic {
            first_step: value(ATOMIC_INPUT_ID),
        },
        StampPhase::Momentum => PhaseInput::Momentum {
            bridge: value(BRIDGE_INPUT_ID),
        },
    }
}

pub fn input_id_for(phase: StampPhase) -> &'static str {
    match phase {
        StampPhase::CheckIn => FEELING_INPUT_ID,
        StampPhase::Tune => GOAL_INPUT_ID,
        StampPhase::Atomic => ATOMIC_INPUT_ID,
        StampPhase::Momentum => BRIDGE_INPUT_ID,
    }
}

/// Momentum status line; leaves a "time is up" notice alone until the dial is set again.
pub fn update_status(document: &web::Document, running: bool) {
    let Some(el) = document.get_element_by_id(STATUS_ID) else {
        return;
    };
    if running {
        el.set_text_content(Some(STATUS_RUNNING));
        _ = el.set_attribute("data-state", "running");
    } else if el.get_attribute("data-state").as_deref() != Some("time-up") {
        el.set_text_content(Some(STATUS_IDLE));
        _ = el.set_attribute("data-state", "idle");
    }
}

pub fn show_time_up(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        el.set_text_content(Some(STATUS_TIME_UP));
        _ = el.set_attribute("data-state", "time-up");
    }
}
