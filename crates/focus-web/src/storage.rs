use focus_core::{
    Checklist, ChecklistSection, BRIDGE_STORAGE_KEY, CHECKLIST_CONTENT_KEY, CHECKLIST_STATE_KEY,
    CYCLE_STORAGE_KEY,
};
use std::collections::BTreeMap;
use web_sys as web;

#[inline]
fn local_storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

fn get(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

fn set(key: &str, value: &str) {
    match local_storage() {
        Some(s) => {
            if let Err(e) = s.set_item(key, value) {
                log::warn!("[storage] set {} failed: {:?}", key, e);
            }
        }
        None => log::warn!("[storage] localStorage unavailable"),
    }
}

pub fn load_bridge() -> Option<String> {
    get(BRIDGE_STORAGE_KEY).filter(|s| !s.trim().is_empty())
}

pub fn save_bridge(bridge: &str) {
    set(BRIDGE_STORAGE_KEY, bridge);
}

/// Unparseable values count as a fresh cycle.
pub fn load_cycle_seconds() -> u32 {
    get(CYCLE_STORAGE_KEY)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

pub fn save_cycle_seconds(seconds: u32) {
    set(CYCLE_STORAGE_KEY, &seconds.to_string());
}

/// Saved content with its checked flags, or the default day when nothing
/// usable is stored.
pub fn load_checklist() -> Checklist {
    let mut checklist = get(CHECKLIST_CONTENT_KEY)
        .and_then(|raw| match serde_json::from_str::<Vec<ChecklistSection>>(&raw) {
            Ok(sections) if !sections.is_empty() => Some(Checklist::new(sections)),
            Ok(_) => None,
            Err(e) => {
                log::warn!("[storage] checklist content unreadable: {}", e);
                None
            }
        })
        .unwrap_or_default();
    if let Some(state) = get(CHECKLIST_STATE_KEY)
        .and_then(|raw| serde_json::from_str::<BTreeMap<String, bool>>(&raw).ok())
    {
        checklist.apply_checked_state(&state);
    }
    checklist
}

pub fn save_checklist_content(checklist: &Checklist) {
    match serde_json::to_string(checklist) {
        Ok(json) => set(CHECKLIST_CONTENT_KEY, &json),
        Err(e) => log::warn!("[storage] checklist content: {}", e),
    }
}

pub fn save_checklist_state(checklist: &Checklist) {
    match serde_json::to_string(&checklist.checked_state()) {
        Ok(json) => set(CHECKLIST_STATE_KEY, &json),
        Err(e) => log::warn!("[storage] checklist state: {}", e),
    }
}
