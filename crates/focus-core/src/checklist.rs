//! Day checklist: sections of tasks, some of which carry a timer duration.
//!
//! A task with a duration can start the countdown; when that countdown runs
//! out the controller ticks the task off here.

use crate::constants::TASK_MAX_MINUTES;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    /// Minutes for the task timer. `None` means the task has no play button.
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub url: Option<String>,
    // persisted separately, see `Checklist::checked_state`
    #[serde(skip)]
    pub done: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSection {
    pub key: String,
    pub title: String,
    pub tasks: Vec<Task>,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChecklistError {
    #[error("task text must not be empty")]
    EmptyText,
    #[error("no checklist section `{0}`")]
    UnknownSection(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecklistProgress {
    pub done: usize,
    pub total: usize,
}

impl ChecklistProgress {
    pub fn percent(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.done as f32 / self.total as f32 * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.done == self.total
    }

    pub fn label(&self) -> String {
        format!("{}/{} done", self.done, self.total)
    }
}

/// Zero or missing durations mean "no timer"; long ones are capped.
pub fn normalize_duration(minutes: Option<u32>) -> Option<u32> {
    minutes
        .filter(|m| *m > 0)
        .map(|m| m.min(TASK_MAX_MINUTES))
}

/// Saved content loads back through [`Checklist::new`] so it is normalized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Checklist {
    sections: Vec<ChecklistSection>,
}

impl Default for Checklist {
    fn default() -> Self {
        fn task(id: &str, text: &str, duration: Option<u32>, url: Option<&str>) -> Task {
            Task {
                id: id.to_string(),
                text: text.to_string(),
                duration,
                url: url.map(str::to_string),
                done: false,
            }
        }
        Self::new(vec![
            ChecklistSection {
                key: "morning-start".into(),
                title: "Morning start (lower the bar)".into(),
                tasks: vec![
                    task("task-m1", "Log start time", None, None),
                    task("task-m2", "First hour at the standing desk", None, None),
                    task("task-m3", "Refill water bottle", None, None),
                    task("task-m4", "Check mail & messages", Some(15), Some("https://gmail.com")),
                    task("task-m5", "Check calendar", None, Some("https://calendar.google.com")),
                    task("task-m6", "Review yesterday's notes", None, None),
                    task("task-m7", "Define today's tasks (max. 3)", None, None),
                    task("task-m8", "Plan time blocks", Some(10), None),
                ],
            },
            ChecklistSection {
                key: "focus-flow".into(),
                title: "Focus & flow (keep going)".into(),
                tasks: vec![
                    task("task-f1", "90 min deep work (morning)", Some(90), None),
                    task("task-f2", "90 min deep work (afternoon)", Some(90), None),
                    task("task-f3", "Put on a focus soundtrack", None, None),
                    task("task-f4", "Standing desk in the afternoon", None, None),
                    task("task-f5", "Refill water bottle", None, None),
                ],
            },
            ChecklistSection {
                key: "day-wrap-up".into(),
                title: "Wrap-up (prepare tomorrow)".into(),
                tasks: vec![
                    task("task-e1", "Pick tomorrow's most important task", None, None),
                    task("task-e2", "Log working time (end)", None, None),
                    task("task-e3", "Clear desk", Some(5), None),
                ],
            },
        ])
    }
}

impl Checklist {
    pub fn new(sections: Vec<ChecklistSection>) -> Self {
        let mut list = Self { sections };
        for task in list.tasks_mut() {
            task.duration = normalize_duration(task.duration);
            task.url = task.url.take().filter(|u| !u.trim().is_empty());
        }
        list
    }

    pub fn sections(&self) -> &[ChecklistSection] {
        &self.sections
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.sections.iter().flat_map(|s| s.tasks.iter())
    }

    fn tasks_mut(&mut self) -> impl Iterator<Item = &mut Task> {
        self.sections.iter_mut().flat_map(|s| s.tasks.iter_mut())
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks().find(|t| t.id == id)
    }

    fn task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks_mut().find(|t| t.id == id)
    }

    /// Append a task to `section` and return its fresh id.
    pub fn add_task<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        section: &str,
        text: &str,
        duration: Option<u32>,
    ) -> Result<String, ChecklistError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChecklistError::EmptyText);
        }
        let id = loop {
            let candidate = format!("task-{:016x}", rng.gen::<u64>());
            if self.task(&candidate).is_none() {
                break candidate;
            }
        };
        let target = self
            .sections
            .iter_mut()
            .find(|s| s.key == section)
            .ok_or_else(|| ChecklistError::UnknownSection(section.to_string()))?;
        target.tasks.push(Task {
            id: id.clone(),
            text: text.to_string(),
            duration: normalize_duration(duration),
            url: None,
            done: false,
        });
        Ok(id)
    }

    pub fn remove_task(&mut self, id: &str) -> bool {
        for section in self.sections.iter_mut() {
            if let Some(pos) = section.tasks.iter().position(|t| t.id == id) {
                section.tasks.remove(pos);
                return true;
            }
        }
        false
    }

    /// Manual checkbox change. Returns false for an unknown id.
    pub fn set_done(&mut self, id: &str, done: bool) -> bool {
        match self.task_mut(id) {
            Some(task) => {
                task.done = done;
                true
            }
            None => false,
        }
    }

    /// Tick off a task whose timer ran out. True only if it was still open.
    pub fn auto_check(&mut self, id: &str) -> bool {
        match self.task_mut(id) {
            Some(task) if !task.done => {
                task.done = true;
                log::info!("[checklist] auto-checked {}", id);
                true
            }
            _ => false,
        }
    }

    pub fn reset_checks(&mut self) {
        for task in self.tasks_mut() {
            task.done = false;
        }
    }

    pub fn progress(&self) -> ChecklistProgress {
        ChecklistProgress {
            done: self.tasks().filter(|t| t.done).count(),
            total: self.tasks().count(),
        }
    }

    /// Checked flags keyed by task id, the shape kept in storage.
    pub fn checked_state(&self) -> BTreeMap<String, bool> {
        self.tasks().map(|t| (t.id.clone(), t.done)).collect()
    }

    /// Ids missing from `state` count as unchecked.
    pub fn apply_checked_state(&mut self, state: &BTreeMap<String, bool>) {
        for task in self.tasks_mut() {
            task.done = state.get(&task.id).copied().unwrap_or(false);
        }
    }
}
