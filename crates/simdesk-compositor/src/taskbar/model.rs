use serde::Serialize;
use simdesk_common::WindowId;
use tracing::trace;

use super::{TaskbarAdapter, TaskbarRequest};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskbarEntry {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub active: bool,
}

/// In-memory taskbar: entries in the order windows were opened.
#[derive(Debug, Default)]
pub struct TaskbarModel {
    entries: Vec<TaskbarEntry>,
}

impl TaskbarModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[TaskbarEntry] {
        &self.entries
    }

    pub fn entry(&self, id: &WindowId) -> Option<&TaskbarEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn active(&self) -> Option<&WindowId> {
        self.entries.iter().find(|e| e.active).map(|e| &e.id)
    }

    /// A click on an entry toggles its window.
    pub fn click(&self, id: &WindowId) -> Option<TaskbarRequest> {
        self.entry(id).map(|e| TaskbarRequest::Toggle(e.id.clone()))
    }
}

impl TaskbarAdapter for TaskbarModel {
    fn add_entry(&mut self, id: &WindowId, title: &str, icon: &str) {
        if self.entry(id).is_some() {
            return;
        }
        self.entries.push(TaskbarEntry {
            id: id.clone(),
            title: title.to_string(),
            icon: icon.to_string(),
            active: false,
        });
        trace!(window = %id, "taskbar entry added");
    }

    fn remove_entry(&mut self, id: &WindowId) {
        self.entries.retain(|e| &e.id != id);
    }

    fn set_active(&mut self, id: &WindowId, active: bool) {
        for entry in &mut self.entries {
            if &entry.id == id {
                entry.active = active;
            } else if active {
                entry.active = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> TaskbarModel {
        let mut m = TaskbarModel::new();
        m.add_entry(&WindowId::from("a"), "A", "window");
        m.add_entry(&WindowId::from("b"), "B", "folder");
        m
    }

    #[test]
    fn entries_keep_open_order() {
        let m = model();
        let ids: Vec<&str> = m.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn duplicate_add_is_ignored() {
        let mut m = model();
        m.add_entry(&WindowId::from("a"), "A again", "window");
        assert_eq!(m.entries().len(), 2);
        assert_eq!(m.entry(&WindowId::from("a")).unwrap().title, "A");
    }

    #[test]
    fn activating_one_clears_the_rest() {
        let mut m = model();
        m.set_active(&WindowId::from("a"), true);
        m.set_active(&WindowId::from("b"), true);
        assert_eq!(m.active(), Some(&WindowId::from("b")));
        assert!(!m.entry(&WindowId::from("a")).unwrap().active);

        m.set_active(&WindowId::from("b"), false);
        assert_eq!(m.active(), None);
    }

    #[test]
    fn click_requests_toggle() {
        let m = model();
        assert_eq!(
            m.click(&WindowId::from("b")),
            Some(TaskbarRequest::Toggle(WindowId::from("b")))
        );
        assert_eq!(m.click(&WindowId::from("zzz")), None);
    }

    #[test]
    fn remove_entry_drops_it() {
        let mut m = model();
        m.remove_entry(&WindowId::from("a"));
        assert!(m.entry(&WindowId::from("a")).is_none());
        assert_eq!(m.entries().len(), 1);
    }
}
