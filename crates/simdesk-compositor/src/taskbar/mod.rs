//! The taskbar collaborator: one entry per open window.
//!
//! The compositor pushes add/remove/active notifications through
//! [`TaskbarAdapter`]; the taskbar answers with [`TaskbarRequest`]s that
//! the compositor handles like any other API call.

mod model;
mod noop;

pub use model::{TaskbarEntry, TaskbarModel};
pub use noop::NoopTaskbar;

use serde::{Deserialize, Serialize};
use simdesk_common::WindowId;

pub trait TaskbarAdapter {
    fn add_entry(&mut self, id: &WindowId, title: &str, icon: &str);
    fn remove_entry(&mut self, id: &WindowId);
    fn set_active(&mut self, id: &WindowId, active: bool);
}

/// What a taskbar click asks the compositor to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskbarRequest {
    Focus(WindowId),
    Toggle(WindowId),
}

/// Icon name shown for a window id when the caller gives none.
pub fn icon_for(id: &WindowId) -> &'static str {
    match id.as_str() {
        "browser" => "globe",
        "terminal" => "terminal",
        "files" => "folder",
        "email" => "envelope",
        "wireshark" => "router",
        "security" => "shield-check",
        "logs" => "journal-text",
        "help" => "question-circle",
        "hint" => "lightbulb",
        "progress" => "clipboard-data",
        "process-monitor" => "cpu",
        "malware-scanner" => "shield-exclamation",
        "ransomware-decryptor" => "unlock",
        _ => "window",
    }
}
