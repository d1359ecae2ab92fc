//! No-op taskbar, for hosts that draw no taskbar.

use simdesk_common::WindowId;

use super::TaskbarAdapter;

/// Accepts every notification and does nothing with it.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTaskbar;

impl TaskbarAdapter for NoopTaskbar {
    fn add_entry(&mut self, _id: &WindowId, _title: &str, _icon: &str) {}

    fn remove_entry(&mut self, _id: &WindowId) {}

    fn set_active(&mut self, _id: &WindowId, _active: bool) {}
}
