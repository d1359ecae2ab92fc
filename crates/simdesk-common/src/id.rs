use crate::types::WindowId;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Fresh id for a window opened without an explicit one.
pub fn new_window_id() -> WindowId {
    WindowId::new(new_id())
}
