//! Workspace geometry.

use serde::{Deserialize, Serialize};

/// Size of the simulated screen and the strip reserved for the taskbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub width: u32,
    pub height: u32,
    /// Taskbar strip at the bottom (valid range: 0-200).
    pub taskbar_height: u32,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            taskbar_height: 50,
        }
    }
}
