//! New-window placement defaults.

use serde::{Deserialize, Serialize};
use simdesk_common::Length;

/// Size, cascade, and stacking base for windows created without explicit
/// geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowsConfig {
    /// Either pixels (`"640px"`) or a share of the usable workspace (`"60%"`).
    pub default_width: Length,
    pub default_height: Length,
    /// New windows land at a random offset between these percentages of
    /// the usable workspace (valid range: 0-100).
    pub cascade_min_percent: u32,
    pub cascade_max_percent: u32,
    /// Stacking order given to the first window.
    pub base_z_order: u64,
}

impl Default for WindowsConfig {
    fn default() -> Self {
        Self {
            default_width: Length::Percent(60.0),
            default_height: Length::Percent(50.0),
            cascade_min_percent: 10,
            cascade_max_percent: 30,
            base_z_order: 1000,
        }
    }
}
