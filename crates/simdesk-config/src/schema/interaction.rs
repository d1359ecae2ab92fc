//! Pointer interaction tuning: snapping, resizing, and dragging.

use serde::{Deserialize, Serialize};

/// Edge-snap behavior while dragging a window header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// When false, drags never preview or commit a snap zone.
    pub enabled: bool,
    /// Distance from a workspace edge that arms an edge zone (valid range: 1-200).
    pub edge_threshold: u32,
    /// Distance from two edges that arms a corner zone. Must be at least
    /// `edge_threshold`.
    pub corner_threshold: u32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            edge_threshold: 20,
            corner_threshold: 30,
        }
    }
}

/// Resize limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Valid range: 50-2000.
    pub min_width: u32,
    /// Valid range: 50-2000.
    pub min_height: u32,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            min_width: 300,
            min_height: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Pointer displacement below which a release counts as a click (valid range: 0-20).
    pub click_epsilon: f64,
    /// Vertical offset between the pointer and a window's top edge when a
    /// drag pulls the window out of a snapped or maximized layout.
    pub header_offset: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            click_epsilon: 3.0,
            header_offset: 20.0,
        }
    }
}
