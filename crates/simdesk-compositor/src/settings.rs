use serde::{Deserialize, Serialize};
use simdesk_common::Length;

/// Edge-snap tuning used by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapSettings {
    pub enabled: bool,
    pub edge_threshold: f64,
    /// Corners use their own, larger threshold so they are easier to hit.
    pub corner_threshold: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            edge_threshold: 20.0,
            corner_threshold: 30.0,
        }
    }
}

/// Everything the compositor needs to know about interaction tuning and
/// new-window placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositorSettings {
    pub snap: SnapSettings,
    pub min_width: f64,
    pub min_height: f64,
    /// Releases closer than this to the press point count as clicks.
    pub click_epsilon: f64,
    /// Gap between the pointer and the top edge of a window pulled out of
    /// a snapped or maximized layout.
    pub header_offset: f64,
    pub default_width: Length,
    pub default_height: Length,
    pub cascade_min_percent: f64,
    pub cascade_max_percent: f64,
    pub base_z_order: u64,
}

impl Default for CompositorSettings {
    fn default() -> Self {
        Self {
            snap: SnapSettings::default(),
            min_width: 300.0,
            min_height: 200.0,
            click_epsilon: 3.0,
            header_offset: 20.0,
            default_width: Length::Percent(60.0),
            default_height: Length::Percent(50.0),
            cascade_min_percent: 10.0,
            cascade_max_percent: 30.0,
            base_z_order: 1000,
        }
    }
}

impl CompositorSettings {
    /// Cascade range as an ordered `(low, high)` fraction pair.
    pub(crate) fn cascade_range(&self) -> (f64, f64) {
        let lo = self.cascade_min_percent.min(self.cascade_max_percent) / 100.0;
        let hi = self.cascade_min_percent.max(self.cascade_max_percent) / 100.0;
        (lo, hi)
    }
}
