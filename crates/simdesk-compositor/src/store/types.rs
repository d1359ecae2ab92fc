//! Window record and its state enums.

use std::fmt;

use serde::{Deserialize, Serialize};
use simdesk_common::{Rect, WindowId};

use crate::controller::{ApplicationController, WindowContent};
use crate::snap::SnapZone;

/// How a window's geometry is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "zone")]
pub enum Layout {
    Floating,
    Snapped(SnapZone),
    Maximized,
}

impl Layout {
    pub fn is_floating(&self) -> bool {
        matches!(self, Layout::Floating)
    }

    /// Zone whose rectangle this layout occupies, if any.
    pub fn zone(&self) -> Option<SnapZone> {
        match self {
            Layout::Floating => None,
            Layout::Snapped(zone) => Some(*zone),
            Layout::Maximized => Some(SnapZone::Maximize),
        }
    }

    /// Layout a snap commit into `zone` produces.
    pub fn for_zone(zone: SnapZone) -> Self {
        if zone == SnapZone::Maximize {
            Layout::Maximized
        } else {
            Layout::Snapped(zone)
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Floating => f.write_str("floating"),
            Layout::Snapped(zone) => write!(f, "snapped:{zone}"),
            Layout::Maximized => f.write_str("maximized"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Normal,
    Minimized,
}

/// The authoritative state of one open window.
///
/// Fields are only mutated through [`super::WindowStore`], which keeps
/// `saved_geometry` present exactly while the layout is not floating.
#[derive(Debug)]
pub struct WindowRecord {
    pub(crate) id: WindowId,
    pub(crate) title: String,
    pub(crate) icon: String,
    pub(crate) geometry: Rect,
    pub(crate) z_order: u64,
    pub(crate) visibility: Visibility,
    pub(crate) layout: Layout,
    pub(crate) saved_geometry: Option<Rect>,
    pub(crate) content: WindowContent,
}

impl WindowRecord {
    pub fn id(&self) -> &WindowId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn z_order(&self) -> u64 {
        self.z_order
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_minimized(&self) -> bool {
        self.visibility == Visibility::Minimized
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn saved_geometry(&self) -> Option<Rect> {
        self.saved_geometry
    }

    pub fn content(&self) -> &WindowContent {
        &self.content
    }

    pub fn has_controller(&self) -> bool {
        matches!(self.content, WindowContent::Controller(_))
    }

    pub(crate) fn controller(&self) -> Option<&dyn ApplicationController> {
        match &self.content {
            WindowContent::Controller(c) => Some(&**c),
            _ => None,
        }
    }

    pub(crate) fn controller_mut(&mut self) -> Option<&mut (dyn ApplicationController + 'static)> {
        match &mut self.content {
            WindowContent::Controller(c) => Some(&mut **c),
            _ => None,
        }
    }

    pub fn summary(&self) -> WindowSummary {
        WindowSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            icon: self.icon.clone(),
            geometry: self.geometry,
            layout: self.layout,
            visibility: self.visibility,
            z_order: self.z_order,
        }
    }
}

/// Serializable view of a window, without its content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowSummary {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub geometry: Rect,
    pub layout: Layout,
    pub visibility: Visibility,
    pub z_order: u64,
}
