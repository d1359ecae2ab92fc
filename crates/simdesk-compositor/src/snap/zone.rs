use std::fmt;

use serde::{Deserialize, Serialize};
use simdesk_common::Rect;

use crate::geometry::FractionalRect;
use crate::workspace::Workspace;

/// Named target regions a dragged window can be snapped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapZone {
    Left,
    Right,
    /// Top half. Reachable through the API only; dragging to the top edge
    /// maximizes instead.
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Maximize,
}

impl SnapZone {
    pub const ALL: [SnapZone; 9] = [
        SnapZone::Left,
        SnapZone::Right,
        SnapZone::Top,
        SnapZone::Bottom,
        SnapZone::TopLeft,
        SnapZone::TopRight,
        SnapZone::BottomLeft,
        SnapZone::BottomRight,
        SnapZone::Maximize,
    ];

    /// Region as fractions of the usable workspace.
    pub const fn fraction(self) -> FractionalRect {
        match self {
            SnapZone::Left => FractionalRect::new(0.0, 0.0, 0.5, 1.0),
            SnapZone::Right => FractionalRect::new(0.5, 0.0, 0.5, 1.0),
            SnapZone::Top => FractionalRect::new(0.0, 0.0, 1.0, 0.5),
            SnapZone::Bottom => FractionalRect::new(0.0, 0.5, 1.0, 0.5),
            SnapZone::TopLeft => FractionalRect::new(0.0, 0.0, 0.5, 0.5),
            SnapZone::TopRight => FractionalRect::new(0.5, 0.0, 0.5, 0.5),
            SnapZone::BottomLeft => FractionalRect::new(0.0, 0.5, 0.5, 0.5),
            SnapZone::BottomRight => FractionalRect::new(0.5, 0.5, 0.5, 0.5),
            SnapZone::Maximize => FractionalRect::new(0.0, 0.0, 1.0, 1.0),
        }
    }

    pub fn resolve(self, workspace: &Workspace) -> Rect {
        self.fraction().resolve(workspace.usable())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SnapZone::Left => "left",
            SnapZone::Right => "right",
            SnapZone::Top => "top",
            SnapZone::Bottom => "bottom",
            SnapZone::TopLeft => "top_left",
            SnapZone::TopRight => "top_right",
            SnapZone::BottomLeft => "bottom_left",
            SnapZone::BottomRight => "bottom_right",
            SnapZone::Maximize => "maximize",
        }
    }
}

impl fmt::Display for SnapZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
