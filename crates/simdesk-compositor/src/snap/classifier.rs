use serde::Serialize;
use simdesk_common::{Point, Rect};

use super::SnapZone;
use crate::settings::SnapSettings;
use crate::workspace::Workspace;

/// What the desktop highlights while a drag hovers over a zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SnapPreview {
    pub zone: SnapZone,
    pub rect: Rect,
}

impl SnapPreview {
    pub fn new(zone: SnapZone, workspace: &Workspace) -> Self {
        Self {
            zone,
            rect: zone.resolve(workspace),
        }
    }
}

/// Map a workspace-local pointer position to the zone a release there
/// would snap into.
///
/// Corners are tested before edges. Bottom corners reach down through the
/// taskbar strip; the bottom edge only matches above it. The top edge
/// maximizes.
pub fn classify(point: Point, workspace: &Workspace, snap: &SnapSettings) -> Option<SnapZone> {
    if !snap.enabled {
        return None;
    }

    let Point { x, y } = point;
    let width = workspace.width;
    let usable_height = workspace.usable_height();
    let edge = snap.edge_threshold;
    let corner = snap.corner_threshold;

    let near_left = x <= edge;
    let near_right = x >= width - edge;
    let near_top = y <= edge;
    let near_bottom = y >= usable_height - edge && y < usable_height;

    let corner_left = x <= corner;
    let corner_right = x >= width - corner;
    let corner_top = y <= corner;
    let corner_bottom = y >= usable_height - corner && y <= workspace.height;

    let zone = if corner_left && corner_top {
        SnapZone::TopLeft
    } else if corner_right && corner_top {
        SnapZone::TopRight
    } else if corner_left && corner_bottom {
        SnapZone::BottomLeft
    } else if corner_right && corner_bottom {
        SnapZone::BottomRight
    } else if near_left {
        SnapZone::Left
    } else if near_right {
        SnapZone::Right
    } else if near_top {
        SnapZone::Maximize
    } else if near_bottom {
        SnapZone::Bottom
    } else {
        return None;
    };
    Some(zone)
}
