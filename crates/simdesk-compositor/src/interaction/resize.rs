use serde::{Deserialize, Serialize};
use simdesk_common::{Point, Rect, WindowId};

use super::SessionPhase;

/// One of the eight resize handles around a window frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::N,
        ResizeHandle::S,
        ResizeHandle::E,
        ResizeHandle::W,
        ResizeHandle::NE,
        ResizeHandle::NW,
        ResizeHandle::SE,
        ResizeHandle::SW,
    ];

    pub fn moves_left(self) -> bool {
        matches!(self, ResizeHandle::W | ResizeHandle::NW | ResizeHandle::SW)
    }

    pub fn moves_right(self) -> bool {
        matches!(self, ResizeHandle::E | ResizeHandle::NE | ResizeHandle::SE)
    }

    pub fn moves_top(self) -> bool {
        matches!(self, ResizeHandle::N | ResizeHandle::NE | ResizeHandle::NW)
    }

    pub fn moves_bottom(self) -> bool {
        matches!(self, ResizeHandle::S | ResizeHandle::SE | ResizeHandle::SW)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub window: WindowId,
    pub handle: ResizeHandle,
    pub pointer_start: Point,
    pub start_geometry: Rect,
    pub phase: SessionPhase,
}

/// Apply a pointer delta to `start` through `handle`.
///
/// Each dimension is floored at its minimum. Left and top handles move the
/// origin by exactly what the dimension changed, so the opposite edge stays
/// where it was.
pub fn resize_rect(
    start: Rect,
    handle: ResizeHandle,
    dx: f64,
    dy: f64,
    min_width: f64,
    min_height: f64,
) -> Rect {
    let mut rect = start;

    if handle.moves_right() {
        rect.width = (start.width + dx).max(min_width);
    } else if handle.moves_left() {
        rect.width = (start.width - dx).max(min_width);
        rect.x = start.x + (start.width - rect.width);
    }

    if handle.moves_bottom() {
        rect.height = (start.height + dy).max(min_height);
    } else if handle.moves_top() {
        rect.height = (start.height - dy).max(min_height);
        rect.y = start.y + (start.height - rect.height);
    }

    rect
}
