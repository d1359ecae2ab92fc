use serde::{Deserialize, Serialize};
use simdesk_common::{Point, Rect};

/// The simulated screen: host-space origin, full size, and the strip at
/// the bottom reserved for the taskbar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub taskbar_height: f64,
}

impl Workspace {
    pub fn new(width: f64, height: f64, taskbar_height: f64) -> Self {
        Self {
            origin: Point::default(),
            width,
            height,
            taskbar_height,
        }
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Area available to windows, in workspace-local coordinates.
    pub fn usable(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.usable_height())
    }

    pub fn usable_height(&self) -> f64 {
        (self.height - self.taskbar_height).max(0.0)
    }

    /// Full area including the taskbar strip, in workspace-local coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Convert a host-space pointer position to workspace-local coordinates.
    pub fn to_local(&self, host: Point) -> Point {
        Point::new(host.x - self.origin.x, host.y - self.origin.y)
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(1920.0, 1080.0, 50.0)
    }
}
