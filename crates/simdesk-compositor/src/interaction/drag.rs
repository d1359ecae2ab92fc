use simdesk_common::{Point, Rect, WindowId};

use super::SessionPhase;
use crate::snap::SnapZone;
use crate::store::Layout;

/// A window's layout state as it was before a drag pulled it out of a
/// snapped or maximized layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorLayout {
    pub layout: Layout,
    pub geometry: Rect,
    pub saved_geometry: Option<Rect>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub window: WindowId,
    pub pointer_start: Point,
    /// Geometry the pointer delta is applied to. For a window unsnapped at
    /// pointer-down this is the restored rectangle placed under the pointer.
    pub reference: Rect,
    /// Set when pointer-down unsnapped the window.
    pub prior: Option<PriorLayout>,
    pub clicks: u8,
    /// Last zone the classifier reported.
    pub zone: Option<SnapZone>,
    pub phase: SessionPhase,
}

impl DragSession {
    pub fn unsnapped(&self) -> bool {
        self.prior.is_some()
    }

    /// Geometry for the pointer at `p`. No clamping: windows may leave the
    /// workspace.
    pub fn geometry_at(&self, p: Point) -> Rect {
        let (dx, dy) = self.pointer_start.delta_to(p);
        self.reference.translate(dx, dy)
    }
}

/// Where a window lands when a drag pulls it out of a snapped or maximized
/// layout: restored size, centred horizontally on the pointer, top edge
/// `header_offset` above it.
pub fn unsnap_placement(restored: Rect, pointer: Point, header_offset: f64) -> Rect {
    restored.with_origin(Point::new(
        pointer.x - restored.width / 2.0,
        pointer.y - header_offset,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_centres_under_pointer() {
        let r = unsnap_placement(Rect::new(100.0, 100.0, 600.0, 400.0), Point::new(960.0, 10.0), 20.0);
        assert_eq!(r, Rect::new(660.0, -10.0, 600.0, 400.0));
    }

    #[test]
    fn geometry_follows_pointer_delta() {
        let session = DragSession {
            window: WindowId::from("w"),
            pointer_start: Point::new(150.0, 110.0),
            reference: Rect::new(100.0, 100.0, 600.0, 400.0),
            prior: None,
            clicks: 1,
            zone: None,
            phase: SessionPhase::Started,
        };
        assert_eq!(
            session.geometry_at(Point::new(-500.0, 2000.0)),
            Rect::new(-550.0, 1990.0, 600.0, 400.0)
        );
        assert!(!session.unsnapped());
    }
}
