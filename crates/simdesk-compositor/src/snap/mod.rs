//! Snap zones, the pointer classifier, and snap commit/revert.

mod classifier;
pub mod controller;
mod zone;

pub use classifier::{classify, SnapPreview};
pub use zone::SnapZone;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{ApplicationController, HookResult, WindowContent};
    use crate::settings::SnapSettings;
    use crate::store::{Layout, WindowStore};
    use crate::workspace::Workspace;
    use simdesk_common::{Point, Rect, WindowId};

    fn ws() -> Workspace {
        Workspace::default()
    }

    fn at(x: f64, y: f64) -> Option<SnapZone> {
        classify(Point::new(x, y), &ws(), &SnapSettings::default())
    }

    // -- Classifier --

    #[test]
    fn middle_of_screen_has_no_zone() {
        assert_eq!(at(960.0, 500.0), None);
    }

    #[test]
    fn edges_map_to_halves() {
        assert_eq!(at(5.0, 500.0), Some(SnapZone::Left));
        assert_eq!(at(1915.0, 500.0), Some(SnapZone::Right));
        assert_eq!(at(960.0, 1020.0), Some(SnapZone::Bottom));
    }

    #[test]
    fn top_edge_maximizes() {
        assert_eq!(at(960.0, 3.0), Some(SnapZone::Maximize));
    }

    #[test]
    fn corners_win_over_edges() {
        assert_eq!(at(0.0, 0.0), Some(SnapZone::TopLeft));
        assert_eq!(at(1919.0, 10.0), Some(SnapZone::TopRight));
        assert_eq!(at(10.0, 1010.0), Some(SnapZone::BottomLeft));
        assert_eq!(at(1910.0, 1010.0), Some(SnapZone::BottomRight));
    }

    #[test]
    fn corner_threshold_is_wider_than_edge() {
        // 25px from both the left and top edges: outside the edge
        // threshold, inside the corner threshold.
        assert_eq!(at(25.0, 25.0), Some(SnapZone::TopLeft));
        assert_eq!(at(25.0, 500.0), None);
    }

    #[test]
    fn bottom_corners_reach_into_taskbar() {
        assert_eq!(at(5.0, 1070.0), Some(SnapZone::BottomLeft));
        assert_eq!(at(1915.0, 1079.0), Some(SnapZone::BottomRight));
    }

    #[test]
    fn bottom_edge_stops_at_taskbar() {
        assert_eq!(at(960.0, 1040.0), None);
        assert_eq!(at(960.0, 1030.0), None);
    }

    #[test]
    fn disabled_snapping_never_classifies() {
        let snap = SnapSettings {
            enabled: false,
            ..Default::default()
        };
        assert_eq!(classify(Point::new(0.0, 0.0), &ws(), &snap), None);
    }

    #[test]
    fn zones_resolve_against_usable_area() {
        let w = ws();
        assert_eq!(SnapZone::Left.resolve(&w), Rect::new(0.0, 0.0, 960.0, 1030.0));
        assert_eq!(SnapZone::Maximize.resolve(&w), Rect::new(0.0, 0.0, 1920.0, 1030.0));
        assert_eq!(SnapZone::Top.resolve(&w), Rect::new(0.0, 0.0, 1920.0, 515.0));
        assert_eq!(
            SnapZone::BottomRight.resolve(&w),
            Rect::new(960.0, 515.0, 960.0, 515.0)
        );
    }

    #[test]
    fn preview_carries_resolved_rect() {
        let preview = SnapPreview::new(SnapZone::Right, &ws());
        assert_eq!(preview.rect, Rect::new(960.0, 0.0, 960.0, 1030.0));
    }

    #[test]
    fn zone_names() {
        assert_eq!(SnapZone::TopLeft.to_string(), "top_left");
        assert_eq!(
            serde_json::to_string(&SnapZone::BottomRight).unwrap(),
            "\"bottom_right\""
        );
    }

    // -- Commit / revert --

    const FLOATING: Rect = Rect::new(100.0, 100.0, 600.0, 400.0);

    fn store_with_window(content: WindowContent) -> (WindowStore, WindowId) {
        let mut store = WindowStore::new(1000, 300.0, 200.0);
        let id = store
            .create(WindowId::from("w"), "W", "window", FLOATING, content)
            .unwrap();
        (store, id)
    }

    #[test]
    fn commit_stashes_and_resolves() {
        let (mut store, id) = store_with_window(WindowContent::Empty);
        let layout = controller::commit(&mut store, &id, SnapZone::Left, &ws(), None).unwrap();
        assert_eq!(layout, Layout::Snapped(SnapZone::Left));

        let r = store.get(&id).unwrap();
        assert_eq!(r.geometry(), Rect::new(0.0, 0.0, 960.0, 1030.0));
        assert_eq!(r.saved_geometry(), Some(FLOATING));
    }

    #[test]
    fn repeated_commits_keep_first_stash() {
        let (mut store, id) = store_with_window(WindowContent::Empty);
        controller::commit(&mut store, &id, SnapZone::Left, &ws(), None).unwrap();
        controller::commit(&mut store, &id, SnapZone::Right, &ws(), None).unwrap();
        let layout = controller::commit(&mut store, &id, SnapZone::Maximize, &ws(), None).unwrap();
        assert_eq!(layout, Layout::Maximized);
        assert_eq!(store.get(&id).unwrap().saved_geometry(), Some(FLOATING));

        assert!(controller::revert(&mut store, &id).unwrap());
        let r = store.get(&id).unwrap();
        assert_eq!(r.geometry(), FLOATING);
        assert_eq!(r.layout(), Layout::Floating);
        assert_eq!(r.saved_geometry(), None);
    }

    #[test]
    fn commit_uses_explicit_floating_rect() {
        let (mut store, id) = store_with_window(WindowContent::Empty);
        let before_drag = Rect::new(40.0, 50.0, 600.0, 400.0);
        controller::commit(&mut store, &id, SnapZone::Bottom, &ws(), Some(before_drag)).unwrap();
        assert_eq!(store.get(&id).unwrap().saved_geometry(), Some(before_drag));
    }

    #[test]
    fn revert_on_floating_is_noop() {
        let (mut store, id) = store_with_window(WindowContent::Empty);
        assert!(!controller::revert(&mut store, &id).unwrap());
        assert_eq!(store.get(&id).unwrap().geometry(), FLOATING);
    }

    #[test]
    fn unknown_window_is_not_found() {
        let (mut store, _) = store_with_window(WindowContent::Empty);
        let ghost = WindowId::from("ghost");
        assert!(controller::commit(&mut store, &ghost, SnapZone::Left, &ws(), None).is_err());
        assert!(controller::revert(&mut store, &ghost).is_err());
    }

    struct Remembering {
        restore_to: Rect,
    }

    impl ApplicationController for Remembering {
        fn restore_original_dimensions(&mut self) -> HookResult<Option<Rect>> {
            Ok(Some(self.restore_to))
        }
    }

    #[test]
    fn revert_prefers_controller_rect() {
        let custom = Rect::new(7.0, 8.0, 500.0, 300.0);
        let (mut store, id) =
            store_with_window(WindowContent::controller(Remembering { restore_to: custom }));
        controller::commit(&mut store, &id, SnapZone::Maximize, &ws(), None).unwrap();
        controller::revert(&mut store, &id).unwrap();
        assert_eq!(store.get(&id).unwrap().geometry(), custom);
        assert_eq!(store.get(&id).unwrap().saved_geometry(), None);
    }
}
