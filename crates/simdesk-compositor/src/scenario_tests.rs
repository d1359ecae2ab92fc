//! End-to-end pointer and layout flows through the public API.

use simdesk_common::{DesktopEvent, EventBus, Length, Point, Rect, WindowId};

use crate::{
    Compositor, InteractionOutcome, Layout, PointerTarget, ResizeHandle, SnapZone, WindowContent,
    WindowOptions,
};

const ORIGINAL: Rect = Rect::new(100.0, 100.0, 600.0, 400.0);

fn desktop_with_window() -> (Compositor, WindowId) {
    let mut desk = Compositor::headless().with_seed(42);
    let options = WindowOptions {
        id: Some(WindowId::from("w")),
        left: Some(Length::Px(ORIGINAL.x)),
        top: Some(Length::Px(ORIGINAL.y)),
        width: Some(Length::Px(ORIGINAL.width)),
        height: Some(Length::Px(ORIGINAL.height)),
        icon: None,
    };
    let id = desk
        .create_window("W", WindowContent::Empty, options)
        .unwrap();
    (desk, id)
}

fn drag_to_left_edge(desk: &mut Compositor, id: &WindowId) {
    desk.pointer_down(id, Point::new(300.0, 115.0), PointerTarget::Header, 1)
        .unwrap();
    desk.pointer_move(Point::new(5.0, 400.0));
    assert_eq!(desk.snap_preview().map(|p| p.zone), Some(SnapZone::Left));
    let outcome = desk.pointer_up(Point::new(5.0, 400.0));
    assert_eq!(outcome, Some(InteractionOutcome::Snapped(SnapZone::Left)));
}

#[test]
fn drag_release_on_left_edge_snaps_and_remembers() {
    let (mut desk, id) = desktop_with_window();
    drag_to_left_edge(&mut desk, &id);

    let record = desk.window(&id).unwrap();
    let height = desk.workspace().usable_height();
    assert_eq!(record.geometry(), Rect::new(0.0, 0.0, 960.0, height));
    assert_eq!(record.layout(), Layout::Snapped(SnapZone::Left));
    assert_eq!(record.saved_geometry(), Some(ORIGINAL));
}

#[test]
fn maximize_after_snap_restores_the_pre_snap_rect() {
    let (mut desk, id) = desktop_with_window();
    drag_to_left_edge(&mut desk, &id);

    desk.maximize(&id).unwrap();
    let record = desk.window(&id).unwrap();
    assert_eq!(record.layout(), Layout::Maximized);
    assert_eq!(record.geometry(), desk.workspace().usable());

    desk.maximize(&id).unwrap();
    let record = desk.window(&id).unwrap();
    assert_eq!(record.layout(), Layout::Floating);
    assert_eq!(record.geometry(), ORIGINAL);
    assert_eq!(record.saved_geometry(), None);
}

#[test]
fn repeated_snaps_keep_the_first_stash() {
    let (mut desk, id) = desktop_with_window();
    desk.snap(&id, SnapZone::Left).unwrap();
    desk.snap(&id, SnapZone::Right).unwrap();
    desk.snap(&id, SnapZone::BottomRight).unwrap();
    desk.maximize(&id).unwrap();
    desk.restore(&id).unwrap();
    assert_eq!(desk.window(&id).unwrap().geometry(), ORIGINAL);
}

#[test]
fn southeast_resize_clamps_width_and_keeps_anchor() {
    let (mut desk, id) = desktop_with_window();
    desk.pointer_down(
        &id,
        Point::new(700.0, 500.0),
        PointerTarget::Handle(ResizeHandle::SE),
        1,
    )
    .unwrap();
    desk.pointer_move(Point::new(300.0, 580.0));
    let outcome = desk.pointer_up(Point::new(300.0, 580.0));

    let expected = Rect::new(100.0, 100.0, 300.0, 480.0);
    assert_eq!(outcome, Some(InteractionOutcome::Resized(expected)));
    assert_eq!(desk.window(&id).unwrap().geometry(), expected);
}

#[test]
fn northwest_resize_keeps_opposite_corner() {
    let (mut desk, id) = desktop_with_window();
    desk.pointer_down(
        &id,
        Point::new(100.0, 100.0),
        PointerTarget::Handle(ResizeHandle::NW),
        1,
    )
    .unwrap();
    desk.pointer_move(Point::new(600.0, 450.0));
    desk.pointer_up(Point::new(600.0, 450.0));

    let rect = desk.window(&id).unwrap().geometry();
    assert_eq!((rect.width, rect.height), (300.0, 200.0));
    assert_eq!((rect.right(), rect.bottom()), (ORIGINAL.right(), ORIGINAL.bottom()));
}

#[test]
fn drag_out_of_snap_then_back_in() {
    let (mut desk, id) = desktop_with_window();
    drag_to_left_edge(&mut desk, &id);

    // Pull it out by the header: back to the remembered size under the pointer.
    desk.pointer_down(&id, Point::new(480.0, 10.0), PointerTarget::Header, 1)
        .unwrap();
    let record = desk.window(&id).unwrap();
    assert_eq!(record.layout(), Layout::Floating);
    assert_eq!(record.geometry(), Rect::new(180.0, -10.0, 600.0, 400.0));

    desk.pointer_move(Point::new(1915.0, 500.0));
    let outcome = desk.pointer_up(Point::new(1915.0, 500.0));
    assert_eq!(outcome, Some(InteractionOutcome::Snapped(SnapZone::Right)));

    let record = desk.window(&id).unwrap();
    assert_eq!(record.geometry(), Rect::new(960.0, 0.0, 960.0, 1030.0));
    assert_eq!(record.saved_geometry(), Some(Rect::new(180.0, -10.0, 600.0, 400.0)));
}

#[tokio::test]
async fn subscribers_see_focus_changes() {
    let bus = EventBus::new(64);
    let mut rx = bus.subscribe();
    let mut desk = Compositor::headless().with_event_bus(bus);

    let a = desk
        .create_window("A", WindowContent::Empty, WindowOptions::with_id("a"))
        .unwrap();
    let b = desk
        .create_window("B", WindowContent::Empty, WindowOptions::with_id("b"))
        .unwrap();
    desk.focus_window(&a).unwrap();

    let mut focused = Vec::new();
    while let Ok(event) = rx.try_recv() {
        if let DesktopEvent::WindowFocused(id) = event {
            focused.push(id);
        }
    }
    assert_eq!(focused, vec![a.clone(), b, a]);

    desk.resize_workspace(1280.0, 720.0);
    let event = rx.recv().await.unwrap();
    assert_eq!(
        event,
        DesktopEvent::WorkspaceResized {
            width: 1280.0,
            height: 720.0
        }
    );
}
