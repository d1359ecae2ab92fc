//! Pointer events: drag and resize sessions.
//!
//! Pointer positions arrive in host coordinates and are converted to
//! workspace-local ones on entry. Move and up events look up the active
//! session's window by id each time.

use simdesk_common::{CompositorError, DesktopEvent, Point, Rect, WindowId};
use tracing::{debug, trace, warn};

use super::Compositor;
use crate::controller::settle;
use crate::interaction::{
    resize_rect, unsnap_placement, DragSession, InteractionOutcome, PointerTarget, PriorLayout,
    ResizeSession, Session, SessionPhase,
};
use crate::snap::{classify, controller as snap, SnapPreview, SnapZone};
use crate::store::Layout;
use crate::taskbar::TaskbarAdapter;

impl<T: TaskbarAdapter> Compositor<T> {
    /// Pointer pressed on a window.
    ///
    /// Focuses the window once. A press on the header starts a drag, a
    /// press on a handle starts a resize, a press on the body only focuses.
    /// Refused while another session is active.
    pub fn pointer_down(
        &mut self,
        id: &WindowId,
        host: Point,
        target: PointerTarget,
        clicks: u8,
    ) -> Result<(), CompositorError> {
        if let Some(active) = self.interaction.session() {
            warn!(
                window = %id,
                active = %active.window(),
                "pointer down refused: another drag or resize session is active"
            );
            return Err(CompositorError::InvalidTransition {
                op: "pointer_down",
                reason: "another drag or resize session is active",
            });
        }

        self.focus_window(id)?;
        let pointer = self.workspace.to_local(host);

        let session = match target {
            PointerTarget::Body => return Ok(()),
            PointerTarget::Handle(handle) => Session::Resize(ResizeSession {
                window: id.clone(),
                handle,
                pointer_start: pointer,
                start_geometry: self.store.get(id)?.geometry(),
                phase: SessionPhase::Started,
            }),
            PointerTarget::Header => Session::Drag(self.start_drag(id, pointer, clicks)?),
        };

        debug!(window = %id, kind = ?session.kind(), "session started");
        self.interaction.begin(session)
    }

    /// Pointer moved anywhere on the desktop.
    pub fn pointer_move(&mut self, host: Point) {
        let pointer = self.workspace.to_local(host);
        let Some(session) = self.interaction.session() else {
            trace!("pointer move with no session");
            return;
        };
        let id = session.window().clone();
        if !self.store.contains(&id) {
            self.abandon_session(&id);
            return;
        }

        match self.interaction.session_mut() {
            Some(Session::Drag(drag)) => {
                drag.phase = SessionPhase::Moving;
                let geometry = drag.geometry_at(pointer);
                let zone = classify(pointer, &self.workspace, &self.settings.snap);
                let zone_changed = drag.zone != zone;
                drag.zone = zone;

                self.set_geometry_logged(&id, geometry);
                if zone_changed {
                    self.set_preview(zone);
                }
            }
            Some(Session::Resize(resize)) => {
                resize.phase = SessionPhase::Moving;
                let (dx, dy) = resize.pointer_start.delta_to(pointer);
                let rect = resize_rect(
                    resize.start_geometry,
                    resize.handle,
                    dx,
                    dy,
                    self.settings.min_width,
                    self.settings.min_height,
                );
                self.apply_resize(&id, rect);
            }
            None => {}
        }
    }

    /// Pointer released. Ends the active session, if any.
    pub fn pointer_up(&mut self, host: Point) -> Option<InteractionOutcome> {
        let pointer = self.workspace.to_local(host);
        let Some(session) = self.interaction.finish() else {
            trace!("pointer up with no session");
            return None;
        };
        let id = session.window().clone();
        self.set_preview(None);

        if !self.store.contains(&id) {
            debug!(window = %id, "session window closed, cancelling");
            return Some(InteractionOutcome::Cancelled);
        }

        let outcome = match session {
            Session::Drag(drag) => self.end_drag(drag, pointer),
            Session::Resize(resize) => self.end_resize(resize, pointer),
        };
        debug!(window = %id, ?outcome, "session ended");
        Some(outcome)
    }

    /// End the session without committing anything if it targets `id`.
    pub(super) fn cancel_session_for(&mut self, id: &WindowId) {
        if let Some(session) = self.interaction.cancel_for(id) {
            debug!(window = %id, kind = ?session.kind(), "session cancelled");
            self.set_preview(None);
        }
    }

    fn abandon_session(&mut self, id: &WindowId) {
        debug!(window = %id, "session window closed, cancelling");
        self.interaction.finish();
        self.set_preview(None);
    }

    fn start_drag(
        &mut self,
        id: &WindowId,
        pointer: Point,
        clicks: u8,
    ) -> Result<DragSession, CompositorError> {
        let record = self.store.get(id)?;
        let layout = record.layout();
        let geometry = record.geometry();

        if layout.is_floating() {
            return Ok(DragSession {
                window: id.clone(),
                pointer_start: pointer,
                reference: geometry,
                prior: None,
                clicks,
                zone: None,
                phase: SessionPhase::Started,
            });
        }

        // Drag-to-restore: pull the window out of its zone and hang it
        // under the pointer at its saved size.
        let prior = PriorLayout {
            layout,
            geometry,
            saved_geometry: record.saved_geometry(),
        };
        let restored = prior.saved_geometry.unwrap_or(geometry);
        let usable = self.workspace.usable();
        let header_offset = self.settings.header_offset;

        let record = self.store.get_mut(id)?;
        let from_controller = record
            .controller_mut()
            .filter(|c| c.maximized_state() == Some(true))
            .and_then(|c| {
                settle(
                    id,
                    "drag_start_on_maximized",
                    c.drag_start_on_maximized(pointer, usable),
                )
            })
            .flatten();
        let reference = match from_controller {
            Some(origin) => restored.with_origin(origin),
            None => unsnap_placement(restored, pointer, header_offset),
        };

        self.store.set_geometry(id, reference)?;
        self.store.set_layout(id, Layout::Floating, None)?;
        debug!(window = %id, from = %layout, "unsnapped by drag");
        self.emit_layout(id);

        Ok(DragSession {
            window: id.clone(),
            pointer_start: pointer,
            reference,
            prior: Some(prior),
            clicks,
            zone: None,
            phase: SessionPhase::Started,
        })
    }

    /// The zone is classified again at the release point rather than taken
    /// from the last preview. A release with no intervening move still
    /// snaps, and a release that left the preview zone only moves.
    fn end_drag(&mut self, drag: DragSession, pointer: Point) -> InteractionOutcome {
        let id = drag.window.clone();
        let displacement = drag.pointer_start.distance_to(pointer);

        if displacement < self.settings.click_epsilon {
            return self.end_drag_click(drag);
        }

        let geometry = drag.geometry_at(pointer);
        self.set_geometry_logged(&id, geometry);

        let Some(zone) = classify(pointer, &self.workspace, &self.settings.snap) else {
            return InteractionOutcome::Moved;
        };
        match snap::commit(
            &mut self.store,
            &id,
            zone,
            &self.workspace,
            Some(drag.reference),
        ) {
            Ok(_) => {
                self.emit_layout(&id);
                InteractionOutcome::Snapped(zone)
            }
            Err(e) => {
                warn!("snap on release failed: {e}");
                InteractionOutcome::Moved
            }
        }
    }

    /// A release that barely moved: double activation toggles maximize,
    /// a single one undoes whatever pointer-down did.
    fn end_drag_click(&mut self, drag: DragSession) -> InteractionOutcome {
        let id = drag.window;
        let double = drag.clicks >= 2;

        match (drag.prior, double) {
            (Some(prior), true) => {
                // Back into the zone first, so the restore goes through the
                // same path as any other.
                self.reinstate(&id, prior);
                match self.restore(&id) {
                    Ok(_) => InteractionOutcome::Restored,
                    Err(_) => InteractionOutcome::Cancelled,
                }
            }
            (None, true) => match self.maximize(&id) {
                Ok(()) => InteractionOutcome::Maximized,
                Err(_) => InteractionOutcome::Cancelled,
            },
            (Some(prior), false) => {
                self.reinstate(&id, prior);
                self.emit_layout(&id);
                InteractionOutcome::Cancelled
            }
            (None, false) => {
                self.set_geometry_logged(&id, drag.reference);
                InteractionOutcome::Cancelled
            }
        }
    }

    fn end_resize(&mut self, resize: ResizeSession, pointer: Point) -> InteractionOutcome {
        let (dx, dy) = resize.pointer_start.delta_to(pointer);
        let moved = resize.phase == SessionPhase::Moving
            || dx.hypot(dy) >= self.settings.click_epsilon;
        if !moved {
            return InteractionOutcome::Cancelled;
        }

        let rect = resize_rect(
            resize.start_geometry,
            resize.handle,
            dx,
            dy,
            self.settings.min_width,
            self.settings.min_height,
        );
        self.apply_resize(&resize.window, rect);
        InteractionOutcome::Resized(rect)
    }

    /// Resizing always leaves the window floating, discarding any stash.
    fn apply_resize(&mut self, id: &WindowId, rect: Rect) {
        self.set_geometry_logged(id, rect);
        let was_floating = self
            .window(id)
            .is_some_and(|r| r.layout().is_floating());
        if !was_floating {
            if let Err(e) = self.store.set_layout(id, Layout::Floating, None) {
                warn!("resize layout change failed: {e}");
            }
            self.emit_layout(id);
        }
    }

    fn reinstate(&mut self, id: &WindowId, prior: PriorLayout) {
        self.set_geometry_logged(id, prior.geometry);
        if let Err(e) = self.store.set_layout(id, prior.layout, prior.saved_geometry) {
            warn!("reinstating layout failed: {e}");
        }
    }

    fn set_geometry_logged(&mut self, id: &WindowId, rect: Rect) {
        if let Err(e) = self.store.set_geometry(id, rect) {
            warn!("geometry update failed: {e}");
        }
    }

    fn set_preview(&mut self, zone: Option<SnapZone>) {
        let next = zone.map(|z| SnapPreview::new(z, &self.workspace));
        if next.map(|p| p.zone) == self.preview.map(|p| p.zone) {
            return;
        }
        self.preview = next;
        self.emit(DesktopEvent::SnapPreview(
            zone.map(|z| z.to_string()),
        ));
    }
}
