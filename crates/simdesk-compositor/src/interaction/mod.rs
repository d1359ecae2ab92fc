//! Pointer sessions: one drag or one resize at a time, system-wide.
//!
//! All pointer-move and pointer-up traffic goes through a single
//! [`InteractionController`] which holds the active session, if any, and
//! refers to its window by id.

mod drag;
mod resize;

pub use drag::{unsnap_placement, DragSession, PriorLayout};
pub use resize::{resize_rect, ResizeHandle, ResizeSession};

use serde::{Deserialize, Serialize};
use simdesk_common::{CompositorError, Rect, WindowId};

use crate::snap::SnapZone;

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerTarget {
    Header,
    Handle(ResizeHandle),
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Pointer is down, no move seen yet.
    Started,
    Moving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Drag,
    Resize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Drag(DragSession),
    Resize(ResizeSession),
}

impl Session {
    pub fn window(&self) -> &WindowId {
        match self {
            Session::Drag(s) => &s.window,
            Session::Resize(s) => &s.window,
        }
    }

    pub fn kind(&self) -> SessionKind {
        match self {
            Session::Drag(_) => SessionKind::Drag,
            Session::Resize(_) => SessionKind::Resize,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionOutcome {
    /// Released floating at the dragged position.
    Moved,
    Snapped(SnapZone),
    /// Double-click on a snapped or maximized window restored its stash.
    Restored,
    /// Double-click on a floating window.
    Maximized,
    Resized(Rect),
    /// Ended without effect: a plain click, or the window went away.
    Cancelled,
}

/// Holds the single active session.
#[derive(Debug, Default)]
pub struct InteractionController {
    session: Option<Session>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.session.is_none()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub(crate) fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    /// Claim the session slot. Refused while another session is active.
    pub fn begin(&mut self, session: Session) -> Result<(), CompositorError> {
        if self.session.is_some() {
            return Err(CompositorError::InvalidTransition {
                op: "begin_session",
                reason: "another drag or resize session is active",
            });
        }
        self.session = Some(session);
        Ok(())
    }

    /// Release the slot, returning the session that held it.
    pub fn finish(&mut self) -> Option<Session> {
        self.session.take()
    }

    /// Drop the active session if it targets `window`.
    pub fn cancel_for(&mut self, window: &WindowId) -> Option<Session> {
        if self.session.as_ref().is_some_and(|s| s.window() == window) {
            self.session.take()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simdesk_common::Point;

    fn drag(id: &str) -> Session {
        Session::Drag(DragSession {
            window: WindowId::from(id),
            pointer_start: Point::new(0.0, 0.0),
            reference: Rect::new(0.0, 0.0, 400.0, 300.0),
            prior: None,
            clicks: 1,
            zone: None,
            phase: SessionPhase::Started,
        })
    }

    fn resize(id: &str) -> Session {
        Session::Resize(ResizeSession {
            window: WindowId::from(id),
            handle: ResizeHandle::SE,
            pointer_start: Point::new(0.0, 0.0),
            start_geometry: Rect::new(0.0, 0.0, 400.0, 300.0),
            phase: SessionPhase::Started,
        })
    }

    #[test]
    fn second_session_is_refused() {
        let mut ctl = InteractionController::new();
        ctl.begin(drag("a")).unwrap();
        let err = ctl.begin(resize("b")).unwrap_err();
        assert!(matches!(err, CompositorError::InvalidTransition { .. }));
        assert_eq!(ctl.session().unwrap().window().as_str(), "a");
        assert_eq!(ctl.session().unwrap().kind(), SessionKind::Drag);
    }

    #[test]
    fn finish_frees_the_slot() {
        let mut ctl = InteractionController::new();
        ctl.begin(resize("a")).unwrap();
        assert!(ctl.finish().is_some());
        assert!(ctl.is_idle());
        assert!(ctl.begin(drag("b")).is_ok());
    }

    #[test]
    fn cancel_only_matches_target_window() {
        let mut ctl = InteractionController::new();
        ctl.begin(drag("a")).unwrap();
        assert!(ctl.cancel_for(&WindowId::from("b")).is_none());
        assert!(!ctl.is_idle());
        assert!(ctl.cancel_for(&WindowId::from("a")).is_some());
        assert!(ctl.is_idle());
    }

    #[test]
    fn pointer_target_json() {
        let json = serde_json::to_string(&PointerTarget::Handle(ResizeHandle::NW)).unwrap();
        assert_eq!(json, r#"{"handle":"nw"}"#);
        let t: PointerTarget = serde_json::from_str("\"header\"").unwrap();
        assert_eq!(t, PointerTarget::Header);
    }
}
