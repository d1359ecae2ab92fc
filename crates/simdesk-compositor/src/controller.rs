//! Application controller hooks.
//!
//! Window content may supply an [`ApplicationController`]. The compositor
//! calls its hooks at lifecycle transitions but never owns its state. Every
//! hook has a no-op default, so a controller implements only what it needs.
//! A failing hook is logged and the transition that triggered it goes on.

use std::fmt;

use serde_json::Value;
use simdesk_common::{CompositorError, HookError, Point, Rect, WindowId};
use tracing::warn;

pub type HookResult<T> = Result<T, HookError>;

pub trait ApplicationController {
    /// Called once, right after the window is created and focused.
    fn initialize(&mut self) -> HookResult<()> {
        Ok(())
    }

    /// Called before the window record is removed.
    fn cleanup(&mut self) -> HookResult<()> {
        Ok(())
    }

    /// Called after the window was maximized.
    fn maximize(&mut self) -> HookResult<()> {
        Ok(())
    }

    /// Content-aware maximized flag. `None` defers to the window's layout.
    fn maximized_state(&self) -> Option<bool> {
        None
    }

    /// Called when the compositor stashes the floating rectangle.
    fn store_original_dimensions(&mut self, _geometry: Rect) -> HookResult<()> {
        Ok(())
    }

    /// Rectangle to restore to when leaving a snapped or maximized layout.
    /// `None` uses the compositor's stash.
    fn restore_original_dimensions(&mut self) -> HookResult<Option<Rect>> {
        Ok(None)
    }

    /// Top-left corner for a maximized window that starts being dragged.
    /// `None` uses the default placement under the pointer.
    fn drag_start_on_maximized(
        &mut self,
        _pointer: Point,
        _usable: Rect,
    ) -> HookResult<Option<Point>> {
        Ok(None)
    }

    /// Persistable state, if any.
    fn state(&self) -> Option<Value> {
        None
    }

    fn set_state(&mut self, _state: Value) -> HookResult<()> {
        Ok(())
    }
}

/// What a window displays.
#[derive(Default)]
pub enum WindowContent {
    #[default]
    Empty,
    /// Opaque markup rendered by the host.
    Markup(String),
    Controller(Box<dyn ApplicationController>),
}

impl WindowContent {
    pub fn controller(controller: impl ApplicationController + 'static) -> Self {
        WindowContent::Controller(Box::new(controller))
    }
}

impl fmt::Debug for WindowContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowContent::Empty => f.write_str("Empty"),
            WindowContent::Markup(markup) => f.debug_tuple("Markup").field(&markup.len()).finish(),
            WindowContent::Controller(_) => f.write_str("Controller(..)"),
        }
    }
}

/// Unwrap a hook result, logging a failure instead of propagating it.
pub(crate) fn settle<T>(window: &WindowId, hook: &'static str, result: HookResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            let err = CompositorError::Hook {
                window: window.clone(),
                hook,
                message: e.to_string(),
            };
            warn!(window = %window, hook, "{err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;
    impl ApplicationController for Silent {}

    struct Broken;
    impl ApplicationController for Broken {
        fn cleanup(&mut self) -> HookResult<()> {
            Err(HookError::new("socket already closed"))
        }
    }

    #[test]
    fn default_hooks_are_noops() {
        let mut c = Silent;
        assert!(c.initialize().is_ok());
        assert_eq!(c.maximized_state(), None);
        assert_eq!(c.restore_original_dimensions().unwrap(), None);
        assert_eq!(
            c.drag_start_on_maximized(Point::new(1.0, 2.0), Rect::new(0.0, 0.0, 9.0, 9.0))
                .unwrap(),
            None
        );
        assert!(c.state().is_none());
    }

    #[test]
    fn settle_swallows_failures() {
        let id = WindowId::from("mail");
        assert_eq!(settle(&id, "cleanup", Broken.cleanup()), None);
        assert_eq!(settle(&id, "initialize", Silent.initialize()), Some(()));
    }

    #[test]
    fn content_debug_hides_controller() {
        let content = WindowContent::controller(Silent);
        assert_eq!(format!("{content:?}"), "Controller(..)");
        assert_eq!(format!("{:?}", WindowContent::Markup("<p>hi</p>".into())), "Markup(9)");
    }
}
