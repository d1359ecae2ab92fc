//! Focus, minimize, toggle, and taskbar requests.

use simdesk_common::{CompositorError, DesktopEvent, WindowId};
use tracing::{debug, warn};

use super::Compositor;
use crate::store::Visibility;
use crate::taskbar::{TaskbarAdapter, TaskbarRequest};

impl<T: TaskbarAdapter> Compositor<T> {
    /// Raise a window above all others and mark its taskbar entry active.
    ///
    /// Focusing the topmost window changes no z-order but still reaches the
    /// taskbar. A minimized window is raised and stays minimized.
    pub fn focus_window(&mut self, id: &WindowId) -> Result<(), CompositorError> {
        let raised = self.store.bring_to_front(id).inspect_err(|e| {
            warn!("focus ignored: {e}");
        })?;

        if let Some(previous) = self.active.take() {
            if &previous != id {
                self.taskbar.set_active(&previous, false);
            }
        }
        self.taskbar.set_active(id, true);
        self.active = Some(id.clone());

        debug!(window = %id, raised, "window focused");
        self.emit(DesktopEvent::WindowFocused(id.clone()));
        Ok(())
    }

    pub fn minimize(&mut self, id: &WindowId) -> Result<(), CompositorError> {
        self.store
            .set_visibility(id, Visibility::Minimized)
            .inspect_err(|e| warn!("minimize ignored: {e}"))?;
        self.cancel_session_for(id);

        if self.active.as_ref() == Some(id) {
            self.taskbar.set_active(id, false);
            self.active = None;
        }
        debug!(window = %id, "window minimized");
        self.emit(DesktopEvent::WindowMinimized(id.clone()));
        Ok(())
    }

    /// Restore and focus a minimized window; minimize any other.
    pub fn toggle(&mut self, id: &WindowId) -> Result<(), CompositorError> {
        let record = self
            .store
            .get(id)
            .inspect_err(|e| warn!("toggle ignored: {e}"))?;

        if record.is_minimized() {
            self.store.set_visibility(id, Visibility::Normal)?;
            debug!(window = %id, "window restored");
            self.emit(DesktopEvent::WindowRestored(id.clone()));
            self.focus_window(id)
        } else {
            self.minimize(id)
        }
    }

    pub fn handle_taskbar_request(&mut self, request: TaskbarRequest) -> Result<(), CompositorError> {
        match request {
            TaskbarRequest::Focus(id) => self.focus_window(&id),
            TaskbarRequest::Toggle(id) => self.toggle(&id),
        }
    }
}
