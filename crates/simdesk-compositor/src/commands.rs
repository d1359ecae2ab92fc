//! Command table: routes a [`DesktopAction`] to the compositor API.

use simdesk_common::{CompositorError, DesktopAction, WindowId};
use tracing::debug;

use crate::compositor::Compositor;
use crate::controller::WindowContent;
use crate::taskbar::TaskbarAdapter;

impl<T: TaskbarAdapter> Compositor<T> {
    /// Run an action. Launchers return the id of the window they opened
    /// (or focused, when it was already open).
    pub fn execute(&mut self, action: DesktopAction) -> Result<Option<WindowId>, CompositorError> {
        debug!(action = action.label(), "executing action");
        if let Some(spec) = action.launcher() {
            return self.launch(spec, WindowContent::Empty).map(Some);
        }

        match action {
            DesktopAction::Focus(id) => self.focus_window(&id)?,
            DesktopAction::Close(id) => self.close_window(&id)?,
            DesktopAction::Minimize(id) => self.minimize(&id)?,
            DesktopAction::Maximize(id) => self.maximize(&id)?,
            DesktopAction::Toggle(id) => self.toggle(&id)?,
            _ => {}
        }
        Ok(None)
    }
}
