//! Window creation and teardown.

use rand::Rng;
use simdesk_common::{new_window_id, CompositorError, DesktopEvent, LaunchSpec, Length, Rect, WindowId};
use tracing::{debug, info, warn};

use super::{Compositor, WindowOptions};
use crate::controller::{settle, WindowContent};
use crate::taskbar::{icon_for, TaskbarAdapter};

impl<T: TaskbarAdapter> Compositor<T> {
    /// Open a window, or bring it to front if one with the same id is
    /// already open.
    ///
    /// A new window gets a taskbar entry and one focus transfer; then its
    /// controller is initialized and handed any pending restored state.
    pub fn create_window(
        &mut self,
        title: impl Into<String>,
        content: WindowContent,
        options: WindowOptions,
    ) -> Result<WindowId, CompositorError> {
        let id = options.id.clone().unwrap_or_else(new_window_id);

        if self.store.contains(&id) {
            debug!(window = %id, "window already open, focusing");
            self.focus_window(&id)?;
            return Ok(id);
        }

        let title = title.into();
        let icon = options
            .icon
            .clone()
            .unwrap_or_else(|| icon_for(&id).to_string());
        let geometry = self.initial_geometry(&options);

        self.store
            .create(id.clone(), title.clone(), icon.clone(), geometry, content)?;
        self.taskbar.add_entry(&id, &title, &icon);
        info!(window = %id, title = %title, "window opened");
        self.emit(DesktopEvent::WindowOpened(id.clone()));

        self.focus_window(&id)?;

        let pending = self.pending_state.remove(id.as_str());
        let record = self.store.get_mut(&id)?;
        if let Some(controller) = record.controller_mut() {
            settle(&id, "initialize", controller.initialize());
            if let Some(state) = pending {
                settle(&id, "set_state", controller.set_state(state));
            }
        } else if let Some(state) = pending {
            // Only controllers take state; keep it for a later window.
            self.pending_state.insert(id.to_string(), state);
        }

        Ok(id)
    }

    /// Open the window a launcher describes, sized as a share of the
    /// usable workspace.
    pub fn launch(
        &mut self,
        spec: LaunchSpec,
        content: WindowContent,
    ) -> Result<WindowId, CompositorError> {
        let options = WindowOptions {
            id: Some(WindowId::from(spec.id)),
            width: Some(Length::Percent(spec.width_percent)),
            height: Some(Length::Percent(spec.height_percent)),
            ..Default::default()
        };
        self.create_window(spec.title, content, options)
    }

    /// Close a window: end any session on it, run the controller's cleanup,
    /// drop the record, and remove its taskbar entry.
    pub fn close_window(&mut self, id: &WindowId) -> Result<(), CompositorError> {
        if !self.store.contains(id) {
            let err = CompositorError::NotFound(id.clone());
            warn!("close ignored: {err}");
            return Err(err);
        }

        self.cancel_session_for(id);

        let record = self.store.get_mut(id)?;
        if let Some(controller) = record.controller_mut() {
            settle(id, "cleanup", controller.cleanup());
        }
        self.store.remove(id)?;

        self.taskbar.remove_entry(id);
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
        info!(window = %id, "window closed");
        self.emit(DesktopEvent::WindowClosed(id.clone()));
        Ok(())
    }

    fn initial_geometry(&mut self, options: &WindowOptions) -> Rect {
        let usable = self.workspace.usable();
        let width = options
            .width
            .unwrap_or(self.settings.default_width)
            .resolve(usable.width);
        let height = options
            .height
            .unwrap_or(self.settings.default_height)
            .resolve(usable.height);

        let (lo, hi) = self.settings.cascade_range();
        let x = match options.left {
            Some(left) => left.resolve(usable.width),
            None => usable.width * self.rng.gen_range(lo..=hi),
        };
        let y = match options.top {
            Some(top) => top.resolve(usable.height),
            None => usable.height * self.rng.gen_range(lo..=hi),
        };
        Rect::new(usable.x + x, usable.y + y, width, height)
    }
}
