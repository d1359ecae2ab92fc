//! Maximize, snap, restore, and workspace resizes.

use simdesk_common::{CompositorError, DesktopEvent, WindowId};
use tracing::{info, warn};

use super::Compositor;
use crate::controller::settle;
use crate::snap::{controller as snap, SnapPreview, SnapZone};
use crate::store::Layout;
use crate::taskbar::TaskbarAdapter;
use crate::workspace::Workspace;

impl<T: TaskbarAdapter> Compositor<T> {
    /// Maximize a window, or restore it if it is already maximized.
    ///
    /// A snapped window is maximized and keeps the floating rectangle it
    /// had before it was snapped. A controller that reports its own
    /// maximized state decides which way this goes. A drag or resize in
    /// progress on the same window is cancelled first.
    pub fn maximize(&mut self, id: &WindowId) -> Result<(), CompositorError> {
        self.cancel_session_for(id);
        let record = self
            .store
            .get(id)
            .inspect_err(|e| warn!("maximize ignored: {e}"))?;
        let is_maximized = record
            .controller()
            .and_then(|c| c.maximized_state())
            .unwrap_or(record.layout() == Layout::Maximized);

        if is_maximized {
            return self.restore(id).map(|_| ());
        }

        snap::commit(&mut self.store, id, SnapZone::Maximize, &self.workspace, None)?;
        if let Some(controller) = self.store.get_mut(id)?.controller_mut() {
            settle(id, "maximize", controller.maximize());
        }
        self.emit_layout(id);
        Ok(())
    }

    /// Snap a window into `zone`, cancelling any session on it.
    pub fn snap(&mut self, id: &WindowId, zone: SnapZone) -> Result<(), CompositorError> {
        self.cancel_session_for(id);
        snap::commit(&mut self.store, id, zone, &self.workspace, None)
            .inspect_err(|e| warn!("snap ignored: {e}"))?;
        self.emit_layout(id);
        Ok(())
    }

    /// Return a snapped or maximized window to its floating geometry.
    ///
    /// Returns whether anything changed.
    pub fn restore(&mut self, id: &WindowId) -> Result<bool, CompositorError> {
        self.cancel_session_for(id);
        let reverted =
            snap::revert(&mut self.store, id).inspect_err(|e| warn!("restore ignored: {e}"))?;
        if reverted {
            self.emit_layout(id);
        }
        Ok(reverted)
    }

    /// Replace the workspace size. Snapped and maximized windows follow
    /// their zones; floating windows stay put.
    pub fn resize_workspace(&mut self, width: f64, height: f64) {
        self.workspace = Workspace {
            width,
            height,
            ..self.workspace
        };

        let workspace = self.workspace;
        let zoned: Vec<(WindowId, SnapZone)> = self
            .store
            .list_by_z_order()
            .into_iter()
            .filter_map(|r| r.layout().zone().map(|zone| (r.id().clone(), zone)))
            .collect();
        for (id, zone) in zoned {
            if let Err(e) = self.store.set_geometry(&id, zone.resolve(&workspace)) {
                warn!("re-resolving {id} failed: {e}");
            }
        }
        if let Some(preview) = &mut self.preview {
            *preview = SnapPreview::new(preview.zone, &workspace);
        }

        info!(width, height, "workspace resized");
        self.emit(DesktopEvent::WorkspaceResized { width, height });
    }
}
