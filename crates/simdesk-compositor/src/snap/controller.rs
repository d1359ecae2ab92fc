use simdesk_common::{CompositorError, Rect, WindowId};
use tracing::debug;

use super::SnapZone;
use crate::controller::settle;
use crate::store::{Layout, WindowStore};
use crate::workspace::Workspace;

/// Snap a window into `zone`.
///
/// The floating rectangle is stashed only when nothing is stashed yet, so
/// repeated snaps all return to the geometry held before the first one.
/// `floating` overrides the rectangle to stash (a drag stashes where the
/// window was when the drag began).
pub fn commit(
    store: &mut WindowStore,
    id: &WindowId,
    zone: SnapZone,
    workspace: &Workspace,
    floating: Option<Rect>,
) -> Result<Layout, CompositorError> {
    let record = store.get_mut(id)?;
    let saved = record.saved_geometry;
    let stash = match saved {
        Some(saved) => saved,
        None => {
            let stash = floating.unwrap_or(record.geometry);
            if let Some(controller) = record.controller_mut() {
                settle(
                    id,
                    "store_original_dimensions",
                    controller.store_original_dimensions(stash),
                );
            }
            stash
        }
    };

    let layout = Layout::for_zone(zone);
    store.set_geometry(id, zone.resolve(workspace))?;
    store.set_layout(id, layout, Some(stash))?;
    debug!(window = %id, %zone, "snap committed");
    Ok(layout)
}

/// Return a snapped or maximized window to floating.
///
/// Returns `false` without touching anything when the window already floats.
pub fn revert(store: &mut WindowStore, id: &WindowId) -> Result<bool, CompositorError> {
    let record = store.get_mut(id)?;
    if record.layout.is_floating() {
        return Ok(false);
    }

    let from_controller = record
        .controller_mut()
        .and_then(|c| settle(id, "restore_original_dimensions", c.restore_original_dimensions()))
        .flatten();
    let target = from_controller
        .or(record.saved_geometry)
        .unwrap_or(record.geometry);

    store.set_geometry(id, target)?;
    store.set_layout(id, Layout::Floating, None)?;
    debug!(window = %id, "snap reverted");
    Ok(true)
}
