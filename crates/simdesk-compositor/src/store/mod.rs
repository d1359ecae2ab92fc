//! The registry of open windows: geometry, layout, and stacking order.

mod types;

pub use types::*;

use std::collections::HashMap;

use simdesk_common::{CompositorError, Rect, WindowId};
use tracing::{debug, warn};

use crate::controller::WindowContent;
use crate::geometry;

/// Owns every [`WindowRecord`], keyed by id.
///
/// Operations on an unknown id return [`CompositorError::NotFound`] and
/// change nothing.
pub struct WindowStore {
    records: HashMap<WindowId, WindowRecord>,
    base_z_order: u64,
    min_width: f64,
    min_height: f64,
}

impl WindowStore {
    pub fn new(base_z_order: u64, min_width: f64, min_height: f64) -> Self {
        Self {
            records: HashMap::new(),
            base_z_order,
            min_width,
            min_height,
        }
    }

    /// Insert a floating, visible window on top of the stack.
    pub fn create(
        &mut self,
        id: WindowId,
        title: impl Into<String>,
        icon: impl Into<String>,
        geometry: Rect,
        content: WindowContent,
    ) -> Result<WindowId, CompositorError> {
        if self.records.contains_key(&id) {
            return Err(CompositorError::InvalidTransition {
                op: "create",
                reason: "a window with this id is already open",
            });
        }
        let record = WindowRecord {
            id: id.clone(),
            title: title.into(),
            icon: icon.into(),
            geometry: self.checked(&id, geometry),
            z_order: self.next_z(),
            visibility: Visibility::Normal,
            layout: Layout::Floating,
            saved_geometry: None,
            content,
        };
        self.records.insert(id.clone(), record);
        Ok(id)
    }

    pub fn get(&self, id: &WindowId) -> Result<&WindowRecord, CompositorError> {
        self.records
            .get(id)
            .ok_or_else(|| CompositorError::NotFound(id.clone()))
    }

    pub(crate) fn get_mut(&mut self, id: &WindowId) -> Result<&mut WindowRecord, CompositorError> {
        self.records
            .get_mut(id)
            .ok_or_else(|| CompositorError::NotFound(id.clone()))
    }

    pub fn contains(&self, id: &WindowId) -> bool {
        self.records.contains_key(id)
    }

    pub fn remove(&mut self, id: &WindowId) -> Result<WindowRecord, CompositorError> {
        self.records
            .remove(id)
            .ok_or_else(|| CompositorError::NotFound(id.clone()))
    }

    /// Replace a window's rectangle. Degenerate rectangles are clamped to
    /// the minimum size.
    pub fn set_geometry(&mut self, id: &WindowId, rect: Rect) -> Result<(), CompositorError> {
        let rect = self.checked(id, rect);
        self.get_mut(id)?.geometry = rect;
        Ok(())
    }

    /// Change a window's layout.
    ///
    /// Floating always clears the saved geometry. Any other layout keeps
    /// `saved`, else the already-saved rectangle, else the current geometry.
    pub fn set_layout(
        &mut self,
        id: &WindowId,
        layout: Layout,
        saved: Option<Rect>,
    ) -> Result<(), CompositorError> {
        let record = self.get_mut(id)?;
        record.saved_geometry = if layout.is_floating() {
            None
        } else {
            Some(
                saved
                    .or(record.saved_geometry)
                    .unwrap_or(record.geometry),
            )
        };
        record.layout = layout;
        Ok(())
    }

    pub fn set_visibility(
        &mut self,
        id: &WindowId,
        visibility: Visibility,
    ) -> Result<(), CompositorError> {
        self.get_mut(id)?.visibility = visibility;
        Ok(())
    }

    /// Raise a window above all others.
    ///
    /// Returns `false` when it already held the strictly highest z-order,
    /// in which case nothing changes.
    pub fn bring_to_front(&mut self, id: &WindowId) -> Result<bool, CompositorError> {
        let current = self.get(id)?.z_order;
        let highest_other = self
            .records
            .values()
            .filter(|r| &r.id != id)
            .map(|r| r.z_order)
            .max();

        match highest_other {
            Some(other) if other >= current => {
                self.get_mut(id)?.z_order = other + 1;
                debug!(window = %id, z = other + 1, "raised window");
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// All windows, bottom of the stack first.
    pub fn list_by_z_order(&self) -> Vec<&WindowRecord> {
        let mut records: Vec<&WindowRecord> = self.records.values().collect();
        records.sort_by_key(|r| r.z_order);
        records
    }

    pub fn topmost(&self) -> Option<&WindowRecord> {
        self.records.values().max_by_key(|r| r.z_order)
    }

    pub fn ids(&self) -> Vec<WindowId> {
        self.list_by_z_order()
            .into_iter()
            .map(|r| r.id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn next_z(&self) -> u64 {
        self.records
            .values()
            .map(|r| r.z_order)
            .max()
            .map_or(self.base_z_order, |z| z + 1)
    }

    fn checked(&self, id: &WindowId, rect: Rect) -> Rect {
        match geometry::check_degenerate(rect) {
            Ok(()) => rect,
            Err(e) => {
                warn!(window = %id, "{e}, clamping to minimum size");
                geometry::sanitize(rect, self.min_width, self.min_height)
            }
        }
    }
}
