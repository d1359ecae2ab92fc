//! Controller state that survives a reload.
//!
//! Only what controllers hand out through `state()` is persisted, keyed by
//! window id. Geometry and stacking order are rebuilt fresh every session.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use simdesk_common::{DesktopError, WindowId};
use tracing::{debug, info};

use super::Compositor;
use crate::controller::settle;
use crate::taskbar::TaskbarAdapter;

/// Flat key/value record of per-feature controller state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSnapshot {
    pub features: BTreeMap<String, Value>,
}

impl SessionSnapshot {
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn load_from_path(path: &Path) -> Result<Self, DesktopError> {
        let content = std::fs::read_to_string(path)?;
        let snapshot = serde_json::from_str(&content)?;
        info!(path = %path.display(), "session state loaded");
        Ok(snapshot)
    }

    /// Write as pretty JSON via a `.tmp` sibling and rename.
    pub fn save_to_path(&self, path: &Path) -> Result<(), DesktopError> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, path)?;
        debug!(path = %path.display(), "session state saved");
        Ok(())
    }
}

impl<T: TaskbarAdapter> Compositor<T> {
    /// Collect `state()` from every controller that has some, plus any
    /// restored state still waiting for its window.
    pub fn snapshot_state(&self) -> SessionSnapshot {
        let mut features = self.pending_state.clone();
        for record in self.store.list_by_z_order() {
            if let Some(state) = record.controller().and_then(|c| c.state()) {
                features.insert(record.id().to_string(), state);
            }
        }
        SessionSnapshot { features }
    }

    /// Hand restored state to open controllers; keep the rest until a
    /// window with a matching id opens.
    ///
    /// Returns how many entries were delivered right away.
    pub fn restore_state(&mut self, snapshot: SessionSnapshot) -> usize {
        let mut delivered = 0;
        for (key, state) in snapshot.features {
            let id = WindowId::from(key.as_str());
            let controller = self
                .store
                .get_mut(&id)
                .ok()
                .and_then(|r| r.controller_mut());
            match controller {
                Some(controller) => {
                    settle(&id, "set_state", controller.set_state(state));
                    delivered += 1;
                }
                None => {
                    self.pending_state.insert(key, state);
                }
            }
        }
        debug!(delivered, pending = self.pending_state.len(), "session state restored");
        delivered
    }
}
