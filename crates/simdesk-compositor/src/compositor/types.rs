//! Core types and constructors for the Compositor.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use simdesk_common::{DesktopEvent, EventBus, Length, WindowId};

use crate::interaction::{InteractionController, SessionKind};
use crate::settings::CompositorSettings;
use crate::snap::SnapPreview;
use crate::store::{WindowRecord, WindowStore, WindowSummary};
use crate::taskbar::{TaskbarAdapter, TaskbarModel};
use crate::workspace::Workspace;

/// Placement overrides for a new window. Missing fields use the settings'
/// defaults; `left`/`top` default to a random cascade position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowOptions {
    pub id: Option<WindowId>,
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub left: Option<Length>,
    pub top: Option<Length>,
    pub icon: Option<String>,
}

impl WindowOptions {
    pub fn with_id(id: impl Into<WindowId>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }
}

/// Snapshot of the whole desktop for display or logging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesktopSummary {
    pub workspace: Workspace,
    /// Bottom of the stack first.
    pub windows: Vec<WindowSummary>,
    pub active: Option<WindowId>,
}

/// The window compositor: owns every window record and the single pointer
/// session, and keeps the taskbar in step.
pub struct Compositor<T: TaskbarAdapter = TaskbarModel> {
    pub(super) settings: CompositorSettings,
    pub(super) workspace: Workspace,
    pub(super) store: WindowStore,
    pub(super) interaction: InteractionController,
    pub(super) taskbar: T,
    /// Window whose taskbar entry is marked active.
    pub(super) active: Option<WindowId>,
    pub(super) preview: Option<SnapPreview>,
    /// Controller state restored before its window was opened.
    pub(super) pending_state: BTreeMap<String, Value>,
    pub(super) events: Option<EventBus>,
    pub(super) rng: StdRng,
}

impl Compositor<TaskbarModel> {
    /// Compositor with default settings, the default workspace, and an
    /// in-memory taskbar.
    pub fn headless() -> Self {
        Self::new(
            CompositorSettings::default(),
            Workspace::default(),
            TaskbarModel::new(),
        )
    }
}

impl<T: TaskbarAdapter> Compositor<T> {
    pub fn new(settings: CompositorSettings, workspace: Workspace, taskbar: T) -> Self {
        let store = WindowStore::new(
            settings.base_z_order,
            settings.min_width,
            settings.min_height,
        );
        Self {
            settings,
            workspace,
            store,
            interaction: InteractionController::new(),
            taskbar,
            active: None,
            preview: None,
            pending_state: BTreeMap::new(),
            events: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Publish lifecycle events to `bus`.
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.events = Some(bus);
        self
    }

    /// Make cascade placement deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    // -- Accessors --

    pub fn settings(&self) -> &CompositorSettings {
        &self.settings
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn store(&self) -> &WindowStore {
        &self.store
    }

    pub fn window(&self, id: &WindowId) -> Option<&WindowRecord> {
        self.store.get(id).ok()
    }

    pub fn window_count(&self) -> usize {
        self.store.len()
    }

    pub fn taskbar(&self) -> &T {
        &self.taskbar
    }

    pub fn taskbar_mut(&mut self) -> &mut T {
        &mut self.taskbar
    }

    pub fn event_bus(&self) -> Option<&EventBus> {
        self.events.as_ref()
    }

    pub fn active_window(&self) -> Option<&WindowId> {
        self.active.as_ref()
    }

    /// The window with the highest z-order.
    pub fn focused_window(&self) -> Option<&WindowId> {
        self.store.topmost().map(|r| r.id())
    }

    pub fn snap_preview(&self) -> Option<&SnapPreview> {
        self.preview.as_ref()
    }

    pub fn active_session(&self) -> Option<SessionKind> {
        self.interaction.session().map(|s| s.kind())
    }

    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    /// Open window ids, bottom of the stack first.
    pub fn list_open_windows(&self) -> Vec<WindowId> {
        self.store.ids()
    }

    /// Open windows whose content is an application controller.
    pub fn list_open_applications(&self) -> Vec<WindowId> {
        self.store
            .list_by_z_order()
            .into_iter()
            .filter(|r| r.has_controller())
            .map(|r| r.id().clone())
            .collect()
    }

    pub fn summary(&self) -> DesktopSummary {
        DesktopSummary {
            workspace: self.workspace,
            windows: self
                .store
                .list_by_z_order()
                .into_iter()
                .map(WindowRecord::summary)
                .collect(),
            active: self.active.clone(),
        }
    }

    pub(super) fn emit(&self, event: DesktopEvent) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }

    pub(super) fn emit_layout(&self, id: &WindowId) {
        if let Some(record) = self.window(id) {
            self.emit(DesktopEvent::LayoutChanged {
                id: id.clone(),
                layout: record.layout().to_string(),
            });
        }
    }
}
