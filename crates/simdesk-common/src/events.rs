use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::WindowId;

/// Lifecycle notifications emitted by the compositor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DesktopEvent {
    WindowOpened(WindowId),
    WindowClosed(WindowId),
    WindowFocused(WindowId),
    WindowMinimized(WindowId),
    WindowRestored(WindowId),
    /// `layout` is the display form, e.g. `floating`, `snapped:left`, `maximized`.
    LayoutChanged { id: WindowId, layout: String },
    /// Current drag preview zone, `None` once the preview is cleared.
    SnapPreview(Option<String>),
    WorkspaceResized { width: f64, height: f64 },
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<DesktopEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DesktopEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers that received the event.
    pub fn publish(&self, event: DesktopEvent) -> usize {
        match self.sender.send(event) {
            Ok(n) => n,
            Err(broadcast::error::SendError(event)) => {
                tracing::trace!(?event, "no subscribers for desktop event");
                0
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
