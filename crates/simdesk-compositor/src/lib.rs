//! Window compositor for a simulated desktop: window records, z-order,
//! focus, drag and resize sessions, edge snapping, and the taskbar.

pub mod commands;
pub mod compositor;
pub mod controller;
pub mod geometry;
pub mod interaction;
pub mod settings;
pub mod snap;
pub mod store;
pub mod taskbar;
pub mod workspace;

#[cfg(test)]
mod scenario_tests;

pub use compositor::{Compositor, DesktopSummary, SessionSnapshot, WindowOptions};
pub use controller::{ApplicationController, HookResult, WindowContent};
pub use interaction::{InteractionOutcome, PointerTarget, ResizeHandle, SessionKind};
pub use settings::{CompositorSettings, SnapSettings};
pub use snap::{classify, SnapPreview, SnapZone};
pub use store::{Layout, Visibility, WindowRecord, WindowStore, WindowSummary};
pub use taskbar::{NoopTaskbar, TaskbarAdapter, TaskbarModel, TaskbarRequest};
pub use workspace::Workspace;
