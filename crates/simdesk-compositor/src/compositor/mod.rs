//! The Compositor coordinates the window store, pointer sessions, snapping,
//! the taskbar, and application controller hooks.

mod focus;
mod layout;
mod lifecycle;
mod pointer;
mod session_state;
mod types;

pub use session_state::SessionSnapshot;
pub use types::*;
