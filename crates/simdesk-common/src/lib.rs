pub mod actions;
pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use actions::{DesktopAction, LaunchSpec};
pub use errors::{CompositorError, ConfigError, DesktopError, HookError};
pub use events::{DesktopEvent, EventBus};
pub use id::{new_id, new_window_id};
pub use types::{Length, Point, Rect, WindowId};

pub type Result<T> = std::result::Result<T, DesktopError>;
