//! Configuration schema types for the simulated desktop.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the stock desktop behavior.

mod interaction;
mod system;
mod windows;
mod workspace;

pub use interaction::*;
pub use system::*;
pub use windows::*;
pub use workspace::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub workspace: WorkspaceConfig,
    pub snap: SnapConfig,
    pub resize: ResizeConfig,
    pub drag: DragConfig,
    pub windows: WindowsConfig,
    pub logging: LoggingConfig,
}
