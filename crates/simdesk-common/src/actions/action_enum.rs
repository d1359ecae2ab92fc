use serde::{Deserialize, Serialize};

use crate::types::WindowId;

/// Every user-triggerable desktop action.
///
/// Desktop icons, taskbar buttons, and replay scripts all resolve to a
/// `DesktopAction`; the compositor's command table matches on this enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesktopAction {
    // -- Launchers --
    OpenBrowser,
    OpenTerminal,
    OpenFileManager,
    OpenEmailClient,
    OpenNetworkMonitor,
    OpenSecurityTools,
    OpenSystemLogs,
    OpenProcessMonitor,
    OpenMalwareScanner,
    OpenRansomwareDecryptor,

    // -- Window --
    Focus(WindowId),
    Close(WindowId),
    Minimize(WindowId),
    Maximize(WindowId),
    Toggle(WindowId),
}

/// What a launcher action opens: a fixed window id, its title, and the
/// default size as a percentage of the usable workspace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub width_percent: f64,
    pub height_percent: f64,
}
