use super::{DesktopAction, LaunchSpec};

const fn spec(id: &'static str, title: &'static str, w: f64, h: f64) -> LaunchSpec {
    LaunchSpec {
        id,
        title,
        width_percent: w,
        height_percent: h,
    }
}

impl DesktopAction {
    /// Human-readable label for icons and menus.
    pub fn label(&self) -> &'static str {
        match self {
            DesktopAction::Focus(_) => "Focus Window",
            DesktopAction::Close(_) => "Close Window",
            DesktopAction::Minimize(_) => "Minimize Window",
            DesktopAction::Maximize(_) => "Maximize Window",
            DesktopAction::Toggle(_) => "Toggle Window",
            launcher => launcher.launcher().map(|s| s.title).unwrap_or("Unknown"),
        }
    }

    /// Launch parameters for launcher actions, `None` for window actions.
    pub fn launcher(&self) -> Option<LaunchSpec> {
        let s = match self {
            DesktopAction::OpenBrowser => spec("browser", "Web Browser", 80.0, 70.0),
            DesktopAction::OpenTerminal => spec("terminal", "Terminal", 70.0, 60.0),
            DesktopAction::OpenFileManager => spec("files", "File Manager", 75.0, 65.0),
            DesktopAction::OpenEmailClient => spec("email", "Email Client", 80.0, 70.0),
            DesktopAction::OpenNetworkMonitor => {
                spec("wireshark", "Network Monitor", 85.0, 75.0)
            }
            DesktopAction::OpenSecurityTools => spec("security", "Security Tools", 70.0, 60.0),
            DesktopAction::OpenSystemLogs => spec("logs", "System Logs", 75.0, 65.0),
            DesktopAction::OpenProcessMonitor => {
                spec("process-monitor", "Process Monitor", 75.0, 65.0)
            }
            DesktopAction::OpenMalwareScanner => {
                spec("malware-scanner", "Malware Scanner", 70.0, 60.0)
            }
            DesktopAction::OpenRansomwareDecryptor => {
                spec("ransomware-decryptor", "Ransomware Decryptor", 70.0, 60.0)
            }
            _ => return None,
        };
        Some(s)
    }

    /// Launchers shown as desktop icons, in display order.
    pub fn desktop_icons() -> Vec<DesktopAction> {
        vec![
            DesktopAction::OpenBrowser,
            DesktopAction::OpenTerminal,
            DesktopAction::OpenFileManager,
            DesktopAction::OpenEmailClient,
            DesktopAction::OpenNetworkMonitor,
            DesktopAction::OpenSystemLogs,
            DesktopAction::OpenProcessMonitor,
            DesktopAction::OpenMalwareScanner,
            DesktopAction::OpenRansomwareDecryptor,
        ]
    }
}
