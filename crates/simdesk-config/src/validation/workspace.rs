//! Workspace geometry validation.

use crate::schema::DesktopConfig;

use super::helpers::validate_range;

pub(crate) fn validate_workspace(errors: &mut Vec<String>, config: &DesktopConfig) {
    let ws = &config.workspace;
    if ws.width == 0 {
        errors.push("workspace.width must be greater than 0".into());
    }
    validate_range(errors, "workspace.taskbar_height", ws.taskbar_height, 0, 200);
    if ws.taskbar_height >= ws.height {
        errors.push(format!(
            "workspace.taskbar_height = {} leaves no usable height (height = {})",
            ws.taskbar_height, ws.height
        ));
    }
}
