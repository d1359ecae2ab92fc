//! New-window placement validation.

use crate::schema::DesktopConfig;

use super::helpers::{validate_length, validate_range};

pub(crate) fn validate_windows(errors: &mut Vec<String>, config: &DesktopConfig) {
    let w = &config.windows;
    validate_length(errors, "windows.default_width", w.default_width);
    validate_length(errors, "windows.default_height", w.default_height);
    validate_range(errors, "windows.cascade_min_percent", w.cascade_min_percent, 0, 100);
    validate_range(errors, "windows.cascade_max_percent", w.cascade_max_percent, 0, 100);
    if w.cascade_min_percent > w.cascade_max_percent {
        errors.push(format!(
            "windows.cascade_min_percent = {} exceeds windows.cascade_max_percent = {}",
            w.cascade_min_percent, w.cascade_max_percent
        ));
    }
}
