//! Snap, resize, and drag validation.

use crate::schema::DesktopConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_snap(errors: &mut Vec<String>, config: &DesktopConfig) {
    let snap = &config.snap;
    validate_range(errors, "snap.edge_threshold", snap.edge_threshold, 1, 200);
    validate_range(errors, "snap.corner_threshold", snap.corner_threshold, 1, 200);
    if snap.corner_threshold < snap.edge_threshold {
        errors.push(format!(
            "snap.corner_threshold = {} must not be below snap.edge_threshold = {}",
            snap.corner_threshold, snap.edge_threshold
        ));
    }
}

pub(crate) fn validate_resize(errors: &mut Vec<String>, config: &DesktopConfig) {
    validate_range(errors, "resize.min_width", config.resize.min_width, 50, 2000);
    validate_range(errors, "resize.min_height", config.resize.min_height, 50, 2000);
}

pub(crate) fn validate_drag(errors: &mut Vec<String>, config: &DesktopConfig) {
    validate_range_f64(errors, "drag.click_epsilon", config.drag.click_epsilon, 0.0, 20.0);
    validate_range_f64(errors, "drag.header_offset", config.drag.header_offset, 0.0, 200.0);
}
