//! Shared range-validation helpers used by all domain validators.

use simdesk_common::Length;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float).
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless the length is positive, with percentages capped at 100.
pub(crate) fn validate_length(errors: &mut Vec<String>, name: &str, value: Length) {
    match value {
        Length::Px(px) if px <= 0.0 => {
            errors.push(format!("{name} = {value} must be positive"));
        }
        Length::Percent(pct) if pct <= 0.0 || pct > 100.0 => {
            errors.push(format!("{name} = {value} is out of range (0%, 100%]"));
        }
        _ => {}
    }
}
