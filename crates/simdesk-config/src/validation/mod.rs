//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod interaction;
mod windows;
mod workspace;


use crate::schema::DesktopConfig;
use simdesk_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DesktopConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    workspace::validate_workspace(&mut errors, config);
    interaction::validate_snap(&mut errors, config);
    interaction::validate_resize(&mut errors, config);
    interaction::validate_drag(&mut errors, config);
    windows::validate_windows(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
