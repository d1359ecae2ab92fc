//! Maps the loaded config (and CLI overrides) onto compositor types.

use simdesk_common::ConfigError;
use simdesk_compositor::{CompositorSettings, SnapSettings, Workspace};
use simdesk_config::{ConfigFile, DesktopConfig};

use crate::cli::Args;

pub fn settings_from_config(config: &DesktopConfig) -> CompositorSettings {
    CompositorSettings {
        snap: SnapSettings {
            enabled: config.snap.enabled,
            edge_threshold: f64::from(config.snap.edge_threshold),
            corner_threshold: f64::from(config.snap.corner_threshold),
        },
        min_width: f64::from(config.resize.min_width),
        min_height: f64::from(config.resize.min_height),
        click_epsilon: config.drag.click_epsilon,
        header_offset: config.drag.header_offset,
        default_width: config.windows.default_width,
        default_height: config.windows.default_height,
        cascade_min_percent: f64::from(config.windows.cascade_min_percent),
        cascade_max_percent: f64::from(config.windows.cascade_max_percent),
        base_z_order: config.windows.base_z_order,
    }
}

/// Fold `--width`/`--height` into the loaded config.
pub fn with_overrides(mut config: DesktopConfig, args: &Args) -> DesktopConfig {
    if let Some(width) = args.width {
        config.workspace.width = width;
    }
    if let Some(height) = args.height {
        config.workspace.height = height;
    }
    config
}

pub fn workspace_from(config: &DesktopConfig) -> Workspace {
    Workspace::new(
        f64::from(config.workspace.width),
        f64::from(config.workspace.height),
        f64::from(config.workspace.taskbar_height),
    )
}

/// Where `--write-config` goes: the `--config` path, else the per-user file.
pub fn config_target(args: &Args) -> Result<ConfigFile, ConfigError> {
    match &args.config {
        Some(path) => Ok(ConfigFile::at(path)),
        None => ConfigFile::platform_default(),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn default_config_matches_default_settings() {
        let settings = settings_from_config(&DesktopConfig::default());
        assert_eq!(settings, CompositorSettings::default());
    }

    #[test]
    fn cli_overrides_workspace_size() {
        let mut config = DesktopConfig::default();
        config.workspace.taskbar_height = 40;
        let args = Args::parse_from(["simdesk", "--width", "1024"]);
        let config = with_overrides(config, &args);
        assert_eq!(config.workspace.width, 1024);
        let workspace = workspace_from(&config);
        assert_eq!(workspace.width, 1024.0);
        assert_eq!(workspace.height, 1080.0);
        assert_eq!(workspace.usable_height(), 1040.0);
    }

    #[test]
    fn write_config_saves_overridden_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("simdesk.toml");
        let args = Args::parse_from([
            "simdesk",
            "--config",
            path.to_str().unwrap(),
            "--height",
            "900",
            "--write-config",
        ]);

        let target = config_target(&args).unwrap();
        assert_eq!(target.path(), path.as_path());
        let config = with_overrides(DesktopConfig::default(), &args);
        target.write(&config).unwrap();

        let saved = simdesk_config::load_config_from(&path).unwrap();
        assert_eq!(saved.workspace.height, 900);
        assert_eq!(saved.workspace.width, 1920);
    }
}
