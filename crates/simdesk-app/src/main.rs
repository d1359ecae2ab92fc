mod cli;
mod script;
mod setup;

use std::path::Path;

use simdesk_common::{DesktopAction, EventBus};
use simdesk_compositor::{Compositor, SessionSnapshot, TaskbarModel, WindowContent};
use simdesk_config::DesktopConfig;
use tracing_subscriber::EnvFilter;

fn load_config(path: Option<&Path>) -> DesktopConfig {
    let loaded = match path {
        Some(path) => {
            tracing::info!("Using config override: {}", path.display());
            simdesk_config::load_config_from(path)
        }
        None => simdesk_config::load_config(),
    };
    loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        DesktopConfig::default()
    })
}

fn restore_session(desk: &mut Compositor, path: &Path) {
    if !path.exists() {
        return;
    }
    match SessionSnapshot::load_from_path(path) {
        Ok(snapshot) => {
            let delivered = desk.restore_state(snapshot);
            tracing::info!(delivered, "Session state restored");
        }
        Err(e) => tracing::warn!("Session state ignored: {e}"),
    }
}

fn open_desktop_icons(desk: &mut Compositor) {
    for action in DesktopAction::desktop_icons() {
        let Some(spec) = action.launcher() else {
            continue;
        };
        if let Err(e) = desk.launch(spec, WindowContent::Empty) {
            tracing::warn!("Launching {} failed: {e}", action.label());
        }
    }
}

fn main() {
    let args = cli::parse();

    // Config first: its log level feeds the filter.
    let config = setup::with_overrides(load_config(args.config.as_deref()), &args);
    // RUST_LOG wins, then --log-level, then the config
    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.as_filter().to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "simdesk={level},simdesk_compositor={level},simdesk_config={level}"
        ))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("simdesk v{} starting...", env!("CARGO_PKG_VERSION"));

    if args.print_config {
        println!("{}", simdesk_config::config_to_json(&config));
        return;
    }
    if args.write_config {
        match setup::config_target(&args).and_then(|file| file.write(&config).map(|()| file)) {
            Ok(file) => println!("{}", file.path().display()),
            Err(e) => tracing::error!("Config not written: {e}"),
        }
        return;
    }

    let bus = EventBus::new(256);
    let mut events = bus.subscribe();
    let mut desk = Compositor::new(
        setup::settings_from_config(&config),
        setup::workspace_from(&config),
        TaskbarModel::new(),
    )
    .with_event_bus(bus);
    tracing::info!(
        width = desk.workspace().width,
        height = desk.workspace().height,
        "Workspace ready"
    );

    if let Some(path) = &args.state {
        restore_session(&mut desk, path);
    }

    match &args.script {
        Some(path) => match script::load(path) {
            Ok(steps) => {
                let report = script::run(&mut desk, steps);
                tracing::info!(
                    executed = report.executed,
                    failed = report.failed,
                    "Script finished"
                );
            }
            Err(e) => tracing::error!("Script load failed: {e}"),
        },
        None => open_desktop_icons(&mut desk),
    }

    let mut published = 0usize;
    while let Ok(event) = events.try_recv() {
        tracing::debug!(?event, "desktop event");
        published += 1;
    }
    tracing::debug!(published, "Event log drained");

    match serde_json::to_string_pretty(&desk.summary()) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!("Summary serialization failed: {e}"),
    }

    if let Some(path) = &args.state {
        if let Err(e) = desk.snapshot_state().save_to_path(path) {
            tracing::warn!("Session state not saved: {e}");
        }
    }
    tracing::info!("Shutdown complete");
}
