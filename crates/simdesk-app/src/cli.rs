use std::path::PathBuf;

use clap::Parser;

/// simdesk: a simulated desktop with a window compositor, driven headless
/// from the desktop icons or a replay script.
#[derive(Parser, Debug)]
#[command(name = "simdesk", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// JSON replay script to run instead of opening every desktop icon.
    #[arg(short = 's', long)]
    pub script: Option<PathBuf>,

    /// Workspace width in pixels, overriding the config.
    #[arg(long)]
    pub width: Option<u32>,

    /// Workspace height in pixels, overriding the config.
    #[arg(long)]
    pub height: Option<u32>,

    /// Session state file: restored on start, written on exit.
    #[arg(long)]
    pub state: Option<PathBuf>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Save the effective config (CLI overrides included) to the config
    /// file and exit.
    #[arg(long, conflicts_with = "print_config")]
    pub write_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
