use std::path::PathBuf;

use crate::types::WindowId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config I/O failed on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures inside the window compositor.
///
/// None of these are fatal: the compositor reports them to the caller and
/// leaves its state untouched (or clamped, for geometry).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompositorError {
    #[error("window not found: {0}")]
    NotFound(WindowId),

    #[error("invalid transition '{op}': {reason}")]
    InvalidTransition {
        op: &'static str,
        reason: &'static str,
    },

    #[error("degenerate geometry {width}x{height}")]
    DegenerateGeometry { width: f64, height: f64 },

    #[error("controller hook '{hook}' failed for window {window}: {message}")]
    Hook {
        window: WindowId,
        hook: &'static str,
        message: String,
    },
}

/// Error returned by an application controller hook.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct HookError(pub String);

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Compositor(#[from] CompositorError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for DesktopError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
