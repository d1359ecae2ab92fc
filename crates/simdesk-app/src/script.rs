//! Replay scripts: a JSON list of steps fed through the compositor API.
//!
//! ```json
//! [
//!   { "op": "action", "action": "open_terminal" },
//!   { "op": "pointer_down", "window": "terminal", "x": 400, "y": 120, "target": "header" },
//!   { "op": "pointer_move", "x": 5, "y": 400 },
//!   { "op": "pointer_up", "x": 5, "y": 400 }
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use simdesk_common::{DesktopAction, DesktopError, Point, WindowId};
use simdesk_compositor::{
    Compositor, InteractionOutcome, PointerTarget, SnapZone, WindowContent, WindowOptions,
};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptStep {
    Action {
        action: DesktopAction,
    },
    Create {
        title: String,
        #[serde(default)]
        options: WindowOptions,
        #[serde(default)]
        markup: Option<String>,
    },
    PointerDown {
        window: WindowId,
        x: f64,
        y: f64,
        target: PointerTarget,
        #[serde(default = "single_click")]
        clicks: u8,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp {
        x: f64,
        y: f64,
    },
    Snap {
        window: WindowId,
        zone: SnapZone,
    },
    Restore {
        window: WindowId,
    },
    TaskbarClick {
        window: WindowId,
    },
    ResizeWorkspace {
        width: f64,
        height: f64,
    },
}

fn single_click() -> u8 {
    1
}

/// Tally of a finished run. Failed steps are logged and skipped.
#[derive(Debug, Default, PartialEq)]
pub struct ScriptReport {
    pub executed: usize,
    pub failed: usize,
    pub outcomes: Vec<InteractionOutcome>,
}

pub fn load(path: &Path) -> Result<Vec<ScriptStep>, DesktopError> {
    let content = std::fs::read_to_string(path)?;
    let steps: Vec<ScriptStep> = serde_json::from_str(&content)?;
    info!(path = %path.display(), steps = steps.len(), "script loaded");
    Ok(steps)
}

pub fn run(desk: &mut Compositor, steps: Vec<ScriptStep>) -> ScriptReport {
    let mut report = ScriptReport::default();
    for (index, step) in steps.into_iter().enumerate() {
        debug!(index, ?step, "running step");
        match apply(desk, step) {
            Ok(Some(outcome)) => report.outcomes.push(outcome),
            Ok(None) => {}
            Err(e) => {
                warn!(index, "script step failed: {e}");
                report.failed += 1;
            }
        }
        report.executed += 1;
    }
    report
}

fn apply(
    desk: &mut Compositor,
    step: ScriptStep,
) -> Result<Option<InteractionOutcome>, DesktopError> {
    match step {
        ScriptStep::Action { action } => {
            desk.execute(action)?;
        }
        ScriptStep::Create {
            title,
            options,
            markup,
        } => {
            let content = markup.map_or(WindowContent::Empty, WindowContent::Markup);
            desk.create_window(title, content, options)?;
        }
        ScriptStep::PointerDown {
            window,
            x,
            y,
            target,
            clicks,
        } => desk.pointer_down(&window, Point::new(x, y), target, clicks)?,
        ScriptStep::PointerMove { x, y } => desk.pointer_move(Point::new(x, y)),
        ScriptStep::PointerUp { x, y } => return Ok(desk.pointer_up(Point::new(x, y))),
        ScriptStep::Snap { window, zone } => desk.snap(&window, zone)?,
        ScriptStep::Restore { window } => {
            desk.restore(&window)?;
        }
        ScriptStep::TaskbarClick { window } => {
            let request = desk
                .taskbar()
                .click(&window)
                .ok_or_else(|| DesktopError::Other(format!("no taskbar entry for {window}")))?;
            desk.handle_taskbar_request(request)?;
        }
        ScriptStep::ResizeWorkspace { width, height } => desk.resize_workspace(width, height),
    }
    Ok(None)
}
