//! Event scripts: one JSON object per line, replayed against an [`EngineCore`].
//!
//! ```text
//! # place "a" and drag it
//! {"select":"a"}
//! {"press":[100,100]}
//! {"press":[100,100]}
//! {"move":[120,110]}
//! {"release":[120,110]}
//! ```

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

use std::fs;
use std::path::Path;

use canvas::engine::{Action, EngineCore};
use canvas::error::SceneError;
use canvas::geom::Point;
use canvas::input::{Button, Key};
use serde::Deserialize;

use crate::detail;
use crate::error::AppError;

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Event {
    Press([i64; 2]),
    Move([i64; 2]),
    Release([i64; 2]),
    Leave,
    Wheel(i64),
    Resize([i64; 2]),
    Key(String),
    Select(String),
    Toggle(String),
    Module(String),
    Clear,
}

/// An event and the script line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub line: usize,
    pub event: Event,
}

/// Parse one script line. Blank lines and `#` comments yield `None`.
///
/// # Errors
///
/// Returns the JSON error if the line is not a known event.
pub fn parse_line(line: &str) -> Result<Option<Event>, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some)
}

/// Parse a whole script.
///
/// # Errors
///
/// Returns [`AppError::Script`] naming the first malformed line.
pub fn parse(path: &Path, text: &str) -> Result<Vec<Step>, AppError> {
    let mut steps = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let parsed = parse_line(raw).map_err(|e| AppError::Script { path: path.to_owned(), line, message: e.to_string() })?;
        if let Some(event) = parsed {
            steps.push(Step { line, event });
        }
    }
    Ok(steps)
}

/// Read and parse a script file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line is malformed.
pub fn load(path: &Path) -> Result<Vec<Step>, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::Read { path: path.to_owned(), source })?;
    parse(path, &text)
}

/// Feed one event to the engine.
///
/// # Errors
///
/// Returns [`SceneError::UnknownEntity`] if a selection event names an id not in the inventory.
pub fn apply(core: &mut EngineCore, event: Event) -> Result<Vec<Action>, SceneError> {
    let actions = match event {
        Event::Press([x, y]) => core.on_pointer_down(Point::screen(x, y), Button::Primary),
        Event::Move([x, y]) => core.on_pointer_move(Point::screen(x, y)),
        Event::Release([x, y]) => core.on_pointer_up(Point::screen(x, y), Button::Primary),
        Event::Leave => core.on_pointer_leave(),
        Event::Wheel(dy) => core.on_wheel(dy),
        Event::Resize([w, h]) => core.set_viewport(w, h),
        Event::Key(name) => core.on_key_down(&Key(name)),
        Event::Select(id) => core.select_entity(&id)?,
        Event::Toggle(id) => core.toggle_entity(&id)?,
        Event::Module(name) => core.select_module(&name),
        Event::Clear => core.clear_selection(),
    };
    Ok(actions)
}

/// Human-readable form of a notification. Repaint requests are not reported.
#[must_use]
pub fn describe(action: &Action) -> Option<String> {
    let text = match action {
        Action::SelectionChanged(ids) if ids.is_empty() => "selection: (none)".to_owned(),
        Action::SelectionChanged(ids) => format!("selection: {}", ids.join(", ")),
        Action::ModuleHighlightChanged(Some(module)) => format!("highlight: {module}"),
        Action::ModuleHighlightChanged(None) => "highlight: (none)".to_owned(),
        Action::AttachmentCreated { id, bbox } => format!("created {id} {:?}", bbox.to_array()),
        Action::AttachmentUpdated { id, bbox } => format!("updated {id} {:?}", bbox.to_array()),
        Action::AttachmentDeleted { id } => format!("deleted {id}"),
        Action::SetCursor(cursor) => format!("cursor: {}", cursor.css()),
        Action::RenderNeeded => return None,
    };
    Some(text)
}

/// Replay `steps` and return the transcript. A selection change that leaves a
/// single entity selected is followed by that entity's detail view.
///
/// # Errors
///
/// Returns [`AppError::Script`] for the first step the engine rejects.
pub fn run(core: &mut EngineCore, path: &Path, steps: Vec<Step>) -> Result<Vec<String>, AppError> {
    let mut transcript = Vec::new();
    for Step { line, event } in steps {
        let actions =
            apply(core, event).map_err(|e| AppError::Script { path: path.to_owned(), line, message: e.to_string() })?;
        for action in &actions {
            let Some(text) = describe(action) else { continue };
            transcript.push(text);
            if matches!(action, Action::SelectionChanged(_)) {
                if let Some(item) = core.detail_target().and_then(|id| core.world().item(id)) {
                    transcript.extend(detail::detail_lines(item).iter().map(ToString::to_string));
                }
            }
        }
    }
    Ok(transcript)
}
