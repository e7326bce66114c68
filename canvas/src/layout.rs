//! Persisted attachment layout: entity id → `{bbox, color}` plus reserved keys.
//!
//! The JSON object maps entity ids to `{"bbox": [x0, y0, x1, y1], "color": ...}`
//! and may carry two reserved keys, `_layout` (pane visibility and sash
//! positions) and `_window` (window geometry string). The engine carries the
//! reserved values through untouched; they belong to the host's window layer.
//!
//! Parsing is forgiving: malformed reserved keys fall back to defaults and
//! malformed entries are skipped with a warning. Only a top-level value that
//! is not an object is an error.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::warn;

use crate::consts::{DEFAULT_ATTACHMENT_COLOR, WORLD_LIMIT};
use crate::doc::EntityId;
use crate::error::SceneError;

/// Reserved key holding pane visibility and sash positions.
pub const LAYOUT_KEY: &str = "_layout";

/// Reserved key holding the window geometry string.
pub const WINDOW_KEY: &str = "_window";

/// One persisted attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentRecord {
    pub bbox: [i64; 4],
    pub color: String,
}

fn visible() -> bool {
    true
}

/// Which of the three panes are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneVisibility {
    #[serde(default = "visible")]
    pub tree: bool,
    #[serde(default = "visible")]
    pub canvas: bool,
    #[serde(default = "visible")]
    pub text: bool,
}

impl Default for PaneVisibility {
    fn default() -> Self {
        Self { tree: true, canvas: true, text: true }
    }
}

fn default_sashes() -> Vec<[i64; 2]> {
    vec![[200, 0], [900, 0]]
}

/// Pane arrangement stored under [`LAYOUT_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneLayout {
    #[serde(default)]
    pub visible: PaneVisibility,
    #[serde(default = "default_sashes")]
    pub sashes: Vec<[i64; 2]>,
}

impl Default for PaneLayout {
    fn default() -> Self {
        Self { visible: PaneVisibility::default(), sashes: default_sashes() }
    }
}

/// A full layout document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    pub attachments: BTreeMap<EntityId, AttachmentRecord>,
    pub panes: PaneLayout,
    pub window: Option<String>,
}

impl Layout {
    /// Interpret a parsed JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::MalformedLayout`] if `value` is not a JSON object.
    pub fn from_json(value: &Value) -> Result<Self, SceneError> {
        let Some(obj) = value.as_object() else {
            return Err(SceneError::MalformedLayout("top-level value is not an object".to_owned()));
        };

        let mut layout = Self::default();
        for (key, entry) in obj {
            match key.as_str() {
                LAYOUT_KEY => layout.panes = parse_panes(entry),
                WINDOW_KEY => layout.window = parse_window(entry),
                _ => match parse_record(entry) {
                    Some(record) => {
                        layout.attachments.insert(key.clone(), record);
                    }
                    None => warn!(entity = %key, "skipping malformed layout entry"),
                },
            }
        }
        Ok(layout)
    }

    /// Serialize to the persisted JSON shape.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        for (id, record) in &self.attachments {
            obj.insert(id.clone(), json!({ "bbox": record.bbox, "color": record.color }));
        }
        obj.insert(
            LAYOUT_KEY.to_owned(),
            json!({
                "visible": {
                    "tree": self.panes.visible.tree,
                    "canvas": self.panes.visible.canvas,
                    "text": self.panes.visible.text,
                },
                "sashes": self.panes.sashes,
            }),
        );
        if let Some(window) = &self.window {
            obj.insert(WINDOW_KEY.to_owned(), Value::String(window.clone()));
        }
        Value::Object(obj)
    }
}

fn parse_panes(entry: &Value) -> PaneLayout {
    match serde_json::from_value::<PaneLayout>(entry.clone()) {
        Ok(panes) => panes,
        Err(e) => {
            warn!(error = %e, "malformed pane layout; using defaults");
            PaneLayout::default()
        }
    }
}

fn parse_window(entry: &Value) -> Option<String> {
    if let Some(geometry) = entry.as_str() {
        return Some(geometry.to_owned());
    }
    if !entry.is_null() {
        warn!("malformed window geometry; ignoring");
    }
    None
}

/// Bboxes written by older tools may hold floats; they are rounded.
/// Coordinates beyond [`WORLD_LIMIT`] are rejected.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn coord(v: &Value) -> Option<i64> {
    let c = match v.as_i64() {
        Some(c) => c,
        None => {
            let f = v.as_f64()?.round();
            if !f.is_finite() || f.abs() > WORLD_LIMIT as f64 {
                return None;
            }
            f as i64
        }
    };
    (-WORLD_LIMIT..=WORLD_LIMIT).contains(&c).then_some(c)
}

fn parse_record(entry: &Value) -> Option<AttachmentRecord> {
    let bbox = entry.get("bbox")?.as_array()?;
    let [x0, y0, x1, y1] = bbox.as_slice() else {
        return None;
    };
    let color = match entry.get("color") {
        None | Some(Value::Null) => DEFAULT_ATTACHMENT_COLOR.to_owned(),
        Some(c) => c.as_str()?.to_owned(),
    };
    Some(AttachmentRecord { bbox: [coord(x0)?, coord(y0)?, coord(x1)?, coord(y1)?], color })
}
