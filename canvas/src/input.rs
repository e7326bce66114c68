//! Input model: mouse buttons, keys, cursor hints and the gesture state machine.
//!
//! `InputState` is the gesture tracked between pointer-down and pointer-up.
//! Each active variant carries the last-seen pointer position so motion
//! handlers can compute incremental deltas.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::doc::EntityId;
use crate::geom::{Corner, Point};

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Secondary,
}

/// A keyboard key as reported by the host (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this key triggers the delete command.
    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self.0.as_str(), "Delete" | "Backspace")
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}

/// Cosmetic cursor hint for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    #[default]
    Default,
    /// Over a box or label.
    Move,
    /// Over a resize handle.
    Resize,
}

impl Cursor {
    /// CSS cursor name.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Move => "move",
            Self::Resize => "nwse-resize",
        }
    }
}

/// Gesture state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Moving an entity's whole box.
    DraggingItem {
        id: EntityId,
        /// Screen-space pointer position at the previous event.
        last: Point,
    },
    /// Resizing an entity's box by one corner.
    DraggingHandle {
        id: EntityId,
        corner: Corner,
        last: Point,
    },
    /// Panning the camera from an empty-canvas press.
    Panning { last: Point },
}

impl InputState {
    /// The entity a drag targets, if any.
    #[must_use]
    pub fn target(&self) -> Option<&EntityId> {
        match self {
            Self::DraggingItem { id, .. } | Self::DraggingHandle { id, .. } => Some(id),
            Self::Idle | Self::Panning { .. } => None,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
