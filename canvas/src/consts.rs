//! Shared constants for the canvas crate.

// ── Attachments ─────────────────────────────────────────────────

/// Half-extent of the box placed by an empty-canvas click (60×60 world units).
pub const DEFAULT_BOX_HALF: i64 = 30;

/// Fill color for attachments that do not specify one.
pub const DEFAULT_ATTACHMENT_COLOR: &str = "#88ccff";

/// Largest world coordinate magnitude accepted from a layout file (2^40).
pub const WORLD_LIMIT: i64 = 1 << 40;

// ── Styling ─────────────────────────────────────────────────────

pub const OUTLINE_COLOR: &str = "white";
pub const OUTLINE_WIDTH: u32 = 1;

pub const MODULE_OUTLINE_COLOR: &str = "#ff9933";
pub const MODULE_OUTLINE_WIDTH: u32 = 2;

pub const SELECTED_OUTLINE_COLOR: &str = "yellow";
pub const SELECTED_OUTLINE_WIDTH: u32 = 3;

pub const LABEL_COLOR: &str = "white";

/// Gap between the bottom edge of a box and its label, in world units.
pub const LABEL_OFFSET: i64 = 10;

pub const HANDLE_FILL: &str = "#ffcc00";
pub const HANDLE_OUTLINE: &str = "#000000";

// ── Display ─────────────────────────────────────────────────────

/// Half-size of a resize handle square, in screen pixels.
pub const HANDLE_HALF_PX: i64 = 5;

/// Approximate glyph advance used to size text hit boxes.
pub const TEXT_CHAR_PX: i64 = 7;

/// Approximate line height used to size text hit boxes.
pub const TEXT_LINE_PX: i64 = 14;
