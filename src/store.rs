//! File I/O for the inventory and the attachment layout.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use canvas::doc::InventoryItem;
use canvas::layout::Layout;
use serde_json::Value;
use tracing::info;

use crate::error::AppError;

/// Read the inventory: a JSON array of records.
///
/// # Errors
///
/// Returns [`AppError::Read`] or [`AppError::Json`] if the file is missing or malformed.
pub fn load_inventory(path: &Path) -> Result<Vec<InventoryItem>, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::Read { path: path.to_owned(), source })?;
    let items: Vec<InventoryItem> =
        serde_json::from_str(&text).map_err(|source| AppError::Json { path: path.to_owned(), source })?;
    info!(path = %path.display(), count = items.len(), "inventory loaded");
    Ok(items)
}

/// Read a layout file. A missing file is an empty layout.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not JSON, or its top
/// level is not an object.
pub fn load_layout(path: &Path) -> Result<Layout, AppError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "no layout file; starting empty");
            return Ok(Layout::default());
        }
        Err(source) => return Err(AppError::Read { path: path.to_owned(), source }),
    };
    let value: Value = serde_json::from_str(&text).map_err(|source| AppError::Json { path: path.to_owned(), source })?;
    let layout = Layout::from_json(&value)?;
    info!(path = %path.display(), entries = layout.attachments.len(), "layout loaded");
    Ok(layout)
}

/// Write a layout as pretty-printed JSON, entries sorted by id.
///
/// # Errors
///
/// Returns [`AppError::Write`] if the file cannot be written.
pub fn save_layout(path: &Path, layout: &Layout) -> Result<(), AppError> {
    let mut text = serde_json::to_string_pretty(&layout.to_json())?;
    text.push('\n');
    fs::write(path, text).map_err(|source| AppError::Write { path: path.to_owned(), source })?;
    info!(path = %path.display(), entries = layout.attachments.len(), "layout saved");
    Ok(())
}
