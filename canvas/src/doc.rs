//! World model: read-only inventory records and the mutable attachments placed for them.
//!
//! `InventoryItem` is what the user annotates; it is loaded once and never
//! mutated. `Attachment` is the world-space bounding box and color placed for
//! an entity. Both are keyed by [`EntityId`]. Maps are ordered so every pass
//! over the world is deterministic.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::consts::DEFAULT_ATTACHMENT_COLOR;
use crate::error::SceneError;
use crate::geom::{Rect, Space};

/// Unique, stable identifier for an inventory entity.
pub type EntityId = String;

/// A record from the static symbol inventory.
///
/// Inventories come from external tools: absent keys and explicit `null`s
/// both read as empty, and custom values may be any JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryItem {
    /// Unique id. Empty in the source means "use the symbol".
    #[serde(deserialize_with = "null_as_default")]
    pub id: EntityId,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol_type: String,
    pub source_file: Option<String>,
    pub line_number: Option<u32>,
    /// Raw source text of the declaration.
    pub raw: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub modules: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub threads: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub callers: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub flags: Vec<String>,
    /// Free-form extra fields, shown last in the detail view.
    #[serde(deserialize_with = "null_as_default")]
    pub custom: BTreeMap<String, Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl InventoryItem {
    /// Whether this item belongs to `module`.
    #[must_use]
    pub fn in_module(&self, module: &str) -> bool {
        self.modules.iter().any(|m| m == module)
    }
}

/// A world-space bounding box placed for an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    bbox: Rect,
    pub color: String,
}

impl Attachment {
    /// Create an attachment with the default color.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NotWorldSpace`] if `bbox` is not in world space.
    pub fn new(bbox: Rect) -> Result<Self, SceneError> {
        Self::with_color(bbox, DEFAULT_ATTACHMENT_COLOR)
    }

    /// Create an attachment with an explicit color.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NotWorldSpace`] if `bbox` is not in world space.
    pub fn with_color(bbox: Rect, color: &str) -> Result<Self, SceneError> {
        let mut out = Self { bbox: Rect::world(0, 0, 0, 0), color: color.to_owned() };
        out.set_bbox(bbox)?;
        Ok(out)
    }

    /// The stored bbox, always in world space.
    #[must_use]
    pub fn bbox(&self) -> Rect {
        self.bbox
    }

    /// Replace the bbox.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::NotWorldSpace`] if `bbox` is not in world space;
    /// the stored bbox is left untouched.
    pub fn set_bbox(&mut self, bbox: Rect) -> Result<(), SceneError> {
        if bbox.space != Space::World {
            return Err(SceneError::NotWorldSpace);
        }
        self.bbox = bbox;
        Ok(())
    }
}

/// The inventory plus every placed attachment.
#[derive(Debug, Clone, Default)]
pub struct WorldModel {
    inventory: BTreeMap<EntityId, InventoryItem>,
    attachments: BTreeMap<EntityId, Attachment>,
}

impl WorldModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a world from inventory records. Records without an id are keyed
    /// by symbol; on duplicate ids the later record wins.
    #[must_use]
    pub fn from_inventory(items: Vec<InventoryItem>) -> Self {
        let mut inventory = BTreeMap::new();
        for mut item in items {
            if item.id.is_empty() {
                item.id.clone_from(&item.symbol);
            }
            if let Some(prev) = inventory.insert(item.id.clone(), item) {
                warn!(entity = %prev.id, "duplicate inventory id; keeping the later record");
            }
        }
        Self { inventory, attachments: BTreeMap::new() }
    }

    // --- Inventory ---

    #[must_use]
    pub fn item(&self, id: &str) -> Option<&InventoryItem> {
        self.inventory.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.inventory.contains_key(id)
    }

    /// All inventory records in id order.
    pub fn items(&self) -> impl Iterator<Item = &InventoryItem> {
        self.inventory.values()
    }

    /// Every module name mentioned by any record, sorted.
    #[must_use]
    pub fn modules(&self) -> BTreeSet<&str> {
        self.inventory
            .values()
            .flat_map(|item| item.modules.iter().map(String::as_str))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    // --- Attachments ---

    #[must_use]
    pub fn attachment(&self, id: &str) -> Option<&Attachment> {
        self.attachments.get(id)
    }

    pub fn attachment_mut(&mut self, id: &str) -> Option<&mut Attachment> {
        self.attachments.get_mut(id)
    }

    /// All attachments in id order.
    pub fn attachments(&self) -> impl Iterator<Item = (&EntityId, &Attachment)> {
        self.attachments.iter()
    }

    #[must_use]
    pub fn attachment_count(&self) -> usize {
        self.attachments.len()
    }

    /// Place or replace the attachment for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownEntity`] if `id` is not in the inventory.
    pub fn attach(&mut self, id: &str, attachment: Attachment) -> Result<(), SceneError> {
        if !self.contains(id) {
            return Err(SceneError::UnknownEntity(id.to_owned()));
        }
        self.attachments.insert(id.to_owned(), attachment);
        Ok(())
    }

    /// Remove the attachment for `id`, returning it if present. The inventory
    /// record is never touched.
    pub fn detach(&mut self, id: &str) -> Option<Attachment> {
        self.attachments.remove(id)
    }

    /// Drop every attachment.
    pub fn clear_attachments(&mut self) {
        self.attachments.clear();
    }
}
