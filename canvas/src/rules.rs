//! Rule pipeline: derives each entity's render intent from model state.
//!
//! A render intent says which visual parts of an entity should exist and how
//! they look. It is computed from scratch every synchronization pass by
//! folding the entity through [`RULES`], an explicit priority list of pure
//! overlay functions (lowest priority first, so later rules win on the same
//! field). Rules read only the entity being processed plus the selection and
//! write only that entity's intent, which makes the pipeline idempotent.
//!
//! Intents never carry primitive handles; those live inside the renderer.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use std::collections::BTreeMap;

use crate::consts::{
    HANDLE_FILL, HANDLE_OUTLINE, LABEL_COLOR, LABEL_OFFSET, MODULE_OUTLINE_COLOR, MODULE_OUTLINE_WIDTH,
    OUTLINE_COLOR, OUTLINE_WIDTH, SELECTED_OUTLINE_COLOR, SELECTED_OUTLINE_WIDTH,
};
use crate::doc::{Attachment, EntityId, InventoryItem, WorldModel};
use crate::geom::{Point, Rect};
use crate::selection::Selection;

/// The bounding-box rectangle of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectPart {
    pub exists: bool,
    /// World-space geometry.
    pub bbox: Rect,
    pub fill: String,
    pub outline: String,
    pub outline_width: u32,
}

/// The text label under an entity's box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPart {
    pub exists: bool,
    pub text: String,
    /// World-space top-center anchor.
    pub anchor: Point,
    pub color: String,
}

/// The group of four corner resize handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlePart {
    pub exists: bool,
    pub fill: String,
    pub outline: String,
}

/// Computed, not-yet-applied description of one entity's visual parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderIntent {
    pub rect: RectPart,
    pub label: LabelPart,
    pub handles: HandlePart,
}

impl Default for RenderIntent {
    fn default() -> Self {
        Self {
            rect: RectPart {
                exists: false,
                bbox: Rect::world(0, 0, 0, 0),
                fill: String::new(),
                outline: String::new(),
                outline_width: 0,
            },
            label: LabelPart { exists: false, text: String::new(), anchor: Point::world(0, 0), color: String::new() },
            handles: HandlePart { exists: false, fill: String::new(), outline: String::new() },
        }
    }
}

impl RenderIntent {
    /// Number of primitives this intent asks the renderer to keep alive.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        usize::from(self.rect.exists) + usize::from(self.label.exists) + 4 * usize::from(self.handles.exists)
    }
}

/// Read-only view of the model state a rule may consult.
pub struct EntityView<'a> {
    pub id: &'a str,
    pub item: &'a InventoryItem,
    pub attachment: &'a Attachment,
    pub selection: &'a Selection,
}

/// A style rule: reads the entity view, overlays fields on its intent.
pub type Rule = fn(&EntityView<'_>, &mut RenderIntent);

/// Rules in priority order, lowest first.
pub const RULES: [Rule; 4] = [
    default_appearance,
    module_highlight_overlay,
    selection_highlight_overlay,
    handle_existence,
];

/// Run every rule over one entity.
#[must_use]
pub fn derive(view: &EntityView<'_>) -> RenderIntent {
    let mut intent = RenderIntent::default();
    for rule in RULES {
        rule(view, &mut intent);
    }
    intent
}

/// Run the pipeline over every attached entity.
#[must_use]
pub fn derive_all(world: &WorldModel, selection: &Selection) -> BTreeMap<EntityId, RenderIntent> {
    world
        .attachments()
        .filter_map(|(id, attachment)| {
            let item = world.item(id)?;
            let view = EntityView { id, item, attachment, selection };
            Some((id.clone(), derive(&view)))
        })
        .collect()
}

// =============================================================
// Rules
// =============================================================

/// Box from the bbox, label from the symbol, handles hidden.
pub fn default_appearance(view: &EntityView<'_>, intent: &mut RenderIntent) {
    let bbox = view.attachment.bbox();
    intent.rect = RectPart {
        exists: true,
        bbox,
        fill: view.attachment.color.clone(),
        outline: OUTLINE_COLOR.to_owned(),
        outline_width: OUTLINE_WIDTH,
    };
    intent.label = LabelPart {
        exists: true,
        text: view.item.symbol.clone(),
        anchor: Point::world(bbox.center().x, bbox.y1 + LABEL_OFFSET),
        color: LABEL_COLOR.to_owned(),
    };
    intent.handles = HandlePart { exists: false, fill: HANDLE_FILL.to_owned(), outline: HANDLE_OUTLINE.to_owned() };
}

/// Emphasize members of the highlighted module.
pub fn module_highlight_overlay(view: &EntityView<'_>, intent: &mut RenderIntent) {
    if view.selection.module().is_some_and(|m| view.item.in_module(m)) {
        intent.rect.outline = MODULE_OUTLINE_COLOR.to_owned();
        intent.rect.outline_width = MODULE_OUTLINE_WIDTH;
    }
}

/// Emphasize selected entities.
pub fn selection_highlight_overlay(view: &EntityView<'_>, intent: &mut RenderIntent) {
    if view.selection.contains(view.id) {
        intent.rect.outline = SELECTED_OUTLINE_COLOR.to_owned();
        intent.rect.outline_width = SELECTED_OUTLINE_WIDTH;
    }
}

/// Handles exist only for the sole selected entity.
pub fn handle_existence(view: &EntityView<'_>, intent: &mut RenderIntent) {
    intent.handles.exists = view.selection.is_sole(view.id);
}
