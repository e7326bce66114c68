use super::*;
use crate::doc::InventoryItem;

fn item(id: &str, modules: &[&str]) -> InventoryItem {
    InventoryItem {
        id: id.to_owned(),
        symbol: format!("sym_{id}"),
        modules: modules.iter().map(|m| (*m).to_owned()).collect(),
        ..Default::default()
    }
}

fn attach(world: &mut WorldModel, id: &str, bbox: Rect) {
    world.attach(id, Attachment::new(bbox).unwrap()).unwrap();
}

fn sample() -> WorldModel {
    let mut world = WorldModel::from_inventory(vec![item("a", &["mod1"]), item("b", &["mod2"]), item("c", &[])]);
    attach(&mut world, "a", Rect::world(0, 0, 40, 40));
    attach(&mut world, "b", Rect::world(100, 0, 140, 40));
    world
}

// =============================================================
// default_appearance
// =============================================================

#[test]
fn default_appearance_derives_box_and_label() {
    let world = sample();
    let intents = derive_all(&world, &Selection::new());
    let a = &intents["a"];
    assert!(a.rect.exists);
    assert_eq!(a.rect.bbox, Rect::world(0, 0, 40, 40));
    assert_eq!(a.rect.fill, "#88ccff");
    assert_eq!(a.rect.outline, OUTLINE_COLOR);
    assert_eq!(a.rect.outline_width, OUTLINE_WIDTH);
    assert!(a.label.exists);
    assert_eq!(a.label.text, "sym_a");
    assert_eq!(a.label.anchor, Point::world(20, 50));
    assert!(!a.handles.exists);
}

#[test]
fn only_attached_entities_get_intents() {
    let world = sample();
    let intents = derive_all(&world, &Selection::new());
    assert_eq!(intents.keys().map(String::as_str).collect::<Vec<_>>(), vec!["a", "b"]);
}

// =============================================================
// Overlays
// =============================================================

#[test]
fn module_highlight_applies_to_members_only() {
    let world = sample();
    let mut sel = Selection::new();
    sel.highlight_module("mod1");
    let intents = derive_all(&world, &sel);
    assert_eq!(intents["a"].rect.outline, MODULE_OUTLINE_COLOR);
    assert_eq!(intents["a"].rect.outline_width, MODULE_OUTLINE_WIDTH);
    assert_eq!(intents["b"].rect.outline, OUTLINE_COLOR);
}

#[test]
fn selection_highlight_marks_every_selected_entity() {
    let world = sample();
    let mut sel = Selection::new();
    sel.toggle_membership("a");
    sel.toggle_membership("b");
    let intents = derive_all(&world, &sel);
    for id in ["a", "b"] {
        assert_eq!(intents[id].rect.outline, SELECTED_OUTLINE_COLOR);
        assert_eq!(intents[id].rect.outline_width, SELECTED_OUTLINE_WIDTH);
        assert!(!intents[id].handles.exists, "multi-selection shows no handles");
    }
}

#[test]
fn selection_overlay_overrides_module_outline() {
    let world = sample();
    let mut sel = Selection::new();
    sel.replace_with_single("a");
    let view = EntityView {
        id: "a",
        item: world.item("a").unwrap(),
        attachment: world.attachment("a").unwrap(),
        selection: &sel,
    };
    let mut intent = RenderIntent::default();
    default_appearance(&view, &mut intent);
    intent.rect.outline = MODULE_OUTLINE_COLOR.to_owned();
    selection_highlight_overlay(&view, &mut intent);
    assert_eq!(intent.rect.outline, SELECTED_OUTLINE_COLOR);
}

// =============================================================
// handle_existence
// =============================================================

#[test]
fn handles_exist_only_for_sole_selection() {
    let world = sample();
    let mut sel = Selection::new();
    sel.replace_with_single("a");
    let intents = derive_all(&world, &sel);
    assert!(intents["a"].handles.exists);
    assert!(!intents["b"].handles.exists);
    assert_eq!(intents["a"].primitive_count(), 6);
    assert_eq!(intents["b"].primitive_count(), 2);
}

#[test]
fn unattached_sole_selection_has_no_handles() {
    let world = sample();
    let mut sel = Selection::new();
    sel.replace_with_single("c");
    let intents = derive_all(&world, &sel);
    assert!(!intents.contains_key("c"));
    assert!(intents.values().all(|i| !i.handles.exists));
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn pipeline_is_idempotent() {
    let world = sample();
    let mut sel = Selection::new();
    sel.replace_with_single("b");
    let first = derive_all(&world, &sel);
    let second = derive_all(&world, &sel);
    assert_eq!(first, second);
}
