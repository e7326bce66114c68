use serde_json::json;

use super::*;
use crate::geom::Rect;

fn item(id: &str, modules: &[&str]) -> InventoryItem {
    InventoryItem {
        id: id.to_owned(),
        symbol: id.to_owned(),
        modules: modules.iter().map(|m| (*m).to_owned()).collect(),
        ..Default::default()
    }
}

// =============================================================
// InventoryItem serde
// =============================================================

#[test]
fn inventory_item_deserializes_with_missing_fields() {
    let item: InventoryItem = serde_json::from_value(json!({ "symbol": "foo" })).unwrap();
    assert_eq!(item.symbol, "foo");
    assert!(item.id.is_empty());
    assert!(item.modules.is_empty());
    assert!(item.custom.is_empty());
    assert_eq!(item.line_number, None);
}

#[test]
fn inventory_item_deserializes_full_record() {
    let item: InventoryItem = serde_json::from_value(json!({
        "id": "k1",
        "symbol": "g_tick",
        "symbol_type": "variable",
        "source_file": "src/timer.c",
        "line_number": 42,
        "raw": "static int g_tick;",
        "modules": ["timer", "core"],
        "threads": ["isr"],
        "callers": ["tick_isr"],
        "flags": ["volatile"],
        "custom": { "owner": "kernel" }
    }))
    .unwrap();
    assert_eq!(item.id, "k1");
    assert_eq!(item.line_number, Some(42));
    assert!(item.in_module("core"));
    assert!(!item.in_module("net"));
    assert_eq!(item.custom.get("owner"), Some(&json!("kernel")));
}

#[test]
fn inventory_item_accepts_non_string_custom_values() {
    let items: Vec<InventoryItem> =
        serde_json::from_str(r#"[{"symbol":"a","custom":{"count":3,"hot":true,"note":"x"}}]"#).unwrap();
    assert_eq!(items[0].custom["count"], json!(3));
    assert_eq!(items[0].custom["hot"], json!(true));
    assert_eq!(items[0].custom["note"], json!("x"));
}

#[test]
fn inventory_item_reads_nulls_as_empty() {
    let item: InventoryItem = serde_json::from_value(json!({
        "id": null,
        "symbol": "a",
        "symbol_type": null,
        "modules": null,
        "threads": null,
        "callers": null,
        "flags": null,
        "custom": null,
        "line_number": null
    }))
    .unwrap();
    assert!(item.id.is_empty());
    assert!(item.symbol_type.is_empty());
    assert!(item.modules.is_empty() && item.threads.is_empty());
    assert!(item.callers.is_empty() && item.flags.is_empty());
    assert!(item.custom.is_empty());
    assert_eq!(item.line_number, None);
}

// =============================================================
// Attachment
// =============================================================

#[test]
fn attachment_uses_default_color() {
    let a = Attachment::new(Rect::world(0, 0, 10, 10)).unwrap();
    assert_eq!(a.color, DEFAULT_ATTACHMENT_COLOR);
    assert_eq!(a.bbox(), Rect::world(0, 0, 10, 10));
}

#[test]
fn attachment_rejects_screen_space_bbox() {
    assert_eq!(Attachment::new(Rect::screen(0, 0, 10, 10)), Err(SceneError::NotWorldSpace));
}

#[test]
fn set_bbox_rejects_screen_space_and_keeps_old_value() {
    let mut a = Attachment::new(Rect::world(0, 0, 10, 10)).unwrap();
    assert_eq!(a.set_bbox(Rect::screen(1, 1, 2, 2)), Err(SceneError::NotWorldSpace));
    assert_eq!(a.bbox(), Rect::world(0, 0, 10, 10));
    a.set_bbox(Rect::world(5, 5, 15, 15)).unwrap();
    assert_eq!(a.bbox(), Rect::world(5, 5, 15, 15));
}

// =============================================================
// WorldModel
// =============================================================

#[test]
fn from_inventory_keys_missing_ids_by_symbol() {
    let mut anonymous = item("", &[]);
    anonymous.symbol = "sym".to_owned();
    let world = WorldModel::from_inventory(vec![anonymous]);
    assert!(world.contains("sym"));
    assert_eq!(world.item("sym").unwrap().id, "sym");
}

#[test]
fn from_inventory_later_duplicate_wins() {
    let mut first = item("a", &[]);
    first.symbol_type = "old".to_owned();
    let mut second = item("a", &[]);
    second.symbol_type = "new".to_owned();
    let world = WorldModel::from_inventory(vec![first, second]);
    assert_eq!(world.len(), 1);
    assert_eq!(world.item("a").unwrap().symbol_type, "new");
}

#[test]
fn modules_are_sorted_and_unique() {
    let world = WorldModel::from_inventory(vec![item("a", &["net", "core"]), item("b", &["core"])]);
    assert_eq!(world.modules().into_iter().collect::<Vec<_>>(), vec!["core", "net"]);
}

#[test]
fn attach_requires_known_entity() {
    let mut world = WorldModel::from_inventory(vec![item("a", &[])]);
    let a = Attachment::new(Rect::world(0, 0, 1, 1)).unwrap();
    assert_eq!(world.attach("zz", a.clone()), Err(SceneError::UnknownEntity("zz".to_owned())));
    world.attach("a", a).unwrap();
    assert_eq!(world.attachment_count(), 1);
}

#[test]
fn detach_keeps_inventory_record() {
    let mut world = WorldModel::from_inventory(vec![item("a", &[])]);
    world.attach("a", Attachment::new(Rect::world(0, 0, 1, 1)).unwrap()).unwrap();
    assert!(world.detach("a").is_some());
    assert!(world.attachment("a").is_none());
    assert!(world.contains("a"));
    assert!(world.detach("a").is_none());
}

#[test]
fn attachments_iterate_in_id_order() {
    let mut world = WorldModel::from_inventory(vec![item("b", &[]), item("a", &[])]);
    world.attach("b", Attachment::new(Rect::world(0, 0, 1, 1)).unwrap()).unwrap();
    world.attach("a", Attachment::new(Rect::world(0, 0, 1, 1)).unwrap()).unwrap();
    let ids: Vec<&str> = world.attachments().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}
