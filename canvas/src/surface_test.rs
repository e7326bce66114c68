use super::*;

fn rect_shape(x0: i64, y0: i64, x1: i64, y1: i64) -> Shape {
    Shape::Rect {
        rect: Rect::screen(x0, y0, x1, y1),
        fill: "#88ccff".to_owned(),
        outline: "white".to_owned(),
        width: 1,
    }
}

#[test]
fn create_assigns_distinct_ids() {
    let mut s = MemorySurface::new();
    let a = s.create(rect_shape(0, 0, 10, 10));
    let b = s.create(rect_shape(0, 0, 10, 10));
    assert_ne!(a, b);
    assert_eq!(s.len(), 2);
}

#[test]
fn update_replaces_shape_in_place() {
    let mut s = MemorySurface::new();
    let a = s.create(rect_shape(0, 0, 10, 10));
    let b = s.create(rect_shape(50, 50, 60, 60));
    s.update(a, rect_shape(5, 5, 15, 15));
    assert_eq!(s.get(a), Some(&rect_shape(5, 5, 15, 15)));
    let order: Vec<PrimitiveId> = s.iter().map(|(id, _)| id).collect();
    assert_eq!(order, vec![a, b]);
}

#[test]
fn delete_removes_and_ignores_unknown() {
    let mut s = MemorySurface::new();
    let a = s.create(rect_shape(0, 0, 10, 10));
    s.delete(a);
    s.delete(PrimitiveId(999));
    assert!(s.is_empty());
}

#[test]
fn topmost_prefers_later_primitives() {
    let mut s = MemorySurface::new();
    let below = s.create(rect_shape(0, 0, 100, 100));
    let above = s.create(rect_shape(40, 40, 60, 60));
    assert_eq!(s.topmost_at(Point::screen(50, 50)), Some(above));
    assert_eq!(s.topmost_at(Point::screen(10, 10)), Some(below));
    assert_eq!(s.topmost_at(Point::screen(200, 200)), None);
}

#[test]
fn text_bounds_hang_below_anchor() {
    let shape = Shape::Text { anchor: Point::screen(100, 50), text: "abcd".to_owned(), color: "white".to_owned() };
    assert_eq!(shape.bounds(), Rect::screen(86, 50, 114, 64));
}
