use super::*;

fn zoom(num: i64, den: i64) -> Zoom {
    Zoom::new(num, den).unwrap()
}

fn camera(x: i64, y: i64, z: Zoom, w: i64, h: i64) -> Camera {
    Camera { x, y, zoom: z, viewport: Viewport::new(w, h) }
}

// --- Zoom ---

#[test]
fn zoom_default_is_one() {
    let z = Zoom::default();
    assert_eq!((z.num(), z.den()), (1, 1));
}

#[test]
fn zoom_rejects_non_positive_terms() {
    assert_eq!(Zoom::new(0, 1), Err(SceneError::InvalidZoom { num: 0, den: 1 }));
    assert_eq!(Zoom::new(1, -2), Err(SceneError::InvalidZoom { num: 1, den: -2 }));
}

#[test]
fn zoom_cmp_value_ignores_representation() {
    assert_eq!(zoom(1, 2).cmp_value(zoom(2, 4)), Ordering::Equal);
    assert_eq!(zoom(2, 3).cmp_value(zoom(1, 1)), Ordering::Less);
}

#[test]
fn zoom_step_in_and_out_walk_the_ladder() {
    let z = Zoom::default();
    assert_eq!(z.step_in(), zoom(3, 2));
    assert_eq!(z.step_out(), zoom(2, 3));
    assert_eq!(zoom(4, 1).step_in(), zoom(4, 1));
    assert_eq!(zoom(1, 4).step_out(), zoom(1, 4));
}

#[test]
fn zoom_step_from_off_ladder_value() {
    assert_eq!(zoom(5, 4).step_in(), zoom(3, 2));
    assert_eq!(zoom(5, 4).step_out(), zoom(1, 1));
}

// --- Viewport ---

#[test]
fn viewport_center_floors() {
    assert_eq!(Viewport::new(801, 600).center(), Point::screen(400, 300));
    assert_eq!(Viewport::default().center(), Point::screen(0, 0));
}

// --- world_to_screen / screen_to_world ---

#[test]
fn identity_camera_maps_points_unchanged() {
    let cam = Camera::default();
    assert_eq!(cam.world_to_screen(Point::world(50, 75)), Point::screen(50, 75));
    assert_eq!(cam.screen_to_world(Point::screen(50, 75)), Point::world(50, 75));
}

#[test]
fn camera_position_maps_to_viewport_center() {
    let cam = camera(100, 50, Zoom::default(), 800, 600);
    assert_eq!(cam.world_to_screen(Point::world(100, 50)), Point::screen(400, 300));
    assert_eq!(cam.screen_to_world(Point::screen(400, 300)), Point::world(100, 50));
}

#[test]
fn zoom_in_scales_offsets() {
    let cam = camera(0, 0, zoom(2, 1), 0, 0);
    assert_eq!(cam.world_to_screen(Point::world(10, -20)), Point::screen(20, -40));
    assert_eq!(cam.screen_to_world(Point::screen(20, -40)), Point::world(10, -20));
}

#[test]
fn projection_floors_negative_offsets() {
    let cam = camera(0, 0, zoom(1, 2), 0, 0);
    assert_eq!(cam.world_to_screen(Point::world(-3, 3)), Point::screen(-2, 1));
}

#[test]
fn project_point_is_noop_in_same_space() {
    let cam = camera(7, 7, zoom(3, 2), 100, 100);
    let p = Point::screen(1, 2);
    assert_eq!(cam.project_point(p, Space::Screen), p);
    let w = Point::world(1, 2);
    assert_eq!(cam.project_point(w, Space::World), w);
}

#[test]
fn project_rect_converts_both_corners() {
    let cam = camera(10, 10, zoom(2, 1), 200, 100);
    let r = cam.project_rect(Rect::world(0, 0, 40, 40), Space::Screen);
    assert_eq!(r, Rect::screen(80, 30, 160, 110));
    assert_eq!(cam.project_rect(r, Space::World), Rect::world(0, 0, 40, 40));
}

// --- Round-trip bound ---

#[test]
fn round_trip_exact_at_identity() {
    let cam = Camera::default();
    for x in -50..50 {
        let p = Point::world(x, -x * 3);
        let back = cam.screen_to_world(cam.world_to_screen(p));
        assert_eq!(back, p);
    }
}

#[test]
fn round_trip_within_one_unit_when_zoomed_in() {
    for (num, den) in [(1, 1), (3, 2), (2, 1), (4, 3), (7, 5), (4, 1)] {
        let cam = camera(13, -29, zoom(num, den), 640, 481);
        for x in -60..60 {
            let p = Point::world(x, 2 * x + 1);
            let back = cam.screen_to_world(cam.world_to_screen(p));
            assert!((back.x - p.x).abs() <= 1, "zoom {num}/{den} x={x}");
            assert!((back.y - p.y).abs() <= 1, "zoom {num}/{den} x={x}");
        }
    }
}

#[test]
fn round_trip_bounded_by_inverse_zoom_when_zoomed_out() {
    for (num, den) in [(2, 3), (1, 2), (1, 3), (1, 4)] {
        let bound = (den + num - 1) / num;
        let cam = camera(-5, 11, zoom(num, den), 300, 300);
        for x in -60..60 {
            let p = Point::world(x, -x);
            let back = cam.screen_to_world(cam.world_to_screen(p));
            assert!((back.x - p.x).abs() <= bound, "zoom {num}/{den} x={x}");
            assert!((back.y - p.y).abs() <= bound, "zoom {num}/{den} x={x}");
        }
    }
}

// --- pan_by ---

#[test]
fn pan_moves_camera_against_pointer() {
    let mut cam = Camera::default();
    cam.pan_by(10, -4);
    assert_eq!((cam.x, cam.y), (-10, 4));
}

#[test]
fn pan_scales_by_inverse_zoom() {
    let mut cam = camera(0, 0, zoom(1, 2), 0, 0);
    cam.pan_by(10, 10);
    assert_eq!((cam.x, cam.y), (-20, -20));
}

#[test]
fn pan_drops_sub_unit_deltas_at_high_zoom() {
    let mut cam = camera(0, 0, zoom(4, 1), 0, 0);
    cam.pan_by(3, -3);
    assert_eq!((cam.x, cam.y), (0, 0));
    cam.pan_by(8, -8);
    assert_eq!((cam.x, cam.y), (-2, 2));
}
