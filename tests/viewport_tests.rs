use glam::{Vec2, Vec3};
use oled_bitmap::math::Viewport;

const VIEWPORT: Viewport = Viewport::new(800.0, 720.0);

#[test]
fn test_center_is_origin() {
    assert_eq!(VIEWPORT.normalize(Vec2::new(400.0, 360.0)), Vec3::ZERO);
}

#[test]
fn test_vertical_edges_have_unit_x() {
    for y in [0.0, 100.0, 360.0, 719.0, 720.0] {
        assert_eq!(VIEWPORT.normalize(Vec2::new(0.0, y)).x, -1.0, "left edge at y={}", y);
        assert_eq!(VIEWPORT.normalize(Vec2::new(800.0, y)).x, 1.0, "right edge at y={}", y);
    }
}

#[test]
fn test_horizontal_edges_have_unit_y() {
    for x in [0.0, 250.0, 400.0, 800.0] {
        assert_eq!(VIEWPORT.normalize(Vec2::new(x, 0.0)).y, 1.0, "top edge at x={}", x);
        assert_eq!(VIEWPORT.normalize(Vec2::new(x, 720.0)).y, -1.0, "bottom edge at x={}", x);
    }
}

#[test]
fn test_z_is_always_zero() {
    let points = [
        Vec2::new(-100.0, -100.0),
        Vec2::new(50.0, 50.0),
        Vec2::new(2000.0, 1500.0),
    ];
    for p in points {
        assert_eq!(VIEWPORT.normalize(p).z, 0.0);
    }
}

#[test]
fn test_mapping_is_linear() {
    let quarter = VIEWPORT.normalize(Vec2::new(200.0, 180.0));
    assert!((quarter.x + 0.5).abs() < 1e-6);
    assert!((quarter.y - 0.5).abs() < 1e-6);
}
