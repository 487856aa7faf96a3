#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Point
// =============================================================

#[test]
fn point_new_sets_fields() {
    let p = Point::new(3.0, -4.5);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, -4.5);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

#[test]
fn point_serde_shape() {
    let json = serde_json::to_value(Point::new(1.5, 2.0)).unwrap();
    assert_eq!(json, serde_json::json!({ "x": 1.5, "y": 2.0 }));
}

// =============================================================
// CanvasOffset
// =============================================================

#[test]
fn offset_default_is_identity() {
    let offset = CanvasOffset::default();
    assert_eq!(offset.to_local(Point::new(12.0, 7.0)), Point::new(12.0, 7.0));
}

#[test]
fn offset_subtracts_position() {
    let offset = CanvasOffset::new(100.0, 40.0);
    assert_eq!(offset.to_local(Point::new(150.0, 90.0)), Point::new(50.0, 50.0));
}

#[test]
fn offset_can_produce_negative_local_coordinates() {
    let offset = CanvasOffset::new(100.0, 40.0);
    assert_eq!(offset.to_local(Point::new(10.0, 0.0)), Point::new(-90.0, -40.0));
}
