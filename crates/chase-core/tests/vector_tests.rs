use chase_core::vector::{add, magnitude, normalize, scale};
use chase_core::Vector2;

#[test]
fn normalize_zero_is_zero() {
    assert_eq!(normalize(Vector2::ZERO), Vector2::ZERO);
}

#[test]
fn normalize_has_unit_length() {
    for v in [
        Vector2::new(3.0, 4.0),
        Vector2::new(-0.001, 0.0),
        Vector2::new(1.0e4, -2.5e3),
        Vector2::new(-7.0, -7.0),
    ] {
        let n = normalize(v);
        assert!((magnitude(n) - 1.0).abs() < 1e-5, "|normalize({v})| = {}", magnitude(n));
        // same direction as the input
        assert!(n.dot(v) > 0.0);
    }
}

#[test]
fn magnitude_is_euclidean_length() {
    assert_eq!(magnitude(Vector2::new(3.0, 4.0)), 5.0);
    assert_eq!(magnitude(Vector2::new(-3.0, -4.0)), 5.0);
    assert_eq!(magnitude(Vector2::ZERO), 0.0);
}

#[test]
fn add_and_scale_return_new_values() {
    let a = Vector2::new(1.0, 2.0);
    let b = Vector2::new(-4.0, 0.5);
    assert_eq!(add(a, b), Vector2::new(-3.0, 2.5));
    assert_eq!(scale(a, -2.0), Vector2::new(-2.0, -4.0));
    // inputs untouched
    assert_eq!(a, Vector2::new(1.0, 2.0));
}
