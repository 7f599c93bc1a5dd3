//! Minimal 2D vector math used by the motion models.
//!
//! Positions are plain `glam::Vec2` values in CSS pixels. The helpers below
//! are total: none of them divides by zero or produces a non-finite result
//! from finite input.

pub use glam::Vec2 as Vector2;

#[inline]
pub fn add(a: Vector2, b: Vector2) -> Vector2 {
    a + b
}

#[inline]
pub fn scale(v: Vector2, k: f32) -> Vector2 {
    v * k
}

#[inline]
pub fn magnitude(v: Vector2) -> f32 {
    v.length()
}

/// Unit vector in the direction of `v`, or the zero vector when `v` has no length.
#[inline]
pub fn normalize(v: Vector2) -> Vector2 {
    let mag = magnitude(v);
    if mag == 0.0 {
        return Vector2::ZERO;
    }
    Vector2::new(v.x / mag, v.y / mag)
}
