// Text helpers for the page: slider labels, container ids and the marker transform.
// Kept free of DOM types so they can be tested on the host.

use glam::Vec2;

/// Separator between a slider label's name and its value (`"Base velocity - 300"`).
pub const LABEL_SEPARATOR: &str = " - ";

/// Suffix of a slider container id (`baseVelocity-slider`).
pub const CONTAINER_SUFFIX: &str = "-slider";

/// Replace the value part of a slider label, keeping its name.
#[inline]
pub fn format_slider_label(label: &str, value: &str) -> String {
    let name = label.split(LABEL_SEPARATOR).next().unwrap_or_default();
    format!("{name}{LABEL_SEPARATOR}{value}")
}

#[inline]
pub fn container_id(variable: &str) -> String {
    format!("{variable}{CONTAINER_SUFFIX}")
}

#[inline]
pub fn variable_from_container_id(id: &str) -> &str {
    id.strip_suffix(CONTAINER_SUFFIX).unwrap_or(id)
}

/// CSS transform placing a circle of `radius` with its centre on `position`.
#[inline]
pub fn marker_transform(position: Vec2, radius: f32) -> String {
    format!(
        "translate({}px, {}px)",
        position.x - radius,
        position.y - radius
    )
}
