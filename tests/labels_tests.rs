// Host-side tests for the pure page helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod labels {
    include!("../src/labels.rs");
}

use glam::Vec2;
use labels::*;

#[test]
fn slider_label_value_is_replaced() {
    assert_eq!(
        format_slider_label("Base velocity - 300", "450"),
        "Base velocity - 450"
    );
    assert_eq!(
        format_slider_label("Reference distance - 300", "12"),
        "Reference distance - 12"
    );
}

#[test]
fn slider_label_without_value_gains_one() {
    assert_eq!(format_slider_label("Base velocity", "300"), "Base velocity - 300");
    assert_eq!(format_slider_label("", "1"), " - 1");
}

#[test]
fn slider_label_keeps_only_the_name() {
    // repeated updates never stack values
    let once = format_slider_label("Speed - 1", "2");
    let twice = format_slider_label(&once, "3");
    assert_eq!(twice, "Speed - 3");
}

#[test]
fn container_ids_map_to_variable_names() {
    assert_eq!(container_id("baseVelocity"), "baseVelocity-slider");
    assert_eq!(variable_from_container_id("baseVelocity-slider"), "baseVelocity");
    assert_eq!(
        variable_from_container_id("referenceDistance-slider"),
        "referenceDistance"
    );
    // ids without the suffix pass through unchanged
    assert_eq!(variable_from_container_id("settings"), "settings");
}

#[test]
fn container_ids_resolve_to_parameters() {
    for parameter in chase_core::Parameter::ALL {
        let id = container_id(parameter.name());
        assert_eq!(
            variable_from_container_id(&id).parse::<chase_core::Parameter>(),
            Ok(parameter)
        );
    }
}

#[test]
fn marker_transform_centres_the_circle() {
    assert_eq!(
        marker_transform(Vec2::new(100.0, 50.0), 25.0),
        "translate(75px, 25px)"
    );
    assert_eq!(
        marker_transform(Vec2::new(10.5, 0.0), 25.0),
        "translate(-14.5px, -25px)"
    );
}
