//! Motion models: pure functions that move the marker one frame toward its target.
//!
//! Every model shares the [`UpdateFn`] signature so the animator can swap them
//! without carrying any per-model state. A model switch takes effect on the
//! next frame, starting from wherever the marker currently is.

use crate::config::{MotionConfig, Parameter};
use crate::constants::MIN_SPEED_PER_SEC;
use crate::error::ParseError;
use crate::vector::{add, magnitude, normalize, scale, Vector2};
use std::fmt;
use std::str::FromStr;

pub type UpdateFn = fn(Vector2, Vector2, f32, &MotionConfig) -> Vector2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MotionModel {
    /// Jump straight to the target.
    #[default]
    Snap,
    /// Move at `base_velocity`.
    ConstantSpeed,
    /// Speed grows with the distance to the target.
    DistanceScaledSpeed,
    /// Speed grows as the marker closes in on the target.
    ProximityScaledSpeed,
}

/// Which slider controls are relevant to a model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlVisibility {
    pub base_velocity: bool,
    pub reference_distance: bool,
}

impl ControlVisibility {
    pub fn is_visible(&self, parameter: Parameter) -> bool {
        match parameter {
            Parameter::BaseVelocity => self.base_velocity,
            Parameter::ReferenceDistance => self.reference_distance,
        }
    }
}

// (model, page name, update fn, controls)
static MODELS: [(MotionModel, &str, UpdateFn, ControlVisibility); 4] = [
    (
        MotionModel::Snap,
        "positionSetter",
        position_setter,
        ControlVisibility {
            base_velocity: false,
            reference_distance: false,
        },
    ),
    (
        MotionModel::ConstantSpeed,
        "staticVelocity",
        static_velocity,
        ControlVisibility {
            base_velocity: true,
            reference_distance: false,
        },
    ),
    (
        MotionModel::DistanceScaledSpeed,
        "distanceVelocity",
        distance_velocity,
        ControlVisibility {
            base_velocity: true,
            reference_distance: true,
        },
    ),
    (
        MotionModel::ProximityScaledSpeed,
        "proximityVelocity",
        proximity_velocity,
        ControlVisibility {
            base_velocity: true,
            reference_distance: true,
        },
    ),
];

impl MotionModel {
    pub const ALL: [MotionModel; 4] = [
        MotionModel::Snap,
        MotionModel::ConstantSpeed,
        MotionModel::DistanceScaledSpeed,
        MotionModel::ProximityScaledSpeed,
    ];

    #[inline]
    fn entry(self) -> &'static (MotionModel, &'static str, UpdateFn, ControlVisibility) {
        &MODELS[self as usize]
    }

    /// Name used as the mode selector's option value.
    pub fn name(self) -> &'static str {
        self.entry().1
    }

    pub fn update_fn(self) -> UpdateFn {
        self.entry().2
    }

    pub fn controls(self) -> ControlVisibility {
        self.entry().3
    }

    #[inline]
    pub fn update(
        self,
        current: Vector2,
        target: Vector2,
        dt: f32,
        config: &MotionConfig,
    ) -> Vector2 {
        (self.update_fn())(current, target, dt, config)
    }
}

impl FromStr for MotionModel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MODELS
            .iter()
            .find(|(_, name, _, _)| *name == s)
            .map(|(model, _, _, _)| *model)
            .ok_or_else(|| ParseError::UnknownModel(s.to_string()))
    }
}

impl fmt::Display for MotionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn position_setter(
    _current: Vector2,
    target: Vector2,
    _dt: f32,
    _config: &MotionConfig,
) -> Vector2 {
    target
}

pub fn static_velocity(
    current: Vector2,
    target: Vector2,
    dt: f32,
    config: &MotionConfig,
) -> Vector2 {
    let step = config.base_velocity * dt;
    step_toward(current, target, step)
}

pub fn distance_velocity(
    current: Vector2,
    target: Vector2,
    dt: f32,
    config: &MotionConfig,
) -> Vector2 {
    let distance = magnitude(direction(current, target));
    let step = config.base_velocity * (distance / config.reference_distance) * dt;
    step_toward(current, target, step.max(MIN_SPEED_PER_SEC * dt))
}

pub fn proximity_velocity(
    current: Vector2,
    target: Vector2,
    dt: f32,
    config: &MotionConfig,
) -> Vector2 {
    let distance = magnitude(direction(current, target));
    if distance == 0.0 {
        return target;
    }
    let step = config.base_velocity * (config.reference_distance / distance) * dt;
    step_toward(current, target, step.max(MIN_SPEED_PER_SEC * dt))
}

#[inline]
fn direction(current: Vector2, target: Vector2) -> Vector2 {
    add(target, scale(current, -1.0))
}

/// Move `current` by `step` pixels toward `target`, landing on it instead of overshooting.
///
/// A non-finite step (e.g. a zero reference distance) counts as an overshoot.
fn step_toward(current: Vector2, target: Vector2, step: f32) -> Vector2 {
    let raw = direction(current, target);
    if !step.is_finite() || magnitude(raw) < step {
        return target;
    }
    add(current, scale(normalize(raw), step))
}
