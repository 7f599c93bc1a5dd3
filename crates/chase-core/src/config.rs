use crate::constants::{DEFAULT_BASE_VELOCITY, DEFAULT_REFERENCE_DISTANCE};
use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Tunable parameters read by the velocity-based motion models.
///
/// Values are taken as-is from the sliders; ranges are enforced by the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    /// Speed in pixels per second.
    pub base_velocity: f32,
    /// Distance in pixels at which the distance-aware models move at `base_velocity`.
    pub reference_distance: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            base_velocity: DEFAULT_BASE_VELOCITY,
            reference_distance: DEFAULT_REFERENCE_DISTANCE,
        }
    }
}

impl MotionConfig {
    pub fn set(&mut self, parameter: Parameter, value: f32) {
        match parameter {
            Parameter::BaseVelocity => self.base_velocity = value,
            Parameter::ReferenceDistance => self.reference_distance = value,
        }
    }

    pub fn get(&self, parameter: Parameter) -> f32 {
        match parameter {
            Parameter::BaseVelocity => self.base_velocity,
            Parameter::ReferenceDistance => self.reference_distance,
        }
    }
}

/// A slider-controlled field of [`MotionConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parameter {
    BaseVelocity,
    ReferenceDistance,
}

impl Parameter {
    pub const ALL: [Parameter; 2] = [Parameter::BaseVelocity, Parameter::ReferenceDistance];

    /// Name used by the page for the slider container (`<name>-slider`).
    pub fn name(self) -> &'static str {
        match self {
            Parameter::BaseVelocity => "baseVelocity",
            Parameter::ReferenceDistance => "referenceDistance",
        }
    }

    /// Parse a raw slider value for this parameter.
    pub fn parse_value(self, raw: &str) -> Result<f32, ParseError> {
        raw.trim()
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::InvalidValue {
                parameter: self.name().to_string(),
                value: raw.to_string(),
            })
    }
}

impl FromStr for Parameter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parameter::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ParseError::UnknownParameter(s.to_string()))
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
