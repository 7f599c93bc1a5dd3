//! Marker state and the per-frame animator.
//!
//! These types avoid referencing platform-specific APIs. The web frontend owns
//! an [`Animator`], feeds it [`Message`]s from its event listeners and calls
//! [`Animator::frame`] from its animation-frame callback.

use crate::clock::FrameClock;
use crate::config::{MotionConfig, Parameter};
use crate::motion::{ControlVisibility, MotionModel};
use crate::vector::Vector2;
use std::ops::ControlFlow;

/// Receives every published marker position.
pub trait RenderSink {
    fn render(&mut self, position: Vector2);
}

/// Shows or hides the slider belonging to a parameter.
pub trait ControlPanel {
    fn set_visible(&mut self, parameter: Parameter, visible: bool);

    fn apply_visibility(&mut self, controls: ControlVisibility) {
        for parameter in Parameter::ALL {
            self.set_visible(parameter, controls.is_visible(parameter));
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    pub current: Vector2,
    pub target: Vector2,
}

impl MotionState {
    /// Marker resting on its target at `origin`.
    pub fn at(origin: Vector2) -> Self {
        Self {
            current: origin,
            target: origin,
        }
    }
}

/// Mutations requested by the collaborators around the animator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Message {
    SetTarget(Vector2),
    SetParameter(Parameter, f32),
    SetModel(MotionModel),
}

pub struct Animator {
    state: MotionState,
    config: MotionConfig,
    model: MotionModel,
    clock: FrameClock,
    running: bool,
}

impl Animator {
    pub fn new(origin: Vector2, config: MotionConfig, model: MotionModel) -> Self {
        Self::with_clock(origin, config, model, FrameClock::new())
    }

    pub fn with_clock(
        origin: Vector2,
        config: MotionConfig,
        model: MotionModel,
        clock: FrameClock,
    ) -> Self {
        Self {
            state: MotionState::at(origin),
            config,
            model,
            clock,
            running: true,
        }
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn model(&self) -> MotionModel {
        self.model
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Apply a collaborator message. Returns the controls to show when the model changed.
    pub fn apply(&mut self, message: Message) -> Option<ControlVisibility> {
        match message {
            Message::SetTarget(target) => {
                self.state.target = target;
                None
            }
            Message::SetParameter(parameter, value) => {
                self.config.set(parameter, value);
                log::debug!("[config] {} = {}", parameter, value);
                None
            }
            Message::SetModel(model) => {
                if model != self.model {
                    log::info!("[model] {} -> {}", self.model, model);
                }
                self.model = model;
                Some(model.controls())
            }
        }
    }

    /// Advance the marker by `dt` seconds using the active model and return the new position.
    pub fn step(&mut self, dt: f32) -> Vector2 {
        let MotionState { current, target } = self.state;
        let next = self.model.update(current, target, dt, &self.config);
        self.state.current = next;
        next
    }

    /// One animation-frame callback: tick the clock, step, publish.
    pub fn frame(&mut self, sink: &mut impl RenderSink) -> ControlFlow<()> {
        if !self.running {
            return ControlFlow::Break(());
        }
        let dt = self.clock.tick();
        let position = self.step(dt);
        sink.render(position);
        ControlFlow::Continue(())
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!("[loop] stopped");
        }
        self.running = false;
    }
}
