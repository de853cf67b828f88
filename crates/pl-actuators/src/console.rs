//! In-memory actuator that logs every state change.
//!
//! Stands in for a real display/audio backend in the interactive front end.

use std::fmt;

use crate::error::ActuatorResult;
use crate::interface::Actuator;
use crate::safety;

/// Lighting state as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightingState {
    /// Neutral state before any command, or after a reset.
    #[default]
    Default,
    On,
    Off,
}

impl LightingState {
    /// Background color the state is rendered with.
    pub fn color(self) -> &'static str {
        match self {
            LightingState::Default => "grey",
            LightingState::On => "yellow",
            LightingState::Off => "black",
        }
    }
}

impl fmt::Display for LightingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightingState::Default => f.write_str("default"),
            LightingState::On => f.write_str("on"),
            LightingState::Off => f.write_str("off"),
        }
    }
}

/// Console-backed actuator.
#[derive(Debug, Default)]
pub struct ConsoleActuator {
    lighting: LightingState,
    volume: Option<u8>,
}

impl ConsoleActuator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lighting(&self) -> LightingState {
        self.lighting
    }

    pub fn volume(&self) -> Option<u8> {
        self.volume
    }

    /// Restore the default lighting. Front-end only, not an interpreter capability.
    pub fn reset(&mut self) {
        self.lighting = LightingState::Default;
        tracing::info!(color = self.lighting.color(), "lighting reset to default");
    }
}

impl Actuator for ConsoleActuator {
    fn set_lighting(&mut self, on: bool) -> ActuatorResult<()> {
        self.lighting = if on {
            LightingState::On
        } else {
            LightingState::Off
        };
        tracing::info!(
            state = %self.lighting,
            color = self.lighting.color(),
            "lighting changed"
        );
        Ok(())
    }

    fn set_volume(&mut self, percent: i32) -> ActuatorResult<()> {
        let percent = match safety::validate_volume(percent) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "volume request rejected");
                return Err(e);
            }
        };
        self.volume = Some(percent);
        tracing::info!(
            percent,
            level = %format!("{:#010x}", safety::wave_out_level(percent)),
            "volume changed"
        );
        Ok(())
    }
}
