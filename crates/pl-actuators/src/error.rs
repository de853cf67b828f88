//! Actuator error types.

use thiserror::Error;

/// Reasons an actuator refuses a request. No state is changed in either case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActuatorError {
    #[error("volume {percent}% is outside 0..=100")]
    VolumeOutOfRange { percent: i32 },

    #[error("actuator backend error: {0}")]
    Backend(String),
}

/// Convenience alias for actuator results.
pub type ActuatorResult<T> = Result<T, ActuatorError>;
