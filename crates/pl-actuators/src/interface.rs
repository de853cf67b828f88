//! Actuator capability interface.

use crate::error::ActuatorResult;

/// Side-effecting operations the interpreter may request.
///
/// Implementations must validate `set_volume` through
/// [`crate::safety::validate_volume`] and leave their state untouched on
/// rejection.
pub trait Actuator {
    /// Switch the lighting on or off.
    fn set_lighting(&mut self, on: bool) -> ActuatorResult<()>;

    /// Set the output volume in percent.
    fn set_volume(&mut self, percent: i32) -> ActuatorResult<()>;
}

/// An accepted actuator call, as recorded by implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    Lighting(bool),
    Volume(u8),
}
