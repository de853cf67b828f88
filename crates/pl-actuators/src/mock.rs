//! Mock actuator for testing.
//!
//! Records every accepted call and can be scripted to fail like an
//! unavailable backend. Volume validation is enforced exactly as in real
//! implementations.

use crate::error::{ActuatorError, ActuatorResult};
use crate::interface::{Actuator, ActuatorCall};
use crate::safety;

/// Recording actuator with optional scripted failure.
#[derive(Debug, Default)]
pub struct MockActuator {
    /// Accepted calls, in order.
    calls: Vec<ActuatorCall>,
    lighting: Option<bool>,
    volume: Option<u8>,
    /// When set, every call fails with this backend error.
    failure: Option<String>,
}

impl MockActuator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock whose backend refuses every call.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> &[ActuatorCall] {
        &self.calls
    }

    pub fn last_call(&self) -> Option<ActuatorCall> {
        self.calls.last().copied()
    }

    /// Current lighting state, `None` if never set.
    pub fn lighting(&self) -> Option<bool> {
        self.lighting
    }

    /// Current volume, `None` if never set.
    pub fn volume(&self) -> Option<u8> {
        self.volume
    }

    fn check_backend(&self) -> ActuatorResult<()> {
        match &self.failure {
            Some(message) => Err(ActuatorError::Backend(message.clone())),
            None => Ok(()),
        }
    }
}

impl Actuator for MockActuator {
    fn set_lighting(&mut self, on: bool) -> ActuatorResult<()> {
        self.check_backend()?;
        self.lighting = Some(on);
        self.calls.push(ActuatorCall::Lighting(on));
        Ok(())
    }

    fn set_volume(&mut self, percent: i32) -> ActuatorResult<()> {
        let percent = safety::validate_volume(percent)?;
        self.check_backend()?;
        self.volume = Some(percent);
        self.calls.push(ActuatorCall::Volume(percent));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let mut mock = MockActuator::new();
        mock.set_lighting(true).unwrap();
        mock.set_volume(30).unwrap();
        mock.set_lighting(false).unwrap();

        assert_eq!(
            mock.calls(),
            [
                ActuatorCall::Lighting(true),
                ActuatorCall::Volume(30),
                ActuatorCall::Lighting(false),
            ]
        );
        assert_eq!(mock.lighting(), Some(false));
        assert_eq!(mock.volume(), Some(30));
    }

    #[test]
    fn out_of_range_volume_leaves_state_untouched() {
        let mut mock = MockActuator::new();
        mock.set_volume(40).unwrap();

        let result = mock.set_volume(150);
        assert_eq!(result, Err(ActuatorError::VolumeOutOfRange { percent: 150 }));
        assert_eq!(mock.volume(), Some(40));
        assert_eq!(mock.calls().len(), 1);
    }

    #[test]
    fn failing_backend() {
        let mut mock = MockActuator::failing("display unavailable");
        let result = mock.set_lighting(true);
        assert!(matches!(result, Err(ActuatorError::Backend(ref m)) if m == "display unavailable"));
        assert!(mock.lighting().is_none());
        assert!(mock.last_call().is_none());
    }
}
