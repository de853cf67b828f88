//! Shared test harness for end-to-end scenario tests.
//!
//! Wires the default interpreter to a recording mock actuator, exercising the
//! real normalize -> select -> simulate -> dispatch path.

use pl_actuators::MockActuator;
use pl_agent::interpreter::CommandInterpreter;
use pl_protocol::CommandReport;

/// Default interpreter plus the actuator it drives.
pub struct TestHarness {
    pub interpreter: CommandInterpreter,
    pub actuator: MockActuator,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            interpreter: CommandInterpreter::default(),
            actuator: MockActuator::new(),
        }
    }

    /// Harness whose actuator backend refuses every call.
    #[allow(dead_code)]
    pub fn with_failing_backend(message: &str) -> Self {
        Self {
            interpreter: CommandInterpreter::default(),
            actuator: MockActuator::failing(message),
        }
    }

    /// Interpret a raw command against the harness actuator.
    pub fn send(&mut self, command: &str) -> CommandReport {
        self.interpreter.interpret(command, &mut self.actuator)
    }
}
