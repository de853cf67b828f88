//! Actuator capabilities for Parlance.
//!
//! The interpreter never touches a display or an OS handle directly. It calls
//! an injected [`Actuator`] with exactly two operations, `set_lighting` and
//! `set_volume`. Implementations:
//! - `ConsoleActuator`: keeps the state in memory and logs every change
//! - `MockActuator`: records calls for test assertions
//!
//! Volume bounds are enforced by [`safety::validate_volume`] before any
//! implementation mutates its state.

pub mod console;
pub mod error;
pub mod interface;
pub mod mock;
pub mod safety;

pub use console::{ConsoleActuator, LightingState};
pub use error::{ActuatorError, ActuatorResult};
pub use interface::{Actuator, ActuatorCall};
pub use mock::MockActuator;
