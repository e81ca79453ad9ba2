//! # Motor Controller Client
//!
//! This module is the boundary to the motor controller. The controller itself
//! (firmware, CAN transport, closed-loop solvers) is an external collaborator,
//! this module only defines the requests crossing that boundary and a
//! simulated stand-in used when no hardware stack is attached.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// The static configuration record applied to the controller at startup.
pub mod config;

/// Simulated motor controller.
pub mod sim;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};

// Internal
pub use config::*;
pub use sim::SimMotor;

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// Trait to provide a unified API for issuing requests to a motor controller.
///
/// The controller holds the last accepted request until it is superseded, so
/// every method here is a single request/acknowledge exchange with no state
/// kept on this side of the boundary.
pub trait MotorController {
    /// Apply a full configuration record to the controller.
    fn apply_config(&mut self, config: &MotorConfig) -> Result<(), MotorError>;

    /// Issue a control request, superseding whatever request the controller
    /// currently holds.
    fn set_control(&mut self, cmd: &MotorCmd) -> Result<(), MotorError>;

    /// Overwrite the controller's internal position reference.
    ///
    /// Units: rotations
    fn set_position(&mut self, rot: f64) -> Result<(), MotorError>;
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Closed-loop gain slots available on the controller.
///
/// Each slot holds an independent gain set (see [`config::GainConfig`]),
/// selected per control request.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Copy, Clone)]
pub enum GainSlot {
    Slot0,
    Slot1,
}

/// A control request issued to the motor controller.
///
/// Constructed fresh every cycle and superseded by the next request, no
/// identity is persisted on this side of the boundary.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum MotorCmd {
    /// Hold the given position under closed-loop control.
    ///
    /// Units: rotations
    PositionTarget { rot: f64, slot: GainSlot },

    /// Hold the given velocity under closed-loop control.
    ///
    /// Units: rotations/second
    VelocityTarget { rps: f64, slot: GainSlot },

    /// Disable active drive output, the motor coasts or brakes per the
    /// hardware default.
    Brake,
}

/// Acknowledgement codes returned by the controller.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Copy, Clone)]
pub enum StatusCode {
    /// The request was accepted.
    Ok,

    /// The controller has not completed its boot sequence.
    NotInitialised,

    /// The request could not be transmitted to the controller.
    TxFailed,

    /// The controller did not acknowledge within the transport timeout.
    Timeout,

    /// The request contained a value the controller rejected.
    InvalidParam,
}

#[derive(thiserror::Error, Debug)]
pub enum MotorError {
    #[error("The controller rejected the request with status {0:?}")]
    NonOkStatus(StatusCode),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Default for MotorCmd {
    fn default() -> Self {
        MotorCmd::Brake
    }
}

impl StatusCode {
    /// Determine if this code is an acceptance.
    pub fn is_ok(&self) -> bool {
        matches!(self, StatusCode::Ok)
    }

    /// Convert the code into a `Result`, non-OK codes become a
    /// [`MotorError::NonOkStatus`].
    pub fn into_result(self) -> Result<(), MotorError> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(MotorError::NonOkStatus(self))
        }
    }
}
