//! Simulated motor controller
//!
//! Stand-in [`MotorController`] implementation used when no hardware stack is
//! attached. Every request is accepted, logged, and recorded so the last
//! state pushed over the boundary can be inspected.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// External
use log::{info, trace};

// Internal
use super::{MotorCmd, MotorConfig, MotorController, MotorError};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Simulated motor controller.
#[derive(Default)]
pub struct SimMotor {
    config: Option<MotorConfig>,
    last_cmd: MotorCmd,
    position_rot: f64,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl SimMotor {
    /// Create a new simulated controller in its power-on state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configuration the controller currently holds, if one has been
    /// applied.
    pub fn config(&self) -> Option<&MotorConfig> {
        self.config.as_ref()
    }

    /// The control request the controller currently holds.
    pub fn last_cmd(&self) -> &MotorCmd {
        &self.last_cmd
    }

    /// The controller's current position reference.
    ///
    /// Units: rotations
    pub fn position_rot(&self) -> f64 {
        self.position_rot
    }
}

impl MotorController for SimMotor {
    fn apply_config(&mut self, config: &MotorConfig) -> Result<(), MotorError> {
        self.config = Some(*config);
        info!("Simulated motor accepted a new configuration");
        Ok(())
    }

    fn set_control(&mut self, cmd: &MotorCmd) -> Result<(), MotorError> {
        self.last_cmd = *cmd;
        trace!("Simulated motor control request: {:?}", cmd);
        Ok(())
    }

    fn set_position(&mut self, rot: f64) -> Result<(), MotorError> {
        self.position_rot = rot;
        trace!("Simulated motor position reference set to {} rot", rot);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::motor_client::GainSlot;

    #[test]
    fn test_requests_supersede() {
        let mut motor = SimMotor::new();

        // Power-on state holds no active request
        assert_eq!(*motor.last_cmd(), MotorCmd::Brake);

        motor
            .set_control(&MotorCmd::PositionTarget {
                rot: 5.0,
                slot: GainSlot::Slot0,
            })
            .unwrap();
        assert_eq!(
            *motor.last_cmd(),
            MotorCmd::PositionTarget {
                rot: 5.0,
                slot: GainSlot::Slot0
            }
        );

        // A new request replaces the old one
        motor.set_control(&MotorCmd::Brake).unwrap();
        assert_eq!(*motor.last_cmd(), MotorCmd::Brake);

        motor.set_position(0.0).unwrap();
        assert_eq!(motor.position_rot(), 0.0);
    }
}
