//! # Motor Configuration Module
//!
//! This module pushes the static controller configuration at startup. The
//! apply is retried a bounded number of times and its failure is reported by
//! the caller rather than halting startup, the controller simply keeps
//! whatever configuration it already holds.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// External
use log::warn;

// Internal
use crate::motor_client::{MotorConfig, MotorController, MotorError};
use util::retry::retry;

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Maximum number of attempts to apply the configuration.
pub const MAX_APPLY_ATTEMPTS: usize = 5;

// ------------------------------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Apply the given configuration to the controller.
///
/// Up to [`MAX_APPLY_ATTEMPTS`] attempts are made back to back, stopping at
/// the first acceptance. The controller's position reference is then zeroed
/// regardless of the apply outcome, so position targets are always relative
/// to the power-on position.
///
/// On exhaustion the error from the final attempt is returned for the caller
/// to report. Failure here is non-fatal by contract and must not halt
/// startup.
pub fn apply<M: MotorController>(motor: &mut M, config: &MotorConfig) -> Result<(), MotorError> {
    let result = retry(MAX_APPLY_ATTEMPTS, || motor.apply_config(config));

    // The position reference is zeroed even when the apply failed
    if let Err(e) = motor.set_position(0.0) {
        warn!("Could not zero the position reference: {}", e);
    }

    result
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::motor_client::{MotorCmd, StatusCode};

    /// Mock controller which rejects the first `num_rejections` apply
    /// attempts with a TxFailed status.
    struct MockMotor {
        num_rejections: usize,
        apply_attempts: usize,
        position_rot: Option<f64>,
    }

    impl MockMotor {
        fn rejecting(num_rejections: usize) -> Self {
            Self {
                num_rejections,
                apply_attempts: 0,
                position_rot: None,
            }
        }
    }

    impl MotorController for MockMotor {
        fn apply_config(&mut self, _config: &MotorConfig) -> Result<(), MotorError> {
            self.apply_attempts += 1;

            let status = if self.apply_attempts > self.num_rejections {
                StatusCode::Ok
            } else {
                StatusCode::TxFailed
            };

            status.into_result()
        }

        fn set_control(&mut self, _cmd: &MotorCmd) -> Result<(), MotorError> {
            Ok(())
        }

        fn set_position(&mut self, rot: f64) -> Result<(), MotorError> {
            self.position_rot = Some(rot);
            Ok(())
        }
    }

    fn test_config() -> MotorConfig {
        use crate::motor_client::{CurrentLimit, GainConfig};

        MotorConfig {
            peak_fwd_voltage_v: 8.0,
            peak_rev_voltage_v: -8.0,
            closed_loop_ramp_s: 0.0,
            stator_limit: CurrentLimit {
                enable: true,
                limit_a: 120.0,
            },
            supply_limit: CurrentLimit {
                enable: true,
                limit_a: 40.0,
            },
            slot0: GainConfig {
                k_s: 0.1,
                k_v: 0.12,
                k_p: 2.4,
                k_i: 0.0,
                k_d: 0.1,
            },
            slot1: GainConfig {
                k_s: 0.1,
                k_v: 0.12,
                k_p: 0.11,
                k_i: 0.0,
                k_d: 0.0,
            },
        }
    }

    #[test]
    fn test_apply_first_attempt() {
        let mut motor = MockMotor::rejecting(0);

        assert!(apply(&mut motor, &test_config()).is_ok());
        assert_eq!(motor.apply_attempts, 1);
        assert_eq!(motor.position_rot, Some(0.0));
    }

    #[test]
    fn test_apply_short_circuits() {
        let mut motor = MockMotor::rejecting(3);

        assert!(apply(&mut motor, &test_config()).is_ok());
        assert_eq!(motor.apply_attempts, 4);
        assert_eq!(motor.position_rot, Some(0.0));
    }

    #[test]
    fn test_apply_exhaustion_is_reported_not_raised() {
        let mut motor = MockMotor::rejecting(100);

        // All five attempts fail: the error comes back as a value, and the
        // position reference is still zeroed
        let result = apply(&mut motor, &test_config());

        assert!(matches!(
            result,
            Err(MotorError::NonOkStatus(StatusCode::TxFailed))
        ));
        assert_eq!(motor.apply_attempts, MAX_APPLY_ATTEMPTS);
        assert_eq!(motor.position_rot, Some(0.0));
    }
}
