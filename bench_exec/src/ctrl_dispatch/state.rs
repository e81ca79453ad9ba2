//! Implementations for the CtrlDispatch state structure

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// External
use log::trace;
use serde::Serialize;
use thiserror::Error;

// Internal
use super::{CtrlDispatchError, Params, ParamsError, POSITION_SLOT, VELOCITY_SLOT};
use crate::input_client::InputSample;
use crate::motor_client::MotorCmd;
use util::{
    maths::{clamp, deadzone},
    module::State,
    params,
    session::Session,
};

// ------------------------------------------------------------------------------------------------
// DATA STRUCTURES
// ------------------------------------------------------------------------------------------------

/// Control dispatcher module state.
///
/// The dispatcher is a pure function of the current input sample, the only
/// state carried across cycles is the parameter set and the last status
/// report.
#[derive(Default)]
pub struct CtrlDispatch {
    pub(crate) params: Params,

    pub(crate) report: StatusReport,
}

/// Status report for CtrlDispatch processing.
#[derive(Clone, Copy, Default, Serialize, Debug)]
pub struct StatusReport {
    /// True when the position axis was inside the deadzone this cycle.
    pub position_in_deadzone: bool,

    /// True when the velocity axis was inside the deadzone this cycle.
    pub velocity_in_deadzone: bool,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Possible errors that can occur during CtrlDispatch initialisation.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("Failed to load parameters: {0}")]
    ParamLoadError(params::LoadError),

    #[error("Loaded parameters are invalid: {0}")]
    ParamsInvalid(ParamsError),
}

// ------------------------------------------------------------------------------------------------
// IMPLEMENTATIONS
// ------------------------------------------------------------------------------------------------

impl State for CtrlDispatch {
    type InitData = &'static str;
    type InitError = InitError;

    type InputData = InputSample;
    type OutputData = MotorCmd;
    type StatusReport = StatusReport;
    type ProcError = CtrlDispatchError;

    /// Initialise the CtrlDispatch module.
    ///
    /// Expected init data is the path to the parameter file.
    fn init(&mut self, init_data: Self::InitData, _session: &Session) -> Result<(), InitError> {
        self.params = params::load(init_data).map_err(InitError::ParamLoadError)?;
        self.params.are_valid().map_err(InitError::ParamsInvalid)?;

        Ok(())
    }

    /// Perform cyclic processing of the control dispatcher.
    ///
    /// Exactly one command is emitted per cycle:
    /// - left modifier held: a position target from the left axis
    /// - otherwise right modifier held: a velocity target from the right axis
    /// - otherwise: brake
    ///
    /// The left modifier wins when both are held.
    fn proc(
        &mut self,
        input: &Self::InputData,
    ) -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError> {
        // Clear the status report
        self.report = StatusReport::default();

        // Non-finite axis values read as zero, everything else is clamped to
        // the expected [-1, 1] range
        let left = sanitise_axis(input.left_axis);
        let right = sanitise_axis(input.right_axis);

        self.report.position_in_deadzone = left.abs() <= self.params.axis_deadzone;
        self.report.velocity_in_deadzone = right.abs() <= self.params.axis_deadzone;

        // The deadzone applies to the normalised axis, before scaling
        let target_pos_rot =
            deadzone(left, self.params.axis_deadzone) * self.params.position_scale_rot;
        let target_vel_rps =
            deadzone(right, self.params.axis_deadzone) * self.params.velocity_scale_rps;

        let cmd = if input.left_modifier {
            MotorCmd::PositionTarget {
                rot: target_pos_rot,
                slot: POSITION_SLOT,
            }
        } else if input.right_modifier {
            MotorCmd::VelocityTarget {
                rps: target_vel_rps,
                slot: VELOCITY_SLOT,
            }
        } else {
            MotorCmd::Brake
        };

        trace!("CtrlDispatch output: {:?}", cmd);

        Ok((cmd, self.report))
    }
}

// ------------------------------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ------------------------------------------------------------------------------------------------

fn sanitise_axis(axis: f64) -> f64 {
    if axis.is_finite() {
        clamp(axis, -1.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Dispatch a single sample with the nominal parameters.
    fn dispatch(sample: InputSample) -> (MotorCmd, StatusReport) {
        let mut ctrl = CtrlDispatch::default();
        ctrl.proc(&sample).unwrap()
    }

    fn sample(
        left_axis: f64,
        right_axis: f64,
        left_modifier: bool,
        right_modifier: bool,
    ) -> InputSample {
        InputSample {
            left_axis,
            right_axis,
            left_modifier,
            right_modifier,
        }
    }

    #[test]
    fn test_brake_when_no_modifier_held() {
        // Axis values are irrelevant without a modifier
        let (cmd, _) = dispatch(sample(0.0, 0.0, false, false));
        assert_eq!(cmd, MotorCmd::Brake);

        let (cmd, _) = dispatch(sample(1.0, -1.0, false, false));
        assert_eq!(cmd, MotorCmd::Brake);
    }

    #[test]
    fn test_position_target_scaling() {
        let (cmd, _) = dispatch(sample(0.5, 0.0, true, false));
        assert_eq!(
            cmd,
            MotorCmd::PositionTarget {
                rot: 5.0,
                slot: POSITION_SLOT
            }
        );

        let (cmd, _) = dispatch(sample(-1.0, 0.0, true, false));
        assert_eq!(
            cmd,
            MotorCmd::PositionTarget {
                rot: -10.0,
                slot: POSITION_SLOT
            }
        );
    }

    #[test]
    fn test_velocity_target_scaling() {
        let (cmd, _) = dispatch(sample(0.0, -0.4, false, true));
        assert_eq!(
            cmd,
            MotorCmd::VelocityTarget {
                rps: -20.0,
                slot: VELOCITY_SLOT
            }
        );

        let (cmd, _) = dispatch(sample(0.0, 1.0, false, true));
        assert_eq!(
            cmd,
            MotorCmd::VelocityTarget {
                rps: 50.0,
                slot: VELOCITY_SLOT
            }
        );
    }

    #[test]
    fn test_axes_inside_deadzone_read_as_zero() {
        // Position axis within the deadzone
        let (cmd, report) = dispatch(sample(0.05, 0.0, true, false));
        assert_eq!(
            cmd,
            MotorCmd::PositionTarget {
                rot: 0.0,
                slot: POSITION_SLOT
            }
        );
        assert!(report.position_in_deadzone);

        // The deadzone boundary itself is inside
        let (cmd, _) = dispatch(sample(-0.1, 0.0, true, false));
        assert_eq!(
            cmd,
            MotorCmd::PositionTarget {
                rot: 0.0,
                slot: POSITION_SLOT
            }
        );

        // Velocity axis within the deadzone
        let (cmd, report) = dispatch(sample(0.0, -0.1, false, true));
        assert_eq!(
            cmd,
            MotorCmd::VelocityTarget {
                rps: 0.0,
                slot: VELOCITY_SLOT
            }
        );
        assert!(report.velocity_in_deadzone);
    }

    #[test]
    fn test_values_outside_deadzone_untouched() {
        // Just outside the deadzone the full scale applies exactly
        let a = 0.11f64;
        let (cmd, report) = dispatch(sample(a, 0.0, true, false));
        assert_eq!(
            cmd,
            MotorCmd::PositionTarget {
                rot: a * 10.0,
                slot: POSITION_SLOT
            }
        );
        assert!(!report.position_in_deadzone);

        let (cmd, _) = dispatch(sample(0.0, a, false, true));
        assert_eq!(
            cmd,
            MotorCmd::VelocityTarget {
                rps: a * 50.0,
                slot: VELOCITY_SLOT
            }
        );
    }

    #[test]
    fn test_left_modifier_wins_ties() {
        let (cmd, _) = dispatch(sample(0.5, -0.4, true, true));
        assert_eq!(
            cmd,
            MotorCmd::PositionTarget {
                rot: 5.0,
                slot: POSITION_SLOT
            }
        );
    }

    #[test]
    fn test_axes_are_sanitised() {
        // A non-finite axis reads as zero
        let (cmd, _) = dispatch(sample(f64::NAN, 0.0, true, false));
        assert_eq!(
            cmd,
            MotorCmd::PositionTarget {
                rot: 0.0,
                slot: POSITION_SLOT
            }
        );

        // An out of range axis is clamped before scaling
        let (cmd, _) = dispatch(sample(1.5, 0.0, true, false));
        assert_eq!(
            cmd,
            MotorCmd::PositionTarget {
                rot: 10.0,
                slot: POSITION_SLOT
            }
        );
    }
}
