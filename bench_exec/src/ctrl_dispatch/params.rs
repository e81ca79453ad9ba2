//! Parameters structure for CtrlDispatch

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Deserialize;
use thiserror::Error;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Parameters for the control dispatcher.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Params {
    /// Scale from the position axis value to the position target.
    ///
    /// Units: rotations
    pub position_scale_rot: f64,

    /// Scale from the velocity axis value to the velocity target.
    ///
    /// Units: rotations/second
    pub velocity_scale_rps: f64,

    /// Axis magnitude at or below which the axis is treated as exactly zero,
    /// suppressing stick noise around centre.
    pub axis_deadzone: f64,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Ways in which a loaded [`Params`] can be invalid.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("axis_deadzone must be in [0, 1), found {0}")]
    InvalidDeadzone(f64),

    #[error("Target scales must be finite, found position {0} and velocity {1}")]
    NonFiniteScale(f64, f64),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Params {
    /// Check that the loaded parameters are usable.
    pub fn are_valid(&self) -> Result<(), ParamsError> {
        if !self.axis_deadzone.is_finite()
            || self.axis_deadzone < 0.0
            || self.axis_deadzone >= 1.0
        {
            return Err(ParamsError::InvalidDeadzone(self.axis_deadzone));
        }

        if !self.position_scale_rot.is_finite() || !self.velocity_scale_rps.is_finite() {
            return Err(ParamsError::NonFiniteScale(
                self.position_scale_rot,
                self.velocity_scale_rps,
            ));
        }

        Ok(())
    }
}

impl Default for Params {
    /// Nominal values for the bench setup, matching `params/ctrl_dispatch.toml`.
    fn default() -> Self {
        Self {
            position_scale_rot: 10.0,
            velocity_scale_rps: 50.0,
            axis_deadzone: 0.1,
        }
    }
}
