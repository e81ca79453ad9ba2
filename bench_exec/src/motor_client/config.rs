//! Motor controller configuration record

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Static configuration for the motor controller.
///
/// Built once at startup from `params/motor_cfg.toml` and pushed over the
/// controller boundary, never mutated afterwards. The mapping from this
/// record to wire-level register writes is entirely the controller's concern.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MotorConfig {
    /// Peak voltage applied in the forward direction.
    ///
    /// Units: volts
    pub peak_fwd_voltage_v: f64,

    /// Peak voltage applied in the reverse direction (negative).
    ///
    /// Units: volts
    pub peak_rev_voltage_v: f64,

    /// Ramp period applied to closed-loop voltage requests.
    ///
    /// Units: seconds
    pub closed_loop_ramp_s: f64,

    /// Stator current limit.
    pub stator_limit: CurrentLimit,

    /// Supply current limit.
    pub supply_limit: CurrentLimit,

    /// Gain set for slot 0, the position control loop in this setup.
    pub slot0: GainConfig,

    /// Gain set for slot 1, the velocity control loop in this setup.
    pub slot1: GainConfig,
}

/// A single current limit on the controller.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CurrentLimit {
    /// True if the limit is enforced.
    pub enable: bool,

    /// The limit itself.
    ///
    /// Units: amps
    pub limit_a: f64,
}

/// Closed-loop gain set for one controller slot.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GainConfig {
    /// Static feedforward, overcomes friction.
    ///
    /// Units: volts
    pub k_s: f64,

    /// Velocity feedforward.
    ///
    /// Units: volts per rotation-per-second
    pub k_v: f64,

    /// Proportional gain on the closed-loop error.
    pub k_p: f64,

    /// Integral gain on the accumulated closed-loop error.
    pub k_i: f64,

    /// Derivative gain on the closed-loop error rate.
    pub k_d: f64,
}
