//! # Control Dispatcher Module
//!
//! Each cycle this module maps the operator's input sample onto exactly one
//! motor control request: a position target, a velocity target, or brake.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod params;
mod state;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// Internal
pub use params::*;
pub use state::*;

use crate::motor_client::GainSlot;

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Gain slot used for position targets.
pub const POSITION_SLOT: GainSlot = GainSlot::Slot0;

/// Gain slot used for velocity targets.
pub const VELOCITY_SLOT: GainSlot = GainSlot::Slot1;

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Possible errors that can occur during CtrlDispatch cyclic processing.
///
/// There are currently none: a command is always emitted, whatever the input
/// sample looks like.
#[derive(Debug, thiserror::Error)]
pub enum CtrlDispatchError {}
