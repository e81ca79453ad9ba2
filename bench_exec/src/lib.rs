//! # Bench library.
//!
//! This library allows other crates in the workspace to access items defined
//! inside the bench exec crate.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Control dispatcher module - maps operator input onto motor control requests
pub mod ctrl_dispatch;

/// Global data store for the executable
pub mod data_store;

/// Input client - polls the operator gamepad
pub mod input_client;

/// Motor configuration module - applies the startup controller configuration
pub mod motor_cfg;

/// Motor client - boundary to the motor controller
pub mod motor_client;
