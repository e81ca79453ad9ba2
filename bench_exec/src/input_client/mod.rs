//! # Input Client
//!
//! Boundary to the operator's input device. The device is polled once per
//! cycle for a fresh [`InputSample`], nothing is retained between polls.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// [`InputDevice`] implementation backed by a gamepad.
pub mod gamepad;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
pub use gamepad::GamepadClient;

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// Trait to provide a unified API for polling operator input devices.
pub trait InputDevice {
    /// Poll the device for a fresh sample.
    ///
    /// A device with nothing connected returns the default (all zero) sample,
    /// which the dispatcher turns into a brake command.
    fn sample(&mut self) -> InputSample;
}

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A single poll of the operator input device.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct InputSample {
    /// Left stick vertical axis, in [-1, 1].
    pub left_axis: f64,

    /// Right stick vertical axis, in [-1, 1].
    pub right_axis: f64,

    /// True while the left modifier (left bumper) is held.
    pub left_modifier: bool,

    /// True while the right modifier (right bumper) is held.
    pub right_modifier: bool,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Possible errors raised by input clients.
#[derive(thiserror::Error, Debug)]
pub enum InputClientError {
    #[error("Failed to initialise the gamepad backend: {0}")]
    BackendInit(String),
}
