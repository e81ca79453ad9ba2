//! Gamepad implementation of the input device boundary, backed by `gilrs`.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// External
use gilrs::{Axis, Button, GamepadId, Gilrs};
use log::{info, warn};

// Internal
use super::{InputClientError, InputDevice, InputSample};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Operator gamepad client.
pub struct GamepadClient {
    gilrs: Gilrs,

    /// Set once the first gamepad produces an event.
    active: Option<GamepadId>,

    /// Stops the disconnection warning firing every cycle.
    warned_disconnected: bool,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl GamepadClient {
    /// Create a new gamepad client.
    ///
    /// No gamepad needs to be connected yet: until one produces an event the
    /// client reads the first connected pad, or the default sample if there
    /// is none.
    pub fn new() -> Result<Self, InputClientError> {
        let gilrs = Gilrs::new().map_err(|e| InputClientError::BackendInit(e.to_string()))?;

        for (_id, gamepad) in gilrs.gamepads() {
            info!("Gamepad found: {}", gamepad.name());
        }

        Ok(Self {
            gilrs,
            active: None,
            warned_disconnected: false,
        })
    }
}

impl InputDevice for GamepadClient {
    fn sample(&mut self) -> InputSample {
        // Drain the event queue, the latest state is read directly from the
        // gamepad below
        while let Some(event) = self.gilrs.next_event() {
            if self.active.is_none() {
                self.active = Some(event.id);
                info!("Active gamepad: {}", self.gilrs.gamepad(event.id).name());
            }
        }

        // Fall back to the first connected pad until one has produced an event
        let id = self
            .active
            .or_else(|| self.gilrs.gamepads().next().map(|(id, _)| id));

        let id = match id {
            Some(id) => id,
            None => {
                if !self.warned_disconnected {
                    warn!("No gamepad connected, reading zero demands");
                    self.warned_disconnected = true;
                }
                return InputSample::default();
            }
        };

        let gamepad = self.gilrs.gamepad(id);

        if !gamepad.is_connected() {
            if !self.warned_disconnected {
                warn!(
                    "Gamepad \"{}\" disconnected, reading zero demands",
                    gamepad.name()
                );
                self.warned_disconnected = true;
            }
            return InputSample::default();
        }

        self.warned_disconnected = false;

        InputSample {
            left_axis: f64::from(gamepad.value(Axis::LeftStickY)),
            right_axis: f64::from(gamepad.value(Axis::RightStickY)),
            // gilrs names the front bumpers "triggers"
            left_modifier: gamepad.is_pressed(Button::LeftTrigger),
            right_modifier: gamepad.is_pressed(Button::RightTrigger),
        }
    }
}
