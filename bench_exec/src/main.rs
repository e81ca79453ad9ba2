//! Main bench executable entry point.
//!
//! # Architecture
//!
//! The general execution methodology consists of:
//!
//!     - Initialise the session, logger, and all modules
//!     - Apply the motor controller configuration (bounded retries, non-fatal)
//!     - Main loop at 50 Hz:
//!         - Operator input acquisition
//!         - Control dispatcher processing
//!         - Control request output to the motor controller
//!
//! The executable runs in one of four operating modes selected on the command
//! line, of which only manual mode carries any per-cycle logic.

// ---------------------------------------------------------------------------
// USE MODULES FROM LIBRARY
// ---------------------------------------------------------------------------

use bench_lib::{
    data_store::DataStore,
    input_client::{GamepadClient, InputDevice},
    motor_cfg,
    motor_client::{MotorConfig, MotorController, SimMotor},
};

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{
    eyre::{eyre, WrapErr},
    Result,
};
use log::{debug, error, info, warn};
use std::env;
use std::thread;
use std::time::{Duration, Instant};

// Internal
use util::{
    logger::{logger_init, LevelFilter},
    module::State,
    session::Session,
};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Target period of one cycle.
const CYCLE_PERIOD_S: f64 = 0.02;

/// Number of cycles per second
const CYCLE_FREQUENCY_HZ: f64 = 1.0 / CYCLE_PERIOD_S;

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<()> {
    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session =
        Session::new("bench_exec", "sessions").wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Trace, &session).wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Kraken Bench Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- OPERATING MODE ----

    // Collect all arguments
    let args: Vec<String> = env::args().collect();

    debug!("CLI arguments: {:?}", args);

    let op_mode = match args.len() {
        1 => OpMode::Manual,
        2 => OpMode::from_arg(&args[1])
            .ok_or_else(|| eyre!("Unknown operating mode \"{}\"", args[1]))?,
        _ => {
            return Err(eyre!(
                "Expected either zero or one argument, found {}",
                args.len() - 1
            ))
        }
    };

    info!("Operating mode: {:?}\n", op_mode);

    // ---- LOAD PARAMETERS ----

    let motor_config: MotorConfig =
        util::params::load("motor_cfg.toml").wrap_err("Could not load the motor configuration")?;

    info!("Motor configuration loaded");

    // ---- INITIALISE MODULES ----

    info!("Initialising modules...");

    let mut ds = DataStore::default();

    ds.ctrl_dispatch
        .init("ctrl_dispatch.toml", &session)
        .wrap_err("Failed to initialise CtrlDispatch")?;
    info!("CtrlDispatch init complete");

    info!("Module initialisation complete\n");

    // ---- INITIALISE EQUIPMENT ----

    let mut motor = SimMotor::new();

    // A configuration failure is reported but is not fatal, the controller
    // keeps whatever configuration it already holds. The position reference
    // is zeroed by the applier in either case.
    match motor_cfg::apply(&mut motor, &motor_config) {
        Ok(()) => info!("Motor configuration applied"),
        Err(e) => error!(
            "Could not apply the motor configuration after {} attempts: {}",
            motor_cfg::MAX_APPLY_ATTEMPTS,
            e
        ),
    }

    let mut gamepad = GamepadClient::new().wrap_err("Failed to initialise the gamepad client")?;
    info!("GamepadClient initialised");

    // ---- MAIN LOOP ----

    info!("Initialisation complete, begining main loop\n");

    loop {
        // Get cycle start time
        let cycle_start_instant = Instant::now();

        // Clear items that need wiping at the start of the cycle
        ds.cycle_start(CYCLE_FREQUENCY_HZ);

        match op_mode {
            OpMode::Manual => {
                // ---- DATA INPUT ----

                ds.ctrl_dispatch_input = gamepad.sample();

                // ---- CONTROL ALGORITHM PROCESSING ----

                match ds.ctrl_dispatch.proc(&ds.ctrl_dispatch_input) {
                    Ok((cmd, rpt)) => {
                        ds.ctrl_dispatch_output = cmd;
                        ds.ctrl_dispatch_status_rpt = rpt;
                    }
                    Err(e) => warn!("Error during CtrlDispatch processing: {}", e),
                }

                // ---- CONTROL OUTPUT ----

                // Fire and forget, a failed send leaves the controller holding
                // its previous request
                if let Err(e) = motor.set_control(&ds.ctrl_dispatch_output) {
                    warn!("Could not send the control request: {}", e);
                }
            }

            // The remaining lifecycle modes carry no per-cycle logic at this
            // scope
            OpMode::Auto | OpMode::Test | OpMode::Disabled => (),
        }

        if ds.is_1_hz_cycle {
            debug!("Last control request: {:?}", ds.ctrl_dispatch_output);
        }

        // ---- CYCLE MANAGEMENT ----

        let cycle_dur = Instant::now() - cycle_start_instant;

        // Get sleep duration
        match Duration::from_secs_f64(CYCLE_PERIOD_S).checked_sub(cycle_dur) {
            Some(d) => {
                ds.num_consec_cycle_overruns = 0;
                thread::sleep(d);
            }
            None => {
                warn!(
                    "Cycle overran by {:.06} s",
                    cycle_dur.as_secs_f64() - CYCLE_PERIOD_S
                );
                ds.num_consec_cycle_overruns += 1;
            }
        }

        // Increment cycle counter
        ds.num_cycles += 1;
    }
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Operating modes of the executable.
///
/// Mirrors the lifecycle the surrounding robot framework would drive: only
/// manual mode carries logic here, the remaining modes tick as no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpMode {
    Manual,
    Auto,
    Test,
    Disabled,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl OpMode {
    /// Parse an operating mode from a CLI argument.
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "manual" => Some(OpMode::Manual),
            "auto" => Some(OpMode::Auto),
            "test" => Some(OpMode::Test),
            "disabled" => Some(OpMode::Disabled),
            _ => None,
        }
    }
}
