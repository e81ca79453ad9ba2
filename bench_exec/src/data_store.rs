//! # Data Store

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use crate::ctrl_dispatch::{self, CtrlDispatch};
use crate::input_client::InputSample;
use crate::motor_client::MotorCmd;

// ------------------------------------------------------------------------------------------------
// DATA STRUCTURES
// ------------------------------------------------------------------------------------------------

/// Global data store for the executable.
#[derive(Default)]
pub struct DataStore {
    // Cycle management
    /// Number of cycles already executed
    pub num_cycles: u128,

    /// True if this cycle falls on a 1Hz boundary
    pub is_1_hz_cycle: bool,

    // CtrlDispatch
    pub ctrl_dispatch: CtrlDispatch,
    pub ctrl_dispatch_input: InputSample,
    pub ctrl_dispatch_output: MotorCmd,
    pub ctrl_dispatch_status_rpt: ctrl_dispatch::StatusReport,

    // Monitoring Counters
    /// Number of consecutive cycle overruns
    pub num_consec_cycle_overruns: u64,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl DataStore {
    /// Perform actions required at the start of a cycle.
    ///
    /// Clears those items that need clearing at the start of a cycle, and
    /// sets the 1Hz cycle flag.
    pub fn cycle_start(&mut self, cycle_frequency_hz: f64) {
        self.is_1_hz_cycle = self.num_cycles % (cycle_frequency_hz as u128) == 0;

        self.ctrl_dispatch_input = InputSample::default();
        self.ctrl_dispatch_output = MotorCmd::default();
        self.ctrl_dispatch_status_rpt = ctrl_dispatch::StatusReport::default();
    }
}
