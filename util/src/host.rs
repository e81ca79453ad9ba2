//! Host environment utility functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::path::PathBuf;
use thiserror::Error;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Environment variable pointing at the root of the software install.
///
/// The `params` and `sessions` directories live under this root.
pub const SW_ROOT_ENV_VAR: &str = "KRAKEN_BENCH_SW_ROOT";

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Error raised when the software root cannot be determined.
#[derive(Debug, Error)]
#[error("The software root environment variable (KRAKEN_BENCH_SW_ROOT) is not set")]
pub struct SwRootNotSet;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Get the root directory of the software install.
pub fn get_sw_root() -> Result<PathBuf, SwRootNotSet> {
    match std::env::var(SW_ROOT_ENV_VAR) {
        Ok(p) => Ok(PathBuf::from(p)),
        Err(_) => Err(SwRootNotSet),
    }
}
