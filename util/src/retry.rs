//! Bounded retry utility

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::debug;
use std::fmt::Display;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Run a fallible operation up to `max_attempts` times, stopping at the
/// first success.
///
/// The attempts are made back to back with no delay between them, this is a
/// bounded synchronous spin and not a suspension point.
///
/// # Notes
/// - `max_attempts` is clamped to at least one attempt.
/// - On exhaustion the error from the final attempt is returned.
pub fn retry<T, E, F>(max_attempts: usize, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    E: Display,
{
    for attempt in 1..max_attempts {
        match op() {
            Ok(t) => return Ok(t),
            Err(e) => debug!("Attempt {} of {} failed: {}", attempt, max_attempts, e),
        }
    }

    // Final attempt, whose error (if any) is handed back to the caller
    op()
}

#[cfg(test)]
mod test {
    use super::*;

    /// Run `retry` against an operation which fails `num_failures` times
    /// before succeeding, returning the result and the attempt count.
    fn run_flaky(max_attempts: usize, num_failures: usize) -> (Result<usize, String>, usize) {
        let mut attempts = 0;

        let result = retry(max_attempts, || {
            attempts += 1;
            if attempts > num_failures {
                Ok(attempts)
            } else {
                Err(format!("failure {}", attempts))
            }
        });

        (result, attempts)
    }

    #[test]
    fn test_first_attempt_success() {
        let (result, attempts) = run_flaky(5, 0);
        assert_eq!(result, Ok(1));
        assert_eq!(attempts, 1);
    }

    #[test]
    fn test_short_circuits_on_success() {
        let (result, attempts) = run_flaky(5, 2);
        assert_eq!(result, Ok(3));
        assert_eq!(attempts, 3);
    }

    #[test]
    fn test_exhaustion_returns_last_error() {
        let (result, attempts) = run_flaky(5, 100);
        assert_eq!(result, Err(String::from("failure 5")));
        assert_eq!(attempts, 5);
    }

    #[test]
    fn test_zero_attempts_clamped_to_one() {
        let (result, attempts) = run_flaky(0, 100);
        assert_eq!(result, Err(String::from("failure 1")));
        assert_eq!(attempts, 1);
    }
}
