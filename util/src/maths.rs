//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Clamp a value into the range `[min, max]`.
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: Float,
{
    let mut ret = value;

    if ret > max {
        ret = max
    }
    if ret < min {
        ret = min
    }

    ret
}

/// Zero a value whose magnitude is at or below the given threshold.
///
/// Used to suppress noise on control axes: values inside the deadzone read as
/// exactly zero, values outside it pass through unchanged.
pub fn deadzone<T>(value: T, threshold: T) -> T
where
    T: Float,
{
    if value.abs() <= threshold {
        T::zero()
    } else {
        value
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(0.5f64, -1.0, 1.0), 0.5);
        assert_eq!(clamp(1.5f64, -1.0, 1.0), 1.0);
        assert_eq!(clamp(-1.5f64, -1.0, 1.0), -1.0);
        assert_eq!(clamp(-1.0f64, -1.0, 1.0), -1.0);
    }

    #[test]
    fn test_deadzone() {
        // Inside the deadzone, including the boundary itself
        assert_eq!(deadzone(0.05f64, 0.1), 0.0);
        assert_eq!(deadzone(-0.05f64, 0.1), 0.0);
        assert_eq!(deadzone(0.1f64, 0.1), 0.0);
        assert_eq!(deadzone(-0.1f64, 0.1), 0.0);

        // Outside the deadzone values are untouched
        assert_eq!(deadzone(0.1000001f64, 0.1), 0.1000001);
        assert_eq!(deadzone(-0.5f64, 0.1), -0.5);
        assert_eq!(deadzone(1.0f64, 0.1), 1.0);
    }
}
