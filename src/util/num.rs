/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;
/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Converts an `f64` to `i64` if the value is finite, integral, and exactly
/// representable.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
///
/// ## Returns
/// - `Some(i64)`: The converted value if it is safe.
/// - `None`: For non-finite, fractional, or out-of-range values.
///
/// ## Example
/// ```
/// use function_solver::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(-3.0), Some(-3));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(1e20), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value.abs() > MAX_SAFE_I64_INT as f64 {
        return None;
    }
    Some(value as i64)
}

/// Converts an `f64` to a non-negative `u32` if it is integral and fits.
///
/// Used for polynomial exponents, which must be small non-negative integers.
///
/// ## Example
/// ```
/// use function_solver::util::num::f64_to_u32_exact;
///
/// assert_eq!(f64_to_u32_exact(4.0), Some(4));
/// assert_eq!(f64_to_u32_exact(-4.0), None);
/// assert_eq!(f64_to_u32_exact(0.5), None);
/// ```
#[must_use]
pub fn f64_to_u32_exact(value: f64) -> Option<u32> {
    f64_to_i64_exact(value).and_then(|n| u32::try_from(n).ok())
}

/// Converts a `usize` to `f64` if and only if it is exactly representable.
///
/// ## Example
/// ```
/// use function_solver::util::num::{MAX_SAFE_U64_INT, usize_to_f64_checked};
///
/// assert_eq!(usize_to_f64_checked(100), Some(100.0));
/// assert_eq!(usize_to_f64_checked((MAX_SAFE_U64_INT + 1) as usize), None);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn usize_to_f64_checked(value: usize) -> Option<f64> {
    if value as u64 > MAX_SAFE_U64_INT {
        return None;
    }
    Some(value as f64)
}

/// Returns `true` if `value` is within `tolerance` of zero, scaled by `scale`.
///
/// `scale` is clamped to at least `1.0` so that tiny magnitudes fall back to an
/// absolute comparison.
#[must_use]
pub fn is_negligible(value: f64, scale: f64, tolerance: f64) -> bool {
    value.abs() <= tolerance * scale.abs().max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negligible_is_relative_to_scale() {
        assert!(is_negligible(1e-12, 1.0, 1e-10));
        assert!(!is_negligible(1e-6, 1.0, 1e-10));
        assert!(is_negligible(1e-6, 1e6, 1e-10));
        assert!(is_negligible(0.0, 0.0, 0.0));
    }

    #[test]
    fn exact_conversion_rejects_unsafe_range() {
        #[allow(clippy::cast_precision_loss)]
        let just_over = (MAX_SAFE_I64_INT as f64) * 2.0;
        assert_eq!(f64_to_i64_exact(just_over), None);
        assert_eq!(f64_to_i64_exact(-0.0), Some(0));
    }
}
