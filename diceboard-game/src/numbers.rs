//! Numeric conversion helpers centralizing lossy casts.

use num_traits::cast::cast;

/// Convert u64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn u64_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0)
}

/// Convert usize to f64 while allowing precision loss in a single location.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Convert u64 to i64, saturating at the i64 ceiling.
#[must_use]
pub fn u64_to_i64(value: u64) -> i64 {
    cast::<u64, i64>(value).unwrap_or(i64::MAX)
}

/// Arithmetic mean of a slice, 0.0 for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / usize_to_f64(values.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_counters() {
        assert!((u64_to_f64(36) - 36.0).abs() < f64::EPSILON);
        assert!((usize_to_f64(24) - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn u64_to_i64_saturates() {
        assert_eq!(u64_to_i64(42), 42);
        assert_eq!(u64_to_i64(u64::MAX), i64::MAX);
    }

    #[test]
    fn mean_handles_empty_and_values() {
        assert!((mean(&[]) - 0.0).abs() < f64::EPSILON);
        assert!((mean(&[1.0, 2.0, 3.0]) - 2.0).abs() < f64::EPSILON);
    }
}
