//! Physical memory conversion

/// Bytes in one binary gigabyte (2^30)
pub const GIB: u64 = 1 << 30;

/// Convert a byte count into gigabytes (1024-based), rounded to 2 decimals
///
/// Rounding is half away from zero, so `1.005` GiB becomes `1.01` when the
/// float representation allows it.
///
/// # Examples
///
/// ```
/// use hostprobe_system::memory::bytes_to_gib;
///
/// assert_eq!(bytes_to_gib(16 * 1024 * 1024 * 1024), 16.0);
/// assert_eq!(bytes_to_gib(0), 0.0);
/// ```
#[must_use]
pub fn bytes_to_gib(bytes: u64) -> f64 {
    round_to_hundredths(bytes as f64 / GIB as f64)
}

/// Round to 2 fractional digits, ties away from zero
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0, 0.0)]
    #[case::exact(8 * GIB, 8.0)]
    #[case::half(GIB / 2, 0.5)]
    // 15.93 GiB as reported by a typical 16 GB laptop
    #[case::typical_laptop(17_104_531_456, 15.93)]
    #[case::rounds_up(GIB + GIB / 200 + 1, 1.01)]
    fn test_bytes_to_gib(#[case] bytes: u64, #[case] expected: f64) {
        assert_eq!(bytes_to_gib(bytes), expected);
    }

    #[test]
    fn test_round_to_hundredths() {
        assert_eq!(round_to_hundredths(2.344), 2.34);
        assert_eq!(round_to_hundredths(2.346), 2.35);
        assert_eq!(round_to_hundredths(-2.346), -2.35);
    }
}
