/// `round(100 × part / whole)` with halves rounded up, in integer arithmetic.
///
/// A zero `whole` yields 100 when `part` is non-zero and 0 otherwise.
pub fn rounded_percent(part: u64, whole: u64) -> u64 {
    if whole == 0 {
        return if part > 0 { 100 } else { 0 };
    }
    let part = part as u128;
    let whole = whole as u128;
    ((200 * part + whole) / (2 * whole)) as u64
}

/// Clamp a stored percentage into the displayable 0–100 range.
pub fn clamp_percent(value: u8) -> u8 {
    value.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_percent() {
        assert_eq!(rounded_percent(3500, 3550), 99);
        assert_eq!(rounded_percent(85, 120), 71);
        assert_eq!(rounded_percent(5, 120), 4);
        assert_eq!(rounded_percent(600, 500), 120);
        assert_eq!(rounded_percent(0, 500), 0);
    }

    #[test]
    fn test_half_rounds_up() {
        // 1/8 = 12.5%
        assert_eq!(rounded_percent(1, 8), 13);
        // 1/200 = 0.5%
        assert_eq!(rounded_percent(1, 200), 1);
    }

    #[test]
    fn test_zero_whole() {
        assert_eq!(rounded_percent(0, 0), 0);
        assert_eq!(rounded_percent(10, 0), 100);
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(65), 65);
        assert_eq!(clamp_percent(140), 100);
    }
}
