//! Base-b digit decomposition for rule numbers.

/// Decomposes `x` into `len` base-`base` digits, least significant first.
///
/// The high end is zero-padded when `x` does not fill `len` digits; digits
/// beyond `len` are silently truncated. All arithmetic is exact integer
/// division, so large rule numbers decode without rounding drift.
///
/// # Example
///
/// ```
/// use cellweave::base_rep;
///
/// assert_eq!(base_rep(9, 2, 8), [1, 0, 0, 1, 0, 0, 0, 0]);
/// assert_eq!(base_rep(23, 3, 5), [2, 1, 2, 0, 0]);
/// ```
///
/// # Panics
///
/// Panics if `base` is less than 2.
pub fn base_rep(x: u64, base: u64, len: usize) -> Vec<u64> {
    assert!(base >= 2, "digit base must be at least 2");

    let mut digits = Vec::with_capacity(len);
    let mut rest = x;
    for _ in 0..len {
        digits.push(rest % base);
        rest /= base;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_representation() {
        assert_eq!(base_rep(9, 2, 8), [1, 0, 0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_ternary_representation() {
        assert_eq!(base_rep(23, 3, 5), [2, 1, 2, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "digit base must be at least 2")]
    fn test_rejects_base_below_two() {
        base_rep(9, 1, 4);
    }

    #[test]
    fn test_zero_length() {
        assert!(base_rep(42, 2, 0).is_empty());
    }

    #[test]
    fn test_high_digits_truncated() {
        // 255 needs 8 binary digits; only the low 4 survive
        assert_eq!(base_rep(255, 2, 4), [1, 1, 1, 1]);
        assert_eq!(base_rep(16, 2, 4), [0, 0, 0, 0]);
    }

    #[test]
    fn test_digits_in_range() {
        for &(x, base, len) in &[(110u64, 2u64, 8usize), (1599, 3, 7), (98765, 10, 5)] {
            let digits = base_rep(x, base, len);
            assert_eq!(digits.len(), len);
            assert!(digits.iter().all(|&d| d < base));
        }
    }

    #[test]
    fn test_recomposition() {
        // Recomposing the digits gives back x mod base^len
        for &(x, base, len) in &[(9u64, 2u64, 8usize), (23, 3, 5), (1599, 3, 7), (255, 2, 4)] {
            let digits = base_rep(x, base, len);
            let recomposed: u64 = digits
                .iter()
                .rev()
                .fold(0, |acc, &d| acc * base + d);
            assert_eq!(recomposed, x % base.pow(len as u32));
        }
    }
}
