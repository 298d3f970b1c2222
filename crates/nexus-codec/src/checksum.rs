/// Weighted positional checksum over the concatenated key body.
///
/// Sums each character's code point times its 1-based position, then renders
/// `sum mod 36` and `(sum * 13) mod 36` as two uppercase base-36 digits.
/// The sum is reduced modulo 36 as it accumulates, so the result is exact for
/// bodies of any length. Catches typos and casual edits; it is not a security
/// boundary.
pub fn checksum(body: &str) -> String {
    let sum = body.chars().enumerate().fold(0u64, |acc, (i, c)| {
        let weight = (i as u64 + 1) % 36;
        (acc + (u64::from(c) % 36) * weight) % 36
    });

    [sum, (sum * 13) % 36]
        .into_iter()
        .map(base36_digit)
        .collect()
}

fn base36_digit(value: u64) -> char {
    char::from_digit(value as u32, 36)
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_known_values() {
        // 'A' = 65 -> 65 % 36 = 29 (T), 845 % 36 = 17 (H)
        assert_eq!(checksum("A"), "TH");
        // 65*1 + 66*2 = 197 -> 17 (H), 2561 % 36 = 5
        assert_eq!(checksum("AB"), "H5");
        assert_eq!(checksum(""), "00");
    }

    #[test]
    fn test_checksum_is_position_sensitive() {
        assert_ne!(checksum("AB"), checksum("BA"));
    }

    #[test]
    fn test_checksum_counts_code_points_not_bytes() {
        // '∞' is U+221E = 8734; 8734 % 36 = 22 (M), 113542 % 36 = 34 (Y)
        assert_eq!(checksum("∞"), "MY");
    }

    #[test]
    fn test_checksum_exact_for_long_bodies() {
        // 6M copies of U+10FFFF: the true sum, 0x10FFFF * n(n+1)/2, is past u64::MAX.
        // Exact residues are 12 and 12; a wrapping sum would give "W4".
        let body: String = std::iter::repeat_n('\u{10FFFF}', 6_000_000).collect();
        assert_eq!(checksum(&body), "CC");
    }

    #[test]
    fn test_checksum_is_two_base36_digits() {
        for body in ["ARK4E4A", "GOD123C9Q2#", "NXS000D", "x y z"] {
            let sum = checksum(body);
            assert_eq!(sum.len(), 2);
            assert!(sum.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }
}
