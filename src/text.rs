/// Number of letters in the Latin alphabet
pub const ALPHABET_LEN: i64 = 26;

/// Strip everything that is not an ASCII letter and uppercase the rest.
/// Order is preserved and repeated letters are kept.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Rotate an uppercase letter by `k` positions, wrapping around the alphabet.
///
/// `k` may be any integer, negative or larger than 26. Characters outside
/// `A..=Z` are returned unchanged.
pub fn shift_char(c: char, k: i64) -> char {
    if !c.is_ascii_uppercase() {
        return c;
    }

    let p = (c as u8 - b'A') as i64;
    // `%` keeps the sign of the dividend; fold back into [0, 26)
    let shifted = ((p + k % ALPHABET_LEN) % ALPHABET_LEN + ALPHABET_LEN) % ALPHABET_LEN;
    (b'A' + shifted as u8) as char
}

/// Shift every character of `text` by `k` without normalizing it first
pub fn encrypt_raw(text: &str, k: i64) -> String {
    text.chars().map(|c| shift_char(c, k)).collect()
}

/// Reduce an arbitrary offset to the equivalent rotation in `0..26`
pub fn rotation(k: i64) -> u8 {
    k.rem_euclid(ALPHABET_LEN) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_and_uppercases() {
        assert_eq!(normalize("Hello World!"), "HELLOWORLD");
        assert_eq!(normalize("a1b2-c3 D"), "ABCD");
    }

    #[test]
    fn test_normalize_keeps_duplicates_and_order() {
        assert_eq!(normalize("aAbB"), "AABB");
        assert_eq!(normalize("zyx"), "ZYX");
    }

    #[test]
    fn test_normalize_empty_and_letterless() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("123 !?\n\t"), "");
    }

    #[test]
    fn test_normalize_drops_non_ascii_letters() {
        // Accented letters are alphabetic but not ASCII
        assert_eq!(normalize("café ÄÖ"), "CAF");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("The quick brown fox, 1999!");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_shift_char_basic() {
        assert_eq!(shift_char('A', 1), 'B');
        assert_eq!(shift_char('B', -1), 'A');
    }

    #[test]
    fn test_shift_char_wraparound() {
        assert_eq!(shift_char('Z', 1), 'A');
        assert_eq!(shift_char('A', -1), 'Z');
    }

    #[test]
    fn test_shift_char_large_and_negative() {
        assert_eq!(shift_char('A', 27), 'B');
        assert_eq!(shift_char('A', -27), 'Z');
        assert_eq!(shift_char('M', 26 * 1000), 'M');
        assert_eq!(shift_char('M', -26 * 1000 - 1), 'L');
    }

    #[test]
    fn test_shift_char_extreme_offsets_do_not_overflow() {
        // i64::MAX = 26 * 354745078340568300 + 7
        assert_eq!(shift_char('A', i64::MAX), 'H');
        // i64::MIN % 26 == -8
        assert_eq!(shift_char('A', i64::MIN), 'S');
    }

    #[test]
    fn test_shift_char_passes_through_non_letters() {
        assert_eq!(shift_char('a', 3), 'a');
        assert_eq!(shift_char('!', 3), '!');
        assert_eq!(shift_char(' ', -5), ' ');
    }

    #[test]
    fn test_shift_char_inverse_for_every_letter() {
        for c in 'A'..='Z' {
            for k in [-53, -26, -1, 0, 1, 13, 25, 26, 100] {
                assert_eq!(shift_char(shift_char(c, k), -k), c);
            }
        }
    }

    #[test]
    fn test_encrypt_raw() {
        assert_eq!(encrypt_raw("HELLOWORLD", 1), "IFMMPXPSME");
        assert_eq!(encrypt_raw("", 5), "");
    }

    #[test]
    fn test_rotation() {
        assert_eq!(rotation(0), 0);
        assert_eq!(rotation(27), 1);
        assert_eq!(rotation(-1), 25);
        assert_eq!(rotation(i64::MIN), 18);
    }
}
