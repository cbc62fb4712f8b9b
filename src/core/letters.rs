//! Letter index and bitmask helpers
//!
//! Letters `a..=z` map to indices `0..26` and to single bits of a 26-bit mask.
//! Anything else is not a letter as far as the dictionary is concerned.

/// Number of letters in the alphabet the engine understands
pub const ALPHABET_LEN: usize = 26;

/// Index of a lowercase letter (`a` = 0), or `None` for any other byte
#[inline]
#[must_use]
pub const fn letter_to_idx(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

/// Letter for an index, or `*` for an index outside the alphabet
#[inline]
#[must_use]
pub const fn idx_to_letter(idx: usize) -> char {
    if idx < ALPHABET_LEN {
        (b'a' + idx as u8) as char
    } else {
        '*'
    }
}

/// Bit for a lowercase letter, or 0 for any other byte
///
/// A zero result doubles as the end-of-word test while scanning text.
#[inline]
#[must_use]
pub const fn letter_to_bit(letter: u8) -> u32 {
    match letter_to_idx(letter) {
        Some(idx) => 1 << idx,
        None => 0,
    }
}

/// Render a letter mask as its letters in alphabetical order
///
/// # Examples
/// ```
/// use letterbox_solver::core::letters::{letter_to_bit, letters_to_string};
///
/// let mask = letter_to_bit(b'z') | letter_to_bit(b'a') | letter_to_bit(b'm');
/// assert_eq!(letters_to_string(mask), "amz");
/// ```
#[must_use]
pub fn letters_to_string(mask: u32) -> String {
    (0..ALPHABET_LEN)
        .filter(|&idx| mask & (1 << idx) != 0)
        .map(idx_to_letter)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_indices() {
        assert_eq!(letter_to_idx(b'a'), Some(0));
        assert_eq!(letter_to_idx(b'n'), Some(13));
        assert_eq!(letter_to_idx(b'z'), Some(25));
        assert_eq!(letter_to_idx(b'A'), None);
        assert_eq!(letter_to_idx(b'\n'), None);
    }

    #[test]
    fn letter_bits() {
        assert_eq!(letter_to_bit(b'a'), 1);
        assert_eq!(letter_to_bit(b'n'), 0x2000);
        assert_eq!(letter_to_bit(b'z'), 0x200_0000);
        assert_eq!(letter_to_bit(b'0'), 0);
    }

    #[test]
    fn index_to_letter() {
        assert_eq!(idx_to_letter(0), 'a');
        assert_eq!(idx_to_letter(13), 'n');
        assert_eq!(idx_to_letter(25), 'z');
        assert_eq!(idx_to_letter(26), '*');
    }

    #[test]
    fn mask_rendering() {
        assert_eq!(letters_to_string(0), "");
        assert_eq!(letters_to_string((1 << ALPHABET_LEN) - 1).len(), 26);
    }
}
