//! Scramble text state for the key readout.
//!
//! During a generation cycle the readout cards show a string that grows by
//! one pseudo-random character every 100 ms until it reaches 50 characters.
//! `ScrambleBuffer` owns that string: append-only within a cycle, cleared at
//! the start of the next one, hard-capped at [`SCRAMBLE_LEN`].
//!
//! The characters mean nothing; they are picked uniformly from a fixed
//! alphabet to look like key material. No cryptography is involved.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut rng = StdRng::seed_from_u64(seed);
//! let mut buffer = ScrambleBuffer::new();
//!
//! buffer.clear();
//! while buffer.push_random(&mut rng) {}
//! assert_eq!(buffer.len(), SCRAMBLE_LEN);
//! ```

use rand::Rng;

/// The 74 symbols the scramble text is drawn from: uppercase, lowercase,
/// digits, and a fixed punctuation subset.
pub const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+";

/// Number of characters accumulated over one generation cycle.
pub const SCRAMBLE_LEN: usize = 50;

/// Append-only character buffer for one generation cycle.
#[derive(Clone, Debug, Default)]
pub struct ScrambleBuffer {
    chars: String,
}

impl ScrambleBuffer {
    pub fn new() -> Self {
        Self {
            chars: String::with_capacity(SCRAMBLE_LEN),
        }
    }

    /// Reset to empty at the start of a cycle.
    pub fn clear(&mut self) {
        self.chars.clear();
    }

    /// Append one uniformly random alphabet character.
    ///
    /// Returns `false` without mutating once the buffer holds
    /// [`SCRAMBLE_LEN`] characters.
    pub fn push_random<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.is_full() {
            return false;
        }
        let idx = rng.gen_range(0..ALPHABET.len());
        self.chars.push(ALPHABET[idx] as char);
        true
    }

    /// Current contents, republished to the readout after every append.
    pub fn as_str(&self) -> &str {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.chars.len() >= SCRAMBLE_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_alphabet_is_74_symbols() {
        assert_eq!(ALPHABET.len(), 74);

        let upper = ALPHABET.iter().filter(|b| b.is_ascii_uppercase()).count();
        let lower = ALPHABET.iter().filter(|b| b.is_ascii_lowercase()).count();
        let digits = ALPHABET.iter().filter(|b| b.is_ascii_digit()).count();
        assert_eq!(upper, 26);
        assert_eq!(lower, 26);
        assert_eq!(digits, 10);
        assert_eq!(ALPHABET.len() - upper - lower - digits, 12);
    }

    #[test]
    fn test_push_grows_monotonically() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut buffer = ScrambleBuffer::new();

        for expected in 1..=SCRAMBLE_LEN {
            assert!(buffer.push_random(&mut rng));
            assert_eq!(buffer.len(), expected);
        }
    }

    #[test]
    fn test_caps_at_scramble_len() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut buffer = ScrambleBuffer::new();

        while buffer.push_random(&mut rng) {}
        assert_eq!(buffer.len(), SCRAMBLE_LEN);
        assert!(buffer.is_full());

        // Further pushes refuse and leave the contents alone
        let snapshot = buffer.as_str().to_string();
        assert!(!buffer.push_random(&mut rng));
        assert_eq!(buffer.as_str(), snapshot);
        assert_eq!(buffer.len(), SCRAMBLE_LEN);
    }

    #[test]
    fn test_every_char_from_alphabet() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut buffer = ScrambleBuffer::new();
        while buffer.push_random(&mut rng) {}

        for ch in buffer.as_str().chars() {
            assert!(
                ALPHABET.contains(&(ch as u8)),
                "unexpected scramble char: {:?}",
                ch
            );
        }
    }

    #[test]
    fn test_clear_resets_cycle() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut buffer = ScrambleBuffer::new();
        while buffer.push_random(&mut rng) {}

        buffer.clear();
        assert!(buffer.is_empty());
        assert!(!buffer.is_full());
        assert!(buffer.push_random(&mut rng));
    }

    #[test]
    fn test_seeded_sequence_is_deterministic() {
        let mut a = ScrambleBuffer::new();
        let mut b = ScrambleBuffer::new();

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        while a.push_random(&mut rng_a) {}
        while b.push_random(&mut rng_b) {}

        assert_eq!(a.as_str(), b.as_str());
    }
}
