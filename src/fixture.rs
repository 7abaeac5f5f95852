//! Seeded corpus generation for tests, benchmarks, and the sweep binary.
//!
//! Everything here is deterministic in the seed, so failures reproduce
//! exactly. Small alphabets are the interesting case: they force repeated
//! windows and, under a small modulus, fingerprint collisions.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Filler alphabet used by [`plant_pattern`]. Lowercase only, so an
/// uppercase or punctuated pattern cannot occur in the filler by chance.
pub const FILLER_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Generate `len` bytes drawn uniformly from `alphabet`.
#[must_use]
pub fn generate_text(seed: u64, len: usize, alphabet: &[u8]) -> Vec<u8> {
    assert!(!alphabet.is_empty(), "alphabet must not be empty");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

/// Generate `len` bytes of filler and overwrite `pattern` at up to `copies`
/// random non-overlapping offsets. Returns the text and the sorted planted
/// offsets.
///
/// Every returned offset is an occurrence of `pattern`. The converse is not
/// guaranteed in general: if `pattern` is itself drawn from the filler
/// alphabet, the filler may contain additional chance occurrences, so
/// callers wanting an exact expected MatchSet should pick a pattern outside
/// [`FILLER_ALPHABET`] or treat the naive matcher as the oracle.
#[must_use]
pub fn plant_pattern(
    seed: u64,
    len: usize,
    pattern: &[u8],
    copies: usize,
) -> (Vec<u8>, Vec<usize>) {
    let m = pattern.len();
    assert!(m > 0 && m <= len, "pattern must fit in the text");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut text: Vec<u8> = (0..len)
        .map(|_| FILLER_ALPHABET[rng.gen_range(0..FILLER_ALPHABET.len())])
        .collect();

    // Rejection-sample non-overlapping sites; give up quietly if the text
    // is too crowded to place all requested copies.
    let mut starts: Vec<usize> = Vec::with_capacity(copies);
    let mut attempts = 0usize;
    while starts.len() < copies && attempts < copies.saturating_mul(50) + 50 {
        attempts += 1;
        let s = rng.gen_range(0..=len - m);
        if starts.iter().all(|&t| s + m <= t || t + m <= s) {
            starts.push(s);
        }
    }
    starts.sort_unstable();

    for &s in &starts {
        text[s..s + m].copy_from_slice(pattern);
    }
    (text, starts)
}
