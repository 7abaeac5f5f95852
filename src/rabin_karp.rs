use crate::{Matcher, SearchError, instrumentation};

/// Default polynomial radix, suited to single-byte alphabets.
pub const DEFAULT_BASE: u64 = 256;

/// Default fingerprint modulus. Deliberately small: with only 101 possible
/// residues, collisions are frequent enough to exercise the verification
/// path on ordinary input. Raise it to trade verification work for cheaper
/// candidate filtering.
pub const DEFAULT_MODULUS: u64 = 101;

/// Rabin-Karp matcher: candidate windows are filtered by a rolling
/// polynomial fingerprint and every fingerprint hit is verified byte by
/// byte before it is reported.
///
/// A window's fingerprint is `Σ window[k] · base^(m-1-k) mod modulus`,
/// updated in O(1) as the window slides. Equal fingerprints do not imply
/// equal bytes, so verification is mandatory, never an optimization to
/// skip; with the small default modulus the matcher degrades gracefully
/// toward naive scanning rather than ever reporting a false match.
///
/// Expected O(n+m) when collisions are rare, O(n·m) worst case. Holds no
/// state across calls; two invocations with identical inputs return
/// identical offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RabinKarp {
    base: u64,
    modulus: u64,
}

impl Default for RabinKarp {
    fn default() -> Self {
        RabinKarp {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl RabinKarp {
    /// Construct a matcher with explicit parameters.
    ///
    /// Fails with [`SearchError::InvalidModulus`] when `modulus <= 1`:
    /// residues modulo 0 are undefined and modulo 1 every fingerprint is 0.
    /// The base is a pure tuning knob; a degenerate base weakens the filter
    /// but never correctness, since verification still rejects mismatches.
    pub fn new(base: u64, modulus: u64) -> Result<Self, SearchError> {
        if modulus <= 1 {
            return Err(SearchError::InvalidModulus(modulus));
        }
        Ok(RabinKarp { base, modulus })
    }

    /// The polynomial fingerprint of `window` under this matcher's
    /// parameters. Exposed so callers can reason about collisions directly,
    /// e.g. to demonstrate that two distinct windows share a fingerprint.
    #[must_use]
    pub fn fingerprint(&self, window: &[u8]) -> u64 {
        let base = u128::from(self.base);
        let q = u128::from(self.modulus);
        let mut hash = 0u128;
        // Reduce after every multiply-add; intermediates stay below q·base + 255.
        for &b in window {
            hash = (hash * base + u128::from(b)) % q;
        }
        hash as u64
    }

    /// Return the start offsets of every occurrence of `pattern` in `text`,
    /// strictly increasing. Same policy as the naive matcher: an empty
    /// pattern matches nowhere, and a pattern longer than the text matches
    /// nowhere.
    #[must_use]
    pub fn find_all(&self, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        let n = text.len();
        let m = pattern.len();
        if m == 0 || m > n {
            return Vec::new();
        }

        let base = u128::from(self.base);
        let q = u128::from(self.modulus);

        let pattern_hash = u128::from(self.fingerprint(pattern));
        let mut window_hash = u128::from(self.fingerprint(&text[..m]));

        // base^(m-1) mod q, the outgoing byte's positional weight.
        let mut high_order_factor = 1u128;
        for _ in 0..m - 1 {
            high_order_factor = high_order_factor * base % q;
        }

        let mut positions = Vec::new();
        instrumentation::add_windows_scanned((n - m + 1) as u64);

        for i in 0..=n - m {
            if window_hash == pattern_hash {
                instrumentation::add_fingerprint_hit();
                if verify(&text[i..i + m], pattern) {
                    positions.push(i);
                } else {
                    instrumentation::add_collision_rejected();
                }
            }
            if i < n - m {
                // Drop text[i], shift, append text[i + m]. Adding q before
                // the subtraction keeps the unsigned intermediate from
                // underflowing; both operands are already reduced below q.
                let outgoing = u128::from(text[i]) * high_order_factor % q;
                window_hash =
                    ((window_hash + q - outgoing) * base + u128::from(text[i + m])) % q;
            }
        }

        positions
    }
}

/// Byte-by-byte check of a fingerprint hit. Counts the bytes actually
/// compared, so the instrumentation reflects how far each collision got
/// before diverging.
fn verify(window: &[u8], pattern: &[u8]) -> bool {
    let mut compared = 0u64;
    let equal = window.iter().zip(pattern).all(|(a, b)| {
        compared += 1;
        a == b
    });
    instrumentation::add_bytes_verified(compared);
    equal
}

/// Search with the default parameters (base 256, modulus 101).
#[must_use]
pub fn find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    RabinKarp::default().find_all(text, pattern)
}

impl Matcher for RabinKarp {
    fn name(&self) -> &'static str {
        "rabin-karp"
    }

    fn find_all(&self, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        RabinKarp::find_all(self, text, pattern)
    }
}
