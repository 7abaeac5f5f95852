//! Exact substring search over byte sequences.
//!
//! Two independent matchers share one contract, `(text, pattern)` to an
//! ordered list of match start offsets:
//!
//! - [`naive::find_all`] compares every candidate window against the pattern
//!   byte by byte. It is the correctness baseline.
//! - [`rabin_karp::find_all`] filters candidate windows with a rolling
//!   polynomial fingerprint and verifies every fingerprint hit exactly, so
//!   hash collisions can never produce a false match.
//!
//! Both are pure functions: no shared state, no mutation of the inputs, and
//! identical results for identical inputs. [`compare::compare`] runs the two
//! over the same input and reports each matcher's offsets and wall-clock
//! duration.
//!
//! Matching is raw byte equality. Callers holding `&str` pass `.as_bytes()`
//! and get byte offsets back, which for multi-byte UTF-8 are not character
//! indices.

pub mod compare;
pub mod fixture;
pub mod instrumentation;
pub mod naive;
pub mod rabin_karp;

pub use compare::{Comparison, compare, compare_with};
pub use naive::Naive;
pub use rabin_karp::{DEFAULT_BASE, DEFAULT_MODULUS, RabinKarp};

use thiserror::Error;

/// Errors raised when constructing a matcher with unusable parameters.
///
/// Searching itself is infallible: parameters are validated once at
/// construction and the matchers operate on plain in-memory slices with no
/// I/O, so there is nothing left to fail at search time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The rolling-hash modulus must be at least 2; residues modulo 0 or 1
    /// are undefined or constant and would make every window a candidate.
    #[error("rolling-hash modulus must be greater than 1, got {0}")]
    InvalidModulus(u64),
}

/// Trait describing an exact substring matcher.
///
/// Both implementations go through this seam so the parameterized tests and
/// the comparison harness can run any matcher with one body.
pub trait Matcher {
    /// Short human-readable name, used in test diagnostics and reports.
    fn name(&self) -> &'static str;

    /// Return the start offsets of every occurrence of `pattern` in `text`,
    /// strictly increasing. An empty pattern matches nowhere; a pattern
    /// longer than the text matches nowhere.
    fn find_all(&self, text: &[u8], pattern: &[u8]) -> Vec<usize>;
}
