use std::time::{Duration, Instant};

use crate::naive;
use crate::rabin_karp::RabinKarp;

/// Result of running both matchers over one `(text, pattern)` input.
///
/// Holds each matcher's offsets and its wall-clock duration, measured
/// independently: the clock starts immediately before each call and stops
/// immediately after it, with no timer state shared between the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub naive: Vec<usize>,
    pub rabin_karp: Vec<usize>,
    pub naive_time: Duration,
    pub rabin_karp_time: Duration,
}

impl Comparison {
    /// Whether the two matchers produced identical offsets. They always
    /// should; a disagreement is a bug in one of them, which is the point
    /// of packaging both results instead of asserting here.
    #[must_use]
    pub fn agree(&self) -> bool {
        self.naive == self.rabin_karp
    }
}

/// Run both matchers with the default Rabin-Karp parameters.
#[must_use]
pub fn compare(text: &[u8], pattern: &[u8]) -> Comparison {
    compare_with(text, pattern, &RabinKarp::default())
}

/// Run both matchers, with explicit Rabin-Karp parameters.
///
/// Sequencing only: no retries, no error handling of its own, and no
/// correctness logic beyond calling the two matchers on identical input.
#[must_use]
pub fn compare_with(text: &[u8], pattern: &[u8], rk: &RabinKarp) -> Comparison {
    let start = Instant::now();
    let naive = naive::find_all(text, pattern);
    let naive_time = start.elapsed();

    let start = Instant::now();
    let rabin_karp = rk.find_all(text, pattern);
    let rabin_karp_time = start.elapsed();

    Comparison {
        naive,
        rabin_karp,
        naive_time,
        rabin_karp_time,
    }
}
