use ahash::AHashMap;
use patscan::{RabinKarp, fixture, instrumentation};
use smallvec::SmallVec;
use std::time::Instant;

const PATTERN: &[u8] = b"NEEDLE";

// Distinct window contents per fingerprint, so the sweep can show collision
// pressure falling as the modulus grows.
fn fingerprint_census(text: &[u8], m: usize, rk: &RabinKarp) -> (usize, usize) {
    let mut table: AHashMap<u64, SmallVec<[usize; 4]>> = AHashMap::new();
    for start in 0..=text.len() - m {
        table
            .entry(rk.fingerprint(&text[start..start + m]))
            .or_default()
            .push(start);
    }

    let mut colliding = 0usize;
    for starts in table.values() {
        let first = &text[starts[0]..starts[0] + m];
        if starts.iter().any(|&s| &text[s..s + m] != first) {
            colliding += 1;
        }
    }
    (table.len(), colliding)
}

fn run_case(modulus: u64, text: &[u8]) {
    let rk = RabinKarp::new(256, modulus).expect("sweep moduli are all > 1");

    instrumentation::reset_counters();
    let t0 = Instant::now();
    let positions = rk.find_all(text, PATTERN);
    let dur = t0.elapsed();
    let c = instrumentation::counters_snapshot();
    let (fingerprints, colliding) = fingerprint_census(text, PATTERN.len(), &rk);

    println!(
        "modulus={} search_time={:?} matches={} hits={} collisions_rejected={} bytes_verified={} fingerprints={} colliding_fingerprints={}",
        modulus,
        dur,
        positions.len(),
        c.fingerprint_hits,
        c.collisions_rejected,
        c.bytes_verified,
        fingerprints,
        colliding
    );
}

fn main() {
    let (text, planted) = fixture::plant_pattern(42, 64 * 1024, PATTERN, 25);
    println!(
        "corpus: {} bytes, {} planted copies of {:?}",
        text.len(),
        planted.len(),
        String::from_utf8_lossy(PATTERN)
    );

    for &modulus in &[101u64, 499, 7919, 104_729, 1_000_003] {
        run_case(modulus, &text);
    }
}
