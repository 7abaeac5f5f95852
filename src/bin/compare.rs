use patscan::{compare, instrumentation};
use std::env;

// Run both matchers on a text/pattern pair and print what each found and
// how long it took. Arguments: [text] [pattern]; defaults to the classic
// demo input when omitted.
fn main() {
    let mut args = env::args().skip(1);
    let text = args.next().unwrap_or_else(|| "ABABDABACDABABCABAB".to_string());
    let pattern = args.next().unwrap_or_else(|| "ABABCABAB".to_string());

    instrumentation::reset_counters();
    let cmp = compare(text.as_bytes(), pattern.as_bytes());
    let counters = instrumentation::counters_snapshot();

    println!("text_len={} pattern_len={}", text.len(), pattern.len());
    println!("naive:      positions={:?} time={:?}", cmp.naive, cmp.naive_time);
    println!(
        "rabin-karp: positions={:?} time={:?}",
        cmp.rabin_karp, cmp.rabin_karp_time
    );
    println!(
        "rabin-karp: windows={} hits={} collisions_rejected={} bytes_verified={}",
        counters.windows_scanned,
        counters.fingerprint_hits,
        counters.collisions_rejected,
        counters.bytes_verified
    );
    println!("agree={}", cmp.agree());
}
