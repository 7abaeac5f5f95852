use patscan::fixture::{generate_text, plant_pattern};
use patscan::{Matcher, Naive, RabinKarp, SearchError, compare, compare_with, instrumentation};

const TEXT: &str = "ABABDABACDABABCABAB";

// Generic helpers: accept any concrete implementation of Matcher.
fn run_fixed_case(matcher: &dyn Matcher, text: &str, pattern: &str, expected: &[usize]) {
    assert_eq!(
        matcher.find_all(text.as_bytes(), pattern.as_bytes()),
        expected,
        "{}: text={text:?} pattern={pattern:?}",
        matcher.name()
    );
}

fn for_each_matcher(check: impl Fn(&dyn Matcher)) {
    check(&Naive);
    check(&RabinKarp::default());
}

#[test]
fn no_match_found() {
    for_each_matcher(|m| run_fixed_case(m, TEXT, "XYZ", &[]));
}

#[test]
fn exact_single_match() {
    // 19-byte text, 9-byte pattern: the lone occurrence starts at offset 10.
    for_each_matcher(|m| run_fixed_case(m, TEXT, "ABABCABAB", &[10]));
}

#[test]
fn overlapping_matches() {
    for_each_matcher(|m| run_fixed_case(m, "AAAA", "AA", &[0, 1, 2]));
}

#[test]
fn empty_pattern_matches_nowhere() {
    for_each_matcher(|m| {
        run_fixed_case(m, TEXT, "", &[]);
        run_fixed_case(m, "", "", &[]);
    });
}

#[test]
fn pattern_longer_than_text_matches_nowhere() {
    for_each_matcher(|m| {
        run_fixed_case(m, "AB", "ABC", &[]);
        run_fixed_case(m, "", "A", &[]);
    });
}

#[test]
fn whole_text_is_a_match() {
    for_each_matcher(|m| run_fixed_case(m, TEXT, TEXT, &[0]));
}

#[test]
fn matches_at_both_ends() {
    for_each_matcher(|m| run_fixed_case(m, "abcxxabc", "abc", &[0, 5]));
}

fn run_equivalence(seed: u64, len: usize, alphabet: &[u8], pattern_len: usize) {
    let text = generate_text(seed, len, alphabet);
    let pattern = generate_text(seed.wrapping_add(0x9e3779b97f4a7c15), pattern_len, alphabet);
    assert_eq!(
        Naive.find_all(&text, &pattern),
        RabinKarp::default().find_all(&text, &pattern),
        "seed={seed} alphabet={:?} pattern={:?}",
        String::from_utf8_lossy(alphabet),
        String::from_utf8_lossy(&pattern)
    );
}

#[test]
fn matchers_are_equivalent_on_random_corpora() {
    for seed in 0..20 {
        // Binary and single-letter alphabets maximize repeats and, under
        // modulus 101, fingerprint collisions.
        run_equivalence(seed, 2000, b"ab", 3);
        run_equivalence(seed, 2000, b"abcdefgh", 4);
        run_equivalence(seed, 500, b"a", 5);
    }
}

#[test]
fn matchers_are_equivalent_under_alternate_parameters() {
    let rk = RabinKarp::new(31, 1_000_003).unwrap();
    for seed in 0..10 {
        let text = generate_text(seed, 3000, b"abc");
        let pattern = generate_text(seed + 1000, 4, b"abc");
        assert_eq!(Naive.find_all(&text, &pattern), rk.find_all(&text, &pattern));
    }
}

#[test]
fn every_reported_offset_is_an_occurrence() {
    let (text, _) = plant_pattern(99, 8192, b"NEEDLE", 12);
    for_each_matcher(|m| {
        let positions = m.find_all(&text, b"NEEDLE");
        assert!(!positions.is_empty(), "{}", m.name());
        for &i in &positions {
            assert_eq!(&text[i..i + 6], b"NEEDLE", "{} offset {i}", m.name());
        }
    });
}

#[test]
fn every_unreported_offset_is_a_mismatch() {
    let text = generate_text(5, 1500, b"ab");
    let pattern = generate_text(6, 3, b"ab");
    for_each_matcher(|m| {
        let positions = m.find_all(&text, &pattern);
        for i in 0..=text.len() - pattern.len() {
            if positions.binary_search(&i).is_err() {
                assert_ne!(&text[i..i + pattern.len()], &pattern[..], "{}", m.name());
            }
        }
    });
}

#[test]
fn offsets_are_strictly_increasing() {
    let text = generate_text(13, 4000, b"ab");
    let pattern = b"aba";
    for_each_matcher(|m| {
        let positions = m.find_all(&text, pattern);
        for pair in positions.windows(2) {
            assert!(pair[0] < pair[1], "{}", m.name());
        }
    });
}

#[test]
fn planted_occurrences_are_all_found() {
    let (text, planted) = plant_pattern(1234, 16 * 1024, b"NEEDLE", 30);
    for_each_matcher(|m| {
        let positions = m.find_all(&text, b"NEEDLE");
        assert_eq!(positions, planted, "{}", m.name());
    });
}

#[test]
fn repeated_invocation_is_idempotent() {
    let (text, _) = plant_pattern(77, 4096, b"NEEDLE", 8);
    for_each_matcher(|m| {
        let first = m.find_all(&text, b"NEEDLE");
        let second = m.find_all(&text, b"NEEDLE");
        assert_eq!(first, second, "{}", m.name());
    });
}

#[test]
fn colliding_fingerprint_is_rejected_by_verification() {
    // "ab" and "c[" share a fingerprint under base 256, modulus 101:
    // (97·256 + 98) mod 101 == (99·256 + 91) mod 101 == 84.
    let rk = RabinKarp::default();
    assert_eq!(rk.fingerprint(b"ab"), rk.fingerprint(b"c["));

    instrumentation::reset_counters();
    assert_eq!(rk.find_all(b"xxc[xx", b"ab"), Vec::<usize>::new());
    let counters = instrumentation::counters_snapshot();
    assert!(
        counters.collisions_rejected >= 1,
        "verification should have rejected the colliding window"
    );
    assert_eq!(counters.fingerprint_hits, counters.collisions_rejected);
}

#[test]
fn invalid_modulus_is_reported() {
    assert_eq!(RabinKarp::new(256, 0), Err(SearchError::InvalidModulus(0)));
    assert_eq!(RabinKarp::new(256, 1), Err(SearchError::InvalidModulus(1)));
}

#[test]
fn harness_reports_agreeing_results() {
    let (text, planted) = plant_pattern(2024, 32 * 1024, b"NEEDLE", 16);
    let cmp = compare(&text, b"NEEDLE");
    assert!(cmp.agree());
    assert_eq!(cmp.naive, planted);

    let rk = RabinKarp::new(256, 7919).unwrap();
    let cmp = compare_with(&text, b"NEEDLE", &rk);
    assert!(cmp.agree());
    assert_eq!(cmp.rabin_karp, planted);
}
