use crate::Matcher;

/// Brute-force matcher: every candidate window is compared against the
/// pattern directly.
///
/// O((n−m+1)·m) worst case, but with no setup cost at all, which makes it
/// the baseline the hashed matcher is checked and timed against.
#[derive(Debug, Clone, Copy, Default)]
pub struct Naive;

/// Return the start offsets of every occurrence of `pattern` in `text`.
///
/// Offsets are strictly increasing and every reported offset `i` satisfies
/// `text[i..i + pattern.len()] == pattern`. An empty pattern matches
/// nowhere, and a pattern longer than the text matches nowhere.
#[must_use]
pub fn find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }

    // Slice equality short-circuits on the first mismatching byte.
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(i, _)| i)
        .collect()
}

impl Matcher for Naive {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn find_all(&self, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        find_all(text, pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_every_occurrence() {
        assert_eq!(find_all(b"abcabcabc", b"abc"), vec![0, 3, 6]);
        assert_eq!(find_all(b"abcabcabc", b"cab"), vec![2, 5]);
    }

    #[test]
    fn overlapping_occurrences_are_all_reported() {
        assert_eq!(find_all(b"AAAA", b"AA"), vec![0, 1, 2]);
        assert_eq!(find_all(b"aaa", b"aaa"), vec![0]);
    }

    #[test]
    fn empty_pattern_matches_nowhere() {
        assert_eq!(find_all(b"abc", b""), Vec::<usize>::new());
        assert_eq!(find_all(b"", b""), Vec::<usize>::new());
    }

    #[test]
    fn pattern_longer_than_text_matches_nowhere() {
        assert_eq!(find_all(b"ab", b"abc"), Vec::<usize>::new());
        assert_eq!(find_all(b"", b"a"), Vec::<usize>::new());
    }

    #[test]
    fn matches_at_both_ends() {
        assert_eq!(find_all(b"abcxxabc", b"abc"), vec![0, 5]);
    }
}
