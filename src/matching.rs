//! Matching of STR markers against the two reference sequences.
//!
//! A marker *matches* if the total number of its occurrences in both
//! reference sequences equals its observed count. A profile is of interest
//! if at least half (rounded up) of its markers match.

use crate::model::Marker;

/// Counts non-overlapping occurrences of `needle` in `haystack`.
///
/// Occurrences are found left to right; after each match scanning resumes
/// directly behind it, so adjacent repeats are all counted while overlapping
/// ones are not. An empty needle, or one longer than the haystack, has no
/// occurrences.
///
/// # Examples
/// ```
/// use strdb::matching::count_occurrences;
///
/// assert_eq!(count_occurrences("AGATAGATAGAT", "AGAT"), 3);
/// assert_eq!(count_occurrences("AAAA", "AA"), 2);
/// assert_eq!(count_occurrences("AGA", "AGAT"), 0);
/// assert_eq!(count_occurrences("AGAT", ""), 0);
/// ```
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() || needle.len() > haystack.len() {
        return 0;
    }

    // `str::matches` yields non-overlapping matches from the left
    haystack.matches(needle).count()
}

/// Returns how many of `num_markers` markers must match for a profile to be
/// of interest, i.e. half of them rounded up.
///
/// # Examples
/// ```
/// use strdb::matching::match_threshold;
///
/// assert_eq!(match_threshold(3), 2);
/// assert_eq!(match_threshold(4), 2);
/// assert_eq!(match_threshold(0), 0);
/// ```
pub fn match_threshold(num_markers: usize) -> usize {
    num_markers.div_ceil(2)
}

/// Returns whether the total occurrences of `marker` in both reference
/// sequences equal its observed count.
pub fn marker_matches(marker: &Marker, first: &str, second: &str) -> bool {
    let total = count_occurrences(first, marker.name()) + count_occurrences(second, marker.name());
    total == marker.occurrences()
}

/// Counts the markers matching the two reference sequences.
pub fn count_matching_markers(markers: &[Marker], first: &str, second: &str) -> usize {
    markers
        .iter()
        .filter(|m| marker_matches(m, first, second))
        .count()
}

/// Returns whether enough markers match to consider their owner of interest.
///
/// # Example
/// ```
/// use strdb::matching::meets_threshold;
/// use strdb::model::Marker;
///
/// // "A" occurs 3 times, "B" twice, "C" 4 times (observed 5): 2 of 3 match
/// let markers = [Marker::new("A", 3), Marker::new("B", 2), Marker::new("C", 5)];
/// assert!(meets_threshold(&markers, "AAACCBB", "CC"));
/// ```
pub fn meets_threshold(markers: &[Marker], first: &str, second: &str) -> bool {
    count_matching_markers(markers, first, second) >= match_threshold(markers.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_occurrences_adjacent() {
        assert_eq!(count_occurrences("TATCTATCTATC", "TATC"), 3);
        assert_eq!(count_occurrences("xxTATCyyTATCzz", "TATC"), 2);
    }

    #[test]
    fn test_count_occurrences_overlap_not_double_counted() {
        // "AAA" could be seen twice in "AAAA" with overlap; only once without
        assert_eq!(count_occurrences("AAAA", "AAA"), 1);
        assert_eq!(count_occurrences("ABABAB", "ABA"), 1);
    }

    #[test]
    fn test_count_occurrences_none() {
        assert_eq!(count_occurrences("", "A"), 0);
        assert_eq!(count_occurrences("GGGG", "A"), 0);
        assert_eq!(count_occurrences("", ""), 0);
    }

    #[test]
    fn test_match_threshold_rounds_up() {
        assert_eq!(match_threshold(1), 1);
        assert_eq!(match_threshold(2), 1);
        assert_eq!(match_threshold(5), 3);
        assert_eq!(match_threshold(6), 3);
    }

    #[test]
    fn test_marker_matches_sums_both_sequences() {
        let marker = Marker::new("AGAT", 3);
        assert!(marker_matches(&marker, "AGATAGAT", "CCAGAT"));
        assert!(!marker_matches(&marker, "AGATAGAT", "CC"));
        // Exact equality, more occurrences do not match either
        assert!(!marker_matches(&marker, "AGATAGAT", "AGATAGAT"));
    }

    #[test]
    fn test_meets_threshold_even_count() {
        let markers = [Marker::new("A", 3), Marker::new("B", 9)];
        assert!(meets_threshold(&markers, "AAB", "A"));
        assert!(!meets_threshold(&markers, "AB", ""));
    }

    #[test]
    fn test_meets_threshold_without_markers() {
        assert!(meets_threshold(&[], "ACGT", "ACGT"));
    }
}
