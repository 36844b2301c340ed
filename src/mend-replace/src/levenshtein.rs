//! Levenshtein edit distance.
//!
//! The anchor-based replacers score how close an interior line of a
//! candidate block is to the corresponding search line. Inputs are
//! individual trimmed lines, which keeps the O(m*n) cost bounded for
//! interactively sized edits.

/// Compute the minimum number of single-character insertions, deletions,
/// and substitutions (unit cost each) required to transform `a` into `b`.
///
/// Either input being empty yields `max(|a|, |b|)`. Runs the standard
/// dynamic-programming recurrence over chars, keeping two rows of the
/// `(|a|+1) x (|b|+1)` table.
pub fn distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 || n == 0 {
        return m.max(n);
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(distance("hello", "hello"), 0);
        assert_eq!(distance("", ""), 0);
    }

    #[test]
    fn test_empty_input_yields_other_length() {
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abc", ""), 3);
    }

    #[test]
    fn test_single_edits() {
        assert_eq!(distance("kitten", "sitten"), 1); // substitution
        assert_eq!(distance("cat", "cats"), 1); // insertion
        assert_eq!(distance("cats", "cat"), 1); // deletion
    }

    #[test]
    fn test_classic_kitten_sitting() {
        assert_eq!(distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_unicode_counts_chars_not_bytes() {
        assert_eq!(distance("héllo", "hello"), 1);
    }
}
