//! Strip name annotations from a pattern.

use std::ops::Range;

/// Remove the given annotation byte ranges from `pattern`.
///
/// Ranges must be sorted, non-overlapping, and fall on character boundaries;
/// the analyzer derives them from classified group openings, which are
/// always ASCII. Every byte outside the ranges is copied unchanged.
///
/// # Examples
/// ```
/// use better_regex_patterns::rewrite_pattern;
///
/// let pattern = r"(?<year>\d{4})-(\d{2})";
/// assert_eq!(rewrite_pattern(pattern, &[1..8]), r"(\d{4})-(\d{2})");
/// ```
#[must_use]
pub fn rewrite_pattern(pattern: &str, annotations: &[Range<usize>]) -> String {
    let removed: usize = annotations.iter().map(ExactSizeIterator::len).sum();
    let mut rewritten = String::with_capacity(pattern.len().saturating_sub(removed));
    let mut copied = 0;

    for annotation in annotations {
        if let Some(kept) = pattern.get(copied..annotation.start) {
            rewritten.push_str(kept);
        }
        copied = copied.max(annotation.end);
    }
    if let Some(rest) = pattern.get(copied..) {
        rewritten.push_str(rest);
    }
    rewritten
}
