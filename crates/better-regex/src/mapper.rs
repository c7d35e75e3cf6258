//! Align engine capture ranges with a pattern's group table.

use std::ops::Range;

use better_regex_patterns::GroupTable;

use crate::error::RegexError;
use crate::results::{RegexResult, ResultsView};

/// Fail loudly when the table and the engine disagree on group count.
pub(crate) fn check_alignment(table: usize, engine: usize) -> Result<(), RegexError> {
    if table == engine {
        return Ok(());
    }
    log::error!(
        "group table has {table} capturing groups but the engine reports {engine}; \
         refusing to map captures"
    );
    Err(RegexError::Alignment { table, engine })
}

/// Slice the text an engine claims for `group`; a range that does not fit
/// the subject is a defect, never an absent capture.
fn capture_text(subject: &str, group: usize, range: Range<usize>) -> Result<String, RegexError> {
    if let Some(text) = subject.get(range.clone()) {
        return Ok(text.to_owned());
    }
    log::error!(
        "engine reported capture range {range:?} for group {group} outside a subject of {} bytes",
        subject.len()
    );
    Err(RegexError::InvalidCaptureRange {
        group,
        range,
        subject_len: subject.len(),
    })
}

/// Turn one match's capture ranges into a [`ResultsView`].
///
/// `ranges[0]` is the whole match and is skipped; `ranges[i]` for `i >= 1`
/// is paired with `groups[i - 1]`. Optional groups that did not participate
/// keep their slot with no text, so positions never shift.
///
/// # Errors
/// - [`RegexError::Alignment`] when the number of capture ranges (excluding
///   the whole match) differs from the table length. Results are never
///   truncated or padded.
/// - [`RegexError::InvalidCaptureRange`] when a reported range is out of
///   bounds or splits a character.
///
/// # Examples
/// ```
/// use better_regex::map_match;
/// use better_regex_patterns::analyze;
///
/// let analysis = analyze(r"(?<num>\d+)-(\w+)").expect("pattern is well formed");
/// let ranges = vec![Some(0..5), Some(0..2), Some(3..5)];
/// let view = map_match("12-ab", &ranges, analysis.groups()).expect("counts agree");
/// assert_eq!(view.get("num"), Some("12"));
/// assert_eq!(view.get(1), Some("ab"));
///
/// assert!(map_match("12-ab", &ranges[..2], analysis.groups()).is_err());
/// ```
pub fn map_match(
    subject: &str,
    ranges: &[Option<Range<usize>>],
    groups: &GroupTable,
) -> Result<ResultsView, RegexError> {
    check_alignment(groups.len(), ranges.len().saturating_sub(1))?;

    let results = ranges
        .iter()
        .skip(1)
        .zip(groups)
        .enumerate()
        .map(|(position, (range, group))| -> Result<RegexResult, RegexError> {
            let text = range
                .clone()
                .map(|range| capture_text(subject, position + 1, range))
                .transpose()?;
            Ok(RegexResult::new(
                position + 1,
                text,
                group.name().map(str::to_owned),
            ))
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::trace!("mapped {} captures from match {:?}", results.len(), ranges.first());
    Ok(ResultsView::new(results))
}
