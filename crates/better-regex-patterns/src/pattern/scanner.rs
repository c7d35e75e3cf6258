//! Pattern scanner locating top-level parenthesised spans.

use crate::errors::{PatternError, unclosed_group, unmatched_close};
use crate::table::GroupSpan;

/// A top-level span together with the groups opened inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScannedGroup {
    pub span: GroupSpan,
    pub inner: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    Escaped,
    InCharacterClass {
        depth: usize,
        literal_close_at: Option<usize>,
    },
    EscapedInClass {
        depth: usize,
    },
}

/// Offset at which a `]` is still literal after a class opened at `open`.
fn literal_close_position(bytes: &[u8], open: usize) -> usize {
    if bytes.get(open + 1) == Some(&b'^') {
        open + 2
    } else {
        open + 1
    }
}

pub(crate) fn scan_pattern(pattern: &str) -> Result<Vec<ScannedGroup>, PatternError> {
    let bytes = pattern.as_bytes();
    let mut groups = Vec::new();
    let mut open: Vec<usize> = Vec::new();
    let mut inner = Vec::new();
    let mut state = State::Normal;
    let mut pos = 0;

    while let Some(&b) = bytes.get(pos) {
        state = match state {
            State::Escaped => State::Normal,
            State::EscapedInClass { depth } => State::InCharacterClass {
                depth,
                literal_close_at: None,
            },
            State::InCharacterClass {
                depth,
                literal_close_at,
            } => match b {
                b'\\' => State::EscapedInClass { depth },
                b'[' => State::InCharacterClass {
                    depth: depth + 1,
                    literal_close_at: Some(literal_close_position(bytes, pos)),
                },
                b']' if literal_close_at == Some(pos) => State::InCharacterClass {
                    depth,
                    literal_close_at: None,
                },
                b']' if depth == 1 => State::Normal,
                b']' => State::InCharacterClass {
                    depth: depth - 1,
                    literal_close_at: None,
                },
                _ => State::InCharacterClass {
                    depth,
                    literal_close_at,
                },
            },
            State::Normal => match b {
                b'\\' => State::Escaped,
                b'[' => State::InCharacterClass {
                    depth: 1,
                    literal_close_at: Some(literal_close_position(bytes, pos)),
                },
                b'(' => {
                    if !open.is_empty() {
                        inner.push(pos);
                    }
                    open.push(pos);
                    State::Normal
                }
                b')' => {
                    let start = open.pop().ok_or_else(|| unmatched_close(pos))?;
                    if open.is_empty() {
                        groups.push(ScannedGroup {
                            span: GroupSpan {
                                start,
                                end: pos + 1,
                            },
                            inner: std::mem::take(&mut inner),
                        });
                    }
                    State::Normal
                }
                _ => State::Normal,
            },
        };
        pos += 1;
    }

    if let Some(&start) = open.last() {
        return Err(unclosed_group(start));
    }
    Ok(groups)
}

/// Locate every top-level parenthesised span in `pattern`.
///
/// Escaped parentheses and parentheses inside character classes are
/// literal. Groups nested inside a span are not reported separately.
///
/// # Errors
/// Returns [`PatternError::UnbalancedParenthesis`] when a group is left open
/// or a closing parenthesis has no partner.
///
/// # Examples
/// ```
/// use better_regex_patterns::scan_groups;
///
/// let spans = scan_groups(r"\(literal\)(group)[(]").expect("balanced pattern");
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].range(), 11..18);
/// ```
pub fn scan_groups(pattern: &str) -> Result<Vec<GroupSpan>, PatternError> {
    Ok(scan_pattern(pattern)?
        .into_iter()
        .map(|group| group.span)
        .collect())
}
