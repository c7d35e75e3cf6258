//! Pattern scanning, classification and rewriting.

mod classifier;
mod rewriter;
mod scanner;

use crate::errors::{PatternError, nested_capture};
use crate::table::{GroupDefinition, GroupTable};

pub use classifier::{GroupKind, classify_group};
pub use rewriter::rewrite_pattern;
pub use scanner::scan_groups;

/// The result of analysing a pattern: the engine-ready rewritten text and
/// the capturing groups it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedPattern {
    rewritten: String,
    groups: GroupTable,
}

impl AnalyzedPattern {
    /// Pattern text with every name annotation removed.
    #[must_use]
    pub fn rewritten(&self) -> &str {
        &self.rewritten
    }

    /// Capturing groups in engine numbering order.
    #[must_use]
    pub const fn groups(&self) -> &GroupTable {
        &self.groups
    }

    /// Split the analysis into its rewritten pattern and group table.
    #[must_use]
    pub fn into_parts(self) -> (String, GroupTable) {
        (self.rewritten, self.groups)
    }

    /// Render a listing of the groups and the rewritten pattern for
    /// diagnostics.
    ///
    /// # Examples
    /// ```
    /// use better_regex_patterns::analyze;
    ///
    /// let analysis = analyze("(?<word>a+)(b)").expect("pattern is well formed");
    /// assert_eq!(
    ///     analysis.document(),
    ///     "Group 1: Index 0 Contains \"(?<word>a+)\" isNamed: true Name: 'word'\n\
    ///      Group 2: Index 1 Contains \"(b)\" isNamed: false Name: ''\n\
    ///      Simplified to (a+)(b)"
    /// );
    /// ```
    #[must_use]
    pub fn document(&self) -> String {
        let mut lines: Vec<String> = self
            .groups
            .iter()
            .enumerate()
            .map(|(ordinal, group)| {
                format!(
                    "Group {}: Index {} Contains \"{}\" isNamed: {} Name: '{}'",
                    ordinal + 1,
                    group.index(),
                    group.content(),
                    group.is_named(),
                    group.name().unwrap_or_default(),
                )
            })
            .collect();
        lines.push(format!("Simplified to {}", self.rewritten));
        lines.join("\n")
    }
}

/// Text of `pattern` from `start` onwards, empty if `start` is not a
/// character boundary.
fn tail(pattern: &str, start: usize) -> &str {
    pattern.get(start..).unwrap_or_default()
}

/// Discover the capturing groups of `pattern` and strip their names.
///
/// Groups are numbered left to right, skipping non-capturing and lookaround
/// groups, so the table lines up with the engine's numbering of the
/// rewritten pattern.
///
/// # Errors
/// - [`PatternError::UnbalancedParenthesis`] when parentheses do not pair up.
/// - [`PatternError::NestedCapture`] when a capturing group sits inside
///   another group. Nested non-capturing and lookaround groups are accepted.
///
/// # Examples
/// ```
/// use better_regex_patterns::analyze;
///
/// let analysis = analyze(r"(?<year>\d{4})-(?:x)(\d{2})").expect("pattern is well formed");
/// assert_eq!(analysis.rewritten(), r"(\d{4})-(?:x)(\d{2})");
/// assert_eq!(analysis.groups().len(), 2);
/// assert_eq!(analysis.groups().position("year"), Some(0));
/// ```
pub fn analyze(pattern: &str) -> Result<AnalyzedPattern, PatternError> {
    let scanned = scanner::scan_pattern(pattern)?;
    let mut groups = Vec::with_capacity(scanned.len());
    let mut annotations = Vec::new();

    for group in scanned {
        if let Some(&inner) = group
            .inner
            .iter()
            .find(|&&inner| classify_group(tail(pattern, inner)).is_capturing())
        {
            return Err(nested_capture(inner));
        }

        let content = pattern.get(group.span.range()).unwrap_or_default();
        let name = match classify_group(content) {
            GroupKind::NonCapturing | GroupKind::Lookaround => continue,
            GroupKind::Capturing => None,
            GroupKind::Named {
                name,
                annotation_len,
            } => {
                let start = group.span.start + 1;
                annotations.push(start..start + annotation_len);
                Some(name)
            }
        };
        groups.push(GroupDefinition::new(
            groups.len(),
            content.to_owned(),
            name,
            group.span,
        ));
    }

    Ok(AnalyzedPattern {
        rewritten: rewrite_pattern(pattern, &annotations),
        groups: GroupTable::new(groups),
    })
}
