//! Group definitions produced by pattern analysis.

use std::ops::Range;

/// Byte range of a parenthesised span in the original pattern, parentheses
/// included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GroupSpan {
    /// Offset of the opening `(`.
    pub start: usize,
    /// Offset one past the closing `)`.
    pub end: usize,
}

impl GroupSpan {
    /// Return the span as a byte range suitable for slicing the pattern.
    #[must_use]
    pub const fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

/// A capturing group discovered in a pattern.
///
/// Non-capturing and lookaround groups never produce a definition, so
/// `index` follows the numbering the regex engine assigns to capturing
/// groups (minus one, because the engine reserves zero for the whole match).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GroupDefinition {
    index: usize,
    content: String,
    name: Option<String>,
    span: GroupSpan,
}

impl GroupDefinition {
    pub(crate) const fn new(
        index: usize,
        content: String,
        name: Option<String>,
        span: GroupSpan,
    ) -> Self {
        Self {
            index,
            content,
            name,
            span,
        }
    }

    /// Zero-based position among the capturing groups of the pattern.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Original source text of the group, parentheses and name included.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the group carried a name annotation.
    #[must_use]
    pub const fn is_named(&self) -> bool {
        self.name.is_some()
    }

    /// Name extracted from a `(?<name>...)` annotation.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Location of the group in the original pattern.
    #[must_use]
    pub const fn span(&self) -> GroupSpan {
        self.span
    }
}

/// Ordered, immutable list of the capturing groups in a pattern.
///
/// # Examples
/// ```
/// use better_regex_patterns::analyze;
///
/// let analysis = analyze(r"(?<key>\w+)=(\w+)").expect("pattern is well formed");
/// let groups = analysis.groups();
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups.position("key"), Some(0));
/// assert_eq!(groups.get(1).map(|g| g.content()), Some(r"(\w+)"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GroupTable(Vec<GroupDefinition>);

impl GroupTable {
    pub(crate) const fn new(groups: Vec<GroupDefinition>) -> Self {
        Self(groups)
    }

    /// Number of capturing groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the pattern has no capturing groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a group by its zero-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GroupDefinition> {
        self.0.get(index)
    }

    /// Index of the first group carrying `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|group| group.name() == Some(name))
    }

    /// Names of the named groups, in pattern order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(GroupDefinition::name)
    }

    /// Iterate over the groups in pattern order.
    pub fn iter(&self) -> std::slice::Iter<'_, GroupDefinition> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a GroupTable {
    type Item = &'a GroupDefinition;
    type IntoIter = std::slice::Iter<'a, GroupDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
