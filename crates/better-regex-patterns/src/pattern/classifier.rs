//! Group classification and name extraction.

/// What kind of group a parenthesised span opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKind {
    /// `(?:...)`, inline flag groups such as `(?i)` or `(?i:...)`, and atomic
    /// `(?>...)` groups. None of these consume a capture index.
    NonCapturing,
    /// `(?=...)`, `(?!...)`, `(?<=...)` and `(?<!...)`.
    Lookaround,
    /// `(?<name>...)` or `(?P<name>...)` with an ASCII-alphabetic name.
    Named {
        /// The extracted name.
        name: String,
        /// Byte length of the annotation following the opening parenthesis,
        /// e.g. 7 for `?<name>`.
        annotation_len: usize,
    },
    /// Any other group; numbered by the engine but unnamed.
    Capturing,
}

impl GroupKind {
    /// Whether the engine assigns this group a capture index.
    #[must_use]
    pub const fn is_capturing(&self) -> bool {
        matches!(self, Self::Named { .. } | Self::Capturing)
    }
}

const LOOKAROUND_PREFIXES: [&str; 4] = ["?=", "?!", "?<=", "?<!"];
const NAME_PREFIXES: [&str; 2] = ["?<", "?P<"];

/// Parse `<letters>` after a name prefix, returning the name and the length
/// of the annotation through the closing `>`.
fn named_annotation(body: &str) -> Option<(String, usize)> {
    NAME_PREFIXES.iter().find_map(|prefix| {
        let rest = body.strip_prefix(prefix)?;
        let name_len = rest
            .bytes()
            .take_while(u8::is_ascii_alphabetic)
            .count();
        if name_len == 0 || rest.as_bytes().get(name_len) != Some(&b'>') {
            return None;
        }
        let name = rest.get(..name_len)?;
        Some((name.to_owned(), prefix.len() + name_len + 1))
    })
}

/// `?flags)` or `?flags:` where flags are letters with an optional `-`.
fn is_flag_group(body: &str) -> bool {
    let Some(rest) = body.strip_prefix('?') else {
        return false;
    };
    let flags_len = rest
        .bytes()
        .take_while(|b| b.is_ascii_alphabetic() || *b == b'-')
        .count();
    flags_len > 0 && matches!(rest.as_bytes().get(flags_len), Some(b')' | b':'))
}

/// Classify a group from its source text, starting at its opening
/// parenthesis.
///
/// Only the prefix is inspected, so the text may extend past the group's
/// closing parenthesis.
///
/// # Examples
/// ```
/// use better_regex_patterns::{GroupKind, classify_group};
///
/// assert_eq!(classify_group("(?:abc)"), GroupKind::NonCapturing);
/// assert_eq!(classify_group("(?<=abc)"), GroupKind::Lookaround);
/// assert_eq!(
///     classify_group(r"(?<year>\d{4})"),
///     GroupKind::Named { name: "year".into(), annotation_len: 7 }
/// );
/// assert_eq!(classify_group("(abc)"), GroupKind::Capturing);
/// ```
#[must_use]
pub fn classify_group(group: &str) -> GroupKind {
    let Some(body) = group.strip_prefix('(') else {
        return GroupKind::Capturing;
    };
    if body.starts_with("?:") {
        return GroupKind::NonCapturing;
    }
    if LOOKAROUND_PREFIXES
        .iter()
        .any(|prefix| body.starts_with(prefix))
    {
        return GroupKind::Lookaround;
    }
    if let Some((name, annotation_len)) = named_annotation(body) {
        return GroupKind::Named {
            name,
            annotation_len,
        };
    }
    if body.starts_with("?>") || is_flag_group(body) {
        return GroupKind::NonCapturing;
    }
    GroupKind::Capturing
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn named(name: &str, annotation_len: usize) -> GroupKind {
        GroupKind::Named {
            name: name.into(),
            annotation_len,
        }
    }

    #[rstest]
    #[case::non_capturing("(?:literal)", GroupKind::NonCapturing)]
    #[case::lookahead("(?=literal)", GroupKind::Lookaround)]
    #[case::negative_lookahead("(?!literal)", GroupKind::Lookaround)]
    #[case::lookbehind("(?<=literal)", GroupKind::Lookaround)]
    #[case::negative_lookbehind("(?<!literal)", GroupKind::Lookaround)]
    #[case::named("(?<name>x)", named("name", 7))]
    #[case::python_named("(?P<name>x)", named("name", 8))]
    #[case::mixed_case_name("(?<fooBar>x)", named("fooBar", 9))]
    #[case::inline_flags("(?i)", GroupKind::NonCapturing)]
    #[case::scoped_flags("(?i-s:x)", GroupKind::NonCapturing)]
    #[case::atomic("(?>x)", GroupKind::NonCapturing)]
    #[case::plain("(x)", GroupKind::Capturing)]
    #[case::empty("()", GroupKind::Capturing)]
    fn classifies_group_prefixes(#[case] group: &str, #[case] expected: GroupKind) {
        assert_eq!(classify_group(group), expected);
    }

    #[rstest]
    #[case::digit_in_name("(?<name1>x)")]
    #[case::underscore_in_name("(?<first_name>x)")]
    #[case::empty_name("(?<>x)")]
    #[case::unterminated_name("(?<name")]
    #[case::non_ascii_name("(?<nom\u{e9}>x)")]
    fn unsupported_names_fall_back_to_plain_capture(#[case] group: &str) {
        assert_eq!(classify_group(group), GroupKind::Capturing);
    }

    #[test]
    fn only_named_and_plain_groups_capture() {
        assert!(classify_group("(?<n>x)").is_capturing());
        assert!(classify_group("(x)").is_capturing());
        assert!(!classify_group("(?:x)").is_capturing());
        assert!(!classify_group("(?!x)").is_capturing());
    }
}
