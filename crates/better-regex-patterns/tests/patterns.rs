//! Integration tests for the group analyzer's public API.

#![expect(clippy::expect_used, reason = "test asserts analysis outcomes")]

use rstest::rstest;

use better_regex_patterns::{
    GroupKind, PatternError, analyze, classify_group, rewrite_pattern, scan_groups,
};

#[test]
fn analyze_smoke_test() {
    let analysis = analyze(r"(?<year>\d{4})-(?<month>\d{2})-(?<day>\d{2})")
        .expect("pattern should analyze");
    assert_eq!(analysis.rewritten(), r"(\d{4})-(\d{2})-(\d{2})");
    assert_eq!(analysis.groups().position("day"), Some(2));

    assert!(
        analyze("(unclosed").is_err(),
        "malformed pattern should fail to analyze"
    );
}

#[rstest]
#[case::no_groups("abc", 0)]
#[case::plain("(a)|(b)", 2)]
#[case::mixed("(?<x>a)(?:b)(?=c)(d)", 2)]
#[case::escaped(r"\((a)\)", 1)]
#[case::class("[(](a)[)]", 1)]
fn table_length_counts_capturing_groups(#[case] pattern: &str, #[case] expected: usize) {
    let analysis = analyze(pattern).expect("pattern should analyze");
    assert_eq!(analysis.groups().len(), expected);
    for (position, group) in analysis.groups().iter().enumerate() {
        assert_eq!(group.index(), position);
    }
}

#[test]
fn components_compose_like_analyze() {
    let pattern = "(?<a>x)(?:y)(z)";
    let spans = scan_groups(pattern).expect("pattern should scan");
    let kinds: Vec<_> = spans
        .iter()
        .map(|span| classify_group(pattern.get(span.range()).expect("span is in bounds")))
        .collect();
    assert_eq!(
        kinds,
        vec![
            GroupKind::Named {
                name: "a".into(),
                annotation_len: 4,
            },
            GroupKind::NonCapturing,
            GroupKind::Capturing,
        ]
    );
    let analysis = analyze(pattern).expect("pattern should analyze");
    assert_eq!(rewrite_pattern(pattern, &[1..5]), analysis.rewritten());
}

#[test]
fn exposes_error_position() {
    let Err(err) = analyze("ab)") else {
        panic!("expected unbalanced parenthesis error");
    };
    let info = match err {
        PatternError::UnbalancedParenthesis(info) => info,
        PatternError::NestedCapture(other) => {
            panic!("expected unbalanced parenthesis, got nested capture {other}")
        }
    };
    assert_eq!(info.position, 2);
    assert!(info.to_string().contains("at byte 2"));
}

#[test]
fn group_spans_point_back_into_the_pattern() {
    let pattern = "x(?<first>a)y(b)";
    let analysis = analyze(pattern).expect("pattern should analyze");
    for group in analysis.groups() {
        assert_eq!(pattern.get(group.span().range()), Some(group.content()));
    }
}
