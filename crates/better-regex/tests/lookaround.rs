//! Matching with the backtracking engine.

#![expect(clippy::expect_used, reason = "tests assert successful matching")]

use better_regex::{FancyRegex, RegexError, RegexOptions};

#[test]
fn lookaround_groups_are_skipped_by_the_table() {
    let regex = FancyRegex::with_engine(
        r"(?<price>\d+)(?= EUR)(?<!0)",
        RegexOptions::default(),
    )
    .expect("pattern should analyze");
    assert_eq!(regex.groups().len(), 1);
    assert_eq!(regex.rewritten(), r"(\d+)(?= EUR)(?<!0)");

    let view = regex
        .captures("costs 42 EUR")
        .expect("search should succeed");
    assert_eq!(view.get("price"), Some("42"));
    assert_eq!(view.get(0), Some("42"));
}

#[test]
fn backreferences_follow_rewritten_numbering() {
    let regex = FancyRegex::with_engine(r"(?<quote>['])(?<body>\w+)\1", RegexOptions::default())
        .expect("pattern should analyze");
    let view = regex
        .captures("say 'hi' now")
        .expect("search should succeed");
    assert_eq!(view.get("body"), Some("hi"));
}

#[test]
fn inline_options_apply_to_the_fancy_engine() {
    let options = RegexOptions::new().case_insensitive(true);
    let regex = FancyRegex::with_engine("(?<word>abc)(?=!)", options)
        .expect("pattern should analyze");
    let view = regex.captures("ABC!").expect("search should succeed");
    assert_eq!(view.get("word"), Some("ABC"));
}

#[test]
fn unbalanced_lookbehind_is_rejected_by_analysis() {
    let regex = FancyRegex::with_engine(r"(?<n>a)(?<=\)", RegexOptions::default());
    let Err(err) = regex else {
        panic!("unbalanced pattern should be rejected by analysis");
    };
    assert!(matches!(err, RegexError::Pattern(_)));
}

#[test]
fn engine_syntax_errors_surface_unchanged() {
    let regex = FancyRegex::with_engine("(?<n>a)[", RegexOptions::default())
        .expect("group structure is valid");
    let err = regex.captures("a").expect_err("unterminated class should fail");
    assert!(matches!(err, RegexError::EngineCompile(_)));
}
