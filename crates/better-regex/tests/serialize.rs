//! Serialisation of group tables and match results.

#![expect(clippy::expect_used, reason = "tests assert serialisation output")]

use better_regex::NamedRegex;
use serde_json::json;

#[test]
fn serialises_results_view_as_a_list() {
    let regex = NamedRegex::new(r"(?<key>\w+)=(\w+)?").expect("pattern should analyze");
    let view = regex.captures("colour=").expect("search should succeed");
    let value = serde_json::to_value(&view).expect("view should serialise");
    assert_eq!(
        value,
        json!([
            {"group_index": 1, "matching_text": "colour", "group_name": "key"},
            {"group_index": 2, "matching_text": null, "group_name": null},
        ])
    );
}

#[test]
fn serialises_group_table_with_spans() {
    let regex = NamedRegex::new("a(?<b>b)").expect("pattern should analyze");
    let value = serde_json::to_value(regex.groups()).expect("table should serialise");
    assert_eq!(
        value,
        json!([
            {
                "index": 0,
                "content": "(?<b>b)",
                "name": "b",
                "span": {"start": 1, "end": 8},
            },
        ])
    );
}
