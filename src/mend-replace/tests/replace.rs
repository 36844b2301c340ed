//! End-to-end behavior of the full replacer chain.

use mend_replace::{ReplaceError, ReplacerChain, replace};

#[test]
fn identical_old_and_new_always_fail_validation() {
    for replace_all in [false, true] {
        let err = replace("some content", "text", "text", replace_all).unwrap_err();
        assert!(matches!(err, ReplaceError::Validation(_)));
    }
}

#[test]
fn unique_replacement_round_trips() {
    let content = "alpha\nbeta\ngamma";
    let updated = replace(content, "beta", "BETA", false).unwrap();
    assert_eq!(updated, "alpha\nBETA\ngamma");
    let restored = replace(&updated, "BETA", "beta", false).unwrap();
    assert_eq!(restored, content);
}

#[test]
fn exact_unique_match_equals_naive_substitution() {
    let content = "fn main() {\n    println!(\"hi\");\n}";
    let updated = replace(content, "println!(\"hi\");", "println!(\"bye\");", false).unwrap();
    assert_eq!(updated, content.replacen("println!(\"hi\");", "println!(\"bye\");", 1));
}

#[test]
fn repeated_text_is_ambiguous_without_replace_all() {
    let err = replace("foo bar foo", "foo", "baz", false).unwrap_err();
    assert!(matches!(err, ReplaceError::AmbiguousMatch { .. }));
}

#[test]
fn repeated_text_replaces_everywhere_with_replace_all() {
    assert_eq!(replace("foo bar foo", "foo", "baz", true).unwrap(), "baz bar baz");
}

#[test]
fn surrounding_whitespace_outside_the_match_is_preserved() {
    let updated = replace("  hello world  ", "hello world", "goodbye world", false).unwrap();
    assert_eq!(updated, "  goodbye world  ");
}

#[test]
fn block_anchors_pick_the_more_similar_of_two_blocks() {
    let content = "start\n  alpha beta\nend\nstart\n  qqqqqqqqqq\nend";
    // The search's interior drifted by one character from the first
    // block and is nothing like the second.
    let search = "start\n  alpha betX\nend";
    let resolution = ReplacerChain::new()
        .resolve(content, search, "replaced\nblock\nhere", false)
        .unwrap();
    assert_eq!(resolution.replacer, "BlockAnchorReplacer");
    assert_eq!(resolution.content, "replaced\nblock\nhere\nstart\n  qqqqqqqqqq\nend");
}

#[test]
fn overlapping_occurrences_stay_ambiguous() {
    // "aa" occurs twice in "aaa" by index even though the scan counts
    // one non-overlapping hit; uniqueness is judged on indices.
    let err = replace("aaa", "aa", "zz", false).unwrap_err();
    assert!(matches!(err, ReplaceError::AmbiguousMatch { .. }));
}

#[test]
fn multi_line_block_swaps_whole_body() {
    let content = "function foo() {\n  const x = 1;\n}";
    let updated = replace(
        content,
        "function foo() {\n  const x = 1;\n}",
        "function foo() {\n  const x = 2;\n}",
        false,
    )
    .unwrap();
    assert_eq!(updated, "function foo() {\n  const x = 2;\n}");
}

#[test]
fn indented_search_matches_differently_indented_content() {
    let content = "\t\tlet x = 1;\n\t\tlet y = 2;";
    let search = "    let x = 1;\n    let y = 2;";
    let updated = replace(content, search, "let z = 3;", false).unwrap();
    assert_eq!(updated, "let z = 3;");
}

#[test]
fn escaped_search_matches_literal_content() {
    let content = "log(\"one\ntwo\");\nrest";
    let search = "log(\"one\\ntwo\");";
    let updated = replace(content, search, "log(\"merged\");", false).unwrap();
    assert_eq!(updated, "log(\"merged\");\nrest");
}

#[test]
fn output_is_deterministic_across_calls() {
    let content = "a\n  b\na\n  c\na";
    for _ in 0..3 {
        let first = replace(content, "  b", "B", false).unwrap();
        assert_eq!(first, "a\nB\na\n  c\na");
    }
}
