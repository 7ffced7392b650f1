use pretty_assertions::assert_eq;

use crate::{compile, ParseError};

#[test]
fn reference_pattern() {
    let pattern = compile("a(bc|d*)*e").unwrap();

    assert!(pattern.is_match("ae"));
    assert!(pattern.is_match("adddde"));
    assert!(pattern.is_match("abce"));
    assert!(pattern.is_match("abcdddddbcddde"));

    assert!(!pattern.is_match("chicken"));
    assert!(!pattern.is_match("abde"));
    assert!(!pattern.is_match("a"));
    assert!(!pattern.is_match(""));
    assert!(!pattern.is_match("abcd"));
}

#[test]
fn star_accepts_the_empty_string() {
    for pattern in ["a*", "(abc)*", "(a|b)*", "(a*)*", "((a|b)*c*)*"] {
        assert!(
            compile(pattern).unwrap().is_match(""),
            "pattern `{pattern}` must accept the empty string"
        );
    }
}

#[test]
fn nested_stars_terminate() {
    // `(a*)*` piles ε-cycles on top of each other; both compilation and
    // matching must still come out the other end.
    let pattern = compile("(a*)*").unwrap();

    assert!(pattern.is_match(""));
    assert!(pattern.is_match("aaaaaaaaaa"));
    assert!(!pattern.is_match("aaab"));
}

#[test]
fn matching_is_whole_string_not_substring() {
    let pattern = compile("ab").unwrap();

    assert!(pattern.is_match("ab"));
    assert!(!pattern.is_match("abc"));
    assert!(!pattern.is_match("xab"));
    assert!(!pattern.is_match("a"));
}

#[test]
fn union_accepts_either_side_and_nothing_else() {
    let pattern = compile("ab|cd").unwrap();

    assert!(pattern.is_match("ab"));
    assert!(pattern.is_match("cd"));
    assert!(!pattern.is_match("ad"));
    assert!(!pattern.is_match("abcd"));
    assert!(!pattern.is_match(""));
}

#[test]
fn concatenation_composes_matches() {
    let pattern = compile("(a|b)(c|d)").unwrap();

    for input in ["ac", "ad", "bc", "bd"] {
        assert!(pattern.is_match(input), "`{input}` must match");
    }
    for input in ["a", "c", "ab", "cd", "acd"] {
        assert!(!pattern.is_match(input), "`{input}` must not match");
    }
}

#[test]
fn escaped_star_matches_a_literal_star() {
    let pattern = compile(r"\*").unwrap();

    assert!(pattern.is_match("*"));
    assert!(!pattern.is_match(""));
    assert!(!pattern.is_match("**"));
    assert!(!pattern.is_match("a"));
}

#[test]
fn escaped_group_characters_match_literally() {
    let pattern = compile(r"\(\|\)").unwrap();

    assert!(pattern.is_match("(|)"));
    assert!(!pattern.is_match("()"));
}

#[test]
fn characters_never_seen_at_compile_time_reject() {
    let pattern = compile("abc").unwrap();

    assert!(!pattern.is_match("abd"));
    assert!(!pattern.is_match("ab✗"));
    assert!(!pattern.is_match("日本語"));
}

#[test]
fn multibyte_characters_match_as_single_code_points() {
    let pattern = compile("héllo*").unwrap();

    assert!(pattern.is_match("héll"));
    assert!(pattern.is_match("héllooo"));
    assert!(!pattern.is_match("hello"));
}

#[test]
fn compiling_twice_accepts_identically() {
    let first = compile("a(b|c)*d").unwrap();
    let second = compile("a(b|c)*d").unwrap();

    for input in ["ad", "abd", "acd", "abcbcd", "a", "d", "abc", ""] {
        assert_eq!(
            first.is_match(input),
            second.is_match(input),
            "the two compilations disagree on `{input}`"
        );
    }
}

#[test]
fn malformed_patterns_fail_to_compile() {
    assert_eq!(
        compile("(ab").unwrap_err(),
        ParseError::UnclosedGroup { offset: 3 }
    );
    assert_eq!(
        compile("ab)").unwrap_err(),
        ParseError::TrailingInput { offset: 2 }
    );
    assert_eq!(
        compile("()").unwrap_err(),
        ParseError::EmptyExpression { offset: 1 }
    );
    assert_eq!(
        compile("").unwrap_err(),
        ParseError::EmptyExpression { offset: 0 }
    );
    assert_eq!(
        compile(r"a\b").unwrap_err(),
        ParseError::InvalidEscape { offset: 2, escaped: 'b' }
    );
}

#[test]
fn pattern_reports_its_source() {
    let pattern = compile("a(bc|d*)*e").unwrap();

    assert_eq!(pattern.as_str(), "a(bc|d*)*e");
    assert_eq!(format!("{:?}", pattern), r#"Pattern("a(bc|d*)*e")"#);
}

#[test]
fn patterns_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<crate::Pattern>();
}
