use super::*;
use crate::error::PatternError;

fn is_match(pattern: &str, subject: &str) -> bool {
    matches(&compile(pattern).unwrap(), subject)
}

#[test]
fn test_plain_literals_match_only_themselves() {
    for p in ["a", "hello", "x y z", "123", "é"] {
        assert!(is_match(p, p), "{p}");
        assert!(!is_match(p, &format!("{p}x")), "{p}");
    }
}

#[test]
fn test_wildcard_matches_exactly_one_char() {
    for s in ["a", "Z", " ", "\t", "€"] {
        assert!(is_match(".", s), "{s:?}");
    }
    for s in ["", "ab", "abc"] {
        assert!(!is_match(".", s), "{s:?}");
    }
}

#[test]
fn test_star() {
    for s in ["", "a", "aaaa"] {
        assert!(is_match("a*", s), "{s:?}");
    }
    for s in ["b", "ab"] {
        assert!(!is_match("a*", s), "{s:?}");
    }
}

#[test]
fn test_plus() {
    assert!(is_match("a+", "a"));
    assert!(is_match("a+", "aa"));
    assert!(!is_match("a+", ""));
}

#[test]
fn test_optional() {
    assert!(is_match("a?b", "b"));
    assert!(is_match("a?b", "ab"));
    assert!(!is_match("a?b", "aab"));
}

#[test]
fn test_inclusive_class() {
    for s in ["a", "b", "c"] {
        assert!(is_match("[abc]", s));
    }
    assert!(!is_match("[abc]", "d"));
    assert!(!is_match("[abc]", ""));
}

#[test]
fn test_exclusive_class() {
    assert!(is_match("[^abc]", "d"));
    assert!(!is_match("[^abc]", "a"));
    assert!(!is_match("[^abc]", ""));
}

#[test]
fn test_greedy_backtracking() {
    assert!(is_match("a*ab", "aaab"));
    assert!(is_match("a*ab", "ab"));
    assert!(!is_match("a*ab", "b"));
    assert!(!is_match("a*ab", "aa"));
}

#[test]
fn test_escaped_specials_match_literally() {
    assert!(is_match(r"a\.b", "a.b"));
    assert!(!is_match(r"a\.b", "axb"));
    assert!(is_match(r"\*+", "***"));
    assert!(is_match(r"[\]]", "]"));
}

#[test]
fn test_mixed_pattern() {
    let p = compile("[HZ].*, .+!").unwrap();
    assert!(matches(&p, "Hello, world!"));
    assert!(matches(&p, "Z, z!"));
    assert!(!matches(&p, "Hello, !"));
}

#[test]
fn test_compile_errors() {
    assert!(matches!(
        compile("*"),
        Err(PatternError::DanglingQuantifier { .. })
    ));
    assert!(matches!(
        compile("[abc"),
        Err(PatternError::UnterminatedClass { .. })
    ));
}

#[test]
fn test_compiling_twice_is_equivalent() {
    let subjects = ["", "a", "ab", "aab", "abab", "b", "xyz", "aaaab"];
    for src in ["a*ab", "[^b]*b?", ".+", "a?[ab]*"] {
        let a = compile(src).unwrap();
        let b = compile(src).unwrap();
        assert_eq!(a, b);
        for s in subjects {
            assert_eq!(matches(&a, s), matches(&b, s), "{src} on {s:?}");
        }
    }
}

#[test]
fn test_empty_subject_needs_optional_operators() {
    assert!(is_match("", ""));
    assert!(is_match("a?b*[c]*", ""));
    assert!(!is_match("a?b", ""));
    assert!(compile("a?b*").unwrap().accepts_empty());
    assert!(!compile("a?b").unwrap().accepts_empty());
}
