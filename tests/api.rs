use std::{sync::Arc, thread};

use thompson_regex::{Matcher, Pattern};

use crate::matcher;

#[test]
fn concatenation() {
    let m = matcher("ab");
    assert!(m.matches("ab"));
    assert!(!m.matches("a"));
    assert!(!m.matches("abc"));
    assert!(!m.matches(""));
}

#[test]
fn alternation() {
    let m = matcher("a|b");
    assert!(m.matches("a"));
    assert!(m.matches("b"));
    assert!(!m.matches("c"));
    assert!(!m.matches("ab"));
}

#[test]
fn closure() {
    let m = matcher("a*");
    assert!(m.matches(""));
    assert!(m.matches("a"));
    assert!(m.matches("aaaa"));
    assert!(!m.matches("b"));
    assert!(!m.matches("aab"));
}

#[test]
fn grouping_and_combination() {
    let m = matcher("(a|b)*c");
    assert!(m.matches("aabbc"));
    assert!(m.matches("c"));
    assert!(m.matches("babac"));
    assert!(!m.matches("aabb"));
    assert!(!m.matches(""));
    assert!(!m.matches("aabbcc"));
}

#[test]
fn empty_pattern() {
    let m = matcher("");
    assert!(m.matches(""));
    assert!(!m.matches("a"));

    let m = matcher("()");
    assert!(m.matches(""));
    assert!(!m.matches("a"));
}

#[test]
fn explicit_concatenation() {
    let m = matcher("a.b");
    assert!(m.matches("ab"));
    assert!(!m.matches("a.b"));
}

#[test]
fn alternation_binds_loosest() {
    let m = matcher("ab|cd");
    assert!(m.matches("ab"));
    assert!(m.matches("cd"));
    assert!(!m.matches("abd"));
    assert!(!m.matches("acd"));
}

#[test]
fn closure_binds_tightest() {
    let m = matcher("ab*");
    assert!(m.matches("a"));
    assert!(m.matches("abbb"));
    assert!(!m.matches("abab"));

    let m = matcher("(ab)*");
    assert!(m.matches(""));
    assert!(m.matches("abab"));
    assert!(!m.matches("abb"));
}

#[test]
fn nested_closures() {
    let m = matcher("(a*)*");
    assert!(m.matches(""));
    assert!(m.matches("aaa"));
    assert!(!m.matches("ab"));

    let m = matcher("((a|b)*|c)*d");
    assert!(m.matches("d"));
    assert!(m.matches("abccbad"));
    assert!(!m.matches("abcc"));
}

#[test]
fn pathological_pattern_is_linear() {
    // (a|a)* explodes a backtracking engine on a string of a's ending in b.
    let m = matcher("(a|a)*(a|a)*(a|a)*c");
    let input = format!("{}b", "a".repeat(10_000));
    assert!(!m.matches(&input));
    assert!(m.matches(&format!("{}c", "a".repeat(10_000))));
}

#[test]
fn unicode_literals() {
    let m = matcher("(é|ß)*☃");
    assert!(m.matches("éßé☃"));
    assert!(!m.matches("e☃"));
}

#[test]
fn matcher_is_reusable() {
    let m = matcher("(a|b)*c");
    for _ in 0..3 {
        assert!(m.matches("abc"));
        assert!(!m.matches("ab"));
        assert_eq!(m.try_matches(None), Err(thompson_regex::Error::InvalidInput));
    }
}

#[test]
fn pattern_accessors() -> anyhow::Result<()> {
    let pattern: Pattern = "(a|b)*c".parse()?;
    assert_eq!(pattern.as_str(), "(a|b)*c");
    assert_eq!(pattern.to_string(), "(a|b)*c");
    assert_eq!(format!("{:?}", pattern), r#"Pattern("(a|b)*c")"#);
    assert_eq!(pattern.nfa().len(), 10);

    let m = pattern.matcher();
    assert_eq!(m.pattern().as_str(), "(a|b)*c");
    assert_eq!(m.nfa().len(), 10);
    assert!(m.matches("abc"));
    Ok(())
}

#[test]
fn matcher_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Matcher>();
    assert_send_sync::<Pattern>();

    let m = Arc::new(matcher("(a|b)*c"));
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let m = Arc::clone(&m);
            thread::spawn(move || {
                let input = format!("{}c", "ab".repeat(i * 100));
                m.matches(&input) && !m.matches(&input[..input.len() - 1])
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn clones_agree() {
    let m = matcher("a(b|c)*");
    let cloned = m.clone();
    for input in ["a", "abcb", "b", ""] {
        assert_eq!(m.matches(input), cloned.matches(input));
    }
}
