/*!
This crate provides a small regular expression engine with predictable
performance. Patterns are compiled to a Thompson NFA once, and every match
simulates all live automaton states in lock step. There is no backtracking,
so no pattern can cause catastrophic matching time: a search is bounded by
the length of the input times the number of states in the automaton.

# Example

```
use thompson_regex::Pattern;

let matcher = Pattern::compile("(a|b)*c").unwrap();
assert!(matcher.matches("aabbc"));
assert!(!matcher.matches("aabb"));
```

# Syntax

The supported syntax is deliberately small:

```text
x        a literal: any character other than ( ) | * . ? +
xy       concatenation (x followed by y)
x.y      explicit concatenation, same as xy
x|y      alternation (x or y)
x*       zero or more of x
(x)      grouping
```

There are no escapes, character classes, anchors or capture groups. `?` and
`+` are reserved and rejected with
[`CompileError::UnsupportedOperator`]. The empty pattern matches only the
empty string.

# Whole-string matching

[`Matcher::matches`] succeeds only when the *entire* input is matched.
There is no substring search: `ab` does not match `abc`.

# Sharing

A [`Matcher`] never changes after compilation. It is cheap to clone, and it
is `Send` and `Sync`, so it can be shared between threads freely. Each call
to [`Matcher::matches`] keeps its own search state.

# Crate features

* **logging** - Emits debug messages while compiling and trace messages
  while matching through the `log` crate.
*/

#![forbid(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

use std::{fmt, str::FromStr, sync::Arc};

use thompson_nfa_compiler::NFA;

pub use crate::error::Error;
pub use thompson_nfa_compiler::{CompileError, Paren};

mod error;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Compile `pattern` and return a matcher for it.
///
/// This is a shorthand for [`Pattern::compile`].
pub fn compile(pattern: &str) -> Result<Matcher, Error> {
    Pattern::compile(pattern)
}

/// A compiled pattern.
///
/// Cloning a `Pattern` is cheap: the automaton is shared.
#[derive(Clone)]
pub struct Pattern {
    pattern: Arc<str>,
    nfa: Arc<NFA>,
}

impl Pattern {
    /// Compile `pattern` into a matcher.
    ///
    /// On failure nothing is returned but the error.
    ///
    /// # Example
    ///
    /// ```
    /// use thompson_regex::{Error, Paren, CompileError, Pattern};
    ///
    /// assert!(Pattern::compile("a*").is_ok());
    /// assert_eq!(
    ///     Pattern::compile("(a|b").unwrap_err(),
    ///     Error::Compile(CompileError::UnbalancedParentheses(Paren::Open)),
    /// );
    /// ```
    pub fn compile(pattern: &str) -> Result<Matcher, Error> {
        Pattern::new(pattern).map(Matcher::new)
    }

    /// Compile `pattern` without wrapping it in a matcher.
    pub fn new(pattern: &str) -> Result<Pattern, Error> {
        let nfa = thompson_nfa_compiler::compile(pattern)?;
        Ok(Pattern { pattern: Arc::from(pattern), nfa: Arc::new(nfa) })
    }

    /// Create a matcher for this pattern.
    pub fn matcher(&self) -> Matcher {
        Matcher::new(self.clone())
    }

    /// The source text this pattern was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The compiled automaton.
    pub fn nfa(&self) -> &NFA {
        &self.nfa
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Pattern, Error> {
        Pattern::new(s)
    }
}

/// Matches whole strings against a compiled [`Pattern`].
#[derive(Clone, Debug)]
pub struct Matcher {
    pattern: Pattern,
}

impl Matcher {
    /// Wrap a compiled pattern.
    pub fn new(pattern: Pattern) -> Matcher {
        Matcher { pattern }
    }

    /// Returns true if and only if the whole of `input` matches.
    ///
    /// # Example
    ///
    /// ```
    /// let matcher = thompson_regex::compile("ab").unwrap();
    /// assert!(matcher.matches("ab"));
    /// assert!(!matcher.matches("a"));
    /// assert!(!matcher.matches("abc"));
    /// ```
    pub fn matches(&self, input: &str) -> bool {
        thompson_nfa_compiler::Matcher::new(self.pattern.nfa()).is_match(input)
    }

    /// Like [`Matcher::matches`], but for an input that may be absent.
    ///
    /// Returns [`Error::InvalidInput`] when `input` is `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use thompson_regex::Error;
    ///
    /// let matcher = thompson_regex::compile("a*").unwrap();
    /// assert_eq!(matcher.try_matches(Some("aaa")), Ok(true));
    /// assert_eq!(matcher.try_matches(None), Err(Error::InvalidInput));
    /// ```
    pub fn try_matches(&self, input: Option<&str>) -> Result<bool, Error> {
        input.map(|input| self.matches(input)).ok_or(Error::InvalidInput)
    }

    /// The pattern this matcher runs.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The compiled automaton.
    pub fn nfa(&self) -> &NFA {
        self.pattern.nfa()
    }
}
