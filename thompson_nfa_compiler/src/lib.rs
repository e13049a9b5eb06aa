//! Thompson NFA Compiler
//!
//! This library compiles a small regular expression syntax (literals,
//! concatenation, `|`, `*` and parentheses) into a Thompson NFA and matches
//! whole strings against it by simulating every live state at once. There is
//! no backtracking, so matching time is linear in the input for a given
//! pattern.
//!
//! Compilation is a pipeline:
//! - [`syntax`] makes concatenation explicit and rewrites the pattern into
//!   postfix order
//! - [`Compiler`] applies Thompson's construction to the postfix tokens
//! - [`Matcher`] simulates the resulting [`NFA`]
//!
//! ```
//! use thompson_nfa_compiler::{compile, Matcher};
//!
//! let nfa = compile("(a|b)*c").unwrap();
//! let matcher = Matcher::new(&nfa);
//! assert!(matcher.is_match("abbac"));
//! assert!(!matcher.is_match("abba"));
//! ```

#[macro_use]
mod macros;

pub mod compiler;
pub mod matcher;
pub mod nfa;
pub mod syntax;

pub use compiler::Compiler;
pub use matcher::Matcher;
pub use nfa::{Fragment, State, StateId, NFA};
pub use syntax::Token;

/// The result of compiling a pattern to a Thompson NFA
pub type CompileResult<T> = Result<T, CompileError>;

/// Compile a pattern string to a Thompson NFA
pub fn compile(pattern: &str) -> CompileResult<NFA> {
    Compiler::new().compile_pattern(pattern)
}

/// Which side of a parenthesis pair is missing its partner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paren {
    /// A `(` that is never closed
    Open,
    /// A `)` with no `(` before it
    Close,
}

/// Errors that can occur during compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Parentheses in the pattern do not pair up
    UnbalancedParentheses(Paren),
    /// An operator with no construction rule, such as `?` or `+`
    UnsupportedOperator(char),
    /// Operators and operands do not combine into a single automaton.
    /// `remaining` is the number of fragments left on the stack.
    MalformedPostfix { remaining: usize },
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::UnbalancedParentheses(Paren::Open) => {
                write!(f, "unbalanced parentheses: unclosed '('")
            }
            CompileError::UnbalancedParentheses(Paren::Close) => {
                write!(f, "unbalanced parentheses: unopened ')'")
            }
            CompileError::UnsupportedOperator(op) => write!(f, "unsupported operator: '{}'", op),
            CompileError::MalformedPostfix { remaining } => {
                write!(f, "malformed pattern: {} fragments where 1 was expected", remaining)
            }
        }
    }
}

impl std::error::Error for CompileError {}
