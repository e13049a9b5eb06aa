//! Pattern syntax: lexing, explicit concatenation and postfix conversion.
//!
//! A pattern goes through three rewrites before any automaton is built:
//!
//! 1. [`lex`] turns each character into a [`Token`].
//! 2. [`insert_concat`] makes every implicit concatenation explicit, so
//!    `(a|b)*c` becomes `(a|b)*.c`.
//! 3. [`to_postfix`] reorders the tokens into postfix form with the
//!    shunting-yard algorithm, so `(a|b)*.c` becomes `ab|*c.`.

use std::fmt;

use crate::{CompileError, CompileResult, Paren};

/// A single lexical unit of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Matches exactly this character.
    Literal(char),
    /// Concatenation, written `.` or implied by adjacency.
    Concat,
    /// Alternation, `|`.
    Union,
    /// Kleene closure, `*`.
    Star,
    /// `?`. Has a precedence but no construction rule.
    Optional,
    /// `+`. Has a precedence but no construction rule.
    Plus,
    LParen,
    RParen,
}

impl Token {
    /// Classify a single pattern character.
    pub fn from_char(ch: char) -> Token {
        match ch {
            '.' => Token::Concat,
            '|' => Token::Union,
            '*' => Token::Star,
            '?' => Token::Optional,
            '+' => Token::Plus,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ch => Token::Literal(ch),
        }
    }

    /// The character this token is written as.
    pub fn as_char(&self) -> char {
        match *self {
            Token::Literal(ch) => ch,
            Token::Concat => '.',
            Token::Union => '|',
            Token::Star => '*',
            Token::Optional => '?',
            Token::Plus => '+',
            Token::LParen => '(',
            Token::RParen => ')',
        }
    }

    /// Binding strength of an operator token, or `None` for literals and
    /// parentheses. All operators are left-associative.
    pub const fn precedence(&self) -> Option<u8> {
        match *self {
            Token::Union => Some(0),
            Token::Concat => Some(1),
            Token::Star | Token::Optional | Token::Plus => Some(2),
            Token::Literal(_) | Token::LParen | Token::RParen => None,
        }
    }

    /// Returns true for the postfix quantifiers `*`, `?` and `+`.
    pub fn is_quantifier(&self) -> bool {
        matches!(*self, Token::Star | Token::Optional | Token::Plus)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Render a token sequence back into pattern text.
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(Token::as_char).collect()
}

/// Split a pattern into tokens, one per character. Never fails.
pub fn lex(pattern: &str) -> Vec<Token> {
    pattern.chars().map(Token::from_char).collect()
}

/// Insert an explicit [`Token::Concat`] between every pair of adjacent
/// tokens that concatenate.
///
/// No marker follows `(`, `|` or an existing `.`, since those always open a
/// new operand. No marker precedes a quantifier, `|`, `)` or an existing
/// `.`. This stage performs no validation.
pub fn insert_concat(tokens: &[Token]) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len() * 2);
    for (i, &token) in tokens.iter().enumerate() {
        output.push(token);
        if matches!(token, Token::LParen | Token::Union | Token::Concat) {
            continue;
        }
        if let Some(&lookahead) = tokens.get(i + 1) {
            if lookahead.is_quantifier()
                || matches!(lookahead, Token::Union | Token::RParen | Token::Concat)
            {
                continue;
            }
            output.push(Token::Concat);
        }
    }
    output
}

/// Convert an infix token sequence with explicit concatenation into postfix
/// order.
///
/// Fails with [`CompileError::UnbalancedParentheses`] when a `)` has no
/// opening partner or a `(` is never closed.
pub fn to_postfix(tokens: &[Token]) -> CompileResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    for &token in tokens {
        match token {
            Token::Literal(_) => output.push(token),
            Token::LParen => operators.push(token),
            Token::RParen => loop {
                match operators.pop() {
                    Some(Token::LParen) => break,
                    Some(op) => output.push(op),
                    None => return Err(CompileError::UnbalancedParentheses(Paren::Close)),
                }
            },
            _ => {
                let precedence = token.precedence();
                while let Some(&top) = operators.last() {
                    if top == Token::LParen || top.precedence() < precedence {
                        break;
                    }
                    output.push(top);
                    operators.pop();
                }
                operators.push(token);
            }
        }
    }

    while let Some(op) = operators.pop() {
        if op == Token::LParen {
            return Err(CompileError::UnbalancedParentheses(Paren::Open));
        }
        output.push(op);
    }

    Ok(output)
}

/// Run the full syntax pipeline on a pattern string.
pub fn parse(pattern: &str) -> CompileResult<Vec<Token>> {
    to_postfix(&insert_concat(&lex(pattern)))
}
