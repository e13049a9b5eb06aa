use crate::{
    nfa::{Fragment, NFA},
    syntax::{self, Token},
    CompileError, CompileResult,
};

/// Compiler that converts postfix tokens to a Thompson NFA
///
/// Each token is applied to a stack of fragments: literals push a new
/// fragment, operators pop their operands and push the combined fragment.
pub struct Compiler {
    nfa: NFA,
    stack: Vec<Fragment>,
}

impl Compiler {
    /// Create a new compiler
    pub fn new() -> Self {
        Self {
            nfa: NFA::new(),
            stack: Vec::new(),
        }
    }

    /// Compile a pattern string all the way to an NFA
    pub fn compile_pattern(self, pattern: &str) -> CompileResult<NFA> {
        debug!("compiling pattern {:?}", pattern);
        let postfix = syntax::parse(pattern)?;
        debug!("postfix form {:?}", syntax::render(&postfix));
        self.compile(&postfix)
    }

    /// Compile a postfix token sequence to an NFA
    ///
    /// An empty sequence yields the automaton that only matches the empty
    /// string.
    pub fn compile(mut self, postfix: &[Token]) -> CompileResult<NFA> {
        if postfix.is_empty() {
            let fragment = self.nfa.epsilon();
            self.nfa.set_start(fragment.start);
            return Ok(self.nfa);
        }

        for &token in postfix {
            self.apply(token)?;
        }

        let fragment = match (self.stack.pop(), self.stack.len()) {
            (Some(fragment), 0) => fragment,
            (popped, rest) => {
                return Err(CompileError::MalformedPostfix {
                    remaining: rest + usize::from(popped.is_some()),
                })
            }
        };

        self.nfa.set_start(fragment.start);
        debug!("compiled NFA with {} states", self.nfa.len());
        Ok(self.nfa)
    }

    /// Apply one postfix token to the fragment stack
    fn apply(&mut self, token: Token) -> CompileResult<()> {
        let fragment = match token {
            Token::Literal(ch) => self.nfa.symbol(ch),
            Token::Star => {
                let inner = self.pop()?;
                self.nfa.closure(inner)
            }
            Token::Union => {
                let (left, right) = self.pop_pair()?;
                self.nfa.union(left, right)
            }
            Token::Concat => {
                let (left, right) = self.pop_pair()?;
                self.nfa.concat(left, right)
            }
            Token::Optional | Token::Plus | Token::LParen | Token::RParen => {
                return Err(CompileError::UnsupportedOperator(token.as_char()));
            }
        };
        self.stack.push(fragment);
        Ok(())
    }

    /// Pop one operand
    fn pop(&mut self) -> CompileResult<Fragment> {
        self.stack
            .pop()
            .ok_or(CompileError::MalformedPostfix { remaining: 0 })
    }

    /// Pop the two operands of a binary operator, right first
    fn pop_pair(&mut self) -> CompileResult<(Fragment, Fragment)> {
        if self.stack.len() < 2 {
            return Err(CompileError::MalformedPostfix {
                remaining: self.stack.len(),
            });
        }
        let right = self.pop()?;
        let left = self.pop()?;
        Ok((left, right))
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
