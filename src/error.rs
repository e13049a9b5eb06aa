use thompson_nfa_compiler::CompileError;

/// An error that occurred while compiling a pattern or matching against it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The pattern could not be compiled. No [`Matcher`](crate::Matcher) is
    /// produced when this happens.
    Compile(CompileError),
    /// A match was requested without an input string. The matcher is left
    /// untouched and can still be used.
    InvalidInput,
}

impl Error {
    /// Returns the underlying compile error, if this is one.
    pub fn compile_error(&self) -> Option<&CompileError> {
        match *self {
            Error::Compile(ref err) => Some(err),
            Error::InvalidInput => None,
        }
    }
}

impl From<CompileError> for Error {
    fn from(err: CompileError) -> Error {
        Error::Compile(err)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Compile(ref err) => Some(err),
            Error::InvalidInput => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Error::Compile(ref err) => write!(f, "failed to compile pattern: {}", err),
            Error::InvalidInput => write!(f, "input can not be absent"),
        }
    }
}
