/// Lexing errors.
///
/// Defines all error types that can occur while turning raw LaTeX input
/// into tokens: malformed numeric literals, unterminated subscripts, and
/// unknown backslash commands.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building an expression
/// tree from tokens. Parse errors include unexpected tokens, unterminated
/// groups, and invalid function call syntax.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unknown variables, unknown functions, and invalid assignment targets.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error the expression pipeline can produce, from raw text to value.
pub enum Error {
    /// Tokenizing the input failed.
    Lex(LexError),
    /// Building the expression tree failed.
    Parse(ParseError),
    /// Evaluating the expression tree failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(error) => write!(f, "{error}"),
            Self::Parse(error) => write!(f, "{error}"),
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(error) => Some(error),
            Self::Parse(error) => Some(error),
            Self::Runtime(error) => Some(error),
        }
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
