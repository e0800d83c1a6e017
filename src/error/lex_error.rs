#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression.
pub enum LexError {
    /// A numeric literal contained more than one decimal point.
    MalformedNumber {
        /// The offending literal text.
        text: String,
    },
    /// A subscripted identifier opened a `_{` group that never closed.
    UnterminatedSubscript {
        /// The identifier text up to the point of failure.
        text: String,
    },
    /// A backslash command matched no keyword, unit, or identifier.
    UnknownCommand {
        /// The command text including the backslash.
        text: String,
    },
    /// An `\operatorname{..}` group named no supported operator.
    UnknownOperator {
        /// The name inside the braces.
        text: String,
    },
    /// The input contained a character with no meaning in any token.
    UnexpectedCharacter {
        /// The offending slice of input.
        text: String,
    },
}

impl Default for LexError {
    /// The placeholder the lexer produces when no rule matches; the
    /// token-stream builder fills in the offending slice afterwards.
    fn default() -> Self {
        Self::UnexpectedCharacter { text: String::new() }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedNumber { text } => {
                write!(f, "Malformed number '{text}': more than one decimal point.")
            },

            Self::UnterminatedSubscript { text } => {
                write!(f, "Subscript of identifier '{text}' is never closed.")
            },

            Self::UnknownCommand { text } => {
                write!(f, "Unknown command '{text}'.")
            },

            Self::UnknownOperator { text } => {
                write!(f, "Unknown operator name '{text}'.")
            },

            Self::UnexpectedCharacter { text } => {
                write!(f, "Unexpected character '{text}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
