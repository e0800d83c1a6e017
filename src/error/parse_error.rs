#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
///
/// Positions count tokens, not characters, starting at zero.
pub enum ParseError {
    /// Found a token that cannot start or continue an expression.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// The index of the token in the token stream.
        position: usize,
    },
    /// Reached the end of input while an expression was still open.
    UnexpectedEndOfInput {
        /// The index just past the last token.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The token encountered instead.
        found:    String,
        /// The index of the token in the token stream.
        position: usize,
    },
    /// A closing brace `}` was expected but not found.
    ExpectedClosingBrace {
        /// The token encountered instead.
        found:    String,
        /// The index of the token in the token stream.
        position: usize,
    },
    /// A closing bracket `]` was expected but not found.
    ExpectedClosingBracket {
        /// The token encountered instead.
        found:    String,
        /// The index of the token in the token stream.
        position: usize,
    },
    /// A closing absolute-value bar was expected but not found.
    ExpectedClosingPipe {
        /// The token encountered instead.
        found:    String,
        /// The index of the token in the token stream.
        position: usize,
    },
    /// An opening brace `{` was expected but not found.
    ExpectedOpeningBrace {
        /// The token encountered instead.
        found:    String,
        /// The index of the token in the token stream.
        position: usize,
    },
    /// A comma between function arguments was expected but not found.
    ExpectedComma {
        /// The token encountered instead.
        found:    String,
        /// The index of the token in the token stream.
        position: usize,
    },
    /// A unary operator had nothing to operate on.
    UnaryWithoutOperand {
        /// The operator token.
        token:    String,
        /// The index of the token in the token stream.
        position: usize,
    },
    /// A function whose arity is not one was called without parentheses.
    MissingFunctionParentheses {
        /// The name of the function.
        name:     String,
        /// The index of the token in the token stream.
        position: usize,
    },
    /// The base of a `\log_` subscript was not a braced group or number.
    InvalidLogBase {
        /// The token encountered instead.
        found:    String,
        /// The index of the token in the token stream.
        position: usize,
    },
    /// An unbraced exponent literal started with a decimal point.
    ExponentSplitOnDot {
        /// The index of the token in the token stream.
        position: usize,
    },
    /// Found extra tokens after the expression was complete.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// The index of the token in the token stream.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Unexpected token '{token}' at position {position}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Unexpected end of input at position {position}.")
            },

            Self::ExpectedClosingParen { found, position } => write!(f,
                                                                     "Expected closing parenthesis ')' at position {position} but found '{found}'."),

            Self::ExpectedClosingBrace { found, position } => write!(f,
                                                                     "Expected closing brace '}}' at position {position} but found '{found}'."),

            Self::ExpectedClosingBracket { found, position } => write!(f,
                                                                       "Expected closing bracket ']' at position {position} but found '{found}'."),

            Self::ExpectedClosingPipe { found, position } => write!(f,
                                                                    "Expected closing bar '|' at position {position} but found '{found}'."),

            Self::ExpectedOpeningBrace { found, position } => write!(f,
                                                                     "Expected opening brace '{{' at position {position} but found '{found}'."),

            Self::ExpectedComma { found, position } => write!(f,
                                                              "Expected ',' between arguments at position {position} but found '{found}'."),

            Self::UnaryWithoutOperand { token, position } => {
                write!(f, "Unary '{token}' at position {position} has no operand.")
            },

            Self::MissingFunctionParentheses { name, position } => write!(f,
                                                                          "Function '{name}' at position {position} requires parenthesized arguments."),

            Self::InvalidLogBase { found, position } => write!(f,
                                                               "Invalid logarithm base '{found}' at position {position}."),

            Self::ExponentSplitOnDot { position } => write!(f,
                                                            "Exponent literal at position {position} cannot be split on a '.'."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Extra tokens after expression at position {position}: '{token}'."),
        }
    }
}

impl std::error::Error for ParseError {}
