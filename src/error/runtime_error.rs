#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that is neither a constant nor assigned.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that has not been defined.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a function call.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of parameters the function declares.
        expected: usize,
        /// The number of arguments the call supplied.
        found:    usize,
    },
    /// The left side of `=` was neither a variable nor a function pattern.
    InvalidAssignment,
    /// A list literal contained an element that is not a single quantity.
    ListElementNotScalar {
        /// The zero-based index of the element.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => {
                write!(f, "Unknown variable '{name}'.")
            },

            Self::UnknownFunction { name } => {
                write!(f, "Unknown function '{name}'.")
            },

            Self::ArgumentCountMismatch { name, expected, found } => write!(f,
                                                                            "Function '{name}' takes {expected} argument(s), but {found} were supplied."),

            Self::InvalidAssignment => write!(f,
                                              "The left side of '=' must be a variable or a function pattern such as f(x)."),

            Self::ListElementNotScalar { position } => {
                write!(f, "List element {position} is not a single quantity.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
