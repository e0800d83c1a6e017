use crate::units::UnitVector;

/// An abstract syntax tree (AST) node representing a parsed expression.
///
/// `Expr` covers every construct of the input language: literals, unit
/// symbols, variables, arithmetic, built-in and user-defined function
/// calls, and list literals. Assignments are ordinary binary nodes whose
/// operator is [`BinaryOperator::Assign`]; the evaluator inspects their
/// left side to decide what is being defined.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The parsed value.
        value:    f64,
        /// Significant figures counted from the literal text; `0` when the
        /// literal is exact.
        sig_figs: u8,
    },
    /// A unit symbol such as `\km`, behaving as a scaled constant of one.
    UnitLiteral {
        /// The factor towards the coherent SI unit, e.g. `1000` for `\km`.
        scale: f64,
        /// The dimension vector of the unit.
        unit:  UnitVector,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A unary operation (negation, identity, or factorial).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (arithmetic or assignment).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A call to a built-in function (e.g. `\sin` or `\sqrt`).
    Call {
        /// The built-in being called.
        function:  Builtin,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// An optional extra parameter outside the argument list: the
        /// index of a root (`\sqrt[3]{x}`) or the base of a logarithm
        /// (`\log_2 x`).
        parameter: Option<Box<Self>>,
    },
    /// A call to a user-defined function (e.g. `f(3)`).
    UserCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
    },
    /// List literal expression (e.g. `[1, 2, 3]`).
    ListLiteral {
        /// Elements of the list.
        elements: Vec<Self>,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`, `\cdot`, `\times`, or adjacency)
    Mul,
    /// Division (`/` or `\frac`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Assignment (`=`)
    Assign,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Identity (e.g. `+x`).
    Plus,
    /// Factorial (e.g. `x!`).
    Factorial,
}

/// A function built into the language.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Builtin {
    /// Natural logarithm.
    Ln,
    /// Logarithm with an optional base, base 10 by default.
    Log,
    /// Sine, in radians.
    Sin,
    /// Cosine, in radians.
    Cos,
    /// Tangent, in radians.
    Tan,
    /// Secant, in radians.
    Sec,
    /// Cosecant, in radians.
    Csc,
    /// Cotangent, in radians.
    Cot,
    /// Inverse sine.
    Arcsin,
    /// Inverse cosine.
    Arccos,
    /// Inverse tangent.
    Arctan,
    /// Inverse secant.
    Arcsec,
    /// Inverse cosecant.
    Arccsc,
    /// Inverse cotangent.
    Arccot,
    /// Absolute value or complex magnitude.
    Abs,
    /// Square root, or n-th root with a bracket parameter.
    Sqrt,
    /// Rounding towards negative infinity.
    Floor,
    /// Rounding towards positive infinity.
    Ceil,
    /// Rounding half away from zero, to an optional decimal place.
    Round,
    /// Factorial as a named function.
    Fact,
    /// Binomial coefficient.
    Ncr,
    /// Number of permutations.
    Npr,
}

impl Builtin {
    /// The number of arguments the built-in expects.
    ///
    /// Calls with any other arity must spell out their arguments in
    /// parentheses; single-argument builtins may instead bind the
    /// expression that follows them. `\round`'s optional place count and
    /// `\log`/`\sqrt` extras live in the call's parameter slot, not here.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Ncr | Self::Npr => 2,
            _ => 1,
        }
    }
}

impl std::fmt::Display for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sec => "sec",
            Self::Csc => "csc",
            Self::Cot => "cot",
            Self::Arcsin => "arcsin",
            Self::Arccos => "arccos",
            Self::Arctan => "arctan",
            Self::Arcsec => "arcsec",
            Self::Arccsc => "arccsc",
            Self::Arccot => "arccot",
            Self::Abs => "abs",
            Self::Sqrt => "sqrt",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Round => "round",
            Self::Fact => "fact",
            Self::Ncr => "nCr",
            Self::Npr => "nPr",
        };
        write!(f, "{name}")
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Assign => "=",
        };
        write!(f, "{operator}")
    }
}
