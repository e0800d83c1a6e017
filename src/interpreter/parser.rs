/// Cursor management and the precedence climb.
///
/// Contains the `Parser` type, the binding power table, and the main
/// expression loop. Adjacent factors with no operator between them are
/// joined by implicit multiplication here.
pub mod core;

/// Atom parsing.
///
/// Handles everything a factor can start with: literals, identifiers and
/// user-defined calls, parenthesised groups, absolute-value bars, list
/// literals, and the prefix and postfix unary operators.
pub mod atom;

/// Builtin call parsing.
///
/// Implements the LaTeX command forms: `\frac`, `\sqrt` with an optional
/// root index, `\log` with an optional subscript base, and the generic
/// builtin call with its optional exponent and argument list.
pub mod function;

pub use self::core::{ParseResult, ParsedExpression, Parser};
