//! # unima
//!
//! unima is a mathematical expression interpreter written in Rust.
//! It parses, analyzes, and evaluates LaTeX-style expressions with support
//! for SI dimension tracking, unit conversion, complex arithmetic,
//! significant figures, and more.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::{Context, Expression},
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for all supported constructs.
/// - Names the built-in functions and their arities.
/// - Enables extensible and robust handling of parsed code.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an expression. It standardizes error reporting and carries
/// detailed information about failures, including error kinds, descriptions,
/// and source positions for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches offending tokens and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Stores physics formulas and searches them by dimension.
///
/// This module holds a table of named physics formulas, each describing its
/// variables with their dimensions, and a searcher that suggests which
/// formulas can produce a target dimension from a pool of available ones.
/// Suggestions may chain substitutions when a formula's inputs are not all
/// directly available.
///
/// # Responsibilities
/// - Declares the formula and variable records and the static table.
/// - Scores candidate formulas by coverage and utilization of the pool.
/// - Resolves missing inputs through substituted helper formulas.
pub mod formula;
/// Orchestrates the entire process of expression execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for expression evaluation. It exposes the
/// public API for interpreting single expressions or whole batches.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user input.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Renders computed results back into LaTeX.
///
/// This module formats evaluation output for display: numbers in plain,
/// scientific, or significant-figure notation, and dimension vectors as
/// LaTeX unit expressions built from base and derived SI symbols.
///
/// # Responsibilities
/// - Formats values with an optional significant-figure count.
/// - Chooses between plain and scientific notation by magnitude.
/// - Renders dimension vectors with the simplest available unit symbols.
pub mod latex;
/// Defines SI dimension vectors and the unit tables.
///
/// This module declares the seven-dimensional exponent vector attached to
/// every quantity, arithmetic on it, and the tables mapping unit names and
/// metric prefixes to scale factors and dimensions.
///
/// # Responsibilities
/// - Defines the dimension vector type and common derived constants.
/// - Combines dimensions under multiplication, division, and powers.
/// - Resolves unit names, with optional prefixes, to scaled quantities.
pub mod units;
/// General utilities for safe numeric conversion and helpers.
///
/// This module provides reusable helpers and conversion routines that are
/// used throughout the interpreter, parser, and evaluator. These include
/// safe conversions between integer and floating-point types, and any
/// general-purpose functions not specific to a single phase.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u64`, `usize`, and `f64` without silent
///   data loss.
/// - Provide general utility functions used in multiple modules.
pub mod util;

/// Evaluates every expression in the provided source string.
///
/// This function splits the source into one slot per line or
/// semicolon-separated segment and evaluates them as a single batch:
/// assignments made by earlier slots are visible to later ones, and `ans`
/// always names the most recent result. A slot may end in ` @ ` followed by
/// a unit source, in which case its result is converted to that unit for
/// display. The returned vector holds one result per slot, in input order.
///
/// # Examples
/// ```
/// use unima::get_results;
///
/// // The assignment is visible to the second slot.
/// let results = get_results("x = 5; x^2");
/// assert_eq!(format!("{}", results[1].as_ref().unwrap()), "25");
///
/// // Example with an intentional error (unknown variable).
/// let results = get_results("y + 1"); // 'y' is not defined
/// assert!(results[0].is_err());
/// ```
#[must_use]
pub fn get_results(source: &str) -> Vec<Result<Value, Error>> {
    let expressions: Vec<Expression> = source
        .lines()
        .flat_map(|line| line.split(';'))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Expression::from_line)
        .collect();

    Context::new().evaluate_expression_list(&expressions)
}
