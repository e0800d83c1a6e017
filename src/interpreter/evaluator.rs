/// Core evaluation logic and context management.
///
/// Contains the expression walker, the runtime context with its constant,
/// variable and function tables, and assignment handling.
pub mod core;

/// Builtin function implementations.
///
/// The mathematical behaviour of every builtin: trigonometry, logarithms,
/// roots, rounding, and combinatorics.
pub mod builtin;

/// Function call evaluation.
///
/// Dispatches builtin calls to their implementations and runs
/// user-defined function bodies with their parameters bound.
pub mod function;

/// Batch evaluation.
///
/// Combines value, unit and conversion sources into single parse trees
/// and evaluates whole input sets in order, with unit conversion and
/// display-leaf detection applied to the results.
pub mod batch;

pub use self::batch::Expression;
pub use self::core::{Context, EvalResult};
