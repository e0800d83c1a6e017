/// Unit symbol tables.
///
/// Maps LaTeX unit commands such as `\km` or `\Pa` to a scale factor and a
/// dimension vector. Handles metric prefixes and the gram/kilogram scale
/// offset.
pub mod tables;
/// Dimension vector arithmetic.
///
/// Defines the `UnitVector` type holding one exponent per SI base dimension
/// and the combination rules applied by every arithmetic operator.
pub mod vector;

pub use tables::lookup;
pub use vector::UnitVector;
