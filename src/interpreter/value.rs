/// Quantity list representation.
///
/// Defines the `QuantityList` type used for the elements of a `Value::List`,
/// together with the broadcasting helpers the arithmetic dispatch is built
/// on. Combining two lists truncates to the shorter operand.
pub mod list;
/// Scalar quantity support.
///
/// Defines the `Quantity` type: a complex value annotated with a dimension
/// vector and a significant-figure count. Includes implementations for the
/// arithmetic operators, absolute value, and factorial, each of which also
/// combines the unit vectors of its operands.
pub mod scalar;

/// Top-level value dispatch.
///
/// Defines the `Value` enum the evaluator produces, the `UserFunction`
/// record stored on assignment, and the scalar and list broadcasting rules
/// shared by every binary operation.
pub mod core;

pub use self::core::{UserFunction, Value};
pub use list::QuantityList;
pub use scalar::Quantity;
