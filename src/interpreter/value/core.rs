use std::fmt;

use crate::{
    ast::Expr,
    interpreter::value::{list::QuantityList, scalar::Quantity},
};

/// A user-defined function captured by an assignment like `f(x) = x^2 + 1`.
///
/// The body is stored unevaluated and re-evaluated on every call with the
/// parameters bound to the call arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFunction {
    pub name:   String,
    pub params: Vec<String>,
    pub body:   Expr,
}

/// Represents a runtime value of the evaluator.
///
/// This enum models all the possible types an expression can evaluate to:
/// single quantities, lists of quantities, truth values, and function
/// definitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single quantity, possibly complex, possibly dimensioned.
    Scalar(Quantity),
    /// An ordered list of quantities.
    List(QuantityList),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A function definition, produced by assignments like `f(x) = x^2`.
    Function(UserFunction),
}

impl From<Quantity> for Value {
    fn from(quantity: Quantity) -> Self {
        Self::Scalar(quantity)
    }
}

impl Value {
    /// Returns the contained quantity if the value is [`Scalar`].
    ///
    /// [`Scalar`]: Value::Scalar
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Quantity> {
        match self {
            Self::Scalar(quantity) => Some(quantity),
            _ => None,
        }
    }

    /// Returns `true` if the value is [`List`].
    ///
    /// [`List`]: Value::List
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(..))
    }

    /// Adds two values.
    ///
    /// Scalars broadcast over lists, two lists combine elementwise up to
    /// the shorter length, and operand combinations with no numeric
    /// meaning yield the zero scalar.
    #[must_use]
    pub fn add(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Self::Scalar(left), Self::Scalar(right)) => Self::Scalar(*left + *right),
            (Self::List(left), Self::Scalar(right)) => Self::List(left.map(|element| element + *right)),
            (Self::Scalar(left), Self::List(right)) => Self::List(right.map(|element| *left + element)),
            (Self::List(left), Self::List(right)) => Self::List(left.zip(right, |a, b| a + b)),
            _ => Self::Scalar(Quantity::ZERO),
        }
    }

    /// Subtracts `rhs` from this value, broadcasting like [`Value::add`].
    #[must_use]
    pub fn sub(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Self::Scalar(left), Self::Scalar(right)) => Self::Scalar(*left - *right),
            (Self::List(left), Self::Scalar(right)) => Self::List(left.map(|element| element - *right)),
            (Self::Scalar(left), Self::List(right)) => Self::List(right.map(|element| *left - element)),
            (Self::List(left), Self::List(right)) => Self::List(left.zip(right, |a, b| a - b)),
            _ => Self::Scalar(Quantity::ZERO),
        }
    }

    /// Multiplies two values, broadcasting like [`Value::add`].
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Self::Scalar(left), Self::Scalar(right)) => Self::Scalar(*left * *right),
            (Self::List(left), Self::Scalar(right)) => Self::List(left.map(|element| element * *right)),
            (Self::Scalar(left), Self::List(right)) => Self::List(right.map(|element| *left * element)),
            (Self::List(left), Self::List(right)) => Self::List(left.zip(right, |a, b| a * b)),
            _ => Self::Scalar(Quantity::ZERO),
        }
    }

    /// Divides this value by `rhs`, broadcasting like [`Value::add`].
    ///
    /// A scalar divided by a list produces the list of reciprocal-style
    /// quotients, one per element.
    #[must_use]
    pub fn div(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Self::Scalar(left), Self::Scalar(right)) => Self::Scalar(*left / *right),
            (Self::List(left), Self::Scalar(right)) => Self::List(left.map(|element| element / *right)),
            (Self::Scalar(left), Self::List(right)) => Self::List(right.map(|element| *left / element)),
            (Self::List(left), Self::List(right)) => Self::List(left.zip(right, |a, b| a / b)),
            _ => Self::Scalar(Quantity::ZERO),
        }
    }

    /// Raises this value to the power of `rhs`.
    ///
    /// A list can be raised to a scalar or elementwise to another list. A
    /// scalar raised to a list has no defined meaning and yields the zero
    /// scalar.
    #[must_use]
    pub fn pow(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Self::Scalar(left), Self::Scalar(right)) => Self::Scalar(left.pow(*right)),
            (Self::List(left), Self::Scalar(right)) => Self::List(left.map(|element| element.pow(*right))),
            (Self::List(left), Self::List(right)) => Self::List(left.zip(right, Quantity::pow)),
            _ => Self::Scalar(Quantity::ZERO),
        }
    }

    /// Negates this value, elementwise for lists.
    #[must_use]
    pub fn neg(&self) -> Self {
        match self {
            Self::Scalar(quantity) => Self::Scalar(-*quantity),
            Self::List(list) => Self::List(list.map(|element| -element)),
            _ => Self::Scalar(Quantity::ZERO),
        }
    }

    /// Takes the absolute value, elementwise for lists.
    ///
    /// Booleans map to `1` and `0` so that `|..|` applies to any operand
    /// that can be read as a number.
    #[must_use]
    pub fn abs(&self) -> Self {
        match self {
            Self::Scalar(quantity) => Self::Scalar(quantity.abs()),
            Self::List(list) => Self::List(list.map(Quantity::abs)),
            Self::Bool(truth) => Self::Scalar(Quantity::dimensionless(if *truth { 1.0 } else { 0.0 })),
            Self::Function(_) => Self::Scalar(Quantity::ZERO),
        }
    }

    /// Computes the factorial, elementwise for lists.
    #[must_use]
    pub fn factorial(&self) -> Self {
        match self {
            Self::Scalar(quantity) => Self::Scalar(quantity.factorial()),
            Self::List(list) => Self::List(list.map(Quantity::factorial)),
            _ => Self::Scalar(Quantity::ZERO),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(quantity) => write_quantity(f, quantity),
            Self::List(list) => {
                write!(f, "[")?;

                for (index, element) in list.elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write_quantity(f, element)?;
                }

                write!(f, "]")
            },
            Self::Bool(truth) => write!(f, "{truth}"),
            Self::Function(function) => {
                write!(f, "{}(", function.name)?;

                for (index, param) in function.params.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{param}")?;
                }

                write!(f, ")")
            },
        }
    }
}

fn write_quantity(f: &mut fmt::Formatter<'_>, quantity: &Quantity) -> fmt::Result {
    if quantity.is_complex() {
        write!(f, "{} + {}i", quantity.value, quantity.imag)
    } else {
        write!(f, "{}", quantity.value)
    }
}
