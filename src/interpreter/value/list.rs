use super::scalar::Quantity;

/// An ordered collection of quantities, written as `[a, b, c]`.
///
/// Lists have no unit of their own; each element carries its own dimension
/// vector.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityList {
    pub elements: Vec<Quantity>,
}

impl QuantityList {
    /// Applies `op` to every element.
    #[must_use]
    pub fn map(&self, op: impl Fn(Quantity) -> Quantity) -> Self {
        Self { elements: self.elements.iter().map(|&element| op(element)).collect() }
    }

    /// Combines two lists elementwise.
    ///
    /// The result is as long as the shorter operand; surplus elements of
    /// the longer list are dropped.
    #[must_use]
    pub fn zip(&self, rhs: &Self, op: impl Fn(Quantity, Quantity) -> Quantity) -> Self {
        Self { elements: self.elements
                             .iter()
                             .zip(&rhs.elements)
                             .map(|(&left, &right)| op(left, right))
                             .collect() }
    }
}
