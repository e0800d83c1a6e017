//! The seven-dimensional exponent vector that tracks SI base dimensions
//! through every arithmetic operation.

use std::ops::{Div, Mul};

/// Exponents of the seven SI base dimensions carried by a quantity.
///
/// The components are, in order: metre, second, kilogram, ampere, kelvin,
/// mole and candela. A value of `[1, -2, 1, 0, 0, 0, 0]` therefore reads
/// as kg⋅m⋅s⁻², the newton.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitVector(pub [i8; 7]);

impl UnitVector {
    /// The unit vector of a plain number.
    pub const DIMENSIONLESS: Self = Self([0; 7]);

    pub const METRE:    Self = Self([1, 0, 0, 0, 0, 0, 0]);
    pub const SECOND:   Self = Self([0, 1, 0, 0, 0, 0, 0]);
    pub const KILOGRAM: Self = Self([0, 0, 1, 0, 0, 0, 0]);
    pub const AMPERE:   Self = Self([0, 0, 0, 1, 0, 0, 0]);
    pub const KELVIN:   Self = Self([0, 0, 0, 0, 1, 0, 0]);
    pub const MOLE:     Self = Self([0, 0, 0, 0, 0, 1, 0]);
    pub const CANDELA:  Self = Self([0, 0, 0, 0, 0, 0, 1]);

    pub const HERTZ:   Self = Self([0, -1, 0, 0, 0, 0, 0]);
    pub const NEWTON:  Self = Self([1, -2, 1, 0, 0, 0, 0]);
    pub const PASCAL:  Self = Self([-1, -2, 1, 0, 0, 0, 0]);
    pub const JOULE:   Self = Self([2, -2, 1, 0, 0, 0, 0]);
    pub const WATT:    Self = Self([2, -3, 1, 0, 0, 0, 0]);
    pub const COULOMB: Self = Self([0, 1, 0, 1, 0, 0, 0]);
    pub const VOLT:    Self = Self([2, -3, 1, -1, 0, 0, 0]);
    pub const FARAD:   Self = Self([-2, 4, -1, 2, 0, 0, 0]);
    pub const OHM:     Self = Self([2, -3, 1, -2, 0, 0, 0]);
    pub const SIEMENS: Self = Self([-2, 3, -1, 2, 0, 0, 0]);
    pub const WEBER:   Self = Self([2, -2, 1, -1, 0, 0, 0]);
    pub const TESLA:   Self = Self([0, -2, 1, -1, 0, 0, 0]);
    pub const HENRY:   Self = Self([2, -2, 1, -2, 0, 0, 0]);

    /// Returns `true` if every dimension exponent is zero.
    ///
    /// ## Example
    /// ```
    /// use unima::units::UnitVector;
    ///
    /// assert!(UnitVector::DIMENSIONLESS.is_dimensionless());
    /// assert!(!UnitVector::METRE.is_dimensionless());
    /// ```
    #[must_use]
    pub fn is_dimensionless(self) -> bool {
        self == Self::DIMENSIONLESS
    }

    /// Combines the unit vectors of the two sides of an addition or
    /// subtraction.
    ///
    /// Adding quantities of the same dimension keeps that dimension.
    /// Adding quantities of different dimensions has no physical meaning,
    /// so the result collapses to [`UnitVector::DIMENSIONLESS`].
    ///
    /// # Parameters
    /// - `rhs` - The unit vector of the other operand.
    #[must_use]
    pub fn merged(self, rhs: Self) -> Self {
        if self == rhs {
            self
        } else {
            Self::DIMENSIONLESS
        }
    }

    /// Returns the unit vector of a quantity raised to a dimensionless
    /// exponent, scaling every dimension exponent by `exponent`.
    ///
    /// Fractional results truncate towards zero, so `\m^{0.5}` stays
    /// dimensionless while `\m^{2.5}` becomes an area.
    #[must_use]
    pub fn powf(self, exponent: f64) -> Self {
        let mut scaled = [0_i8; 7];
        for (target, dimension) in scaled.iter_mut().zip(self.0) {
            *target = truncate_exponent(f64::from(dimension) * exponent);
        }
        Self(scaled)
    }

    /// Returns the unit vector of a quantity raised to a *dimensioned*
    /// exponent, multiplying the dimension exponents componentwise.
    ///
    /// A dimensionless `exponent` zeroes the result; that case is normally
    /// routed to [`UnitVector::powf`] instead.
    #[must_use]
    pub fn pow_unit(self, exponent: Self) -> Self {
        if exponent.is_dimensionless() {
            return Self::DIMENSIONLESS;
        }
        let mut product = [0_i8; 7];
        for (index, target) in product.iter_mut().enumerate() {
            *target = self.0[index].saturating_mul(exponent.0[index]);
        }
        Self(product)
    }
}

/// The unit vector of a product: dimension exponents add.
impl Mul for UnitVector {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut summed = [0_i8; 7];
        for (index, target) in summed.iter_mut().enumerate() {
            *target = self.0[index].saturating_add(rhs.0[index]);
        }
        Self(summed)
    }
}

/// The unit vector of a quotient: dimension exponents subtract.
impl Div for UnitVector {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let mut difference = [0_i8; 7];
        for (index, target) in difference.iter_mut().enumerate() {
            *target = self.0[index].saturating_sub(rhs.0[index]);
        }
        Self(difference)
    }
}

/// Truncates a scaled dimension exponent back into the `i8` range.
#[allow(clippy::cast_possible_truncation)]
fn truncate_exponent(value: f64) -> i8 {
    value as i8
}
