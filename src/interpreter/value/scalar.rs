use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{units::UnitVector, util::num};

/// A single physical quantity.
///
/// Every scalar the evaluator touches is one of these: a complex value
/// (`value + imag·i`) annotated with the dimension vector of its unit and
/// the number of significant figures it carries. Plain numbers are simply
/// quantities whose unit vector is all zeroes.
///
/// A `sig_figs` of `0` means "exact": constants, unit literals and
/// intermediate results that should not limit rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub value:    f64,
    pub imag:     f64,
    pub unit:     UnitVector,
    pub sig_figs: u8,
}

impl Quantity {
    /// The exact, dimensionless zero.
    pub const ZERO: Self = Self::dimensionless(0.0);

    /// Creates an exact, dimensionless quantity.
    #[must_use]
    pub const fn dimensionless(value: f64) -> Self {
        Self { value,
               imag: 0.0,
               unit: UnitVector::DIMENSIONLESS,
               sig_figs: 0 }
    }

    /// Creates an exact quantity with the given unit vector.
    #[must_use]
    pub const fn new(value: f64, unit: UnitVector) -> Self {
        Self { value,
               imag: 0.0,
               unit,
               sig_figs: 0 }
    }

    /// Returns the same quantity annotated with a significant-figure count.
    #[must_use]
    pub const fn with_sig_figs(self, sig_figs: u8) -> Self {
        Self { sig_figs, ..self }
    }

    /// Returns `true` if the imaginary part is non-zero.
    #[must_use]
    pub fn is_complex(&self) -> bool {
        self.imag != 0.0
    }

    /// Raises this quantity to the power of `rhs`.
    ///
    /// A dimensionless real exponent scales the dimension exponents of the
    /// base, so `(5\m)^2` is an area. If either side is complex the result
    /// is computed in polar form as `z^w = exp(w ln z)`.
    #[must_use]
    pub fn pow(self, rhs: Self) -> Self {
        let unit = if rhs.unit.is_dimensionless() {
            self.unit.powf(rhs.value)
        } else {
            self.unit.pow_unit(rhs.unit)
        };
        let (value, imag) = if self.is_complex() || rhs.is_complex() {
            let radius = self.value.hypot(self.imag);
            let theta = self.imag.atan2(self.value);
            let log_radius = radius.ln();
            let real_exponent = rhs.value * log_radius - rhs.imag * theta;
            let imag_exponent = rhs.value * theta + rhs.imag * log_radius;
            let magnitude = real_exponent.exp();
            (magnitude * imag_exponent.cos(), magnitude * imag_exponent.sin())
        } else {
            (self.value.powf(rhs.value), 0.0)
        };
        Self { value,
               imag,
               unit,
               sig_figs: combine_sig_figs(self.sig_figs, rhs.sig_figs) }
    }

    /// Returns the absolute value, or the magnitude for complex quantities.
    ///
    /// The unit is kept; the result is real and exact.
    #[must_use]
    pub fn abs(self) -> Self {
        let magnitude = if self.is_complex() {
            self.value.hypot(self.imag)
        } else {
            self.value.abs()
        };
        Self::new(magnitude, self.unit)
    }

    /// Computes the factorial of the real part, truncated to an integer.
    ///
    /// The result is a real, exact, dimensionless quantity. Values below
    /// two (including negatives and NaN) produce `1`. The running product
    /// stops once it overflows to infinity.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn factorial(self) -> Self {
        let steps = num::f64_to_u64_trunc(self.value);
        let mut product = 1.0_f64;
        for step in 2..=steps {
            product *= step as f64;
            if !product.is_finite() {
                break;
            }
        }
        Self::dimensionless(product)
    }
}

/// Picks the significant-figure count of a combination of two quantities.
///
/// `0` marks an exact value and never limits the other side.
const fn combine_sig_figs(a: u8, b: u8) -> u8 {
    if a == 0 {
        b
    } else if b == 0 {
        a
    } else if a < b {
        a
    } else {
        b
    }
}

impl Add for Quantity {
    type Output = Self;

    /// Adds componentwise. Mismatched units collapse to dimensionless.
    fn add(self, rhs: Self) -> Self {
        Self { value:    self.value + rhs.value,
               imag:     self.imag + rhs.imag,
               unit:     self.unit.merged(rhs.unit),
               sig_figs: combine_sig_figs(self.sig_figs, rhs.sig_figs) }
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { value:    self.value - rhs.value,
               imag:     self.imag - rhs.imag,
               unit:     self.unit.merged(rhs.unit),
               sig_figs: combine_sig_figs(self.sig_figs, rhs.sig_figs) }
    }
}

impl Mul for Quantity {
    type Output = Self;

    /// Multiplies as complex numbers; dimension exponents add.
    ///
    /// The real-only fast path avoids the `0 · ∞` NaN that the full
    /// complex product would produce for infinite real operands.
    fn mul(self, rhs: Self) -> Self {
        let (value, imag) = if self.is_complex() || rhs.is_complex() {
            (self.value * rhs.value - self.imag * rhs.imag,
             self.value * rhs.imag + self.imag * rhs.value)
        } else {
            (self.value * rhs.value, 0.0)
        };
        Self { value,
               imag,
               unit: self.unit * rhs.unit,
               sig_figs: combine_sig_figs(self.sig_figs, rhs.sig_figs) }
    }
}

impl Div for Quantity {
    type Output = Self;

    /// Divides by the complex conjugate; dimension exponents subtract.
    fn div(self, rhs: Self) -> Self {
        let (value, imag) = if self.is_complex() || rhs.is_complex() {
            let denominator = rhs.value * rhs.value + rhs.imag * rhs.imag;
            ((self.value * rhs.value + self.imag * rhs.imag) / denominator,
             (self.imag * rhs.value - self.value * rhs.imag) / denominator)
        } else {
            (self.value / rhs.value, 0.0)
        };
        Self { value,
               imag,
               unit: self.unit / rhs.unit,
               sig_figs: combine_sig_figs(self.sig_figs, rhs.sig_figs) }
    }
}

impl Neg for Quantity {
    type Output = Self;

    fn neg(self) -> Self {
        Self { value: -self.value,
               imag: -self.imag,
               ..self }
    }
}
