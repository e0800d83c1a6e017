use crate::{
    interpreter::value::{Quantity, Value},
    units::UnitVector,
    util::num,
};

/// Natural logarithm.
///
/// A complex operand uses `ln z = ln r + iθ`; a real operand at or below
/// zero produces NaN. The operand's unit is discarded either way.
#[must_use]
pub fn ln(value: Quantity) -> Quantity {
    if value.is_complex() {
        let radius = value.value.hypot(value.imag);
        let theta = value.imag.atan2(value.value);
        return complex(radius.ln(), theta);
    }
    if value.value <= 0.0 {
        return Quantity::dimensionless(f64::NAN);
    }
    Quantity::dimensionless(value.value.ln())
}

/// Sine, complex-aware: `sin(a+bi) = sin a cosh b + i cos a sinh b`.
#[must_use]
pub fn sin(value: Quantity) -> Quantity {
    if value.is_complex() {
        let (a, b) = (value.value, value.imag);
        return complex(a.sin() * b.cosh(), a.cos() * b.sinh());
    }
    Quantity::dimensionless(value.value.sin())
}

/// Cosine, complex-aware: `cos(a+bi) = cos a cosh b - i sin a sinh b`.
#[must_use]
pub fn cos(value: Quantity) -> Quantity {
    if value.is_complex() {
        let (a, b) = (value.value, value.imag);
        return complex(a.cos() * b.cosh(), -a.sin() * b.sinh());
    }
    Quantity::dimensionless(value.value.cos())
}

/// Tangent; complex operands divide `sin z` by `cos z`.
#[must_use]
pub fn tan(value: Quantity) -> Quantity {
    if value.is_complex() {
        return sin(value) / cos(value);
    }
    Quantity::dimensionless(value.value.tan())
}

#[must_use]
pub fn sec(value: f64) -> Quantity {
    Quantity::dimensionless(1.0 / value.cos())
}

#[must_use]
pub fn csc(value: f64) -> Quantity {
    Quantity::dimensionless(1.0 / value.sin())
}

#[must_use]
pub fn cot(value: f64) -> Quantity {
    Quantity::dimensionless(1.0 / value.tan())
}

/// Logarithm of `value` in integer base `base`; base zero falls back to
/// base ten.
///
/// Non-positive values, negative bases and base one have no logarithm and
/// produce NaN.
#[must_use]
pub fn log(value: f64, base: i32) -> Quantity {
    if value <= 0.0 || base < 0 || base == 1 {
        return Quantity::dimensionless(f64::NAN);
    }
    if base == 0 || base == 10 {
        return Quantity::dimensionless(value.log10());
    }
    Quantity::dimensionless(value.ln() / f64::from(base).ln())
}

#[must_use]
pub fn arcsin(value: f64) -> Quantity {
    Quantity::dimensionless(value.asin())
}

#[must_use]
pub fn arccos(value: f64) -> Quantity {
    Quantity::dimensionless(value.acos())
}

#[must_use]
pub fn arctan(value: f64) -> Quantity {
    Quantity::dimensionless(value.atan())
}

/// Reciprocal of the inverse cosine, pairing with [`sec`].
#[must_use]
pub fn arcsec(value: f64) -> Quantity {
    Quantity::dimensionless(1.0 / value.acos())
}

/// Reciprocal of the inverse sine, pairing with [`csc`].
#[must_use]
pub fn arccsc(value: f64) -> Quantity {
    Quantity::dimensionless(1.0 / value.asin())
}

/// Reciprocal of the inverse tangent, pairing with [`cot`].
#[must_use]
pub fn arccot(value: f64) -> Quantity {
    Quantity::dimensionless(1.0 / value.atan())
}

/// Binomial coefficient `C(n, r)` in integer steps.
///
/// Out-of-range `r` yields zero. Multiplying before dividing keeps every
/// intermediate product an exact integer.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ncr(n: f64, r: f64) -> Quantity {
    if r < 0.0 || r > n {
        return Quantity::ZERO;
    }

    let r = if r > n - r { n - r } else { r };
    let mut result = 1_i64;
    for i in 1..=num::f64_to_i64_trunc(r) {
        result *= num::f64_to_i64_trunc(n - i as f64 + 1.0);
        result /= i;
    }
    Quantity::dimensionless(result as f64)
}

/// Number of permutations `P(n, r)`. Out-of-range `r` yields zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn npr(n: f64, r: f64) -> Quantity {
    if r < 0.0 || r > n {
        return Quantity::ZERO;
    }

    let mut result = 1_i64;
    for i in 0..num::f64_to_i64_trunc(r) {
        result *= num::f64_to_i64_trunc(n - i as f64);
    }
    Quantity::dimensionless(result as f64)
}

/// The `index`-th root as a power of its reciprocal, so dimension
/// exponents scale along with the value and lists broadcast.
#[must_use]
pub fn nth_root(value: &Value, index: f64) -> Value {
    value.pow(&Value::Scalar(Quantity::dimensionless(1.0 / index)))
}

/// Rounds towards negative infinity, elementwise for lists.
///
/// The unit survives; the imaginary part and significant figures do not.
#[must_use]
pub fn floor(value: &Value) -> Value {
    map_real(value, f64::floor)
}

/// Rounds towards positive infinity, elementwise for lists.
#[must_use]
pub fn ceil(value: &Value) -> Value {
    map_real(value, f64::ceil)
}

/// Rounds half away from zero at `place` decimal places, elementwise for
/// lists. Negative places round to tens, hundreds and so on.
#[must_use]
pub fn round(value: &Value, place: f64) -> Value {
    let multiplier = 10.0_f64.powf(place);
    map_real(value, move |v| (v * multiplier).round() / multiplier)
}

fn map_real(value: &Value, f: impl Fn(f64) -> f64) -> Value {
    match value {
        Value::Scalar(quantity) => Value::Scalar(Quantity::new(f(quantity.value), quantity.unit)),
        Value::List(list) => Value::List(list.map(|element| Quantity::new(f(element.value), element.unit))),
        _ => Value::Scalar(Quantity::ZERO),
    }
}

const fn complex(value: f64, imag: f64) -> Quantity {
    Quantity { value,
               imag,
               unit: UnitVector::DIMENSIONLESS,
               sig_figs: 0 }
}
