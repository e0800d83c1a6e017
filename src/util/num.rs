/// Truncates an `f64` towards zero into a `u64`.
///
/// Follows the saturating semantics of `as`: NaN and negative values map
/// to `0`, values beyond `u64::MAX` saturate. Used where an expression
/// value feeds an iteration count, such as the factorial.
///
/// ## Example
/// ```
/// use unima::util::num::f64_to_u64_trunc;
///
/// assert_eq!(f64_to_u64_trunc(7.9), 7);
/// assert_eq!(f64_to_u64_trunc(-3.0), 0);
/// assert_eq!(f64_to_u64_trunc(f64::NAN), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_trunc(value: f64) -> u64 {
    value as u64
}

/// Truncates an `f64` towards zero into an `i64`.
///
/// Follows the saturating semantics of `as`: NaN maps to `0`, values
/// outside the `i64` range saturate. Used by the combinatoric builtins,
/// which operate on integer views of their arguments.
///
/// ## Example
/// ```
/// use unima::util::num::f64_to_i64_trunc;
///
/// assert_eq!(f64_to_i64_trunc(-2.7), -2);
/// assert_eq!(f64_to_i64_trunc(41.99), 41);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_trunc(value: f64) -> i64 {
    value as i64
}

/// Truncates an `f64` towards zero into an `i32`, saturating like `as`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i32_trunc(value: f64) -> i32 {
    value as i32
}

/// Converts a `usize` count into a `u8`, clamping at `u8::MAX`.
#[must_use]
pub fn usize_to_u8_saturating(value: usize) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}
