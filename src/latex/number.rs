use crate::util::num;

/// Formats a value for display, switching to `\times10^{n}` scientific
/// notation when the magnitude warrants it.
///
/// A positive `sig_figs` rounds the value to that many significant digits
/// and keeps exactly that many in the output, so `2.0` stays `2.0` rather
/// than collapsing to `2`. A count of zero means the value is exact and
/// prints with up to ten significant digits.
///
/// # Parameters
/// - `value`: the number to format.
/// - `sig_figs`: significant digits to keep, or `0` for exact.
///
/// # Returns
/// The rendered number, e.g. `42`, `3.00\times10^{8}` or `0.025`.
///
/// ## Example
/// ```
/// use unima::latex::value_to_scientific;
///
/// assert_eq!(value_to_scientific(299_792_458.0, 0), "299792458");
/// assert_eq!(value_to_scientific(299_792_458.0, 3), r"3.00\times10^{8}");
/// ```
#[must_use]
pub fn value_to_scientific(value: f64, sig_figs: u8) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }

    let abs_value = value.abs();

    if sig_figs > 0 && abs_value > 0.0 {
        return rounded_display(value, abs_value, i32::from(sig_figs));
    }

    if value == 0.0 {
        return "0".to_string();
    }

    if abs_value >= 5e9 || abs_value < 5e-4 {
        let exponent = num::f64_to_i32_trunc(abs_value.log10().floor());
        let coefficient = value / 10.0_f64.powi(exponent);
        return format!(r"{}\times10^{{{exponent}}}", trimmed_fixed(coefficient));
    }

    if value == value.floor() && abs_value < 1e15 {
        return format!("{}", num::f64_to_i64_trunc(value));
    }

    trimmed_fixed(value)
}

/// Rounds to `sig_figs` significant digits and renders with exactly that
/// many, in scientific notation when the order of magnitude falls outside
/// `[-2, 4]`.
fn rounded_display(value: f64, abs_value: f64, sig_figs: i32) -> String {
    let exponent = num::f64_to_i32_trunc(abs_value.log10().floor());
    let scale = 10.0_f64.powi(sig_figs - 1 - exponent);
    let rounded = (value * scale).round() / scale;
    let rounded_abs = rounded.abs();

    // Rounding can bump the order of magnitude, e.g. 99.7 -> 100.
    let exponent = if rounded_abs > 0.0 {
        num::f64_to_i32_trunc(rounded_abs.log10().floor())
    } else {
        exponent
    };

    if exponent >= 5 || exponent <= -3 {
        let coefficient = rounded / 10.0_f64.powi(exponent);
        let decimals = usize::try_from(sig_figs - 1).unwrap_or_default();
        return format!(r"{coefficient:.decimals$}\times10^{{{exponent}}}");
    }

    let decimals = sig_figs - 1 - exponent;
    if decimals <= 0 {
        return format!("{}", num::f64_to_i64_trunc(rounded.round()));
    }
    let decimals = usize::try_from(decimals).unwrap_or_default();
    format!("{rounded:.decimals$}")
}

/// Fixed-notation rendering with ten significant digits, trailing zeros
/// trimmed.
fn trimmed_fixed(value: f64) -> String {
    let exponent = num::f64_to_i32_trunc(value.abs().log10().floor());
    let decimals = usize::try_from(9 - exponent).unwrap_or_default();
    let mut text = format!("{value:.decimals$}");

    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::value_to_scientific;

    #[test]
    fn exact_values_print_plainly() {
        assert_eq!(value_to_scientific(0.0, 0), "0");
        assert_eq!(value_to_scientific(42.0, 0), "42");
        assert_eq!(value_to_scientific(-17.0, 0), "-17");
        assert_eq!(value_to_scientific(0.25, 0), "0.25");
        assert_eq!(value_to_scientific(1.5, 0), "1.5");
    }

    #[test]
    fn extreme_magnitudes_use_scientific_notation() {
        assert_eq!(value_to_scientific(6.0e9, 0), r"6\times10^{9}");
        assert_eq!(value_to_scientific(1.6e-19, 0), r"1.6\times10^{-19}");
        assert_eq!(value_to_scientific(-2.5e10, 0), r"-2.5\times10^{10}");
        assert_eq!(value_to_scientific(0.0001, 0), r"1\times10^{-4}");
    }

    #[test]
    fn sig_figs_round_and_pad() {
        assert_eq!(value_to_scientific(2.0, 2), "2.0");
        assert_eq!(value_to_scientific(2.456, 2), "2.5");
        assert_eq!(value_to_scientific(1234.0, 2), "1200");
        assert_eq!(value_to_scientific(0.012_345, 3), "0.0123");
    }

    #[test]
    fn sig_figs_switch_to_scientific_outside_window() {
        assert_eq!(value_to_scientific(299_792_458.0, 3), r"3.00\times10^{8}");
        assert_eq!(value_to_scientific(0.000_25, 2), r"2.5\times10^{-4}");
        assert_eq!(value_to_scientific(123_456.0, 2), r"1.2\times10^{5}");
    }

    #[test]
    fn rounding_may_carry_into_the_next_magnitude() {
        assert_eq!(value_to_scientific(99.7, 1), "100");
        assert_eq!(value_to_scientific(0.000_999_6, 3), r"1.00\times10^{-3}");
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert_eq!(value_to_scientific(f64::INFINITY, 0), "inf");
        assert_eq!(value_to_scientific(f64::NAN, 0), "NaN");
    }
}
