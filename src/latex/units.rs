use crate::units::UnitVector;

/// Base unit symbols in dimension-vector order.
const BASE_SYMBOLS: [&str; 7] = ["m", "s", "kg", "A", "K", "mol", "cd"];

/// Derived units eligible for compact display, tried in table order.
const DERIVED_UNITS: [(&str, UnitVector); 13] = [
    ("Hz", UnitVector::HERTZ),
    ("N", UnitVector::NEWTON),
    ("Pa", UnitVector::PASCAL),
    ("J", UnitVector::JOULE),
    ("W", UnitVector::WATT),
    ("C", UnitVector::COULOMB),
    ("V", UnitVector::VOLT),
    ("F", UnitVector::FARAD),
    ("Ω", UnitVector::OHM),
    ("S", UnitVector::SIEMENS),
    ("Wb", UnitVector::WEBER),
    ("T", UnitVector::TESLA),
    ("H", UnitVector::HENRY),
];

/// A candidate spelling, as factor lists above and below the fraction bar.
struct UnitParts {
    numerator:   Vec<String>,
    denominator: Vec<String>,
}

impl UnitParts {
    fn complexity(&self) -> usize {
        self.numerator.len() + self.denominator.len()
    }
}

/// Renders a dimension vector as LaTeX.
///
/// An exact derived unit wins outright. Otherwise the plain base-unit
/// spelling competes against spellings that pull one derived unit into
/// the numerator or denominator, and against a pure ratio of two derived
/// units; whichever uses the fewest factors wins, earlier table entries
/// breaking ties.
///
/// ## Example
/// ```
/// use unima::{latex::unit_to_latex, units::UnitVector};
///
/// assert_eq!(unit_to_latex(UnitVector::NEWTON), r"\mathrm{N}");
/// assert_eq!(unit_to_latex(UnitVector::DIMENSIONLESS), "1");
/// ```
#[must_use]
pub fn unit_to_latex(unit: UnitVector) -> String {
    for (symbol, dimensions) in DERIVED_UNITS {
        if unit == dimensions {
            return format!(r"\mathrm{{{symbol}}}");
        }
    }

    let mut best = base_parts(unit);

    for (symbol, dimensions) in DERIVED_UNITS {
        let remaining = base_parts(unit / dimensions);
        let mut numerator = vec![format!(r"\mathrm{{{symbol}}}")];
        numerator.extend(remaining.numerator);

        let candidate = UnitParts { numerator,
                                    denominator: remaining.denominator };
        if candidate.complexity() < best.complexity() {
            best = candidate;
        }
    }

    for (symbol, dimensions) in DERIVED_UNITS {
        let remaining = base_parts(unit * dimensions);
        let mut denominator = vec![format!(r"\mathrm{{{symbol}}}")];
        denominator.extend(remaining.denominator);

        let candidate = UnitParts { numerator: remaining.numerator,
                                    denominator };
        if candidate.complexity() < best.complexity() {
            best = candidate;
        }
    }

    for (upper, upper_dimensions) in DERIVED_UNITS {
        for (lower, lower_dimensions) in DERIVED_UNITS {
            if unit == upper_dimensions / lower_dimensions && best.complexity() > 2 {
                best = UnitParts { numerator:   vec![format!(r"\mathrm{{{upper}}}")],
                                   denominator: vec![format!(r"\mathrm{{{lower}}}")], };
            }
        }
    }

    render(&best)
}

/// Spells a dimension vector with base units only.
fn base_parts(unit: UnitVector) -> UnitParts {
    let mut numerator = Vec::new();
    let mut denominator = Vec::new();

    for (symbol, exponent) in BASE_SYMBOLS.iter().zip(unit.0) {
        if exponent > 0 {
            numerator.push(power(symbol, exponent.unsigned_abs()));
        } else if exponent < 0 {
            denominator.push(power(symbol, exponent.unsigned_abs()));
        }
    }

    UnitParts { numerator,
                denominator }
}

fn power(symbol: &str, exponent: u8) -> String {
    if exponent == 1 {
        format!(r"\mathrm{{{symbol}}}")
    } else {
        format!(r"\mathrm{{{symbol}}}^{{{exponent}}}")
    }
}

fn render(parts: &UnitParts) -> String {
    if parts.numerator.is_empty() && parts.denominator.is_empty() {
        return "1".to_string();
    }

    let numerator = parts.numerator.join(r" \cdot ");
    if parts.denominator.is_empty() {
        return numerator;
    }

    let denominator = parts.denominator.join(r" \cdot ");
    if parts.numerator.is_empty() {
        return format!(r"\frac{{1}}{{{denominator}}}");
    }
    format!(r"\frac{{{numerator}}}{{{denominator}}}")
}

#[cfg(test)]
mod tests {
    use super::unit_to_latex;
    use crate::units::UnitVector;

    #[test]
    fn derived_units_match_exactly() {
        assert_eq!(unit_to_latex(UnitVector::NEWTON), r"\mathrm{N}");
        assert_eq!(unit_to_latex(UnitVector::HERTZ), r"\mathrm{Hz}");
        assert_eq!(unit_to_latex(UnitVector::OHM), r"\mathrm{Ω}");
    }

    #[test]
    fn dimensionless_renders_as_one() {
        assert_eq!(unit_to_latex(UnitVector::DIMENSIONLESS), "1");
    }

    #[test]
    fn base_units_render_with_exponents() {
        assert_eq!(unit_to_latex(UnitVector::METRE), r"\mathrm{m}");
        assert_eq!(unit_to_latex(UnitVector([2, 0, 0, 0, 0, 0, 0])), r"\mathrm{m}^{2}");
        assert_eq!(unit_to_latex(UnitVector([1, -1, 0, 0, 0, 0, 0])),
                   r"\frac{\mathrm{m}}{\mathrm{s}}");
        assert_eq!(unit_to_latex(UnitVector([1, -2, 0, 0, 0, 0, 0])),
                   r"\frac{\mathrm{m}}{\mathrm{s}^{2}}");
    }

    #[test]
    fn derived_factor_shortens_the_numerator() {
        // J.s beats m^2.kg/s for angular momentum.
        assert_eq!(unit_to_latex(UnitVector([2, -1, 1, 0, 0, 0, 0])),
                   r"\mathrm{J} \cdot \mathrm{s}");
        // V/m beats kg.m/(s^3.A) for electric field strength.
        assert_eq!(unit_to_latex(UnitVector([1, -3, 1, -1, 0, 0, 0])),
                   r"\frac{\mathrm{V}}{\mathrm{m}}");
    }

    #[test]
    fn derived_factor_shortens_the_denominator() {
        assert_eq!(unit_to_latex(UnitVector([-1, 2, -1, 0, 0, 0, 0])), r"\frac{1}{\mathrm{N}}");
        assert_eq!(unit_to_latex(UnitVector([1, 1, -1, 0, 0, 0, 0])),
                   r"\frac{1}{\mathrm{Pa} \cdot \mathrm{s}}");
        assert_eq!(unit_to_latex(UnitVector([1, -1, 0, -1, 0, 0, 0])),
                   r"\frac{\mathrm{m}}{\mathrm{C}}");
    }

    #[test]
    fn ratio_of_derived_units_wins_when_nothing_shorter_exists() {
        // m^2.A/s has no spelling under three factors except W/T.
        assert_eq!(unit_to_latex(UnitVector([2, -1, 0, 1, 0, 0, 0])),
                   r"\frac{\mathrm{W}}{\mathrm{T}}");
    }

    #[test]
    fn mixed_spelling_keeps_every_base_factor() {
        // Specific heat capacity, J/(kg.K).
        assert_eq!(unit_to_latex(UnitVector([2, -2, 0, 0, -1, 0, 0])),
                   r"\frac{\mathrm{m}^{2}}{\mathrm{s}^{2} \cdot \mathrm{K}}");
    }
}
