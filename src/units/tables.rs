//! Symbol tables mapping LaTeX unit commands to scale factors and
//! dimension vectors.

use super::vector::UnitVector;

/// Metric prefixes accepted in front of any entry of [`BASE_UNITS`].
///
/// Two-letter prefixes come first so that `da` and `mu` are tried before
/// `d` and `m`.
const PREFIXES: [(&str, f64); 16] = [
    ("da", 1e1),
    ("mu", 1e-6),
    ("a", 1e-18),
    ("f", 1e-15),
    ("p", 1e-12),
    ("n", 1e-9),
    ("m", 1e-3),
    ("c", 1e-2),
    ("d", 1e-1),
    ("h", 1e2),
    ("k", 1e3),
    ("M", 1e6),
    ("G", 1e9),
    ("T", 1e12),
    ("P", 1e15),
    ("E", 1e18),
];

/// Recognised unit symbols with their scale relative to the coherent SI
/// unit of the same dimension.
///
/// The gram scales by `1e-3` because the coherent unit of mass is the
/// kilogram; `\kg` itself is listed so the plain symbol never depends on
/// prefix resolution.
const BASE_UNITS: [(&str, f64, UnitVector); 18] = [
    ("m", 1.0, UnitVector::METRE),
    ("s", 1.0, UnitVector::SECOND),
    ("g", 1e-3, UnitVector::KILOGRAM),
    ("kg", 1.0, UnitVector::KILOGRAM),
    ("A", 1.0, UnitVector::AMPERE),
    ("K", 1.0, UnitVector::KELVIN),
    ("mol", 1.0, UnitVector::MOLE),
    ("cd", 1.0, UnitVector::CANDELA),
    ("Hz", 1.0, UnitVector::HERTZ),
    ("N", 1.0, UnitVector::NEWTON),
    ("Pa", 1.0, UnitVector::PASCAL),
    ("J", 1.0, UnitVector::JOULE),
    ("W", 1.0, UnitVector::WATT),
    ("C", 1.0, UnitVector::COULOMB),
    ("V", 1.0, UnitVector::VOLT),
    ("F", 1.0, UnitVector::FARAD),
    ("Ohm", 1.0, UnitVector::OHM),
    ("S", 1.0, UnitVector::SIEMENS),
];

/// Resolves a complete unit symbol to its scale factor and unit vector.
///
/// A bare base symbol wins over a prefixed reading of the same text, so
/// `cd` is the candela rather than a centi-day. Prefixed symbols resolve
/// only when the remainder after the prefix is a base symbol in full;
/// `km` is accepted, `kmx` is not.
///
/// # Parameters
/// - `symbol` - The unit symbol without its leading backslash.
///
/// # Returns
/// The scale towards the coherent SI unit and the dimension vector, or
/// [`None`] if the symbol is not a recognised unit.
///
/// ## Example
/// ```
/// use unima::units::{lookup, UnitVector};
///
/// assert_eq!(lookup("km"), Some((1e3, UnitVector::METRE)));
/// assert_eq!(lookup("x"), None);
/// ```
#[must_use]
pub fn lookup(symbol: &str) -> Option<(f64, UnitVector)> {
    if let Some(&(_, scale, vector)) = BASE_UNITS.iter().find(|(name, ..)| *name == symbol) {
        return Some((scale, vector));
    }
    for &(prefix, factor) in &PREFIXES {
        if let Some(base) = symbol.strip_prefix(prefix)
            && let Some(&(_, scale, vector)) = BASE_UNITS.iter().find(|(name, ..)| *name == base)
        {
            return Some((factor * scale, vector));
        }
    }
    None
}
