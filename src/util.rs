/// Numeric conversion helpers.
///
/// This module provides the truncating conversions between `f64` and the
/// integer types that the factorial, combinatoric, and formatting paths
/// need. All helpers are total: NaN and out-of-range inputs map to a
/// defined value instead of panicking.
pub mod num;
