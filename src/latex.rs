/// Number display formatting.
///
/// Renders values as plain decimals or in `\times10^{n}` scientific
/// notation, honouring significant-figure counts where present.
pub mod number;

/// Unit display formatting.
///
/// Renders dimension vectors back into LaTeX, preferring derived unit
/// symbols over strings of base units where that reads shorter.
pub mod units;

pub use number::value_to_scientific;
pub use units::unit_to_latex;
