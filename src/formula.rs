/// The formula reference table and its record types.
pub mod database;

/// Unit-signature search over the reference table.
pub mod search;

pub use database::{Formula, Variable};
pub use search::FormulaSearcher;
