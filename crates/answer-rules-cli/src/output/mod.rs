//! Output formatting: diagnostics and tables.

mod diagnostic;
pub mod table;

pub use diagnostic::{ClassifyDiagnostic, ValueDiagnostic};
