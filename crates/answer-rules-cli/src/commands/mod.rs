//! CLI command implementations.

mod check;
mod classify;
mod rules;
mod values;

pub use check::{run_check, CheckArgs};
pub use classify::{run_classify, ClassifyArgs};
pub use rules::{run_rules, RulesArgs};
