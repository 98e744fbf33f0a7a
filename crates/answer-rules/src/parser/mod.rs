//! Parsers for answer values written as text.
//!
//! Authoring tools and the CLI describe fractions, ratios, and quantities as
//! short strings (`"-1 2/3"`, `"2:3"`, `"2.5 km/hr"`). These parsers turn them
//! into the value model's native payloads.

mod error;
mod values;

pub use error::ParseError;
pub use values::{
    parse_answer_value, parse_fraction, parse_number_with_units, parse_ratio_expression,
};
