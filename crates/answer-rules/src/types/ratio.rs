use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::numeric::gcd;
use crate::parser::{ParseError, parse_ratio_expression};

/// A ratio such as `2:3:5`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatioExpression {
    pub components: Vec<u32>,
}

impl RatioExpression {
    pub fn new(components: impl Into<Vec<u32>>) -> Self {
        Self {
            components: components.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The term at a 1-based position.
    pub fn term(&self, position: u32) -> Option<u32> {
        let index = usize::try_from(position).ok()?.checked_sub(1)?;
        self.components.get(index).copied()
    }

    /// Every component divided by the gcd of all components.
    ///
    /// A ratio of all zeros is returned unchanged.
    pub fn to_simplest_form(&self) -> RatioExpression {
        let divisor = self.components.iter().copied().fold(0, gcd);
        if divisor == 0 {
            return self.clone();
        }
        RatioExpression {
            components: self
                .components
                .iter()
                .filter_map(|c| c.checked_div(divisor))
                .collect(),
        }
    }

    pub fn is_equivalent_to(&self, other: &RatioExpression) -> bool {
        self.to_simplest_form() == other.to_simplest_form()
    }
}

impl Display for RatioExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let terms: Vec<String> = self.components.iter().map(ToString::to_string).collect();
        f.write_str(&terms.join(":"))
    }
}

impl FromStr for RatioExpression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ratio_expression(s)
    }
}
