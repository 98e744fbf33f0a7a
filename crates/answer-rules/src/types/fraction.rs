use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::numeric::gcd;
use crate::parser::{ParseError, parse_fraction};

/// A mixed fraction as typed by a learner: `-1 2/3` is
/// `{ is_negative: true, whole_number: 1, numerator: 2, denominator: 3 }`.
///
/// The shape is preserved exactly as entered. Rules that care about value
/// rather than shape go through [`Fraction::cmp_value`] and friends.
///
/// The denominator must be non-zero. Parsing and deserialization reject a
/// zero denominator; the builder does not check it.
///
/// # Example
///
/// ```
/// use answer_rules::Fraction;
///
/// let half = Fraction::builder().numerator(1).denominator(2).build();
/// let two_quarters = Fraction::builder().numerator(2).denominator(4).build();
///
/// assert!(half.is_equivalent_to(&two_quarters));
/// assert_ne!(half, two_quarters);
/// assert_eq!(two_quarters.to_simplest_form(), half);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Builder, Serialize, Deserialize)]
#[serde(try_from = "FractionFields")]
pub struct Fraction {
    #[builder(default)]
    pub is_negative: bool,

    #[builder(default)]
    pub whole_number: u32,

    #[builder(default)]
    pub numerator: u32,

    #[builder(default = 1)]
    pub denominator: u32,
}

/// Serialized form of a [`Fraction`], validated on conversion.
#[derive(Deserialize)]
struct FractionFields {
    #[serde(default)]
    is_negative: bool,
    #[serde(default)]
    whole_number: u32,
    numerator: u32,
    denominator: u32,
}

impl TryFrom<FractionFields> for Fraction {
    type Error = ParseError;

    fn try_from(fields: FractionFields) -> Result<Self, Self::Error> {
        if fields.denominator == 0 {
            return Err(ParseError::Invalid {
                message: format!("fraction '{}/0' has a zero denominator", fields.numerator),
            });
        }
        Ok(Fraction {
            is_negative: fields.is_negative,
            whole_number: fields.whole_number,
            numerator: fields.numerator,
            denominator: fields.denominator,
        })
    }
}

impl Fraction {
    /// Numerator of the equivalent improper fraction, carrying the sign.
    pub fn improper_numerator(&self) -> i128 {
        let magnitude = i128::from(self.whole_number) * i128::from(self.denominator)
            + i128::from(self.numerator);
        if self.is_negative { -magnitude } else { magnitude }
    }

    /// The signed whole-number part.
    pub fn integer_part(&self) -> i64 {
        let whole = i64::from(self.whole_number);
        if self.is_negative { -whole } else { whole }
    }

    pub fn to_f64(&self) -> f64 {
        let magnitude =
            f64::from(self.whole_number) + f64::from(self.numerator) / f64::from(self.denominator);
        if self.is_negative { -magnitude } else { magnitude }
    }

    /// Orders two fractions by rational value.
    ///
    /// Cross-multiplies in `i128`, so no precision is lost for any `u32` fields.
    pub fn cmp_value(&self, other: &Fraction) -> Ordering {
        let lhs = self.improper_numerator() * i128::from(other.denominator);
        let rhs = other.improper_numerator() * i128::from(self.denominator);
        lhs.cmp(&rhs)
    }

    pub fn is_equivalent_to(&self, other: &Fraction) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }

    /// Divides numerator and denominator by their gcd. Whole number and sign
    /// are kept as entered.
    pub fn to_simplest_form(&self) -> Fraction {
        let divisor = gcd(self.numerator, self.denominator);
        let (Some(numerator), Some(denominator)) = (
            self.numerator.checked_div(divisor),
            self.denominator.checked_div(divisor),
        ) else {
            return *self;
        };
        Fraction {
            numerator,
            denominator,
            ..*self
        }
    }

    pub fn is_in_simplest_form(&self) -> bool {
        *self == self.to_simplest_form()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_negative {
            f.write_str("-")?;
        }
        match (self.whole_number, self.numerator) {
            (whole, 0) => write!(f, "{whole}"),
            (0, numerator) => write!(f, "{numerator}/{}", self.denominator),
            (whole, numerator) => write!(f, "{whole} {numerator}/{}", self.denominator),
        }
    }
}

impl FromStr for Fraction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fraction(s)
    }
}
