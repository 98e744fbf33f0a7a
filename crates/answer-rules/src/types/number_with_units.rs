use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Fraction;
use super::numeric::{approximately_equals, relatively_equals};
use crate::parser::{ParseError, parse_number_with_units};

/// The numeric part of a [`NumberWithUnits`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Number {
    Real(f64),
    Fraction(Fraction),
}

impl Number {
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Real(real) => *real,
            Number::Fraction(fraction) => fraction.to_f64(),
        }
    }

    /// Same shape and equal value: reals within tolerance, fractions field by
    /// field.
    pub fn is_equal_to(&self, other: &Number) -> bool {
        match (self, other) {
            (Number::Real(a), Number::Real(b)) => approximately_equals(*a, *b),
            (Number::Fraction(a), Number::Fraction(b)) => a == b,
            (Number::Real(_), Number::Fraction(_)) | (Number::Fraction(_), Number::Real(_)) => {
                false
            }
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Number::Real(real) => write!(f, "{real}"),
            Number::Fraction(fraction) => write!(f, "{fraction}"),
        }
    }
}

/// A single unit raised to an integer power, e.g. `m^2` or `s^-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    pub unit: String,
    #[serde(default = "default_exponent")]
    pub exponent: i32,
}

fn default_exponent() -> i32 {
    1
}

impl Unit {
    pub fn new(unit: impl Into<String>, exponent: i32) -> Self {
        Self {
            unit: unit.into(),
            exponent,
        }
    }
}

/// A quantity such as `2.5 km/hr` or `1/2 kg`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberWithUnits {
    pub number: Number,
    #[serde(default)]
    pub units: Vec<Unit>,
}

/// Unit exponents keyed by unit name.
///
/// Exponents are widened past the `i32` of a single [`Unit`] so combining
/// units never overflows.
pub type Dimensions = BTreeMap<String, i64>;

impl NumberWithUnits {
    pub fn new(number: Number, units: Vec<Unit>) -> Self {
        Self { number, units }
    }

    pub fn value(&self) -> f64 {
        self.number.to_f64()
    }

    /// Units combined by name with summed exponents; zero exponents dropped.
    ///
    /// `m * m / s` and `m^2 s^-1` have the same canonical units.
    pub fn canonical_units(&self) -> Dimensions {
        collect_dimensions(
            self.units
                .iter()
                .map(|u| (u.unit.as_str(), i64::from(u.exponent))),
        )
    }

    /// The quantity expressed in base units.
    ///
    /// Units outside the conversion table are treated as their own base unit
    /// with a scale of 1.
    pub fn to_base_quantity(&self) -> (f64, Dimensions) {
        let mut value = self.value();
        let mut parts: Vec<(&str, i64)> = Vec::new();
        for unit in &self.units {
            match unit_definition(&unit.unit) {
                Some((scale, base)) => {
                    value *= scale.powi(unit.exponent);
                    let exponent = i64::from(unit.exponent);
                    parts.extend(
                        base.iter()
                            .map(|(name, exp)| (*name, i64::from(*exp) * exponent)),
                    );
                }
                None => parts.push((unit.unit.as_str(), i64::from(unit.exponent))),
            }
        }
        (value, collect_dimensions(parts))
    }

    /// Same number shape and value with the same canonical units.
    pub fn is_equal_to(&self, other: &NumberWithUnits) -> bool {
        self.number.is_equal_to(&other.number) && self.canonical_units() == other.canonical_units()
    }

    /// Same physical quantity once both sides are converted to base units.
    pub fn is_equivalent_to(&self, other: &NumberWithUnits) -> bool {
        let (lhs_value, lhs_dims) = self.to_base_quantity();
        let (rhs_value, rhs_dims) = other.to_base_quantity();
        lhs_dims == rhs_dims && relatively_equals(lhs_value, rhs_value)
    }
}

fn collect_dimensions<'a>(parts: impl IntoIterator<Item = (&'a str, i64)>) -> Dimensions {
    let mut dims = Dimensions::new();
    for (name, exponent) in parts {
        let total = dims.entry(name.to_string()).or_insert(0);
        *total = total.saturating_add(exponent);
    }
    dims.retain(|_, exponent| *exponent != 0);
    dims
}

impl Display for NumberWithUnits {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.number)?;
        for unit in &self.units {
            match unit.exponent {
                1 => write!(f, " {}", unit.unit)?,
                exponent => write!(f, " {}^{exponent}", unit.unit)?,
            }
        }
        Ok(())
    }
}

impl FromStr for NumberWithUnits {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_number_with_units(s)
    }
}

const METRE: &[(&str, i32)] = &[("m", 1)];
const CUBIC_METRE: &[(&str, i32)] = &[("m", 3)];
const KILOGRAM: &[(&str, i32)] = &[("kg", 1)];
const SECOND: &[(&str, i32)] = &[("s", 1)];
const RUPEE: &[(&str, i32)] = &[("Rs", 1)];
const DOLLAR: &[(&str, i32)] = &[("$", 1)];

/// Scale to the base unit and the base unit's dimensions.
fn unit_definition(name: &str) -> Option<(f64, &'static [(&'static str, i32)])> {
    let definition = match name {
        "m" => (1.0, METRE),
        "cm" => (0.01, METRE),
        "mm" => (0.001, METRE),
        "km" => (1000.0, METRE),
        "in" => (0.0254, METRE),
        "ft" => (0.3048, METRE),
        "yd" => (0.9144, METRE),
        "mi" => (1609.344, METRE),
        "kg" => (1.0, KILOGRAM),
        "g" => (0.001, KILOGRAM),
        "mg" => (1e-6, KILOGRAM),
        "lb" => (0.453_592_37, KILOGRAM),
        "oz" => (0.028_349_523_125, KILOGRAM),
        "s" => (1.0, SECOND),
        "ms" => (0.001, SECOND),
        "min" => (60.0, SECOND),
        "h" | "hr" => (3600.0, SECOND),
        "day" => (86_400.0, SECOND),
        "l" | "L" => (0.001, CUBIC_METRE),
        "ml" | "mL" => (1e-6, CUBIC_METRE),
        "Rs" => (1.0, RUPEE),
        "paise" => (0.01, RUPEE),
        "$" | "dollar" | "dollars" => (1.0, DOLLAR),
        "cent" | "cents" => (0.01, DOLLAR),
        _ => return None,
    };
    Some(definition)
}
