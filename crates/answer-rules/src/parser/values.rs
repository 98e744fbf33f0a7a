//! Value parsers using winnow.
//!
//! Grammar, with optional surrounding whitespace everywhere:
//! - fraction: `-`? (whole `" "`)? numerator `/` denominator, or `-`? whole
//! - ratio: term (`:` term)+
//! - number with units: (fraction | real) unit* (`/` unit+)?, where a unit is
//!   `name(^exponent)?` and units are separated by spaces or `*`

use winnow::ascii::{dec_int, dec_uint, float, space0, space1};
use winnow::combinator::{alt, opt, preceded, repeat, separated, terminated};
use winnow::prelude::*;
use winnow::token::take_while;

use super::ParseError;
use crate::types::{
    AnswerType, AnswerValue, Fraction, Number, NumberWithUnits, RatioExpression, Unit,
};

/// Parse a fraction such as `"3/4"`, `"-1 2/3"`, or `"5"`.
///
/// # Example
///
/// ```
/// use answer_rules::parser::parse_fraction;
///
/// let f = parse_fraction("-1 2/3").unwrap();
/// assert!(f.is_negative);
/// assert_eq!((f.whole_number, f.numerator, f.denominator), (1, 2, 3));
/// ```
pub fn parse_fraction(input: &str) -> Result<Fraction, ParseError> {
    let fraction = parse_complete(input, fraction)?;
    check_denominator(&fraction)?;
    Ok(fraction)
}

/// Parse a ratio such as `"1:2:3"`. At least two terms are required.
pub fn parse_ratio_expression(input: &str) -> Result<RatioExpression, ParseError> {
    parse_complete(input, ratio_expression)
}

/// Parse a quantity such as `"2.5 km/hr"`, `"1/2 kg"`, or `"9.8 m s^-2"`.
pub fn parse_number_with_units(input: &str) -> Result<NumberWithUnits, ParseError> {
    let (number, mut units, per_units) = parse_complete(input, number_with_units)?;
    match &number {
        Number::Fraction(fraction) => check_denominator(fraction)?,
        Number::Real(real) => check_finite(*real)?,
    }
    for unit in per_units {
        let exponent = unit.exponent.checked_neg().ok_or_else(|| ParseError::Invalid {
            message: format!("exponent of '{}' is out of range", unit.unit),
        })?;
        units.push(Unit { exponent, ..unit });
    }
    Ok(NumberWithUnits { number, units })
}

/// Parse the text form of a value of type `answer_type`.
///
/// Strings are taken verbatim. Set, list, and click values have no text form
/// and are rejected with [`ParseError::Invalid`].
///
/// # Example
///
/// ```
/// use answer_rules::parser::parse_answer_value;
/// use answer_rules::{AnswerType, AnswerValue};
///
/// let value = parse_answer_value("-3", AnswerType::SignedInt).unwrap();
/// assert_eq!(value, AnswerValue::SignedInt(-3));
/// ```
pub fn parse_answer_value(input: &str, answer_type: AnswerType) -> Result<AnswerValue, ParseError> {
    match answer_type {
        AnswerType::NormalizedString => Ok(AnswerValue::NormalizedString(input.to_string())),
        AnswerType::SignedInt => parse_complete(input, signed_int).map(AnswerValue::SignedInt),
        AnswerType::NonNegativeInt => {
            parse_complete(input, non_negative_int).map(AnswerValue::NonNegativeInt)
        }
        AnswerType::Real => {
            let value = parse_complete(input, real)?;
            check_finite(value)?;
            Ok(AnswerValue::Real(value))
        }
        AnswerType::Bool => parse_complete(input, boolean).map(AnswerValue::Bool),
        AnswerType::Fraction => parse_fraction(input).map(AnswerValue::Fraction),
        AnswerType::NumberWithUnits => {
            parse_number_with_units(input).map(AnswerValue::NumberWithUnits)
        }
        AnswerType::RatioExpression => {
            parse_ratio_expression(input).map(AnswerValue::RatioExpression)
        }
        AnswerType::SetOfHtmlString
        | AnswerType::ListOfSetsOfHtmlString
        | AnswerType::ClickOnImage => Err(ParseError::Invalid {
            message: format!("{answer_type} values have no text form"),
        }),
    }
}

/// Run `parser` over the trimmed input and require it to consume everything.
fn parse_complete<T>(
    input: &str,
    parser: fn(&mut &str) -> ModalResult<T>,
) -> Result<T, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::UnexpectedEof {
            column: input.len() + 1,
        });
    }

    let mut remaining = trimmed;
    let result = parser(&mut remaining);
    let column = input.trim_end().len() - remaining.len() + 1;
    match result {
        Ok(value) if remaining.is_empty() => Ok(value),
        Ok(_) => Err(ParseError::Syntax {
            column,
            message: format!(
                "unexpected character: '{}'",
                remaining.chars().next().unwrap_or('?')
            ),
        }),
        Err(_) if remaining.is_empty() => Err(ParseError::UnexpectedEof { column }),
        Err(e) => Err(ParseError::Syntax {
            column,
            message: format!("parse error: {e}"),
        }),
    }
}

fn check_denominator(fraction: &Fraction) -> Result<(), ParseError> {
    if fraction.denominator == 0 {
        return Err(ParseError::Invalid {
            message: format!("fraction '{fraction}' has a zero denominator"),
        });
    }
    Ok(())
}

fn check_finite(real: f64) -> Result<(), ParseError> {
    if !real.is_finite() {
        return Err(ParseError::Invalid {
            message: format!("'{real}' is not a finite number"),
        });
    }
    Ok(())
}

fn signed_int(input: &mut &str) -> ModalResult<i32> {
    dec_int.parse_next(input)
}

fn non_negative_int(input: &mut &str) -> ModalResult<u32> {
    dec_uint.parse_next(input)
}

fn real(input: &mut &str) -> ModalResult<f64> {
    float.parse_next(input)
}

fn boolean(input: &mut &str) -> ModalResult<bool> {
    alt(("true".value(true), "false".value(false))).parse_next(input)
}

/// Parse a signed fraction, with or without a `/`.
fn fraction(input: &mut &str) -> ModalResult<Fraction> {
    alt((fraction_with_slash, whole_fraction)).parse_next(input)
}

/// Parse a fraction that has a numerator and denominator.
fn fraction_with_slash(input: &mut &str) -> ModalResult<Fraction> {
    let is_negative = negative_sign(input)?;
    alt((mixed_parts, proper_parts))
        .map(|(whole_number, numerator, denominator)| Fraction {
            is_negative,
            whole_number,
            numerator,
            denominator,
        })
        .parse_next(input)
}

/// Parse a bare signed whole number as a fraction.
fn whole_fraction(input: &mut &str) -> ModalResult<Fraction> {
    let is_negative = negative_sign(input)?;
    let whole_number: u32 = dec_uint.parse_next(input)?;
    Ok(Fraction {
        is_negative,
        whole_number,
        numerator: 0,
        denominator: 1,
    })
}

/// Parse `whole numerator/denominator`.
fn mixed_parts(input: &mut &str) -> ModalResult<(u32, u32, u32)> {
    let whole_number: u32 = terminated(dec_uint, space1).parse_next(input)?;
    let (numerator, denominator) = proper_pair(input)?;
    Ok((whole_number, numerator, denominator))
}

/// Parse `numerator/denominator` with no whole part.
fn proper_parts(input: &mut &str) -> ModalResult<(u32, u32, u32)> {
    proper_pair
        .map(|(numerator, denominator)| (0, numerator, denominator))
        .parse_next(input)
}

fn proper_pair(input: &mut &str) -> ModalResult<(u32, u32)> {
    let numerator: u32 = dec_uint.parse_next(input)?;
    let denominator: u32 = preceded((space0, '/', space0), dec_uint).parse_next(input)?;
    Ok((numerator, denominator))
}

fn negative_sign(input: &mut &str) -> ModalResult<bool> {
    opt(terminated('-', space0))
        .map(|sign| sign.is_some())
        .parse_next(input)
}

/// Parse `term (: term)+`.
fn ratio_expression(input: &mut &str) -> ModalResult<RatioExpression> {
    let components: Vec<u32> =
        separated(2.., dec_uint::<_, u32, _>, (space0, ':', space0)).parse_next(input)?;
    Ok(RatioExpression { components })
}

/// A number, the units before `/`, and the units after it as written.
type QuantityParts = (Number, Vec<Unit>, Vec<Unit>);

/// Parse a number followed by its units.
fn number_with_units(input: &mut &str) -> ModalResult<QuantityParts> {
    let number = number(input)?;
    let units: Vec<Unit> = repeat(0.., preceded(unit_separator, unit)).parse_next(input)?;
    let per_units: Vec<Unit> = if opt((space0, '/')).parse_next(input)?.is_some() {
        repeat(1.., preceded(unit_separator, unit)).parse_next(input)?
    } else {
        Vec::new()
    };
    Ok((number, units, per_units))
}

/// Parse the numeric part: a fraction containing `/`, otherwise a real.
fn number(input: &mut &str) -> ModalResult<Number> {
    alt((
        fraction_with_slash.map(Number::Fraction),
        float.map(Number::Real),
    ))
    .parse_next(input)
}

fn unit_separator(input: &mut &str) -> ModalResult<()> {
    (space0, opt('*'), space0).void().parse_next(input)
}

/// Parse `name` or `name^exponent`.
fn unit(input: &mut &str) -> ModalResult<Unit> {
    let name = take_while(1.., |c: char| c.is_alphabetic() || c == '$').parse_next(input)?;
    let exponent: Option<i32> = opt(preceded('^', dec_int)).parse_next(input)?;
    Ok(Unit::new(name, exponent.unwrap_or(1)))
}
