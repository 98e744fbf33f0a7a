mod click_on_image;
mod fraction;
mod html_strings;
mod number_with_units;
mod numeric;
mod ratio;
mod text;
mod value;

pub use click_on_image::{ClickOnImage, Point2d};
pub use fraction::Fraction;
pub use html_strings::{ListOfSetsOfHtmlStrings, set_of_html_strings};
pub use number_with_units::{Dimensions, Number, NumberWithUnits, Unit};
pub use numeric::{
    REAL_EQUALITY_TOLERANCE, RELATIVE_TOLERANCE, approximately_equals, gcd, relatively_equals,
};
pub use ratio::RatioExpression;
pub use text::normalize_whitespace;
pub use value::{AnswerType, AnswerValue, Narrow};
