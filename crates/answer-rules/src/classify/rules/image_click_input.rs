//! Matchers for the image click interaction.

use crate::types::ClickOnImage;

pub fn is_in_region(answer: &ClickOnImage, x: &str) -> bool {
    answer.is_in_region(x)
}
