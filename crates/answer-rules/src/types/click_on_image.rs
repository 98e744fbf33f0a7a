use bon::Builder;
use serde::{Deserialize, Serialize};

/// A point on an image, in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2d {
    pub x: f64,
    pub y: f64,
}

/// A learner's click on an image, with the author-defined regions it landed in.
#[derive(Debug, Clone, PartialEq, Default, Builder, Serialize, Deserialize)]
pub struct ClickOnImage {
    #[builder(default)]
    #[serde(default)]
    pub click_position: Point2d,

    #[builder(default)]
    #[serde(default)]
    pub clicked_regions: Vec<String>,
}

impl ClickOnImage {
    pub fn is_in_region(&self, region: &str) -> bool {
        self.clicked_regions.iter().any(|r| r == region)
    }
}
