use crate::classify::classifier::SensitivityCategory;
use crate::shared::region::Region;

/// Which detector produced an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectionKind {
    Face,
    Text,
}

/// One detector finding for a single detection pass.
///
/// Created once per pass and never mutated; superseded wholesale when
/// the next pass completes.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectedItem {
    pub text: Option<String>,
    pub kind: DetectionKind,
    pub region: Region,
    pub sensitive: bool,
    pub category: SensitivityCategory,
}

impl DetectedItem {
    pub fn face(region: Region) -> Self {
        Self {
            text: None,
            kind: DetectionKind::Face,
            region,
            sensitive: true,
            category: SensitivityCategory::Face,
        }
    }

    pub fn text(text: String, region: Region, sensitive: bool, category: SensitivityCategory) -> Self {
        Self {
            text: Some(text),
            kind: DetectionKind::Text,
            region,
            sensitive,
            category,
        }
    }
}
