use serde::Serialize;

use crate::lexicon::Category;
use crate::model::axes::Axis;

/// Locally computed sub-scores for one text unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParagraphScore {
    pub transparency: u8,
    pub specificity: u8,
    pub completeness: u8,
}

impl ParagraphScore {
    pub fn subtotal(&self) -> u8 {
        self.transparency + self.specificity + self.completeness
    }

    pub fn get(&self, axis: Axis) -> Option<u8> {
        match axis {
            Axis::Transparency => Some(self.transparency),
            Axis::Specificity => Some(self.specificity),
            Axis::Completeness => Some(self.completeness),
            Axis::Consistency => None,
        }
    }
}

/// What the scorer matched, kept so every sub-score can be audited.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ScoreEvidence {
    pub standard_refs: Vec<String>,
    pub quantitative_match: Option<String>,
    pub fuzzy_hits: Vec<(String, usize)>,
    pub fuzzy_count: usize,
    pub categories: Vec<Category>,
    pub blank: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsistencyResult {
    pub consistency: u8,
    pub explanation: String,
}
