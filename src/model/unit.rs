use serde::Serialize;

use crate::model::flags::Flag;
use crate::model::risk::RiskBand;
use crate::model::scores::{ConsistencyResult, ParagraphScore, ScoreEvidence};

/// How the consistency score of a unit was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum JudgeStatus {
    Judged,
    Stub,
    Fallback { reason: String },
}

impl JudgeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            JudgeStatus::Judged => "judged",
            JudgeStatus::Stub => "stub",
            JudgeStatus::Fallback { .. } => "fallback",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, JudgeStatus::Fallback { .. })
    }
}

/// One row of the document table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitResult {
    pub unit_id: String,
    pub score: ParagraphScore,
    pub consistency: ConsistencyResult,
    pub status: JudgeStatus,
    pub total: u8,
    pub risk: RiskBand,
    pub flags: Vec<Flag>,
    pub evidence: ScoreEvidence,
}
