use crate::judge::{ConsistencyJudge, JudgeError, JudgeKind};
use crate::model::scores::ConsistencyResult;

pub const STUB_CONSISTENCY: u8 = 1;
pub const STUB_EXPLANATION: &str = "No obvious self-contradiction found in this passage.";

/// Fixed judgment used by the standalone variant. Never calls out.
#[derive(Debug, Clone)]
pub struct StubJudge {
    score: u8,
    explanation: String,
}

impl StubJudge {
    pub fn new() -> Self {
        Self::with_score(STUB_CONSISTENCY)
    }

    pub fn with_score(score: u8) -> Self {
        Self {
            score,
            explanation: STUB_EXPLANATION.to_string(),
        }
    }
}

impl Default for StubJudge {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsistencyJudge for StubJudge {
    fn judge(&self, _text: &str) -> Result<ConsistencyResult, JudgeError> {
        Ok(ConsistencyResult {
            consistency: self.score,
            explanation: self.explanation.clone(),
        })
    }

    fn kind(&self) -> JudgeKind {
        JudgeKind::Stub
    }

    fn name(&self) -> String {
        "stub".to_string()
    }
}
