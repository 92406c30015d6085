use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::input::TextUnit;
use crate::judge::{ConsistencyJudge, JudgeError, JudgeKind};
use crate::model::scores::ConsistencyResult;
use crate::model::thresholds::{CONSISTENCY_MAX, FALLBACK_CONSISTENCY};
use crate::model::unit::JudgeStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudgedConsistency {
    pub result: ConsistencyResult,
    pub status: JudgeStatus,
}

/// Ask the judge about one unit. Any failure, including a panic inside the
/// judge, degrades to the fallback score for this unit only.
pub fn judge_unit(judge: &dyn ConsistencyJudge, unit: &TextUnit) -> JudgedConsistency {
    let outcome = catch_unwind(AssertUnwindSafe(|| judge.judge(&unit.text)))
        .unwrap_or_else(|payload| Err(JudgeError::Panicked(panic_message(payload.as_ref()))));

    let outcome = outcome.and_then(|result| {
        if result.consistency > CONSISTENCY_MAX {
            Err(JudgeError::InvalidResponse(format!(
                "consistency {} is outside 0..={CONSISTENCY_MAX}",
                result.consistency
            )))
        } else {
            Ok(result)
        }
    });

    match outcome {
        Ok(result) => JudgedConsistency {
            result,
            status: match judge.kind() {
                JudgeKind::Stub => JudgeStatus::Stub,
                JudgeKind::Gemini => JudgeStatus::Judged,
            },
        },
        Err(err) => {
            tracing::warn!(
                unit = %unit.id,
                judge = %judge.name(),
                error = %err,
                "consistency judge failed; using fallback score"
            );
            fallback(&err)
        }
    }
}

pub fn fallback(err: &JudgeError) -> JudgedConsistency {
    let reason = err.to_string();
    JudgedConsistency {
        result: ConsistencyResult {
            consistency: FALLBACK_CONSISTENCY,
            explanation: format!("[consistency unavailable: {reason}]"),
        },
        status: JudgeStatus::Fallback { reason },
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_consistency.rs"]
mod tests;
