use crate::input::TextUnit;
use crate::judge::ConsistencyJudge;
use crate::lexicon::Lexicon;
use crate::model::flags::{Flag, flag_order};
use crate::model::risk::RiskBand;
use crate::model::scores::{ParagraphScore, ScoreEvidence};
use crate::model::thresholds::{HEAVY_HEDGING_MIN, NARROW_COVERAGE_MAX};
use crate::model::unit::{JudgeStatus, UnitResult};
use crate::pipeline::stage1_score::score_paragraph_detailed;
use crate::pipeline::stage2_consistency::judge_unit;

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub rows: Vec<UnitResult>,
}

impl Stage3Output {
    pub fn fallback_units(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|r| r.status.is_fallback())
            .map(|r| r.unit_id.as_str())
            .collect()
    }

    pub fn fallback_count(&self) -> usize {
        self.rows.iter().filter(|r| r.status.is_fallback()).count()
    }
}

/// Score every unit independently. Rows come back in input order whatever
/// the number of worker threads.
pub fn run_stage3(
    units: &[TextUnit],
    lexicon: &Lexicon,
    judge: &dyn ConsistencyJudge,
    jobs: usize,
) -> Stage3Output {
    let jobs = jobs.clamp(1, units.len().max(1));
    tracing::info!(units = units.len(), jobs, judge = %judge.name(), "scoring units");

    let rows = if jobs == 1 {
        units
            .iter()
            .map(|unit| score_unit(unit, lexicon, judge))
            .collect()
    } else {
        let chunk_size = units.len().div_ceil(jobs);
        std::thread::scope(|scope| {
            let handles = units
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|unit| score_unit(unit, lexicon, judge))
                            .collect::<Vec<_>>()
                    })
                })
                .collect::<Vec<_>>();

            let mut rows = Vec::with_capacity(units.len());
            for handle in handles {
                match handle.join() {
                    Ok(chunk_rows) => rows.extend(chunk_rows),
                    Err(payload) => std::panic::resume_unwind(payload),
                }
            }
            rows
        })
    };

    let out = Stage3Output { rows };
    let fallbacks = out.fallback_count();
    if fallbacks > 0 {
        tracing::warn!(
            fallbacks,
            units = out.rows.len(),
            affected = ?out.fallback_units(),
            "some pages could not be fully evaluated"
        );
    }
    out
}

pub fn score_unit(unit: &TextUnit, lexicon: &Lexicon, judge: &dyn ConsistencyJudge) -> UnitResult {
    let (score, evidence) = score_paragraph_detailed(lexicon, &unit.text);
    let judged = judge_unit(judge, unit);
    let total = score.subtotal() + judged.result.consistency;
    let flags = collect_flags(&score, &evidence, &judged.status);

    tracing::debug!(
        unit = %unit.id,
        transparency = score.transparency,
        specificity = score.specificity,
        completeness = score.completeness,
        consistency = judged.result.consistency,
        total,
        "unit scored"
    );

    UnitResult {
        unit_id: unit.id.clone(),
        score,
        consistency: judged.result,
        status: judged.status,
        total,
        risk: RiskBand::from_total(total),
        flags,
        evidence,
    }
}

pub fn collect_flags(
    score: &ParagraphScore,
    evidence: &ScoreEvidence,
    status: &JudgeStatus,
) -> Vec<Flag> {
    flag_order()
        .iter()
        .copied()
        .filter(|flag| match flag {
            Flag::BlankUnit => evidence.blank,
            Flag::NoExternalReference => evidence.standard_refs.is_empty(),
            Flag::NoQuantitativeData => evidence.quantitative_match.is_none(),
            Flag::HedgingLanguage => evidence.fuzzy_count > 0,
            Flag::HeavyHedging => evidence.fuzzy_count >= HEAVY_HEDGING_MIN,
            Flag::NarrowCoverage => score.completeness <= NARROW_COVERAGE_MAX,
            Flag::ConsistencyFallback => status.is_fallback(),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_aggregate.rs"]
mod tests;
