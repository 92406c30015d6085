use pretty_assertions::assert_eq;

use super::*;
use crate::judge::{JudgeError, JudgeKind, StubJudge};
use crate::model::scores::ConsistencyResult;

/// Fails for any unit whose text contains "FAIL"; otherwise scores 2.
struct SelectiveJudge;

impl ConsistencyJudge for SelectiveJudge {
    fn judge(&self, text: &str) -> Result<ConsistencyResult, JudgeError> {
        if text.contains("FAIL") {
            Err(JudgeError::Transport("connection reset".to_string()))
        } else {
            Ok(ConsistencyResult {
                consistency: 2,
                explanation: "consistent".to_string(),
            })
        }
    }
    fn kind(&self) -> JudgeKind {
        JudgeKind::Gemini
    }
    fn name(&self) -> String {
        "selective".to_string()
    }
}

fn lexicon() -> Lexicon {
    Lexicon::builtin().unwrap()
}

fn sample_units(n: usize) -> Vec<TextUnit> {
    let texts = [
        "We are committed to becoming carbon neutral by 2030, in alignment with GRI.",
        "",
        "Scope 1 emissions fell 12% to 40,000 tons (TCFD). Board audit covers employee safety.",
        "We hope to aspire to a vision of a greener mission, we believe.",
    ];
    (0..n)
        .map(|i| TextUnit::new(format!("page-{}", i + 1), texts[i % texts.len()]))
        .collect()
}

#[test]
fn test_rows_match_input_order() {
    let units = sample_units(9);
    let out = run_stage3(&units, &lexicon(), &StubJudge::new(), 1);
    let ids: Vec<_> = out.rows.iter().map(|r| r.unit_id.clone()).collect();
    let expected: Vec<_> = units.iter().map(|u| u.id.clone()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_parallel_matches_sequential() {
    let units = sample_units(23);
    let lex = lexicon();
    let judge = StubJudge::new();
    let sequential = run_stage3(&units, &lex, &judge, 1);
    for jobs in [2, 4, 7, 64] {
        let parallel = run_stage3(&units, &lex, &judge, jobs);
        assert_eq!(parallel.rows, sequential.rows, "jobs={jobs}");
    }
}

#[test]
fn test_empty_input_gives_empty_table() {
    let out = run_stage3(&[], &lexicon(), &StubJudge::new(), 4);
    assert!(out.rows.is_empty());
    assert_eq!(out.fallback_count(), 0);
}

#[test]
fn test_totals_sum_all_four_axes() {
    let units = sample_units(4);
    let out = run_stage3(&units, &lexicon(), &StubJudge::new(), 1);
    for row in &out.rows {
        assert_eq!(row.total, row.score.subtotal() + row.consistency.consistency);
        assert!(row.total <= 9);
    }
    // committed/carbon/GRI: 1 + 1 + 1 + stub 1
    assert_eq!(out.rows[0].total, 4);
    // empty page: 0 + 2 + 0 + stub 1
    assert_eq!(out.rows[1].total, 3);
    assert_eq!(out.rows[1].status, JudgeStatus::Stub);
}

#[test]
fn test_fallback_isolated_to_failing_unit() {
    let mut units = sample_units(4);
    units[2].text.push_str(" FAIL");
    let lex = lexicon();

    let out = run_stage3(&units, &lex, &SelectiveJudge, 2);
    assert_eq!(out.fallback_units(), vec!["page-3"]);
    assert_eq!(out.rows[2].consistency.consistency, 0);
    assert!(out.rows[2].flags.contains(&Flag::ConsistencyFallback));

    for idx in [0, 1, 3] {
        let row = &out.rows[idx];
        assert_eq!(row.status, JudgeStatus::Judged);
        assert_eq!(row.consistency.consistency, 2);
        assert_eq!(row.score, score_paragraph_detailed(&lex, &units[idx].text).0);
    }
}

#[test]
fn test_flags_follow_evidence() {
    let units = sample_units(4);
    let out = run_stage3(&units, &lexicon(), &StubJudge::new(), 1);

    assert_eq!(
        out.rows[1].flags,
        vec![
            Flag::BlankUnit,
            Flag::NoExternalReference,
            Flag::NoQuantitativeData,
            Flag::NarrowCoverage,
        ]
    );
    assert_eq!(
        out.rows[3].flags,
        vec![
            Flag::NoExternalReference,
            Flag::NoQuantitativeData,
            Flag::HedgingLanguage,
            Flag::HeavyHedging,
            Flag::NarrowCoverage,
        ]
    );
    assert!(out.rows[2].flags.is_empty());
}

#[test]
fn test_risk_band_from_total() {
    assert_eq!(RiskBand::from_total(0), RiskBand::High);
    assert_eq!(RiskBand::from_total(3), RiskBand::High);
    assert_eq!(RiskBand::from_total(4), RiskBand::Moderate);
    assert_eq!(RiskBand::from_total(6), RiskBand::Moderate);
    assert_eq!(RiskBand::from_total(7), RiskBand::Low);
    assert_eq!(RiskBand::from_total(9), RiskBand::Low);
}
