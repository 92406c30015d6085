use super::json::{render_radar_json, render_summary_json};
use super::text::{render_report_text, render_unit_text};
use super::*;
use crate::input::TextUnit;
use crate::judge::StubJudge;
use crate::lexicon::Lexicon;
use crate::pipeline::stage3_aggregate::run_stage3;
use crate::pipeline::stage4_radar::run_stage4;

fn summary_for(texts: &[&str]) -> (SummaryData, Vec<UnitResult>) {
    let units = texts
        .iter()
        .enumerate()
        .map(|(i, t)| TextUnit::new(format!("page-{}", i + 1), *t))
        .collect::<Vec<_>>();
    let rows = run_stage3(&units, &Lexicon::builtin().unwrap(), &StubJudge::new(), 1).rows;
    let stats = run_stage4(&rows).unwrap();
    let summary = build_summary(
        ToolMeta {
            name: "greenwash-radar".to_string(),
            version: "test".to_string(),
        },
        InputMeta {
            source: "report.txt".to_string(),
            unit_mode: "page".to_string(),
            n_units: rows.len(),
        },
        "stub",
        &rows,
        &stats,
    );
    (summary, rows)
}

#[test]
fn test_format_and_tsv_cell() {
    assert_eq!(format_f64_3(4.0 / 3.0), "1.333");
    assert_eq!(tsv_cell("a\tb\nc\r"), "a b c ");
}

#[test]
fn test_radar_json_keys() {
    let (summary, _) = summary_for(&["GRI carbon 5% committed"]);
    let json = render_radar_json(&summary.radar).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["axes"]["Transparency"], 2.0);
    assert_eq!(value["axes"]["Consistency"], 1.0);
    assert_eq!(value["axis_max"]["Completeness"], 3);
}

#[test]
fn test_summary_json_round_trips_counts() {
    let (summary, _) = summary_for(&["", "We hope."]);
    let json = render_summary_json(&summary).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["input"]["n_units"], 2);
    assert_eq!(value["judge"]["n_fallback"], 0);
    assert_eq!(value["flag_counts"]["BLANK_UNIT"], 1);
    assert_eq!(value["totals"]["max_possible"], 9);
}

#[test]
fn test_report_text_sections() {
    let (summary, rows) = summary_for(&["carbon", "We are committed to GRI."]);
    let text = render_report_text(&summary, &rows);
    assert!(text.starts_with("Greenwashing Risk Report\n"));
    assert!(text.contains("Completeness: 0.500 / 3\n"));
    assert!(text.contains("All units were fully evaluated."));
    assert!(text.contains("page-1: total"));
}

#[test]
fn test_report_text_fallback_section() {
    let (mut summary, rows) = summary_for(&["carbon"]);
    summary.judge.n_fallback = 1;
    summary.judge.fallback_units = vec!["page-1".to_string()];
    let text = render_report_text(&summary, &rows);
    assert!(text.contains("Some pages could not be fully evaluated: 1 of 1 units"));
    assert!(text.contains("Affected units: page-1"));
}

#[test]
fn test_unit_text_block() {
    let (_, rows) =
        summary_for(&["We are committed to becoming carbon neutral by 2030, in alignment with GRI."]);
    let text = render_unit_text(&rows[0]);
    assert!(text.contains("Transparency: 1 / 2\n"));
    assert!(text.contains("Specificity: 1 / 2\n"));
    assert!(text.contains("Completeness: 1 / 3\n"));
    assert!(text.contains("Consistency: 1 / 2\n"));
    assert!(text.contains("Total: 4 / 9\n"));
    assert!(text.contains("Hedging terms: committed x1\n"));
}
