pub mod json;
pub mod text;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::axes::{RadarAverages, axis_max_map};
use crate::model::thresholds::TOTAL_MAX;
use crate::model::unit::UnitResult;
use crate::pipeline::stage4_radar::Stage4Output;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMeta {
    pub source: String,
    pub unit_mode: String,
    pub n_units: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct JudgeMeta {
    pub name: String,
    pub n_fallback: usize,
    pub fallback_units: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalStats {
    pub mean: f64,
    pub min: u8,
    pub max: u8,
    pub max_possible: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: InputMeta,
    pub judge: JudgeMeta,
    pub radar: RadarAverages,
    pub axis_max: BTreeMap<&'static str, u8>,
    pub totals: TotalStats,
    pub risk_counts: BTreeMap<&'static str, usize>,
    pub flag_counts: BTreeMap<&'static str, usize>,
}

pub fn build_summary(
    tool: ToolMeta,
    input: InputMeta,
    judge_name: &str,
    rows: &[UnitResult],
    stats: &Stage4Output,
) -> SummaryData {
    SummaryData {
        tool,
        input,
        judge: JudgeMeta {
            name: judge_name.to_string(),
            n_fallback: stats.n_fallback,
            fallback_units: rows
                .iter()
                .filter(|r| r.status.is_fallback())
                .map(|r| r.unit_id.clone())
                .collect(),
        },
        radar: stats.radar,
        axis_max: axis_max_map(),
        totals: TotalStats {
            mean: stats.total_mean,
            min: stats.total_min,
            max: stats.total_max,
            max_possible: TOTAL_MAX,
        },
        risk_counts: stats
            .risk_counts
            .iter()
            .map(|(band, n)| (band.name(), *n))
            .collect(),
        flag_counts: stats
            .flag_counts
            .iter()
            .filter(|(_, n)| *n > 0)
            .map(|(flag, n)| (flag.name(), *n))
            .collect(),
    }
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

/// Make free text safe for a single TSV cell.
pub fn tsv_cell(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\t' || c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
