use thiserror::Error;

use crate::model::axes::{Axis, RadarAverages};
use crate::model::flags::{Flag, flag_order};
use crate::model::risk::{RiskBand, risk_order};
use crate::model::unit::UnitResult;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReduceError {
    #[error("cannot average an empty result table")]
    EmptyTable,
}

/// Whole-document statistics derived from the result table.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage4Output {
    pub radar: RadarAverages,
    pub n_units: usize,
    pub n_fallback: usize,
    pub total_mean: f64,
    pub total_min: u8,
    pub total_max: u8,
    pub risk_counts: Vec<(RiskBand, usize)>,
    pub flag_counts: Vec<(Flag, usize)>,
}

/// Per-axis arithmetic mean over every row. Each axis is averaged as its own
/// column; totals are never averaged into an axis.
pub fn reduce_radar(rows: &[UnitResult]) -> Result<RadarAverages, ReduceError> {
    if rows.is_empty() {
        return Err(ReduceError::EmptyTable);
    }
    let n = rows.len() as f64;
    let mean = |axis: Axis| {
        let sum: u64 = rows.iter().map(|r| u64::from(axis_value(r, axis))).sum();
        sum as f64 / n
    };
    Ok(RadarAverages {
        transparency: mean(Axis::Transparency),
        specificity: mean(Axis::Specificity),
        completeness: mean(Axis::Completeness),
        consistency: mean(Axis::Consistency),
    })
}

pub fn run_stage4(rows: &[UnitResult]) -> Result<Stage4Output, ReduceError> {
    let radar = reduce_radar(rows)?;

    let totals: Vec<u8> = rows.iter().map(|r| r.total).collect();
    let total_sum: u64 = totals.iter().map(|&t| u64::from(t)).sum();
    let total_min = totals.iter().copied().min().unwrap_or(0);
    let total_max = totals.iter().copied().max().unwrap_or(0);

    let risk_counts = risk_order()
        .iter()
        .map(|&band| (band, rows.iter().filter(|r| r.risk == band).count()))
        .collect();
    let flag_counts = flag_order()
        .iter()
        .map(|&flag| (flag, rows.iter().filter(|r| r.flags.contains(&flag)).count()))
        .collect();

    Ok(Stage4Output {
        radar,
        n_units: rows.len(),
        n_fallback: rows.iter().filter(|r| r.status.is_fallback()).count(),
        total_mean: total_sum as f64 / rows.len() as f64,
        total_min,
        total_max,
        risk_counts,
        flag_counts,
    })
}

pub fn axis_value(row: &UnitResult, axis: Axis) -> u8 {
    row.score
        .get(axis)
        .unwrap_or(row.consistency.consistency)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_radar.rs"]
mod tests;
