use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::axes::{RadarAverages, axis_max_map};
use crate::model::unit::UnitResult;
use crate::report::SummaryData;

#[derive(Debug, Serialize)]
struct RadarDocument<'a> {
    axes: &'a RadarAverages,
    axis_max: BTreeMap<&'static str, u8>,
}

/// Chart-ready averages plus the scale of each axis.
pub fn render_radar_json(radar: &RadarAverages) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&RadarDocument {
        axes: radar,
        axis_max: axis_max_map(),
    })
}

pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}

pub fn render_unit_json(row: &UnitResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(row)
}
