use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::unit::UnitResult;
use crate::report::json::{render_radar_json, render_summary_json};
use crate::report::text::render_report_text;
use crate::report::{SummaryData, tsv_cell};

pub const UNITS_TSV: &str = "units.tsv";
pub const RADAR_JSON: &str = "radar.json";
pub const SUMMARY_JSON: &str = "summary.json";
pub const REPORT_TXT: &str = "report.txt";

#[derive(Debug, Clone, Copy)]
pub struct Stage5Input<'a> {
    pub rows: &'a [UnitResult],
    pub summary: &'a SummaryData,
}

pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    write_units_tsv(input.rows, &out_dir.join(UNITS_TSV))?;

    let radar = render_radar_json(&input.summary.radar)?;
    write_text(&out_dir.join(RADAR_JSON), &radar)?;

    let summary = render_summary_json(input.summary)?;
    write_text(&out_dir.join(SUMMARY_JSON), &summary)?;

    let report = render_report_text(input.summary, input.rows);
    write_text(&out_dir.join(REPORT_TXT), &report)?;

    tracing::info!(out_dir = %out_dir.display(), "reports written");
    Ok(())
}

fn write_units_tsv(rows: &[UnitResult], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "unit_id",
        "transparency",
        "specificity",
        "completeness",
        "consistency",
        "total",
        "risk",
        "judge_status",
        "flags",
        "explanation",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for row in rows {
        let flags = row.flags.iter().map(|f| f.name()).collect::<Vec<_>>();
        let line = [
            tsv_cell(&row.unit_id),
            row.score.transparency.to_string(),
            row.score.specificity.to_string(),
            row.score.completeness.to_string(),
            row.consistency.consistency.to_string(),
            row.total.to_string(),
            row.risk.name().to_string(),
            row.status.label().to_string(),
            flags.join(","),
            tsv_cell(&row.consistency.explanation),
        ]
        .join("\t");
        writeln!(w, "{}", line)?;
    }
    w.flush()
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
