use crate::model::axes::Axis;
use crate::model::thresholds::{FALLBACK_CONSISTENCY, TOTAL_MAX};
use crate::model::unit::UnitResult;
use crate::report::{SummaryData, format_f64_3};

const LOWEST_UNITS_SHOWN: usize = 5;

pub fn render_report_text(summary: &SummaryData, rows: &[UnitResult]) -> String {
    let mut out = String::new();

    out.push_str("Greenwashing Risk Report\n");
    out.push_str("========================\n\n");
    out.push_str(&format!("Source: {}\n", summary.input.source));
    out.push_str(&format!(
        "Units scored: {} ({} mode)\n",
        summary.input.n_units, summary.input.unit_mode
    ));
    out.push_str(&format!("Consistency judge: {}\n\n", summary.judge.name));

    out.push_str("1. Radar averages\n");
    for (axis, value) in summary.radar.iter() {
        out.push_str(&format!(
            "{}: {} / {}\n",
            axis.name(),
            format_f64_3(value),
            axis.max()
        ));
    }
    out.push_str(&format!("{}\n\n", weakest_axis_statement(summary)));

    out.push_str("2. Totals\n");
    out.push_str(&format!(
        "Mean total: {} / {}\n",
        format_f64_3(summary.totals.mean),
        TOTAL_MAX
    ));
    out.push_str(&format!(
        "Range: {} to {}\n",
        summary.totals.min, summary.totals.max
    ));
    let bands = summary
        .risk_counts
        .iter()
        .map(|(name, n)| format!("{name}={n}"))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!("Risk bands: {}\n\n", bands));

    out.push_str("3. Flags\n");
    if summary.flag_counts.is_empty() {
        out.push_str("No flags raised.\n");
    } else {
        for (name, n) in &summary.flag_counts {
            out.push_str(&format!("{}: {}\n", name, n));
        }
    }
    out.push('\n');

    out.push_str("4. Evaluation coverage\n");
    if summary.judge.n_fallback == 0 {
        out.push_str("All units were fully evaluated.\n");
    } else {
        out.push_str(&format!(
            "Some pages could not be fully evaluated: {} of {} units used the fallback consistency score ({}).\n",
            summary.judge.n_fallback, summary.input.n_units, FALLBACK_CONSISTENCY
        ));
        out.push_str(&format!(
            "Affected units: {}\n",
            summary.judge.fallback_units.join(", ")
        ));
        out.push_str(
            "Note: a fallback score means the judgment is unknown, not that a contradiction was found.\n",
        );
    }
    out.push('\n');

    out.push_str("5. Lowest-scoring units\n");
    for row in lowest_units(rows, LOWEST_UNITS_SHOWN) {
        out.push_str(&format!(
            "{}: total {} / {} ({} risk){}\n",
            row.unit_id,
            row.total,
            TOTAL_MAX,
            row.risk.name(),
            format_flag_suffix(row)
        ));
    }

    out
}

/// Single-paragraph result, one axis per line.
pub fn render_unit_text(row: &UnitResult) -> String {
    let mut out = String::new();
    for axis in Axis::ALL {
        let value = crate::pipeline::stage4_radar::axis_value(row, axis);
        out.push_str(&format!("{}: {} / {}\n", axis.name(), value, axis.max()));
    }
    out.push_str(&format!("Total: {} / {}\n", row.total, TOTAL_MAX));
    out.push_str(&format!("Risk: {}\n", row.risk.name()));
    if !row.evidence.standard_refs.is_empty() {
        out.push_str(&format!(
            "References: {}\n",
            row.evidence.standard_refs.join(", ")
        ));
    }
    if let Some(m) = &row.evidence.quantitative_match {
        out.push_str(&format!("Quantitative data: {}\n", m));
    }
    if !row.evidence.fuzzy_hits.is_empty() {
        let hits = row
            .evidence
            .fuzzy_hits
            .iter()
            .map(|(term, n)| format!("{term} x{n}"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("Hedging terms: {}\n", hits));
    }
    if !row.flags.is_empty() {
        let flags = row.flags.iter().map(|f| f.name()).collect::<Vec<_>>();
        out.push_str(&format!("Flags: {}\n", flags.join(", ")));
    }
    out.push_str(&format!("Explanation: {}\n", row.consistency.explanation));
    out
}

fn lowest_units(rows: &[UnitResult], k: usize) -> Vec<&UnitResult> {
    let mut sorted = rows.iter().collect::<Vec<_>>();
    sorted.sort_by_key(|r| r.total);
    sorted.truncate(k);
    sorted
}

fn format_flag_suffix(row: &UnitResult) -> String {
    if row.flags.is_empty() {
        return String::new();
    }
    let names = row.flags.iter().map(|f| f.name()).collect::<Vec<_>>();
    format!(" [{}]", names.join(","))
}

fn weakest_axis_statement(summary: &SummaryData) -> String {
    let weakest = summary
        .radar
        .iter()
        .map(|(axis, v)| (axis, v / axis.max() as f64))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    match weakest {
        Some((axis, share)) if share < 0.5 => format!(
            "Weakest axis: {} ({}% of its maximum).",
            axis.name(),
            (share * 100.0).round()
        ),
        Some((axis, _)) => format!("Weakest axis: {} (no axis below half).", axis.name()),
        None => String::new(),
    }
}
