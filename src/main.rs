mod error;
mod input;
mod judge;
mod lexicon;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::error::AppError;
use crate::input::{InputError, TextUnit, UnitMode, load_units};
use crate::judge::{
    DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_MODEL, DEFAULT_MAX_EXCERPT_CHARS, DEFAULT_TIMEOUT_SECS,
    JudgeConfig, JudgeKind, build_judge,
};
use crate::lexicon::Lexicon;
use crate::lexicon::loader::load_lexicon;
use crate::pipeline::stage3_aggregate::{run_stage3, score_unit};
use crate::pipeline::stage4_radar::run_stage4;
use crate::pipeline::stage5_report::{Stage5Input, write_reports};
use crate::report::json::render_unit_json;
use crate::report::text::render_unit_text;
use crate::report::{InputMeta, ToolMeta, build_summary, format_f64_3};

#[derive(Debug, Parser)]
#[command(
    name = "greenwash-radar",
    version,
    about = "Score ESG report text for greenwashing risk on four axes"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score every page of a document and write the radar reports.
    Analyze(AnalyzeArgs),
    /// Score a single paragraph and print the result.
    Score(ScoreArgs),
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    /// Extracted text (.txt, pages split on form feed), a JSON unit list, .gz of either, or `-` for stdin.
    #[arg(long)]
    input: PathBuf,

    #[arg(long)]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = UnitMode::Page)]
    unit: UnitMode,

    /// Worker threads for scoring.
    #[arg(long, default_value_t = 1)]
    jobs: usize,

    /// JSON file overriding the built-in term lists.
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Exit non-zero when any unit fell back to the default consistency score.
    #[arg(long)]
    fail_on_fallback: bool,

    #[command(flatten)]
    judge: JudgeArgs,
}

#[derive(Debug, Args)]
struct JudgeArgs {
    #[arg(long = "judge", value_enum, default_value_t = JudgeKind::Gemini)]
    kind: JudgeKind,

    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_GEMINI_MODEL)]
    model: String,

    #[arg(long, default_value = DEFAULT_GEMINI_ENDPOINT)]
    endpoint: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Characters of each unit sent to the judge.
    #[arg(long, default_value_t = DEFAULT_MAX_EXCERPT_CHARS)]
    max_excerpt_chars: usize,

    /// Consistency returned by the stub judge.
    #[arg(long, default_value_t = judge::stub::STUB_CONSISTENCY)]
    stub_score: u8,
}

impl JudgeArgs {
    fn to_config(&self) -> JudgeConfig {
        JudgeConfig {
            kind: self.kind,
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout_secs,
            max_excerpt_chars: self.max_excerpt_chars,
            stub_score: self.stub_score,
        }
    }
}

#[derive(Debug, Args)]
struct ScoreArgs {
    /// Paragraph to score. Read from stdin when omitted.
    #[arg(long)]
    text: Option<String>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    #[arg(long)]
    lexicon: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Analyze(args) => run_analyze(&args),
        Command::Score(args) => run_score(&args),
    }
}

fn run_analyze(args: &AnalyzeArgs) -> Result<(), AppError> {
    let lexicon = resolve_lexicon(args.lexicon.as_deref())?;
    // Judge configuration is checked before any input is read.
    let judge = build_judge(&args.judge.to_config())?;
    let units = load_units(&args.input, args.unit)?;

    let stage3 = run_stage3(&units, &lexicon, judge.as_ref(), args.jobs);
    let stats = run_stage4(&stage3.rows)?;

    let summary = build_summary(
        ToolMeta {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        InputMeta {
            source: args.input.display().to_string(),
            unit_mode: unit_mode_name(args.unit).to_string(),
            n_units: units.len(),
        },
        &judge.name(),
        &stage3.rows,
        &stats,
    );
    write_reports(
        &Stage5Input {
            rows: &stage3.rows,
            summary: &summary,
        },
        &args.out,
    )?;

    for (axis, value) in stats.radar.iter() {
        println!("{}: {}", axis.name(), format_f64_3(value));
    }
    println!(
        "Mean total: {} over {} units",
        format_f64_3(stats.total_mean),
        stats.n_units
    );

    let fallbacks = stage3.fallback_count();
    if fallbacks > 0 && args.fail_on_fallback {
        return Err(AppError::Partial {
            fallbacks,
            units: stats.n_units,
        });
    }
    Ok(())
}

fn run_score(args: &ScoreArgs) -> Result<(), AppError> {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => input::reader::read_stdin()?,
    };
    if text.trim().is_empty() {
        return Err(InputError::EmptyDocument("paragraph".to_string()).into());
    }

    let lexicon = resolve_lexicon(args.lexicon.as_deref())?;
    let judge = build_judge(&JudgeConfig::default())?;
    let row = score_unit(&TextUnit::new("paragraph", text), &lexicon, judge.as_ref());

    if args.json {
        println!("{}", render_unit_json(&row)?);
    } else {
        print!("{}", render_unit_text(&row));
    }
    Ok(())
}

fn resolve_lexicon(path: Option<&Path>) -> Result<Lexicon, AppError> {
    let lexicon = match path {
        Some(path) => load_lexicon(path)?,
        None => Lexicon::builtin()?,
    };
    Ok(lexicon)
}

fn unit_mode_name(mode: UnitMode) -> &'static str {
    match mode {
        UnitMode::Page => "page",
        UnitMode::Paragraph => "paragraph",
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
