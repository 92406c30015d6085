use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("greenwash-radar").chain(args.iter().copied()))
        .expect("args should parse")
}

#[test]
fn analyze_defaults_to_page_units_and_gemini_judge() {
    let cli = parse(&["analyze", "--input", "report.txt", "--out", "out"]);
    let Command::Analyze(args) = cli.command else {
        panic!("expected analyze");
    };
    assert_eq!(args.unit, UnitMode::Page);
    assert_eq!(args.judge.kind, JudgeKind::Gemini);
    assert_eq!(args.judge.model, DEFAULT_GEMINI_MODEL);
    assert_eq!(args.jobs, 1);
    assert!(!args.fail_on_fallback);
}

#[test]
fn analyze_judge_flags_flow_into_config() {
    let cli = parse(&[
        "analyze",
        "--input",
        "-",
        "--out",
        "out",
        "--judge",
        "stub",
        "--stub-score",
        "2",
        "--unit",
        "paragraph",
        "--timeout-secs",
        "5",
        "--api-key",
        "k",
    ]);
    let Command::Analyze(args) = cli.command else {
        panic!("expected analyze");
    };
    let config = args.judge.to_config();
    assert_eq!(config.kind, JudgeKind::Stub);
    assert_eq!(config.stub_score, 2);
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.api_key.as_deref(), Some("k"));
    assert_eq!(args.unit, UnitMode::Paragraph);
    assert_eq!(args.input, PathBuf::from("-"));
}

#[test]
fn verbose_is_global_and_counted() {
    let cli = parse(&["score", "--text", "x", "-vv"]);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn analyze_requires_input_and_out() {
    let err = Cli::try_parse_from(["greenwash-radar", "analyze", "--out", "out"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn unknown_judge_is_rejected() {
    assert!(
        Cli::try_parse_from([
            "greenwash-radar",
            "analyze",
            "--input",
            "a",
            "--out",
            "b",
            "--judge",
            "openai",
        ])
        .is_err()
    );
}

#[test]
fn blank_score_text_is_an_input_error() {
    let args = ScoreArgs {
        text: Some("   \n".to_string()),
        json: false,
        lexicon: None,
    };
    let err = run_score(&args).unwrap_err();
    assert_eq!(err.exit_code(), error::EXIT_NO_INPUT);
    assert!(err.to_string().starts_with("no document/text to analyze"));
}

#[test]
fn analyze_without_api_key_fails_before_reading_input() {
    let out = tempfile::tempdir().unwrap();
    let args = AnalyzeArgs {
        input: PathBuf::from("/definitely/not/here.txt"),
        out: out.path().join("reports"),
        unit: UnitMode::Page,
        jobs: 1,
        lexicon: None,
        fail_on_fallback: false,
        judge: JudgeArgs {
            kind: JudgeKind::Gemini,
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_excerpt_chars: DEFAULT_MAX_EXCERPT_CHARS,
            stub_score: 1,
        },
    };
    let err = run_analyze(&args).unwrap_err();
    assert_eq!(err.exit_code(), error::EXIT_SERVICE_UNAVAILABLE);
    assert!(!out.path().join("reports").exists());
}

#[test]
fn analyze_with_stub_writes_all_reports() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doc.txt");
    std::fs::write(
        &input,
        "We reduced emissions by 12% per GRI 305.\u{000C}Our board oversees ethics.\u{000C}",
    )
    .unwrap();
    let out = dir.path().join("out");
    let args = AnalyzeArgs {
        input,
        out: out.clone(),
        unit: UnitMode::Page,
        jobs: 2,
        lexicon: None,
        fail_on_fallback: true,
        judge: JudgeArgs {
            kind: JudgeKind::Stub,
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_excerpt_chars: DEFAULT_MAX_EXCERPT_CHARS,
            stub_score: 1,
        },
    };
    run_analyze(&args).unwrap();
    for name in ["units.tsv", "radar.json", "summary.json", "report.txt"] {
        assert!(out.join(name).is_file(), "{name} missing");
    }
    let tsv = std::fs::read_to_string(out.join("units.tsv")).unwrap();
    assert_eq!(tsv.lines().count(), 3);
}
