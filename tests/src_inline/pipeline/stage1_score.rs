use pretty_assertions::assert_eq;

use super::*;
use crate::model::thresholds::{COMPLETENESS_MAX, SPECIFICITY_MAX, TRANSPARENCY_MAX};

fn lexicon() -> Lexicon {
    Lexicon::builtin().unwrap()
}

fn score(text: &str) -> ParagraphScore {
    score_paragraph(&lexicon(), text)
}

#[test]
fn test_committed_carbon_neutral_gri() {
    let s = score("We are committed to becoming carbon neutral by 2030, in alignment with GRI.");
    assert_eq!(
        s,
        ParagraphScore {
            transparency: 1,
            specificity: 1,
            completeness: 1,
        }
    );
    assert_eq!(s.subtotal(), 3);
}

#[test]
fn test_empty_text_keeps_max_specificity() {
    for text in ["", "   \n\t "] {
        let (s, evidence) = score_paragraph_detailed(&lexicon(), text);
        assert_eq!(s.transparency, 0);
        assert_eq!(s.specificity, 2);
        assert_eq!(s.completeness, 0);
        assert!(evidence.blank);
    }
}

#[test]
fn test_reference_and_quantitative_data() {
    let (s, evidence) = score_paragraph_detailed(
        &lexicon(),
        "We reduced emissions by 15% in 2023 per GRI and ISO 14001 standards",
    );
    assert_eq!(s.transparency, 2);
    assert_eq!(evidence.quantitative_match.as_deref(), Some("15%"));
    assert_eq!(
        evidence.standard_refs,
        vec!["gri".to_string(), "iso 14001".to_string()]
    );
}

#[test]
fn test_heavy_hedging() {
    let s = score("committed committed committed committed committed");
    assert_eq!(s.specificity, 0);

    let s = score("committed committed committed committed");
    assert_eq!(s.specificity, 1);
}

#[test]
fn test_fuzzy_counts_summed_across_phrases() {
    let (s, evidence) = score_paragraph_detailed(
        &lexicon(),
        "Our vision and mission: we aim to strive, we hope, we intend.",
    );
    assert_eq!(evidence.fuzzy_count, 6);
    assert_eq!(s.specificity, 0);
}

#[test]
fn test_fuzzy_whole_word_only() {
    let s = score("Aiming and hopeful missionaries");
    assert_eq!(s.specificity, 2);
}

#[test]
fn test_multiword_fuzzy_phrase() {
    let (_, evidence) = score_paragraph_detailed(
        &lexicon(),
        "We are ON TRACK and working towards Sustainable Development.",
    );
    assert_eq!(evidence.fuzzy_count, 3);
}

#[test]
fn test_reference_is_plain_substring() {
    // "agriculture" contains "gri"; references are not word-bounded.
    let s = score("agriculture");
    assert_eq!(s.transparency, 1);
}

#[test]
fn test_quantitative_units_case_insensitive() {
    for text in [
        "2.5 tons",
        "40 KG",
        "3 CO2",
        "12 co2",
        "100 USD",
        "5 years",
        "12MWh",
        "7 metric",
        "0.5%",
    ] {
        let (_, evidence) = score_paragraph_detailed(&lexicon(), text);
        assert!(evidence.quantitative_match.is_some(), "{text}");
    }
    for text in ["2030", "tons of effort", "ISO 14001"] {
        let (_, evidence) = score_paragraph_detailed(&lexicon(), text);
        assert!(evidence.quantitative_match.is_none(), "{text}");
    }
}

#[test]
fn test_completeness_counts_categories_once() {
    let s = score("carbon emissions climate energy");
    assert_eq!(s.completeness, 1);

    let s = score("Board oversight of employee safety and renewable energy.");
    assert_eq!(s.completeness, 3);
}

#[test]
fn test_regex_metacharacters_in_text() {
    let s = score(r"(.*)+?[\d] ^$ \b {2,} | GRI");
    assert_eq!(s.transparency, 1);
    assert!(s.specificity <= SPECIFICITY_MAX);
}

#[test]
fn test_unicode_text() {
    let s = score("我们致力于实现碳中和 — Émissions réduites de 20 % ✓");
    assert!(s.transparency <= TRANSPARENCY_MAX);
    assert!(s.completeness <= COMPLETENESS_MAX);
}

#[test]
fn test_determinism_and_bounds() {
    let lex = lexicon();
    let samples = [
        "",
        "We aspire to be leading in sustainability, with board governance and employee training.",
        "Scope 1 emissions fell 12.4% to 40,000 tons CO2e (GRI 305, TCFD, SASB).",
        "hope hope hope hope hope hope hope",
    ];
    for text in samples {
        let a = score_paragraph(&lex, text);
        let b = score_paragraph(&lex, text);
        assert_eq!(a, b);
        assert!(a.transparency <= TRANSPARENCY_MAX);
        assert!(a.specificity <= SPECIFICITY_MAX);
        assert!(a.completeness <= COMPLETENESS_MAX);
    }
}

#[test]
fn test_fuzzy_word_boundaries_are_unicode_aware() {
    let (s, evidence) = score_paragraph_detailed(
        &lexicon(),
        "Le projet aimé par la communauté, hopeé, visionñ",
    );
    assert_eq!(evidence.fuzzy_count, 0);
    assert!(evidence.fuzzy_hits.is_empty());
    assert_eq!(s.specificity, SPECIFICITY_MAX);

    let (_, evidence) = score_paragraph_detailed(&lexicon(), "Notre vision: aim, élan.");
    assert_eq!(evidence.fuzzy_count, 2);
}

#[test]
fn test_quantitative_accepts_non_ascii_digits() {
    let (s, evidence) = score_paragraph_detailed(&lexicon(), "reduced by １５%");
    assert_eq!(evidence.quantitative_match.as_deref(), Some("１５%"));
    assert_eq!(s.transparency, 1);
}
