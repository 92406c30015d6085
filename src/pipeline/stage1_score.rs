use crate::lexicon::{Category, Lexicon};
use crate::model::scores::{ParagraphScore, ScoreEvidence};
use crate::model::thresholds::specificity_for;

/// Score one text unit. Total over all strings; never fails.
pub fn score_paragraph(lexicon: &Lexicon, text: &str) -> ParagraphScore {
    score_paragraph_detailed(lexicon, text).0
}

pub fn score_paragraph_detailed(lexicon: &Lexicon, text: &str) -> (ParagraphScore, ScoreEvidence) {
    let lowered = text.to_lowercase();

    let standard_refs = matched_standard_refs(lexicon, &lowered);
    let quantitative_match = lexicon
        .quantitative()
        .find(&lowered)
        .map(|m| m.as_str().to_string());
    let transparency = u8::from(!standard_refs.is_empty()) + u8::from(quantitative_match.is_some());

    let mut fuzzy_hits = Vec::new();
    let mut fuzzy_count = 0usize;
    for matcher in lexicon.fuzzy_matchers() {
        let hits = matcher.count(&lowered);
        if hits > 0 {
            fuzzy_count += hits;
            fuzzy_hits.push((matcher.term.clone(), hits));
        }
    }
    let specificity = specificity_for(fuzzy_count);

    let categories = categories_present(lexicon, &lowered);
    let completeness = categories.len() as u8;

    let score = ParagraphScore {
        transparency,
        specificity,
        completeness,
    };
    let evidence = ScoreEvidence {
        standard_refs,
        quantitative_match,
        fuzzy_hits,
        fuzzy_count,
        categories,
        blank: text.trim().is_empty(),
    };
    (score, evidence)
}

fn matched_standard_refs(lexicon: &Lexicon, lowered: &str) -> Vec<String> {
    lexicon
        .standard_refs()
        .iter()
        .filter(|r| lowered.contains(r.as_str()))
        .cloned()
        .collect()
}

fn categories_present(lexicon: &Lexicon, lowered: &str) -> Vec<Category> {
    lexicon
        .categories()
        .iter()
        .filter(|c| c.terms.iter().any(|t| lowered.contains(t.as_str())))
        .map(|c| c.category)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_score.rs"]
mod tests;
