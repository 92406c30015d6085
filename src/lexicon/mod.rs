pub mod defs;
pub mod loader;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use defs::{FUZZY_TERMS, QUANT_UNITS, STANDARD_REFS, builtin_categories};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "E")]
    Environmental,
    #[serde(rename = "S")]
    Social,
    #[serde(rename = "G")]
    Governance,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Environmental,
        Category::Social,
        Category::Governance,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Category::Environmental => "E",
            Category::Social => "S",
            Category::Governance => "G",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "E" | "e" => Some(Category::Environmental),
            "S" | "s" => Some(Category::Social),
            "G" | "g" => Some(Category::Governance),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("blank term in {list}")]
    BlankTerm { list: &'static str },
    #[error("unknown category tag {0:?} (use E, S or G)")]
    UnknownCategory(String),
    #[error("failed to compile pattern for {term:?}: {source}")]
    Pattern {
        term: String,
        #[source]
        source: regex::Error,
    },
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse lexicon {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A hedging phrase with its precompiled whole-word matcher. Word boundaries
/// are Unicode-aware, so "aim" does not match inside "aimé".
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    pub term: String,
    pattern: Regex,
}

impl FuzzyMatcher {
    /// Non-overlapping whole-word occurrences in already lower-cased text.
    pub fn count(&self, lowered: &str) -> usize {
        self.pattern.find_iter(lowered).count()
    }
}

#[derive(Debug, Clone)]
pub struct CategoryTerms {
    pub category: Category,
    pub terms: Vec<String>,
}

/// Immutable keyword configuration shared by every scoring call.
///
/// All terms are stored lower-cased; callers match against lower-cased text.
#[derive(Debug, Clone)]
pub struct Lexicon {
    fuzzy: Vec<FuzzyMatcher>,
    standard_refs: Vec<String>,
    categories: Vec<CategoryTerms>,
    quantitative: Regex,
}

impl Lexicon {
    pub fn builtin() -> Result<Self, LexiconError> {
        let categories = builtin_categories()
            .iter()
            .map(|def| (def.category, def.terms.to_vec()))
            .collect::<Vec<_>>();
        Self::from_terms(FUZZY_TERMS, STANDARD_REFS, &categories)
    }

    pub fn from_terms<F, R, C>(
        fuzzy_terms: &[F],
        standard_refs: &[R],
        categories: &[(Category, Vec<C>)],
    ) -> Result<Self, LexiconError>
    where
        F: AsRef<str>,
        R: AsRef<str>,
        C: AsRef<str>,
    {
        let mut fuzzy = Vec::with_capacity(fuzzy_terms.len());
        for term in fuzzy_terms {
            let term = normalize_term(term.as_ref(), "fuzzy_terms")?;
            let source = format!(r"\b{}\b", regex::escape(&term));
            let pattern = Regex::new(&source).map_err(|source| LexiconError::Pattern {
                term: term.clone(),
                source,
            })?;
            fuzzy.push(FuzzyMatcher { term, pattern });
        }

        let standard_refs = standard_refs
            .iter()
            .map(|r| normalize_term(r.as_ref(), "standard_refs"))
            .collect::<Result<Vec<_>, _>>()?;

        let mut category_terms: Vec<CategoryTerms> = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let mut terms = Vec::new();
            for (tag, list) in categories {
                if *tag != category {
                    continue;
                }
                for term in list {
                    terms.push(normalize_term(term.as_ref(), "categories")?);
                }
            }
            category_terms.push(CategoryTerms { category, terms });
        }

        Ok(Self {
            fuzzy,
            standard_refs,
            categories: category_terms,
            quantitative: quantitative_pattern()?,
        })
    }

    pub fn fuzzy_matchers(&self) -> &[FuzzyMatcher] {
        &self.fuzzy
    }

    pub fn standard_refs(&self) -> &[String] {
        &self.standard_refs
    }

    pub fn categories(&self) -> &[CategoryTerms] {
        &self.categories
    }

    pub fn category_terms(&self, category: Category) -> &[String] {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.terms.as_slice())
            .unwrap_or(&[])
    }

    pub fn quantitative(&self) -> &Regex {
        &self.quantitative
    }
}

fn normalize_term(term: &str, list: &'static str) -> Result<String, LexiconError> {
    if term.trim().is_empty() {
        return Err(LexiconError::BlankTerm { list });
    }
    Ok(term.to_lowercase())
}

fn quantitative_pattern() -> Result<Regex, LexiconError> {
    let units = QUANT_UNITS
        .iter()
        .map(|u| regex::escape(u))
        .collect::<Vec<_>>()
        .join("|");
    let source = format!(r"(?i)\d+(?:\.\d+)?\s*(?:{units})");
    Regex::new(&source).map_err(|source| LexiconError::Pattern {
        term: units,
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/lexicon/tests.rs"]
mod tests;
