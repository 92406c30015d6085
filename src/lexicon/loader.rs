use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::lexicon::defs::{FUZZY_TERMS, STANDARD_REFS, builtin_terms};
use crate::lexicon::{Category, Lexicon, LexiconError};

/// On-disk lexicon override. Any list left out keeps its built-in value.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconFile {
    #[serde(default)]
    pub fuzzy_terms: Option<Vec<String>>,
    #[serde(default)]
    pub standard_refs: Option<Vec<String>>,
    #[serde(default)]
    pub categories: Option<BTreeMap<String, Vec<String>>>,
}

pub fn load_lexicon(path: &Path) -> Result<Lexicon, LexiconError> {
    let raw = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let file: LexiconFile = serde_json::from_str(&raw).map_err(|source| LexiconError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    let lexicon = build_from_file(file)?;
    tracing::info!(
        path = %path.display(),
        fuzzy = lexicon.fuzzy_matchers().len(),
        standards = lexicon.standard_refs().len(),
        "loaded lexicon override"
    );
    Ok(lexicon)
}

pub fn build_from_file(file: LexiconFile) -> Result<Lexicon, LexiconError> {
    let fuzzy = file
        .fuzzy_terms
        .unwrap_or_else(|| FUZZY_TERMS.iter().map(|s| s.to_string()).collect());
    let refs = file
        .standard_refs
        .unwrap_or_else(|| STANDARD_REFS.iter().map(|s| s.to_string()).collect());

    let mut overrides: BTreeMap<Category, Vec<String>> = BTreeMap::new();
    if let Some(map) = file.categories {
        for (tag, terms) in map {
            let category =
                Category::from_tag(&tag).ok_or_else(|| LexiconError::UnknownCategory(tag.clone()))?;
            overrides.insert(category, terms);
        }
    }

    let categories = Category::ALL
        .iter()
        .map(|&category| {
            let terms = overrides.remove(&category).unwrap_or_else(|| {
                builtin_terms(category)
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            });
            (category, terms)
        })
        .collect::<Vec<_>>();

    Lexicon::from_terms(&fuzzy, &refs, &categories)
}
