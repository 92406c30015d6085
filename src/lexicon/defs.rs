use crate::lexicon::Category;

/// Hedging and aspirational phrases. Matched as whole words.
pub const FUZZY_TERMS: &[&str] = &[
    "committed",
    "strive",
    "aim",
    "endeavor",
    "dedicated",
    "aspire",
    "vision",
    "sustainable development",
    "on track",
    "working towards",
    "believe",
    "hope",
    "intend",
    "efforts",
    "targeting",
    "seeking",
    "aspiration",
    "moving toward",
    "leading",
    "progressing",
    "mission",
];

/// Reporting frameworks and certifications. Matched as plain substrings.
pub const STANDARD_REFS: &[&str] = &[
    "GRI", "CDP", "SASB", "SGX", "TCFD", "UN SDG", "ISO 14001", "IFRS", "ESRS", "ISSB", "CSRD",
    "B Corp", "UNGC", "CDSB", "IIRC",
];

const ENVIRONMENTAL: &[&str] = &[
    "carbon",
    "emissions",
    "climate",
    "energy",
    "environment",
    "green",
    "waste",
    "recycling",
    "pollution",
    "biodiversity",
    "sustainability",
    "renewable",
    "net zero",
    "solar",
    "water",
];

const SOCIAL: &[&str] = &[
    "diversity",
    "equality",
    "community",
    "education",
    "volunteer",
    "inclusion",
    "labor",
    "human rights",
    "safety",
    "philanthropy",
    "employee",
    "training",
];

const GOVERNANCE: &[&str] = &[
    "governance",
    "ethics",
    "board",
    "audit",
    "compliance",
    "transparency",
    "management",
    "oversight",
    "anti-corruption",
    "stakeholders",
];

/// Units accepted after a number for the quantitative-data check.
pub const QUANT_UNITS: &[&str] = &["%", "tons", "kg", "CO2", "usd", "year", "mwh", "metric"];

#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub category: Category,
    pub terms: &'static [&'static str],
}

const BUILTIN_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        category: Category::Environmental,
        terms: ENVIRONMENTAL,
    },
    CategoryDef {
        category: Category::Social,
        terms: SOCIAL,
    },
    CategoryDef {
        category: Category::Governance,
        terms: GOVERNANCE,
    },
];

pub fn builtin_categories() -> &'static [CategoryDef] {
    BUILTIN_CATEGORIES
}

pub fn builtin_terms(category: Category) -> &'static [&'static str] {
    BUILTIN_CATEGORIES
        .iter()
        .find(|def| def.category == category)
        .map(|def| def.terms)
        .unwrap_or(&[])
}
