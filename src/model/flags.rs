use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Flag {
    BlankUnit,
    NoExternalReference,
    NoQuantitativeData,
    HedgingLanguage,
    HeavyHedging,
    NarrowCoverage,
    ConsistencyFallback,
}

impl Flag {
    pub fn name(self) -> &'static str {
        match self {
            Flag::BlankUnit => "BLANK_UNIT",
            Flag::NoExternalReference => "NO_EXTERNAL_REFERENCE",
            Flag::NoQuantitativeData => "NO_QUANTITATIVE_DATA",
            Flag::HedgingLanguage => "HEDGING_LANGUAGE",
            Flag::HeavyHedging => "HEAVY_HEDGING",
            Flag::NarrowCoverage => "NARROW_COVERAGE",
            Flag::ConsistencyFallback => "CONSISTENCY_FALLBACK",
        }
    }
}

pub fn flag_order() -> &'static [Flag] {
    &[
        Flag::BlankUnit,
        Flag::NoExternalReference,
        Flag::NoQuantitativeData,
        Flag::HedgingLanguage,
        Flag::HeavyHedging,
        Flag::NarrowCoverage,
        Flag::ConsistencyFallback,
    ]
}
