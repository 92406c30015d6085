use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::thresholds::{
    COMPLETENESS_MAX, CONSISTENCY_MAX, SPECIFICITY_MAX, TRANSPARENCY_MAX,
};

/// The four radar axes, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    Transparency,
    Specificity,
    Completeness,
    Consistency,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Transparency,
        Axis::Specificity,
        Axis::Completeness,
        Axis::Consistency,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Axis::Transparency => "Transparency",
            Axis::Specificity => "Specificity",
            Axis::Completeness => "Completeness",
            Axis::Consistency => "Consistency",
        }
    }

    pub fn max(self) -> u8 {
        match self {
            Axis::Transparency => TRANSPARENCY_MAX,
            Axis::Specificity => SPECIFICITY_MAX,
            Axis::Completeness => COMPLETENESS_MAX,
            Axis::Consistency => CONSISTENCY_MAX,
        }
    }
}

/// Per-axis arithmetic means over a non-empty result table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RadarAverages {
    pub transparency: f64,
    pub specificity: f64,
    pub completeness: f64,
    pub consistency: f64,
}

impl RadarAverages {
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Transparency => self.transparency,
            Axis::Specificity => self.specificity,
            Axis::Completeness => self.completeness,
            Axis::Consistency => self.consistency,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axis, f64)> + '_ {
        Axis::ALL.into_iter().map(|axis| (axis, self.get(axis)))
    }

    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        self.iter().map(|(axis, v)| (axis.name(), v)).collect()
    }
}

pub fn axis_max_map() -> BTreeMap<&'static str, u8> {
    Axis::ALL
        .into_iter()
        .map(|axis| (axis.name(), axis.max()))
        .collect()
}
