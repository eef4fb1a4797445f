//! Endpoint catalogue.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Indicator used by the analysis endpoints when the caller supplies none
pub const DEFAULT_INDICATOR: &str = "unemployment";

/// Every backend endpoint the dashboard reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Endpoint {
    Unemployment,
    UnemploymentSummary,
    Occupied,
    Income,
    Informality,
    AnalysisBySex,
    AnalysisByRace,
    AnalysisByAge,
    AnalysisByEducation,
    AnalysisByRegion,
}

impl Endpoint {
    pub const ALL: [Endpoint; 10] = [
        Endpoint::Unemployment,
        Endpoint::UnemploymentSummary,
        Endpoint::Occupied,
        Endpoint::Income,
        Endpoint::Informality,
        Endpoint::AnalysisBySex,
        Endpoint::AnalysisByRace,
        Endpoint::AnalysisByAge,
        Endpoint::AnalysisByEducation,
        Endpoint::AnalysisByRegion,
    ];

    /// Path relative to the API base path
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Unemployment => "/ibge/unemployment",
            Endpoint::UnemploymentSummary => "/ibge/unemployment/summary",
            Endpoint::Occupied => "/ibge/occupied",
            Endpoint::Income => "/ibge/income",
            Endpoint::Informality => "/ibge/informality",
            Endpoint::AnalysisBySex => "/analysis/sex",
            Endpoint::AnalysisByRace => "/analysis/race",
            Endpoint::AnalysisByAge => "/analysis/age",
            Endpoint::AnalysisByEducation => "/analysis/education",
            Endpoint::AnalysisByRegion => "/analysis/region",
        }
    }

    /// Whether the endpoint takes an `indicator` query parameter
    pub fn accepts_indicator(&self) -> bool {
        matches!(
            self,
            Endpoint::AnalysisBySex
                | Endpoint::AnalysisByRace
                | Endpoint::AnalysisByEducation
                | Endpoint::AnalysisByRegion
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Unemployment => "unemployment",
            Endpoint::UnemploymentSummary => "unemployment-summary",
            Endpoint::Occupied => "occupied",
            Endpoint::Income => "income",
            Endpoint::Informality => "informality",
            Endpoint::AnalysisBySex => "analysis-sex",
            Endpoint::AnalysisByRace => "analysis-race",
            Endpoint::AnalysisByAge => "analysis-age",
            Endpoint::AnalysisByEducation => "analysis-education",
            Endpoint::AnalysisByRegion => "analysis-region",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = Endpoint::ALL.iter().map(|e| e.as_str()).collect();
                format!("Unknown endpoint '{}', expected one of: {}", s, known.join(", "))
            })
    }
}
