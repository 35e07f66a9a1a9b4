mod qualitative;
mod quantitative;

pub use qualitative::{qual_score, QualBreakdown, QUAL_MAX};
pub use quantitative::{quant_score, QuantBreakdown, QUANT_MAX};

use serde::Serialize;

use super::domain::Driver;

pub const TOTAL_MAX: u8 = QUANT_MAX + QUAL_MAX;

/// Sub-score dimensions shown alongside the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreDimension {
    Safety,
    Reliability,
    CustomerSatisfaction,
    Workdays,
    Documentation,
    VehicleFit,
    Manners,
    Communication,
    TrustImpression,
    ProblemHandling,
    VehicleTidiness,
}

impl ScoreDimension {
    pub const fn max_points(self) -> u8 {
        match self {
            ScoreDimension::Safety | ScoreDimension::Reliability => 15,
            ScoreDimension::CustomerSatisfaction | ScoreDimension::Workdays => 10,
            ScoreDimension::Documentation | ScoreDimension::VehicleFit => 5,
            ScoreDimension::Manners
            | ScoreDimension::Communication
            | ScoreDimension::TrustImpression
            | ScoreDimension::ProblemHandling
            | ScoreDimension::VehicleTidiness => 8,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreDimension::Safety => "safety",
            ScoreDimension::Reliability => "reliability",
            ScoreDimension::CustomerSatisfaction => "customer satisfaction",
            ScoreDimension::Workdays => "workdays",
            ScoreDimension::Documentation => "documentation",
            ScoreDimension::VehicleFit => "vehicle fit",
            ScoreDimension::Manners => "manners",
            ScoreDimension::Communication => "communication",
            ScoreDimension::TrustImpression => "trust impression",
            ScoreDimension::ProblemHandling => "problem handling",
            ScoreDimension::VehicleTidiness => "vehicle tidiness",
        }
    }
}

/// Discrete contribution to a score, allowing transparent audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub dimension: ScoreDimension,
    pub score: u8,
    pub max: u8,
}

impl ScoreComponent {
    pub(crate) fn new(dimension: ScoreDimension, score: u8) -> Self {
        Self {
            dimension,
            score,
            max: dimension.max_points(),
        }
    }

    pub(crate) fn rounded(dimension: ScoreDimension, raw: f64) -> Self {
        // Sub-scores arrive clamped to their band.
        Self::new(dimension, raw.round() as u8)
    }
}

/// A driver paired with the scores derived for it in one scoring pass.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredDriver<'a> {
    pub driver: &'a Driver,
    pub quant: u8,
    pub qual: u8,
    pub total: u8,
    pub quant_breakdown: QuantBreakdown,
    pub qual_breakdown: QualBreakdown,
}

impl ScoredDriver<'_> {
    pub fn components(&self) -> Vec<ScoreComponent> {
        let mut components = self.quant_breakdown.components();
        components.extend(self.qual_breakdown.components());
        components
    }
}

/// Compute both scores for a driver without touching the record.
pub fn score_driver(driver: &Driver) -> ScoredDriver<'_> {
    let quant_breakdown = QuantBreakdown::from_kpi(&driver.kpi);
    let qual_breakdown = QualBreakdown::from_inputs(&driver.qin);
    let quant = quant_breakdown.total();
    let qual = qual_breakdown.total();

    ScoredDriver {
        driver,
        quant,
        qual,
        total: quant + qual,
        quant_breakdown,
        qual_breakdown,
    }
}
