use serde::Serialize;

use super::super::domain::QualScoreInputs;
use super::{ScoreComponent, ScoreDimension};

pub const QUAL_MAX: u8 = 40;

/// Points available per qualitative rating.
const POINTS_PER_RATING: f64 = 8.0;

/// The five assessor ratings, each rescaled to 0–8 and rounded individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QualBreakdown {
    pub manners: u8,
    pub communication: u8,
    pub trust_impression: u8,
    pub problem_handling: u8,
    pub vehicle_tidy: u8,
}

impl QualBreakdown {
    pub fn from_inputs(qin: &QualScoreInputs) -> Self {
        let qin = qin.normalized();

        Self {
            manners: rescale(qin.manners),
            communication: rescale(qin.communication),
            trust_impression: rescale(qin.trust_impression),
            problem_handling: rescale(qin.problem_handling),
            vehicle_tidy: rescale(qin.vehicle_tidy),
        }
    }

    /// Sum of the per-term rounded values. Rounding happens before the sum,
    /// so this can differ from rounding the unrounded total.
    pub fn total(&self) -> u8 {
        self.manners
            + self.communication
            + self.trust_impression
            + self.problem_handling
            + self.vehicle_tidy
    }

    pub fn components(&self) -> Vec<ScoreComponent> {
        vec![
            ScoreComponent::new(ScoreDimension::Manners, self.manners),
            ScoreComponent::new(ScoreDimension::Communication, self.communication),
            ScoreComponent::new(ScoreDimension::TrustImpression, self.trust_impression),
            ScoreComponent::new(ScoreDimension::ProblemHandling, self.problem_handling),
            ScoreComponent::new(ScoreDimension::VehicleTidiness, self.vehicle_tidy),
        ]
    }
}

/// Score assessor ratings on the 0–40 qualitative scale.
pub fn qual_score(qin: &QualScoreInputs) -> u8 {
    QualBreakdown::from_inputs(qin).total()
}

fn rescale(rating: f64) -> u8 {
    // rating is normalized to 0..=100, so the result lies in 0..=8.
    ((rating / 100.0) * POINTS_PER_RATING).round() as u8
}
