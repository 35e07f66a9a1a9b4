use serde::Serialize;

use super::super::domain::{DocsStatus, QuantKpi, VehicleFit};
use super::{ScoreComponent, ScoreDimension};

pub const QUANT_MAX: u8 = 60;

const SAFETY_MAX: f64 = 15.0;
const RELIABILITY_MAX: f64 = 15.0;
const CUSTOMER_SATISFACTION_MAX: f64 = 10.0;
const WORKDAYS_MAX: f64 = 10.0;
const DOCUMENTATION_MAX: f64 = 5.0;

/// The six clamped quantitative sub-scores, kept unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuantBreakdown {
    pub safety: f64,
    pub reliability: f64,
    pub customer_satisfaction: f64,
    pub workdays: f64,
    pub documentation: f64,
    pub vehicle: f64,
}

impl QuantBreakdown {
    pub fn from_kpi(kpi: &QuantKpi) -> Self {
        let kpi = kpi.normalized();

        Self {
            safety: safety(&kpi),
            reliability: reliability(&kpi),
            customer_satisfaction: customer_satisfaction(&kpi),
            workdays: workdays(&kpi),
            documentation: documentation(&kpi),
            vehicle: vehicle(kpi.vehicle_fit),
        }
    }

    /// Sum of the clamped sub-scores, rounded once.
    pub fn total(&self) -> u8 {
        let sum = self.safety
            + self.reliability
            + self.customer_satisfaction
            + self.workdays
            + self.documentation
            + self.vehicle;
        // Every term is already clamped, so the sum lies in 0..=60.
        sum.round() as u8
    }

    /// Per-dimension rows, each rounded for display on its own.
    pub fn components(&self) -> Vec<ScoreComponent> {
        [
            (ScoreDimension::Safety, self.safety),
            (ScoreDimension::Reliability, self.reliability),
            (
                ScoreDimension::CustomerSatisfaction,
                self.customer_satisfaction,
            ),
            (ScoreDimension::Workdays, self.workdays),
            (ScoreDimension::Documentation, self.documentation),
            (ScoreDimension::VehicleFit, self.vehicle),
        ]
        .into_iter()
        .map(|(dimension, raw)| ScoreComponent::rounded(dimension, raw))
        .collect()
    }
}

/// Score operational KPIs on the 0–60 quantitative scale.
pub fn quant_score(kpi: &QuantKpi) -> u8 {
    QuantBreakdown::from_kpi(kpi).total()
}

fn safety(kpi: &QuantKpi) -> f64 {
    let base = match kpi.incidents_12m {
        0 => 15.0,
        1 => 10.0,
        _ => 0.0,
    };
    let penalty = kpi.damage_rate * 100.0 * 0.1;
    (base - penalty).clamp(0.0, SAFETY_MAX)
}

fn reliability(kpi: &QuantKpi) -> f64 {
    let penalty = kpi.late_rate * 100.0 * 0.5 + kpi.cancel_rate * 100.0 * 0.8;
    (RELIABILITY_MAX - penalty).clamp(0.0, RELIABILITY_MAX)
}

fn customer_satisfaction(kpi: &QuantKpi) -> f64 {
    let rescaled = ((kpi.cs_avg - 1.0) / 4.0) * 10.0;
    let complaint_penalty = f64::from(kpi.complaints.saturating_mul(3).min(5));
    (rescaled - complaint_penalty).clamp(0.0, CUSTOMER_SATISFACTION_MAX)
}

fn workdays(kpi: &QuantKpi) -> f64 {
    let base = match kpi.workdays_90d {
        60.. => 10.0,
        30..=59 => 7.0,
        10..=29 => 4.0,
        _ => 1.0,
    };
    let night_bonus = (kpi.night_ratio * 10.0).min(3.0);
    (base + night_bonus).clamp(0.0, WORKDAYS_MAX)
}

fn documentation(kpi: &QuantKpi) -> f64 {
    let base = match kpi.docs_valid {
        DocsStatus::Complete => 5.0,
        DocsStatus::Partial => 3.0,
        DocsStatus::Missing => 0.0,
    };
    let error_penalty = (kpi.app_error_rate * 100.0 * 0.05).min(2.0);
    (base - error_penalty).clamp(0.0, DOCUMENTATION_MAX)
}

fn vehicle(fit: VehicleFit) -> f64 {
    match fit {
        VehicleFit::Ideal => 5.0,
        VehicleFit::Adequate => 4.0,
        VehicleFit::Basic => 3.0,
    }
}
