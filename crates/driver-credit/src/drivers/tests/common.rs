use chrono::Weekday;

use crate::drivers::domain::{
    Affiliation, AttributeFlags, Availability, Driver, DriverDraft, DriverId, QualScoreInputs,
    QuantKpi,
};
use crate::drivers::schedule::TimeSlot;
use crate::drivers::screening::FilterConfig;

pub(super) fn slot(start: &str, end: &str) -> TimeSlot {
    TimeSlot::parse(start, end).expect("valid slot")
}

/// A driver whose scores clear every default threshold.
pub(super) fn baseline_driver(id: &str) -> Driver {
    Driver {
        driver_id: DriverId(id.to_string()),
        name: format!("Driver {id}"),
        affiliation: Affiliation::InHouse,
        company_name: None,
        base_area: "Shinagawa".to_string(),
        attributes: AttributeFlags {
            vehicle_type: "Light van".to_string(),
            tags: vec!["Daytime".to_string()],
            ..AttributeFlags::default()
        },
        availability: Availability {
            areas: vec!["Tokyo 23 wards".to_string()],
            time_slots: vec![slot("09:00", "17:00")],
            weekdays: vec![Weekday::Mon, Weekday::Wed],
        },
        kpi: QuantKpi {
            cs_avg: 4.6,
            workdays_90d: 70,
            ..QuantKpi::default()
        },
        qin: QualScoreInputs::default(),
    }
}

/// Same profile as [`baseline_driver`] with the total score shifted by
/// lowering the assessor ratings.
pub(super) fn driver_with_ratings(id: &str, rating: f64) -> Driver {
    Driver {
        qin: QualScoreInputs {
            manners: rating,
            communication: rating,
            trust_impression: rating,
            problem_handling: rating,
            vehicle_tidy: rating,
        },
        ..baseline_driver(id)
    }
}

pub(super) fn draft(name: &str) -> DriverDraft {
    DriverDraft {
        name: name.to_string(),
        affiliation: Affiliation::SoleProprietor,
        company_name: None,
        base_area: "Yokohama".to_string(),
        attributes: AttributeFlags::default(),
        availability: Availability::default(),
        kpi: QuantKpi::default(),
        qin: QualScoreInputs::default(),
    }
}

pub(super) fn ids(scored: &[crate::drivers::ScoredDriver<'_>]) -> Vec<String> {
    scored
        .iter()
        .map(|entry| entry.driver.driver_id.0.clone())
        .collect()
}

pub(super) fn open_filter() -> FilterConfig {
    FilterConfig::permissive()
}
