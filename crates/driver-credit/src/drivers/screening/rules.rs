use serde::Serialize;

use super::super::domain::{Affiliation, Appearance, OdorLevel, SmokingStatus};
use super::super::schedule::TimeSlot;
use super::super::scoring::ScoredDriver;
use super::config::{AffiliationFilter, FilterConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreMetric {
    Total,
    Quantitative,
    Qualitative,
}

/// First eligibility predicate a driver failed, for audit and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    BelowThreshold {
        metric: ScoreMetric,
        required: u8,
        actual: u8,
    },
    Affiliation {
        required: Affiliation,
        actual: Affiliation,
    },
    KeywordMismatch {
        keyword: String,
    },
    Smoker {
        status: SmokingStatus,
    },
    OdorAboveCeiling {
        ceiling: OdorLevel,
        actual: OdorLevel,
    },
    AppearanceBelowFloor {
        floor: Appearance,
        actual: Appearance,
    },
    AreaMismatch {
        area: String,
    },
    ScheduleMismatch {
        window: TimeSlot,
    },
    WeekdayMismatch,
}

impl Rejection {
    pub fn summary(&self) -> String {
        match self {
            Rejection::BelowThreshold {
                metric,
                required,
                actual,
            } => format!("{metric:?} score {actual} below minimum {required}"),
            Rejection::Affiliation { required, actual } => format!(
                "affiliation {} does not match {}",
                actual.label(),
                required.label()
            ),
            Rejection::KeywordMismatch { keyword } => {
                format!("no match for keyword '{keyword}'")
            }
            Rejection::Smoker { status } => format!("not a non-smoker ({})", status.label()),
            Rejection::OdorAboveCeiling { ceiling, actual } => format!(
                "odor '{}' exceeds ceiling '{}'",
                actual.label(),
                ceiling.label()
            ),
            Rejection::AppearanceBelowFloor { floor, actual } => format!(
                "appearance '{}' below floor '{}'",
                actual.label(),
                floor.label()
            ),
            Rejection::AreaMismatch { area } => format!("no availability area matches '{area}'"),
            Rejection::ScheduleMismatch { window } => format!(
                "no time slot overlaps {}-{}",
                window.start.format("%H:%M"),
                window.end.format("%H:%M")
            ),
            Rejection::WeekdayMismatch => "not operating on any requested weekday".to_string(),
        }
    }
}

/// Apply the conjunctive predicate chain in order and report the first
/// failure.
pub fn screen(scored: &ScoredDriver<'_>, config: &FilterConfig) -> Result<(), Rejection> {
    check_thresholds(scored, config)?;
    check_affiliation(scored, config)?;
    check_keyword(scored, config)?;
    check_smoking(scored, config)?;
    check_odor(scored, config)?;
    check_appearance(scored, config)?;
    check_area(scored, config)?;
    check_schedule(scored, config)?;
    check_weekdays(scored, config)
}

fn check_thresholds(scored: &ScoredDriver<'_>, config: &FilterConfig) -> Result<(), Rejection> {
    let checks = [
        (ScoreMetric::Total, config.min_total, scored.total),
        (ScoreMetric::Quantitative, config.min_quant, scored.quant),
        (ScoreMetric::Qualitative, config.min_qual, scored.qual),
    ];

    match checks
        .into_iter()
        .find(|(_, required, actual)| actual < required)
    {
        Some((metric, required, actual)) => Err(Rejection::BelowThreshold {
            metric,
            required,
            actual,
        }),
        None => Ok(()),
    }
}

fn check_affiliation(scored: &ScoredDriver<'_>, config: &FilterConfig) -> Result<(), Rejection> {
    let actual = scored.driver.affiliation;
    match config.affiliation {
        AffiliationFilter::Only(required) if !config.affiliation.admits(actual) => {
            Err(Rejection::Affiliation { required, actual })
        }
        _ => Ok(()),
    }
}

fn check_keyword(scored: &ScoredDriver<'_>, config: &FilterConfig) -> Result<(), Rejection> {
    let Some(needle) = config.keyword_needle() else {
        return Ok(());
    };

    if scored.driver.search_text().contains(&needle) {
        Ok(())
    } else {
        Err(Rejection::KeywordMismatch {
            keyword: config.keyword.clone(),
        })
    }
}

fn check_smoking(scored: &ScoredDriver<'_>, config: &FilterConfig) -> Result<(), Rejection> {
    let status = scored.driver.attributes.smoking;
    if config.non_smoker_only && status != SmokingStatus::NonSmoker {
        return Err(Rejection::Smoker { status });
    }
    Ok(())
}

fn check_odor(scored: &ScoredDriver<'_>, config: &FilterConfig) -> Result<(), Rejection> {
    let actual = scored.driver.attributes.odor;
    if actual.rank() > config.odor_ceiling.rank() {
        return Err(Rejection::OdorAboveCeiling {
            ceiling: config.odor_ceiling,
            actual,
        });
    }
    Ok(())
}

fn check_appearance(scored: &ScoredDriver<'_>, config: &FilterConfig) -> Result<(), Rejection> {
    let actual = scored.driver.attributes.appearance;
    if actual.rank() < config.appearance_floor.rank() {
        return Err(Rejection::AppearanceBelowFloor {
            floor: config.appearance_floor,
            actual,
        });
    }
    Ok(())
}

fn check_area(scored: &ScoredDriver<'_>, config: &FilterConfig) -> Result<(), Rejection> {
    let Some(needle) = config.area_needle() else {
        return Ok(());
    };

    let matched = scored
        .driver
        .availability
        .areas
        .iter()
        .any(|area| area.to_lowercase().contains(&needle));

    if matched {
        Ok(())
    } else {
        Err(Rejection::AreaMismatch {
            area: config.area.clone(),
        })
    }
}

fn check_schedule(scored: &ScoredDriver<'_>, config: &FilterConfig) -> Result<(), Rejection> {
    let Some(window) = config.time_window else {
        return Ok(());
    };

    let matched = scored
        .driver
        .availability
        .time_slots
        .iter()
        .any(|slot| slot.overlaps(&window));

    if matched {
        Ok(())
    } else {
        Err(Rejection::ScheduleMismatch { window })
    }
}

fn check_weekdays(scored: &ScoredDriver<'_>, config: &FilterConfig) -> Result<(), Rejection> {
    if config.weekdays.is_empty() {
        return Ok(());
    }

    let availability = &scored.driver.availability;
    let matched = config.weekdays.iter().any(|day| availability.works_on(*day));

    if matched {
        Ok(())
    } else {
        Err(Rejection::WeekdayMismatch)
    }
}
