//! Driver credit scoring, eligibility screening and the in-memory roster.
//!
//! Scoring is pure: [`quant_score`], [`qual_score`] and [`filter_and_rank`]
//! never mutate their inputs and carry no state between calls.

pub mod domain;
mod fixtures;
pub mod roster;
pub mod schedule;
pub mod scoring;
pub mod screening;

#[cfg(test)]
mod tests;

pub use domain::{
    Affiliation, Appearance, AttributeFlags, Availability, CategoryParseError, DocsStatus, Driver,
    DriverDraft, DriverId, OdorLevel, QualScoreInputs, QuantKpi, SmokingStatus, VehicleFit,
};
pub use fixtures::reference_roster;
pub use roster::{DriverIdAllocator, Roster, RosterError};
pub use schedule::{overlaps, parse_time_of_day, ScheduleError, TimeSlot};
pub use scoring::{
    qual_score, quant_score, score_driver, QualBreakdown, QuantBreakdown, ScoreComponent,
    ScoreDimension, ScoredDriver, QUAL_MAX, QUANT_MAX, TOTAL_MAX,
};
pub use screening::{
    filter_and_rank, screen, AffiliationFilter, FilterConfig, FilterSelection, Rejection,
    ScoreMetric, ScreeningError,
};
