//! Multi-criteria screening: score every driver, drop those failing any
//! eligibility predicate, and rank the rest by total score.

mod config;
mod rules;

pub use config::{
    AffiliationFilter, FilterConfig, FilterSelection, ScreeningError, DEFAULT_APPEARANCE_FLOOR,
    DEFAULT_MIN_QUAL, DEFAULT_MIN_QUANT, DEFAULT_MIN_TOTAL, DEFAULT_ODOR_CEILING,
};
pub use rules::{screen, Rejection, ScoreMetric};

use tracing::{debug, trace};

use super::domain::Driver;
use super::scoring::{score_driver, ScoredDriver};

/// Score, filter and rank a roster.
///
/// The input is only read. Survivors are ordered by total score descending;
/// drivers with equal totals keep their input order, so repeated calls with
/// the same arguments return the same sequence.
pub fn filter_and_rank<'a>(drivers: &'a [Driver], config: &FilterConfig) -> Vec<ScoredDriver<'a>> {
    let mut matches: Vec<ScoredDriver<'a>> = drivers
        .iter()
        .map(score_driver)
        .filter(|scored| match screen(scored, config) {
            Ok(()) => true,
            Err(rejection) => {
                trace!(
                    driver_id = %scored.driver.driver_id,
                    reason = %rejection.summary(),
                    "driver screened out"
                );
                false
            }
        })
        .collect();

    // `sort_by` is stable.
    matches.sort_by(|a, b| b.total.cmp(&a.total));

    debug!(
        candidates = drivers.len(),
        matches = matches.len(),
        "driver screening pass complete"
    );

    matches
}
