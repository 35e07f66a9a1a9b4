use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::Serialize;

use super::super::domain::{Affiliation, Appearance, CategoryParseError, OdorLevel};
use super::super::schedule::{ScheduleError, TimeSlot};

pub const DEFAULT_MIN_TOTAL: u8 = 70;
pub const DEFAULT_MIN_QUANT: u8 = 35;
pub const DEFAULT_MIN_QUAL: u8 = 20;
pub const DEFAULT_ODOR_CEILING: OdorLevel = OdorLevel::Slight;
pub const DEFAULT_APPEARANCE_FLOOR: Appearance = Appearance::Normal;

/// Which affiliations pass the affiliation filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AffiliationFilter {
    #[default]
    All,
    Only(Affiliation),
}

impl AffiliationFilter {
    pub fn admits(self, affiliation: Affiliation) -> bool {
        match self {
            AffiliationFilter::All => true,
            AffiliationFilter::Only(required) => required == affiliation,
        }
    }
}

impl FromStr for AffiliationFilter {
    type Err = CategoryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

impl fmt::Display for AffiliationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AffiliationFilter::All => f.write_str("all"),
            AffiliationFilter::Only(affiliation) => f.write_str(affiliation.label()),
        }
    }
}

/// Validated filter and threshold selection for one screening pass.
///
/// Built fresh for every evaluation; nothing is carried between passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub min_total: u8,
    pub min_quant: u8,
    pub min_qual: u8,
    pub affiliation: AffiliationFilter,
    /// Matched case-insensitively; inactive when blank.
    pub keyword: String,
    pub non_smoker_only: bool,
    pub odor_ceiling: OdorLevel,
    pub appearance_floor: Appearance,
    /// Substring of an availability area; inactive when blank.
    pub area: String,
    pub time_window: Option<TimeSlot>,
    /// Inactive when empty.
    pub weekdays: HashSet<Weekday>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_total: DEFAULT_MIN_TOTAL,
            min_quant: DEFAULT_MIN_QUANT,
            min_qual: DEFAULT_MIN_QUAL,
            affiliation: AffiliationFilter::All,
            keyword: String::new(),
            non_smoker_only: false,
            odor_ceiling: DEFAULT_ODOR_CEILING,
            appearance_floor: DEFAULT_APPEARANCE_FLOOR,
            area: String::new(),
            time_window: None,
            weekdays: HashSet::new(),
        }
    }
}

impl FilterConfig {
    /// Thresholds at zero and every hygiene and availability filter open.
    pub fn permissive() -> Self {
        Self {
            min_total: 0,
            min_quant: 0,
            min_qual: 0,
            odor_ceiling: OdorLevel::Strong,
            appearance_floor: Appearance::Unclean,
            ..Self::default()
        }
    }

    pub(crate) fn keyword_needle(&self) -> Option<String> {
        active_text(&self.keyword)
    }

    pub(crate) fn area_needle(&self) -> Option<String> {
        active_text(&self.area)
    }
}

/// Only the activity check trims; the needle itself is matched as typed.
fn active_text(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_lowercase())
    }
}

/// Raw operator input before validation. Time bounds arrive as `HH:MM`
/// strings and the window only applies when both are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub min_total: u8,
    pub min_quant: u8,
    pub min_qual: u8,
    pub affiliation: AffiliationFilter,
    pub keyword: String,
    pub non_smoker_only: bool,
    pub odor_ceiling: OdorLevel,
    pub appearance_floor: Appearance,
    pub area: String,
    pub time_start: Option<String>,
    pub time_end: Option<String>,
    pub weekdays: Vec<Weekday>,
}

impl Default for FilterSelection {
    fn default() -> Self {
        let defaults = FilterConfig::default();
        Self {
            min_total: defaults.min_total,
            min_quant: defaults.min_quant,
            min_qual: defaults.min_qual,
            affiliation: defaults.affiliation,
            keyword: defaults.keyword,
            non_smoker_only: defaults.non_smoker_only,
            odor_ceiling: defaults.odor_ceiling,
            appearance_floor: defaults.appearance_floor,
            area: defaults.area,
            time_start: None,
            time_end: None,
            weekdays: Vec::new(),
        }
    }
}

impl TryFrom<FilterSelection> for FilterConfig {
    type Error = ScreeningError;

    fn try_from(selection: FilterSelection) -> Result<Self, Self::Error> {
        let time_window = match (
            present(selection.time_start.as_deref()),
            present(selection.time_end.as_deref()),
        ) {
            (Some(start), Some(end)) => Some(TimeSlot::parse(start, end)?),
            _ => None,
        };

        Ok(Self {
            min_total: selection.min_total,
            min_quant: selection.min_quant,
            min_qual: selection.min_qual,
            affiliation: selection.affiliation,
            keyword: selection.keyword,
            non_smoker_only: selection.non_smoker_only,
            odor_ceiling: selection.odor_ceiling,
            appearance_floor: selection.appearance_floor,
            area: selection.area,
            time_window,
            weekdays: selection.weekdays.into_iter().collect(),
        })
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.trim().is_empty())
}

/// Errors raised while turning a selection into a [`FilterConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error("invalid time window: {0}")]
    InvalidTimeWindow(#[from] ScheduleError),
}
