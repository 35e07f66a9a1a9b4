//! Time-of-day slots and the overlap test used by the schedule filter.
//!
//! Slots are half-open: `[start, end)`. A slot whose start is later than its
//! end runs overnight and is split at midnight into `[start, 24:00)` and
//! `[00:00, end)` before any comparison. A slot with `start == end` is empty.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

const MINUTES_PER_DAY: u16 = 24 * 60;
const TIME_FORMAT: &str = "%H:%M";

/// Error raised when a time-of-day string cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("time of day '{value}' must use HH:MM (24-hour) format")]
    InvalidTimeOfDay { value: String },
}

/// Parse a 24-hour `HH:MM` string.
pub fn parse_time_of_day(raw: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT).map_err(|_| {
        ScheduleError::InvalidTimeOfDay {
            value: raw.to_string(),
        }
    })
}

/// Contiguous working window within a day (or across midnight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, ScheduleError> {
        Ok(Self {
            start: parse_time_of_day(start)?,
            end: parse_time_of_day(end)?,
        })
    }

    pub fn is_overnight(&self) -> bool {
        self.start > self.end
    }

    /// Same-day `[start, end)` minute ranges covered by the slot.
    fn segments(&self) -> impl Iterator<Item = (u16, u16)> {
        let start = minute_of_day(self.start);
        let end = minute_of_day(self.end);

        let (first, second) = if start > end {
            ((start, MINUTES_PER_DAY), Some((0, end)))
        } else {
            ((start, end), None)
        };

        std::iter::once(first)
            .chain(second)
            .filter(|(from, to)| from < to)
    }

    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        overlaps(self, other)
    }
}

/// Half-open interval intersection; touching endpoints do not overlap.
pub fn overlaps(a: &TimeSlot, b: &TimeSlot) -> bool {
    a.segments().any(|(a_start, a_end)| {
        b.segments()
            .any(|(b_start, b_end)| a_start < b_end && b_start < a_end)
    })
}

fn minute_of_day(time: NaiveTime) -> u16 {
    // hour < 24 and minute < 60, so the value always fits.
    (time.hour() * 60 + time.minute()) as u16
}

mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(super::TIME_FORMAT))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_time_of_day(&raw).map_err(serde::de::Error::custom)
    }
}
