use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use super::domain::{Driver, DriverDraft, DriverId};
use super::scoring::ScoredDriver;
use super::screening::{filter_and_rank, FilterConfig};

const DRIVER_ID_PREFIX: char = 'D';

/// Monotonic driver id source. Ids are `D` plus a zero-padded sequence
/// number and are never handed out twice, even after a driver is removed.
///
/// The counter parks at `u64::MAX` once the sequence space is used up; that
/// value is never issued.
#[derive(Debug)]
pub struct DriverIdAllocator {
    next: AtomicU64,
}

impl Default for DriverIdAllocator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl DriverIdAllocator {
    pub fn starting_at(next: u64) -> Self {
        Self {
            next: AtomicU64::new(next.max(1)),
        }
    }

    /// Seed the sequence past the highest `D<number>` id already in use.
    pub fn after<'a>(ids: impl IntoIterator<Item = &'a DriverId>) -> Self {
        let highest = ids.into_iter().filter_map(sequence_of).max().unwrap_or(0);
        Self::starting_at(highest.saturating_add(1))
    }

    pub fn next_id(&self) -> Result<DriverId, RosterError> {
        let sequence = self
            .next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| {
                (next < u64::MAX).then(|| next + 1)
            })
            .map_err(|_| RosterError::IdSpaceExhausted)?;
        Ok(DriverId(format!("{DRIVER_ID_PREFIX}{sequence:03}")))
    }

    /// Make sure ids inserted from outside are never reissued.
    fn reserve(&self, id: &DriverId) {
        if let Some(sequence) = sequence_of(id) {
            self.next
                .fetch_max(sequence.saturating_add(1), Ordering::Relaxed);
        }
    }
}

fn sequence_of(id: &DriverId) -> Option<u64> {
    let digits = id.as_str().strip_prefix(DRIVER_ID_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Errors raised by roster mutations.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("driver id {0} is already registered")]
    DuplicateId(DriverId),
    #[error("no driver ids left to allocate")]
    IdSpaceExhausted,
}

/// In-memory, insertion-ordered driver roster.
#[derive(Debug, Default)]
pub struct Roster {
    drivers: Vec<Driver>,
    ids: DriverIdAllocator,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_drivers(drivers: Vec<Driver>) -> Result<Self, RosterError> {
        let mut seen = HashSet::new();
        for driver in &drivers {
            if !seen.insert(&driver.driver_id) {
                return Err(RosterError::DuplicateId(driver.driver_id.clone()));
            }
        }

        let ids = DriverIdAllocator::after(drivers.iter().map(|driver| &driver.driver_id));
        Ok(Self { drivers, ids })
    }

    /// Assign a fresh id to the draft and append it.
    pub fn register(&mut self, draft: DriverDraft) -> Result<&Driver, RosterError> {
        let driver_id = self.ids.next_id()?;
        if self.get(&driver_id).is_some() {
            return Err(RosterError::DuplicateId(driver_id));
        }
        debug!(%driver_id, name = %draft.name, "registering driver");
        let index = self.drivers.len();
        self.drivers.push(draft.into_driver(driver_id));
        Ok(&self.drivers[index])
    }

    /// Append a driver that already carries an id.
    pub fn insert(&mut self, driver: Driver) -> Result<(), RosterError> {
        if self.get(&driver.driver_id).is_some() {
            return Err(RosterError::DuplicateId(driver.driver_id));
        }
        self.ids.reserve(&driver.driver_id);
        self.drivers.push(driver);
        Ok(())
    }

    pub fn remove(&mut self, driver_id: &DriverId) -> Option<Driver> {
        let index = self
            .drivers
            .iter()
            .position(|driver| &driver.driver_id == driver_id)?;
        debug!(%driver_id, "removing driver");
        Some(self.drivers.remove(index))
    }

    pub fn get(&self, driver_id: &DriverId) -> Option<&Driver> {
        self.drivers
            .iter()
            .find(|driver| &driver.driver_id == driver_id)
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    pub fn rank(&self, config: &FilterConfig) -> Vec<ScoredDriver<'_>> {
        filter_and_rank(&self.drivers, config)
    }
}
