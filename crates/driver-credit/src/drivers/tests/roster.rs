use super::common::*;
use crate::drivers::domain::DriverId;
use crate::drivers::fixtures::reference_roster;
use crate::drivers::roster::{DriverIdAllocator, Roster, RosterError};
use crate::drivers::screening::FilterConfig;

#[test]
fn register_assigns_the_next_padded_id() {
    let mut roster = Roster::from_drivers(reference_roster()).expect("unique ids");

    let registered = roster.register(draft("New Driver")).expect("id available");

    assert_eq!(registered.driver_id, DriverId("D007".to_string()));
    assert_eq!(roster.len(), 7);
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut roster = Roster::from_drivers(reference_roster()).expect("unique ids");

    let removed = roster
        .remove(&DriverId("D006".to_string()))
        .expect("D006 present");
    assert_eq!(removed.driver_id.as_str(), "D006");
    assert_eq!(roster.len(), 5);

    let first = roster
        .register(draft("First"))
        .expect("id available")
        .driver_id
        .clone();
    let second = roster
        .register(draft("Second"))
        .expect("id available")
        .driver_id
        .clone();

    assert_eq!(first.as_str(), "D007");
    assert_eq!(second.as_str(), "D008");
}

#[test]
fn from_drivers_rejects_duplicate_ids() {
    let drivers = vec![baseline_driver("D001"), baseline_driver("D001")];

    match Roster::from_drivers(drivers) {
        Err(RosterError::DuplicateId(id)) => assert_eq!(id.as_str(), "D001"),
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn insert_reserves_external_ids() {
    let mut roster = Roster::new();
    roster
        .insert(baseline_driver("D041"))
        .expect("first insert succeeds");

    assert!(matches!(
        roster.insert(baseline_driver("D041")),
        Err(RosterError::DuplicateId(_))
    ));
    let after = roster.register(draft("After")).expect("id available");
    assert_eq!(after.driver_id.as_str(), "D042");
}

#[test]
fn allocator_ignores_ids_without_a_numeric_suffix() {
    let ids = [
        DriverId("D012".to_string()),
        DriverId("legacy-7".to_string()),
        DriverId("D".to_string()),
        DriverId("D9x".to_string()),
    ];

    let allocator = DriverIdAllocator::after(ids.iter());

    assert_eq!(allocator.next_id().expect("id available").as_str(), "D013");
    assert_eq!(allocator.next_id().expect("id available").as_str(), "D014");
}

#[test]
fn padding_grows_past_three_digits() {
    let allocator = DriverIdAllocator::starting_at(999);

    assert_eq!(allocator.next_id().expect("id available").as_str(), "D999");
    assert_eq!(allocator.next_id().expect("id available").as_str(), "D1000");
}

#[test]
fn rank_delegates_to_the_screening_pipeline() {
    let mut roster = Roster::new();
    roster.register(draft("Default Draft")).expect("id available");

    assert!(roster.get(&DriverId("D001".to_string())).is_some());
    assert_eq!(roster.rank(&open_filter()).len(), 1);
    // Registration-form defaults score 49 + 30.
    assert_eq!(roster.rank(&FilterConfig::default()).len(), 1);
    let strict = FilterConfig {
        min_total: 80,
        ..FilterConfig::default()
    };
    assert!(roster.rank(&strict).is_empty());
}

#[test]
fn exhausted_id_space_is_reported_instead_of_reissuing() {
    let top = DriverId(format!("D{}", u64::MAX));
    let mut roster =
        Roster::from_drivers(vec![baseline_driver(top.as_str())]).expect("unique ids");

    assert!(matches!(
        roster.register(draft("Overflow")),
        Err(RosterError::IdSpaceExhausted)
    ));
    assert_eq!(roster.len(), 1);
}

#[test]
fn last_sequence_number_is_issued_once() {
    let allocator = DriverIdAllocator::starting_at(u64::MAX - 1);

    let last = allocator.next_id().expect("one id left");
    assert_eq!(last.as_str(), format!("D{}", u64::MAX - 1));
    assert!(matches!(
        allocator.next_id(),
        Err(RosterError::IdSpaceExhausted)
    ));
}
