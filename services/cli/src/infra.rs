use driver_credit::drivers::{reference_roster, Driver, DriverDraft, Roster};
use driver_credit::error::AppError;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load the roster from a JSON file, or the built-in reference roster when no
/// path is given. Registered drivers keep file order and drafts follow them.
pub(crate) fn load_roster(path: Option<&Path>) -> Result<Roster, AppError> {
    let Some(path) = path else {
        return Ok(Roster::from_drivers(reference_roster())?);
    };

    let raw = fs::read_to_string(path)?;
    let roster = parse_roster(&raw)?;
    info!(
        path = %path.display(),
        drivers = roster.len(),
        "loaded roster file"
    );
    Ok(roster)
}

/// Entries carrying a `driver_id` must be complete driver records. Entries
/// without one are registrations and receive a fresh id.
pub(crate) fn parse_roster(raw: &str) -> Result<Roster, AppError> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(raw)?;

    let mut registered = Vec::new();
    let mut drafts = Vec::new();
    for entry in entries {
        if entry.get("driver_id").is_some() {
            registered.push(serde_json::from_value::<Driver>(entry)?);
        } else {
            drafts.push(serde_json::from_value::<DriverDraft>(entry)?);
        }
    }

    let mut roster = Roster::from_drivers(registered)?;
    for draft in drafts {
        roster.register(draft)?;
    }
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_roster_is_the_reference_fixture() {
        let roster = load_roster(None).expect("reference roster loads");
        assert_eq!(roster.len(), 6);
    }

    #[test]
    fn drafts_receive_ids_after_registered_drivers() {
        let raw = r#"[
            {"name": "Kato", "affiliation": "sole_proprietor", "base_area": "Yokohama"},
            {
                "driver_id": "D010",
                "name": "Mori",
                "affiliation": "in_house",
                "base_area": "Chiba",
                "attributes": {
                    "smoking": "non_smoker",
                    "odor": "none",
                    "appearance": "clean",
                    "vehicle_type": "van",
                    "ev_support": false
                },
                "availability": {"areas": ["Chiba"], "time_slots": [{"start": "09:00", "end": "17:00"}], "weekdays": ["Mon"]},
                "kpi": {
                    "incidents_12m": 0, "damage_rate": 0.0, "late_rate": 0.0, "cancel_rate": 0.0,
                    "cs_avg": 4.0, "complaints": 0, "workdays_90d": 60, "night_ratio": 0.0,
                    "app_error_rate": 0.0, "docs_valid": 100, "vehicle_fit": 80
                },
                "qin": {"manners": 80, "communication": 80, "trust_impression": 80, "problem_handling": 80, "vehicle_tidy": 80}
            }
        ]"#;

        let roster = parse_roster(raw).expect("roster parses");

        let ids: Vec<&str> = roster
            .drivers()
            .iter()
            .map(|driver| driver.driver_id.as_str())
            .collect();
        assert_eq!(ids, vec!["D010", "D011"]);
        assert_eq!(roster.drivers()[1].name, "Kato");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let driver = serde_json::to_string(&reference_roster()[0]).expect("driver serialises");
        let raw = format!("[{driver}, {driver}]");

        match parse_roster(&raw) {
            Err(AppError::Roster(err)) => assert!(err.to_string().contains("D001")),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn incomplete_registered_driver_is_rejected() {
        let mut entry = serde_json::to_value(&reference_roster()[0]).expect("driver serialises");
        entry
            .as_object_mut()
            .expect("driver is a json object")
            .remove("qin");
        let raw = serde_json::to_string(&vec![entry]).expect("roster serialises");

        match parse_roster(&raw) {
            Err(AppError::RosterFile(err)) => assert!(err.to_string().contains("qin")),
            other => panic!("expected roster file error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_roster_file_error() {
        assert!(matches!(
            parse_roster("{not json"),
            Err(AppError::RosterFile(_))
        ));
    }
}
