//! Golden-fixture scenarios for the screening pipeline, driven through the
//! public API with the six-driver reference roster.

use chrono::Weekday;

use driver_credit::drivers::{
    filter_and_rank, qual_score, quant_score, reference_roster, Affiliation, AffiliationFilter,
    Driver, FilterConfig, FilterSelection, Roster, ScoredDriver,
};

fn ids(ranked: &[ScoredDriver<'_>]) -> Vec<String> {
    ranked
        .iter()
        .map(|entry| entry.driver.driver_id.to_string())
        .collect()
}

fn find<'a>(roster: &'a [Driver], id: &str) -> &'a Driver {
    roster
        .iter()
        .find(|driver| driver.driver_id.as_str() == id)
        .expect("driver present in reference roster")
}

#[test]
fn reference_totals_are_pinned() {
    let roster = reference_roster();
    let expected = [
        ("D001", 59, 36, 95),
        ("D002", 51, 35, 86),
        ("D003", 44, 30, 74),
        ("D004", 47, 32, 79),
        ("D005", 14, 22, 36),
        ("D006", 56, 36, 92),
    ];

    for (id, quant, qual, total) in expected {
        let driver = find(&roster, id);
        let computed_quant = quant_score(&driver.kpi);
        let computed_qual = qual_score(&driver.qin);
        assert_eq!(computed_quant, quant, "{id} quant");
        assert_eq!(computed_qual, qual, "{id} qual");
        assert_eq!(computed_quant + computed_qual, total, "{id} total");
    }
}

#[test]
fn default_filter_ranks_the_reference_roster() {
    let roster = reference_roster();

    let ranked = filter_and_rank(&roster, &FilterConfig::default());

    assert_eq!(ids(&ranked), vec!["D001", "D006", "D002", "D004", "D003"]);
    let totals: Vec<u8> = ranked.iter().map(|entry| entry.total).collect();
    assert_eq!(totals, vec![95, 92, 86, 79, 74]);
    assert!(ranked
        .iter()
        .all(|entry| entry.driver.driver_id.as_str() != "D005"));
}

#[test]
fn keyword_matches_company_and_area_text() {
    let roster = reference_roster();
    let config = FilterConfig {
        keyword: "川崎".to_string(),
        ..FilterConfig::permissive()
    };

    let ranked = filter_and_rank(&roster, &config);

    assert_eq!(ids(&ranked), vec!["D001", "D004"]);
}

#[test]
fn keyword_is_case_insensitive_for_latin_text() {
    let mut roster = reference_roster();
    roster[1].attributes.tags.push("Cold-Chain".to_string());

    let config = FilterConfig {
        keyword: "cold-CHAIN".to_string(),
        ..FilterConfig::permissive()
    };

    assert_eq!(ids(&filter_and_rank(&roster, &config)), vec!["D002"]);
}

#[test]
fn early_morning_window_matches_overnight_and_long_shifts() {
    let roster = reference_roster();
    let selection = FilterSelection {
        time_start: Some("05:00".to_string()),
        time_end: Some("07:00".to_string()),
        ..FilterSelection::default()
    };
    let config = FilterConfig {
        min_total: 0,
        min_quant: 0,
        min_qual: 0,
        ..FilterConfig::try_from(selection).expect("valid window")
    };

    let ranked = filter_and_rank(&roster, &config);

    assert_eq!(ids(&ranked), vec!["D006", "D003"]);
}

#[test]
fn weekday_and_affiliation_filters_combine() {
    let roster = reference_roster();
    let config = FilterConfig {
        affiliation: AffiliationFilter::Only(Affiliation::InHouse),
        weekdays: [Weekday::Sun].into_iter().collect(),
        ..FilterConfig::permissive()
    };

    assert_eq!(ids(&filter_and_rank(&roster, &config)), vec!["D006"]);

    let no_days = FilterConfig {
        affiliation: AffiliationFilter::Only(Affiliation::InHouse),
        ..FilterConfig::permissive()
    };
    assert_eq!(ids(&filter_and_rank(&roster, &no_days)), vec!["D006", "D003"]);
}

#[test]
fn hygiene_filters_narrow_the_roster() {
    let roster = reference_roster();

    let non_smokers = FilterConfig {
        non_smoker_only: true,
        ..FilterConfig::permissive()
    };
    assert_eq!(
        ids(&filter_and_rank(&roster, &non_smokers)),
        vec!["D001", "D006", "D002", "D004"]
    );

    let area = FilterConfig {
        area: "さいたま".to_string(),
        ..FilterConfig::permissive()
    };
    assert_eq!(ids(&filter_and_rank(&roster, &area)), vec!["D003", "D005"]);
}

#[test]
fn permissive_filter_returns_everyone_in_score_order() {
    let roster = Roster::from_drivers(reference_roster()).expect("unique ids");

    let ranked = roster.rank(&FilterConfig::permissive());

    assert_eq!(
        ids(&ranked),
        vec!["D001", "D006", "D002", "D004", "D003", "D005"]
    );
}

#[test]
fn repeated_passes_are_identical() {
    let roster = reference_roster();
    let config = FilterConfig::permissive();

    let first = ids(&filter_and_rank(&roster, &config));
    let second = ids(&filter_and_rank(&roster, &config));

    assert_eq!(first, second);
    assert_eq!(roster, reference_roster());
}
