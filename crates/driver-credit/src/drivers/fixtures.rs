//! The six-driver reference roster (D001–D006) used for demos and as the
//! golden regression fixture.

use chrono::{Duration, NaiveTime, Weekday};

use super::domain::{
    Affiliation, Appearance, AttributeFlags, Availability, DocsStatus, Driver, DriverId,
    OdorLevel, QualScoreInputs, QuantKpi, SmokingStatus, VehicleFit,
};
use super::schedule::TimeSlot;

pub fn reference_roster() -> Vec<Driver> {
    vec![
        Driver {
            driver_id: DriverId("D001".to_string()),
            name: "田中太郎".to_string(),
            affiliation: Affiliation::PartnerCompany,
            company_name: Some("東京運輸".to_string()),
            base_area: "東京都23区".to_string(),
            attributes: AttributeFlags {
                smoking: SmokingStatus::NonSmoker,
                odor: OdorLevel::None,
                appearance: Appearance::Clean,
                vehicle_type: "軽バン(冷凍)".to_string(),
                ev_support: true,
                tags: strings(&["夜間", "長距離"]),
            },
            availability: Availability {
                areas: strings(&["東京都23区", "神奈川県川崎市"]),
                time_slots: vec![hours(8, 20)],
                weekdays: vec![
                    Weekday::Mon,
                    Weekday::Tue,
                    Weekday::Wed,
                    Weekday::Thu,
                    Weekday::Fri,
                ],
            },
            kpi: QuantKpi {
                incidents_12m: 0,
                damage_rate: 0.002,
                late_rate: 0.01,
                cancel_rate: 0.005,
                cs_avg: 4.8,
                complaints: 0,
                workdays_90d: 65,
                night_ratio: 0.4,
                app_error_rate: 0.01,
                docs_valid: DocsStatus::Complete,
                vehicle_fit: VehicleFit::Ideal,
            },
            qin: ratings(90.0, 95.0, 92.0, 88.0, 90.0),
        },
        Driver {
            driver_id: DriverId("D002".to_string()),
            name: "佐藤花子".to_string(),
            affiliation: Affiliation::SoleProprietor,
            company_name: None,
            base_area: "神奈川県横浜市".to_string(),
            attributes: AttributeFlags {
                smoking: SmokingStatus::NonSmoker,
                odor: OdorLevel::None,
                appearance: Appearance::Clean,
                vehicle_type: "軽バン".to_string(),
                ev_support: false,
                tags: strings(&["短距離", "日中"]),
            },
            availability: Availability {
                areas: strings(&["神奈川県横浜市", "東京都23区"]),
                time_slots: vec![hours(9, 17)],
                weekdays: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
            },
            kpi: QuantKpi {
                incidents_12m: 0,
                damage_rate: 0.005,
                late_rate: 0.02,
                cancel_rate: 0.01,
                cs_avg: 4.6,
                complaints: 1,
                workdays_90d: 45,
                night_ratio: 0.1,
                app_error_rate: 0.02,
                docs_valid: DocsStatus::Complete,
                vehicle_fit: VehicleFit::Adequate,
            },
            qin: ratings(85.0, 88.0, 85.0, 82.0, 87.0),
        },
        Driver {
            driver_id: DriverId("D003".to_string()),
            name: "鈴木一郎".to_string(),
            affiliation: Affiliation::InHouse,
            company_name: None,
            base_area: "千葉県船橋市".to_string(),
            attributes: AttributeFlags {
                smoking: SmokingStatus::SmokesOffDutyOnly,
                odor: OdorLevel::Slight,
                appearance: Appearance::Normal,
                vehicle_type: "1tトラック".to_string(),
                ev_support: false,
                tags: strings(&["大型荷物", "夜間"]),
            },
            availability: Availability {
                areas: strings(&["千葉県船橋市", "東京都23区", "埼玉県さいたま市"]),
                time_slots: vec![hours(6, 22)],
                weekdays: vec![
                    Weekday::Mon,
                    Weekday::Tue,
                    Weekday::Wed,
                    Weekday::Thu,
                    Weekday::Fri,
                    Weekday::Sat,
                ],
            },
            kpi: QuantKpi {
                incidents_12m: 1,
                damage_rate: 0.008,
                late_rate: 0.05,
                cancel_rate: 0.02,
                cs_avg: 4.2,
                complaints: 2,
                workdays_90d: 58,
                night_ratio: 0.5,
                app_error_rate: 0.03,
                docs_valid: DocsStatus::Complete,
                vehicle_fit: VehicleFit::Ideal,
            },
            qin: ratings(75.0, 78.0, 72.0, 80.0, 70.0),
        },
        Driver {
            driver_id: DriverId("D004".to_string()),
            name: "高橋美咲".to_string(),
            affiliation: Affiliation::PartnerCompany,
            company_name: Some("神奈川配送".to_string()),
            base_area: "神奈川県川崎市".to_string(),
            attributes: AttributeFlags {
                smoking: SmokingStatus::NonSmoker,
                odor: OdorLevel::Slight,
                appearance: Appearance::Clean,
                vehicle_type: "軽バン".to_string(),
                ev_support: true,
                tags: strings(&["短距離"]),
            },
            availability: Availability {
                areas: strings(&["神奈川県川崎市", "東京都大田区"]),
                time_slots: vec![hours(10, 16)],
                weekdays: vec![Weekday::Tue, Weekday::Thu, Weekday::Sat, Weekday::Sun],
            },
            kpi: QuantKpi {
                incidents_12m: 0,
                damage_rate: 0.003,
                late_rate: 0.03,
                cancel_rate: 0.015,
                cs_avg: 4.5,
                complaints: 1,
                workdays_90d: 32,
                night_ratio: 0.05,
                app_error_rate: 0.015,
                docs_valid: DocsStatus::Partial,
                vehicle_fit: VehicleFit::Adequate,
            },
            qin: ratings(80.0, 82.0, 78.0, 75.0, 83.0),
        },
        Driver {
            driver_id: DriverId("D005".to_string()),
            name: "伊藤健".to_string(),
            affiliation: Affiliation::SoleProprietor,
            company_name: None,
            base_area: "埼玉県さいたま市".to_string(),
            attributes: AttributeFlags {
                smoking: SmokingStatus::RestrictionConcern,
                odor: OdorLevel::Strong,
                appearance: Appearance::Unclean,
                vehicle_type: "軽バン".to_string(),
                ev_support: false,
                tags: Vec::new(),
            },
            availability: Availability {
                areas: strings(&["埼玉県さいたま市"]),
                time_slots: vec![hours(8, 18)],
                weekdays: vec![Weekday::Mon, Weekday::Tue, Weekday::Wed],
            },
            kpi: QuantKpi {
                incidents_12m: 2,
                damage_rate: 0.01,
                late_rate: 0.12,
                cancel_rate: 0.05,
                cs_avg: 3.8,
                complaints: 3,
                workdays_90d: 15,
                night_ratio: 0.0,
                app_error_rate: 0.05,
                docs_valid: DocsStatus::Missing,
                vehicle_fit: VehicleFit::Basic,
            },
            qin: ratings(55.0, 60.0, 50.0, 58.0, 52.0),
        },
        Driver {
            driver_id: DriverId("D006".to_string()),
            name: "渡辺京子".to_string(),
            affiliation: Affiliation::InHouse,
            company_name: None,
            base_area: "東京都世田谷区".to_string(),
            attributes: AttributeFlags {
                smoking: SmokingStatus::NonSmoker,
                odor: OdorLevel::None,
                appearance: Appearance::Clean,
                vehicle_type: "軽バン(冷凍)".to_string(),
                ev_support: true,
                tags: strings(&["夜間", "冷凍"]),
            },
            availability: Availability {
                areas: strings(&["東京都23区"]),
                time_slots: vec![hours(18, 6)],
                weekdays: vec![Weekday::Fri, Weekday::Sat, Weekday::Sun],
            },
            kpi: QuantKpi {
                incidents_12m: 0,
                damage_rate: 0.001,
                late_rate: 0.008,
                cancel_rate: 0.003,
                cs_avg: 4.9,
                complaints: 0,
                workdays_90d: 28,
                night_ratio: 0.6,
                app_error_rate: 0.005,
                docs_valid: DocsStatus::Complete,
                vehicle_fit: VehicleFit::Ideal,
            },
            qin: ratings(92.0, 90.0, 95.0, 93.0, 88.0),
        },
    ]
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn hours(start: i64, end: i64) -> TimeSlot {
    let midnight = NaiveTime::default();
    TimeSlot::new(midnight + Duration::hours(start), midnight + Duration::hours(end))
}

fn ratings(
    manners: f64,
    communication: f64,
    trust_impression: f64,
    problem_handling: f64,
    vehicle_tidy: f64,
) -> QualScoreInputs {
    QualScoreInputs {
        manners,
        communication,
        trust_impression,
        problem_handling,
        vehicle_tidy,
    }
}
