use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::schedule::TimeSlot;

/// Identifier wrapper for registered drivers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverId(pub String);

impl DriverId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raised when a category slug does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct CategoryParseError {
    pub kind: &'static str,
    pub value: String,
}

impl CategoryParseError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Contract relationship between the driver and the dispatching operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Affiliation {
    PartnerCompany,
    SoleProprietor,
    InHouse,
}

impl Affiliation {
    pub const fn label(self) -> &'static str {
        match self {
            Affiliation::PartnerCompany => "partner company",
            Affiliation::SoleProprietor => "sole proprietor",
            Affiliation::InHouse => "in-house",
        }
    }
}

impl FromStr for Affiliation {
    type Err = CategoryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "partner_company" | "partner-company" | "partner" => Ok(Self::PartnerCompany),
            "sole_proprietor" | "sole-proprietor" | "sole" => Ok(Self::SoleProprietor),
            "in_house" | "in-house" | "inhouse" => Ok(Self::InHouse),
            _ => Err(CategoryParseError::new("affiliation", value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmokingStatus {
    NonSmoker,
    /// Smokes, but strictly never while on duty.
    SmokesOffDutyOnly,
    /// Smokes and the assessor doubts the on-duty restriction is kept.
    RestrictionConcern,
}

impl SmokingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SmokingStatus::NonSmoker => "non-smoker",
            SmokingStatus::SmokesOffDutyOnly => "smoker (off duty only)",
            SmokingStatus::RestrictionConcern => "smoker (restriction concern)",
        }
    }
}

/// Assessed body/vehicle odor. Higher rank is worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OdorLevel {
    None,
    Slight,
    Strong,
}

impl OdorLevel {
    pub const fn rank(self) -> u8 {
        match self {
            OdorLevel::None => 0,
            OdorLevel::Slight => 1,
            OdorLevel::Strong => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            OdorLevel::None => "none",
            OdorLevel::Slight => "slight",
            OdorLevel::Strong => "strong",
        }
    }
}

impl FromStr for OdorLevel {
    type Err = CategoryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "slight" => Ok(Self::Slight),
            "strong" => Ok(Self::Strong),
            _ => Err(CategoryParseError::new("odor level", value)),
        }
    }
}

/// Assessed grooming and tidiness. Higher rank is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Appearance {
    Clean,
    Normal,
    Unclean,
}

impl Appearance {
    pub const fn rank(self) -> u8 {
        match self {
            Appearance::Clean => 2,
            Appearance::Normal => 1,
            Appearance::Unclean => 0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Appearance::Clean => "clean",
            Appearance::Normal => "normal",
            Appearance::Unclean => "unclean",
        }
    }
}

impl FromStr for Appearance {
    type Err = CategoryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "clean" => Ok(Self::Clean),
            "normal" => Ok(Self::Normal),
            "unclean" => Ok(Self::Unclean),
            _ => Err(CategoryParseError::new("appearance", value)),
        }
    }
}

/// Completeness of the driver's licence, insurance and contract paperwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DocsStatus {
    Missing,
    Partial,
    Complete,
}

impl DocsStatus {
    pub const fn code(self) -> u8 {
        match self {
            DocsStatus::Missing => 0,
            DocsStatus::Partial => 50,
            DocsStatus::Complete => 100,
        }
    }
}

impl TryFrom<u8> for DocsStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Missing),
            50 => Ok(Self::Partial),
            100 => Ok(Self::Complete),
            other => Err(format!("docs_valid must be 0, 50 or 100 (found {other})")),
        }
    }
}

impl From<DocsStatus> for u8 {
    fn from(status: DocsStatus) -> Self {
        status.code()
    }
}

/// How well the driver's vehicle suits the delivery profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum VehicleFit {
    Basic,
    Adequate,
    Ideal,
}

impl VehicleFit {
    pub const fn code(self) -> u8 {
        match self {
            VehicleFit::Basic => 60,
            VehicleFit::Adequate => 80,
            VehicleFit::Ideal => 100,
        }
    }
}

impl TryFrom<u8> for VehicleFit {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            60 => Ok(Self::Basic),
            80 => Ok(Self::Adequate),
            100 => Ok(Self::Ideal),
            other => Err(format!("vehicle_fit must be 60, 80 or 100 (found {other})")),
        }
    }
}

impl From<VehicleFit> for u8 {
    fn from(fit: VehicleFit) -> Self {
        fit.code()
    }
}

/// Hygiene, behaviour and equipment flags captured at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeFlags {
    pub smoking: SmokingStatus,
    pub odor: OdorLevel,
    pub appearance: Appearance,
    pub vehicle_type: String,
    pub ev_support: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Default for AttributeFlags {
    fn default() -> Self {
        Self {
            smoking: SmokingStatus::NonSmoker,
            odor: OdorLevel::None,
            appearance: Appearance::Clean,
            vehicle_type: String::new(),
            ev_support: false,
            tags: Vec::new(),
        }
    }
}

/// Where and when the driver is willing to work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    #[serde(default)]
    pub areas: Vec<String>,
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
    #[serde(default)]
    pub weekdays: Vec<Weekday>,
}

impl Availability {
    pub fn works_on(&self, day: Weekday) -> bool {
        self.weekdays.contains(&day)
    }
}

/// Operational KPIs feeding the quantitative score.
///
/// Rates are fractions in `0.0..=1.0`, `cs_avg` is on the 1–5 survey scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantKpi {
    pub incidents_12m: u32,
    pub damage_rate: f64,
    pub late_rate: f64,
    pub cancel_rate: f64,
    pub cs_avg: f64,
    pub complaints: u32,
    pub workdays_90d: u32,
    pub night_ratio: f64,
    pub app_error_rate: f64,
    pub docs_valid: DocsStatus,
    pub vehicle_fit: VehicleFit,
}

impl Default for QuantKpi {
    fn default() -> Self {
        Self {
            incidents_12m: 0,
            damage_rate: 0.0,
            late_rate: 0.0,
            cancel_rate: 0.0,
            cs_avg: 4.0,
            complaints: 0,
            workdays_90d: 0,
            night_ratio: 0.0,
            app_error_rate: 0.0,
            docs_valid: DocsStatus::Complete,
            vehicle_fit: VehicleFit::Ideal,
        }
    }
}

impl QuantKpi {
    /// Saturate every field into its documented domain. Non-finite values
    /// collapse to the lower bound. In-domain records come back unchanged.
    pub fn normalized(&self) -> Self {
        Self {
            incidents_12m: self.incidents_12m,
            damage_rate: saturate(self.damage_rate, 0.0, 1.0),
            late_rate: saturate(self.late_rate, 0.0, 1.0),
            cancel_rate: saturate(self.cancel_rate, 0.0, 1.0),
            cs_avg: saturate(self.cs_avg, 1.0, 5.0),
            complaints: self.complaints,
            workdays_90d: self.workdays_90d.min(90),
            night_ratio: saturate(self.night_ratio, 0.0, 1.0),
            app_error_rate: saturate(self.app_error_rate, 0.0, 1.0),
            docs_valid: self.docs_valid,
            vehicle_fit: self.vehicle_fit,
        }
    }
}

/// Assessor ratings feeding the qualitative score, each on a 0–100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualScoreInputs {
    pub manners: f64,
    pub communication: f64,
    pub trust_impression: f64,
    pub problem_handling: f64,
    pub vehicle_tidy: f64,
}

impl Default for QualScoreInputs {
    fn default() -> Self {
        Self {
            manners: 80.0,
            communication: 80.0,
            trust_impression: 80.0,
            problem_handling: 80.0,
            vehicle_tidy: 80.0,
        }
    }
}

impl QualScoreInputs {
    pub fn normalized(&self) -> Self {
        Self {
            manners: saturate(self.manners, 0.0, 100.0),
            communication: saturate(self.communication, 0.0, 100.0),
            trust_impression: saturate(self.trust_impression, 0.0, 100.0),
            problem_handling: saturate(self.problem_handling, 0.0, 100.0),
            vehicle_tidy: saturate(self.vehicle_tidy, 0.0, 100.0),
        }
    }
}

/// Registered driver profile. Scores are always derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub driver_id: DriverId,
    pub name: String,
    pub affiliation: Affiliation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub base_area: String,
    pub attributes: AttributeFlags,
    pub availability: Availability,
    pub kpi: QuantKpi,
    pub qin: QualScoreInputs,
}

impl Driver {
    /// Lower-cased text the keyword filter searches: name, company, base
    /// area, availability areas and tags joined by single spaces.
    pub fn search_text(&self) -> String {
        let mut parts: Vec<&str> = vec![
            self.name.as_str(),
            self.company_name.as_deref().unwrap_or(""),
            self.base_area.as_str(),
        ];
        parts.extend(self.availability.areas.iter().map(String::as_str));
        parts.extend(self.attributes.tags.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }
}

/// Registration payload: everything a [`Driver`] carries except its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverDraft {
    pub name: String,
    pub affiliation: Affiliation,
    #[serde(default)]
    pub company_name: Option<String>,
    pub base_area: String,
    #[serde(default)]
    pub attributes: AttributeFlags,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub kpi: QuantKpi,
    #[serde(default)]
    pub qin: QualScoreInputs,
}

impl DriverDraft {
    pub fn into_driver(self, driver_id: DriverId) -> Driver {
        let company_name = self
            .company_name
            .filter(|company| !company.trim().is_empty());

        Driver {
            driver_id,
            name: self.name,
            affiliation: self.affiliation,
            company_name,
            base_area: self.base_area,
            attributes: self.attributes,
            availability: self.availability,
            kpi: self.kpi,
            qin: self.qin,
        }
    }
}

fn saturate(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}
