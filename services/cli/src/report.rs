use crate::infra::load_roster;
use chrono::Weekday;
use clap::Args;
use driver_credit::config::AppConfig;
use driver_credit::drivers::{
    score_driver, screen, AffiliationFilter, Appearance, Driver, DriverId, FilterConfig,
    FilterSelection, OdorLevel, ScoreComponent, ScoredDriver, QUAL_MAX, QUANT_MAX, TOTAL_MAX,
};
use driver_credit::error::AppError;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct SourceArgs {
    /// JSON roster file (array of drivers). Defaults to the built-in reference roster.
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Print JSON instead of plain text.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RankArgs {
    /// Minimum total score (0-100). Defaults to DRIVER_MIN_TOTAL or 70.
    #[arg(long)]
    pub(crate) min_total: Option<u8>,
    /// Minimum quantitative score (0-60). Defaults to DRIVER_MIN_QUANT or 35.
    #[arg(long)]
    pub(crate) min_quant: Option<u8>,
    /// Minimum qualitative score (0-40). Defaults to DRIVER_MIN_QUAL or 20.
    #[arg(long)]
    pub(crate) min_qual: Option<u8>,
    /// Affiliation to keep: all, partner_company, sole_proprietor or in_house.
    #[arg(long)]
    pub(crate) affiliation: Option<AffiliationFilter>,
    /// Case-insensitive substring of name, company, areas or tags.
    #[arg(long)]
    pub(crate) keyword: Option<String>,
    /// Keep non-smokers only.
    #[arg(long)]
    pub(crate) non_smoker_only: bool,
    /// Worst acceptable odor: none, slight or strong.
    #[arg(long)]
    pub(crate) odor_ceiling: Option<OdorLevel>,
    /// Worst acceptable appearance: clean, normal or unclean.
    #[arg(long)]
    pub(crate) appearance_floor: Option<Appearance>,
    /// Substring one of the availability areas must contain.
    #[arg(long)]
    pub(crate) area: Option<String>,
    /// Start of the requested time window (HH:MM).
    #[arg(long)]
    pub(crate) time_start: Option<String>,
    /// End of the requested time window (HH:MM).
    #[arg(long)]
    pub(crate) time_end: Option<String>,
    /// Weekdays the driver must work at least one of (e.g. mon,sat).
    #[arg(long = "weekday", value_delimiter = ',')]
    pub(crate) weekdays: Vec<Weekday>,
    /// Also list the screened-out drivers with the first failed check.
    #[arg(long)]
    pub(crate) explain: bool,
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

impl RankArgs {
    fn selection(&self, config: &AppConfig) -> FilterSelection {
        let defaults = config.screening.selection();
        FilterSelection {
            min_total: self.min_total.unwrap_or(defaults.min_total),
            min_quant: self.min_quant.unwrap_or(defaults.min_quant),
            min_qual: self.min_qual.unwrap_or(defaults.min_qual),
            affiliation: self.affiliation.unwrap_or(defaults.affiliation),
            keyword: self.keyword.clone().unwrap_or_default(),
            non_smoker_only: self.non_smoker_only,
            odor_ceiling: self.odor_ceiling.unwrap_or(defaults.odor_ceiling),
            appearance_floor: self.appearance_floor.unwrap_or(defaults.appearance_floor),
            area: self.area.clone().unwrap_or_default(),
            time_start: self.time_start.clone(),
            time_end: self.time_end.clone(),
            weekdays: self.weekdays.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Driver id, e.g. D001
    pub(crate) driver_id: String,
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RosterArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

#[derive(Serialize)]
struct ExcludedDriver<'a> {
    driver_id: &'a DriverId,
    reason: String,
}

#[derive(Serialize)]
struct RankReport<'a> {
    candidates: usize,
    matches: &'a [ScoredDriver<'a>],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    excluded: Vec<ExcludedDriver<'a>>,
}

pub(crate) fn run_rank(args: RankArgs, config: &AppConfig) -> Result<(), AppError> {
    let filter = FilterConfig::try_from(args.selection(config))?;
    let roster = load_roster(args.source.roster.as_deref())?;
    let ranked = roster.rank(&filter);

    let excluded = if args.explain {
        explain_exclusions(roster.drivers(), &filter)
    } else {
        Vec::new()
    };

    if args.source.json {
        let report = RankReport {
            candidates: roster.len(),
            matches: &ranked,
            excluded,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Ranked {} of {} drivers (min total {} / quant {} / qual {})",
        ranked.len(),
        roster.len(),
        filter.min_total,
        filter.min_quant,
        filter.min_qual
    );
    for (position, scored) in ranked.iter().enumerate() {
        println!("{:>3}. {}", position + 1, summary_line(scored));
    }

    if !excluded.is_empty() {
        println!("\nScreened out:");
        for entry in &excluded {
            println!("  - {}: {}", entry.driver_id, entry.reason);
        }
    }

    Ok(())
}

fn explain_exclusions<'a>(drivers: &'a [Driver], filter: &FilterConfig) -> Vec<ExcludedDriver<'a>> {
    drivers
        .iter()
        .filter_map(|driver| {
            screen(&score_driver(driver), filter)
                .err()
                .map(|rejection| ExcludedDriver {
                    driver_id: &driver.driver_id,
                    reason: rejection.summary(),
                })
        })
        .collect()
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let roster = load_roster(args.source.roster.as_deref())?;
    let driver_id = DriverId(args.driver_id.trim().to_string());
    let driver = roster
        .get(&driver_id)
        .ok_or_else(|| AppError::UnknownDriver(driver_id.to_string()))?;
    let scored = score_driver(driver);

    if args.source.json {
        println!("{}", serde_json::to_string_pretty(&scored)?);
        return Ok(());
    }

    let company = driver
        .company_name
        .as_deref()
        .map(|company| format!(", {company}"))
        .unwrap_or_default();
    println!(
        "{} {} ({}{})",
        driver.driver_id,
        driver.name,
        driver.affiliation.label(),
        company
    );
    println!(
        "Total {}/{} | quantitative {}/{} | qualitative {}/{}",
        scored.total, TOTAL_MAX, scored.quant, QUANT_MAX, scored.qual, QUAL_MAX
    );
    println!("Quantitative components:");
    render_components(&scored.quant_breakdown.components());
    println!("Qualitative components:");
    render_components(&scored.qual_breakdown.components());
    println!(
        "Hygiene: {} | odor {} | appearance {}",
        driver.attributes.smoking.label(),
        driver.attributes.odor.label(),
        driver.attributes.appearance.label()
    );

    Ok(())
}

pub(crate) fn run_roster(args: RosterArgs) -> Result<(), AppError> {
    let roster = load_roster(args.source.roster.as_deref())?;
    let scored: Vec<ScoredDriver<'_>> = roster.drivers().iter().map(score_driver).collect();

    if args.source.json {
        println!("{}", serde_json::to_string_pretty(&scored)?);
        return Ok(());
    }

    println!("{} drivers on the roster", roster.len());
    for entry in &scored {
        println!("  - {}", summary_line(entry));
    }
    Ok(())
}

fn summary_line(scored: &ScoredDriver<'_>) -> String {
    format!(
        "{} {} [{}] total {} (quant {} / qual {})",
        scored.driver.driver_id,
        scored.driver.name,
        scored.driver.affiliation.label(),
        scored.total,
        scored.quant,
        scored.qual
    )
}

fn render_components(components: &[ScoreComponent]) {
    for component in components {
        println!(
            "  - {}: {}/{}",
            component.dimension.label(),
            component.score,
            component.max
        );
    }
}
