use crate::report::{run_rank, run_roster, run_score, RankArgs, RosterArgs, ScoreArgs};
use clap::{Parser, Subcommand};
use driver_credit::config::AppConfig;
use driver_credit::error::AppError;
use driver_credit::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "driver-credit",
    about = "Score, screen and rank delivery drivers from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter the roster and rank the survivors by total score (default command)
    Rank(RankArgs),
    /// Show both score breakdowns for a single driver
    Score(ScoreArgs),
    /// List every driver with its scores, unfiltered
    Roster(RosterArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, "driver credit cli starting");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Rank(RankArgs::default()));

    match command {
        Command::Rank(args) => run_rank(args, &config),
        Command::Score(args) => run_score(args),
        Command::Roster(args) => run_roster(args),
    }
}
