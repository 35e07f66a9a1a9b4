mod cli;
mod infra;
mod report;

use driver_credit::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
