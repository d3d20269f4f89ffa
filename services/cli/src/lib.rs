mod cli;
mod demo;
mod infra;
mod score;

use nirvana::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
