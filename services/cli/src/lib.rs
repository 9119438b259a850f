mod batch;
mod cli;
mod session;

use vax_phase::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
