mod cli;
mod infra;
mod reports;
mod routes;
mod server;

use ops_readiness::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
