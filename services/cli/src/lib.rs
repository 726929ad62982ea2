mod cli;
mod demo;
mod infra;
mod portal;
mod render;

use jobportal::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
