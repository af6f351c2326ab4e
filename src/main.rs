//! Blendable - Main Entry Point

use anyhow::Result;
use blendable::{cli::Cli, utils, CONFIG};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = CONFIG.clone();
    let _logging_guard = utils::setup_logging(&config.log_dir)?;

    utils::print_header();
    info!("📋 Configuration:");
    info!("   EmailJS endpoint: {}", config.emailjs.api_url);
    info!("   EmailJS service: {}", config.emailjs.service_id);
    info!("   Confirmation display: {}s", config.confirmation_display_secs);

    blendable::cli::run(cli, &config).await?;

    utils::print_footer();
    Ok(())
}
