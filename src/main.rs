use anyhow::Context;
use clap::Parser;
use odonto_match::utils::{logger, validation::Validate};
use odonto_match::{AppConfig, CliArgs, ClinicorpClient, Directory, MatchEngine};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting odonto-match");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let settings = AppConfig::from_file(&args.config)
        .with_context(|| format!("failed to load settings from {}", args.config))?;
    settings.validate().context("invalid settings")?;

    let directory = Directory::builtin();
    directory.validate().context("invalid staff directory")?;

    let provider = ClinicorpClient::new(settings.provider.clone())
        .context("failed to build provider client")?;
    let engine = MatchEngine::new(Arc::new(directory), provider, settings.window_days());

    let response = engine.match_and_schedule(&args.service_text).await;
    println!("{}", serde_json::to_string_pretty(&response)?);

    if args.show_rotation {
        eprintln!(
            "rotation counters: {}",
            serde_json::to_string(&engine.rotation_snapshot())?
        );
    }

    Ok(())
}
