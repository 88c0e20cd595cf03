//! `forsale` command-line entry point
//!
//! Checks one or more domains for `_for-sale` TXT records and prints the
//! results as JSON on stdout. Logs go to stderr so the output stays parseable.

mod config;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use forsale_core::SaleRecordSet;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use config::{AppConfig, Args};

/// Initialize tracing to stderr. `RUST_LOG` takes precedence over the configured level.
fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .without_time(),
            )
            .init();
    }
}

/// One result prints as an object, several as an array.
fn render(results: &[SaleRecordSet], compact: bool) -> Result<String> {
    let rendered = match (results, compact) {
        ([single], true) => serde_json::to_string(single)?,
        ([single], false) => serde_json::to_string_pretty(single)?,
        (many, true) => serde_json::to_string(many)?,
        (many, false) => serde_json::to_string_pretty(many)?,
    };
    Ok(rendered)
}

async fn run(args: Args) -> Result<()> {
    let config = AppConfig::load(&args)?;
    init_tracing(&config.log_level, config.json_logs);

    let service = forsale_toolbox::build_service(config.resolver.clone());
    tracing::info!("Checking {} domain(s)", args.domains.len());

    let results = service.check_domains(args.domains.as_slice()).await;
    let for_sale = results.iter().filter(|set| set.for_sale).count();
    tracing::info!("{for_sale} of {} domain(s) marked for sale", results.len());

    println!("{}", render(&results, config.compact)?);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
