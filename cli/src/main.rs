//! CLI entrypoint for cinema-tickets
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tickets_application::{PurchaseLogger, PurchaseTicketsUseCase};
use tickets_domain::{OutputFormat, PurchaseRequest};
use tickets_infrastructure::{
    ConfigLoader, JsonlPurchaseLogger, TracingPaymentGateway, TracingSeatReservation,
};
use tickets_presentation::{Cli, ConsoleFormatter, load_request_file};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Exit status for a purchase that failed validation.
const EXIT_REJECTED: u8 = 2;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config
            && !path.exists()
        {
            bail!("Config file not found: {}", path.display());
        }
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in &issues {
        warn!("{}", issue);
    }
    if issues.iter().any(|issue| issue.is_error()) {
        bail!(
            "Invalid configuration: {}",
            issues
                .iter()
                .filter(|issue| issue.is_error())
                .map(|issue| issue.message.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        );
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Request ===
    let request = match &cli.request {
        Some(path) => load_request_file(path)?,
        None => {
            if cli.account.is_none() && cli.ticket.is_empty() {
                bail!("Nothing to buy. Use --account <ID> --ticket CATEGORY=COUNT or --request <FILE>.");
            }
            PurchaseRequest {
                account_id: cli.account,
                lines: Some(cli.ticket.iter().copied().map(Some).collect()),
            }
        }
    };

    // === Dependency Injection ===
    let rules = config.to_purchase_rules();
    let mut use_case = PurchaseTicketsUseCase::new(
        Arc::new(TracingPaymentGateway::new()),
        Arc::new(TracingSeatReservation::new()),
    )
    .with_rules(rules);

    if let Some(path) = cli.audit_log.as_ref().or(config.audit.path.as_ref()) {
        let logger = JsonlPurchaseLogger::new(path)
            .with_context(|| format!("Could not open audit log {}", path.display()))?;
        info!("Auditing purchases to {}", logger.path().display());
        let logger: Arc<dyn PurchaseLogger> = Arc::new(logger);
        use_case = use_case.with_purchase_logger(logger);
    }

    // === Execute ===
    let outcome = use_case.execute(&request);

    let formatter = ConsoleFormatter::new(rules.prices);
    println!("{}", formatter.render(&outcome, format));

    Ok(match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::from(EXIT_REJECTED),
    })
}
