//! CLI entrypoint for ordersnap
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use ordersnap_application::{FetchSnapshotsInput, FetchSnapshotsUseCase};
use ordersnap_domain::{OrderId, OutputFormat};
use ordersnap_infrastructure::{
    ConfigLoader, SimulatedOrderService, SimulatedPaymentService, SimulatedShipmentService,
};
use ordersnap_presentation::{Cli, ConsoleFormatter, ProgressReporter};
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
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
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load file config, then apply CLI overrides
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let count = cli.count.unwrap_or(config.batch.count);
    let mut params = config.batch.batch_params();
    if let Some(concurrency) = cli.concurrency {
        params = params.with_max_concurrency(concurrency);
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        params = params.with_per_call_timeout(Duration::from_millis(timeout_ms));
    }

    let format = cli
        .output
        .map(|f| f.to_domain())
        .or(config.output.format)
        .unwrap_or_default();
    let quiet = cli.quiet || config.output.quiet;

    info!("Starting ordersnap with {} demo orders", count);

    // === Dependency Injection ===
    // Create infrastructure adapters (simulated upstreams)
    let orders = Arc::new(SimulatedOrderService::new(
        config.simulation.order.latency_range(),
    ));
    let payments = Arc::new(SimulatedPaymentService::new(
        config.simulation.payment.latency_range(),
    ));
    let shipments = Arc::new(SimulatedShipmentService::new(
        config.simulation.shipment.latency_range(),
    ));

    // Demo batch: freshly minted ids, snapshotted under the configured cap
    let order_ids: Vec<OrderId> = (0..count).map(|_| OrderId::random()).collect();

    // Ctrl-C cancels the whole batch
    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                warn!("Ctrl-C received, cancelling batch");
                signal_token.cancel();
            }
            Err(err) => {
                warn!("Failed to listen for Ctrl-C: {}", err);
            }
        }
    });

    // Print header
    if !quiet {
        println!();
        println!(
            "Fetching {} order snapshots (concurrency {}, per-call timeout {:?})",
            count, params.max_concurrency, params.per_call_timeout
        );
        println!();
    }

    // Create use case with injected adapters
    let use_case =
        FetchSnapshotsUseCase::new(orders, payments, shipments).with_cancellation(cancel);
    let input = FetchSnapshotsInput::new(order_ids, params);

    // Execute with or without progress reporting
    let result = if quiet {
        use_case.execute(input).await
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await
    };

    let batch = match result {
        Ok(batch) => batch,
        Err(e) if e.is_cancelled() => {
            eprintln!("Batch cancelled before completion; no results.");
            std::process::exit(130);
        }
        Err(e) => return Err(e.into()),
    };

    // Output results
    let output = match format {
        OutputFormat::Full => ConsoleFormatter::format(&batch),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&batch),
        OutputFormat::Json => ConsoleFormatter::format_json(&batch),
    };

    println!("{}", output);

    Ok(())
}
