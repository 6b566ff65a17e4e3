//! ChurnScope: customer churn prediction served over a web form
//!
//! This is the main entrypoint that configures logging, loads the
//! pre-trained artifacts, and serves the inference endpoint.

use std::sync::Arc;

use anyhow::Context;
use churnscope::{server, Args, Artifacts};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Guard must outlive main so buffered file output is flushed on exit
    let _log_guard = init_logging(&args.log_file, args.verbose)?;

    // Artifact loading is the startup gate: the process never serves
    // traffic without both parameter files
    let artifacts = match Artifacts::load(&args.model, &args.scaler) {
        Ok(artifacts) => {
            tracing::info!("model and scaler loaded successfully");
            artifacts
        }
        Err(err) => {
            tracing::error!("failed to load model or scaler: {:#}", err);
            return Err(err);
        }
    };

    let app = server::app(Arc::new(artifacts));

    let addr = args.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Timestamped logging to both the console and an append-only file.
fn init_logging(log_file: &str, verbose: bool) -> anyhow::Result<WorkerGuard> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("failed to open log file {}", log_file))?;
    let (file_writer, guard) = tracing_appender::non_blocking(file);

    let level = if verbose {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::INFO
    };

    tracing_subscriber::registry()
        .with(level)
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .init();

    Ok(guard)
}
