//! Command-line interface definitions and argument parsing

use clap::Parser;

/// Churn prediction web service backed by pre-trained artifacts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the classifier parameter file
    #[arg(long, default_value = "model/logistic_model.json")]
    pub model: String,

    /// Path to the scaler parameter file
    #[arg(long, default_value = "model/scaler.json")]
    pub scaler: String,

    /// Address to bind the listener on
    #[arg(short, long, default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on
    #[arg(short, long, default_value = "5000")]
    pub port: u16,

    /// Path to the append-only log file
    #[arg(long, default_value = "app.log")]
    pub log_file: String,

    /// Enable debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Listener address in `host:port` form.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
