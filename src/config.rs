use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// In-memory loan records service.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "LOANBOOK_BIND", default_value = "127.0.0.1:5103")]
    pub bind: SocketAddr,

    /// Path prefix for the loan routes (e.g. `/api` serves `/api/loans`)
    #[arg(long, env = "LOANBOOK_API_PREFIX", default_value = "")]
    pub api_prefix: String,

    /// CSV file of loans to load at startup
    /// (columns: borrower_name, funding_amount, repayment_amount)
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Log output format
    #[arg(long, env = "LOANBOOK_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Config {
    /// The API prefix with a single leading `/` and no trailing `/`, or empty.
    pub fn api_prefix(&self) -> String {
        let trimmed = self.api_prefix.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }
}
