use clap::Parser;
use loanbook::application::loan_service::LoanService;
use loanbook::config::Config;
use loanbook::domain::ports::LoanStoreRef;
use loanbook::infrastructure::in_memory::InMemoryLoanStore;
use loanbook::interfaces::csv::loan_reader::LoanReader;
use loanbook::interfaces::http::{AppState, router};
use loanbook::telemetry;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    telemetry::init(config.log_format);

    let store: LoanStoreRef = Arc::new(InMemoryLoanStore::new());
    let loans = LoanService::new(store);

    if let Some(seed) = &config.seed {
        let reader = LoanReader::from_path(seed)
            .wrap_err_with(|| format!("failed to open seed file {}", seed.display()))?;
        let summary = loans.seed(reader.requests()).await;
        info!(
            loaded = summary.loaded,
            skipped = summary.skipped,
            path = %seed.display(),
            "seed file loaded"
        );
    }

    let state = AppState::new(loans, config.api_prefix());
    let listener = TcpListener::bind(config.bind)
        .await
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to bind {}", config.bind))?;
    info!(addr = %config.bind, "loan service listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    info!("loan service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
