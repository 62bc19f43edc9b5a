//! HTTP/JSON surface for the loan service.
//!
//! | Method | Path                         | Handler                  |
//! |--------|------------------------------|--------------------------|
//! | POST   | `/loans`                     | [`handlers::create_loan`] |
//! | GET    | `/loans`                     | [`handlers::list_loans`]  |
//! | GET    | `/loans/{id}`                | [`handlers::get_loan`]    |
//! | GET    | `/loans/borrower/{name}`     | [`handlers::list_loans_by_borrower`] |
//! | DELETE | `/loans/{id}`                | [`handlers::delete_loan`] |
//! | GET    | `/health`                    | [`handlers::health`]      |
//!
//! The `/loans` routes may be mounted under a prefix such as `/api`.

pub mod error;
pub mod handlers;

use crate::application::loan_service::LoanService;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub loans: LoanService,
    api_prefix: Arc<str>,
}

impl AppState {
    /// `api_prefix` is expected in normalized form: empty, or a leading `/`
    /// with no trailing `/`.
    pub fn new(loans: LoanService, api_prefix: impl Into<Arc<str>>) -> Self {
        Self {
            loans,
            api_prefix: api_prefix.into(),
        }
    }

    /// Path a created loan can be fetched from.
    pub fn loan_location(&self, loan_id: &str) -> String {
        format!("{}/loans/{}", self.api_prefix, loan_id)
    }
}

/// Builds the application router with tracing and permissive CORS.
pub fn router(state: AppState) -> Router {
    let loans = Router::new()
        .route(
            "/loans",
            get(handlers::list_loans).post(handlers::create_loan),
        )
        .route(
            "/loans/borrower/:borrower_name",
            get(handlers::list_loans_by_borrower),
        )
        .route(
            "/loans/:loan_id",
            get(handlers::get_loan).delete(handlers::delete_loan),
        );

    let loans = if state.api_prefix.is_empty() {
        loans
    } else {
        Router::new().nest(&state.api_prefix, loans)
    };

    loans
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
