use super::AppState;
use super::error::ApiError;
use crate::application::loan_service::{CreateLoanRequest, LoanListing};
use crate::domain::loan::Loan;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

/// POST /loans
pub async fn create_loan(
    State(state): State<AppState>,
    payload: Result<Json<CreateLoanRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let loan = state.loans.create(request).await?;
    let location = state.loan_location(loan.id().as_str());
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(loan)))
}

/// GET /loans/{loan_id}
pub async fn get_loan(
    State(state): State<AppState>,
    Path(loan_id): Path<String>,
) -> Result<Json<Loan>, ApiError> {
    Ok(Json(state.loans.get(&loan_id).await?))
}

/// GET /loans/borrower/{borrower_name}
pub async fn list_loans_by_borrower(
    State(state): State<AppState>,
    Path(borrower_name): Path<String>,
) -> Result<Json<Vec<Loan>>, ApiError> {
    Ok(Json(state.loans.list_by_borrower(&borrower_name).await?))
}

/// GET /loans
pub async fn list_loans(State(state): State<AppState>) -> Json<LoanListing> {
    Json(state.loans.list_all().await)
}

/// DELETE /loans/{loan_id}
pub async fn delete_loan(
    State(state): State<AppState>,
    Path(loan_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.loans.delete(&loan_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn health() -> &'static str {
    "Healthy"
}
