use crate::error::LoanError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::error;

/// Problem-details style error body.
#[derive(Debug, Serialize)]
struct ProblemBody<'a> {
    status: u16,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a BTreeMap<&'static str, Vec<String>>>,
}

/// Everything a handler can fail with.
#[derive(Debug)]
pub enum ApiError {
    Loan(LoanError),
    MalformedBody(JsonRejection),
}

impl From<LoanError> for ApiError {
    fn from(err: LoanError) -> Self {
        Self::Loan(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection)
    }
}

fn problem(
    status: StatusCode,
    title: String,
    errors: Option<&BTreeMap<&'static str, Vec<String>>>,
) -> Response {
    let body = ProblemBody {
        status: status.as_u16(),
        title,
        errors,
    };
    (status, Json(body)).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Loan(LoanError::Validation(errors)) => problem(
                StatusCode::BAD_REQUEST,
                "One or more validation errors occurred.".to_string(),
                Some(errors.fields()),
            ),
            ApiError::Loan(err @ (LoanError::LoanNotFound(_) | LoanError::BorrowerNotFound(_))) => {
                problem(StatusCode::NOT_FOUND, err.to_string(), None)
            }
            ApiError::Loan(err) => {
                error!(error = %err, "unexpected error while handling request");
                problem(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            ApiError::MalformedBody(rejection) => problem(
                StatusCode::BAD_REQUEST,
                format!("Invalid request body: {}", rejection.body_text()),
                None,
            ),
        }
    }
}
