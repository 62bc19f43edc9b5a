use crate::domain::loan::{Amount, BorrowerName, Loan, LoanId, NewLoan};
use crate::domain::ports::LoanStoreRef;
use crate::error::{LoanError, Result, ValidationErrors};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

const BORROWER_NAME: &str = "borrowerName";
const FUNDING_AMOUNT: &str = "fundingAmount";
const REPAYMENT_AMOUNT: &str = "repaymentAmount";

/// Unvalidated input for creating a loan.
///
/// Every field is optional so that a missing value is reported as a
/// validation error on that field rather than as a malformed request.
/// Amounts are accepted as JSON numbers or numeric strings and parsed
/// straight from their digits, never through `f64`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanRequest {
    #[serde(default)]
    pub borrower_name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub funding_amount: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub repayment_amount: Option<Decimal>,
}

impl CreateLoanRequest {
    /// Checks every field and reports all failures together.
    pub fn validate(self) -> Result<NewLoan> {
        let mut errors = ValidationErrors::new();

        let borrower_name = self.borrower_name.and_then(BorrowerName::new);
        if borrower_name.is_none() {
            errors.add(BORROWER_NAME, "Borrower name is required");
        }
        let funding_amount =
            positive_amount(self.funding_amount, FUNDING_AMOUNT, "Funding amount", &mut errors);
        let repayment_amount = positive_amount(
            self.repayment_amount,
            REPAYMENT_AMOUNT,
            "Repayment amount",
            &mut errors,
        );

        match (borrower_name, funding_amount, repayment_amount) {
            (Some(borrower_name), Some(funding_amount), Some(repayment_amount)) => Ok(NewLoan {
                borrower_name,
                funding_amount,
                repayment_amount,
            }),
            _ => Err(LoanError::Validation(errors)),
        }
    }
}

fn positive_amount(
    value: Option<Decimal>,
    field: &'static str,
    label: &str,
    errors: &mut ValidationErrors,
) -> Option<Amount> {
    let Some(value) = value else {
        errors.add(field, format!("{label} is required"));
        return None;
    };
    let amount = Amount::new(value);
    if amount.is_none() {
        errors.add(field, format!("{label} must be greater than 0"));
    }
    amount
}

/// Every live loan plus how many there are.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanListing {
    pub total_count: usize,
    pub loans: Vec<Loan>,
}

/// Outcome of a bulk load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub loaded: usize,
    pub skipped: usize,
}

/// The loan API: validates input, drives the store and signals not-found.
///
/// Stateless apart from the shared store handle, so clones are cheap and
/// may serve concurrent callers.
#[derive(Clone)]
pub struct LoanService {
    store: LoanStoreRef,
}

impl LoanService {
    pub fn new(store: LoanStoreRef) -> Self {
        Self { store }
    }

    /// Validates `request`, assigns a fresh id and a UTC creation time, and
    /// stores the record. The store is untouched when validation fails.
    pub async fn create(&self, request: CreateLoanRequest) -> Result<Loan> {
        let new_loan = request.validate()?;
        let loan = Loan::new(LoanId::generate(), new_loan, Utc::now());
        self.store.insert(loan.clone()).await;
        info!(loan_id = %loan.id(), "loan created");
        Ok(loan)
    }

    pub async fn get(&self, loan_id: &str) -> Result<Loan> {
        if loan_id.is_empty() {
            return Err(LoanError::LoanNotFound(String::new()));
        }
        self.store
            .get_by_id(loan_id)
            .await
            .ok_or_else(|| LoanError::LoanNotFound(loan_id.to_string()))
    }

    /// Loans whose borrower name equals `borrower_name`, ignoring case.
    ///
    /// An empty match is reported as `BorrowerNotFound`, unlike
    /// [`LoanService::list_all`] which succeeds with an empty listing.
    pub async fn list_by_borrower(&self, borrower_name: &str) -> Result<Vec<Loan>> {
        let loans = self.store.list_by_borrower_name(borrower_name).await;
        debug!(count = loans.len(), "borrower lookup");
        if loans.is_empty() {
            return Err(LoanError::BorrowerNotFound(borrower_name.to_string()));
        }
        Ok(loans)
    }

    pub async fn list_all(&self) -> LoanListing {
        let loans = self.store.list_all().await;
        LoanListing {
            total_count: loans.len(),
            loans,
        }
    }

    pub async fn delete(&self, loan_id: &str) -> Result<()> {
        if !self.store.delete_by_id(loan_id).await {
            return Err(LoanError::LoanNotFound(loan_id.to_string()));
        }
        info!(loan_id, "loan deleted");
        Ok(())
    }

    /// Creates a loan for each request, skipping (and logging) any that fail
    /// to read or validate.
    pub async fn seed<I>(&self, requests: I) -> SeedSummary
    where
        I: IntoIterator<Item = Result<CreateLoanRequest>>,
    {
        let mut summary = SeedSummary::default();
        for (index, request) in requests.into_iter().enumerate() {
            let row = index + 1;
            match request {
                Ok(request) => match self.create(request).await {
                    Ok(_) => summary.loaded += 1,
                    Err(e) => {
                        warn!(row, error = %e, "skipping invalid seed row");
                        summary.skipped += 1;
                    }
                },
                Err(e) => {
                    warn!(row, error = %e, "skipping unreadable seed row");
                    summary.skipped += 1;
                }
            }
        }
        summary
    }
}
