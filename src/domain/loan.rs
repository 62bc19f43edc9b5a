use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;
use uuid::Uuid;

/// Opaque, system-assigned loan identifier.
///
/// Generated from a random v4 UUID, so identifiers are never reused within
/// (or across) process lifetimes with any practical probability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LoanId(String);

impl LoanId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LoanId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Borrower name as entered, case preserved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BorrowerName(String);

impl BorrowerName {
    /// `None` for names that are empty or contain only whitespace.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        (!name.trim().is_empty()).then_some(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whole-string, case-insensitive comparison.
    ///
    /// Uses Unicode lowercase mapping, which does not depend on the process
    /// locale, and folds letters with positional variants (Greek final sigma,
    /// long s) to one form.
    pub fn matches(&self, query: &str) -> bool {
        fold_case(&self.0) == fold_case(query)
    }
}

fn fold_case(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'ς' => 'σ',
            'ϐ' => 'β',
            'ϑ' => 'θ',
            'ϕ' => 'φ',
            'ϖ' => 'π',
            'ϰ' => 'κ',
            'ϱ' => 'ρ',
            'ϵ' => 'ε',
            'ſ' => 's',
            c => c,
        })
        .collect()
}

/// A strictly positive monetary amount.
///
/// Held as an exact decimal and written to the wire as a JSON number with
/// every digit preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Amount(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Option<Self> {
        (value > Decimal::ZERO).then_some(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// Validated create input, before an id and timestamp are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLoan {
    pub borrower_name: BorrowerName,
    pub funding_amount: Amount,
    pub repayment_amount: Amount,
}

/// A single loan record.
///
/// Fields are private: once built, a record is only ever read or dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    #[serde(rename = "loanId")]
    id: LoanId,
    borrower_name: BorrowerName,
    funding_amount: Amount,
    repayment_amount: Amount,
    created_at: DateTime<Utc>,
}

impl Loan {
    pub fn new(id: LoanId, new_loan: NewLoan, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            borrower_name: new_loan.borrower_name,
            funding_amount: new_loan.funding_amount,
            repayment_amount: new_loan.repayment_amount,
            created_at,
        }
    }

    pub fn id(&self) -> &LoanId {
        &self.id
    }

    pub fn borrower_name(&self) -> &BorrowerName {
        &self.borrower_name
    }

    pub fn funding_amount(&self) -> Amount {
        self.funding_amount
    }

    pub fn repayment_amount(&self) -> Amount {
        self.repayment_amount
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
