use crate::application::loan_service::CreateLoanRequest;
use crate::error::{LoanError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One row of a seed file: `borrower_name,funding_amount,repayment_amount`.
///
/// Amounts are parsed from the field text so no digits are lost.
#[derive(Debug, Deserialize)]
struct LoanRow {
    borrower_name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    funding_amount: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    repayment_amount: Option<Decimal>,
}

impl From<LoanRow> for CreateLoanRequest {
    fn from(row: LoanRow) -> Self {
        Self {
            borrower_name: row.borrower_name,
            funding_amount: row.funding_amount,
            repayment_amount: row.repayment_amount,
        }
    }
}

/// Reads loan create requests from a CSV source.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record lengths.
/// Rows are only parsed here; validation happens when they are created.
pub struct LoanReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> LoanReader<R> {
    /// Creates a new `LoanReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes rows.
    pub fn requests(self) -> impl Iterator<Item = Result<CreateLoanRequest>> {
        self.reader
            .into_deserialize::<LoanRow>()
            .map(|result| result.map(CreateLoanRequest::from).map_err(LoanError::from))
    }
}

impl LoanReader<File> {
    /// Opens a seed file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}
