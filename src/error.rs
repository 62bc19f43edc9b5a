use miette::Diagnostic;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum LoanError {
    #[error("validation failed: {0}")]
    #[diagnostic(code(loanbook::validation))]
    Validation(ValidationErrors),
    #[error("Loan with ID '{0}' not found")]
    #[diagnostic(code(loanbook::loan_not_found))]
    LoanNotFound(String),
    #[error("No loans found for borrower '{0}'")]
    #[diagnostic(code(loanbook::borrower_not_found))]
    BorrowerNotFound(String),
    #[error("CSV error: {0}")]
    #[diagnostic(code(loanbook::csv))]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    #[diagnostic(code(loanbook::io))]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LoanError>;

/// Failed input constraints, keyed by wire field name.
///
/// Every failing field is collected before the request is rejected, so a
/// caller sees all problems at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> &BTreeMap<&'static str, Vec<String>> {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}
