//! Loan records and the storage port the application layer drives.

pub mod loan;
pub mod ports;
