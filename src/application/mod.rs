//! Application layer containing the loan API.
//!
//! `LoanService` owns input validation, identifier and timestamp
//! assignment, and the mapping of empty lookups to not-found errors. It is
//! transport-agnostic: the HTTP adapter and the startup seeder both drive it.

pub mod loan_service;
