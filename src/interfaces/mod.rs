//! Adapters that connect the loan service to the outside world.

pub mod csv;
pub mod http;
