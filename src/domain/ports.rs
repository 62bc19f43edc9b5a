use super::loan::Loan;
use async_trait::async_trait;
use std::sync::Arc;

/// The authoritative set of live loan records.
///
/// Every operation is atomic with respect to every other: implementations
/// must behave as if all calls were serialized. None of them can fail.
#[async_trait]
pub trait LoanStore: Send + Sync {
    /// Adds `loan` under its id. The caller guarantees the id is fresh.
    async fn insert(&self, loan: Loan);
    async fn get_by_id(&self, id: &str) -> Option<Loan>;
    /// Snapshot of the records whose borrower name equals `name`, ignoring
    /// case. Empty when nothing matches.
    async fn list_by_borrower_name(&self, name: &str) -> Vec<Loan>;
    async fn list_all(&self) -> Vec<Loan>;
    /// Returns whether a record was actually removed.
    async fn delete_by_id(&self, id: &str) -> bool;
}

pub type LoanStoreRef = Arc<dyn LoanStore>;
