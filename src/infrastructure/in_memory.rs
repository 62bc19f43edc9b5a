use crate::domain::loan::{Loan, LoanId};
use crate::domain::ports::LoanStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for loan records.
///
/// Uses `Arc<RwLock<HashMap<LoanId, Loan>>>` so clones share one collection.
/// Each operation takes the lock exactly once and never awaits while holding
/// it, which makes every call linearizable. Contents live for the process
/// lifetime only.
#[derive(Default, Clone)]
pub struct InMemoryLoanStore {
    loans: Arc<RwLock<HashMap<LoanId, Loan>>>,
}

impl InMemoryLoanStore {
    /// Creates a new, empty in-memory loan store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Orders a snapshot by creation time, then id, so listings are repeatable.
fn ordered(mut loans: Vec<Loan>) -> Vec<Loan> {
    loans.sort_by(|a, b| {
        a.created_at()
            .cmp(&b.created_at())
            .then_with(|| a.id().cmp(b.id()))
    });
    loans
}

#[async_trait]
impl LoanStore for InMemoryLoanStore {
    async fn insert(&self, loan: Loan) {
        let mut loans = self.loans.write().await;
        let previous = loans.insert(loan.id().clone(), loan);
        debug_assert!(previous.is_none(), "loan id inserted twice");
    }

    async fn get_by_id(&self, id: &str) -> Option<Loan> {
        let loans = self.loans.read().await;
        loans.get(id).cloned()
    }

    async fn list_by_borrower_name(&self, name: &str) -> Vec<Loan> {
        let matching = {
            let loans = self.loans.read().await;
            loans
                .values()
                .filter(|loan| loan.borrower_name().matches(name))
                .cloned()
                .collect()
        };
        ordered(matching)
    }

    async fn list_all(&self) -> Vec<Loan> {
        let all = {
            let loans = self.loans.read().await;
            loans.values().cloned().collect()
        };
        ordered(all)
    }

    async fn delete_by_id(&self, id: &str) -> bool {
        let mut loans = self.loans.write().await;
        loans.remove(id).is_some()
    }
}
