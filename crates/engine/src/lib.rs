//! Domain core of the expense tracker.
//!
//! [`Engine`] owns the in-memory record store for the lifetime of the
//! process; handlers and report jobs share it behind an `Arc`. Every stored
//! record passed [`validate`] at insertion, records are append-only and
//! carry no identifier.

use tokio::sync::RwLock;

pub use categories::Category;
pub use error::EngineError;
pub use expense::{Expense, ExpenseDraft};
pub use filter::ExpenseFilter;
pub use summary::{Summary, summarize};
pub use validate::validate;

mod categories;
mod error;
mod expense;
mod filter;
mod summary;
mod validate;

type ResultEngine<T> = Result<T, EngineError>;

/// Sole owner of expense state.
///
/// Each operation takes the store lock exactly once, so appends and
/// snapshots are atomic with respect to each other. A report job racing a
/// concurrent create may or may not see the new record; that is accepted.
#[derive(Debug, Default)]
pub struct Engine {
    expenses: RwLock<Vec<Expense>>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a submission and append it to the store.
    ///
    /// Returns the stored record so the caller can echo it back.
    pub async fn add_expense(&self, draft: ExpenseDraft) -> ResultEngine<Expense> {
        let expense = validate(draft)?;

        let mut expenses = self.expenses.write().await;
        expenses.push(expense.clone());

        Ok(expense)
    }

    /// Snapshot the store and keep the records matching `filter`,
    /// in insertion order.
    pub async fn expenses(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        filter.apply(self.snapshot().await)
    }

    /// Aggregate over the full store.
    pub async fn summary(&self) -> Summary {
        summarize(&self.snapshot().await)
    }

    /// Read-isolated copy of the full ordered store.
    pub async fn snapshot(&self) -> Vec<Expense> {
        self.expenses.read().await.clone()
    }
}
