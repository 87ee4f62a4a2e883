//! Record managers. Each manager owns one ordered collection, loads it at
//! construction, and rewrites the whole snapshot after every successful
//! mutation. Records are append-only: there is no update or delete.

pub mod budgets;
pub mod expenses;
pub mod incomes;
pub mod reminders;
pub mod users;

pub use budgets::BudgetManager;
pub use expenses::ExpenseManager;
pub use incomes::IncomeManager;
pub use reminders::ReminderManager;
pub use users::UserManager;

use crate::errors::StoreError;

pub type ManagerResult<T> = Result<T, ManagerError>;

#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    #[error("{0}")]
    Invalid(String),
    #[error("Invalid credentials")]
    BadCredentials,
    #[error("No user is signed in")]
    NotAuthenticated,
    /// The in-memory mutation has already happened when this is returned;
    /// memory and disk stay divergent until the next successful save.
    #[error("Persistence error: {0}")]
    Store(#[from] StoreError),
}
