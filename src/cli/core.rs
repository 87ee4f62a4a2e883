use std::path::PathBuf;

use thiserror::Error;

use crate::core::managers::{
    BudgetManager, ExpenseManager, IncomeManager, ManagerError, ReminderManager, UserManager,
};
use crate::core::Session;
use crate::storage::JsonStore;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Manager(#[from] ManagerError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Bundles the record managers and the sign-in context for the menu tree.
pub struct ShellContext {
    pub users: UserManager,
    pub budgets: BudgetManager,
    pub incomes: IncomeManager,
    pub expenses: ExpenseManager,
    pub reminders: ReminderManager,
    pub session: Session,
}

impl ShellContext {
    /// Loads every collection from the data directory rooted at `root`
    /// (the default application directory when `None`). Unreadable snapshots
    /// degrade to empty collections rather than aborting startup.
    pub fn new(root: Option<PathBuf>) -> Self {
        let store = JsonStore::new(root);
        Self {
            users: UserManager::load(store.clone()),
            budgets: BudgetManager::load(store.clone()),
            incomes: IncomeManager::load(store.clone()),
            expenses: ExpenseManager::load(store.clone()),
            reminders: ReminderManager::load(store),
            session: Session::new(),
        }
    }
}
