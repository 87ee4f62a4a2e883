//! Whole-collection persistence: each entity type round-trips through one
//! JSON snapshot file inside the application data directory.

pub mod json_store;

use serde::{de::DeserializeOwned, Serialize};

use crate::domain::{Budget, Expense, Income, Reminder, User};

pub use json_store::JsonStore;

/// Ties an entity type to the snapshot file holding its collection.
pub trait Record: Serialize + DeserializeOwned {
    const FILE_NAME: &'static str;
}

impl Record for User {
    const FILE_NAME: &'static str = "users.json";
}

impl Record for Budget {
    const FILE_NAME: &'static str = "budgets.json";
}

impl Record for Income {
    const FILE_NAME: &'static str = "incomes.json";
}

impl Record for Expense {
    const FILE_NAME: &'static str = "expenses.json";
}

impl Record for Reminder {
    const FILE_NAME: &'static str = "reminders.json";
}
