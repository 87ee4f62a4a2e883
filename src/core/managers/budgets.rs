use chrono::{Local, NaiveDate};

use crate::domain::{validate, Budget};
use crate::storage::JsonStore;

use super::{ManagerError, ManagerResult};

/// Owns the budget collection and its snapshot file.
pub struct BudgetManager {
    budgets: Vec<Budget>,
    store: JsonStore,
}

impl BudgetManager {
    /// Loads the persisted collection, starting empty when no snapshot is
    /// readable.
    pub fn load(store: JsonStore) -> Self {
        let budgets = store.load();
        Self { budgets, store }
    }

    /// Records a budget. The period must end strictly after it starts and
    /// must start strictly after today; a rejected budget leaves memory and
    /// disk untouched.
    pub fn add(
        &mut self,
        category: impl Into<String>,
        limit: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ManagerResult<()> {
        if !validate::budget_range_valid(start_date, end_date) {
            return Err(ManagerError::Invalid(
                "End date must be after start date".into(),
            ));
        }
        if start_date <= Local::now().date_naive() {
            return Err(ManagerError::Invalid(
                "Start date must be in the future".into(),
            ));
        }
        self.budgets
            .push(Budget::new(category, limit, start_date, end_date));
        self.store.save(&self.budgets)?;
        Ok(())
    }

    /// All budgets in insertion order.
    pub fn list(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }
}
