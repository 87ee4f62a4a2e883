use chrono::NaiveDate;

use crate::domain::Expense;
use crate::storage::JsonStore;

use super::ManagerResult;

/// Owns the expense collection and its snapshot file.
pub struct ExpenseManager {
    expenses: Vec<Expense>,
    store: JsonStore,
}

impl ExpenseManager {
    pub fn load(store: JsonStore) -> Self {
        let expenses = store.load();
        Self { expenses, store }
    }

    /// Records an expense entry. The amount is guaranteed positive by the
    /// prompt layer and is not re-checked here.
    pub fn add(
        &mut self,
        amount: f64,
        category: impl Into<String>,
        payment_method: impl Into<String>,
        date: NaiveDate,
    ) -> ManagerResult<()> {
        self.expenses
            .push(Expense::new(amount, category, payment_method, date));
        self.store.save(&self.expenses)?;
        Ok(())
    }

    /// All expense entries in insertion order.
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
