use chrono::NaiveDate;

use crate::domain::Income;
use crate::storage::JsonStore;

use super::ManagerResult;

/// Owns the income collection and its snapshot file.
pub struct IncomeManager {
    incomes: Vec<Income>,
    store: JsonStore,
}

impl IncomeManager {
    pub fn load(store: JsonStore) -> Self {
        let incomes = store.load();
        Self { incomes, store }
    }

    /// Records an income entry. The amount is guaranteed positive by the
    /// prompt layer and is not re-checked here.
    pub fn add(
        &mut self,
        amount: f64,
        source: impl Into<String>,
        date: NaiveDate,
    ) -> ManagerResult<()> {
        self.incomes.push(Income::new(amount, source, date));
        self.store.save(&self.incomes)?;
        Ok(())
    }

    /// All income entries in insertion order.
    pub fn list(&self) -> &[Income] {
        &self.incomes
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty()
    }
}
