use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single expense entry with its category and payment method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub amount: f64,
    pub category: String,
    pub payment_method: String,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        payment_method: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            payment_method: payment_method.into(),
            date,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Expense] ${:.2} on {} ({}) - {}",
            self.amount, self.category, self.payment_method, self.date
        )
    }
}
