use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single income entry: an amount received from a source on a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub amount: f64,
    pub source: String,
    pub date: NaiveDate,
}

impl Income {
    pub fn new(amount: f64, source: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            source: source.into(),
            date,
        }
    }
}

impl fmt::Display for Income {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Income] ${:.2} from {} on {}",
            self.amount, self.source, self.date
        )
    }
}
