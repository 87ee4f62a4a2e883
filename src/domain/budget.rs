use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A spending limit for one category over a fixed date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub category: String,
    pub limit: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Budget {
    pub fn new(
        category: impl Into<String>,
        limit: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            category: category.into(),
            limit,
            start_date,
            end_date,
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ${:.2} ({} to {})",
            self.category, self.limit, self.start_date, self.end_date
        )
    }
}
