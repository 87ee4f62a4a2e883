use chrono::{Local, NaiveDate, NaiveTime};

use crate::domain::{validate, Reminder};
use crate::storage::JsonStore;

use super::{ManagerError, ManagerResult};

/// Accepted reminder title length, in characters.
pub const TITLE_MIN: usize = 3;
pub const TITLE_MAX: usize = 50;

/// Owns the reminder collection and its snapshot file.
pub struct ReminderManager {
    reminders: Vec<Reminder>,
    store: JsonStore,
}

impl ReminderManager {
    pub fn load(store: JsonStore) -> Self {
        let reminders = store.load();
        Self { reminders, store }
    }

    /// Records a reminder. The title must be 3-50 characters and the date
    /// strictly after today; a rejected reminder leaves memory and disk
    /// untouched.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
    ) -> ManagerResult<()> {
        let title = title.into();
        if !validate::is_valid_string(&title, TITLE_MIN, TITLE_MAX) {
            return Err(ManagerError::Invalid(format!(
                "Title must be {}-{} characters",
                TITLE_MIN, TITLE_MAX
            )));
        }
        if date <= Local::now().date_naive() {
            return Err(ManagerError::Invalid("Date must be in the future".into()));
        }
        self.reminders.push(Reminder::new(title, date, time));
        self.store.save(&self.reminders)?;
        Ok(())
    }

    /// All reminders in insertion order.
    pub fn list(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }
}
