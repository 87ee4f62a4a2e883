use dialoguer::theme::ColorfulTheme;

use crate::cli::core::{CliError, ShellContext};
use crate::cli::{io, output};
use crate::core::managers::reminders::{TITLE_MAX, TITLE_MIN};

/// Reminder screen: set and view reminders.
pub fn show(context: &mut ShellContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    loop {
        output::section("REMINDER MANAGEMENT");
        output::info("1. Create Reminder\n2. View Reminders\n3. Back");
        match io::prompt_non_empty(theme, "Choose")?.as_str() {
            "1" => create_reminder(context, theme)?,
            "2" => view_reminders(context),
            "3" => return Ok(()),
            _ => output::warning("Invalid choice"),
        }
    }
}

fn create_reminder(context: &mut ShellContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    let title = io::prompt_bounded_string(theme, "Title", TITLE_MIN, TITLE_MAX)?;
    let date = io::prompt_future_date(theme, "Date (YYYY-MM-DD)")?;
    let time = io::prompt_time(theme, "Time (HH:mm)")?;
    match context.reminders.add(title, date, time) {
        Ok(()) => output::success("Reminder set!"),
        Err(err) => super::report_write_failure("Reminder", err),
    }
    Ok(())
}

fn view_reminders(context: &ShellContext) {
    if context.reminders.is_empty() {
        output::info("No reminders found!");
        return;
    }
    for reminder in context.reminders.list() {
        output::info(reminder);
    }
}
