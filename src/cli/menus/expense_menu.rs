use dialoguer::theme::ColorfulTheme;

use crate::cli::core::{CliError, ShellContext};
use crate::cli::{io, output};

/// Expense screen: record and view expense entries.
pub fn show(context: &mut ShellContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    loop {
        output::section("EXPENSE MANAGEMENT");
        output::info("1. Add Expense\n2. View Expenses\n3. Back");
        match io::prompt_non_empty(theme, "Choose")?.as_str() {
            "1" => add_expense(context, theme)?,
            "2" => view_expenses(context),
            "3" => return Ok(()),
            _ => output::warning("Invalid choice"),
        }
    }
}

fn add_expense(context: &mut ShellContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    let amount = io::prompt_positive_amount(theme, "Amount ($)")?;
    let category = io::prompt_non_empty(theme, "Category")?;
    let payment_method = io::prompt_non_empty(theme, "Payment method")?;
    let date = io::prompt_date(theme, "Date (YYYY-MM-DD)")?;
    match context.expenses.add(amount, category, payment_method, date) {
        Ok(()) => output::success("Expense recorded!"),
        Err(err) => super::report_write_failure("Expense", err),
    }
    Ok(())
}

fn view_expenses(context: &ShellContext) {
    if context.expenses.is_empty() {
        output::info("No expense records found!");
        return;
    }
    for expense in context.expenses.list() {
        output::info(expense);
    }
}
