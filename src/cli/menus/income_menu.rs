use dialoguer::theme::ColorfulTheme;

use crate::cli::core::{CliError, ShellContext};
use crate::cli::{io, output};

/// Income screen: record and view income entries.
pub fn show(context: &mut ShellContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    loop {
        output::section("INCOME MANAGEMENT");
        output::info("1. Add Income\n2. View Income\n3. Back");
        match io::prompt_non_empty(theme, "Choose")?.as_str() {
            "1" => add_income(context, theme)?,
            "2" => view_income(context),
            "3" => return Ok(()),
            _ => output::warning("Invalid choice"),
        }
    }
}

fn add_income(context: &mut ShellContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    let amount = io::prompt_positive_amount(theme, "Amount ($)")?;
    let source = io::prompt_non_empty(theme, "Source")?;
    let date = io::prompt_date(theme, "Date (YYYY-MM-DD)")?;
    match context.incomes.add(amount, source, date) {
        Ok(()) => output::success("Income recorded!"),
        Err(err) => super::report_write_failure("Income", err),
    }
    Ok(())
}

fn view_income(context: &ShellContext) {
    if context.incomes.is_empty() {
        output::info("No income records found!");
        return;
    }
    for income in context.incomes.list() {
        output::info(income);
    }
}
