use dialoguer::theme::ColorfulTheme;

use crate::cli::core::{CliError, ShellContext};
use crate::cli::{io, output};

/// Budget screen: create and view budgets.
pub fn show(context: &mut ShellContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    loop {
        output::section("BUDGET MANAGEMENT");
        output::info("1. Create Budget\n2. View Budgets\n3. Back");
        match io::prompt_non_empty(theme, "Choose")?.as_str() {
            "1" => create_budget(context, theme)?,
            "2" => view_budgets(context),
            "3" => return Ok(()),
            _ => output::warning("Invalid choice"),
        }
    }
}

fn create_budget(context: &mut ShellContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    let category = io::prompt_non_empty(theme, "Category")?;
    let limit = io::prompt_positive_amount(theme, "Limit ($)")?;
    let start = io::prompt_future_date(theme, "Start date (YYYY-MM-DD)")?;
    let end = io::prompt_date_after(theme, "End date (YYYY-MM-DD)", start)?;
    match context.budgets.add(category, limit, start, end) {
        Ok(()) => output::success("Budget created!"),
        Err(err) => super::report_write_failure("Budget", err),
    }
    Ok(())
}

fn view_budgets(context: &ShellContext) {
    if context.budgets.is_empty() {
        output::info("No budgets found!");
        return;
    }
    for budget in context.budgets.list() {
        output::info(budget);
    }
}
