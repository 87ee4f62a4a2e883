use dialoguer::theme::ColorfulTheme;

use crate::cli::core::{CliError, ShellContext};
use crate::cli::{io, output};

use super::{budget_menu, expense_menu, income_menu, profile_menu, reminder_menu};

/// Top-level menu shown after a successful login. Returns when the user
/// exits back to the sign-in screen or logs out from the profile menu.
pub fn show(context: &mut ShellContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    loop {
        output::section("MAIN MENU");
        output::info("1. Budgets\n2. Income\n3. Expenses\n4. Reminders\n5. Profile\n6. Exit");
        match io::prompt_non_empty(theme, "Choose option")?.as_str() {
            "1" => budget_menu::show(context, theme)?,
            "2" => income_menu::show(context, theme)?,
            "3" => expense_menu::show(context, theme)?,
            "4" => reminder_menu::show(context, theme)?,
            "5" => {
                profile_menu::show(context, theme)?;
                if !context.session.is_authenticated() {
                    return Ok(());
                }
            }
            "6" => return Ok(()),
            _ => output::warning("Invalid option"),
        }
    }
}
