use dialoguer::theme::ColorfulTheme;

use crate::cli::core::{CliError, ShellContext};
use crate::cli::{io, output};

/// Profile screen. Logout clears the session and is the only way to drop
/// back to the sign-in screen with the slot cleared; Back stays signed in.
pub fn show(context: &mut ShellContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    loop {
        output::section("PROFILE MANAGEMENT");
        output::info("1. Change Password\n2. Logout\n3. Back");
        match io::prompt_non_empty(theme, "Choose")?.as_str() {
            "1" => change_password(context, theme)?,
            "2" => {
                context.session.clear();
                output::success("Logged out successfully!");
                return Ok(());
            }
            "3" => return Ok(()),
            _ => output::warning("Invalid choice"),
        }
    }
}

fn change_password(context: &mut ShellContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    let old_password = io::prompt_non_empty(theme, "Current password")?;
    let new_password = io::prompt_non_empty(theme, "New password")?;
    match context
        .users
        .change_password(&context.session, &old_password, new_password)
    {
        Ok(()) => output::success("Password changed successfully!"),
        Err(err) => super::report_write_failure("Password", err),
    }
    Ok(())
}
