use dialoguer::theme::ColorfulTheme;

use crate::cli::core::{CliError, ShellContext};
use crate::cli::{io, output};

/// What the sign-in screen resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    SignedIn,
    Exit,
}

/// Sign-in screen: the only menu reachable before authentication.
pub fn show(context: &mut ShellContext, theme: &ColorfulTheme) -> Result<AuthAction, CliError> {
    loop {
        output::section("FINANCIAL MANAGER");
        output::info("1. Login\n2. Register\n3. Exit");
        match io::prompt_non_empty(theme, "Choose option")?.as_str() {
            "1" => {
                if login(context, theme)? {
                    return Ok(AuthAction::SignedIn);
                }
            }
            "2" => register(context, theme)?,
            "3" => return Ok(AuthAction::Exit),
            _ => output::warning("Invalid option"),
        }
    }
}

fn login(context: &mut ShellContext, theme: &ColorfulTheme) -> Result<bool, CliError> {
    let username = io::prompt_non_empty(theme, "Username")?;
    let password = io::prompt_non_empty(theme, "Password")?;
    match context
        .users
        .login(&mut context.session, &username, &password)
    {
        Ok(()) => {
            output::success("Login successful!");
            Ok(true)
        }
        Err(err) => {
            output::warning(err.to_string());
            Ok(false)
        }
    }
}

fn register(context: &mut ShellContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    let username = io::prompt_non_empty(theme, "Username")?;
    let password = io::prompt_non_empty(theme, "Password")?;
    let email = io::prompt_email(theme, "Email")?;
    match context.users.register(username, password, email) {
        Ok(()) => output::success("Registration successful!"),
        Err(err) => super::report_write_failure("Account", err),
    }
    Ok(())
}
