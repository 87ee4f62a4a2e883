use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;

use crate::cli::core::{CliError, ShellContext};
use crate::cli::menus::{auth_menu, main_menu, AuthAction};

/// Runs the menu REPL until the user selects Exit from the sign-in screen.
///
/// Exiting the main menu returns here without clearing the session slot;
/// only the profile menu's logout clears it.
pub fn run_cli(data_root: Option<PathBuf>) -> Result<(), CliError> {
    let mut context = ShellContext::new(data_root);
    let theme = ColorfulTheme::default();

    loop {
        match auth_menu::show(&mut context, &theme)? {
            AuthAction::SignedIn => main_menu::show(&mut context, &theme)?,
            AuthAction::Exit => return Ok(()),
        }
    }
}
