//! Numbered menu screens. Each screen loops until the user picks Back or a
//! terminal action; an unrecognized choice re-displays the same screen with
//! no side effects.

pub mod auth_menu;
pub mod budget_menu;
pub mod expense_menu;
pub mod income_menu;
pub mod main_menu;
pub mod profile_menu;
pub mod reminder_menu;

pub use auth_menu::AuthAction;

use crate::cli::output;
use crate::core::managers::ManagerError;

/// Reports a failed add in terms the user can act on. A persistence failure
/// means the record is held in memory but missing from disk until the next
/// successful save; a validation failure means nothing was recorded.
fn report_write_failure(what: &str, err: ManagerError) {
    match err {
        ManagerError::Store(err) => {
            output::warning(format!("{} recorded but not saved: {}", what, err));
        }
        other => output::warning(other.to_string()),
    }
}
