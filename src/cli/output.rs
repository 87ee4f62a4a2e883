use std::fmt;

use colored::Colorize;

/// Prints a plain informational line.
pub fn info(message: impl fmt::Display) {
    println!("{}", message);
}

/// Prints a success confirmation.
pub fn success(message: impl fmt::Display) {
    println!("{}", message.to_string().bright_green());
}

/// Prints a warning. Used for rejected operations and invalid menu choices.
pub fn warning(message: impl fmt::Display) {
    println!("{}", message.to_string().bright_yellow());
}

/// Prints an error to stderr.
pub fn error(message: impl fmt::Display) {
    eprintln!("{}", message.to_string().bright_red());
}

/// Prints a section header for a menu screen.
pub fn section(title: impl fmt::Display) {
    println!("\n{}", format!("=== {} ===", title).bold());
}
