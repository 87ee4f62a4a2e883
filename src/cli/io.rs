//! Validated input primitives. Every prompt loops until the user supplies a
//! value satisfying its constraint, so callers never receive an invalid one.

use chrono::{Local, NaiveDate, NaiveTime};
use dialoguer::{theme::ColorfulTheme, Input};

use crate::domain::validate;

use super::core::CliError;
use super::output;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Prompts until a non-empty line is supplied. The result is trimmed.
pub fn prompt_non_empty(theme: &ColorfulTheme, prompt: &str) -> Result<String, CliError> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("This field cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Prompts until a string within `[min, max]` characters is supplied.
pub fn prompt_bounded_string(
    theme: &ColorfulTheme,
    prompt: &str,
    min: usize,
    max: usize,
) -> Result<String, CliError> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(move |input: &String| {
            if validate::is_valid_string(input.trim(), min, max) {
                Ok(())
            } else {
                Err(format!("Must be {}-{} characters", min, max))
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Prompts until an address containing `@` and `.` is supplied.
pub fn prompt_email(theme: &ColorfulTheme, prompt: &str) -> Result<String, CliError> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| {
            if validate::is_valid_email(input.trim()) {
                Ok(())
            } else {
                Err("Invalid email format")
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Prompts until a strictly positive amount is supplied.
pub fn prompt_positive_amount(theme: &ColorfulTheme, prompt: &str) -> Result<f64, CliError> {
    let value = Input::<f64>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|amount: &f64| {
            if validate::transaction_valid(*amount) {
                Ok(())
            } else {
                Err("Value must be positive")
            }
        })
        .interact_text()?;
    Ok(value)
}

/// Prompts until a parseable `YYYY-MM-DD` date is supplied.
pub fn prompt_date(theme: &ColorfulTheme, prompt: &str) -> Result<NaiveDate, CliError> {
    loop {
        let input = prompt_non_empty(theme, prompt)?;
        match NaiveDate::parse_from_str(&input, DATE_FORMAT) {
            Ok(date) => return Ok(date),
            Err(_) => output::warning("Invalid date format! Use YYYY-MM-DD"),
        }
    }
}

/// Prompts until a date strictly after today is supplied.
pub fn prompt_future_date(theme: &ColorfulTheme, prompt: &str) -> Result<NaiveDate, CliError> {
    loop {
        let date = prompt_date(theme, prompt)?;
        if date > Local::now().date_naive() {
            return Ok(date);
        }
        output::warning("Date must be in the future!");
    }
}

/// Prompts until a date strictly after `after` is supplied.
pub fn prompt_date_after(
    theme: &ColorfulTheme,
    prompt: &str,
    after: NaiveDate,
) -> Result<NaiveDate, CliError> {
    loop {
        let date = prompt_date(theme, prompt)?;
        if date > after {
            return Ok(date);
        }
        output::warning(format!("Date must be after {}", after));
    }
}

/// Prompts until a parseable 24-hour `HH:MM` time is supplied.
pub fn prompt_time(theme: &ColorfulTheme, prompt: &str) -> Result<NaiveTime, CliError> {
    loop {
        let input = prompt_non_empty(theme, prompt)?;
        match NaiveTime::parse_from_str(&input, TIME_FORMAT) {
            Ok(time) => return Ok(time),
            Err(_) => output::warning("Invalid time format! Use HH:mm"),
        }
    }
}
