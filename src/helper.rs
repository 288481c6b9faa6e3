use chrono::{Local, NaiveDate};
use log::trace;

use crate::{Result, WorkLogError};

/// Parses a user-typed date in the configured format
pub fn parse_date(input: &str, date_format: &str) -> Result<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, date_format).map_err(|e| {
        trace!("Rejected date '{}': {}", input, e);
        WorkLogError::invalid_input(format!(
            "'{}' is not a valid date. Please use the form {}.",
            input,
            date_example(date_format)
        ))
    })
}

/// Today's date rendered in `date_format`, used as an example in prompts
pub fn date_example(date_format: &str) -> String {
    Local::now().date_naive().format(date_format).to_string()
}

/// Parses a non-negative whole number of minutes
pub fn parse_minutes(input: &str) -> Result<u32> {
    let input = input.trim();
    input.parse::<u32>().map_err(|_| {
        WorkLogError::invalid_input(format!(
            "'{}' is not a valid number of minutes. Please enter a whole number, e.g. 45.",
            input
        ))
    })
}

/// Rejects empty answers for required fields
pub fn require_text(input: &str, field: &str) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(WorkLogError::invalid_input(format!("{} cannot be empty.", field)));
    }
    Ok(input.to_string())
}

/// Builds a `LIKE` pattern that matches `text` literally anywhere in a column.
/// Pair with `ESCAPE '\'` in the query.
pub fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
