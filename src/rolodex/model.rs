//! Contact records and their single-line text form.
//!
//! A stored record is one line of the form `Name: ddd-ddd-dddd`. Everything
//! before the first `:` is the name; the number is whatever follows the
//! separating space, and only its digits matter when numbers are compared.

use crate::error::{RolodexError, Result};

pub const NUMBER_LEN: usize = 10;
pub const NAME_WIDTH: usize = 30;
pub const NUMBER_WIDTH: usize = 20;

/// Splits a stored line into its name and the raw number text.
pub fn split_line(line: &str) -> Result<(&str, &str)> {
    let (name, rest) = line
        .split_once(':')
        .ok_or_else(|| RolodexError::MalformedRecord(line.to_string()))?;
    Ok((name, rest.strip_prefix(' ').unwrap_or(rest)))
}

/// Parses a stored line into `(name, digits)`.
pub fn parse_line(line: &str) -> Result<(String, String)> {
    let (name, number) = split_line(line)?;
    Ok((name.to_string(), digits_of(number)))
}

/// Digits of a number, any formatting stripped.
pub fn digits_of(number: &str) -> String {
    number.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats a record as `name: ddd-ddd-dddd`.
pub fn format_line(name: &str, digits: &str) -> Result<String> {
    if digits.len() != NUMBER_LEN || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(RolodexError::InvalidNumber(format!(
            "Cannot format '{}': expected {} digits",
            digits, NUMBER_LEN
        )));
    }
    Ok(format!(
        "{}: {}-{}-{}",
        name,
        &digits[0..3],
        &digits[3..6],
        &digits[6..]
    ))
}

/// Console form of a record: name and number left-justified to fixed columns.
pub fn render(name: &str, number: &str, name_width: usize, number_width: usize) -> String {
    format!(
        "{:<nw$}{:<mw$}",
        name,
        number,
        nw = name_width,
        mw = number_width
    )
}
