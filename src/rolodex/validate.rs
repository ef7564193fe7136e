use crate::error::{RolodexError, Result};
use crate::model::NUMBER_LEN;

/// Names may only hold ASCII letters and spaces.
pub fn validate_name(name: &str) -> Result<()> {
    if name.chars().any(|c| !(c.is_ascii_alphabetic() || c == ' ')) {
        return Err(RolodexError::InvalidName(
            "Entered Name Contains numbers/symbols.Double check the name.!".to_string(),
        ));
    }
    Ok(())
}

/// Numbers are exactly ten ASCII digits, no formatting.
pub fn validate_number(number: &str) -> Result<()> {
    if number.chars().count() != NUMBER_LEN {
        return Err(RolodexError::InvalidNumber(
            "Entered number should be 10 digits.Double check your number.!".to_string(),
        ));
    }
    if !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(RolodexError::InvalidNumber(
            "Entered number Contains letters/symbols.Double check the number.!".to_string(),
        ));
    }
    Ok(())
}
