use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RolodexError, Result};
use crate::model::{format_line, parse_line};
use crate::store::LineStore;
use crate::validate::{validate_name, validate_number};
use tracing::debug;

pub const CREATED: &str = "File doesn't exist. Created new file";
pub const ADDED: &str = "Successfully added the contact details to the Contact List.!";

/// Adds a contact, keeping the list sorted and free of repeated numbers.
///
/// The whole list is read, the new line appended, everything sorted and the
/// list rewritten. A number already on file (in any formatting) is rejected
/// and the list is left as it was.
pub fn run<S: LineStore>(store: &mut S, name: &str, digits: &str) -> Result<CmdResult> {
    validate_name(name)?;
    validate_number(digits)?;
    let new_line = format_line(name, digits)?;

    let mut result = CmdResult::default();
    if !store.exists() {
        store.create()?;
        result.add_message(CmdMessage::info(CREATED));
    }

    let mut lines = store.read_lines()?;
    for line in &lines {
        let (_, stored) = parse_line(line)?;
        if stored == digits {
            return Err(RolodexError::DuplicateInputNumber(line.clone()));
        }
    }

    lines.push(new_line);
    lines.sort();
    store.write_lines(&lines)?;
    debug!(name, total = lines.len(), "inserted contact");

    result.add_message(CmdMessage::success(ADDED));
    Ok(result)
}
