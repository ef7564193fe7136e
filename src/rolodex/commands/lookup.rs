use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RolodexError, Result};
use crate::model::{parse_line, split_line};
use crate::store::LineStore;
use tracing::debug;

pub const NO_SUCH_CONTACT: &str = "ERROR : No such Contact found.!";
pub const NO_SUCH_NUMBER: &str = "No such Number found.!";

/// Lines containing `name` anywhere, so "Anne" also finds "Mary Anne David".
pub fn matching_name<'a>(
    lines: &'a [String],
    name: &'a str,
) -> impl Iterator<Item = &'a String> + 'a {
    lines.iter().filter(move |line| line.contains(name))
}

pub fn by_name<S: LineStore>(store: &S, name: &str) -> Result<CmdResult> {
    let lines = store.read_lines()?;

    let mut matched = Vec::new();
    for line in matching_name(&lines, name) {
        // Matches are rendered as columns later, so they must split cleanly
        split_line(line)?;
        matched.push(line.clone());
    }
    debug!(name, matches = matched.len(), "looked up by name");

    if matched.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::error(NO_SUCH_CONTACT)));
    }
    Ok(CmdResult::default().with_matched_lines(matched))
}

/// The single line whose number has the same digits as `digits`.
///
/// More than one such line is a corrupt list; the first one is reported and
/// nothing is returned.
pub fn by_number<S: LineStore>(store: &S, digits: &str) -> Result<CmdResult> {
    let lines = store.read_lines()?;

    let mut found: Option<String> = None;
    for line in lines {
        let (_, stored) = parse_line(&line)?;
        if stored != digits {
            continue;
        }
        if let Some(first) = found {
            return Err(RolodexError::DuplicateStoredNumber(first));
        }
        found = Some(line);
    }
    debug!(digits, found = found.is_some(), "looked up by number");

    match found {
        Some(line) => Ok(CmdResult::default().with_matched_lines(vec![line])),
        None => Ok(CmdResult::default().with_message(CmdMessage::warning(NO_SUCH_NUMBER))),
    }
}
