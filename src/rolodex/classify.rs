//! # Argument Classification
//!
//! A single invocation is a flat list of tokens: the store path (which may
//! contain spaces, so it can span several tokens) followed by the payload.
//! The path ends at the first token containing the configured file marker.
//!
//! What the payload means depends on its shape:
//!
//! ```text
//! <path> add_json <import file>      -> Mode::Import
//! <path> 8087791466                  -> Mode::ByNumber
//! <path> mary anne 8087791466        -> Mode::Insert
//! <path> mary anne                   -> Mode::ByName
//! ```

use crate::config::RolodexConfig;
use crate::error::{RolodexError, Result};
use crate::validate::{validate_name, validate_number};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    ByName(String),
    ByNumber(String),
    Insert { name: String, number: String },
    Import(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub path: PathBuf,
    pub mode: Mode,
}

pub fn classify<S: AsRef<str>>(tokens: &[S], config: &RolodexConfig) -> Result<Invocation> {
    if tokens.is_empty() {
        return Err(RolodexError::InsufficientInputs(
            "You entered nothing.! Use the given input format".to_string(),
        ));
    }

    let marker_at = tokens
        .iter()
        .position(|t| t.as_ref().contains(config.file_marker.as_str()))
        .ok_or_else(|| {
            RolodexError::InvalidFileName(
                "The Entered file name is not a name of a textfile".to_string(),
            )
        })?;

    let path = PathBuf::from(join(&tokens[..=marker_at]));
    let payload = &tokens[marker_at + 1..];

    let (first, last) = match (payload.first(), payload.last()) {
        (Some(first), Some(last)) => (first.as_ref(), last.as_ref()),
        _ => {
            return Err(RolodexError::InsufficientInputs(
                "Inputs are not sufficient.!".to_string(),
            ))
        }
    };

    let mode = if first == config.import_keyword {
        if payload.len() < 2 {
            return Err(RolodexError::InsufficientInputs(
                "Invalid Input Format. Expected <path> add_json <import file>".to_string(),
            ));
        }
        Mode::Import(PathBuf::from(join(&payload[1..])))
    } else if !last.is_empty() && last.chars().all(|c| c.is_ascii_digit()) {
        validate_number(last)?;
        if payload.len() == 1 {
            Mode::ByNumber(last.to_string())
        } else {
            let name = capitalize_name(&join(&payload[..payload.len() - 1]));
            validate_name(&name)?;
            Mode::Insert {
                name,
                number: last.to_string(),
            }
        }
    } else {
        let name = capitalize_name(&join(payload));
        validate_name(&name)?;
        Mode::ByName(name)
    };

    debug!(path = %path.display(), ?mode, "classified invocation");
    Ok(Invocation { path, mode })
}

/// Lowercases the name, then upper-cases the first letter of every word.
pub fn capitalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_word = false;
    for c in name.to_lowercase().chars() {
        if !in_word && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            in_word = true;
        } else {
            if c.is_whitespace() {
                in_word = false;
            }
            out.push(c);
        }
    }
    out
}

fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tokens: &[&str]) -> Result<Invocation> {
        classify(tokens, &RolodexConfig::default())
    }

    #[test]
    fn name_lookup_is_capitalized() {
        let inv = run(&["contacts.txt", "mary", "ANNE"]).unwrap();
        assert_eq!(inv.path, PathBuf::from("contacts.txt"));
        assert_eq!(inv.mode, Mode::ByName("Mary Anne".to_string()));
    }

    #[test]
    fn single_number_is_number_lookup() {
        let inv = run(&["contacts.txt", "8087791466"]).unwrap();
        assert_eq!(inv.mode, Mode::ByNumber("8087791466".to_string()));
    }

    #[test]
    fn name_then_number_is_insert() {
        let inv = run(&["contacts.txt", "mary", "anne", "david", "8437986698"]).unwrap();
        assert_eq!(
            inv.mode,
            Mode::Insert {
                name: "Mary Anne David".to_string(),
                number: "8437986698".to_string(),
            }
        );
    }

    #[test]
    fn path_may_span_tokens() {
        let inv = run(&["/home/me/My", "Documents/list.txt", "Jo"]).unwrap();
        assert_eq!(inv.path, PathBuf::from("/home/me/My Documents/list.txt"));
        assert_eq!(inv.mode, Mode::ByName("Jo".to_string()));
    }

    #[test]
    fn import_keyword_takes_rest_as_path() {
        let inv = run(&["contacts.txt", "add_json", "my", "import.json"]).unwrap();
        assert_eq!(inv.mode, Mode::Import(PathBuf::from("my import.json")));
    }

    #[test]
    fn import_without_source_is_insufficient() {
        assert!(matches!(
            run(&["contacts.txt", "add_json"]),
            Err(RolodexError::InsufficientInputs(_))
        ));
    }

    #[test]
    fn missing_marker_is_invalid_file_name() {
        assert!(matches!(
            run(&["contacts.csv", "Jo"]),
            Err(RolodexError::InvalidFileName(_))
        ));
    }

    #[test]
    fn path_alone_is_insufficient() {
        assert!(matches!(
            run(&["contacts.txt"]),
            Err(RolodexError::InsufficientInputs(_))
        ));
        assert!(matches!(
            run(&[]),
            Err(RolodexError::InsufficientInputs(_))
        ));
    }

    #[test]
    fn short_number_is_rejected() {
        assert!(matches!(
            run(&["contacts.txt", "Jo", "12345"]),
            Err(RolodexError::InvalidNumber(_))
        ));
    }

    #[test]
    fn mixed_last_token_falls_back_to_name() {
        assert!(matches!(
            run(&["contacts.txt", "Jo", "12ab"]),
            Err(RolodexError::InvalidName(_))
        ));
    }

    #[test]
    fn insert_name_is_validated() {
        assert!(matches!(
            run(&["contacts.txt", "o'brien", "1234567890"]),
            Err(RolodexError::InvalidName(_))
        ));
    }

    #[test]
    fn custom_marker_and_keyword() {
        let config = RolodexConfig {
            file_marker: ".book".to_string(),
            import_keyword: "load".to_string(),
            ..RolodexConfig::default()
        };
        let inv = classify(&["people.book", "load", "a.json"], &config).unwrap();
        assert_eq!(inv.mode, Mode::Import(PathBuf::from("a.json")));
    }

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(capitalize_name("mARY  aNNE doe"), "Mary  Anne Doe");
        assert_eq!(capitalize_name(""), "");
    }
}
