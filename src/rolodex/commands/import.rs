use crate::commands::{insert, CmdMessage, CmdResult, ImportFailure};
use crate::error::{RolodexError, Result};
use crate::model::digits_of;
use crate::store::LineStore;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ImportRecord {
    name: String,
    number: String,
}

/// Inserts every `{name, number}` object of a JSON array.
///
/// A source that cannot be read or parsed fails the whole import before
/// anything is written. After that, each record stands alone: a rejected
/// record is reported and the rest still go in.
pub fn run<S: LineStore>(store: &mut S, source: &Path) -> Result<CmdResult> {
    let records = read_records(source)?;
    let total = records.len();
    debug!(source = %source.display(), total, "importing contacts");

    let mut result = CmdResult::default();
    for record in records {
        let digits = digits_of(&record.number);
        match insert::run(store, &record.name, &digits) {
            Ok(inserted) => {
                result.imported += 1;
                result.messages.extend(inserted.messages);
            }
            Err(e) => {
                debug!(name = %record.name, error = %e, "skipping contact");
                result.add_message(CmdMessage::error(format!("{}: {}", record.name, e)));
                result.import_failures.push(ImportFailure {
                    name: record.name,
                    number: record.number,
                    reason: e.to_string(),
                });
            }
        }
    }

    result.add_message(CmdMessage::success(format!(
        "Imported {} of {} contacts",
        result.imported, total
    )));
    Ok(result)
}

fn read_records(source: &Path) -> Result<Vec<ImportRecord>> {
    let invalid = |detail: String| {
        RolodexError::ImportFormatError(format!(
            "Input Invalid. Please input a JSON file of [{{\"name\", \"number\"}}] records ({})",
            detail
        ))
    };
    let content = fs::read_to_string(source)
        .map_err(|e| invalid(format!("{}: {}", source.display(), e)))?;
    serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn source(dir: &TempDir, json: &str) -> std::path::PathBuf {
        let path = dir.path().join("import.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn duplicate_record_is_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = source(
            &dir,
            r#"[{"name":"Jo","number":"1112223333"},{"name":"Jo","number":"1112223333"}]"#,
        );
        let mut store = InMemoryStore::new();

        let result = run(&mut store, &path).unwrap();
        assert_eq!(store.lines(), ["Jo: 111-222-3333"]);
        assert_eq!(result.imported, 1);
        assert_eq!(result.import_failures.len(), 1);
        assert!(result.import_failures[0]
            .reason
            .contains("Already Available"));
    }

    #[test]
    fn formatted_numbers_are_normalized() {
        let dir = TempDir::new().unwrap();
        let path = source(
            &dir,
            r#"[{"name":"Mary Anne","number":"(808) 779-1466"},{"name":"Abe","number":"111.111.1111"}]"#,
        );
        let mut store = InMemoryStore::new();

        let result = run(&mut store, &path).unwrap();
        assert_eq!(result.imported, 2);
        assert_eq!(
            store.lines(),
            ["Abe: 111-111-1111", "Mary Anne: 808-779-1466"]
        );
    }

    #[test]
    fn bad_records_do_not_stop_the_batch() {
        let dir = TempDir::new().unwrap();
        let path = source(
            &dir,
            r#"[
                {"name":"O'Brien","number":"1112223333"},
                {"name":"Short","number":"123"},
                {"name":"Good","number":"4445556666"}
            ]"#,
        );
        let mut store = InMemoryStore::new();

        let result = run(&mut store, &path).unwrap();
        assert_eq!(result.imported, 1);
        assert_eq!(result.import_failures.len(), 2);
        assert_eq!(store.lines(), ["Good: 444-555-6666"]);
        assert_eq!(
            result.messages.last().unwrap().content,
            "Imported 1 of 3 contacts"
        );
    }

    #[test]
    fn malformed_source_fails_whole_import() {
        let dir = TempDir::new().unwrap();
        let path = source(&dir, r#"{"name":"Jo","number":"1112223333"}"#);
        let mut store = InMemoryStore::new();

        assert!(matches!(
            run(&mut store, &path),
            Err(RolodexError::ImportFormatError(_))
        ));
        assert!(!store.exists());
    }

    #[test]
    fn missing_source_is_a_format_error() {
        let dir = TempDir::new().unwrap();
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, &dir.path().join("nope.json")),
            Err(RolodexError::ImportFormatError(_))
        ));
    }
}
