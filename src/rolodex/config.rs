use crate::error::{RolodexError, Result};
use crate::model::{NAME_WIDTH, NUMBER_WIDTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_FILE_MARKER: &str = ".txt";
const DEFAULT_IMPORT_KEYWORD: &str = "add_json";

/// Tunables for classification and lookup output, read from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RolodexConfig {
    /// Substring that marks the token ending the store path (e.g. ".txt")
    pub file_marker: String,

    /// Payload keyword that switches to bulk import
    pub import_keyword: String,

    /// Column width of the name in lookup output
    pub name_width: usize,

    /// Column width of the number in lookup output
    pub number_width: usize,
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            file_marker: DEFAULT_FILE_MARKER.to_string(),
            import_keyword: DEFAULT_IMPORT_KEYWORD.to_string(),
            name_width: NAME_WIDTH,
            number_width: NUMBER_WIDTH,
        }
    }
}

impl RolodexConfig {
    /// Load config from the given file. The file must exist; unset fields take defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(RolodexError::Io)?;
        let config: RolodexConfig =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        Ok(config)
    }
}
