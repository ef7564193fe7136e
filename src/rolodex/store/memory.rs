use super::LineStore;
use crate::error::{RolodexError, Result};
use std::path::{Path, PathBuf};

/// A contact list held in memory. `None` means the list has not been created.
pub struct InMemoryStore {
    location: PathBuf,
    lines: Option<Vec<String>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            location: PathBuf::from("memory.txt"),
            lines: None,
        }
    }

    /// A store that already exists and holds `lines` verbatim.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            location: PathBuf::from("memory.txt"),
            lines: Some(lines.into_iter().map(Into::into).collect()),
        }
    }

    pub fn lines(&self) -> &[String] {
        self.lines.as_deref().unwrap_or(&[])
    }
}

impl LineStore for InMemoryStore {
    fn location(&self) -> &Path {
        &self.location
    }

    fn exists(&self) -> bool {
        self.lines.is_some()
    }

    fn create(&mut self) -> Result<()> {
        self.lines.get_or_insert_with(Vec::new);
        Ok(())
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        match &self.lines {
            Some(lines) => Ok(lines
                .iter()
                .filter(|l| !l.trim().is_empty())
                .cloned()
                .collect()),
            None => Err(RolodexError::FileNotFound(self.location.clone())),
        }
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        self.lines = Some(lines.to_vec());
        Ok(())
    }
}
