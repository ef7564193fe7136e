//! Business logic for each operation. Commands take a [`LineStore`] and plain
//! Rust arguments and return a [`CmdResult`]; they never print.
//!
//! [`LineStore`]: crate::store::LineStore

pub mod import;
pub mod insert;
pub mod lookup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A record the bulk importer could not store.
#[derive(Debug, Clone)]
pub struct ImportFailure {
    pub name: String,
    pub number: String,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Stored lines selected by a lookup, in file order
    pub matched_lines: Vec<String>,
    pub imported: usize,
    pub import_failures: Vec<ImportFailure>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_matched_lines(mut self, lines: Vec<String>) -> Self {
        self.matched_lines = lines;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
