//! # Storage Layer
//!
//! A contact list is nothing more than an ordered list of text lines. The
//! [`LineStore`] trait captures exactly that, so the lookup and insert logic
//! in `commands/` never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the production backend, one UTF-8 text file
//!   - Parent directories and the file are created on demand
//!   - Rewrites go to a temporary sibling file that is then renamed over the
//!     original, so the list is never observed half-written
//!
//! - [`memory::InMemoryStore`]: a `Vec<String>` for tests
//!
//! ## Storage Format
//!
//! ```text
//! Mary Anne: 808-779-1466
//! Mary Anne David: 843-798-6698
//! Mary Anne Doe: 801-557-2819
//! ```
//!
//! Lines are kept in ascending byte order of the whole line. Blank lines are
//! skipped when reading.

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Line-oriented persistence for a single contact list.
pub trait LineStore {
    /// Where the list lives (used in messages and errors)
    fn location(&self) -> &Path;

    /// Whether the backing list exists yet
    fn exists(&self) -> bool;

    /// Create an empty list, including any missing parent directories
    fn create(&mut self) -> Result<()>;

    /// All non-blank lines, in stored order
    fn read_lines(&self) -> Result<Vec<String>>;

    /// Replace the whole list with `lines`
    fn write_lines(&mut self, lines: &[String]) -> Result<()>;
}
