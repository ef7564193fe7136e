//! # API Facade
//!
//! A thin layer over `commands/`: it owns the store handle and maps a
//! classified [`Mode`] onto the command that serves it. Like the commands, it
//! returns structured results and never prints.

use crate::classify::Mode;
use crate::commands;
use crate::error::Result;
use crate::store::LineStore;
use std::path::Path;

/// Entry point for every contact list operation, generic over the backend.
pub struct RolodexApi<S: LineStore> {
    store: S,
}

impl<S: LineStore> RolodexApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn find_by_name(&self, name: &str) -> Result<commands::CmdResult> {
        commands::lookup::by_name(&self.store, name)
    }

    pub fn find_by_number(&self, digits: &str) -> Result<commands::CmdResult> {
        commands::lookup::by_number(&self.store, digits)
    }

    pub fn insert(&mut self, name: &str, digits: &str) -> Result<commands::CmdResult> {
        commands::insert::run(&mut self.store, name, digits)
    }

    pub fn import_from(&mut self, source: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, source)
    }

    pub fn dispatch(&mut self, mode: &Mode) -> Result<commands::CmdResult> {
        match mode {
            Mode::ByName(name) => self.find_by_name(name),
            Mode::ByNumber(digits) => self.find_by_number(digits),
            Mode::Insert { name, number } => self.insert(name, number),
            Mode::Import(source) => self.import_from(source),
        }
    }
}

pub use commands::{CmdMessage, CmdResult, ImportFailure, MessageLevel};
