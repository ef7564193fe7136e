//! # Rolodex Architecture
//!
//! Rolodex keeps a phone contact list in a plain text file, one
//! `Name: ddd-ddd-dddd` record per line, sorted. Each invocation does one
//! thing: look a contact up by name, look one up by number, add one, or import
//! a batch from JSON.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Parses flags, prints results, owns stdout/stderr         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  tokens
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Classifier (classify.rs)                                   │
//! │  - Splits tokens into store path + Mode                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Invocation
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) → Commands (commands/*.rs)                    │
//! │  - Lookup, insert, import; return CmdResult, never print    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - LineStore trait: FileStore (production), InMemoryStore   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: Facade that dispatches a classified [`classify::Mode`]
//! - [`classify`]: CLI token classification and name capitalization
//! - [`commands`]: Lookup, insert and bulk import logic
//! - [`config`]: File marker, import keyword and column widths
//! - [`error`]: Error types
//! - [`model`]: Record line codec
//! - [`store`]: Line storage abstraction and implementations
//! - [`validate`]: Name and number validation

pub mod api;
pub mod classify;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;
