//! # Bandz Architecture
//!
//! Bandz is an interactive shell over a persistent, always-sorted collection of
//! music bands. The shell reads commands line by line from stdin or from script
//! files, and every command operates on one in-memory collection that is saved
//! to a JSON file on request.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs)                                  │
//! │  - Parses arguments, sets up logging and config             │
//! │  - The ONLY place that knows about exit codes               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (shell/, render.rs)                                  │
//! │  - Registry, dispatch loop, history, script stack           │
//! │  - Renders command results to the reader's output           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - One struct per verb, returns a structured CmdResult      │
//! │  - Reads records through the validating LineReader          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data (model.rs, collection.rs, database.rs, store/)        │
//! │  - Validated records, sorted collection, id assignment      │
//! │  - CollectionStore trait: JsonFileStore, MemoryStore        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Process Control in the Library
//!
//! Nothing below `main.rs` calls `std::process::exit` or prints to stdout
//! directly. `exit` is a flag on the command result that unwinds every
//! nested loop; output goes through the `Write` sink of the active
//! [`reader::LineReader`].
//!
//! ## Testing Strategy
//!
//! Command tests drive a full shell over a [`store::memory::MemoryStore`] with
//! the helpers in `test_utils` and assert on the collection and the printed
//! text. Storage tests use real files in temporary directories. Binary tests
//! in `tests/` run the compiled `bandz` with piped stdin.
//!
//! ## Module Overview
//!
//! - [`model`]: `Band` and its value objects, validation, ordering
//! - [`collection`]: `BandCollection`, id counter, queries
//! - [`reader`]: validating line reader (interactive and script modes)
//! - [`shell`]: `Command` trait, `Registry`, history, script stack
//! - [`commands`]: the collection commands
//! - [`render`]: terminal output of command results
//! - [`database`]: collection plus store facade
//! - [`store`]: persistence backends
//! - [`config`]: user settings
//! - [`error`]: error types

pub mod collection;
pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod model;
pub mod reader;
pub mod render;
pub mod shell;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
