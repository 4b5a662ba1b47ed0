//! # Libris Architecture
//!
//! Libris is a **UI-agnostic ledger library** for tracking library books
//! across three shelves, with a CLI client on top. The layering mirrors
//! that split and should guide all development:
//!
//! 1. **CLI layer** (`main.rs`, `args.rs`, not part of the lib API):
//!    parses arguments, runs the interactive menu, formats terminal output.
//!    The ONLY place that knows about stdout/stderr, exit codes, and the
//!    wall clock.
//! 2. **API layer** ([`api`]): a thin facade over commands. Dispatches and
//!    returns structured `Result` types, nothing more.
//! 3. **Command layer** ([`commands`]): business logic per operation.
//!    Operates on Rust types, returns [`commands::CmdResult`] with leveled
//!    messages instead of printing. No I/O assumptions beyond the store
//!    handle it is given.
//! 4. **Core model** ([`model`], [`overdue`], [`codec`]): the book record,
//!    the three-shelf collection type, the date-driven overdue sweep, and
//!    the legacy JSON format. The sweep is a pure function; the caller
//!    supplies "today", so nothing in the core reads the clock.
//! 5. **Storage layer** ([`store`]): the `DataStore` trait with a
//!    file-backed production store and an in-memory test store.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal. Failure paths
//! degrade instead of aborting: a missing or unreadable shelf hydrates as
//! an empty collection plus a diagnostic message the driver may render.
//!
//! ## Testing Strategy
//!
//! - **Core and commands**: unit tests in each module against
//!   `InMemoryStore`. This is where the lion's share of testing lives.
//! - **Storage**: `FileStore` tests over temp directories.
//! - **CLI**: integration tests in `tests/` drive the real binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`model`]: Core data types (`Book`, `Collection`, `Shelf`)
//! - [`overdue`]: The date-driven sweep moving loans to the overdue shelf
//! - [`codec`]: The legacy per-shelf JSON format
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod overdue;
pub mod store;
