//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where shelf data lives so the command
//! layer can run against different backends:
//!
//! - [`fs::FileStore`]: production file-based storage, one JSON file per
//!   shelf inside a data directory
//! - [`memory::InMemoryStore`]: in-memory storage for fast, isolated tests
//!
//! ## Shelf Pattern
//!
//! All operations take a [`Shelf`] parameter selecting the library,
//! outside, or overdue collection, so a single trait covers all three.
//!
//! ## Missing Data
//!
//! A shelf that has never been persisted is not an error: `load` returns
//! `Ok(None)` and the caller decides how to degrade (the command layer
//! substitutes an empty collection and emits a diagnostic). Hard failures
//! (unreadable file, undecodable contents) surface as `Err` so the driver
//! can choose to log, retry, or abort.
//!
//! ## Storage Format
//!
//! For `FileStore` the data directory holds the legacy file set:
//!
//! ```text
//! <data dir>/
//! ├── library_data.json          # in-library catalog
//! ├── outside_library_data.json  # checked-out loans
//! └── overdue_data.json          # past-due loans
//! ```
//!
//! Each file is a pretty-printed JSON array; see [`crate::codec`] for the
//! entry layout.

use crate::error::Result;
use crate::model::{Collection, Shelf};

pub mod fs;
pub mod memory;

/// Abstract interface for shelf storage.
pub trait DataStore {
    /// Load a shelf's records. `Ok(None)` means nothing has ever been
    /// persisted for that shelf.
    fn load(&self, shelf: Shelf) -> Result<Option<Collection>>;

    /// Persist a shelf's records as a whole-file overwrite.
    fn save(&mut self, shelf: Shelf, books: &Collection) -> Result<()>;
}
