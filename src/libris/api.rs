//! # API Facade
//!
//! The single entry point for all ledger operations, regardless of the UI
//! driving them. The facade only dispatches to the command layer and
//! returns structured `Result<CmdResult>` values; business logic lives in
//! `commands/*.rs` and presentation stays with the caller.
//!
//! `LibrisApi<S: DataStore>` is generic over the storage backend:
//! production uses `LibrisApi<FileStore>`, tests use
//! `LibrisApi<InMemoryStore>`.

use crate::commands;
use crate::error::Result;
use crate::model::Shelf;
use crate::store::DataStore;

pub struct LibrisApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> LibrisApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Add a book to the library shelf.
    pub fn add_book(
        &mut self,
        name: String,
        genre: String,
        author: String,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, genre, author)
    }

    /// Remove every library book whose name exactly matches `name`.
    pub fn remove_books(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, name)
    }

    /// Record a book as checked out to a borrower.
    pub fn check_out(
        &mut self,
        name: String,
        genre: String,
        borrower: String,
        due_date: String,
    ) -> Result<commands::CmdResult> {
        commands::checkout::run(&mut self.store, name, genre, borrower, due_date)
    }

    /// Move loans past due relative to `today` onto the overdue shelf.
    pub fn sweep_overdue(&mut self, today: &str) -> Result<commands::CmdResult> {
        commands::sweep::run(&mut self.store, today)
    }

    /// List the records on one shelf.
    pub fn view(&self, shelf: Shelf) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, shelf)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
