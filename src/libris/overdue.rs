//! Date-driven movement of loans to the overdue shelf.
//!
//! The sweep is a pure function over two collections and a date string.
//! It performs no I/O and never looks at the wall clock; the caller supplies
//! `today` (the CLI derives it from the local date). Running the sweep twice
//! with the same date is a no-op the second time.

use crate::model::{Book, Collection};

/// Move every outside record whose due date is strictly before `today` to
/// the end of the overdue collection.
///
/// Each record is visited exactly once and either kept or moved; relative
/// order is preserved on both sides. Returns the moved records so callers
/// can report them.
pub fn sweep(outside: &mut Collection, overdue: &mut Collection, today: &str) -> Vec<Book> {
    let (moved, kept): (Vec<Book>, Vec<Book>) = std::mem::take(outside)
        .into_books()
        .into_iter()
        .partition(|book| book.is_past_due(today));

    *outside = Collection::from_books(kept);
    for book in &moved {
        overdue.add(book.clone());
    }
    moved
}
