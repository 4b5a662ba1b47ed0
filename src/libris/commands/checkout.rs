use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, Shelf};
use crate::store::DataStore;

use super::helpers::hydrate;

pub fn run<S: DataStore>(
    store: &mut S,
    name: String,
    genre: String,
    borrower: String,
    due_date: String,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut books = hydrate(store, Shelf::Outside, &mut result);

    let book = Book::loaned(name, genre, borrower, due_date);
    books.add(book.clone());
    store.save(Shelf::Outside, &books)?;

    let message = match &book.borrower {
        Some(borrower) => format!(
            "Checked out \"{}\" to {}, due {}.",
            book.name, borrower, book.due_date
        ),
        None => format!("Checked out \"{}\", due {}.", book.name, book.due_date),
    };
    result.add_message(CmdMessage::success(message));
    Ok(result.with_affected_books(vec![book]))
}
