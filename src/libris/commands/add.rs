use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, Shelf};
use crate::store::DataStore;

use super::helpers::hydrate;

pub fn run<S: DataStore>(
    store: &mut S,
    name: String,
    genre: String,
    author: String,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut books = hydrate(store, Shelf::Library, &mut result);

    let book = Book::shelved(name, genre, author);
    books.add(book.clone());
    store.save(Shelf::Library, &books)?;

    result.add_message(CmdMessage::success(format!(
        "Added \"{}\" to the library.",
        book.name
    )));
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_a_book_to_the_library_shelf() {
        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            "Dune".into(),
            "Science Fiction".into(),
            "Frank Herbert".into(),
        )
        .unwrap();

        assert_eq!(result.affected_books.len(), 1);
        let books = store.load(Shelf::Library).unwrap().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books.books()[0].name, "Dune");
        assert_eq!(books.books()[0].author.as_deref(), Some("Frank Herbert"));
    }

    #[test]
    fn duplicate_names_are_allowed() {
        let mut store = InMemoryStore::new();
        run(&mut store, "Dup".into(), "SF".into(), "A".into()).unwrap();
        run(&mut store, "Dup".into(), "SF".into(), "B".into()).unwrap();

        let books = store.load(Shelf::Library).unwrap().unwrap();
        assert_eq!(books.len(), 2);
    }
}
