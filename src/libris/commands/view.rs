use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Shelf;
use crate::store::DataStore;

use super::helpers::hydrate;

pub fn run<S: DataStore>(store: &S, shelf: Shelf) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let books = hydrate(store, shelf, &mut result);
    Ok(result.with_listed_books(books.into_books()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_a_shelf_in_insertion_order() {
        let fixture = StoreFixture::new()
            .with_shelved_book("B", "SF", "X")
            .with_shelved_book("A", "SF", "Y");

        let result = run(&fixture.store, Shelf::Library).unwrap();

        let names: Vec<&str> = result.listed_books.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn unsaved_shelf_lists_empty_with_a_diagnostic() {
        let fixture = StoreFixture::new();

        let result = run(&fixture.store, Shelf::Overdue).unwrap();

        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
