use super::DataStore;
use crate::error::Result;
use crate::model::{Collection, Shelf};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    shelves: HashMap<Shelf, Collection>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self, shelf: Shelf) -> Result<Option<Collection>> {
        Ok(self.shelves.get(&shelf).cloned())
    }

    fn save(&mut self, shelf: Shelf, books: &Collection) -> Result<()> {
        self.shelves.insert(shelf, books.clone());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Book;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_shelved_book(mut self, name: &str, genre: &str, author: &str) -> Self {
            let mut books = self
                .store
                .load(Shelf::Library)
                .unwrap()
                .unwrap_or_default();
            books.add(Book::shelved(name, genre, author));
            self.store.save(Shelf::Library, &books).unwrap();
            self
        }

        pub fn with_loan(mut self, name: &str, borrower: &str, due_date: &str) -> Self {
            let mut books = self
                .store
                .load(Shelf::Outside)
                .unwrap()
                .unwrap_or_default();
            books.add(Book::loaned(name, "Fiction", borrower, due_date));
            self.store.save(Shelf::Outside, &books).unwrap();
            self
        }

        pub fn with_overdue(mut self, name: &str, borrower: &str, due_date: &str) -> Self {
            let mut books = self
                .store
                .load(Shelf::Overdue)
                .unwrap()
                .unwrap_or_default();
            books.add(Book::loaned(name, "Fiction", borrower, due_date));
            self.store.save(Shelf::Overdue, &books).unwrap();
            self
        }
    }
}
