use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Shelf;
use crate::overdue;
use crate::store::DataStore;

use super::helpers::hydrate;

/// Run the overdue sweep for the given date and persist both shelves.
/// When nothing is past due the shelves are not rewritten.
pub fn run<S: DataStore>(store: &mut S, today: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut outside = hydrate(store, Shelf::Outside, &mut result);
    let mut past_due = hydrate(store, Shelf::Overdue, &mut result);

    let moved = overdue::sweep(&mut outside, &mut past_due, today);
    if moved.is_empty() {
        result.add_message(CmdMessage::info("No books are past due."));
        return Ok(result);
    }

    store.save(Shelf::Outside, &outside)?;
    store.save(Shelf::Overdue, &past_due)?;

    let plural = if moved.len() == 1 { "book" } else { "books" };
    result.add_message(CmdMessage::success(format!(
        "Moved {} overdue {} to the overdue shelf.",
        moved.len(),
        plural
    )));
    Ok(result.with_affected_books(moved))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn moves_past_due_loans_and_persists_both_shelves() {
        let mut fixture = StoreFixture::new()
            .with_loan("Dune", "Alice", "2023-01-01")
            .with_loan("Emma", "Bob", "2031-01-01");

        let result = run(&mut fixture.store, "2025-06-01").unwrap();

        assert_eq!(result.affected_books.len(), 1);
        assert_eq!(result.affected_books[0].name, "Dune");

        let outside = fixture.store.load(Shelf::Outside).unwrap().unwrap();
        let overdue = fixture.store.load(Shelf::Overdue).unwrap().unwrap();
        assert_eq!(outside.len(), 1);
        assert_eq!(outside.books()[0].name, "Emma");
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue.books()[0].name, "Dune");
    }

    #[test]
    fn appends_to_existing_overdue_records() {
        let mut fixture = StoreFixture::new()
            .with_overdue("Old", "Carol", "2020-01-01")
            .with_loan("Dune", "Alice", "2023-01-01");

        run(&mut fixture.store, "2025-06-01").unwrap();

        let overdue = fixture.store.load(Shelf::Overdue).unwrap().unwrap();
        let names: Vec<&str> = overdue.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Old", "Dune"]);
    }

    #[test]
    fn nothing_due_is_a_quiet_noop() {
        let mut fixture = StoreFixture::new().with_loan("Emma", "Bob", "2031-01-01");

        let result = run(&mut fixture.store, "2025-06-01").unwrap();

        assert!(result.affected_books.is_empty());
        let outside = fixture.store.load(Shelf::Outside).unwrap().unwrap();
        assert_eq!(outside.len(), 1);
        // Nothing moved, so the overdue shelf was never created.
        assert!(fixture.store.load(Shelf::Overdue).unwrap().is_none());
    }

    #[test]
    fn second_run_with_same_date_moves_nothing() {
        let mut fixture = StoreFixture::new().with_loan("Dune", "Alice", "2023-01-01");

        run(&mut fixture.store, "2025-06-01").unwrap();
        let result = run(&mut fixture.store, "2025-06-01").unwrap();

        assert!(result.affected_books.is_empty());
        let overdue = fixture.store.load(Shelf::Overdue).unwrap().unwrap();
        assert_eq!(overdue.len(), 1);
    }
}
