use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Shelf;
use crate::store::DataStore;

use super::helpers::hydrate;

pub fn run<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut books = hydrate(store, Shelf::Library, &mut result);

    let removed = books.remove_by_name(name);
    if removed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No library book named \"{}\".",
            name
        )));
        return Ok(result);
    }

    store.save(Shelf::Library, &books)?;
    let copies = if removed.len() == 1 { "copy" } else { "copies" };
    result.add_message(CmdMessage::success(format!(
        "Removed {} {} of \"{}\" from the library.",
        removed.len(),
        copies,
        name
    )));
    Ok(result.with_affected_books(removed))
}
