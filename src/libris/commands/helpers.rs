use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Collection, Shelf};
use crate::store::DataStore;

/// Load a shelf, degrading to an empty collection when the store holds no
/// data or the persisted file cannot be read or decoded. The diagnostic
/// lands in `result` for the driver to render; hydration itself never
/// fails.
pub fn hydrate<S: DataStore>(store: &S, shelf: Shelf, result: &mut CmdResult) -> Collection {
    match store.load(shelf) {
        Ok(Some(books)) => books,
        Ok(None) => {
            result.add_message(CmdMessage::info(format!(
                "No saved data for the {} shelf yet; starting empty.",
                shelf.label()
            )));
            Collection::new()
        }
        Err(e) => {
            result.add_message(CmdMessage::warning(format!(
                "Could not read the {} shelf ({}); continuing with an empty shelf.",
                shelf.label(),
                e
            )));
            Collection::new()
        }
    }
}
