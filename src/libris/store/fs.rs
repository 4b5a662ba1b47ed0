use super::DataStore;
use crate::codec;
use crate::error::{LibrisError, Result};
use crate::model::{Collection, Shelf};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed storage: one JSON file per shelf inside `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn shelf_path(&self, shelf: Shelf) -> PathBuf {
        self.root.join(shelf_filename(shelf))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(LibrisError::Io)?;
        }
        Ok(())
    }
}

/// Legacy file names; existing installations already have these on disk,
/// so they are part of the external contract.
fn shelf_filename(shelf: Shelf) -> &'static str {
    match shelf {
        Shelf::Library => "library_data.json",
        Shelf::Outside => "outside_library_data.json",
        Shelf::Overdue => "overdue_data.json",
    }
}

impl DataStore for FileStore {
    fn load(&self, shelf: Shelf) -> Result<Option<Collection>> {
        let path = self.shelf_path(shelf);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(LibrisError::Io(e)),
        };
        Ok(Some(codec::decode(shelf, &text)?))
    }

    fn save(&mut self, shelf: Shelf, books: &Collection) -> Result<()> {
        self.ensure_dir()?;
        let text = codec::encode(shelf, books)?;
        fs::write(self.shelf_path(shelf), text).map_err(LibrisError::Io)?;
        Ok(())
    }
}
