//! Per-shelf JSON codec for the legacy shelf files.
//!
//! The on-disk format is an array of flat objects with the legacy key set:
//! `name`, `genre`, `author`, `dueDate`. Two quirks of that format are
//! deliberate and load-bearing:
//!
//! - The library file has no `author` key at all. A shelved book's author
//!   does not survive a save/load round trip. Existing files are written
//!   that way, so the codec reproduces it rather than fixing it.
//! - In the outside/overdue files the `author` key holds the borrower's
//!   name, not the book author. The codec maps it onto [`Book::borrower`].
//!
//! Decoding is lenient: an absent or wrong-typed field becomes the empty
//! string, and a literal `null` document (what older writers produced for
//! an empty collection) decodes as an empty collection. Output is pretty
//! JSON with 4-space indentation to stay byte-compatible with the existing
//! file corpus; compact input is accepted too.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::model::{role, Book, Collection, Shelf};

/// Entry layout of the library file.
#[derive(Debug, Serialize, Deserialize)]
struct ShelfEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    genre: String,
    #[serde(rename = "dueDate", default, deserialize_with = "lenient_string")]
    due_date: String,
}

/// Entry layout of the outside and overdue files. `author` carries the
/// borrower role.
#[derive(Debug, Serialize, Deserialize)]
struct LoanEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    genre: String,
    #[serde(default, deserialize_with = "lenient_string")]
    author: String,
    #[serde(rename = "dueDate", default, deserialize_with = "lenient_string")]
    due_date: String,
}

/// Accept any JSON value for a string field; non-strings decode as empty.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// Serialize a collection to the JSON text of the given shelf's file.
pub fn encode(shelf: Shelf, books: &Collection) -> Result<String> {
    match shelf {
        Shelf::Library => {
            let entries: Vec<ShelfEntry> = books
                .iter()
                .map(|book| ShelfEntry {
                    name: book.name.clone(),
                    genre: book.genre.clone(),
                    due_date: book.due_date.clone(),
                })
                .collect();
            to_pretty(&entries)
        }
        Shelf::Outside | Shelf::Overdue => {
            let entries: Vec<LoanEntry> = books
                .iter()
                .map(|book| LoanEntry {
                    name: book.name.clone(),
                    genre: book.genre.clone(),
                    author: book.borrower.clone().unwrap_or_default(),
                    due_date: book.due_date.clone(),
                })
                .collect();
            to_pretty(&entries)
        }
    }
}

/// Parse the JSON text of the given shelf's file into a collection.
pub fn decode(shelf: Shelf, text: &str) -> Result<Collection> {
    let books = match shelf {
        Shelf::Library => {
            let entries: Option<Vec<ShelfEntry>> = serde_json::from_str(text)?;
            entries
                .unwrap_or_default()
                .into_iter()
                .map(|entry| Book {
                    name: entry.name,
                    genre: entry.genre,
                    author: None,
                    borrower: None,
                    due_date: entry.due_date,
                })
                .collect()
        }
        Shelf::Outside | Shelf::Overdue => {
            let entries: Option<Vec<LoanEntry>> = serde_json::from_str(text)?;
            entries
                .unwrap_or_default()
                .into_iter()
                .map(|entry| Book {
                    name: entry.name,
                    genre: entry.genre,
                    author: None,
                    borrower: role(entry.author),
                    due_date: entry.due_date,
                })
                .collect()
        }
    };
    Ok(Collection::from_books(books))
}

fn to_pretty<T: Serialize>(entries: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    entries.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf).expect("serde_json writes valid UTF-8"))
}
