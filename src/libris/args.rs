use clap::{Parser, Subcommand, ValueEnum};
use libris::model::Shelf;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(version)]
#[command(
    about = "Track library books, loans, and overdue returns from the command line",
    long_about = "Track library books, loans, and overdue returns from the command line.\n\n\
                  Without a subcommand, libris opens the interactive menu. Every \
                  invocation first moves past-due loans to the overdue shelf."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the shelf data files (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the library shelf
    #[command(alias = "a")]
    Add {
        /// Book name
        name: String,

        /// Book genre
        #[arg(default_value = "")]
        genre: String,

        /// Author's name
        #[arg(default_value = "")]
        author: String,
    },

    /// Remove every library book with an exactly matching name
    #[command(alias = "rm")]
    Remove {
        /// Name of the book(s) to remove
        name: String,
    },

    /// Check a book out to a borrower
    #[command(alias = "co")]
    Checkout {
        /// Book name
        name: String,

        /// Book genre
        genre: String,

        /// Name of the person taking the book
        borrower: String,

        /// Due date (YYYY-MM-DD)
        due_date: String,
    },

    /// Move past-due loans to the overdue shelf
    Sweep,

    /// List the records on one shelf
    #[command(alias = "ls")]
    List {
        /// Which shelf to list
        #[arg(value_enum)]
        shelf: ShelfArg,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ShelfArg {
    Library,
    Outside,
    Overdue,
}

impl From<ShelfArg> for Shelf {
    fn from(arg: ShelfArg) -> Self {
        match arg {
            ShelfArg::Library => Shelf::Library,
            ShelfArg::Outside => Shelf::Outside,
            ShelfArg::Overdue => Shelf::Overdue,
        }
    }
}
