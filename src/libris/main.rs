use chrono::Local;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use libris::api::{CmdMessage, LibrisApi, MessageLevel};
use libris::config::LibrisConfig;
use libris::error::{LibrisError, Result};
use libris::model::{Book, Shelf};
use libris::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

type InputLines = io::Lines<io::StdinLock<'static>>;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api(&cli)?;

    match cli.command {
        Some(command) => {
            // The explicit sweep reports its own results; everything else
            // gets the quiet pre-flight check the menu loop also runs.
            if !matches!(command, Commands::Sweep) {
                auto_sweep(&mut api, &today());
            }
            dispatch(&mut api, command)
        }
        None => menu_loop(&mut api),
    }
}

fn init_api(cli: &Cli) -> Result<LibrisApi<FileStore>> {
    let proj_dirs = ProjectDirs::from("com", "libris", "libris")
        .ok_or_else(|| LibrisError::Store("Could not determine a home directory".to_string()))?;

    let config = LibrisConfig::load(proj_dirs.config_dir()).unwrap_or_default();
    let data_dir = cli
        .data_dir
        .clone()
        .or(config.data_dir)
        .unwrap_or_else(|| proj_dirs.data_dir().to_path_buf());

    Ok(LibrisApi::new(FileStore::new(data_dir)))
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

fn dispatch(api: &mut LibrisApi<FileStore>, command: Commands) -> Result<()> {
    match command {
        Commands::Add {
            name,
            genre,
            author,
        } => {
            let result = api.add_book(name, genre, author)?;
            print_messages(&result.messages);
        }
        Commands::Remove { name } => {
            let result = api.remove_books(&name)?;
            print_messages(&result.messages);
        }
        Commands::Checkout {
            name,
            genre,
            borrower,
            due_date,
        } => {
            let result = api.check_out(name, genre, borrower, due_date)?;
            print_messages(&result.messages);
        }
        Commands::Sweep => {
            let result = api.sweep_overdue(&today())?;
            print_messages(&result.messages);
        }
        Commands::List { shelf } => {
            let shelf: Shelf = shelf.into();
            let result = api.view(shelf)?;
            print_shelf(shelf, &result.listed_books);
            print_messages(&result.messages);
        }
    }
    Ok(())
}

// --- Interactive menu ---

enum MenuFlow {
    Continue,
    Quit,
}

fn menu_loop(api: &mut LibrisApi<FileStore>) -> Result<()> {
    let mut lines = io::stdin().lock().lines();
    loop {
        auto_sweep(api, &today());
        print_menu()?;

        let Some(choice) = read_line(&mut lines)? else {
            return Ok(());
        };

        // A failed action is reported and the menu comes back; the ledger
        // keeps whatever state the last successful save left behind.
        match menu_tick(api, &mut lines, choice.trim()) {
            Ok(MenuFlow::Quit) => return Ok(()),
            Ok(MenuFlow::Continue) => {}
            Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
        }
    }
}

fn menu_tick(
    api: &mut LibrisApi<FileStore>,
    lines: &mut InputLines,
    choice: &str,
) -> Result<MenuFlow> {
    match choice {
        "1" => {
            let Some(name) = prompt(lines, "Enter book name: ")? else {
                return Ok(MenuFlow::Quit);
            };
            let Some(genre) = prompt(lines, "Enter book genre: ")? else {
                return Ok(MenuFlow::Quit);
            };
            let Some(author) = prompt(lines, "Enter the author's name: ")? else {
                return Ok(MenuFlow::Quit);
            };
            let result = api.add_book(name, genre, author)?;
            print_messages(&result.messages);
        }
        "2" => {
            let Some(name) = prompt(lines, "Enter the name of the book to remove: ")? else {
                return Ok(MenuFlow::Quit);
            };
            let result = api.remove_books(&name)?;
            print_messages(&result.messages);
        }
        "3" => {
            let Some(name) = prompt(lines, "Enter book name: ")? else {
                return Ok(MenuFlow::Quit);
            };
            let Some(genre) = prompt(lines, "Enter book genre: ")? else {
                return Ok(MenuFlow::Quit);
            };
            let Some(borrower) = prompt(lines, "Enter the name of the person taking the book: ")?
            else {
                return Ok(MenuFlow::Quit);
            };
            let Some(due_date) = prompt(lines, "Enter due date (YYYY-MM-DD): ")? else {
                return Ok(MenuFlow::Quit);
            };
            let result = api.check_out(name, genre, borrower, due_date)?;
            print_messages(&result.messages);
        }
        "4" => {
            let result = api.sweep_overdue(&today())?;
            print_messages(&result.messages);
        }
        "5" => view_shelf(api, Shelf::Library)?,
        "6" => view_shelf(api, Shelf::Outside)?,
        "7" => view_shelf(api, Shelf::Overdue)?,
        "8" => return Ok(MenuFlow::Quit),
        _ => println!("Invalid choice. Please try again."),
    }
    Ok(MenuFlow::Continue)
}

fn view_shelf(api: &LibrisApi<FileStore>, shelf: Shelf) -> Result<()> {
    let result = api.view(shelf)?;
    print_shelf(shelf, &result.listed_books);
    print_messages(&result.messages);
    Ok(())
}

fn print_menu() -> Result<()> {
    println!();
    println!("Library Management Menu:");
    println!("1. Add a book to the library");
    println!("2. Remove a book from the library");
    println!("3. Check a book out of the library");
    println!("4. Move overdue loans to the overdue shelf");
    println!("5. View the library shelf");
    println!("6. View the outside shelf");
    println!("7. View the overdue shelf");
    println!("8. Exit");
    print!("Enter your choice: ");
    io::stdout().flush().map_err(LibrisError::Io)?;
    Ok(())
}

fn prompt(lines: &mut InputLines, label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush().map_err(LibrisError::Io)?;
    read_line(lines)
}

fn read_line(lines: &mut InputLines) -> Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line.map_err(LibrisError::Io)?)),
        None => Ok(None),
    }
}

// --- Output ---

/// The pre-tick sweep runs constantly, so it only speaks up when something
/// needs attention.
fn auto_sweep(api: &mut LibrisApi<FileStore>, today: &str) {
    match api.sweep_overdue(today) {
        Ok(result) => print_alerts(&result.messages),
        Err(e) => eprintln!("{}", format!("Warning: overdue check failed: {}", e).yellow()),
    }
}

fn print_message(message: &CmdMessage) {
    match message.level {
        MessageLevel::Info => println!("{}", message.content.dimmed()),
        MessageLevel::Success => println!("{}", message.content.green()),
        MessageLevel::Warning => println!("{}", message.content.yellow()),
        MessageLevel::Error => println!("{}", message.content.red()),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        print_message(message);
    }
}

fn print_alerts(messages: &[CmdMessage]) {
    for message in messages {
        if matches!(message.level, MessageLevel::Warning | MessageLevel::Error) {
            print_message(message);
        }
    }
}

const LINE_WIDTH: usize = 72;
const DATE_WIDTH: usize = 14;

fn print_shelf(shelf: Shelf, books: &[Book]) {
    println!("{}", shelf_heading(shelf).bold());
    if books.is_empty() {
        println!("  (empty)");
        return;
    }

    for (i, book) in books.iter().enumerate() {
        let idx = format!("{:>3}. ", i + 1);

        let credit = book
            .borrower
            .as_deref()
            .or(book.author.as_deref())
            .unwrap_or("");
        let mut label = book.name.clone();
        if !book.genre.is_empty() {
            label.push_str(&format!("  [{}]", book.genre));
        }
        if !credit.is_empty() {
            label.push_str(&format!("  {}", credit));
        }

        let available = LINE_WIDTH.saturating_sub(idx.width() + DATE_WIDTH);
        let label = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label.width());

        let due = if book.due_date.is_empty() {
            String::new()
        } else {
            format!("due {}", book.due_date)
        };

        println!("{}{}{}{}", idx, label, " ".repeat(padding), due.dimmed());
    }
}

fn shelf_heading(shelf: Shelf) -> &'static str {
    match shelf {
        Shelf::Library => "Library shelf:",
        Shelf::Outside => "Outside shelf:",
        Shelf::Overdue => "Overdue shelf:",
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
