use assert_cmd::Command;
use predicates::prelude::*;

fn libris(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("libris").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

#[test]
fn menu_quit_exits_cleanly() {
    let temp = tempfile::tempdir().unwrap();

    libris(temp.path())
        .write_stdin("8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Library Management Menu"));
}

#[test]
fn menu_invalid_choice_reprompts() {
    let temp = tempfile::tempdir().unwrap();

    libris(temp.path())
        .write_stdin("42\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please try again."));
}

#[test]
fn menu_add_and_view_round_trip() {
    let temp = tempfile::tempdir().unwrap();

    // 1 = add (name, genre, author), 5 = view library, 8 = exit
    let script = "1\nDune\nScience Fiction\nFrank Herbert\n5\n8\n";
    libris(temp.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added \"Dune\" to the library."))
        .stdout(predicate::str::contains("Dune"));
}

#[test]
fn add_then_list_shows_the_book() {
    let temp = tempfile::tempdir().unwrap();

    libris(temp.path())
        .args(["add", "Dune", "Science Fiction", "Frank Herbert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added \"Dune\""));

    libris(temp.path())
        .args(["list", "library"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("Frank Herbert"));
}

#[test]
fn remove_deletes_every_matching_copy() {
    let temp = tempfile::tempdir().unwrap();

    libris(temp.path()).args(["add", "Dup", "SF"]).assert().success();
    libris(temp.path()).args(["add", "Dup", "SF"]).assert().success();
    libris(temp.path())
        .args(["remove", "Dup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 copies"));

    libris(temp.path())
        .args(["list", "library"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dup").not());
}

#[test]
fn past_due_loan_moves_to_the_overdue_shelf_on_the_next_run() {
    let temp = tempfile::tempdir().unwrap();

    libris(temp.path())
        .args(["checkout", "Dune", "Science Fiction", "Alice", "2000-01-01"])
        .assert()
        .success();

    // Any later invocation sweeps first, so the loan is overdue by now.
    libris(temp.path())
        .args(["list", "overdue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"));

    libris(temp.path())
        .args(["list", "outside"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune").not());
}

#[test]
fn future_loan_stays_on_the_outside_shelf() {
    let temp = tempfile::tempdir().unwrap();

    libris(temp.path())
        .args(["checkout", "Emma", "Classic", "Bob", "2999-01-01"])
        .assert()
        .success();

    libris(temp.path())
        .args(["list", "outside"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emma"));

    libris(temp.path())
        .args(["list", "overdue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emma").not());
}

#[test]
fn data_files_use_the_legacy_names_and_keys() {
    let temp = tempfile::tempdir().unwrap();

    libris(temp.path())
        .args(["add", "Dune", "Science Fiction", "Frank Herbert"])
        .assert()
        .success();
    libris(temp.path())
        .args(["checkout", "Emma", "Classic", "Bob", "2999-01-01"])
        .assert()
        .success();

    let library = std::fs::read_to_string(temp.path().join("library_data.json")).unwrap();
    assert!(library.contains("\"dueDate\""));
    // The library file never carries an author key.
    assert!(!library.contains("\"author\""));

    let outside =
        std::fs::read_to_string(temp.path().join("outside_library_data.json")).unwrap();
    assert!(outside.contains("\"author\": \"Bob\""));
}
