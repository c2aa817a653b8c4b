use predicates::prelude::*;

use crate::common::Workspace;

#[test]
fn shows_help() {
    Workspace::new()
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("numtext"))
        .stdout(predicate::str::contains("wordcount"));
}

#[test]
fn stats_prints_and_saves_report() {
    let ws = Workspace::new();
    ws.write_file("data.txt", "2\n4\n4\n\n4\n5\n5\n7\n9\n");

    ws.command()
        .args(["stats", "data.txt"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Descriptive Statistics:\n"))
        .stdout(predicate::str::contains("Count: 8\n"))
        .stdout(predicate::str::contains("Mean: 5\n"))
        .stdout(predicate::str::contains("Median: 4.5\n"))
        .stdout(predicate::str::contains("Mode: 4\n"))
        .stdout(predicate::str::contains("Elapsed Time: "));

    let saved = ws.read_file("StatisticsResults.txt");
    assert!(saved.starts_with("Descriptive Statistics:\n"));
    assert!(saved.contains("Count: 8\n"));
}

#[test]
fn stats_reports_invalid_lines_on_stderr() {
    let ws = Workspace::new();
    ws.write_file("data.txt", "1\nabc\n3\n");

    ws.command()
        .args(["stats", "data.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Invalid data on line 2: 'abc' is not a valid number",
        ))
        .stdout(predicate::str::contains("Count: 2\n"));
}

#[test]
fn stats_without_numbers_fails() {
    let ws = Workspace::new();
    ws.write_file("empty.txt", "\nfoo\n");

    ws.command()
        .args(["stats", "empty.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application Error"))
        .stderr(predicate::str::contains("no valid numbers found"));

    assert!(!ws.path().join("StatisticsResults.txt").exists());
}

#[test]
fn missing_input_file_fails() {
    Workspace::new()
        .command()
        .args(["convert", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.txt"));
}

#[test]
fn convert_handles_negatives_and_rejects_fractions() {
    let ws = Workspace::new();
    ws.write_file("numbers.txt", "10\n-1\n2.5\n255\n-3\n");

    ws.command()
        .args(["convert", "numbers.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Number 1: 10 | Binary: 1010 | Hexadecimal: A\n"))
        .stdout(predicate::str::contains(
            "Number 2: -1 | Binary: 1111111111 | Hexadecimal: FFFFFFFF\n",
        ))
        .stdout(predicate::str::contains("Number 3: 255 | Binary: 11111111 | Hexadecimal: FF\n"))
        .stdout(predicate::str::contains(
            "Number 4: -3 | Binary: 1111111101 | Hexadecimal: FFFFFFFD\n",
        ))
        .stderr(predicate::str::contains("Invalid data on line 3: '2.5' is not an integer"));

    assert!(ws.read_file("ConvertionResults.txt").starts_with("Number Conversions:\n"));
}

#[test]
fn wordcount_folds_case_and_sorts() {
    let ws = Workspace::new();
    ws.write_file("text.txt", "The cat\n\nthe Dog the END\n");

    ws.command()
        .args(["wordcount", "text.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Word: 'cat' -> Frequency: 1\nWord: 'dog' -> Frequency: 1\nWord: 'end' -> Frequency: 1\nWord: 'the' -> Frequency: 3\n",
        ))
        .stdout(predicate::str::contains("Total Words: 6\n"))
        .stdout(predicate::str::contains("Distinct Words: 4\n"));

    assert!(ws.path().join("WordCountResults.txt").exists());
}

#[test]
fn no_save_and_quiet_flags() {
    let ws = Workspace::new();
    ws.write_file("text.txt", "a b a\n");

    ws.command()
        .args(["--no-save", "--quiet", "words", "text.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(!ws.path().join("WordCountResults.txt").exists());
}

#[test]
fn output_flag_redirects_saved_report() {
    let ws = Workspace::new();
    ws.write_file("data.txt", "1\n2\n");

    ws.command()
        .args(["stats", "data.txt", "-o", "custom.txt", "-q"])
        .assert()
        .success();

    assert!(ws.read_file("custom.txt").contains("Count: 2\n"));
    assert!(!ws.path().join("StatisticsResults.txt").exists());
}

#[test]
fn save_failure_does_not_fail_the_run() {
    let ws = Workspace::new();
    ws.write_file("data.txt", "1\n");

    ws.command()
        .args(["stats", "data.txt", "-o", "missing-dir/out.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Count: 1\n"))
        .stderr(predicate::str::contains("failed to save results"));
}

#[test]
fn verbose_flag_enables_debug_logging() {
    let ws = Workspace::new();
    ws.write_file("data.txt", "1\n2\n");

    ws.command()
        .args(["--no-save", "-q", "stats", "data.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("read 2 lines").not());

    ws.command()
        .args(["--no-save", "-v", "stats", "data.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("read 2 lines from data.txt"));
}
