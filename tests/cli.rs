use assert_cmd::Command;
use predicates::prelude::*;

fn evalia() -> Command {
    Command::cargo_bin("evalia").expect("binary should build")
}

#[test]
fn one_shot_prints_the_result() {
    evalia().arg("1 + 2").assert().success().stdout("3\n");
    evalia().arg("3 > 2").assert().success().stdout("true\n");
    evalia().arg("0.1 + 0.2").assert().success().stdout("0.30000000000000004\n");
}

#[test]
fn one_shot_reports_errors_on_stderr() {
    evalia().arg("1 / 0")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Math error: division by zero"));

    evalia().arg("1 +")
            .assert()
            .failure()
            .stderr(predicate::str::contains("insufficient operands"));
}

#[test]
fn prompt_evaluates_lines_until_exit() {
    evalia().write_stdin("1 + 2\n2 * 3\nexit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Expression Evaluator"))
            .stdout(predicate::str::contains("3"))
            .stdout(predicate::str::contains("6"));
}

#[test]
fn prompt_continues_after_an_error() {
    evalia().write_stdin("1 / 0\n4 / 2\nexit\n")
            .assert()
            .success()
            .stderr(predicate::str::contains("Math error: division by zero"))
            .stdout(predicate::str::contains("2"));
}

#[test]
fn prompt_skips_empty_lines_and_stops_on_eof() {
    evalia().write_stdin("\n\n5 - 3\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("2"));
}
