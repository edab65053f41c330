use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_reads_prompts_from_stdin() {
    let mut cmd = Command::cargo_bin("preflop-advisor").expect("binary exists");
    cmd.arg("--no-color").write_stdin("14 H 13 S\n1\n2\n2\n4\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Pot odds: 175%"))
        .stdout(predicate::str::contains("Action: raise with amount: $17"));
}

#[test]
fn cli_accepts_flags_without_prompting() {
    let mut cmd = Command::cargo_bin("preflop-advisor").expect("binary exists");
    cmd.args([
        "--no-color",
        "--cards",
        "2c4h",
        "--small-blind",
        "1",
        "--big-blind",
        "2",
        "--callers",
        "0",
        "--to-call",
        "10",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Action: fold"))
        .stdout(predicate::str::contains("Enter").not());
}

#[test]
fn cli_rejects_zero_call() {
    let mut cmd = Command::cargo_bin("preflop-advisor").expect("binary exists");
    cmd.args([
        "--cards",
        "AhAs",
        "--small-blind",
        "1",
        "--big-blind",
        "2",
        "--callers",
        "0",
        "--to-call",
        "0",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn cli_rejects_out_of_range_rank_flag() {
    let mut cmd = Command::cargo_bin("preflop-advisor").expect("binary exists");
    cmd.args(["--cards", "15 H 2 S"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid rank 15"));
}

#[test]
fn chart_subcommand_prints_grid() {
    let mut cmd = Command::cargo_bin("preflop-advisor").expect("binary exists");
    cmd.args(["chart", "--no-color"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Suited hands above the diagonal"));
}

#[test]
fn cli_rejected_answer_is_reported_once() {
    let mut cmd = Command::cargo_bin("preflop-advisor").expect("binary exists");
    cmd.arg("--no-color")
        .write_stdin("14 H 13 S\n-1\n1\n2\n2\n4\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Invalid input"))
        .stderr(predicate::str::is_empty());
}
