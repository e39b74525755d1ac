use assert_cmd::Command;
use predicates::prelude::*;

fn parinfer() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("parinfer"))
}

#[test]
fn help_mentions_the_three_modes() {
    parinfer()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--mode"));
}

#[test]
fn indent_mode_reads_stdin_and_prints_transformed_text() {
    parinfer()
        .arg("--mode")
        .arg("indent")
        .write_stdin("(foo\n  bar\nbaz)")
        .assert()
        .success()
        .stdout("(foo\n  bar)\nbaz");
}

#[test]
fn paren_mode_fails_with_nonzero_exit_on_unclosed_paren() {
    parinfer()
        .arg("--mode")
        .arg("paren")
        .write_stdin("(foo\n  bar")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unclosed"));
}

#[test]
fn json_output_round_trips_through_the_library_outcome() {
    let output = parinfer()
        .arg("--mode")
        .arg("indent")
        .arg("--json")
        .write_stdin("(foo\n  bar\nbaz)")
        .output()
        .unwrap();
    assert!(output.status.success());

    let from_cli: parinfer_core::Outcome = serde_json::from_slice(&output.stdout).unwrap();
    let from_lib = parinfer_core::indent_mode("(foo\n  bar\nbaz)", parinfer_core::Options::default());
    assert_eq!(from_cli, from_lib);
}

#[test]
fn dash_reads_from_stdin_just_like_omitting_the_path() {
    parinfer()
        .arg("-")
        .write_stdin("(foo\n  bar)")
        .assert()
        .success()
        .stdout("(foo\n  bar)");
}
