//! End-to-end scenarios for pipelines and redirection.

use super::prelude::*;

#[test]
fn builtin_output_pipes_into_an_external_program() {
    quash()
        .write_stdin("echo one two | cat\n")
        .assert()
        .passes()
        .stdout_has("one two \n");
}

#[test]
fn external_to_external_pipeline() {
    quash()
        .write_stdin("echo one two three | tr ' ' '\\n' | grep two\n")
        .assert()
        .passes()
        .stdout_has("two");
}

#[test]
#[serial_test::serial]
fn write_redirection_creates_a_file_with_the_stage_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    quash()
        .write_stdin(format!("echo hi > {}\n", path.display()))
        .assert()
        .passes();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hi \n");
}

#[test]
#[serial_test::serial]
fn append_redirection_adds_to_an_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    std::fs::write(&path, "first \n").unwrap();

    quash()
        .write_stdin(format!("echo second >> {}\n", path.display()))
        .assert()
        .passes();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "first \nsecond \n");
}

#[test]
#[serial_test::serial]
fn read_redirection_feeds_a_file_into_an_external_program() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.txt");
    std::fs::write(&path, "hello from a file\n").unwrap();

    quash()
        .write_stdin(format!("cat < {}\n", path.display()))
        .assert()
        .passes()
        .stdout_has("hello from a file");
}

#[test]
fn a_file_redirect_takes_precedence_over_a_following_pipe() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    quash()
        .write_stdin(format!("echo hi > {} | cat\n", path.display()))
        .assert()
        .passes();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hi \n");
}
