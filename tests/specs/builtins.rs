//! End-to-end scenarios for the built-in commands.

use super::prelude::*;

#[test]
fn pwd_prints_the_current_directory() {
    let dir = tempfile::tempdir().unwrap();
    quash()
        .current_dir(dir.path())
        .write_stdin("pwd\n")
        .assert()
        .passes()
        .stdout_has(&dir.path().canonicalize().unwrap().display().to_string());
}

#[test]
fn echo_joins_arguments_with_a_trailing_space() {
    quash()
        .write_stdin("echo hello world\n")
        .assert()
        .passes()
        .stdout_has("hello world \n");
}

#[test]
fn set_then_echo_expands_the_variable() {
    quash()
        .write_stdin("set GREETING=hi\necho $GREETING there\n")
        .assert()
        .passes()
        .stdout_has("hi there \n");
}

#[test]
fn cd_to_a_nonexistent_directory_prints_a_diagnostic_and_continues() {
    quash()
        .write_stdin("cd /definitely/does/not/exist/anywhere\necho still-alive\n")
        .assert()
        .passes()
        .stderr_has("Directory does not exist")
        .stdout_has("still-alive");
}

#[test]
fn set_empty_value_then_echo_prints_a_blank_line() {
    quash()
        .write_stdin("set X=\necho $X\n")
        .assert()
        .passes()
        .stdout_has(" \n");
}

#[test]
fn unknown_command_prints_could_not_find_and_continues() {
    quash()
        .write_stdin("definitely-not-a-real-program-xyz\necho still-alive\n")
        .assert()
        .passes()
        .stderr_has("Could not find definitely-not-a-real-program-xyz")
        .stdout_has("still-alive");
}
