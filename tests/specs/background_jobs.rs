//! Backgrounding a pipeline and listing it with `jobs`.
//!
//! These only assert on the immediate "Running ... in background." message
//! and the `jobs` listing line, not on reap timing, to avoid flakiness.
//! Deterministic reap behavior is covered at the unit level by
//! `quash_shell::exec::job_table`'s own tests.

use super::prelude::*;

#[test]
fn backgrounding_a_builtin_reports_running_and_lists_it_in_jobs() {
    quash()
        .write_stdin("echo tick &\njobs\n")
        .assert()
        .passes()
        .stdout_has("Running echo in background.")
        .stdout_has("echo");
}

#[test]
fn backgrounding_an_external_program_reports_running_and_lists_it_in_jobs() {
    quash()
        .write_stdin("sleep 1 &\njobs\n")
        .assert()
        .passes()
        .stdout_has("Running sleep in background.")
        .stdout_has("sleep");
}

#[test]
fn jobs_with_no_background_work_prints_nothing() {
    quash()
        .write_stdin("jobs\n")
        .assert()
        .passes();
}
