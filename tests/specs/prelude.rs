//! Shared helpers for driving the `quash` binary end to end.

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use predicates::prelude::*;

/// A fresh `Command` for the built `quash` binary.
pub fn quash() -> Command {
    Command::cargo_bin("quash").expect("quash binary is built")
}

pub trait AssertExt {
    fn passes(self) -> Self;
    fn stdout_has(self, needle: &str) -> Self;
    fn stderr_has(self, needle: &str) -> Self;
}

impl AssertExt for Assert {
    fn passes(self) -> Self {
        self.success()
    }

    fn stdout_has(self, needle: &str) -> Self {
        self.stdout(predicate::str::contains(needle.to_string()))
    }

    fn stderr_has(self, needle: &str) -> Self {
        self.stderr(predicate::str::contains(needle.to_string()))
    }
}
