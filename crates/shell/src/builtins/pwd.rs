// SPDX-License-Identifier: MIT

//! `pwd`. Pipeable: it has no parent state to mutate.

use std::io::Write;

pub fn run(out: &mut impl Write, err: &mut impl Write) -> i32 {
    match std::env::current_dir() {
        Ok(dir) => {
            let _ = writeln!(out, "{}", dir.display());
            0
        }
        Err(e) => {
            tracing::debug!(error = %e, "pwd: current_dir failed");
            let _ = writeln!(err, "pwd: cannot determine current directory");
            1
        }
    }
}

#[cfg(test)]
#[path = "pwd_tests.rs"]
mod tests;
