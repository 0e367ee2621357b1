// SPDX-License-Identifier: MIT

//! `set NAME=VALUE` / `set NAME`. Must run in the parent: it mutates the
//! process environment, which a child's copy would not affect.

use std::io::Write;

use crate::expand;

// `env::set_var`/`remove_var` are `unsafe fn` in current `std` (a setenv/
// getenv data race hazard on platforms that don't serialize them), the one
// spot in this crate that can't honor the workspace's `forbid(unsafe_code)`
// lint: a single-threaded shell mutating its own environment is exactly the
// case the `unsafe` contract asks the caller to rule out.
#[allow(unsafe_code)]
pub fn run(args: &[String], err: &mut impl Write) -> i32 {
    let Some(assignment) = args.first() else {
        let _ = writeln!(err, "No value provided to set");
        return 1;
    };

    match assignment.split_once('=') {
        Some((name, value)) => {
            let expanded = expand::expand(value);
            tracing::debug!(name, "set: assigning variable");
            unsafe { std::env::set_var(name, expanded) };
        }
        None => {
            tracing::debug!(name = assignment.as_str(), "set: unsetting variable");
            unsafe { std::env::remove_var(assignment) };
        }
    }
    0
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
