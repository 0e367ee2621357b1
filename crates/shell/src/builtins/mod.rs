// SPDX-License-Identifier: MIT

//! Built-in commands.
//!
//! Every built-in shares the external program's I/O contract: it writes to
//! the writers the launcher hands it rather than touching `std::io::stdout`
//! directly, so the launcher can route a pipeable built-in's output into a
//! file, a pipe, or the null device exactly like an external program's.

mod cd;
mod echo;
mod jobs;
mod pwd;
mod set;

use std::io::Write;

use crate::shell::Shell;

/// Whether a built-in must run in the parent (and so cannot be wired into a
/// pipeline like an external program) or may run as though it were a child,
/// feeding its output to wherever the stage's stdout is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinKind {
    ParentOnly,
    Pipeable,
}

/// Classify `name` as a built-in, if it is one.
pub fn classify(name: &str) -> Option<BuiltinKind> {
    match name {
        "cd" | "set" | "exit" | "quit" => Some(BuiltinKind::ParentOnly),
        "pwd" | "echo" | "jobs" => Some(BuiltinKind::Pipeable),
        _ => None,
    }
}

/// Run a parent-only built-in (`cd`, `set`, `exit`, `quit`). Diagnostics go
/// to `err`; these built-ins never produce stdout output of their own.
pub fn run_parent_only(shell: &mut Shell, name: &str, args: &[String], err: &mut impl Write) -> i32 {
    match name {
        "cd" => cd::run(args, err),
        "set" => set::run(args, err),
        "exit" | "quit" => {
            shell.running = false;
            0
        }
        other => unreachable!("{other} is not a parent-only builtin"),
    }
}

/// Run a pipeable built-in (`pwd`, `echo`, `jobs`), writing its output to
/// `out` and returning its exit code.
pub fn run_pipeable(shell: &Shell, name: &str, args: &[String], out: &mut impl Write, err: &mut impl Write) -> i32 {
    match name {
        "pwd" => pwd::run(out, err),
        "echo" => echo::run(args, out),
        "jobs" => jobs::run(shell, out),
        other => unreachable!("{other} is not a pipeable builtin"),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
