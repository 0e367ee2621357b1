// SPDX-License-Identifier: MIT

//! `cd [path]`. Must run in the parent: it changes this process's working
//! directory, which a child process could never do.

use std::io::Write;

pub fn run(args: &[String], err: &mut impl Write) -> i32 {
    let target = match args.first() {
        Some(arg) => expand_tilde(arg),
        None => match std::env::var("HOME") {
            Ok(home) => home,
            Err(_) => {
                let _ = writeln!(err, "cd: HOME is not set");
                return 1;
            }
        },
    };

    match std::env::set_current_dir(&target) {
        Ok(()) => 0,
        Err(_) => {
            tracing::debug!(target = %target, "cd: set_current_dir failed");
            let _ = writeln!(err, "Directory does not exist");
            1
        }
    }
}

/// A leading `~` is expanded to `$HOME`, but only as the first character —
/// `foo~bar` is left untouched.
fn expand_tilde(arg: &str) -> String {
    if let Some(rest) = arg.strip_prefix('~') {
        if let Ok(home) = std::env::var("HOME") {
            return format!("{home}{rest}");
        }
    }
    arg.to_string()
}

#[cfg(test)]
#[path = "cd_tests.rs"]
mod tests;
