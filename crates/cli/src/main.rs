// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! `quash`: the REPL driver plus argument parsing and logging setup. The
//! engine itself lives in `quash-shell`; this binary only reads lines,
//! prints a prompt when interactive, and reports fatal setup errors.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use quash_shell::exec::launcher::INTERNAL_BUILTIN_MARKER;
use quash_shell::{builtins, Shell};

#[derive(Parser)]
#[command(name = "quash", about = "A small interactive UNIX shell")]
struct Cli {
    /// Run commands from this file instead of reading from standard input.
    script: Option<PathBuf>,
}

fn main() {
    // The launcher re-execs this binary to give a backgrounded built-in a
    // real pid (see `quash_shell::exec::launcher`). That hidden mode is
    // handled before anything else touches argv, stdin, or logging.
    let mut raw_args = std::env::args().skip(1);
    if raw_args.next().as_deref() == Some(INTERNAL_BUILTIN_MARKER) {
        std::process::exit(run_internal_builtin(raw_args));
    }

    if let Err(e) = run() {
        eprintln!("quash: {e:#}");
        std::process::exit(1);
    }
}

fn run_internal_builtin(mut args: std::iter::Skip<std::env::Args>) -> i32 {
    let Some(name) = args.next() else {
        return 1;
    };
    let args: Vec<String> = args.collect();
    let shell = Shell::new();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    builtins::run_pipeable(&shell, &name, &args, &mut stdout, &mut stderr)
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut shell = Shell::new();

    match cli.script {
        Some(path) => {
            let code = run_script(&mut shell, &path)?;
            std::process::exit(code);
        }
        None => run_interactive(&mut shell),
    }

    Ok(())
}

fn run_script(shell: &mut Shell, path: &std::path::Path) -> anyhow::Result<i32> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("cannot open script '{}'", path.display()))?;
    let reader = io::BufReader::new(file);
    let mut last_status = 0;

    for line in reader.lines() {
        let line = line.context("failed reading script line")?;
        last_status = run_turn(shell, &line);
        if !shell.running {
            break;
        }
    }

    Ok(last_status)
}

fn run_interactive(shell: &mut Shell) {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    if interactive {
        println!("Welcome to quash!");
        print!("$ ");
        let _ = io::stdout().flush();
    }

    let mut line = String::new();
    while shell.running {
        line.clear();
        let bytes_read = match stdin.lock().read_line(&mut line) {
            Ok(n) => n,
            Err(_) => break,
        };
        if bytes_read == 0 {
            break; // EOF
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        run_turn(shell, trimmed);

        if interactive && shell.running {
            print!("$ ");
            let _ = io::stdout().flush();
        }
    }
}

/// Lex, parse, launch, and poll the job table for one line. Returns the
/// pipeline's exit status (0 for a blank line or a parse error's recovery).
fn run_turn(shell: &mut Shell, line: &str) -> i32 {
    let span = tracing::info_span!("quash.turn", line);
    let _enter = span.enter();

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let status = match quash_shell::run_line(shell, line, &mut stdout, &mut stderr) {
        Ok(Some(status)) => status,
        Ok(None) => 0,
        Err(e) => {
            let _ = writeln!(stderr, "{e}");
            1
        }
    };

    shell.jobs.poll(&mut stdout);
    status
}
