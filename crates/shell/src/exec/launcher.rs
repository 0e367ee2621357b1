// SPDX-License-Identifier: MIT

//! The launcher: runs one [`Pipeline`] to completion, wiring redirections
//! and inter-stage pipes and either waiting on or backgrounding the final
//! stage.
//!
//! Implemented with `std::process::Command`/`Child`/`Stdio` rather than raw
//! `fork`/`pipe`/`dup2`/`waitpid`: the workspace keeps `unsafe_code` denied
//! outside two narrowly-scoped call sites in `builtins::set`, and
//! `Stdio::from(child.stdout.take())` hands a stage's output pipe to the
//! next `Command::spawn()` at the kernel level with no parent-side copying —
//! the safe-Rust equivalent of duplicating a pipe fd onto standard input.
//!
//! Every stage is spawned before any stage is waited on, which sidesteps a
//! deadlock a naive per-stage fork-then-wait loop is exposed to: waiting on
//! stage *i* before stage *i+1* exists would stall stage *i* forever once
//! its pipe buffer fills, since nobody would yet be reading the other end.
//! Spawning the whole pipeline up front costs nothing here (every stage is
//! already backed by a real kernel pipe) and the observable behavior — each
//! stage's exit status, final stdout, job-table entry — is unchanged.

use std::io::Write;
use std::process::{Child, Command, Stdio};

use crate::ast::{Pipeline, Redirection};
use crate::builtins::{self, BuiltinKind};
use crate::shell::Shell;
use crate::token::OpKind;

use super::error::ExecError;

/// Hidden first argument recognized by `quash-cli`'s `main`: re-exec itself
/// to run a single pipeable built-in in a fresh process, so a backgrounded
/// pipeline whose final stage is a built-in (`echo tick &`) still gets a
/// real pid the job table can track. Built-ins never read stdin, so the
/// re-exec'd process needs no input wiring at all.
pub const INTERNAL_BUILTIN_MARKER: &str = "--quash-internal-run-builtin";

enum PendingInput {
    Inherit,
    Child(std::process::ChildStdout),
    Buffer(Vec<u8>),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum StageOutput {
    Inherit,
    Null,
    NextStage,
}

/// Run `pipeline` to completion. Returns the exit status to report as the
/// pipeline's own (the last stage's, per conventional shell `$?` semantics).
pub fn run_pipeline(
    shell: &mut Shell,
    pipeline: &Pipeline,
    out: &mut impl Write,
    err: &mut impl Write,
) -> i32 {
    let n = pipeline.commands.len();
    if n == 0 {
        return 0;
    }

    let mut pending = PendingInput::Inherit;
    let mut spawned: Vec<(Child, String)> = Vec::new();
    let mut last_status = 0;

    for i in 0..n {
        let argv = stage_argv(pipeline, i);
        let is_last = i + 1 == n;
        let input = std::mem::replace(&mut pending, PendingInput::Inherit);

        let Some(name) = argv.first().cloned() else {
            continue;
        };

        match builtins::classify(&name) {
            Some(BuiltinKind::ParentOnly) => {
                last_status = builtins::run_parent_only(shell, &name, &argv[1..], err);
            }
            Some(BuiltinKind::Pipeable) if pipeline.background && is_last => {
                match spawn_backgrounded_builtin(&name, &argv[1..]) {
                    Ok(child) => spawned.push((child, name)),
                    Err(e) => {
                        let _ = writeln!(err, "{e}");
                        last_status = 1;
                    }
                }
            }
            Some(BuiltinKind::Pipeable) => {
                let mut buf = Vec::new();
                last_status = builtins::run_pipeable(shell, &name, &argv[1..], &mut buf, err);
                // A file redirect on this stage takes precedence over
                // piping into the next stage, matching how `spawn_external`
                // resolves the same ambiguity.
                if let Some(redir) = write_redirection(pipeline, i) {
                    if let Some(raw_path) = pipeline.redirection_target(redir) {
                        let path = crate::expand::expand(raw_path);
                        if let Err(e) = write_buffer_to_file(&path, redir.kind, &buf) {
                            let _ = writeln!(err, "{e}");
                            last_status = 1;
                        }
                    }
                } else {
                    match resolve_stdout(pipeline, i, is_last, pipeline.background) {
                        StageOutput::NextStage => pending = PendingInput::Buffer(buf),
                        StageOutput::Null => {}
                        StageOutput::Inherit => {
                            let _ = out.write_all(&buf);
                        }
                    }
                }
            }
            None => match spawn_external(pipeline, i, &name, &argv, input, is_last, pipeline.background) {
                Ok((child, next_input)) => {
                    if let Some(next) = next_input {
                        pending = next;
                    }
                    spawned.push((child, name));
                }
                Err(e) => {
                    tracing::debug!(error = %e, "stage spawn failed");
                    let _ = writeln!(err, "{e}");
                    last_status = 1;
                }
            },
        }
    }

    if spawned.is_empty() {
        return last_status;
    }

    if pipeline.background {
        let last_idx = spawned.len() - 1;
        for (idx, (child, label)) in spawned.into_iter().enumerate() {
            if idx == last_idx {
                let label_for_message = label.clone();
                shell.jobs.log(child, label, err);
                let _ = writeln!(out, "Running {label_for_message} in background.");
            }
            // Earlier stages in a backgrounded pipeline are left running,
            // untracked: only the final stage's pid is meaningful to a
            // caller polling `jobs`.
        }
        return 0;
    }

    for (mut child, _label) in spawned {
        match child.wait() {
            Ok(status) => last_status = status.code().unwrap_or(1),
            Err(_) => last_status = 1,
        }
    }
    last_status
}

/// Re-exec the current binary to run a pipeable built-in in a fresh
/// process, giving it a real pid for the job table to track.
fn spawn_backgrounded_builtin(name: &str, args: &[String]) -> Result<Child, ExecError> {
    let exe = std::env::current_exe().unwrap_or_else(|_| name.into());
    Command::new(exe)
        .arg(INTERNAL_BUILTIN_MARKER)
        .arg(name)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| ExecError::SpawnFailed {
            program: name.to_string(),
            source,
        })
}

fn spawn_external(
    pipeline: &Pipeline,
    i: usize,
    name: &str,
    argv: &[String],
    input: PendingInput,
    is_last: bool,
    background: bool,
) -> Result<(Child, Option<PendingInput>), ExecError> {
    let mut cmd = Command::new(name);
    cmd.args(&argv[1..]);
    cmd.stderr(Stdio::inherit());

    let mut stdin_buffer = None;
    match read_redirection(pipeline, i) {
        Some(redir) => {
            let path = crate::expand::expand(pipeline.redirection_target(redir).unwrap_or_default());
            let file = std::fs::File::open(&path).map_err(|source| ExecError::RedirectFailed {
                path: path.clone(),
                mode: "reading",
                source,
            })?;
            cmd.stdin(Stdio::from(file));
        }
        None => match input {
            PendingInput::Inherit => {
                cmd.stdin(Stdio::inherit());
            }
            PendingInput::Child(stdout) => {
                cmd.stdin(Stdio::from(stdout));
            }
            PendingInput::Buffer(buf) => {
                cmd.stdin(Stdio::piped());
                stdin_buffer = Some(buf);
            }
        },
    }

    let out_dest = resolve_stdout(pipeline, i, is_last, background);
    match write_redirection(pipeline, i) {
        Some(redir) => {
            let path = crate::expand::expand(pipeline.redirection_target(redir).unwrap_or_default());
            let append = redir.kind == OpKind::AppendOut;
            let mode = if append { "appending" } else { "writing" };
            let file = std::fs::OpenOptions::new()
                .write(true)
                .create(true)
                .append(append)
                .truncate(!append)
                .open(&path)
                .map_err(|source| ExecError::RedirectFailed {
                    path: path.clone(),
                    mode,
                    source,
                })?;
            cmd.stdout(Stdio::from(file));
        }
        None => match out_dest {
            StageOutput::Inherit => {
                cmd.stdout(Stdio::inherit());
            }
            StageOutput::Null => {
                cmd.stdout(Stdio::null());
            }
            StageOutput::NextStage => {
                cmd.stdout(Stdio::piped());
            }
        },
    }

    let mut child = cmd.spawn().map_err(|source| ExecError::SpawnFailed {
        program: name.to_string(),
        source,
    })?;

    if let Some(buf) = stdin_buffer {
        if let Some(mut stdin) = child.stdin.take() {
            let _ = stdin.write_all(&buf);
        }
    }

    let next_input = if matches!(out_dest, StageOutput::NextStage) && write_redirection(pipeline, i).is_none() {
        child.stdout.take().map(PendingInput::Child)
    } else {
        None
    };

    Ok((child, next_input))
}

fn write_buffer_to_file(path: &str, kind: OpKind, buf: &[u8]) -> Result<(), ExecError> {
    let append = kind == OpKind::AppendOut;
    let mode = if append { "appending" } else { "writing" };
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .map_err(|source| ExecError::RedirectFailed {
            path: path.to_string(),
            mode,
            source,
        })?;
    file.write_all(buf).map_err(|source| ExecError::RedirectFailed {
        path: path.to_string(),
        mode,
        source,
    })
}

fn resolve_stdout(pipeline: &Pipeline, i: usize, is_last: bool, background: bool) -> StageOutput {
    if followed_by_pipe(pipeline, i) {
        StageOutput::NextStage
    } else if background && is_last {
        StageOutput::Null
    } else {
        StageOutput::Inherit
    }
}

fn followed_by_pipe(pipeline: &Pipeline, i: usize) -> bool {
    pipeline
        .redirections
        .iter()
        .any(|r| r.kind == OpKind::Pipe && r.command_index == i)
}

fn write_redirection(pipeline: &Pipeline, i: usize) -> Option<&Redirection> {
    pipeline
        .redirections
        .iter()
        .rev()
        .find(|r| matches!(r.kind, OpKind::WriteOut | OpKind::AppendOut) && r.command_index == i)
}

fn read_redirection(pipeline: &Pipeline, i: usize) -> Option<&Redirection> {
    pipeline
        .redirections
        .iter()
        .rev()
        .find(|r| r.kind == OpKind::ReadIn && r.command_index == i)
}

/// This stage's argv: every word of `commands[i]` in order, expanded,
/// except words that are redirection filename targets (those aren't
/// arguments — the parser only appended them to keep word indices aligned).
fn stage_argv(pipeline: &Pipeline, i: usize) -> Vec<String> {
    let excluded: Vec<usize> = pipeline
        .redirections
        .iter()
        .filter(|r| r.command_index == i)
        .filter_map(|r| r.target_word_index)
        .collect();

    pipeline.commands[i]
        .words
        .iter()
        .enumerate()
        .filter(|(idx, _)| !excluded.contains(idx))
        .map(|(_, w)| crate::expand::expand(w))
        .collect()
}

#[cfg(test)]
#[path = "launcher_tests.rs"]
mod tests;
