// SPDX-License-Identifier: MIT

//! Launcher-internal error type. Every variant is caught inside
//! [`crate::exec::launcher::run_pipeline`] and turned into a diagnostic plus
//! a nonzero stage exit code — nothing here is meant to reach the REPL
//! driver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Could not find {program}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open '{path}' for {mode}")]
    RedirectFailed {
        path: String,
        mode: &'static str,
        #[source]
        source: std::io::Error,
    },
}
