// SPDX-License-Identifier: MIT

//! Shell state: the `running` flag and job table bundled into a single
//! value passed explicitly to each operation, rather than kept as
//! process-globals. The REPL driver owns the only `Shell`.

use crate::exec::job_table::JobTable;

/// Default bound on the number of tracked background jobs (see DESIGN.md).
pub const DEFAULT_JOB_TABLE_CAPACITY: usize = 64;

pub struct Shell {
    /// Cleared by `exit`/`quit`; the REPL driver loops while this is true.
    pub running: bool,
    pub jobs: JobTable,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            running: true,
            jobs: JobTable::new(DEFAULT_JOB_TABLE_CAPACITY),
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
