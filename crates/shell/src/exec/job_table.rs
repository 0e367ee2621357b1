// SPDX-License-Identifier: MIT

//! Background job tracking: a bounded table of running children, reaped
//! lazily as the REPL polls between turns.

use std::io::Write;
use std::process::Child;

/// A tracked background child: its pid and the zeroth argument of the
/// command that was forked.
#[derive(Debug, Clone)]
pub struct Job {
    pub pid: u32,
    pub label: String,
}

struct Entry {
    child: Child,
    job: Job,
}

/// Bounded-capacity, dense zero-based job table. Ids are re-derived from
/// position after every removal, so they never contain gaps.
pub struct JobTable {
    capacity: usize,
    entries: Vec<Entry>,
}

impl JobTable {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
        }
    }

    /// Track a newly backgrounded child. Returns `false` (and drops
    /// `child`, which keeps running untracked) if the table is full.
    pub fn log(&mut self, child: Child, label: String, warn: &mut impl Write) -> bool {
        if self.entries.len() >= self.capacity {
            let _ = writeln!(warn, "job table full, not tracking {label}");
            return false;
        }
        let job = Job {
            pid: child.id(),
            label,
        };
        self.entries.push(Entry { child, job });
        true
    }

    /// Non-blocking reap of every tracked entry. Finished entries are
    /// removed, compacting the rest left so ids stay dense; one finish
    /// line is printed per newly-reaped job.
    pub fn poll(&mut self, out: &mut impl Write) {
        let mut i = 0;
        while i < self.entries.len() {
            match self.entries[i].child.try_wait() {
                Ok(Some(_status)) => {
                    let job = self.entries.remove(i).job;
                    let _ = writeln!(out, "[{i}] {} finished {}", job.pid, job.label);
                }
                Ok(None) => i += 1,
                Err(_) => {
                    // Process table entry already gone; treat like reaped.
                    let job = self.entries.remove(i).job;
                    let _ = writeln!(out, "[{i}] {} finished {}", job.pid, job.label);
                }
            }
        }
    }

    /// Print `[<id>] <pid> <label>` for every tracked entry.
    pub fn print(&self, out: &mut impl Write) {
        for (id, entry) in self.entries.iter().enumerate() {
            let _ = writeln!(out, "[{id}] {} {}", entry.job.pid, entry.job.label);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "job_table_tests.rs"]
mod tests;
