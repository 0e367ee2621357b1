// SPDX-License-Identifier: MIT

//! Parser error type — one variant per structural validation rule the
//! parser enforces.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("redirection operator '{op}' has no target")]
    DanglingRedirection { op: &'static str },

    #[error("'&' must be the last token on the line")]
    BackgroundNotTerminal,

    #[error("'|' must be followed by another command")]
    PipeWithoutCommand,
}
