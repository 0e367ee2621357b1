// SPDX-License-Identifier: MIT

//! AST produced by the parser: [`Pipeline`], [`SimpleCommand`], [`Redirection`].
//!
//! Deliberately flat: no `AndOrList`, no subshells, no brace groups, no
//! word-part/variable AST (expansion is a flat runtime string rewrite, see
//! [`crate::expand`]) — this shell has no control flow or grouping
//! constructs to model.

use crate::token::OpKind;

/// An ordered sequence of unexpanded argument strings; position 0 is the
/// program name. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimpleCommand {
    pub words: Vec<String>,
}

impl SimpleCommand {
    pub fn name(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }
}

/// The operator and the stage/word it attaches to.
///
/// For `Pipe`, `command_index` is the index, in `Pipeline::commands`, of
/// the stage that just finished; `target_word_index` is unused. For the
/// I/O operators, `command_index` names the stage being accumulated when
/// the operator was read, and `target_word_index` is the position of the
/// filename word within that stage's `words` — the parser pushes the
/// filename onto the stage's word list (so argv indexing stays aligned
/// with where the token appeared) and the launcher excludes it from the
/// program's argv when it builds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirection {
    pub kind: OpKind,
    pub command_index: usize,
    pub target_word_index: Option<usize>,
}

/// A parsed, validated pipeline: the parser only ever hands back values
/// where every `Pipe` is followed by another command, every I/O operator's
/// target word exists, and `Background` appears at most once, as the
/// terminal token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pipeline {
    pub commands: Vec<SimpleCommand>,
    pub redirections: Vec<Redirection>,
    pub background: bool,
}

impl Pipeline {
    /// The filename target word for an I/O redirection.
    pub fn redirection_target(&self, redir: &Redirection) -> Option<&str> {
        let idx = redir.target_word_index?;
        self.commands
            .get(redir.command_index)
            .and_then(|c| c.words.get(idx))
            .map(String::as_str)
    }
}

#[cfg(test)]
#[path = "ast_tests.rs"]
mod tests;
