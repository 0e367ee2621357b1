// SPDX-License-Identifier: MIT

//! Parser: assembles a token stream into a validated [`Pipeline`] in a
//! single left-to-right walk. Words accumulate into the current
//! [`SimpleCommand`]; `Pipe` closes the current stage and starts the next
//! one; the I/O operators record a [`Redirection`] and consume the
//! following word as their target; `Background` sets the pipeline's flag
//! and must be the final token.

use crate::ast::{Pipeline, Redirection, SimpleCommand};
use crate::parse_error::ParseError;
use crate::token::{OpKind, Token, TokenKind};

pub fn parse(tokens: &[Token]) -> Result<Pipeline, ParseError> {
    if tokens.is_empty() {
        return Ok(Pipeline::default());
    }

    let mut commands = Vec::new();
    let mut current = SimpleCommand::default();
    let mut redirections = Vec::new();
    let mut background = false;

    let mut i = 0;
    while i < tokens.len() {
        let tok = &tokens[i];
        match &tok.kind {
            TokenKind::Word(w) => {
                current.words.push(w.clone());
            }
            TokenKind::Operator(OpKind::Pipe) => {
                if i + 1 >= tokens.len() {
                    return Err(ParseError::PipeWithoutCommand);
                }
                redirections.push(Redirection {
                    kind: OpKind::Pipe,
                    command_index: commands.len(),
                    target_word_index: None,
                });
                commands.push(std::mem::take(&mut current));
            }
            TokenKind::Operator(op @ (OpKind::WriteOut | OpKind::AppendOut | OpKind::ReadIn)) => {
                let Some(target_tok) = tokens.get(i + 1) else {
                    return Err(ParseError::DanglingRedirection { op: op_name(*op) });
                };
                let TokenKind::Word(target) = &target_tok.kind else {
                    return Err(ParseError::DanglingRedirection { op: op_name(*op) });
                };
                current.words.push(target.clone());
                redirections.push(Redirection {
                    kind: *op,
                    command_index: commands.len(),
                    target_word_index: Some(current.words.len() - 1),
                });
                i += 1; // consumed the target word
            }
            TokenKind::Operator(OpKind::Background) => {
                if i + 1 != tokens.len() {
                    return Err(ParseError::BackgroundNotTerminal);
                }
                background = true;
            }
        }
        i += 1;
    }

    commands.push(current);

    Ok(Pipeline {
        commands,
        redirections,
        background,
    })
}

fn op_name(op: OpKind) -> &'static str {
    match op {
        OpKind::Pipe => "|",
        OpKind::AppendOut => ">>",
        OpKind::WriteOut => ">",
        OpKind::ReadIn => "<",
        OpKind::Background => "&",
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
