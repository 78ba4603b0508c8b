// pathfinder/uturtle/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parses turtle shell lines into statements.

#[macro_use]
extern crate lalrpop_util;

pub mod ast;

lalrpop_mod!(pub turtle); // synthesized by LALRPOP

use thiserror::Error;

use crate::ast::Statement;

pub type Parser = turtle::StatementParser;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("cannot parse {line:?}: {message}")]
pub struct SyntaxError {
    pub line: String,
    pub message: String,
}

/// Parses one shell line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Statement>, SyntaxError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    Parser::new()
        .parse(trimmed)
        .map(Some)
        .map_err(|error| SyntaxError {
            line: trimmed.to_owned(),
            message: error.to_string(),
        })
}
