// pathfinder/turtle/src/error.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A command was issued with arguments it cannot accept. Raised while the
/// command is being built, so nothing reaches the surface or the recorder.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("{verb}: missing integer argument")]
    Missing { verb: &'static str },

    #[error("{verb}: {value:?} is not an integer")]
    NotAnInteger { verb: &'static str, value: String },

    #[error("{verb}: expected {expected} argument(s), got {got}")]
    Unexpected {
        verb: &'static str,
        expected: usize,
        got: usize,
    },
}

/// The drawing surface could not carry out an operation.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("the turtle surface is closed")]
    Closed,

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),

    #[error("failed to write drawing to {}: {error}", .path.display())]
    Flush {
        path: PathBuf,
        #[source]
        error: io::Error,
    },
}

/// Anything that can go wrong handling one shell line.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("*** Unknown syntax: {0}")]
    UnknownCommand(String),

    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
