// pathfinder/turtle/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Drives a turtle from shell commands, with macro recording and playback.
//!
//! A [`Session`] parses each line, builds a [`Command`] bound to the shared
//! [`Target`], and hands it to its [`Recorder`], which executes it and keeps
//! it while a recording is in progress.

#[macro_use]
extern crate bitflags;

pub mod canvas;
pub mod command;
pub mod error;
pub mod geometry;
pub mod recorder;
pub mod scene;
pub mod session;
pub mod surface;

pub use crate::canvas::{Canvas, CanvasFlags};
pub use crate::command::{Action, Command};
pub use crate::error::{ArgumentError, ShellError, SurfaceError};
pub use crate::recorder::{Recorder, RecorderState};
pub use crate::session::Session;
pub use crate::surface::{SharedOutput, SharedSurface, Surface, Target};
