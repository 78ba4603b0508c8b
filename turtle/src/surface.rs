// pathfinder/turtle/src/surface.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

use crate::error::SurfaceError;
use crate::geometry::Point2D;

/// Something a turtle can draw on.
///
/// Headings are in degrees, counter-clockwise from the positive x axis. Once
/// closed, every operation fails with [`SurfaceError::Closed`].
pub trait Surface {
    fn forward(&mut self, distance: f64) -> Result<(), SurfaceError>;
    fn right(&mut self, degrees: f64) -> Result<(), SurfaceError>;
    fn left(&mut self, degrees: f64) -> Result<(), SurfaceError>;
    fn home(&mut self) -> Result<(), SurfaceError>;
    fn circle(&mut self, radius: f64) -> Result<(), SurfaceError>;
    fn position(&self) -> Result<Point2D, SurfaceError>;
    fn heading(&self) -> Result<f64, SurfaceError>;
    fn reset(&mut self) -> Result<(), SurfaceError>;
    fn close(&mut self) -> Result<(), SurfaceError>;
    fn is_closed(&self) -> bool;
}

pub type SharedSurface = Rc<RefCell<dyn Surface>>;
pub type SharedOutput = Rc<RefCell<dyn Write>>;

/// The surface plus the sink that position and heading reports go to.
///
/// Cloning is cheap and every clone refers to the same surface; each command
/// keeps one.
#[derive(Clone)]
pub struct Target {
    surface: SharedSurface,
    output: SharedOutput,
}

impl Target {
    pub fn new(surface: SharedSurface, output: SharedOutput) -> Target {
        Target { surface, output }
    }

    /// Reports go to standard output.
    pub fn stdout(surface: SharedSurface) -> Target {
        Target::new(surface, Rc::new(RefCell::new(io::stdout())))
    }

    pub(crate) fn with_surface<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut dyn Surface) -> R,
    {
        let mut surface = self.surface.borrow_mut();
        f(&mut *surface)
    }

    pub(crate) fn position(&self) -> Result<Point2D, SurfaceError> {
        self.surface.borrow().position()
    }

    pub(crate) fn heading(&self) -> Result<f64, SurfaceError> {
        self.surface.borrow().heading()
    }

    /// Writes one line to the output sink.
    pub fn report(&self, line: fmt::Arguments) -> Result<(), SurfaceError> {
        let mut output = self.output.borrow_mut();
        output.write_fmt(line)?;
        output.write_all(b"\n")?;
        output.flush()?;
        Ok(())
    }

    pub fn close(&self) -> Result<(), SurfaceError> {
        self.surface.borrow_mut().close()
    }

    pub fn is_closed(&self) -> bool {
        self.surface.borrow().is_closed()
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter
            .debug_struct("Target")
            .field(
                "closed",
                &self.surface.try_borrow().ok().map(|surface| surface.is_closed()),
            )
            .finish()
    }
}
