// pathfinder/turtle/src/canvas.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The in-memory drawing surface used by the shell.

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::SurfaceError;
use crate::geometry::Point2D;
use crate::scene::Scene;
use crate::surface::Surface;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CanvasFlags: u8 {
        const CLOSED = 0x01;
        const DIRTY  = 0x02;
    }
}

impl Display for CanvasFlags {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        if self.is_empty() {
            return formatter.write_str("clean");
        }
        for (index, (_, flag)) in self.iter_names().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            formatter.write_str(if flag == CanvasFlags::CLOSED {
                "closed"
            } else {
                "unsaved changes"
            })?;
        }
        Ok(())
    }
}

#[derive(Debug)]
struct TurtleState {
    position: Point2D,
    direction: f64,
}

impl TurtleState {
    fn new() -> TurtleState {
        TurtleState {
            position: Point2D::origin(),
            direction: 0.0,
        }
    }

    fn turn(&mut self, degrees: f64) {
        self.direction = (((self.direction + degrees) % 360.0) + 360.0) % 360.0;
    }
}

/// A surface that keeps every shape in memory and can write them out as SVG.
#[derive(Debug)]
pub struct Canvas {
    pub scene: Scene,
    state: TurtleState,
    flags: CanvasFlags,
    output: Option<PathBuf>,
}

impl Canvas {
    pub fn new() -> Canvas {
        Canvas {
            scene: Scene::new(),
            state: TurtleState::new(),
            flags: CanvasFlags::DIRTY,
            output: None,
        }
    }

    /// A canvas that writes its drawing to `path` whenever it is flushed.
    pub fn with_output<P>(path: P) -> Canvas
    where
        P: AsRef<Path>,
    {
        Canvas {
            output: Some(path.as_ref().to_path_buf()),
            ..Canvas::new()
        }
    }

    #[inline]
    pub fn flags(&self) -> CanvasFlags {
        self.flags
    }

    /// Writes the scene to the output path, if there is one and something
    /// changed since the last flush.
    pub fn flush(&mut self) -> Result<(), SurfaceError> {
        let path = match self.output {
            Some(ref path) if self.flags.contains(CanvasFlags::DIRTY) => path,
            _ => return Ok(()),
        };

        debug!(path = %path.display(), shapes = self.scene.shapes.len(), "flushing canvas");
        let write = File::create(path).and_then(|file| {
            let mut writer = BufWriter::new(file);
            self.scene.write_svg(&mut writer)?;
            writer.flush()
        });
        write.map_err(|error| SurfaceError::Flush {
            path: path.clone(),
            error,
        })?;

        self.flags.remove(CanvasFlags::DIRTY);
        Ok(())
    }

    fn check_open(&self) -> Result<(), SurfaceError> {
        if self.flags.contains(CanvasFlags::CLOSED) {
            Err(SurfaceError::Closed)
        } else {
            Ok(())
        }
    }

    fn line_to(&mut self, to: Point2D) {
        self.scene.push_line(self.state.position, to);
        self.state.position = to;
        self.flags.insert(CanvasFlags::DIRTY);
    }
}

impl Default for Canvas {
    fn default() -> Canvas {
        Canvas::new()
    }
}

impl Surface for Canvas {
    fn forward(&mut self, distance: f64) -> Result<(), SurfaceError> {
        self.check_open()?;
        let to = self.state.position + Point2D::unit(self.state.direction) * distance;
        trace!(distance, x = to.x, y = to.y, "forward");
        self.line_to(to);
        Ok(())
    }

    fn right(&mut self, degrees: f64) -> Result<(), SurfaceError> {
        self.check_open()?;
        self.state.turn(-degrees);
        Ok(())
    }

    fn left(&mut self, degrees: f64) -> Result<(), SurfaceError> {
        self.check_open()?;
        self.state.turn(degrees);
        Ok(())
    }

    fn home(&mut self) -> Result<(), SurfaceError> {
        self.check_open()?;
        if self.state.position != Point2D::origin() {
            self.line_to(Point2D::origin());
        }
        self.state.direction = 0.0;
        Ok(())
    }

    fn circle(&mut self, radius: f64) -> Result<(), SurfaceError> {
        self.check_open()?;
        if radius == 0.0 {
            return Ok(());
        }
        // The center sits on the turtle's left; a negative radius mirrors it.
        let normal = Point2D::unit((self.state.direction + 90.0) % 360.0);
        let center = self.state.position + normal * radius;
        trace!(radius, x = center.x, y = center.y, "circle");
        self.scene.push_circle(center, radius);
        self.flags.insert(CanvasFlags::DIRTY);
        Ok(())
    }

    fn position(&self) -> Result<Point2D, SurfaceError> {
        self.check_open()?;
        Ok(self.state.position)
    }

    fn heading(&self) -> Result<f64, SurfaceError> {
        self.check_open()?;
        Ok(self.state.direction)
    }

    fn reset(&mut self) -> Result<(), SurfaceError> {
        self.check_open()?;
        self.state = TurtleState::new();
        self.scene = Scene::new();
        self.flags.insert(CanvasFlags::DIRTY);
        Ok(())
    }

    fn close(&mut self) -> Result<(), SurfaceError> {
        self.check_open()?;
        debug!(flags = %self.flags, "closing canvas");
        let flushed = self.flush();
        self.flags.insert(CanvasFlags::CLOSED);
        flushed
    }

    fn is_closed(&self) -> bool {
        self.flags.contains(CanvasFlags::CLOSED)
    }
}
