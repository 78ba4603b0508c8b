// pathfinder/turtle/src/scene.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shapes drawn by the turtle, and their SVG serialization.

use std::io::{self, Write};

use crate::geometry::{Point2D, RectF64};

const STROKE_WIDTH: f64 = 1.0;
const VIEW_MARGIN: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Line { from: Point2D, to: Point2D },
    Circle { center: Point2D, radius: f64 },
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub shapes: Vec<Shape>,
    pub bounds: RectF64,
}

impl Scene {
    pub fn new() -> Scene {
        Scene::default()
    }

    pub fn push_line(&mut self, from: Point2D, to: Point2D) {
        self.bounds = self.bounds.union_point(from).union_point(to);
        self.shapes.push(Shape::Line { from, to });
    }

    pub fn push_circle(&mut self, center: Point2D, radius: f64) {
        let radius = radius.abs();
        self.bounds = self.bounds.union_rect(RectF64::around(center, radius));
        self.shapes.push(Shape::Circle { center, radius });
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Writes the scene as a standalone SVG document. Turtle space has y
    /// pointing up, so every y coordinate is mirrored.
    pub fn write_svg<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        let view_x = self.bounds.min.x - VIEW_MARGIN;
        let view_y = mirror(self.bounds.max.y) - VIEW_MARGIN;
        let view_width = self.bounds.width() + VIEW_MARGIN * 2.0;
        let view_height = self.bounds.height() + VIEW_MARGIN * 2.0;

        writeln!(
            writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            view_x, view_y, view_width, view_height
        )?;
        writeln!(
            writer,
            r#"  <g fill="none" stroke="black" stroke-width="{}">"#,
            STROKE_WIDTH
        )?;
        for shape in &self.shapes {
            match *shape {
                Shape::Line { from, to } => writeln!(
                    writer,
                    r#"    <line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                    from.x,
                    mirror(from.y),
                    to.x,
                    mirror(to.y)
                )?,
                Shape::Circle { center, radius } => writeln!(
                    writer,
                    r#"    <circle cx="{}" cy="{}" r="{}"/>"#,
                    center.x,
                    mirror(center.y),
                    radius
                )?,
            }
        }
        writeln!(writer, "  </g>")?;
        writeln!(writer, "</svg>")
    }
}

#[inline]
fn mirror(y: f64) -> f64 {
    // Avoid printing "-0".
    if y == 0.0 {
        0.0
    } else {
        -y
    }
}
