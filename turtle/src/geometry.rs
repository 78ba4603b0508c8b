// pathfinder/turtle/src/geometry.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Points and axis-aligned bounds in turtle space (y grows upward).

use std::ops::{Add, Mul};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[inline]
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    #[inline]
    pub fn origin() -> Point2D {
        Point2D::default()
    }

    /// Unit vector pointing along `degrees`, measured counter-clockwise from
    /// the positive x axis. Quarter turns are exact.
    pub fn unit(degrees: f64) -> Point2D {
        if degrees == 0.0 {
            Point2D::new(1.0, 0.0)
        } else if degrees == 90.0 {
            Point2D::new(0.0, 1.0)
        } else if degrees == 180.0 {
            Point2D::new(-1.0, 0.0)
        } else if degrees == 270.0 {
            Point2D::new(0.0, -1.0)
        } else {
            let (s, c) = degrees.to_radians().sin_cos();
            Point2D::new(c, s)
        }
    }
}

impl Add for Point2D {
    type Output = Point2D;
    #[inline]
    fn add(self, other: Point2D) -> Point2D {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;
    #[inline]
    fn mul(self, factor: f64) -> Point2D {
        Point2D::new(self.x * factor, self.y * factor)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF64 {
    pub min: Point2D,
    pub max: Point2D,
}

impl RectF64 {
    #[inline]
    pub fn new(min: Point2D, max: Point2D) -> RectF64 {
        RectF64 { min, max }
    }

    pub fn around(center: Point2D, radius: f64) -> RectF64 {
        let radius = radius.abs();
        RectF64::new(
            Point2D::new(center.x - radius, center.y - radius),
            Point2D::new(center.x + radius, center.y + radius),
        )
    }

    pub fn union_point(&self, point: Point2D) -> RectF64 {
        RectF64::new(
            Point2D::new(self.min.x.min(point.x), self.min.y.min(point.y)),
            Point2D::new(self.max.x.max(point.x), self.max.y.max(point.y)),
        )
    }

    #[inline]
    pub fn union_rect(&self, other: RectF64) -> RectF64 {
        self.union_point(other.min).union_point(other.max)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
