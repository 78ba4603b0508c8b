// pathfinder/turtle/src/command.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Deferred turtle actions.
//!
//! A [`Command`] binds an [`Action`] to the [`Target`] it acts on. Arguments
//! are checked when the command is built, so a command that exists can always
//! be executed, and executed again during playback.

use std::fmt;

use tracing::trace;
use uturtle::ast::{Arg, Verb};

use crate::error::{ArgumentError, SurfaceError};
use crate::surface::Target;

pub const FAREWELL: &str = "Thank you for using Turtle";

// Values this close to an integer are reported as that integer.
const SNAP_EPSILON: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Forward(i64),
    Right(i64),
    Left(i64),
    Home,
    Circle(i64),
    Position,
    Heading,
    Reset,
    Bye,
}

impl Action {
    /// Validates `args` for `verb`.
    pub fn parse(verb: Verb, args: &[Arg]) -> Result<Action, ArgumentError> {
        Ok(match verb {
            Verb::Forward => Action::Forward(integer(verb, args)?),
            Verb::Right => Action::Right(integer(verb, args)?),
            Verb::Left => Action::Left(integer(verb, args)?),
            Verb::Circle => Action::Circle(integer(verb, args)?),
            Verb::Home => {
                none(verb, args)?;
                Action::Home
            }
            Verb::Position => {
                none(verb, args)?;
                Action::Position
            }
            Verb::Heading => {
                none(verb, args)?;
                Action::Heading
            }
            Verb::Reset => {
                none(verb, args)?;
                Action::Reset
            }
            Verb::Bye => {
                none(verb, args)?;
                Action::Bye
            }
        })
    }

    pub fn verb(self) -> Verb {
        match self {
            Action::Forward(_) => Verb::Forward,
            Action::Right(_) => Verb::Right,
            Action::Left(_) => Verb::Left,
            Action::Home => Verb::Home,
            Action::Circle(_) => Verb::Circle,
            Action::Position => Verb::Position,
            Action::Heading => Verb::Heading,
            Action::Reset => Verb::Reset,
            Action::Bye => Verb::Bye,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Action::Forward(value)
            | Action::Right(value)
            | Action::Left(value)
            | Action::Circle(value) => write!(formatter, "{} {}", self.verb().name(), value),
            _ => formatter.write_str(self.verb().name()),
        }
    }
}

fn none(verb: Verb, args: &[Arg]) -> Result<(), ArgumentError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(ArgumentError::Unexpected {
            verb: verb.name(),
            expected: 0,
            got: args.len(),
        })
    }
}

fn integer(verb: Verb, args: &[Arg]) -> Result<i64, ArgumentError> {
    match args {
        [] => Err(ArgumentError::Missing { verb: verb.name() }),
        [Arg::Int(value)] => Ok(*value),
        [Arg::Word(word)] => Err(ArgumentError::NotAnInteger {
            verb: verb.name(),
            value: word.clone(),
        }),
        _ => Err(ArgumentError::Unexpected {
            verb: verb.name(),
            expected: 1,
            got: args.len(),
        }),
    }
}

/// One action bound to the surface it will run against.
#[derive(Clone)]
pub struct Command {
    action: Action,
    target: Target,
}

impl Command {
    /// Builds the command for `verb`, rejecting bad arguments before anything
    /// touches the surface.
    pub fn new(verb: Verb, args: &[Arg], target: &Target) -> Result<Command, ArgumentError> {
        Ok(Command::from_action(Action::parse(verb, args)?, target))
    }

    pub fn from_action(action: Action, target: &Target) -> Command {
        Command {
            action,
            target: target.clone(),
        }
    }

    #[inline]
    pub fn action(&self) -> Action {
        self.action
    }

    pub fn execute(&self) -> Result<(), SurfaceError> {
        trace!(command = %self.action, "execute");
        let target = &self.target;
        match self.action {
            Action::Forward(distance) => target.with_surface(|s| s.forward(distance as f64)),
            Action::Right(degrees) => target.with_surface(|s| s.right(degrees as f64)),
            Action::Left(degrees) => target.with_surface(|s| s.left(degrees as f64)),
            Action::Home => target.with_surface(|s| s.home()),
            Action::Circle(radius) => target.with_surface(|s| s.circle(radius as f64)),
            // Reports snap near-integers before truncating instead of plain
            // truncation toward zero, so -49.9999999 reports as -50.
            Action::Position => {
                let position = target.position()?;
                target.report(format_args!(
                    "Current position is {} {}",
                    truncate(position.x),
                    truncate(position.y)
                ))
            }
            Action::Heading => {
                let heading = target.heading()?;
                target.report(format_args!("Current heading is {}", truncate(heading)))
            }
            Action::Reset => target.with_surface(|s| s.reset()),
            Action::Bye => {
                if target.is_closed() {
                    return Err(SurfaceError::Closed);
                }
                // The surface closes even when the farewell cannot be written.
                let farewell = target.report(format_args!("{}", FAREWELL));
                let closed = target.close();
                farewell.and(closed)
            }
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter
            .debug_struct("Command")
            .field("action", &self.action)
            .finish()
    }
}

/// Truncates toward zero after absorbing floating-point noise.
fn truncate(value: f64) -> i64 {
    let nearest = value.round();
    if (value - nearest).abs() < SNAP_EPSILON {
        nearest as i64
    } else {
        value.trunc() as i64
    }
}
