// pathfinder/turtle/src/session.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Routes shell lines to the recorder.

use tracing::debug;
use uturtle::ast::{Arg, Directive, Keyword, Statement};

use crate::command::Command;
use crate::error::{ArgumentError, ShellError, SurfaceError};
use crate::recorder::Recorder;
use crate::surface::Target;

pub const INTRO: &str = "Welcome to the turtle shell.   Type help or ? to list commands.";
pub const PROMPT: &str = "(turtle) ";

const HELP_HEADER: &str = "Documented commands (type help <topic>):";

/// One shell session: a recorder and the surface its commands draw on.
#[derive(Debug)]
pub struct Session {
    recorder: Recorder,
    target: Target,
}

impl Session {
    pub fn new(target: Target) -> Session {
        Session {
            recorder: Recorder::new(),
            target,
        }
    }

    #[inline]
    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    #[inline]
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// The session is over once its surface has been closed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.target.is_closed()
    }

    pub fn execute_line(&mut self, line: &str) -> Result<(), ShellError> {
        let statement = match uturtle::parse_line(line) {
            Ok(Some(statement)) => statement,
            Ok(None) => return Ok(()),
            Err(error) => {
                debug!(%error, "unparsable line");
                return Err(ShellError::UnknownCommand(error.line));
            }
        };
        self.dispatch(&statement)
    }

    pub fn dispatch(&mut self, statement: &Statement) -> Result<(), ShellError> {
        let keyword = statement
            .keyword()
            .ok_or_else(|| ShellError::UnknownCommand(statement.to_string()))?;

        match keyword {
            Keyword::Verb(verb) => {
                let command = Command::new(verb, &statement.args, &self.target)?;
                self.recorder.run(command)?;
            }
            Keyword::Directive(Directive::Record) => {
                no_arguments(Directive::Record, &statement.args)?;
                self.recorder.start_recording();
            }
            Keyword::Directive(Directive::Stop) => {
                no_arguments(Directive::Stop, &statement.args)?;
                self.recorder.stop_recording();
            }
            Keyword::Directive(Directive::Playback) => {
                no_arguments(Directive::Playback, &statement.args)?;
                self.recorder.run_all()?;
            }
            Keyword::Directive(Directive::Help) => match statement.args.as_slice() {
                [] => self.help_index()?,
                [topic] => self.help_topic(topic)?,
                args => {
                    return Err(ArgumentError::Unexpected {
                        verb: Directive::Help.name(),
                        expected: 1,
                        got: args.len(),
                    }
                    .into())
                }
            },
        }
        Ok(())
    }

    /// Closes the surface unless something already did.
    pub fn finish(&mut self) -> Result<(), SurfaceError> {
        if self.target.is_closed() {
            return Ok(());
        }
        debug!("closing surface at end of input");
        self.target.close()
    }

    fn help_index(&self) -> Result<(), SurfaceError> {
        let names: Vec<&str> = Keyword::all().into_iter().map(Keyword::name).collect();
        self.target.report(format_args!("{}", HELP_HEADER))?;
        self.target
            .report(format_args!("{}", "=".repeat(HELP_HEADER.len())))?;
        self.target.report(format_args!("{}\n", names.join("  ")))
    }

    fn help_topic(&self, topic: &Arg) -> Result<(), SurfaceError> {
        let name = topic.to_string();
        match Keyword::lookup(&name) {
            Some(keyword) => self.target.report(format_args!("{}", keyword.help())),
            None => self.target.report(format_args!("*** No help on {}", name)),
        }
    }
}

fn no_arguments(directive: Directive, args: &[Arg]) -> Result<(), ArgumentError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(ArgumentError::Unexpected {
            verb: directive.name(),
            expected: 0,
            got: args.len(),
        })
    }
}
