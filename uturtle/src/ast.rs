// pathfinder/uturtle/src/ast.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Verb names and help lines follow the classic LOGO shell.

use std::fmt::{Display, Formatter, Result as FormatResult};

/// One whitespace-separated argument as it appeared on the line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Arg {
    Int(i64),
    Word(String),
}

impl Display for Arg {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        match self {
            Arg::Int(value) => write!(formatter, "{}", value),
            Arg::Word(word) => formatter.write_str(word),
        }
    }
}

/// A parsed line: the leading word plus everything after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement {
    pub verb: String,
    pub args: Vec<Arg>,
}

impl Statement {
    pub fn new(verb: &str, args: Vec<Arg>) -> Statement {
        Statement {
            verb: verb.to_owned(),
            args,
        }
    }

    #[inline]
    pub fn keyword(&self) -> Option<Keyword> {
        Keyword::lookup(&self.verb)
    }
}

impl Display for Statement {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        formatter.write_str(&self.verb)?;
        for arg in &self.args {
            write!(formatter, " {}", arg)?;
        }
        Ok(())
    }
}

/// Verbs that act on the drawing surface. These are the only ones a macro
/// can record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    Forward,
    Right,
    Left,
    Home,
    Circle,
    Position,
    Heading,
    Reset,
    Bye,
}

impl Verb {
    pub const ALL: &'static [Verb] = &[
        Verb::Forward,
        Verb::Right,
        Verb::Left,
        Verb::Home,
        Verb::Circle,
        Verb::Position,
        Verb::Heading,
        Verb::Reset,
        Verb::Bye,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Verb::Forward => "forward",
            Verb::Right => "right",
            Verb::Left => "left",
            Verb::Home => "home",
            Verb::Circle => "circle",
            Verb::Position => "position",
            Verb::Heading => "heading",
            Verb::Reset => "reset",
            Verb::Bye => "bye",
        }
    }

    /// Whether the verb requires exactly one integer argument.
    pub fn takes_integer(self) -> bool {
        match self {
            Verb::Forward | Verb::Right | Verb::Left | Verb::Circle => true,
            _ => false,
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            Verb::Forward => "Move the turtle forward by the specified distance:  FORWARD 10",
            Verb::Right => "Turn turtle right by given number of degrees:  RIGHT 20",
            Verb::Left => "Turn turtle left by given number of degrees:  LEFT 90",
            Verb::Home => "Return turtle to the home position:  HOME",
            Verb::Circle => "Draw circle with given radius:  CIRCLE 50",
            Verb::Position => "Print the current turtle position:  POSITION",
            Verb::Heading => "Print the current turtle heading in degrees:  HEADING",
            Verb::Reset => "Clear the screen and return turtle to center:  RESET",
            Verb::Bye => "Close the turtle window, and exit:  BYE",
        }
    }
}

/// Verbs handled by the shell itself. They steer the recorder and are never
/// recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Directive {
    Record,
    Stop,
    Playback,
    Help,
}

impl Directive {
    pub const ALL: &'static [Directive] = &[
        Directive::Record,
        Directive::Stop,
        Directive::Playback,
        Directive::Help,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Directive::Record => "record",
            Directive::Stop => "stop",
            Directive::Playback => "playback",
            Directive::Help => "help",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            Directive::Record => "Start recording a macro, dropping the previous one:  RECORD",
            Directive::Stop => "Stop recording the macro:  STOP",
            Directive::Playback => "Replay the recorded macro:  PLAYBACK",
            Directive::Help => "List available commands, or describe one:  HELP FORWARD",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Verb(Verb),
    Directive(Directive),
}

impl Keyword {
    /// Resolves a verb regardless of case. `?` is shorthand for `help`.
    pub fn lookup(name: &str) -> Option<Keyword> {
        if name == "?" {
            return Some(Keyword::Directive(Directive::Help));
        }
        let verb = Verb::ALL
            .iter()
            .find(|verb| verb.name().eq_ignore_ascii_case(name))
            .map(|verb| Keyword::Verb(*verb));
        verb.or_else(|| {
            Directive::ALL
                .iter()
                .find(|directive| directive.name().eq_ignore_ascii_case(name))
                .map(|directive| Keyword::Directive(*directive))
        })
    }

    /// Every keyword, sorted by name.
    pub fn all() -> Vec<Keyword> {
        let mut keywords: Vec<Keyword> = Verb::ALL
            .iter()
            .map(|verb| Keyword::Verb(*verb))
            .chain(Directive::ALL.iter().map(|directive| Keyword::Directive(*directive)))
            .collect();
        keywords.sort_by_key(|keyword| keyword.name());
        keywords
    }

    pub fn name(self) -> &'static str {
        match self {
            Keyword::Verb(verb) => verb.name(),
            Keyword::Directive(directive) => directive.name(),
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            Keyword::Verb(verb) => verb.help(),
            Keyword::Directive(directive) => directive.help(),
        }
    }
}
