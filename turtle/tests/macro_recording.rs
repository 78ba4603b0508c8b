// pathfinder/turtle/tests/macro_recording.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shell-level behavior of recording and playback.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use turtle_macro::geometry::Point2D;
use turtle_macro::{
    Action, ArgumentError, Canvas, Session, ShellError, Surface, SurfaceError, Target,
};

struct Harness {
    canvas: Rc<RefCell<Canvas>>,
    output: Rc<RefCell<Vec<u8>>>,
    session: Session,
}

impl Harness {
    fn new() -> Harness {
        let canvas = Rc::new(RefCell::new(Canvas::new()));
        let output = Rc::new(RefCell::new(Vec::new()));
        let session = Session::new(Target::new(canvas.clone(), output.clone()));
        Harness {
            canvas,
            output,
            session,
        }
    }

    fn run(&mut self, lines: &[&str]) {
        for line in lines {
            self.session
                .execute_line(line)
                .unwrap_or_else(|error| panic!("{:?} failed: {}", line, error));
        }
    }

    fn position(&self) -> Point2D {
        self.canvas.borrow().position().unwrap()
    }

    fn heading(&self) -> f64 {
        self.canvas.borrow().heading().unwrap()
    }

    fn shapes(&self) -> usize {
        self.canvas.borrow().scene.shapes.len()
    }

    fn output(&self) -> Vec<String> {
        String::from_utf8(self.output.borrow().clone())
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    fn recorded(&self) -> Vec<Action> {
        self.session
            .recorder()
            .commands()
            .iter()
            .map(|command| command.action())
            .collect()
    }
}

#[test]
fn bad_arguments_never_reach_the_surface() {
    let mut harness = Harness::new();
    harness.run(&["record"]);

    for line in &["forward", "forward ten", "right 1.5", "left 9x", "circle", "circle 1 2"] {
        match harness.session.execute_line(line) {
            Err(ShellError::Argument(_)) => {}
            other => panic!("{:?} should be an argument error, got {:?}", line, other),
        }
    }

    assert_eq!(harness.position(), Point2D::origin());
    assert_eq!(harness.shapes(), 0);
    assert!(harness.recorded().is_empty());
}

#[test]
fn argument_errors_name_the_verb() {
    let mut harness = Harness::new();
    match harness.session.execute_line("FORWARD fifty") {
        Err(ShellError::Argument(error)) => {
            assert_eq!(
                error,
                ArgumentError::NotAnInteger {
                    verb: "forward",
                    value: "fifty".to_owned()
                }
            );
            assert_eq!(error.to_string(), r#"forward: "fifty" is not an integer"#);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn playback_repeats_the_macro_in_order() {
    let mut harness = Harness::new();
    harness.run(&["record", "forward 10", "left 90", "forward 20", "stop"]);
    assert_eq!(harness.position(), Point2D::new(10.0, 20.0));
    assert_eq!(
        harness.recorded(),
        vec![Action::Forward(10), Action::Left(90), Action::Forward(20)]
    );

    harness.run(&["playback"]);
    assert_eq!(harness.position(), Point2D::new(-10.0, 30.0));
    assert_eq!(harness.heading(), 180.0);

    harness.run(&["playback"]);
    assert_eq!(harness.position(), Point2D::new(-20.0, 10.0));
    assert_eq!(harness.heading(), 270.0);
    assert_eq!(harness.shapes(), 6);
}

#[test]
fn recording_again_discards_the_previous_macro() {
    let mut harness = Harness::new();
    harness.run(&[
        "record",
        "forward 100",
        "stop",
        "record",
        "left 90",
        "stop",
        "playback",
    ]);

    assert_eq!(harness.recorded(), vec![Action::Left(90)]);
    assert_eq!(harness.position(), Point2D::new(100.0, 0.0));
    assert_eq!(harness.heading(), 180.0);
}

#[test]
fn idle_commands_are_not_recorded() {
    let mut harness = Harness::new();
    harness.run(&["forward 5", "record", "right 90", "stop", "forward 5", "home"]);

    assert_eq!(harness.recorded(), vec![Action::Right(90)]);
    harness.run(&["playback"]);
    assert_eq!(harness.position(), Point2D::origin());
    assert_eq!(harness.heading(), 270.0);
}

#[test]
fn empty_playback_is_a_no_op() {
    let mut harness = Harness::new();
    harness.run(&["playback"]);
    harness.run(&["record", "stop", "playback"]);

    assert_eq!(harness.position(), Point2D::origin());
    assert_eq!(harness.shapes(), 0);
    assert!(harness.output().is_empty());
}

#[test]
fn square_corner_replays_from_current_state() {
    let mut harness = Harness::new();
    harness.run(&[
        "record",
        "forward 50",
        "right 90",
        "forward 50",
        "stop",
        "position",
        "heading",
    ]);
    assert_eq!(
        harness.output(),
        vec!["Current position is 50 -50", "Current heading is 270"]
    );

    harness.run(&["playback", "position", "heading"]);
    assert_eq!(
        harness.output()[2..].to_vec(),
        vec!["Current position is 0 -100", "Current heading is 180"]
    );
}

#[test]
fn reports_are_recorded_like_any_command() {
    let mut harness = Harness::new();
    harness.run(&["record", "forward 7", "position", "stop", "playback"]);

    assert_eq!(
        harness.output(),
        vec!["Current position is 7 0", "Current position is 14 0"]
    );
}

#[test]
fn verbs_are_case_insensitive() {
    let mut harness = Harness::new();
    harness.run(&["RECORD", "Forward 3", "STOP", "PlayBack"]);
    assert_eq!(harness.position(), Point2D::new(6.0, 0.0));
}

#[test]
fn unknown_verbs_change_nothing() {
    let mut harness = Harness::new();
    harness.run(&["record"]);

    for line in &["jump 10", "42", "fd 10"] {
        match harness.session.execute_line(line) {
            Err(ShellError::UnknownCommand(text)) => assert_eq!(text, *line),
            other => panic!("{:?} should be unknown, got {:?}", line, other),
        }
    }
    let error = harness.session.execute_line("jump").unwrap_err();
    assert_eq!(error.to_string(), "*** Unknown syntax: jump");

    assert!(harness.session.recorder().is_recording());
    assert!(harness.recorded().is_empty());
}

#[test]
fn blank_and_comment_lines_are_ignored() {
    let mut harness = Harness::new();
    harness.run(&["", "   ", "# nothing to see"]);
    assert!(harness.output().is_empty());
}

#[test]
fn directives_reject_arguments() {
    let mut harness = Harness::new();
    assert!(matches!(
        harness.session.execute_line("record now"),
        Err(ShellError::Argument(ArgumentError::Unexpected { .. }))
    ));
    assert!(!harness.session.recorder().is_recording());
}

#[test]
fn bye_ends_the_session() {
    let mut harness = Harness::new();
    harness.run(&["forward 1", "bye"]);

    assert!(harness.session.is_finished());
    assert_eq!(harness.output(), vec!["Thank you for using Turtle"]);
    assert!(matches!(
        harness.session.execute_line("forward 1"),
        Err(ShellError::Surface(SurfaceError::Closed))
    ));
    harness.session.finish().unwrap();
}

#[test]
fn finish_closes_an_open_surface() {
    let mut harness = Harness::new();
    harness.run(&["forward 1"]);
    assert!(!harness.session.is_finished());

    harness.session.finish().unwrap();
    assert!(harness.session.is_finished());
    assert!(harness.output().is_empty());
}

#[test]
fn help_lists_and_describes_commands() {
    let mut harness = Harness::new();
    harness.run(&["help", "? circle", "help jump"]);

    let output = harness.output();
    assert_eq!(output[0], "Documented commands (type help <topic>):");
    assert_eq!(output[1], "=".repeat(output[0].len()));
    assert!(output[2].starts_with("bye  circle  forward"));
    assert!(output.contains(&"Draw circle with given radius:  CIRCLE 50".to_owned()));
    assert_eq!(output.last().unwrap(), "*** No help on jump");
    assert!(harness.recorded().is_empty());
}

/// An output sink whose reader has gone away.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn bye_closes_the_surface_even_when_the_farewell_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawing.svg");
    let canvas = Rc::new(RefCell::new(Canvas::with_output(&path)));
    let output = Rc::new(RefCell::new(ClosedPipe));
    let mut session = Session::new(Target::new(canvas.clone(), output));

    session.execute_line("forward 10").unwrap();
    assert!(matches!(
        session.execute_line("bye"),
        Err(ShellError::Surface(SurfaceError::Output(_)))
    ));

    assert!(session.is_finished());
    assert!(canvas.borrow().is_closed());
    assert!(std::fs::read_to_string(&path).unwrap().contains("<line "));
    assert!(matches!(
        session.execute_line("forward 10"),
        Err(ShellError::Surface(SurfaceError::Closed))
    ));
    assert_eq!(canvas.borrow().scene.shapes.len(), 1);
}

/// Remembers what the output sink held at the moment it was closed.
struct Probe {
    output: Rc<RefCell<Vec<u8>>>,
    seen_at_close: Option<String>,
}

impl Probe {
    fn check(&self) -> Result<(), SurfaceError> {
        if self.is_closed() {
            Err(SurfaceError::Closed)
        } else {
            Ok(())
        }
    }

    fn reopen(&mut self) {
        self.seen_at_close = None;
        self.output.borrow_mut().clear();
    }

    fn written(&self) -> String {
        String::from_utf8(self.output.borrow().clone()).unwrap()
    }
}

impl Surface for Probe {
    fn forward(&mut self, _: f64) -> Result<(), SurfaceError> {
        self.check()
    }
    fn right(&mut self, _: f64) -> Result<(), SurfaceError> {
        self.check()
    }
    fn left(&mut self, _: f64) -> Result<(), SurfaceError> {
        self.check()
    }
    fn home(&mut self) -> Result<(), SurfaceError> {
        self.check()
    }
    fn circle(&mut self, _: f64) -> Result<(), SurfaceError> {
        self.check()
    }
    fn position(&self) -> Result<Point2D, SurfaceError> {
        self.check().map(|_| Point2D::origin())
    }
    fn heading(&self) -> Result<f64, SurfaceError> {
        self.check().map(|_| 0.0)
    }
    fn reset(&mut self) -> Result<(), SurfaceError> {
        self.check()
    }
    fn close(&mut self) -> Result<(), SurfaceError> {
        self.check()?;
        self.seen_at_close = Some(self.written());
        Ok(())
    }
    fn is_closed(&self) -> bool {
        self.seen_at_close.is_some()
    }
}

fn probe_session() -> (Rc<RefCell<Probe>>, Session) {
    let output = Rc::new(RefCell::new(Vec::new()));
    let probe = Rc::new(RefCell::new(Probe {
        output: output.clone(),
        seen_at_close: None,
    }));
    let session = Session::new(Target::new(probe.clone(), output));
    (probe, session)
}

#[test]
fn bye_says_farewell_before_closing() {
    let (probe, mut session) = probe_session();
    session.execute_line("bye").unwrap();

    assert_eq!(
        probe.borrow().seen_at_close.as_deref(),
        Some("Thank you for using Turtle\n")
    );
}

#[test]
fn replayed_bye_closes_and_aborts_the_rest() {
    let (probe, mut session) = probe_session();
    for line in &["record", "heading", "bye"] {
        session.execute_line(line).unwrap();
    }
    probe.borrow_mut().reopen();
    for line in &["heading", "stop"] {
        session.execute_line(line).unwrap();
    }
    assert_eq!(session.recorder().commands().len(), 3);

    probe.borrow_mut().reopen();
    assert!(matches!(
        session.execute_line("playback"),
        Err(ShellError::Surface(SurfaceError::Closed))
    ));

    let expected = "Current heading is 0\nThank you for using Turtle\n";
    assert_eq!(probe.borrow().seen_at_close.as_deref(), Some(expected));
    assert_eq!(probe.borrow().written(), expected);
    assert!(session.is_finished());
}

proptest! {
    #[test]
    fn playback_reproduces_the_live_run(
        moves in prop::collection::vec((0..4u8, -200i64..200), 0..24),
        noise in prop::collection::vec(-200i64..200, 0..4),
    ) {
        let mut harness = Harness::new();
        for value in &noise {
            let line = format!("forward {}", value);
            harness.run(&[line.as_str(), "left 45"]);
        }

        harness.run(&["home", "record"]);
        for (verb, value) in &moves {
            let verb = ["forward", "right", "left", "circle"][*verb as usize];
            let line = format!("{} {}", verb, value);
            harness.run(&[line.as_str()]);
        }
        harness.run(&["stop"]);
        let live = (harness.position(), harness.heading());

        for value in &noise {
            let line = format!("forward {}", value);
            harness.run(&[line.as_str()]);
        }
        harness.run(&["home", "playback"]);
        let replayed = (harness.position(), harness.heading());

        prop_assert!((live.0.x - replayed.0.x).abs() < 1e-6);
        prop_assert!((live.0.y - replayed.0.y).abs() < 1e-6);
        prop_assert!((live.1 - replayed.1).abs() < 1e-6);
        prop_assert_eq!(harness.recorded().len(), moves.len());
    }
}
