// pathfinder/demo/native-turtle/src/main.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! An interactive turtle shell with macro recording.

use std::borrow::Cow;
use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::process;
use std::rc::Rc;

use clap::{crate_version, App, Arg};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use turtle_macro::session::{INTRO, PROMPT};
use turtle_macro::{Canvas, Session, Target};

fn main() {
    let matches = App::new("turtle-shell")
        .version(crate_version!())
        .about("Drives a turtle from typed commands and replays recorded macros")
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("SVG")
                .takes_value(true)
                .help("Writes the drawing to this SVG file when the turtle closes"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("Suppresses the banner and prompt"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Logs more detail to stderr; repeat for more"),
        )
        .arg(
            Arg::with_name("SCRIPT")
                .index(1)
                .help("Reads commands from SCRIPT instead of standard input"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let canvas = match matches.value_of("output") {
        Some(path) => Canvas::with_output(path),
        None => Canvas::new(),
    };
    let mut session = Session::new(Target::stdout(Rc::new(RefCell::new(canvas))));

    let result = match matches.value_of("SCRIPT") {
        Some(path) => run_script(&mut session, Path::new(path)),
        None => run_interactive(&mut session, matches.is_present("quiet")),
    };

    let mut failed = match result {
        Ok(failures) => failures > 0,
        Err(error) => {
            eprintln!("turtle-shell: {}", error);
            true
        }
    };
    if let Err(error) = session.finish() {
        eprintln!("turtle-shell: {}", error);
        failed = true;
    }

    if failed {
        process::exit(1);
    }
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Runs every line of `path`, reporting failures with their line number.
/// Returns how many lines failed.
fn run_script(session: &mut Session, path: &Path) -> io::Result<usize> {
    debug!(path = %path.display(), "running script");
    let mut reader = BufReader::new(File::open(path)?);
    let mut buffer = Vec::new();
    let mut failures = 0;
    let mut index = 0;
    while let Some(line) = next_line(&mut reader, &mut buffer)? {
        index += 1;
        if let Err(error) = session.execute_line(&line) {
            eprintln!("{}:{}: {}", path.display(), index, error);
            failures += 1;
        }
        if session.is_finished() {
            break;
        }
    }
    Ok(failures)
}

/// Reads commands until `bye` or end of input. Errors are reported and the
/// loop carries on, so nothing here counts as a failure.
fn run_interactive(session: &mut Session, quiet: bool) -> io::Result<usize> {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut stdout = io::stdout();
    if !quiet {
        writeln!(stdout, "{}\n", INTRO)?;
    }

    let mut buffer = Vec::new();
    loop {
        if !quiet {
            write!(stdout, "{}", PROMPT)?;
            stdout.flush()?;
        }

        let line = match next_line(&mut stdin, &mut buffer)? {
            Some(line) => line,
            None => {
                if !quiet {
                    writeln!(stdout)?;
                }
                break;
            }
        };

        if let Err(error) = session.execute_line(&line) {
            eprintln!("{}", error);
        }
        if session.is_finished() {
            break;
        }
    }
    Ok(0)
}

/// Reads one line, replacing invalid UTF-8 so the session can report it as an
/// unknown command instead of ending. `None` at end of input.
fn next_line<R: BufRead>(reader: &mut R, buffer: &mut Vec<u8>) -> io::Result<Option<String>> {
    buffer.clear();
    if reader.read_until(b'\n', buffer)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(buffer);
    if let Cow::Owned(_) = line {
        debug!("line is not valid UTF-8");
    }
    Ok(Some(line.into_owned()))
}
