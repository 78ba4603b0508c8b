// pathfinder/turtle/src/recorder.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runs commands and optionally records them as a macro.

use tracing::{debug, info, trace, warn};

use crate::command::Command;
use crate::error::SurfaceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecorderState {
    Idle,
    Recording,
}

/// Every command passes through [`Recorder::run`]. While recording, commands
/// that ran successfully are kept in order so [`Recorder::run_all`] can
/// replay them.
#[derive(Debug)]
pub struct Recorder {
    state: RecorderState,
    commands: Vec<Command>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder {
            state: RecorderState::Idle,
            commands: Vec::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> RecorderState {
        self.state
    }

    #[inline]
    pub fn is_recording(&self) -> bool {
        self.state == RecorderState::Recording
    }

    /// The recorded macro, in the order it will be replayed.
    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Starts a new macro. Whatever was recorded before is dropped, even when
    /// already recording.
    pub fn start_recording(&mut self) {
        info!(dropped = self.commands.len(), "recording started");
        self.commands.clear();
        self.state = RecorderState::Recording;
    }

    pub fn stop_recording(&mut self) {
        if self.is_recording() {
            info!(recorded = self.commands.len(), "recording stopped");
        }
        self.state = RecorderState::Idle;
    }

    /// Executes `command` now, and keeps it if recording.
    pub fn run(&mut self, command: Command) -> Result<(), SurfaceError> {
        command.execute()?;
        if self.is_recording() {
            trace!(command = %command.action(), index = self.commands.len(), "recorded");
            self.commands.push(command);
        }
        Ok(())
    }

    /// Replays the macro. Stops at the first failure. Returns how many commands
    /// ran.
    pub fn run_all(&self) -> Result<usize, SurfaceError> {
        debug!(commands = self.commands.len(), "playback");
        for (index, command) in self.commands.iter().enumerate() {
            if let Err(error) = command.execute() {
                warn!(index, command = %command.action(), %error, "playback aborted");
                return Err(error);
            }
        }
        Ok(self.commands.len())
    }
}

impl Default for Recorder {
    fn default() -> Recorder {
        Recorder::new()
    }
}
