use crate::{
    clock_driver::{ClockDriver, Tick},
    game_manager::{Command, Effect, GameState},
    input::{Directive, HELP_TEXT, parse_line},
    renderer::EffectSink,
};
use log::*;
use std::io;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    select,
    sync::mpsc,
};

const TICK_CHANNEL_LEN: usize = 8;

/// Ties the game to its collaborators: lines of input come in, ticks come from the clock driver,
/// and every resulting effect goes to the sink. All mutation happens on this one task.
pub struct Session<S: EffectSink> {
    state: GameState,
    driver: ClockDriver,
    tick_rx: mpsc::Receiver<Tick>,
    sink: S,
}

impl<S: EffectSink> Session<S> {
    pub fn new(sink: S) -> Self {
        let (tx, tick_rx) = mpsc::channel(TICK_CHANNEL_LEN);
        Self {
            state: GameState::new(),
            driver: ClockDriver::new(tx),
            tick_rx,
            sink,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub fn into_sink(self) -> S {
        self.sink
    }

    pub async fn run<R: AsyncBufRead + Unpin>(mut self, input: R) -> io::Result<S> {
        let mut lines = input.split(b'\n');
        self.sink.execute_all(&self.state.full_render())?;

        loop {
            select! {
                line = lines.next_segment() => {
                    let Some(raw) = line? else {
                        info!("Input closed, exiting");
                        break;
                    };
                    // Undecodable bytes become U+FFFD and fail to parse like any other typo
                    let line = String::from_utf8_lossy(&raw);
                    if !self.handle_line(line.trim_end_matches('\r'))? {
                        break;
                    }
                }
                Some(tick) = self.tick_rx.recv() => self.handle_tick(tick)?,
            }
        }

        self.driver.stop();
        Ok(self.sink)
    }

    /// Returns `false` once the user has asked to quit
    pub fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        for parsed in parse_line(line) {
            match parsed {
                Ok(Directive::Game(command)) => self.handle_command(command)?,
                Ok(Directive::Show) => {
                    info!("{}", self.state.snapshot());
                    self.sink.execute_all(&self.state.full_render())?;
                }
                Ok(Directive::Help) => self.sink.execute(&Effect::Notification {
                    text: HELP_TEXT.to_string(),
                })?,
                Ok(Directive::Quit) => return Ok(false),
                Err(e) => {
                    warn!("Bad input {line:?}: {e}");
                    self.sink.execute(&Effect::Notification {
                        text: e.to_string(),
                    })?;
                }
            }
        }
        Ok(true)
    }

    pub fn handle_command(&mut self, command: Command) -> io::Result<()> {
        let (state, effects) = self.state.apply(command);
        self.state = state;
        self.sink.execute_all(&effects)?;

        // A fresh clock gets a full second before its first tick
        let restarts_clock = matches!(command, Command::ResetClock | Command::AdvancePeriod);
        if restarts_clock && self.state.clock_is_running() {
            self.driver.start();
        } else {
            self.driver.sync(self.state.clock_is_running());
        }
        Ok(())
    }

    pub fn handle_tick(&mut self, tick: Tick) -> io::Result<()> {
        if !self.driver.is_current(tick) {
            trace!("Dropping a tick from a cancelled run");
            return Ok(());
        }
        let (state, effects) = self.state.tick();
        self.state = state;
        self.sink.execute_all(&effects)?;
        self.driver.sync(self.state.clock_is_running());
        Ok(())
    }
}
