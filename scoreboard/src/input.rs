use crate::game_manager::Command;
use scoreboard_common::side::Side;
use std::str::FromStr;
use thiserror::Error;

pub const HELP_TEXT: &str = "\
Commands (separate several with ';'):
  score|s <home|away> <1|2|3>   add points
  timeout|t <home|away>         use a timeout
  clock|c                       start or pause the clock
  reset-clock|rc                put the clock back to 12:00
  period|p                      advance to the next period
  possession|pos                switch possession
  reset|r                       reset the whole game
  show                          print the current state
  help|h                        print this text
  quit|q                        exit";

/// Everything a user can type, including front end actions the game never sees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Game(Command),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown command {0:?}, type 'help' for a list")]
    UnknownCommand(String),
    #[error("'{0}' needs a {1}")]
    MissingArgument(&'static str, &'static str),
    #[error("Unexpected extra input {0:?}")]
    TooManyArguments(String),
    #[error("{0:?} is not a team, use 'home' or 'away'")]
    InvalidSide(String),
    #[error("{0:?} is not a valid number of points, use 1, 2 or 3")]
    InvalidPoints(String),
}

fn parse_side(word: &str) -> Result<Side, InputError> {
    match word.to_ascii_lowercase().as_str() {
        "home" | "h" => Ok(Side::Home),
        "away" | "a" => Ok(Side::Away),
        _ => Err(InputError::InvalidSide(word.to_string())),
    }
}

fn parse_points(word: &str) -> Result<u8, InputError> {
    match word {
        "1" => Ok(1),
        "2" => Ok(2),
        "3" => Ok(3),
        _ => Err(InputError::InvalidPoints(word.to_string())),
    }
}

impl FromStr for Directive {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(keyword) = words.next() else {
            return Err(InputError::UnknownCommand(String::new()));
        };
        let mut next_arg = |name: &'static str, what: &'static str| {
            words.next().ok_or(InputError::MissingArgument(name, what))
        };

        let directive = match keyword.to_ascii_lowercase().as_str() {
            "score" | "s" => {
                let side = parse_side(next_arg("score", "team")?)?;
                let points = parse_points(next_arg("score", "number of points")?)?;
                Directive::Game(Command::AddScore { side, points })
            }
            "timeout" | "t" => {
                Directive::Game(Command::UseTimeout(parse_side(next_arg("timeout", "team")?)?))
            }
            "clock" | "c" => Directive::Game(Command::ToggleClockRunning),
            "reset-clock" | "rc" => Directive::Game(Command::ResetClock),
            "period" | "p" => Directive::Game(Command::AdvancePeriod),
            "possession" | "pos" => Directive::Game(Command::TogglePossession),
            "reset" | "r" => Directive::Game(Command::ResetGame),
            "show" => Directive::Show,
            "help" | "h" | "?" => Directive::Help,
            "quit" | "q" | "exit" => Directive::Quit,
            _ => return Err(InputError::UnknownCommand(keyword.to_string())),
        };

        let rest: Vec<&str> = words.collect();
        if !rest.is_empty() {
            return Err(InputError::TooManyArguments(rest.join(" ")));
        }

        Ok(directive)
    }
}

/// Splits a line on `;`, skipping blank pieces
pub fn parse_line(line: &str) -> Vec<Result<Directive, InputError>> {
    line.split(';')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::parse)
        .collect()
}
