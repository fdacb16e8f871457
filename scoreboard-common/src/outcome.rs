use crate::side::Side;
use core::cmp::Ordering;
use displaydoc::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Outcome {
    /// Home Wins
    HomeWins,
    /// Away Wins
    AwayWins,
    /// Tie Game
    Tie,
}

impl Outcome {
    pub fn winner(self) -> Option<Side> {
        match self {
            Self::HomeWins => Some(Side::Home),
            Self::AwayWins => Some(Side::Away),
            Self::Tie => None,
        }
    }
}

pub fn resolve_winner(score_home: u16, score_away: u16) -> Outcome {
    match score_home.cmp(&score_away) {
        Ordering::Greater => Outcome::HomeWins,
        Ordering::Less => Outcome::AwayWins,
        Ordering::Equal => Outcome::Tie,
    }
}
