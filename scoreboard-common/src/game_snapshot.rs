use crate::{bundles::HomeAwayBundle, drawing_support::ClockTime, rules::NUM_PERIODS, side::Side};
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub current_period: GamePeriod,
    pub secs_in_period: u16,
    pub clock_running: bool,
    pub scores: HomeAwayBundle<u16>,
    pub timeouts_left: HomeAwayBundle<u8>,
    pub possession: Side,
    pub game_over: bool,
}

impl core::fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{} {} [{}] Score {} Timeouts {} Possession {}{}",
            self.current_period,
            ClockTime(self.secs_in_period),
            if self.clock_running { "running" } else { "stopped" },
            self.scores,
            self.timeouts_left,
            self.possession,
            if self.game_over { " (Final)" } else { "" },
        )
    }
}

#[derive(
    Debug, Default, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize, Sequence,
)]
pub enum GamePeriod {
    #[default]
    First,
    Second,
    Third,
    Fourth,
}

impl GamePeriod {
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
        }
    }

    /// `None` once the last period has been reached
    pub fn next_period(self) -> Option<GamePeriod> {
        match self {
            Self::First => Some(Self::Second),
            Self::Second => Some(Self::Third),
            Self::Third => Some(Self::Fourth),
            Self::Fourth => None,
        }
    }

    pub fn is_last(self) -> bool {
        self.number() == NUM_PERIODS
    }
}

impl core::fmt::Display for GamePeriod {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Period {}", self.number())
    }
}
