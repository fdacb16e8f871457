#![cfg_attr(not(feature = "std"), no_std)]

pub mod side;

pub mod bundles;

pub mod game_snapshot;

pub mod outcome;

pub mod rules {
    /// Length of every period, in seconds
    pub const PERIOD_DURATION: u16 = 720;
    pub const TIMEOUTS_PER_GAME: u8 = 3;
    pub const NUM_PERIODS: u8 = 4;
}

pub mod drawing_support {
    use core::fmt::{Display, Formatter, Result};

    pub const MAX_STRINGABLE_SECS: u16 = 5999;

    /// Formats a number of seconds as `MM:SS`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClockTime(pub u16);

    impl Display for ClockTime {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            let secs = self.0.min(MAX_STRINGABLE_SECS);
            write!(f, "{:02}:{:02}", secs / 60, secs % 60)
        }
    }

}
