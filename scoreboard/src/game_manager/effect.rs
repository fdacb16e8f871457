use scoreboard_common::{
    bundles::HomeAwayBundle, game_snapshot::GamePeriod, outcome::Outcome, side::Side,
};
use serde::Serialize;

/// An externally visible action requested by a transition. The core never renders anything
/// itself, it only describes what the renderer should do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect")]
pub enum Effect {
    ScoreRendered {
        scores: HomeAwayBundle<u16>,
    },
    DotsRendered {
        timeouts_left: HomeAwayBundle<u8>,
    },
    ClockRendered {
        secs: u16,
    },
    PeriodRendered {
        period: GamePeriod,
    },
    ArrowRendered {
        possession: Side,
    },
    /// The start/stop button should read "Pause" when `running`, "Start" otherwise
    ButtonLabelChanged {
        running: bool,
    },
    Notification {
        text: String,
    },
    VictoryTriggered {
        outcome: Outcome,
        score_home: u16,
        score_away: u16,
    },
    OverlayHidden,
    /// `color_seed` is the winning side, `None` for a tie
    ConfettiLaunched {
        color_seed: Option<Side>,
    },
}

#[cfg(test)]
impl Effect {
    pub fn is_notification(&self) -> bool {
        matches!(self, Self::Notification { .. })
    }

    pub fn is_victory(&self) -> bool {
        matches!(self, Self::VictoryTriggered { .. })
    }
}
