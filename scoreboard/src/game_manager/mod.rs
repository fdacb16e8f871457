use derivative::Derivative;
use log::*;
use scoreboard_common::{
    bundles::HomeAwayBundle,
    drawing_support::ClockTime,
    game_snapshot::{GamePeriod, GameSnapshot},
    outcome::resolve_winner,
    rules::{PERIOD_DURATION, TIMEOUTS_PER_GAME},
    side::Side,
};
use thiserror::Error;

pub mod effect;
pub use effect::Effect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `points` must be 1, 2 or 3
    AddScore {
        side: Side,
        points: u8,
    },
    UseTimeout(Side),
    ToggleClockRunning,
    ResetClock,
    AdvancePeriod,
    TogglePossession,
    ResetGame,
}

#[derive(Derivative)]
#[derivative(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    current_period: GamePeriod,
    #[derivative(Default(value = "PERIOD_DURATION"))]
    time_left: u16,
    clock_running: bool,
    scores: HomeAwayBundle<u16>,
    #[derivative(Default(value = "HomeAwayBundle::splat(TIMEOUTS_PER_GAME)"))]
    timeouts_left: HomeAwayBundle<u8>,
    possession: Side,
    game_over: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clock_is_running(&self) -> bool {
        self.clock_running
    }

    pub fn time_left(&self) -> u16 {
        self.time_left
    }

    pub fn current_period(&self) -> GamePeriod {
        self.current_period
    }

    pub fn scores(&self) -> HomeAwayBundle<u16> {
        self.scores
    }

    pub fn timeouts_left(&self) -> HomeAwayBundle<u8> {
        self.timeouts_left
    }

    pub fn possession(&self) -> Side {
        self.possession
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            current_period: self.current_period,
            secs_in_period: self.time_left,
            clock_running: self.clock_running,
            scores: self.scores,
            timeouts_left: self.timeouts_left,
            possession: self.possession,
            game_over: self.game_over,
        }
    }

    /// Every render effect needed to draw the board from scratch
    pub fn full_render(&self) -> Vec<Effect> {
        vec![
            Effect::ScoreRendered {
                scores: self.scores,
            },
            Effect::DotsRendered {
                timeouts_left: self.timeouts_left,
            },
            Effect::ClockRendered {
                secs: self.time_left,
            },
            Effect::PeriodRendered {
                period: self.current_period,
            },
            Effect::ArrowRendered {
                possession: self.possession,
            },
            Effect::ButtonLabelChanged {
                running: self.clock_running,
            },
        ]
    }

    pub fn apply(mut self, command: Command) -> (Self, Vec<Effect>) {
        let mut effects = Vec::new();
        debug!("{} Applying {command:?}", self.status_string());

        match command {
            Command::AddScore { side, points } => self.add_score(side, points, &mut effects),
            Command::UseTimeout(side) => self.use_timeout(side, &mut effects),
            Command::ToggleClockRunning => self.toggle_clock(&mut effects),
            Command::ResetClock => self.reset_clock(&mut effects),
            Command::AdvancePeriod => self.advance_period(&mut effects),
            Command::TogglePossession => self.toggle_possession(&mut effects),
            Command::ResetGame => self.reset_game(&mut effects),
        }

        (self, effects)
    }

    /// Called once per elapsed second by whatever owns the tick source
    pub fn tick(mut self) -> (Self, Vec<Effect>) {
        let mut effects = Vec::new();

        if !self.clock_running {
            trace!("{} Ignoring tick, clock is stopped", self.status_string());
            return (self, effects);
        }

        self.time_left = self.time_left.saturating_sub(1);
        effects.push(Effect::ClockRendered {
            secs: self.time_left,
        });

        if self.time_left == 0 {
            self.stop_clock(&mut effects);
            if self.current_period.is_last() {
                self.end_game(&mut effects);
            } else {
                info!("{} End of {}", self.status_string(), self.current_period);
                effects.push(Effect::Notification {
                    text: format!("{} is over", self.current_period),
                });
            }
        }

        (self, effects)
    }

    /// Returns `Ok` if a timeout can be used, otherwise returns `Err` describing why not
    pub fn can_use_timeout(&self, side: Side) -> Result<()> {
        if self.timeouts_left[side] > 0 {
            Ok(())
        } else {
            Err(GameManagerError::NoTimeoutsLeft(side))
        }
    }

    /// Returns `Ok` if the clock can be started, otherwise returns `Err` describing why not
    pub fn can_start_clock(&self) -> Result<()> {
        if self.game_over {
            Err(GameManagerError::GameOver)
        } else if self.time_left == 0 {
            Err(GameManagerError::PeriodOver(self.current_period))
        } else {
            Ok(())
        }
    }

    fn add_score(&mut self, side: Side, points: u8, effects: &mut Vec<Effect>) {
        debug_assert!((1..=3).contains(&points), "Invalid points value {points}");
        self.scores[side] = self.scores[side].saturating_add(points.into());
        info!(
            "{} {points} points for {side}, scores are {}",
            self.status_string(),
            self.scores
        );
        effects.push(Effect::ScoreRendered {
            scores: self.scores,
        });
    }

    fn use_timeout(&mut self, side: Side, effects: &mut Vec<Effect>) {
        if let Err(e) = self.can_use_timeout(side) {
            warn!("{} {e}", self.status_string());
            effects.push(Effect::Notification {
                text: e.to_string(),
            });
            return;
        }

        self.timeouts_left[side] -= 1;
        info!(
            "{} {side} timeout, {} left",
            self.status_string(),
            self.timeouts_left[side]
        );
        effects.push(Effect::DotsRendered {
            timeouts_left: self.timeouts_left,
        });

        if self.clock_running {
            self.stop_clock(effects);
        }
    }

    fn toggle_clock(&mut self, effects: &mut Vec<Effect>) {
        if self.clock_running {
            self.stop_clock(effects);
            return;
        }

        match self.can_start_clock() {
            Ok(()) => {
                info!("{} Starting the clock", self.status_string());
                self.clock_running = true;
                effects.push(Effect::ButtonLabelChanged { running: true });
            }
            Err(e) => {
                warn!("{} Can't start the clock: {e}", self.status_string());
                effects.push(Effect::Notification {
                    text: e.to_string(),
                });
            }
        }
    }

    fn stop_clock(&mut self, effects: &mut Vec<Effect>) {
        info!("{} Stopping the clock", self.status_string());
        self.clock_running = false;
        effects.push(Effect::ButtonLabelChanged { running: false });
    }

    // A running clock keeps running from the fresh time
    fn reset_clock(&mut self, effects: &mut Vec<Effect>) {
        self.time_left = PERIOD_DURATION;
        info!("{} Clock reset", self.status_string());
        effects.push(Effect::ClockRendered {
            secs: self.time_left,
        });
    }

    fn advance_period(&mut self, effects: &mut Vec<Effect>) {
        let Some(next) = self.current_period.next_period() else {
            self.end_game(effects);
            return;
        };

        self.current_period = next;
        self.time_left = PERIOD_DURATION;
        info!("{} Entering {next}", self.status_string());
        effects.push(Effect::PeriodRendered { period: next });
        effects.push(Effect::ClockRendered {
            secs: self.time_left,
        });
    }

    fn toggle_possession(&mut self, effects: &mut Vec<Effect>) {
        self.possession = self.possession.other();
        info!("{} Possession to {}", self.status_string(), self.possession);
        effects.push(Effect::ArrowRendered {
            possession: self.possession,
        });
    }

    fn end_game(&mut self, effects: &mut Vec<Effect>) {
        if self.clock_running {
            self.stop_clock(effects);
        }
        self.game_over = true;

        let outcome = resolve_winner(self.scores.home, self.scores.away);
        info!(
            "{} Game over, {outcome}. Score is {}",
            self.status_string(),
            self.scores
        );
        effects.push(Effect::VictoryTriggered {
            outcome,
            score_home: self.scores.home,
            score_away: self.scores.away,
        });
        effects.push(Effect::ConfettiLaunched {
            color_seed: outcome.winner(),
        });
    }

    fn reset_game(&mut self, effects: &mut Vec<Effect>) {
        info!("{} Resetting Game", self.status_string());
        *self = Self::default();
        effects.extend(self.full_render());
        effects.push(Effect::OverlayHidden);
    }

    fn status_string(&self) -> String {
        format!(
            "[{} P{}{}]",
            ClockTime(self.time_left),
            self.current_period.number(),
            if self.game_over { " FINAL" } else { "" }
        )
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum GameManagerError {
    #[error("No timeouts left for {0}")]
    NoTimeoutsLeft(Side),
    #[error("{0} is over, advance the period or reset the clock")]
    PeriodOver(GamePeriod),
    #[error("The game is over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, GameManagerError>;

#[cfg(test)]
mod test {
    use super::*;
    use enum_iterator::all;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use scoreboard_common::outcome::Outcome;
    use std::sync::Once;

    static INIT: Once = Once::new();

    pub fn initialize() {
        INIT.call_once(|| {
            let _ = env_logger::builder().is_test(true).try_init();
        });
    }

    fn apply_all(state: GameState, commands: &[Command]) -> (GameState, Vec<Effect>) {
        commands
            .iter()
            .fold((state, Vec::new()), |(state, mut effects), &command| {
                let (state, new) = state.apply(command);
                effects.extend(new);
                (state, effects)
            })
    }

    fn tick_n(mut state: GameState, n: usize) -> (GameState, Vec<Effect>) {
        let mut effects = Vec::new();
        for _ in 0..n {
            let (next, new) = state.tick();
            state = next;
            effects.extend(new);
        }
        (state, effects)
    }

    fn running_in(period: GamePeriod) -> GameState {
        GameState {
            current_period: period,
            clock_running: true,
            ..Default::default()
        }
    }

    fn default_fields_hold(state: &GameState) {
        assert_eq!(state.scores(), HomeAwayBundle::new(0, 0));
        assert_eq!(state.timeouts_left(), HomeAwayBundle::new(3, 3));
        assert_eq!(state.time_left(), 720);
        assert_eq!(state.current_period(), GamePeriod::First);
        assert_eq!(state.possession(), Side::Home);
        assert!(!state.clock_is_running());
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_new_state_defaults() {
        initialize();
        let state = GameState::new();
        default_fields_hold(&state);
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn test_add_score() {
        initialize();
        let (state, effects) = GameState::new().apply(Command::AddScore {
            side: Side::Home,
            points: 3,
        });
        assert_eq!(state.scores(), HomeAwayBundle::new(3, 0));
        assert_eq!(
            effects,
            vec![Effect::ScoreRendered {
                scores: HomeAwayBundle::new(3, 0)
            }]
        );

        let (state, _) = state.apply(Command::AddScore {
            side: Side::Away,
            points: 2,
        });
        let (state, _) = state.apply(Command::AddScore {
            side: Side::Away,
            points: 1,
        });
        assert_eq!(state.scores(), HomeAwayBundle::new(3, 3));
    }

    #[test]
    fn test_scores_are_sums_of_points() {
        initialize();
        let mut rng = StdRng::seed_from_u64(0x5c0e);

        for _ in 0..50 {
            let mut state = GameState::new();
            let mut expected = HomeAwayBundle::<u16>::default();
            let len = rng.random_range(0..60);

            for _ in 0..len {
                let side = if rng.random_bool(0.5) {
                    Side::Home
                } else {
                    Side::Away
                };
                let points = rng.random_range(1..=3u8);
                let before = state.scores();

                state = state.apply(Command::AddScore { side, points }).0;
                expected[side] += u16::from(points);

                assert!(state.scores().home >= before.home);
                assert!(state.scores().away >= before.away);
            }

            assert_eq!(state.scores(), expected);
        }
    }

    #[test]
    fn test_use_timeout_stops_clock() {
        initialize();
        let mut state = GameState::new();

        for remaining in [2, 1, 0] {
            let (next, _) = state.apply(Command::ToggleClockRunning);
            assert!(next.clock_is_running());

            let (next, effects) = next.apply(Command::UseTimeout(Side::Away));
            assert!(!next.clock_is_running());
            assert_eq!(next.timeouts_left(), HomeAwayBundle::new(3, remaining));
            assert_eq!(
                effects,
                vec![
                    Effect::DotsRendered {
                        timeouts_left: HomeAwayBundle::new(3, remaining)
                    },
                    Effect::ButtonLabelChanged { running: false },
                ]
            );
            state = next;
        }

        let (running, _) = state.apply(Command::ToggleClockRunning);
        let (next, effects) = running.apply(Command::UseTimeout(Side::Away));
        assert_eq!(next.timeouts_left(), HomeAwayBundle::new(3, 0));
        assert_eq!(next, running);
        assert_eq!(
            effects,
            vec![Effect::Notification {
                text: "No timeouts left for Away".to_string()
            }]
        );
    }

    #[test]
    fn test_use_timeout_while_stopped() {
        initialize();
        let (state, effects) = GameState::new().apply(Command::UseTimeout(Side::Home));
        assert_eq!(state.timeouts_left(), HomeAwayBundle::new(2, 3));
        assert!(!state.clock_is_running());
        assert_eq!(
            effects,
            vec![Effect::DotsRendered {
                timeouts_left: HomeAwayBundle::new(2, 3)
            }]
        );
        assert_eq!(state.can_use_timeout(Side::Home), Ok(()));
    }

    #[test]
    fn test_can_use_timeout() {
        initialize();
        for side in all::<Side>() {
            assert_eq!(GameState::new().can_use_timeout(side), Ok(()));
        }

        let state = GameState {
            timeouts_left: HomeAwayBundle::new(0, 1),
            ..Default::default()
        };
        assert_eq!(
            state.can_use_timeout(Side::Home),
            Err(GameManagerError::NoTimeoutsLeft(Side::Home))
        );
        assert_eq!(state.can_use_timeout(Side::Away), Ok(()));
    }

    #[test]
    fn test_toggle_clock() {
        initialize();
        let (state, effects) = GameState::new().apply(Command::ToggleClockRunning);
        assert!(state.clock_is_running());
        assert_eq!(effects, vec![Effect::ButtonLabelChanged { running: true }]);

        let (state, effects) = state.apply(Command::ToggleClockRunning);
        assert!(!state.clock_is_running());
        assert_eq!(effects, vec![Effect::ButtonLabelChanged { running: false }]);
    }

    #[test]
    fn test_clock_wont_start_at_zero_or_after_game() {
        initialize();
        let state = GameState {
            time_left: 0,
            current_period: GamePeriod::Second,
            ..Default::default()
        };
        assert_eq!(
            state.can_start_clock(),
            Err(GameManagerError::PeriodOver(GamePeriod::Second))
        );
        let (next, effects) = state.apply(Command::ToggleClockRunning);
        assert_eq!(next, state);
        assert_eq!(effects.len(), 1);
        assert!(effects[0].is_notification());

        let state = GameState {
            game_over: true,
            current_period: GamePeriod::Fourth,
            ..Default::default()
        };
        assert_eq!(state.can_start_clock(), Err(GameManagerError::GameOver));
        let (next, effects) = state.apply(Command::ToggleClockRunning);
        assert!(!next.clock_is_running());
        assert_eq!(
            effects,
            vec![Effect::Notification {
                text: "The game is over".to_string()
            }]
        );
    }

    #[test]
    fn test_tick() {
        initialize();
        let (state, effects) = running_in(GamePeriod::First).tick();
        assert_eq!(state.time_left(), 719);
        assert!(state.clock_is_running());
        assert_eq!(effects, vec![Effect::ClockRendered { secs: 719 }]);

        let (state, effects) = GameState::new().tick();
        assert_eq!(state, GameState::new());
        assert!(effects.is_empty());
    }

    #[test]
    fn test_period_expiry() {
        initialize();
        for period in [GamePeriod::First, GamePeriod::Second, GamePeriod::Third] {
            let (state, effects) = tick_n(running_in(period), 720);
            assert_eq!(state.time_left(), 0);
            assert!(!state.clock_is_running());
            assert!(!state.is_game_over());
            assert_eq!(state.current_period(), period);
            assert_eq!(
                &effects[effects.len() - 3..],
                &[
                    Effect::ClockRendered { secs: 0 },
                    Effect::ButtonLabelChanged { running: false },
                    Effect::Notification {
                        text: format!("{period} is over")
                    },
                ]
            );
            assert!(!effects.iter().any(Effect::is_victory));

            // Further ticks have no effect
            let (after, effects) = tick_n(state, 5);
            assert_eq!(after, state);
            assert!(effects.is_empty());
        }
    }

    #[test]
    fn test_game_expiry() {
        initialize();
        let state = GameState {
            scores: HomeAwayBundle::new(10, 7),
            ..running_in(GamePeriod::Fourth)
        };
        let (state, effects) = tick_n(state, 720);
        assert_eq!(state.time_left(), 0);
        assert!(!state.clock_is_running());
        assert!(state.is_game_over());
        assert!(!effects.iter().any(Effect::is_notification));
        assert_eq!(
            &effects[effects.len() - 4..],
            &[
                Effect::ClockRendered { secs: 0 },
                Effect::ButtonLabelChanged { running: false },
                Effect::VictoryTriggered {
                    outcome: Outcome::HomeWins,
                    score_home: 10,
                    score_away: 7,
                },
                Effect::ConfettiLaunched {
                    color_seed: Some(Side::Home)
                },
            ]
        );
    }

    #[test]
    fn test_reset_clock() {
        initialize();
        let (running, _) = tick_n(running_in(GamePeriod::Second), 100);
        let (state, effects) = running.apply(Command::ResetClock);
        assert_eq!(state.time_left(), 720);
        assert!(state.clock_is_running());
        assert_eq!(effects, vec![Effect::ClockRendered { secs: 720 }]);

        let (stopped, _) = running.apply(Command::ToggleClockRunning);
        let (state, effects) = stopped.apply(Command::ResetClock);
        assert_eq!(state.time_left(), 720);
        assert!(!state.clock_is_running());
        assert_eq!(effects, vec![Effect::ClockRendered { secs: 720 }]);
    }

    #[test]
    fn test_advance_period() {
        initialize();
        let (running, _) = tick_n(running_in(GamePeriod::First), 30);
        let (state, effects) = running.apply(Command::AdvancePeriod);
        assert_eq!(state.current_period(), GamePeriod::Second);
        assert_eq!(state.time_left(), 720);
        assert!(state.clock_is_running());
        assert_eq!(
            effects,
            vec![
                Effect::PeriodRendered {
                    period: GamePeriod::Second
                },
                Effect::ClockRendered { secs: 720 },
            ]
        );

        let (state, _) = apply_all(
            GameState::new(),
            &[Command::AdvancePeriod, Command::AdvancePeriod],
        );
        assert_eq!(state.current_period(), GamePeriod::Third);
        assert!(!state.clock_is_running());
        assert!(!state.is_game_over());
    }

    fn victory(effects: &[Effect]) -> Vec<Effect> {
        effects
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    Effect::VictoryTriggered { .. } | Effect::ConfettiLaunched { .. }
                )
            })
            .cloned()
            .collect()
    }

    #[test]
    fn test_advance_at_last_period_matches_expiry() {
        initialize();
        for home in 0..6 {
            for away in 0..6 {
                let start = GameState {
                    scores: HomeAwayBundle::new(home, away),
                    time_left: 1,
                    ..running_in(GamePeriod::Fourth)
                };

                let (expired, expiry_effects) = start.tick();
                let (advanced, advance_effects) = start.apply(Command::AdvancePeriod);

                assert!(expired.is_game_over());
                assert!(advanced.is_game_over());
                assert!(!advanced.clock_is_running());
                assert_eq!(advanced.current_period(), GamePeriod::Fourth);
                assert_eq!(advanced.scores(), expired.scores());

                assert_eq!(victory(&expiry_effects), victory(&advance_effects));
                assert_eq!(victory(&advance_effects).len(), 2);
                assert_eq!(
                    advance_effects[advance_effects.len() - 2],
                    Effect::VictoryTriggered {
                        outcome: resolve_winner(home, away),
                        score_home: home,
                        score_away: away,
                    }
                );
            }
        }
    }

    #[test]
    fn test_advance_at_last_period_while_stopped() {
        initialize();
        let state = GameState {
            current_period: GamePeriod::Fourth,
            scores: HomeAwayBundle::new(3, 9),
            ..Default::default()
        };
        let (state, effects) = state.apply(Command::AdvancePeriod);
        assert!(state.is_game_over());
        assert_eq!(
            effects,
            vec![
                Effect::VictoryTriggered {
                    outcome: Outcome::AwayWins,
                    score_home: 3,
                    score_away: 9,
                },
                Effect::ConfettiLaunched {
                    color_seed: Some(Side::Away)
                },
            ]
        );
    }

    #[test]
    fn test_tie_confetti_has_no_seed() {
        initialize();
        let state = GameState {
            current_period: GamePeriod::Fourth,
            scores: HomeAwayBundle::new(5, 5),
            ..Default::default()
        };
        let (_, effects) = state.apply(Command::AdvancePeriod);
        assert_eq!(
            effects.last(),
            Some(&Effect::ConfettiLaunched { color_seed: None })
        );
    }

    #[test]
    fn test_toggle_possession() {
        initialize();
        let start = GameState::new();
        let (once, effects) = start.apply(Command::TogglePossession);
        assert_eq!(once.possession(), Side::Away);
        assert_eq!(
            effects,
            vec![Effect::ArrowRendered {
                possession: Side::Away
            }]
        );
        let (twice, _) = once.apply(Command::TogglePossession);
        assert_eq!(twice.possession(), start.possession());
        assert_eq!(twice, start);
    }

    #[test]
    fn test_reset_game() {
        initialize();
        let (state, _) = apply_all(
            GameState::new(),
            &[
                Command::AddScore {
                    side: Side::Home,
                    points: 2,
                },
                Command::AddScore {
                    side: Side::Away,
                    points: 3,
                },
                Command::UseTimeout(Side::Home),
                Command::TogglePossession,
                Command::AdvancePeriod,
                Command::AdvancePeriod,
                Command::AdvancePeriod,
                Command::ToggleClockRunning,
            ],
        );
        let (state, _) = tick_n(state, 720);
        assert!(state.is_game_over());

        let (state, effects) = state.apply(Command::ResetGame);
        default_fields_hold(&state);
        let mut expected = GameState::new().full_render();
        expected.push(Effect::OverlayHidden);
        assert_eq!(effects, expected);
    }

    #[test]
    fn test_reset_game_from_random_states() {
        initialize();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..30 {
            let mut state = GameState::new();
            for _ in 0..rng.random_range(0..40) {
                let side = if rng.random_bool(0.5) {
                    Side::Home
                } else {
                    Side::Away
                };
                let command = match rng.random_range(0..7) {
                    0 => Command::AddScore {
                        side,
                        points: rng.random_range(1..=3),
                    },
                    1 => Command::UseTimeout(side),
                    2 => Command::ToggleClockRunning,
                    3 => Command::ResetClock,
                    4 => Command::AdvancePeriod,
                    5 => Command::TogglePossession,
                    _ => Command::ResetGame,
                };
                state = state.apply(command).0;
                state = tick_n(state, rng.random_range(0..300)).0;

                assert!(state.time_left() <= PERIOD_DURATION);
                assert!(state.timeouts_left().home <= TIMEOUTS_PER_GAME);
                assert!(state.timeouts_left().away <= TIMEOUTS_PER_GAME);
                if state.time_left() == 0 || state.is_game_over() {
                    assert!(!state.clock_is_running());
                }
            }

            let (state, _) = state.apply(Command::ResetGame);
            default_fields_hold(&state);
        }
    }

    #[test]
    fn test_snapshot() {
        initialize();
        let (state, _) = apply_all(
            GameState::new(),
            &[
                Command::AddScore {
                    side: Side::Away,
                    points: 2,
                },
                Command::TogglePossession,
                Command::ToggleClockRunning,
            ],
        );
        let snapshot = state.snapshot();
        assert_eq!(
            snapshot,
            GameSnapshot {
                current_period: GamePeriod::First,
                secs_in_period: 720,
                clock_running: true,
                scores: HomeAwayBundle::new(0, 2),
                timeouts_left: HomeAwayBundle::new(3, 3),
                possession: Side::Away,
                game_over: false,
            }
        );
    }

    #[test]
    fn test_status_string() {
        let state = GameState {
            time_left: 65,
            current_period: GamePeriod::Third,
            ..Default::default()
        };
        assert_eq!(state.status_string(), "[01:05 P3]");
        let state = GameState {
            time_left: 0,
            current_period: GamePeriod::Fourth,
            game_over: true,
            ..Default::default()
        };
        assert_eq!(state.status_string(), "[00:00 P4 FINAL]");
    }
}
