use crate::{
    config::Config,
    confetti::{self, NEUTRAL_SEED, Particle},
    game_manager::Effect,
};
use log::*;
use rand::{SeedableRng, rngs::StdRng};
use scoreboard_common::{
    bundles::HomeAwayBundle, drawing_support::ClockTime, outcome::Outcome, rules::TIMEOUTS_PER_GAME,
    side::Side,
};
use std::io::{self, Write};

/// Something that carries out the effects produced by the game
pub trait EffectSink {
    fn execute(&mut self, effect: &Effect) -> io::Result<()>;

    fn execute_all(&mut self, effects: &[Effect]) -> io::Result<()> {
        for effect in effects {
            self.execute(effect)?;
        }
        Ok(())
    }
}

fn dots(left: u8) -> String {
    (0..TIMEOUTS_PER_GAME)
        .map(|i| if i < left { '●' } else { '○' })
        .collect()
}

#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
    config: Config,
    rng: StdRng,
    overlay_visible: bool,
    last_confetti: Vec<Particle>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, config: Config) -> Self {
        Self::with_rng(out, config, StdRng::from_os_rng())
    }

    pub fn with_rng(out: W, config: Config, rng: StdRng) -> Self {
        Self {
            out,
            config,
            rng,
            overlay_visible: false,
            last_confetti: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    #[cfg(test)]
    pub fn last_confetti(&self) -> &[Particle] {
        &self.last_confetti
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn scores_line(&self, scores: HomeAwayBundle<u16>) -> String {
        format!(
            "{} {} - {} {}",
            self.config.team_name(Side::Home),
            scores.home,
            scores.away,
            self.config.team_name(Side::Away)
        )
    }

    fn victory_text(&self, outcome: Outcome) -> String {
        match outcome.winner() {
            Some(side) => format!("{} wins!", self.config.team_name(side)),
            None => "It's a tie!".to_string(),
        }
    }
}

impl<W: Write> EffectSink for TextRenderer<W> {
    fn execute(&mut self, effect: &Effect) -> io::Result<()> {
        match effect {
            Effect::ScoreRendered { scores } => {
                writeln!(self.out, "Score     {}", self.scores_line(*scores))
            }
            Effect::DotsRendered { timeouts_left } => writeln!(
                self.out,
                "Timeouts  {} {}  {} {}",
                self.config.team_name(Side::Home),
                dots(timeouts_left.home),
                dots(timeouts_left.away),
                self.config.team_name(Side::Away),
            ),
            Effect::ClockRendered { secs } => writeln!(self.out, "Clock     {}", ClockTime(*secs)),
            Effect::PeriodRendered { period } => writeln!(self.out, "{period}"),
            Effect::ArrowRendered { possession } => match possession {
                Side::Home => writeln!(
                    self.out,
                    "Ball      ◀ {}",
                    self.config.team_name(Side::Home)
                ),
                Side::Away => writeln!(
                    self.out,
                    "Ball      {} ▶",
                    self.config.team_name(Side::Away)
                ),
            },
            Effect::ButtonLabelChanged { running } => {
                writeln!(self.out, "[{}]", if *running { "Pause" } else { "Start" })
            }
            Effect::Notification { text } => writeln!(self.out, "!! {text}"),
            Effect::VictoryTriggered {
                outcome,
                score_home,
                score_away,
            } => {
                self.overlay_visible = true;
                let line = self.scores_line(HomeAwayBundle::new(*score_home, *score_away));
                writeln!(self.out, "*** {} {line} ***", self.victory_text(*outcome))
            }
            Effect::OverlayHidden => {
                self.last_confetti.clear();
                if !self.overlay_visible {
                    return Ok(());
                }
                self.overlay_visible = false;
                writeln!(self.out, "--- New game ---")
            }
            Effect::ConfettiLaunched { color_seed } => {
                if !self.config.show_confetti {
                    debug!("Confetti disabled, skipping");
                    return Ok(());
                }
                let seed = color_seed
                    .map(|side| self.config.teams[side].color)
                    .unwrap_or(NEUTRAL_SEED);
                self.last_confetti = confetti::launch(seed, &mut self.rng);
                debug!(
                    "Launched {} confetti particles seeded with {seed}",
                    self.last_confetti.len()
                );
                let line: String = self
                    .last_confetti
                    .iter()
                    .take(40)
                    .map(|p| if p.size_px >= 10.0 { '*' } else { '.' })
                    .collect();
                writeln!(self.out, "{line}")
            }
        }
    }
}

/// Writes each effect as a line of JSON
#[derive(Debug)]
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EffectSink for JsonRenderer<W> {
    fn execute(&mut self, effect: &Effect) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, effect)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
