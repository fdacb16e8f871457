use crate::confetti::Rgb;
use derivative::Derivative;
use enum_derive_2018::EnumDisplay;
use macro_attr_2018::macro_attr;
use scoreboard_common::{bundles::HomeAwayBundle, side::Side};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Derivative)]
#[derivative(Default)]
pub struct Config {
    pub output: OutputFormat,
    #[derivative(Default(value = "true"))]
    pub show_confetti: bool,
    #[derivative(Default(value = "default_teams()"))]
    pub teams: HomeAwayBundle<Team>,
}

impl Config {
    pub fn team_name(&self, side: Side) -> &str {
        &self.teams[side].name
    }
}

fn default_teams() -> HomeAwayBundle<Team> {
    HomeAwayBundle::new(
        Team {
            name: "Home".to_string(),
            color: Rgb::new(0x1e, 0x90, 0xff),
        },
        Team {
            name: "Away".to_string(),
            color: Rgb::new(0xdc, 0x14, 0x3c),
        },
    )
}

macro_attr! {
    #[derive(Debug, Clone, Copy, Derivative, PartialEq, Eq, Serialize, Deserialize, EnumDisplay!)]
    #[derivative(Default)]
    pub enum OutputFormat {
        #[derivative(Default)]
        Text,
        Json,
    }
}
