pub mod clock_driver;
pub mod confetti;
pub mod config;
pub mod game_manager;
pub mod input;
pub mod renderer;
pub mod session;

pub const APP_NAME: &str = "scoreboard";
