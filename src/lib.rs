// 微波爐模擬器庫
pub mod appliance;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod simulator;
pub mod utils;

pub use crate::appliance::{ApplianceState, Command, Phase};
pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::{Error, Result};
pub use crate::input::Keymap;
pub use crate::simulator::{SessionStats, Simulator};
pub use crate::utils::Logger;
