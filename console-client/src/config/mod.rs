mod config;
mod game_config;
mod log_config;

pub use config::{Config, MAX_BOT_MOVE_DELAY_MS, get_config_manager};
pub use game_config::GameConfig;
pub use log_config::LogConfig;
