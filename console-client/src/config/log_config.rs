use common::logger::LogLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct LogConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub use_prefix: bool,
}

impl LogConfig {
    pub fn level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }

    pub fn prefix(&self) -> Option<String> {
        self.use_prefix.then(|| "Console".to_string())
    }
}
