use common::games::tictactoe::{Difficulty, GameMode, Mark};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub human_mark: Mark,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::SinglePlayer,
            difficulty: Difficulty::Medium,
            human_mark: Mark::X,
        }
    }
}
