use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{GameConfig, LogConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";

pub const MAX_BOT_MOVE_DELAY_MS: u64 = 5000;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub bot_move_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.bot_move_delay_ms > MAX_BOT_MOVE_DELAY_MS {
            return Err(format!(
                "bot_move_delay_ms must not exceed {} (got {})",
                MAX_BOT_MOVE_DELAY_MS, self.bot_move_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            bot_move_delay_ms: 600,
            seed: None,
            log: LogConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigError, ConfigSerializer};
    use common::games::tictactoe::{Difficulty, GameMode, Mark};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_console_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();

        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = Config {
            game: GameConfig {
                mode: GameMode::LocalMultiplayer,
                difficulty: Difficulty::Hard,
                human_mark: Mark::O,
            },
            bot_move_delay_ms: 0,
            seed: Some(42),
            log: LogConfig {
                verbose: true,
                use_prefix: false,
            },
        };
        let file_path = get_temp_file_path();
        let manager = ConfigManager::from_yaml_file(&file_path);

        manager.set_config(&config).unwrap();

        let fresh_manager: ConfigManager<_, Config, _> = ConfigManager::from_yaml_file(&file_path);
        assert_eq!(fresh_manager.get_config().unwrap(), config);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager: ConfigManager<_, Config, _> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");

        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_hand_written_file_is_read() {
        let content = r#"
            game:
              mode: single_player
              difficulty: easy
              human_mark: O
            bot_move_delay_ms: 250
        "#;
        let file_path = get_temp_file_path();
        FileContentConfigProvider::new(&file_path)
            .set_config_content(content)
            .unwrap();
        let manager: ConfigManager<_, Config, _> = ConfigManager::from_yaml_file(&file_path);

        let config = manager.get_config().unwrap();

        assert_eq!(config.game.difficulty, Difficulty::Easy);
        assert_eq!(config.game.human_mark, Mark::O);
        assert_eq!(config.bot_move_delay_ms, 250);
        assert_eq!(config.seed, None);
        assert_eq!(config.log, LogConfig::default());
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            game:
              mode: single_player
              difficulty: nightmare
              human_mark: X
            bot_move_delay_ms: 200
        "#;
        let file_path = get_temp_file_path();
        FileContentConfigProvider::new(&file_path)
            .set_config_content(invalid_config_content)
            .unwrap();
        let manager: ConfigManager<_, Config, _> = ConfigManager::from_yaml_file(&file_path);

        let get_result = manager.get_config();

        assert!(matches!(get_result, Err(ConfigError::Deserialize(_))));
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_too_long_delay_is_rejected() {
        let config = Config {
            bot_move_delay_ms: MAX_BOT_MOVE_DELAY_MS + 1,
            ..Config::default()
        };
        let manager: ConfigManager<_, Config, _> =
            ConfigManager::from_yaml_file(get_temp_file_path());

        assert!(matches!(manager.set_config(&config), Err(ConfigError::Invalid(_))));
    }
}
