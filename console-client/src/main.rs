mod command;
mod config;
mod render;
mod runner;

use std::path::PathBuf;

use clap::Parser;
use common::config::{ConfigError, ConfigManager, Validate};
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, GameMode, Mark};
use common::{log, logger};
use tokio::io::BufReader;

use config::{Config, MAX_BOT_MOVE_DELAY_MS, get_config_manager};
use runner::{ConsoleGame, ConsoleSettings};

#[derive(Parser, Debug)]
#[command(name = "tictactoe_console", about = "Play tic-tac-toe in the terminal")]
struct Args {
    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// single or local
    #[arg(long)]
    mode: Option<GameMode>,

    /// easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Mark of the human player (X moves first)
    #[arg(long)]
    symbol: Option<Mark>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_parser = clap::value_parser!(u64).range(..=MAX_BOT_MOVE_DELAY_MS))]
    bot_delay_ms: Option<u64>,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the resulting settings back to the config file
    #[arg(long)]
    save_config: bool,
}

fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(mode) = args.mode {
        config.game.mode = mode;
    }
    if let Some(difficulty) = args.difficulty {
        config.game.difficulty = difficulty;
    }
    if let Some(symbol) = args.symbol {
        config.game.human_mark = symbol;
    }
    if let Some(delay) = args.bot_delay_ms {
        config.bot_move_delay_ms = delay;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.log.verbose |= args.verbose;
    config.log.use_prefix |= args.use_log_prefix;
    config
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };
    let config = apply_overrides(config_manager.get_config()?, &args);
    config.validate().map_err(ConfigError::Invalid)?;

    if args.save_config {
        config_manager.set_config(&config)?;
    }

    logger::init_logger(config.log.prefix(), config.log.level());

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting {:?} game as {} (difficulty {}, seed {})",
        config.game.mode,
        config.game.human_mark,
        config.game.difficulty,
        rng.seed()
    );

    let mut game = ConsoleGame::new(ConsoleSettings::from_config(&config), rng, std::io::stdout());
    let stats = game.run(BufReader::new(tokio::io::stdin())).await?;

    log!("Session finished after {} games", stats.total_games());
    Ok(())
}
