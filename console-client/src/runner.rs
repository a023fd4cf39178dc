use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{
    Difficulty, GameMode, GameStats, Mark, MoveError, TicTacToeSession, Turn, select_move,
};
use common::{debug, log};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::command::{Command, HELP_TEXT, parse_command};
use crate::config::Config;
use crate::render::{render_board, render_stats, render_status};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsoleSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub human_mark: Mark,
    pub bot_move_delay: Duration,
}

impl ConsoleSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            mode: config.game.mode,
            difficulty: config.game.difficulty,
            human_mark: config.game.human_mark,
            bot_move_delay: Duration::from_millis(config.bot_move_delay_ms),
        }
    }
}

pub struct ConsoleGame<W: Write> {
    settings: ConsoleSettings,
    session: TicTacToeSession,
    stats: GameStats,
    rng: Arc<Mutex<SessionRng>>,
    output: W,
    round_recorded: bool,
}

impl<W: Write> ConsoleGame<W> {
    pub fn new(settings: ConsoleSettings, rng: SessionRng, output: W) -> Self {
        Self {
            settings,
            session: TicTacToeSession::new(settings.human_mark),
            stats: GameStats::default(),
            rng: Arc::new(Mutex::new(rng)),
            output,
            round_recorded: false,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs rounds until the input ends or the player quits. Stats persist across restarts.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> io::Result<GameStats> {
        writeln!(self.output, "Tic-Tac-Toe ({})", self.describe_mode())?;
        writeln!(self.output, "Type 'h' for help.")?;
        self.show_position()?;

        let mut lines = input.lines();
        loop {
            if self.computer_to_move() {
                self.play_computer_turn().await?;
                self.after_move()?;
                continue;
            }

            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            match parse_command(&line) {
                Ok(Command::Place(index)) => self.handle_place(index)?,
                Ok(Command::Restart) => self.restart()?,
                Ok(Command::Stats) => writeln!(self.output, "{}", render_stats(&self.stats))?,
                Ok(Command::ResetStats) => {
                    self.stats = GameStats::reset();
                    debug!("Statistics cleared");
                    writeln!(self.output, "Statistics cleared.")?;
                }
                Ok(Command::Help) => writeln!(self.output, "{}", HELP_TEXT)?,
                Ok(Command::Quit) => break,
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }

        writeln!(self.output, "Goodbye!")?;
        writeln!(self.output, "{}", render_stats(&self.stats))?;
        Ok(self.stats)
    }

    fn describe_mode(&self) -> String {
        match self.settings.mode {
            GameMode::SinglePlayer => format!(
                "you play {} against the {} computer",
                self.settings.human_mark, self.settings.difficulty
            ),
            GameMode::LocalMultiplayer => format!(
                "player 1 is {}, player 2 is {}",
                self.settings.human_mark,
                self.settings.human_mark.opponent()
            ),
        }
    }

    fn computer_to_move(&self) -> bool {
        self.settings.mode == GameMode::SinglePlayer
            && !self.session.is_over()
            && self.session.turn() == Turn::Computer
    }

    fn handle_place(&mut self, index: usize) -> io::Result<()> {
        // Player 2 occupies the computer seat in local games.
        let side = match self.settings.mode {
            GameMode::SinglePlayer => Turn::Human,
            GameMode::LocalMultiplayer => self.session.turn(),
        };

        match self.session.place_mark(side, index) {
            Ok(()) => {
                debug!("{:?} placed {} at {}", side, self.session.mark_for(side), index);
                self.after_move()
            }
            Err(MoveError::CellOccupied(_)) => {
                writeln!(self.output, "Cell {} is already taken", index + 1)
            }
            Err(err) => writeln!(self.output, "{}", err),
        }
    }

    async fn play_computer_turn(&mut self) -> io::Result<()> {
        if !self.settings.bot_move_delay.is_zero() {
            tokio::time::sleep(self.settings.bot_move_delay).await;
        }

        let board = *self.session.board();
        let bot_mark = self.session.computer_mark();
        let opponent_mark = self.session.human_mark();
        let difficulty = self.settings.difficulty;
        let rng = Arc::clone(&self.rng);

        let chosen = tokio::task::spawn_blocking(move || {
            let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
            select_move(&board, bot_mark, opponent_mark, difficulty, &mut rng)
        })
        .await
        .map_err(io::Error::other)?;

        let Some(index) = chosen else {
            return Err(io::Error::other("computer found no legal move"));
        };

        self.session
            .place_mark(Turn::Computer, index)
            .map_err(io::Error::other)?;
        debug!("Computer ({}) chose cell {}", difficulty, index);
        writeln!(self.output, "Computer plays {}.", index + 1)
    }

    fn after_move(&mut self) -> io::Result<()> {
        self.show_position()?;

        if let Some(result) = self.session.result()
            && !self.round_recorded
        {
            self.stats = self.stats.record_outcome(result, self.settings.human_mark);
            self.round_recorded = true;
            log!(
                "Round finished: {:?} (wins {}, losses {}, draws {})",
                result,
                self.stats.wins,
                self.stats.losses,
                self.stats.draws
            );
            writeln!(self.output, "Type 'r' to play again or 'q' to quit.")?;
        }
        Ok(())
    }

    fn restart(&mut self) -> io::Result<()> {
        self.session.reset();
        self.round_recorded = false;
        debug!("Round restarted");
        writeln!(self.output, "New round.")?;
        self.show_position()
    }

    fn show_position(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", render_board(&self.session))?;
        writeln!(
            self.output,
            "{}",
            render_status(&self.session, self.settings.mode)
        )
    }
}
