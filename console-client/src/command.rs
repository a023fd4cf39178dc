use common::games::tictactoe::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index.
    Place(usize),
    Restart,
    Stats,
    ResetStats,
    Help,
    Quit,
}

/// Cells are typed 1-9 (1 = top-left), everything else is a keyword.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let input = line.trim().to_ascii_lowercase();

    if let Ok(number) = input.parse::<usize>() {
        if (1..=BOARD_SIZE).contains(&number) {
            return Ok(Command::Place(number - 1));
        }
        return Err(format!("Cell number must be between 1 and {}", BOARD_SIZE));
    }

    match input.as_str() {
        "r" | "restart" => Ok(Command::Restart),
        "s" | "stats" => Ok(Command::Stats),
        "reset-stats" => Ok(Command::ResetStats),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "" => Err("Enter a cell number (1-9) or 'h' for help".to_string()),
        other => Err(format!("Unknown command '{}', type 'h' for help", other)),
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9          place your mark (1 = top-left, 9 = bottom-right)
  r, restart   start a new round
  s, stats     show statistics
  reset-stats  clear statistics
  h, help      show this help
  q, quit      leave the game";
