use common::games::tictactoe::{
    BOARD_WIDTH, GameMode, GameResult, GameStats, Mark, TicTacToeSession, Turn, WinRateTier,
};

/// Empty cells show their number, cells of the winning line are starred.
pub fn render_board(session: &TicTacToeSession) -> String {
    let winning_line = session.winning_line();
    let rows: Vec<String> = session
        .board()
        .cells()
        .chunks(BOARD_WIDTH)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(column, cell)| {
                    let index = row * BOARD_WIDTH + column;
                    let highlighted = winning_line.is_some_and(|line| line.contains(index));
                    match (cell, highlighted) {
                        (Some(mark), true) => format!("*{}*", mark),
                        (Some(mark), false) => format!(" {} ", mark),
                        (None, _) => format!(" {} ", index + 1),
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn seat_name(mode: GameMode, side: Turn) -> &'static str {
    match (mode, side) {
        (GameMode::SinglePlayer, Turn::Human) => "You",
        (GameMode::SinglePlayer, Turn::Computer) => "Computer",
        (GameMode::LocalMultiplayer, Turn::Human) => "Player 1",
        (GameMode::LocalMultiplayer, Turn::Computer) => "Player 2",
    }
}

pub fn render_status(session: &TicTacToeSession, mode: GameMode) -> String {
    match session.result() {
        Some(GameResult::Draw) => "It's a draw!".to_string(),
        Some(GameResult::Won(mark)) => render_winner(session, mode, mark),
        None => {
            let side = session.turn();
            match (mode, side) {
                (GameMode::SinglePlayer, Turn::Human) => {
                    format!("Your turn ({})", session.current_mark())
                }
                (GameMode::SinglePlayer, Turn::Computer) => {
                    format!("Computer is thinking ({})", session.current_mark())
                }
                (GameMode::LocalMultiplayer, _) => {
                    format!("{}'s turn ({})", seat_name(mode, side), session.current_mark())
                }
            }
        }
    }
}

fn render_winner(session: &TicTacToeSession, mode: GameMode, mark: Mark) -> String {
    let side = if mark == session.human_mark() {
        Turn::Human
    } else {
        Turn::Computer
    };
    match (mode, side) {
        (GameMode::SinglePlayer, Turn::Human) => format!("You win with {}!", mark),
        (GameMode::SinglePlayer, Turn::Computer) => format!("Computer wins with {}!", mark),
        (GameMode::LocalMultiplayer, _) => {
            format!("{} wins with {}!", seat_name(mode, side), mark)
        }
    }
}

fn tier_label(tier: WinRateTier) -> &'static str {
    match tier {
        WinRateTier::Good => "good",
        WinRateTier::Fair => "fair",
        WinRateTier::Poor => "poor",
    }
}

pub fn render_stats(stats: &GameStats) -> String {
    format!(
        "Wins: {}  Losses: {}  Draws: {}\n\
         Current streak: {}  Best streak: {}\n\
         Total games: {}  Win rate: {}% ({})  Loss rate: {}%  Draw rate: {}%",
        stats.wins,
        stats.losses,
        stats.draws,
        stats.current_streak,
        stats.best_streak,
        stats.total_games(),
        stats.win_rate(),
        tier_label(stats.win_rate_tier()),
        stats.loss_rate(),
        stats.draw_rate(),
    )
}
