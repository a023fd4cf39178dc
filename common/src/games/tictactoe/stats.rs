use serde::{Deserialize, Serialize};

use super::types::{GameResult, Mark};

/// Running totals from the human's point of view. Outlives individual
/// sessions and is cleared only on request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub current_streak: u32,
    pub best_streak: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinRateTier {
    Good,
    Fair,
    Poor,
}

impl GameStats {
    /// Folds one finished game into the totals. Streaks count consecutive
    /// human wins; a draw or a loss ends the streak.
    pub fn record_outcome(self, result: GameResult, human_mark: Mark) -> GameStats {
        match result {
            GameResult::Draw => GameStats {
                draws: self.draws + 1,
                current_streak: 0,
                ..self
            },
            GameResult::Won(mark) if mark == human_mark => {
                let current_streak = self.current_streak + 1;
                GameStats {
                    wins: self.wins + 1,
                    current_streak,
                    best_streak: self.best_streak.max(current_streak),
                    ..self
                }
            }
            GameResult::Won(_) => GameStats {
                losses: self.losses + 1,
                current_streak: 0,
                ..self
            },
        }
    }

    pub fn reset() -> GameStats {
        GameStats::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    pub fn win_rate(&self) -> u32 {
        self.percentage(self.wins)
    }

    pub fn loss_rate(&self) -> u32 {
        self.percentage(self.losses)
    }

    pub fn draw_rate(&self) -> u32 {
        self.percentage(self.draws)
    }

    pub fn win_rate_tier(&self) -> WinRateTier {
        match self.win_rate() {
            70.. => WinRateTier::Good,
            40.. => WinRateTier::Fair,
            _ => WinRateTier::Poor,
        }
    }

    // Rounds half up.
    fn percentage(&self, count: u32) -> u32 {
        let total = u64::from(self.total_games());
        if total == 0 {
            return 0;
        }
        ((u64::from(count) * 200 + total) / (total * 2)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(outcomes: &[GameResult], human_mark: Mark) -> GameStats {
        outcomes
            .iter()
            .fold(GameStats::default(), |stats, &result| stats.record_outcome(result, human_mark))
    }

    #[test]
    fn test_counts_follow_outcomes() {
        let win = GameResult::Won(Mark::O);
        let loss = GameResult::Won(Mark::X);
        let draw = GameResult::Draw;

        let stats = replay(&[win, loss, draw, win, draw, loss, loss], Mark::O);

        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 3);
        assert_eq!(stats.draws, 2);
        assert_eq!(stats.total_games(), 7);
    }

    #[test]
    fn test_streaks_track_trailing_and_longest_runs() {
        let win = GameResult::Won(Mark::X);
        let loss = GameResult::Won(Mark::O);
        let draw = GameResult::Draw;

        let stats = replay(&[win, win, win, draw, win, loss, win, win], Mark::X);

        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.best_streak, 3);
    }

    #[test]
    fn test_streaks_match_run_lengths_for_many_sequences() {
        let outcomes = [GameResult::Won(Mark::X), GameResult::Won(Mark::O), GameResult::Draw];
        // Every sequence of length 6 over {win, loss, draw}.
        for code in 0..3u32.pow(6) {
            let sequence: Vec<GameResult> = (0..6)
                .map(|position| outcomes[(code / 3u32.pow(position) % 3) as usize])
                .collect();
            let is_win: Vec<bool> = sequence.iter().map(|r| *r == outcomes[0]).collect();
            let trailing = is_win.iter().rev().take_while(|w| **w).count() as u32;
            let longest = is_win
                .split(|w| !*w)
                .map(|run| run.len() as u32)
                .max()
                .unwrap_or(0);

            let stats = replay(&sequence, Mark::X);

            assert_eq!(stats.current_streak, trailing);
            assert_eq!(stats.best_streak, longest);
            assert_eq!(stats.wins, is_win.iter().filter(|w| **w).count() as u32);
        }
    }

    #[test]
    fn test_rates_round_half_up() {
        let stats = GameStats {
            wins: 1,
            losses: 1,
            draws: 6,
            ..GameStats::default()
        };

        // 12.5% rounds to 13, 75% stays 75.
        assert_eq!(stats.win_rate(), 13);
        assert_eq!(stats.loss_rate(), 13);
        assert_eq!(stats.draw_rate(), 75);
    }

    #[test]
    fn test_rates_are_zero_without_games() {
        let stats = GameStats::default();

        assert_eq!(stats.win_rate(), 0);
        assert_eq!(stats.draw_rate(), 0);
        assert_eq!(stats.win_rate_tier(), WinRateTier::Poor);
    }

    #[test]
    fn test_win_rate_tiers() {
        let tier = |wins, losses| {
            GameStats {
                wins,
                losses,
                ..GameStats::default()
            }
            .win_rate_tier()
        };

        assert_eq!(tier(7, 3), WinRateTier::Good);
        assert_eq!(tier(4, 6), WinRateTier::Fair);
        assert_eq!(tier(3, 7), WinRateTier::Poor);
    }

    #[test]
    fn test_reset_clears_everything() {
        let stats = replay(&[GameResult::Won(Mark::X), GameResult::Draw], Mark::X);

        assert_ne!(stats, GameStats::reset());
        assert_eq!(GameStats::reset(), GameStats::default());
    }
}
