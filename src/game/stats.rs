//! Win/loss statistics across sessions

use super::session::{Session, Status};

/// Running totals over finished sessions
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `guess_distribution[n]` counts wins on attempt `n`; index 0 is unused
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished session; active sessions are ignored
    ///
    /// Returns whether the session was counted.
    pub fn record(&mut self, session: &Session<'_>) -> bool {
        match session.status() {
            Status::Active => return false,
            Status::Won => {
                let attempts = session.attempts();
                if self.guess_distribution.len() <= attempts {
                    self.guess_distribution.resize(attempts + 1, 0);
                }
                self.guess_distribution[attempts] += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            Status::Lost => self.current_streak = 0,
        }
        self.games_played += 1;
        true
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::dictionary::Dictionary;
    use crate::game::SessionConfig;

    fn play<'a>(dict: &'a Dictionary, target: &str, guesses: &[&str]) -> Session<'a> {
        let config = SessionConfig::default().with_max_attempts(2);
        let mut session = Session::with_target(dict, Word::new(target).unwrap(), config).unwrap();
        for guess in guesses {
            session.submit_guess(guess).unwrap();
        }
        session
    }

    #[test]
    fn records_wins_losses_and_streaks() {
        let dict = Dictionary::load(["crane", "slate", "robot"]).unwrap();
        let mut stats = Statistics::default();

        assert!(stats.record(&play(&dict, "crane", &["crane"])));
        assert!(stats.record(&play(&dict, "crane", &["slate", "crane"])));
        assert!(stats.record(&play(&dict, "crane", &["slate", "robot"])));
        assert!(stats.record(&play(&dict, "robot", &["robot"])));

        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution, vec![0, 2, 1]);
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn active_sessions_are_not_counted() {
        let dict = Dictionary::load(["crane", "slate"]).unwrap();
        let mut stats = Statistics::default();

        assert!(!stats.record(&play(&dict, "crane", &["slate"])));
        assert_eq!(stats, Statistics::default());
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }
}
