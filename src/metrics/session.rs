use std::time::{Duration, Instant};

/// Counters that outlive any single game: the age of the game in progress,
/// how many games this process has seen, and the best score so far. Nothing
/// is written to disk; quitting forgets all of it.
#[derive(Debug)]
pub struct SessionStats {
    clock_started: Instant,
    elapsed: Duration,
    pub games_played: u32,
    pub high_score: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            clock_started: Instant::now(),
            elapsed: Duration::ZERO,
            games_played: 0,
            high_score: 0,
        }
    }

    /// Take a fresh reading of the in-progress game's age. The render loop
    /// calls this once per frame so the header clock stays current.
    pub fn refresh_clock(&mut self) {
        self.elapsed = self.clock_started.elapsed();
    }

    /// Zero the clock for a new game. The games-played count and the high
    /// score carry across restarts.
    pub fn restart_clock(&mut self) {
        self.clock_started = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    /// Fold a finished game into the counters
    pub fn record_game(&mut self, score: u32) {
        self.games_played += 1;
        self.high_score = self.high_score.max(score);
    }

    /// The clock reading as `MM:SS`
    pub fn elapsed_text(&self) -> String {
        mmss(self.elapsed)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Minutes run past 59 rather than rolling into hours; a Snake game that
/// long deserves the big number.
fn mmss(elapsed: Duration) -> String {
    let minutes = elapsed.as_secs() / 60;
    let seconds = elapsed.as_secs() % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mmss_pads_and_runs_past_the_hour() {
        assert_eq!(mmss(Duration::ZERO), "00:00");
        assert_eq!(mmss(Duration::from_secs(9)), "00:09");
        assert_eq!(mmss(Duration::from_secs(547)), "09:07");
        assert_eq!(mmss(Duration::from_secs(7205)), "120:05");
    }

    #[test]
    fn test_record_game_keeps_a_running_max() {
        let mut stats = SessionStats::new();

        stats.record_game(0);
        stats.record_game(6);
        stats.record_game(4);
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.high_score, 6);

        // Clearing a 10x10 board scores 97, beating any ordinary run
        stats.record_game(97);
        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.high_score, 97);
    }

    #[test]
    fn test_restart_zeroes_the_clock_but_not_the_counters() {
        let mut stats = SessionStats::new();
        std::thread::sleep(Duration::from_millis(15));
        stats.refresh_clock();
        assert!(stats.elapsed >= Duration::from_millis(15));
        stats.record_game(5);

        stats.restart_clock();

        assert_eq!(stats.elapsed, Duration::ZERO);
        assert_eq!(stats.elapsed_text(), "00:00");
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.high_score, 5);
    }
}
