//! In-memory player statistics.

use crate::game_state::GameResult;
use crate::info_log;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub games_played: u32,
    pub wins: u32,
    /// Sum of tries over won games only
    pub tries: u32,
}

impl PlayerStats {
    /// Percentage of games won, rounded to two decimals.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        let rate = f64::from(self.wins) / f64::from(self.games_played) * 100.0;
        (rate * 100.0).round() / 100.0
    }

    /// Average tries per win, `None` before the first win.
    #[must_use]
    pub fn average_tries(&self) -> Option<f64> {
        (self.wins > 0).then(|| {
            let avg = f64::from(self.tries) / f64::from(self.wins);
            (avg * 100.0).round() / 100.0
        })
    }
}

/// Statistics for every player seen this session, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct Players {
    players: BTreeMap<String, PlayerStats>,
}

impl Players {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a new game for `name`, creating the player on first sight.
    pub fn begin_game(&mut self, name: &str) -> &PlayerStats {
        let stats = self.players.entry(name.to_string()).or_default();
        stats.games_played += 1;
        info_log!("Player {} starting game {}", name, stats.games_played);
        stats
    }

    /// Fold a finished round into the player's totals. Unknown players are ignored.
    pub fn record_result(&mut self, name: &str, result: &GameResult) {
        let Some(stats) = self.players.get_mut(name) else {
            log::warn!("record_result() for unknown player {name}");
            return;
        };
        if let GameResult::Won { tries } = result {
            stats.wins += 1;
            stats.tries += u32::try_from(*tries).unwrap_or(u32::MAX);
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PlayerStats> {
        self.players.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PlayerStats)> {
        self.players.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
