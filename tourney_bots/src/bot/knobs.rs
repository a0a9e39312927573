//! Per-bot aggression knobs that drift with results.

use serde::{Deserialize, Serialize};

/// Tuning for how [`AdaptiveKnobs`] move after hands and at tournament start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnobsConfig {
    /// Raise frequency gained per won hand.
    pub win_raise_step: f64,

    /// Play frequency gained per won hand.
    pub win_play_step: f64,

    /// Raise frequency lost per lost hand.
    pub loss_raise_step: f64,

    /// Play frequency lost per lost hand.
    pub loss_play_step: f64,

    /// Inclusive `(low, high)` range result updates keep raise frequency in.
    pub raise_bounds: (f64, f64),

    /// Inclusive `(low, high)` range result updates keep play frequency in.
    pub play_bounds: (f64, f64),

    /// Tables with at most this many players use the short-handed preset.
    pub short_table_max_players: usize,

    /// `(raise, play)` preset for short-handed tables.
    pub short_table_preset: (f64, f64),

    /// Tables with at least this many players use the full-ring preset.
    pub full_table_min_players: usize,

    /// `(raise, play)` preset for full-ring tables.
    pub full_table_preset: (f64, f64),
}

impl Default for KnobsConfig {
    fn default() -> Self {
        Self {
            win_raise_step: 0.02,
            win_play_step: 0.01,
            loss_raise_step: 0.01,
            loss_play_step: 0.01,
            raise_bounds: (0.3, 0.8),
            play_bounds: (0.6, 0.9),
            short_table_max_players: 4,
            short_table_preset: (0.6, 0.85),
            full_table_min_players: 8,
            full_table_preset: (0.45, 0.7),
        }
    }
}

/// Probability knobs owned by one bot for the length of a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveKnobs {
    /// Chance of raising a playable preflop hand.
    pub raise_frequency: f64,

    /// Chance a preflop hand gets past the random fold gate.
    pub play_frequency: f64,
}

impl Default for AdaptiveKnobs {
    fn default() -> Self {
        Self {
            raise_frequency: 0.5,
            play_frequency: 0.75,
        }
    }
}

impl AdaptiveKnobs {
    /// Build knobs from explicit frequencies, clamped to valid probabilities.
    pub fn new(raise_frequency: f64, play_frequency: f64) -> Self {
        Self {
            raise_frequency: raise_frequency.clamp(0.0, 1.0),
            play_frequency: play_frequency.clamp(0.0, 1.0),
        }
    }

    /// Nudge the knobs after a finished hand: looser after a win, tighter
    /// after a loss. Both stay within the configured bounds.
    pub fn on_hand_complete(&mut self, won: bool, config: &KnobsConfig) {
        let (raise_delta, play_delta) = if won {
            (config.win_raise_step, config.win_play_step)
        } else {
            (-config.loss_raise_step, -config.loss_play_step)
        };

        self.raise_frequency = bounded(self.raise_frequency + raise_delta, config.raise_bounds);
        self.play_frequency = bounded(self.play_frequency + play_delta, config.play_bounds);
    }

    /// Rescale the knobs for the table size. Mid-sized tables keep the
    /// current values.
    pub fn on_tournament_start(&mut self, player_count: usize, config: &KnobsConfig) {
        let preset = if player_count <= config.short_table_max_players {
            Some(config.short_table_preset)
        } else if player_count >= config.full_table_min_players {
            Some(config.full_table_preset)
        } else {
            None
        };

        if let Some((raise, play)) = preset {
            *self = Self::new(raise, play);
        }
    }
}

/// Keep `value` inside `(low, high)` on both ends. Unlike `f64::clamp` this
/// never panics on inverted or NaN bounds.
fn bounded(value: f64, (low, high): (f64, f64)) -> f64 {
    value.min(high).max(low)
}
