//! Hybrid bot: conservative starting-hand selection, aggressive postflop play,
//! and knobs that loosen after wins and tighten after losses.

use super::{
    PokerBot,
    decision::{DecisionContext, DecisionPolicy},
    knobs::{AdaptiveKnobs, KnobsConfig},
    models::BotStats,
};
use crate::config::BotSettings;
use crate::game::entities::{Decision, GameStateView, HandResult, Standing, Usd};

pub struct HybridBot {
    /// Seat name the engine knows this bot by
    name: String,

    /// Current raise/play frequencies
    knobs: AdaptiveKnobs,

    /// How the knobs move
    knobs_config: KnobsConfig,

    /// Decision-making policy and random source
    policy: DecisionPolicy,

    /// Statistics tracker
    stats: BotStats,
}

impl HybridBot {
    /// Create a hybrid bot with default settings and an OS-seeded random source.
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_settings(name, &BotSettings::default(), None)
    }

    /// Create a hybrid bot that replays the same decisions for the same seed.
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self::from_settings(name, &BotSettings::default(), Some(seed))
    }

    pub fn from_settings(
        name: impl Into<String>,
        settings: &BotSettings,
        seed: Option<u64>,
    ) -> Self {
        let policy = match seed {
            Some(seed) => DecisionPolicy::with_seed(settings.policy.clone(), seed),
            None => DecisionPolicy::new(settings.policy.clone()),
        };
        Self {
            name: name.into(),
            knobs: settings.initial_knobs,
            knobs_config: settings.knobs.clone(),
            policy,
            stats: BotStats::default(),
        }
    }

    pub fn knobs(&self) -> &AdaptiveKnobs {
        &self.knobs
    }

    /// Override the current knobs, e.g. to pin frequencies in a simulation.
    pub fn set_knobs(&mut self, knobs: AdaptiveKnobs) {
        self.knobs = knobs;
    }
}

impl PokerBot for HybridBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_action(&mut self, ctx: &DecisionContext) -> Decision {
        let decision = self.policy.decide(&self.name, &self.knobs, ctx);
        self.stats.record_decision(&decision);
        decision
    }

    fn hand_complete(&mut self, _game: &GameStateView, result: &HandResult) {
        let won = result.is_winner(&self.name);
        self.stats.record_hand(won);
        self.knobs.on_hand_complete(won, &self.knobs_config);
        log::debug!(
            "{} {} hand {}; raise {:.2}, play {:.2}",
            self.name,
            if won { "won" } else { "lost" },
            self.stats.hands_played,
            self.knobs.raise_frequency,
            self.knobs.play_frequency
        );
    }

    fn tournament_start(&mut self, players: &[String], starting_chips: Usd) {
        self.knobs.on_tournament_start(players.len(), &self.knobs_config);
        log::info!(
            "{} starting a {}-player tournament with {} chips; raise {:.2}, play {:.2}",
            self.name,
            players.len(),
            starting_chips,
            self.knobs.raise_frequency,
            self.knobs.play_frequency
        );
    }

    fn tournament_end(&mut self, standings: &[Standing]) {
        match standings.iter().find(|s| s.name == self.name) {
            Some(standing) => log::info!(
                "{} finished #{} with {} chips after {} hands ({:.0}% won)",
                self.name,
                standing.placement,
                standing.chips,
                self.stats.hands_played,
                self.stats.win_rate() * 100.0
            ),
            None => log::warn!("{} missing from final standings", self.name),
        }
    }

    fn stats(&self) -> &BotStats {
        &self.stats
    }
}
