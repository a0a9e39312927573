//! Tournament bots and the decision logic they share.
//!
//! This module implements:
//! - Hole-card classification and draw detection
//! - The preflop/postflop decision policy
//! - Adaptive raise/play knobs that drift with results
//! - [`PokerBot`], the lifecycle interface the protocol session drives
//! - [`Bot`], a zero-cost dispatch over every concrete bot
//!
//! ## Bots
//!
//! ### Hybrid
//! - Folds everything outside a small premium/pair/connector set
//! - Raises strong made hands, semi-bluffs draws, and bluffs unbet pots
//! - Loosens after wins and tightens after losses
//!
//! ### Random
//! - Picks any legal action uniformly
//! - Raises a random amount up to 1.5x the pot
//!
//! ## Example
//!
//! ```
//! use tourney_bots::bot::{Bot, PokerBot, models::BotKind};
//! use tourney_bots::config::BotSettings;
//!
//! let bot = Bot::from_kind(BotKind::Hybrid, "hero", &BotSettings::default(), Some(7));
//! assert_eq!(bot.name(), "hero");
//! ```

use crate::config::BotSettings;
use crate::game::entities::{Decision, GameStateView, HandResult, Standing, Usd};
use enum_dispatch::enum_dispatch;

pub mod classify;
pub mod decision;
pub mod draws;
pub mod hybrid;
pub mod knobs;
pub mod models;
pub mod random;

pub use classify::{HandClassification, classify};
pub use decision::{DecisionContext, DecisionPolicy, PolicyConfig};
pub use draws::{DrawFlags, detect_draws};
pub use hybrid::HybridBot;
pub use knobs::{AdaptiveKnobs, KnobsConfig};
pub use models::{BotKind, BotStats};
pub use random::RandomBot;

/// Lifecycle hooks a tournament engine invokes on each seated bot.
#[enum_dispatch]
pub trait PokerBot {
    fn name(&self) -> &str;

    /// Choose an action for the current decision point. The returned action
    /// is always a member of `ctx.legal_actions` unless that set is empty.
    fn get_action(&mut self, ctx: &DecisionContext) -> Decision;

    fn hand_complete(&mut self, game: &GameStateView, result: &HandResult);

    fn tournament_start(&mut self, players: &[String], starting_chips: Usd);

    fn tournament_end(&mut self, _standings: &[Standing]) {}

    fn stats(&self) -> &BotStats;
}

#[enum_dispatch(PokerBot)]
pub enum Bot {
    HybridBot,
    RandomBot,
}

impl Bot {
    /// Build a bot of the given kind. A seed makes its decisions reproducible.
    pub fn from_kind(
        kind: BotKind,
        name: impl Into<String>,
        settings: &BotSettings,
        seed: Option<u64>,
    ) -> Self {
        match kind {
            BotKind::Hybrid => HybridBot::from_settings(name, settings, seed).into(),
            BotKind::Random => match seed {
                Some(seed) => RandomBot::with_seed(name, seed).into(),
                None => RandomBot::new(name).into(),
            },
        }
    }

    pub fn kind(&self) -> BotKind {
        match self {
            Bot::HybridBot(_) => BotKind::Hybrid,
            Bot::RandomBot(_) => BotKind::Random,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kind_dispatches() {
        let settings = BotSettings::default();
        for kind in [BotKind::Hybrid, BotKind::Random] {
            let bot = Bot::from_kind(kind, "seat1", &settings, Some(1));
            assert_eq!(bot.kind(), kind);
            assert_eq!(bot.name(), "seat1");
            assert_eq!(bot.stats().hands_played, 0);
        }
    }

    #[test]
    fn test_default_tournament_end_is_noop() {
        let mut bot = Bot::from_kind(BotKind::Random, "seat1", &BotSettings::default(), Some(1));
        bot.tournament_end(&[]);
        assert_eq!(bot.stats().hands_played, 0);
    }
}
