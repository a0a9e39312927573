//! Random bot: any legal action, any legal raise size. Handy as sparring
//! for the other bots and for exercising an engine's validation.

use super::{PokerBot, decision::DecisionContext, models::BotStats};
use crate::game::entities::{Decision, GameStateView, HandResult, PlayerAction, Usd};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IteratorRandom};

/// Raises are drawn up to this multiple of the pot.
const POT_RAISE_LIMIT: f64 = 1.5;

/// Hands between progress log lines.
const LOG_EVERY_HANDS: u32 = 50;

pub struct RandomBot {
    name: String,
    rng: StdRng,
    stats: BotStats,
}

impl RandomBot {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_rng(name, StdRng::from_os_rng())
    }

    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self::from_rng(name, StdRng::seed_from_u64(seed))
    }

    fn from_rng(name: impl Into<String>, rng: StdRng) -> Self {
        Self {
            name: name.into(),
            rng,
            stats: BotStats::default(),
        }
    }
}

impl PokerBot for RandomBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_action(&mut self, ctx: &DecisionContext) -> Decision {
        let Some(action) = ctx.legal_actions.iter().choose(&mut self.rng) else {
            return Decision::fold();
        };

        let decision = match action {
            PlayerAction::Raise => {
                let pot_limit = (ctx.game.pot as f64 * POT_RAISE_LIMIT) as Usd;
                let max_raise = pot_limit.min(ctx.max_bet).max(ctx.min_bet);
                Decision::raise(self.rng.random_range(ctx.min_bet..=max_raise))
            }
            PlayerAction::Call => Decision::call(),
            PlayerAction::Check => Decision::check(),
            PlayerAction::Fold => Decision::fold(),
        };
        self.stats.record_decision(&decision);
        decision
    }

    fn hand_complete(&mut self, _game: &GameStateView, result: &HandResult) {
        self.stats.record_hand(result.is_winner(&self.name));
        if self.stats.hands_played % LOG_EVERY_HANDS == 0 {
            log::info!(
                "{} played {} hands randomly",
                self.name,
                self.stats.hands_played
            );
        }
    }

    fn tournament_start(&mut self, players: &[String], starting_chips: Usd) {
        log::info!(
            "{} joining {} players with {} chips",
            self.name,
            players.len(),
            starting_chips
        );
    }

    fn stats(&self) -> &BotStats {
        &self.stats
    }
}
