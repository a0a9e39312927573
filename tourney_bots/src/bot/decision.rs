//! Preflop and postflop decision policy.

use super::{
    classify::{HandClassification, classify},
    draws::detect_draws,
    knobs::AdaptiveKnobs,
};
use crate::game::{
    entities::{
        Card, Decision, GameStateView, HandCategory, LegalActions, PlayerAction, Round, Usd,
        clip_bet,
    },
    evaluator::HandEvaluator,
};
use crate::info::call_amount;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

/// Configuration for the decision policy's thresholds and bet sizes.
///
/// Probabilities are in `[0.0, 1.0]`. Bet sizes are either multiples of the
/// big blind (preflop) or fractions of the pot (postflop), and every raise is
/// clipped into the engine's `[min_bet, max_bet]` range afterwards.
///
/// # Examples
///
/// ```
/// use tourney_bots::bot::decision::PolicyConfig;
///
/// let config = PolicyConfig::default();
/// assert_eq!(config.loose_call_probability, 0.12);
/// assert_eq!(config.pair_call_pot_divisor, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Whether the play-frequency gate runs before hand classification.
    ///
    /// **Effect**: `true` lets the gate fold (or check) even premium hands;
    /// `false` only gates hands that already classified as playable.
    pub gate_before_classification: bool,

    /// Lower bound of the preflop raise, in big blinds.
    ///
    /// **Range**: 2.0-3.5 (typical: 2.5)
    pub preflop_raise_min_bb: f64,

    /// Upper bound of the preflop raise, in big blinds.
    ///
    /// **Range**: 3.0-5.0 (typical: 4.0)
    /// **Effect**: equal to `preflop_raise_min_bb` gives a fixed-size open
    pub preflop_raise_max_bb: f64,

    /// Chance of limping a weak hand when calling is allowed.
    ///
    /// **Range**: 0.0-0.25 (typical: 0.12)
    pub loose_call_probability: f64,

    /// Weakest made hand that bets for value postflop.
    ///
    /// **Effect**: `two_pair` is the tight variant, `pair` the loose one
    pub strong_hand_floor: HandCategory,

    /// Value raise as a fraction of the pot.
    ///
    /// **Range**: 0.5-1.0 (typical: 1.0)
    pub value_bet_pot_fraction: f64,

    /// A pair calls when the amount to call is at most `pot / divisor`.
    ///
    /// **Range**: 2-5 (typical: 4)
    /// **Higher** = folds pairs to smaller bets
    pub pair_call_pot_divisor: Usd,

    /// Chance of raising with a flush or straight draw.
    ///
    /// **Range**: 0.2-0.6 (typical: 0.4)
    pub semi_bluff_probability: f64,

    /// Semi-bluff raise as a fraction of the pot.
    pub semi_bluff_pot_fraction: f64,

    /// Chance of betting nothing into an unbet pot.
    ///
    /// **Range**: 0.0-0.4 (typical: 0.25)
    pub bluff_probability: f64,

    /// Pure-bluff raise as a fraction of the pot.
    pub bluff_pot_fraction: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            gate_before_classification: true,
            // Preflop sizing
            preflop_raise_min_bb: 2.5,
            preflop_raise_max_bb: 4.0,
            loose_call_probability: 0.12,
            // Made hands
            strong_hand_floor: HandCategory::TwoPair,
            value_bet_pot_fraction: 1.0,
            pair_call_pot_divisor: 4,
            // Draws and bluffs
            semi_bluff_probability: 0.4,
            semi_bluff_pot_fraction: 0.5,
            bluff_probability: 0.25,
            bluff_pot_fraction: 0.5,
        }
    }
}

/// Context for one decision.
///
/// Bundles everything the engine hands over for a single turn.
#[derive(Clone, Copy)]
pub struct DecisionContext<'a> {
    /// Table snapshot
    pub game: &'a GameStateView,

    /// The bot's hole cards
    pub hole_cards: &'a [Card],

    /// Actions the engine accepts this turn
    pub legal_actions: &'a LegalActions,

    /// Smallest legal raise
    pub min_bet: Usd,

    /// Largest legal raise
    pub max_bet: Usd,

    /// Engine-side best-hand evaluator
    pub evaluator: &'a dyn HandEvaluator,
}

impl DecisionContext<'_> {
    /// Hole cards followed by the community cards.
    pub fn visible_cards(&self) -> Vec<Card> {
        let mut all_cards =
            Vec::with_capacity(self.hole_cards.len() + self.game.community_cards.len());
        all_cards.extend_from_slice(self.hole_cards);
        all_cards.extend_from_slice(&self.game.community_cards);
        all_cards
    }
}

fn pot_fraction(pot: Usd, fraction: f64) -> Usd {
    (pot as f64 * fraction) as Usd
}

fn check_or_fold(legal: &LegalActions) -> Decision {
    if legal.contains(PlayerAction::Check) {
        Decision::check()
    } else {
        Decision::fold()
    }
}

/// Decision policy with its own random source.
pub struct DecisionPolicy {
    /// Random number generator
    rng: StdRng,
    /// Configuration for decision-making
    config: PolicyConfig,
}

impl DecisionPolicy {
    /// Create a policy seeded from the operating system.
    pub fn new(config: PolicyConfig) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            config,
        }
    }

    /// Create a policy whose decisions replay exactly for a given seed.
    pub fn with_seed(config: PolicyConfig, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Decide an action for `name` on this turn.
    ///
    /// The result is always drawn from `ctx.legal_actions` (or is a fold when
    /// that set is empty) and a raise is always within `[min_bet, max_bet]`.
    pub fn decide(
        &mut self,
        name: &str,
        knobs: &AdaptiveKnobs,
        ctx: &DecisionContext,
    ) -> Decision {
        let preferred = match ctx.game.round {
            Round::Preflop => self.preflop(knobs, ctx),
            _ => self.postflop(name, ctx),
        };
        let decision = ctx
            .legal_actions
            .resolve(preferred, ctx.min_bet, ctx.max_bet);

        log::debug!(
            "{name} {} with {} from {}: {decision}",
            ctx.game.round,
            crate::info::format_cards(ctx.hole_cards),
            ctx.legal_actions
        );
        decision
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }

    /// Whether the play-frequency gate filters this hand out.
    fn gated_out(&mut self, knobs: &AdaptiveKnobs) -> bool {
        !self.chance(knobs.play_frequency)
    }

    fn preflop(&mut self, knobs: &AdaptiveKnobs, ctx: &DecisionContext) -> Decision {
        let legal = ctx.legal_actions;

        let Some(class) = classify(ctx.hole_cards) else {
            log::warn!(
                "Expected 2 hole cards, got {}; folding",
                ctx.hole_cards.len()
            );
            return Decision::fold();
        };

        if self.config.gate_before_classification && self.gated_out(knobs) {
            return check_or_fold(legal);
        }

        if class == HandClassification::Weak {
            if legal.contains(PlayerAction::Call)
                && self.chance(self.config.loose_call_probability)
            {
                return Decision::call();
            }
            return check_or_fold(legal);
        }

        if !self.config.gate_before_classification && self.gated_out(knobs) {
            return check_or_fold(legal);
        }

        if legal.contains(PlayerAction::Raise) && self.chance(knobs.raise_frequency) {
            let amount = self.preflop_raise_amount(ctx.game.big_blind);
            return Decision::raise(clip_bet(amount, ctx.min_bet, ctx.max_bet));
        }

        if legal.contains(PlayerAction::Call) {
            Decision::call()
        } else {
            Decision::check()
        }
    }

    fn preflop_raise_amount(&mut self, big_blind: Usd) -> Usd {
        let (lo, hi) = (
            self.config.preflop_raise_min_bb,
            self.config.preflop_raise_max_bb,
        );
        let multiple = if lo.is_finite() && hi.is_finite() && lo < hi {
            self.rng.random_range(lo..=hi)
        } else {
            lo
        };
        (multiple * big_blind as f64) as Usd
    }

    fn postflop(&mut self, name: &str, ctx: &DecisionContext) -> Decision {
        let legal = ctx.legal_actions;
        let game = ctx.game;
        let all_cards = ctx.visible_cards();
        let category = ctx.evaluator.evaluate_best_hand(&all_cards).category;
        let (min_bet, max_bet) = (ctx.min_bet, ctx.max_bet);

        // Strong made hands bet for value.
        if category >= self.config.strong_hand_floor {
            if legal.contains(PlayerAction::Raise) {
                let amount = pot_fraction(game.pot, self.config.value_bet_pot_fraction);
                return Decision::raise(clip_bet(amount, min_bet, max_bet));
            }
            if legal.contains(PlayerAction::Call) {
                return Decision::call();
            }
            return Decision::check();
        }

        if category >= HandCategory::Pair {
            let to_call = call_amount(game.current_bet, game.committed_by(name));
            let divisor = self.config.pair_call_pot_divisor.max(1);
            if legal.contains(PlayerAction::Call) && to_call <= game.pot / divisor {
                return Decision::call();
            }
            if legal.contains(PlayerAction::Check) {
                return Decision::check();
            }
        }

        if detect_draws(&all_cards).any() {
            if legal.contains(PlayerAction::Raise)
                && self.chance(self.config.semi_bluff_probability)
            {
                let amount = pot_fraction(game.pot, self.config.semi_bluff_pot_fraction);
                return Decision::raise(clip_bet(amount, min_bet, max_bet));
            }
            if legal.contains(PlayerAction::Call) {
                return Decision::call();
            }
            // Draws never fall through to a pure bluff.
            return check_or_fold(legal);
        }

        if game.current_bet == 0
            && legal.contains(PlayerAction::Raise)
            && self.chance(self.config.bluff_probability)
        {
            let amount = pot_fraction(game.pot, self.config.bluff_pot_fraction);
            return Decision::raise(clip_bet(amount, min_bet, max_bet));
        }

        check_or_fold(legal)
    }
}
