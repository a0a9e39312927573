//! Stateless queries over a table snapshot.
//!
//! None of these functions mutate the snapshot; bots and engine-side tools can
//! call them freely while deciding.

use crate::bot::{decision::PolicyConfig, draws::detect_draws};
use crate::game::{
    entities::{Card, GameStateView, HandCategory, Usd},
    evaluator::{BestHand, HandEvaluator},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pot odds at or above this ratio make a draw worth a raise.
const DRAW_RAISE_POT_ODDS: f64 = 3.0;

/// A player's seat relative to whoever acts now.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PositionInfo {
    /// 0-based position, 0 being the player to act
    pub position: usize,

    /// Number of active players acting after this one
    pub players_after: usize,

    /// Whether this player acts last
    pub is_last: bool,
}

/// Coarse advice on how hard to push a hand.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggression {
    Raise,
    Call,
    CheckFold,
}

/// Ratio of the pot to the amount needed to call. Infinite when calling is
/// free.
pub fn pot_odds(pot: Usd, call_amount: Usd) -> f64 {
    if call_amount == 0 {
        return f64::INFINITY;
    }
    pot as f64 / call_amount as f64
}

/// Amount needed to match the current bet.
pub fn call_amount(current_bet: Usd, committed: Usd) -> Usd {
    current_bet.saturating_sub(committed)
}

/// Amount `name` needs to call in this snapshot.
pub fn to_call(game: &GameStateView, name: &str) -> Usd {
    call_amount(game.current_bet, game.committed_by(name))
}

/// Seat of `name` relative to the current player, or `None` when either of
/// them is not in the active list.
pub fn position_info(game: &GameStateView, name: &str) -> Option<PositionInfo> {
    let players = &game.active_players;
    let seat = players.iter().position(|p| p == name)?;
    let current = players.iter().position(|p| *p == game.current_player)?;
    let count = players.len();

    let position = (seat + count - current) % count;
    Some(PositionInfo {
        position,
        players_after: count - position - 1,
        is_last: position == count - 1,
    })
}

pub fn active_opponents(game: &GameStateView, name: &str) -> Vec<String> {
    game.active_players
        .iter()
        .filter(|p| *p != name)
        .cloned()
        .collect()
}

pub fn is_heads_up(game: &GameStateView) -> bool {
    game.active_players.len() == 2
}

pub fn stack_sizes(game: &GameStateView) -> HashMap<String, Usd> {
    game.player_chips.clone()
}

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn evaluate_hand(evaluator: &dyn HandEvaluator, cards: &[Card]) -> BestHand {
    evaluator.evaluate_best_hand(cards)
}

/// Advisory aggression level from made-hand strength, price, draws, and
/// position.
///
/// Uses the same strong-hand floor and pair price as the postflop policy.
/// Draws lean to a raise when the pot lays at least 3:1 or the player acts
/// last.
pub fn recommend_aggression(
    game: &GameStateView,
    name: &str,
    cards: &[Card],
    evaluator: &dyn HandEvaluator,
    config: &PolicyConfig,
) -> Aggression {
    let category = evaluate_hand(evaluator, cards).category;

    if category >= config.strong_hand_floor {
        return Aggression::Raise;
    }

    let owed = to_call(game, name);
    if category >= HandCategory::Pair {
        let divisor = config.pair_call_pot_divisor.max(1);
        return if owed <= game.pot / divisor {
            Aggression::Call
        } else {
            Aggression::CheckFold
        };
    }

    if detect_draws(cards).any() {
        let is_last = position_info(game, name).is_some_and(|p| p.is_last);
        return if pot_odds(game.pot, owed) >= DRAW_RAISE_POT_ODDS || is_last {
            Aggression::Raise
        } else {
            Aggression::Call
        };
    }

    Aggression::CheckFold
}
