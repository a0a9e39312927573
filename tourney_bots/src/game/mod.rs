//! Engine-facing vocabulary: cards, actions, table snapshots, and the hand
//! evaluator seam.
//!
//! Everything here is owned by the calling engine and only read by bots.

pub mod entities;
pub mod evaluator;

pub use entities::{
    Card, CardParseError, Decision, GameStateView, HandCategory, HandResult, LegalActions,
    PlayerAction, Round, Standing, Suit, Usd, Value, clip_bet,
};
pub use evaluator::{BestHand, HandEvaluator, ReportedHand};
