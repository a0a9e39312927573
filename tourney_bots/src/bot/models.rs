//! Bot kinds and statistics.

use crate::game::entities::{Decision, PlayerAction};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Bot strategy presets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotKind {
    #[default]
    Hybrid, // Tight preflop, aggressive postflop, adaptive knobs
    Random, // Uniformly random legal actions
}

impl fmt::Display for BotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotKind::Hybrid => write!(f, "hybrid"),
            BotKind::Random => write!(f, "random"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown bot kind {0:?} (expected hybrid or random)")]
pub struct UnknownBotKind(pub String);

impl FromStr for BotKind {
    type Err = UnknownBotKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hybrid" => Ok(BotKind::Hybrid),
            "random" => Ok(BotKind::Random),
            _ => Err(UnknownBotKind(s.to_string())),
        }
    }
}

/// Bot statistics tracker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotStats {
    /// Total hands played
    pub hands_played: u32,

    /// Total hands won
    pub hands_won: u32,

    /// Total raises made
    pub aggressive_actions: u32,

    /// Total calls made
    pub passive_actions: u32,

    /// Total folds
    pub folds: u32,
}

impl BotStats {
    /// Fraction of completed hands won
    pub fn win_rate(&self) -> f32 {
        if self.hands_played == 0 {
            0.0
        } else {
            self.hands_won as f32 / self.hands_played as f32
        }
    }

    /// Calculate aggression factor
    pub fn aggression_factor(&self) -> f32 {
        if self.passive_actions == 0 {
            self.aggressive_actions as f32
        } else {
            self.aggressive_actions as f32 / self.passive_actions as f32
        }
    }

    /// Record a completed hand
    pub fn record_hand(&mut self, won: bool) {
        self.hands_played += 1;
        if won {
            self.hands_won += 1;
        }
    }

    /// Record a decision returned to the engine
    pub fn record_decision(&mut self, decision: &Decision) {
        match decision.action {
            PlayerAction::Raise => self.aggressive_actions += 1,
            PlayerAction::Call => self.passive_actions += 1,
            PlayerAction::Fold => self.folds += 1,
            PlayerAction::Check => {}
        }
    }
}
