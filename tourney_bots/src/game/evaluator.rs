//! Seam to the engine's hand evaluator.
//!
//! Ranking hands is the engine's job. Bots only ever see the category of
//! the best hand an evaluator can make from the visible cards.

use super::entities::{Card, HandCategory};

/// Best five-card hand an evaluator found.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BestHand {
    pub category: HandCategory,
    pub cards: Vec<Card>,
}

/// Black-box best-hand evaluator supplied by the engine side.
pub trait HandEvaluator {
    fn evaluate_best_hand(&self, cards: &[Card]) -> BestHand;
}

/// Evaluator for a verdict the engine already computed, e.g. one sent over
/// the bridge protocol alongside a decision request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportedHand {
    pub category: HandCategory,
    pub cards: Vec<Card>,
}

impl ReportedHand {
    pub fn new(category: HandCategory) -> Self {
        Self {
            category,
            cards: Vec::new(),
        }
    }

    pub fn with_cards(category: HandCategory, cards: Vec<Card>) -> Self {
        Self { category, cards }
    }
}

impl HandEvaluator for ReportedHand {
    fn evaluate_best_hand(&self, _cards: &[Card]) -> BestHand {
        BestHand {
            category: self.category,
            cards: self.cards.clone(),
        }
    }
}
