//! Starting-hand classification from static rank-pair tables.

use crate::game::entities::{Card, Value};

/// Unordered value pairs treated as premium starting hands.
pub const PREMIUM_HANDS: [(Value, Value); 8] = [
    (14, 14),
    (13, 13),
    (12, 12),
    (11, 11),
    (10, 10),
    (14, 13),
    (14, 12),
    (13, 12),
];

/// Unordered value pairs that are playable when suited.
pub const SUITED_CONNECTORS: [(Value, Value); 5] = [(13, 11), (12, 11), (11, 10), (10, 9), (9, 8)];

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HandClassification {
    Premium,
    SuitedConnector,
    PocketPair,
    Weak,
}

impl HandClassification {
    pub fn is_playable(&self) -> bool {
        !matches!(self, Self::Weak)
    }
}

fn in_table(table: &[(Value, Value)], a: Value, b: Value) -> bool {
    table.iter().any(|&pair| pair == (a, b) || pair == (b, a))
}

/// Classify two hole cards. Returns `None` unless exactly two cards are given.
///
/// Premium membership is checked first, so pocket aces through tens are
/// `Premium` rather than `PocketPair`.
pub fn classify(hole_cards: &[Card]) -> Option<HandClassification> {
    let [Card(v1, s1), Card(v2, s2)] = hole_cards else {
        return None;
    };

    let class = if in_table(&PREMIUM_HANDS, *v1, *v2) {
        HandClassification::Premium
    } else if v1 == v2 {
        HandClassification::PocketPair
    } else if s1 == s2 && in_table(&SUITED_CONNECTORS, *v1, *v2) {
        HandClassification::SuitedConnector
    } else {
        HandClassification::Weak
    };
    Some(class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::Suit;

    #[test]
    fn test_premium_hands_in_either_order() {
        for (a, b) in PREMIUM_HANDS {
            let forward = [Card(a, Suit::Spade), Card(b, Suit::Diamond)];
            let reverse = [Card(b, Suit::Diamond), Card(a, Suit::Spade)];
            assert_eq!(classify(&forward), Some(HandClassification::Premium));
            assert_eq!(classify(&forward), classify(&reverse));
        }
    }

    #[test]
    fn test_pocket_pair_ignores_suit() {
        let hand = [Card(7, Suit::Club), Card(7, Suit::Heart)];
        assert_eq!(classify(&hand), Some(HandClassification::PocketPair));
        let hand = [Card(2, Suit::Spade), Card(2, Suit::Diamond)];
        assert_eq!(classify(&hand), Some(HandClassification::PocketPair));
    }

    #[test]
    fn test_suited_connectors_need_matching_suits() {
        let suited = [Card(10, Suit::Heart), Card(9, Suit::Heart)];
        assert_eq!(classify(&suited), Some(HandClassification::SuitedConnector));

        let offsuit = [Card(10, Suit::Heart), Card(9, Suit::Club)];
        assert_eq!(classify(&offsuit), Some(HandClassification::Weak));
    }

    #[test]
    fn test_ace_jack_is_not_premium() {
        let hand = [Card(14, Suit::Spade), Card(11, Suit::Diamond)];
        assert_eq!(classify(&hand), Some(HandClassification::Weak));
    }

    #[test]
    fn test_seven_deuce_is_weak() {
        let hand = [Card(7, Suit::Club), Card(2, Suit::Diamond)];
        let class = classify(&hand).unwrap();
        assert_eq!(class, HandClassification::Weak);
        assert!(!class.is_playable());
    }

    #[test]
    fn test_wrong_card_count_is_unclassified() {
        assert_eq!(classify(&[]), None);
        assert_eq!(classify(&[Card(14, Suit::Spade)]), None);
        let three = [
            Card(14, Suit::Spade),
            Card(14, Suit::Heart),
            Card(14, Suit::Club),
        ];
        assert_eq!(classify(&three), None);
    }
}
