//! Flush and straight draw detection over hole plus community cards.

use crate::game::entities::{Card, Suit, Value};
use std::collections::BTreeSet;

/// Ace-low straight draw patterns. The ace only plays low here.
const WHEEL_DRAWS: [[Value; 4]; 2] = [[14, 2, 3, 4], [2, 3, 4, 5]];

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DrawFlags {
    pub flush_draw: bool,
    pub straight_draw: bool,
}

impl DrawFlags {
    /// Whether either draw is present.
    pub fn any(&self) -> bool {
        self.flush_draw || self.straight_draw
    }
}

/// Four or more cards of any one suit.
pub fn has_flush_draw(cards: &[Card]) -> bool {
    Suit::ALL
        .iter()
        .any(|suit| cards.iter().filter(|c| c.1 == *suit).count() >= 4)
}

/// Four consecutive distinct values, or one of the wheel patterns.
pub fn has_open_ended_straight_draw(cards: &[Card]) -> bool {
    let values: BTreeSet<Value> = cards.iter().map(|c| c.0).collect();
    if values.len() < 4 {
        return false;
    }

    let sorted: Vec<Value> = values.iter().copied().collect();
    if sorted.windows(4).any(|w| w[3] - w[0] == 3) {
        return true;
    }

    WHEEL_DRAWS
        .iter()
        .any(|pattern| pattern.iter().all(|v| values.contains(v)))
}

pub fn detect_draws(cards: &[Card]) -> DrawFlags {
    DrawFlags {
        flush_draw: has_flush_draw(cards),
        straight_draw: has_open_ended_straight_draw(cards),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(codes: &[&str]) -> Vec<Card> {
        codes.iter().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn test_four_suited_is_flush_draw() {
        let hand = cards(&["Ah", "7h", "2h", "Kh", "9c"]);
        assert!(has_flush_draw(&hand));
    }

    #[test]
    fn test_three_suited_is_not_flush_draw() {
        let hand = cards(&["Ah", "7h", "2h", "Kc", "9c"]);
        assert!(!has_flush_draw(&hand));
    }

    #[test]
    fn test_consecutive_values_are_straight_draw() {
        let hand = cards(&["8s", "9d", "Tc", "Jh", "2s"]);
        assert!(has_open_ended_straight_draw(&hand));
    }

    #[test]
    fn test_gutshot_is_not_straight_draw() {
        // 8 9 J Q spans four but has a gap.
        let hand = cards(&["8s", "9d", "Jc", "Qh", "2s"]);
        assert!(!has_open_ended_straight_draw(&hand));
    }

    #[test]
    fn test_duplicate_values_count_once() {
        let hand = cards(&["8s", "8d", "9c", "Th", "Ts"]);
        assert!(!has_open_ended_straight_draw(&hand));
    }

    #[test]
    fn test_wheel_draws() {
        assert!(has_open_ended_straight_draw(&cards(&["As", "2d", "3c", "4h"])));
        assert!(has_open_ended_straight_draw(&cards(&["2s", "3d", "4c", "5h"])));
        // Ace with 2 3 5 is neither pattern.
        assert!(!has_open_ended_straight_draw(&cards(&["As", "2d", "3c", "5h"])));
    }

    #[test]
    fn test_broadway_draw() {
        assert!(has_open_ended_straight_draw(&cards(&["Js", "Qd", "Kc", "Ah"])));
    }

    #[test]
    fn test_detect_draws_combines_both() {
        let flags = detect_draws(&cards(&["5h", "6h", "7h", "8h", "Kc"]));
        assert_eq!(
            flags,
            DrawFlags {
                flush_draw: true,
                straight_draw: true
            }
        );
        assert!(flags.any());

        let flags = detect_draws(&cards(&["As", "Kd"]));
        assert_eq!(flags, DrawFlags::default());
        assert!(!flags.any());
    }
}
