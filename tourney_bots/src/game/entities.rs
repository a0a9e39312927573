use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeSet, HashMap},
    fmt::{self},
    str::FromStr,
};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Suit {
    Club,
    Spade,
    Diamond,
    Heart,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Spade, Suit::Diamond, Suit::Heart];

    /// Single ASCII letter used in card codes (`c`, `s`, `d`, `h`).
    pub fn letter(&self) -> char {
        match self {
            Self::Club => 'c',
            Self::Spade => 's',
            Self::Diamond => 'd',
            Self::Heart => 'h',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Club => "♣",
            Self::Spade => "♠",
            Self::Diamond => "♦",
            Self::Heart => "♥",
        };
        write!(f, "{repr}")
    }
}

/// Placeholder for card values.
pub type Value = u8;

pub const MIN_VALUE: Value = 2;
pub const ACE: Value = 14;

/// Type alias for whole chips. Pots, bets, and stacks are all whole chips.
pub type Usd = u32;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum CardParseError {
    #[error("empty card code")]
    Empty,
    #[error("invalid card value in {0:?}")]
    InvalidValue(String),
    #[error("invalid card suit in {0:?}")]
    InvalidSuit(String),
}

/// A card is a tuple of a value (deuce=2u8 ... ace=14u8) and a suit.
///
/// On the wire a card is its short code, e.g. `"As"` or `"Td"`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(pub Value, pub Suit);

impl Card {
    /// Short code like `As`, `Td`, `7c`.
    pub fn code(&self) -> String {
        let value = match self.0 {
            14 => 'A',
            13 => 'K',
            12 => 'Q',
            11 => 'J',
            10 => 'T',
            v => char::from_digit(u32::from(v), 10).unwrap_or('?'),
        };
        format!("{value}{}", self.1.letter())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = match self.0 {
            14 => "A",
            13 => "K",
            12 => "Q",
            11 => "J",
            v => &v.to_string(),
        };
        write!(f, "{value}{}", self.1)
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit_char = chars.next_back().ok_or(CardParseError::Empty)?;
        let value_part = chars.as_str();
        if value_part.is_empty() {
            return Err(CardParseError::InvalidValue(s.to_string()));
        }

        let value = match value_part.to_ascii_uppercase().as_str() {
            "A" => 14,
            "K" => 13,
            "Q" => 12,
            "J" => 11,
            "T" | "10" => 10,
            v => match v.parse::<Value>() {
                Ok(v) if (MIN_VALUE..=9).contains(&v) => v,
                _ => return Err(CardParseError::InvalidValue(s.to_string())),
            },
        };

        let suit = match suit_char {
            'c' | 'C' | '♣' => Suit::Club,
            's' | 'S' | '♠' => Suit::Spade,
            'd' | 'D' | '♦' => Suit::Diamond,
            'h' | 'H' | '♥' => Suit::Heart,
            _ => return Err(CardParseError::InvalidSuit(s.to_string())),
        };

        Ok(Card(value, suit))
    }
}

impl TryFrom<String> for Card {
    type Error = CardParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.code()
    }
}

/// Made-hand categories in ascending strength. The derived ordering is the
/// ordering the external evaluator ranks hands by.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandCategory {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::HighCard => "hi",
            Self::Pair => "1p",
            Self::TwoPair => "2p",
            Self::ThreeOfAKind => "3k",
            Self::Straight => "s8",
            Self::Flush => "fs",
            Self::FullHouse => "fh",
            Self::FourOfAKind => "4k",
            Self::StraightFlush => "sf",
        };
        write!(f, "{repr}")
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Round {
    #[default]
    Preflop,
    Flop,
    Turn,
    River,
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Preflop => "preflop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::River => "river",
        };
        write!(f, "{repr}")
    }
}

/// Actions an engine can offer a bot. Variants are ordered from most to least
/// aggressive, which is also the fallback order when a preferred action is
/// not on offer.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerAction {
    Raise,
    Call,
    Check,
    Fold,
}

impl PlayerAction {
    /// Fallback priority, most aggressive first.
    pub const PRIORITY: [PlayerAction; 4] = [
        PlayerAction::Raise,
        PlayerAction::Call,
        PlayerAction::Check,
        PlayerAction::Fold,
    ];
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Raise => "raise",
            Self::Call => "call",
            Self::Check => "check",
            Self::Fold => "fold",
        };
        write!(f, "{repr}")
    }
}

/// Clamp a desired raise into `[min_bet, max_bet]`. The minimum wins when
/// the engine hands over an inverted range.
pub fn clip_bet(desired: Usd, min_bet: Usd, max_bet: Usd) -> Usd {
    desired.min(max_bet).max(min_bet)
}

/// The set of actions valid on this turn.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct LegalActions(pub BTreeSet<PlayerAction>);

impl LegalActions {
    pub fn contains(&self, action: PlayerAction) -> bool {
        self.0.contains(&action)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = PlayerAction> + '_ {
        self.0.iter().copied()
    }

    /// Turn a preferred decision into one the engine will accept.
    ///
    /// A legal preference is kept (raises re-clipped to the bet range).
    /// Otherwise the priority chain is walked from the preferred action
    /// toward fold, then back up toward raise; an empty set yields a fold.
    pub fn resolve(&self, preferred: Decision, min_bet: Usd, max_bet: Usd) -> Decision {
        let start = PlayerAction::PRIORITY
            .iter()
            .position(|a| *a == preferred.action)
            .unwrap_or(0);
        let chain = PlayerAction::PRIORITY[start..]
            .iter()
            .chain(PlayerAction::PRIORITY[..start].iter().rev());

        for &action in chain {
            if !self.contains(action) {
                continue;
            }
            return match action {
                PlayerAction::Raise => {
                    let desired = if preferred.action == PlayerAction::Raise {
                        preferred.amount
                    } else {
                        min_bet
                    };
                    Decision::raise(clip_bet(desired, min_bet, max_bet))
                }
                other => Decision::passive(other),
            };
        }

        Decision::fold()
    }
}

impl fmt::Display for LegalActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{repr}}}")
    }
}

impl FromIterator<PlayerAction> for LegalActions {
    fn from_iter<I: IntoIterator<Item = PlayerAction>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[PlayerAction; N]> for LegalActions {
    fn from(actions: [PlayerAction; N]) -> Self {
        actions.into_iter().collect()
    }
}

/// A bot's answer to the engine. `amount` is zero for everything but raises.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Decision {
    pub action: PlayerAction,
    pub amount: Usd,
}

impl Decision {
    pub fn fold() -> Self {
        Self::passive(PlayerAction::Fold)
    }

    pub fn check() -> Self {
        Self::passive(PlayerAction::Check)
    }

    pub fn call() -> Self {
        Self::passive(PlayerAction::Call)
    }

    pub fn raise(amount: Usd) -> Self {
        Self {
            action: PlayerAction::Raise,
            amount,
        }
    }

    fn passive(action: PlayerAction) -> Self {
        Self { action, amount: 0 }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.action {
            PlayerAction::Raise => write!(f, "raises ${}", self.amount),
            PlayerAction::Call => write!(f, "calls"),
            PlayerAction::Check => write!(f, "checks"),
            PlayerAction::Fold => write!(f, "folds"),
        }
    }
}

/// Read-only snapshot of the table handed over by the engine.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct GameStateView {
    #[serde(rename = "round_name")]
    pub round: Round,
    pub pot: Usd,
    pub current_bet: Usd,
    /// Chips each player has committed in the current betting round.
    #[serde(default)]
    pub player_bets: HashMap<String, Usd>,
    pub big_blind: Usd,
    #[serde(default)]
    pub active_players: Vec<String>,
    #[serde(default)]
    pub current_player: String,
    #[serde(default)]
    pub player_chips: HashMap<String, Usd>,
    #[serde(default)]
    pub community_cards: Vec<Card>,
}

impl GameStateView {
    /// Chips `name` has already committed this round.
    pub fn committed_by(&self, name: &str) -> Usd {
        self.player_bets.get(name).copied().unwrap_or(0)
    }
}

/// Outcome of a completed hand.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct HandResult {
    #[serde(default)]
    pub winners: Vec<String>,
    #[serde(default)]
    pub pot: Usd,
}

impl HandResult {
    pub fn is_winner(&self, name: &str) -> bool {
        self.winners.iter().any(|w| w == name)
    }
}

/// One row of the final tournament standings.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Standing {
    pub name: String,
    pub chips: Usd,
    pub placement: usize,
}
