//! # Tourney Bots
//!
//! Decision policies for bots seated in a Texas Hold'em tournament engine.
//!
//! The engine owns the table: dealing, betting rules, hand evaluation, and
//! chip accounting. At each decision point it hands a bot a read-only
//! snapshot plus the set of legal actions and the bet bounds, and the bot
//! answers with exactly one of those actions. Bot kinds are dispatched
//! through `enum_dispatch` for zero-cost trait dispatch.
//!
//! ## Core Modules
//!
//! - [`game`]: Cards, actions, table snapshots, and the hand-evaluator seam
//! - [`bot`]: Hand classification, draw detection, the decision policy,
//!   adaptive knobs, and the bots themselves
//! - [`info`]: Stateless queries over a snapshot (pot odds, position, ...)
//! - [`protocol`]: Line-delimited JSON bridge to an engine process
//! - [`config`]: Settings file and environment overrides
//!
//! ## Example
//!
//! ```
//! use tourney_bots::{
//!     Bot, BotKind, BotSettings, DecisionContext, PokerBot,
//!     game::{Card, GameStateView, HandCategory, LegalActions, PlayerAction, ReportedHand, Round},
//! };
//!
//! let mut bot = Bot::from_kind(BotKind::Hybrid, "hero", &BotSettings::default(), Some(42));
//! let game = GameStateView {
//!     round: Round::Preflop,
//!     pot: 30,
//!     current_bet: 20,
//!     big_blind: 20,
//!     ..Default::default()
//! };
//! let hole: [Card; 2] = ["As".parse().unwrap(), "Ad".parse().unwrap()];
//! let legal = LegalActions::from([PlayerAction::Fold, PlayerAction::Call, PlayerAction::Raise]);
//! let evaluator = ReportedHand::new(HandCategory::Pair);
//!
//! let decision = bot.get_action(&DecisionContext {
//!     game: &game,
//!     hole_cards: &hole,
//!     legal_actions: &legal,
//!     min_bet: 40,
//!     max_bet: 1000,
//!     evaluator: &evaluator,
//! });
//! assert!(legal.contains(decision.action));
//! ```

/// Bots and the poker logic they decide with.
pub mod bot;
pub use bot::{Bot, BotKind, BotStats, DecisionContext, PokerBot};

/// Settings file and environment overrides.
pub mod config;
pub use config::{BotSettings, ConfigError};

/// Cards, actions, and table snapshots.
pub mod game;

/// Read-only snapshot queries.
pub mod info;

/// Engine bridge.
pub mod protocol;
pub use protocol::{ProtocolError, Request, Response, Session};
