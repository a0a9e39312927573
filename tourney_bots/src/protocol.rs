//! Line-delimited JSON bridge between a tournament engine and one bot.
//!
//! Every engine message is one [`Request`] object per line; the bot answers
//! each with exactly one [`Response`] line. Hand evaluation stays on the
//! engine side: postflop requests carry the category of the best hand the
//! engine found for the bot.

use crate::bot::{Bot, PokerBot, decision::DecisionContext};
use crate::game::{
    entities::{
        Card, Decision, GameStateView, HandCategory, HandResult, LegalActions, Round, Standing, Usd,
    },
    evaluator::ReportedHand,
};
use serde::{Deserialize, Serialize};

/// A message from the engine.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// The bot is to act.
    GetAction {
        state: GameStateView,
        hole_cards: Vec<Card>,
        legal_actions: LegalActions,
        min_bet: Usd,
        max_bet: Usd,
        /// Engine-computed category of the bot's best hand. Required postflop.
        #[serde(default)]
        hand_category: Option<HandCategory>,
        #[serde(default)]
        best_hand: Vec<Card>,
    },
    /// A hand finished.
    HandComplete {
        state: GameStateView,
        result: HandResult,
    },
    /// A tournament is starting.
    TournamentStart {
        players: Vec<String>,
        starting_chips: Usd,
    },
    /// A tournament finished.
    TournamentEnd { standings: Vec<Standing> },
}

/// A message back to the engine.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Action(Decision),
    Ack,
    Error { message: String },
}

/// Errors due to a malformed engine message rather than a bot decision.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{round} action requested without a hand category")]
    MissingHandCategory { round: Round },
}

impl From<ProtocolError> for Response {
    fn from(err: ProtocolError) -> Self {
        Response::Error {
            message: err.to_string(),
        }
    }
}

/// One bot's side of the bridge.
pub struct Session {
    bot: Bot,
}

impl Session {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    pub fn handle(&mut self, request: Request) -> Response {
        match self.dispatch(request) {
            Ok(response) => response,
            Err(err) => {
                log::warn!("{}: {err}", self.bot.name());
                err.into()
            }
        }
    }

    /// Handle one raw line. Never panics; malformed input becomes an error
    /// response.
    pub fn handle_line(&mut self, line: &str) -> String {
        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle(request),
            Err(err) => {
                log::warn!("{}: dropping malformed line: {err}", self.bot.name());
                ProtocolError::from(err).into()
            }
        };
        // Response only holds strings and integers.
        serde_json::to_string(&response).unwrap_or_else(|_| {
            r#"{"type":"error","message":"unserializable response"}"#.to_string()
        })
    }

    fn dispatch(&mut self, request: Request) -> Result<Response, ProtocolError> {
        let response = match request {
            Request::GetAction {
                state,
                hole_cards,
                legal_actions,
                min_bet,
                max_bet,
                hand_category,
                best_hand,
            } => {
                let category = match (hand_category, state.round) {
                    (Some(category), _) => category,
                    // Preflop play only looks at hole cards.
                    (None, Round::Preflop) => HandCategory::HighCard,
                    (None, round) => return Err(ProtocolError::MissingHandCategory { round }),
                };
                let evaluator = ReportedHand::with_cards(category, best_hand);
                let ctx = DecisionContext {
                    game: &state,
                    hole_cards: &hole_cards,
                    legal_actions: &legal_actions,
                    min_bet,
                    max_bet,
                    evaluator: &evaluator,
                };
                Response::Action(self.bot.get_action(&ctx))
            }
            Request::HandComplete { state, result } => {
                self.bot.hand_complete(&state, &result);
                Response::Ack
            }
            Request::TournamentStart {
                players,
                starting_chips,
            } => {
                self.bot.tournament_start(&players, starting_chips);
                Response::Ack
            }
            Request::TournamentEnd { standings } => {
                self.bot.tournament_end(&standings);
                Response::Ack
            }
        };
        Ok(response)
    }
}
