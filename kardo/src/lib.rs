//! Turn-based rule engine for a card-matching game family: the standard
//! deck, a dual-sided flip deck where a played flip card turns every card in
//! the game over at once, and an all-wild deck.
//!
//! [`Game`] owns all mutable state and exposes seven actions; each returns
//! the [`GameEvent`]s it produced. "Waiting" for a color or target choice is
//! a state, not a blocked call: the caller invokes [`Game::set_color`] or
//! [`Game::chosen_player`] once input is available.

pub mod card;
mod constants;
pub mod deck;
pub mod engine;
pub mod error;
pub mod event;
pub mod player;
pub mod rng;
pub mod rules;
mod score;
pub mod state;
pub mod turn;
mod validator;
pub mod variant;

pub use card::{ActionKind, Card, CardColor, CardId, Face, FaceValue, WildFace, WildKind};
pub use engine::Game;
pub use error::{GameError, Result};
pub use event::GameEvent;
pub use player::{Player, PlayerId};
pub use rules::{FacePair, GameConfig, Rules, Variant};
pub use state::GameState;
pub use variant::flip_face_pairs;
