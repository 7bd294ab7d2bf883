use std::fmt::Debug;

use thiserror::Error;

use crate::state::GameState;

/// Recoverable rejections of an action. An `Err` never leaves a partial
/// effect behind; the engine state is exactly what it was before the call.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("not enough players")]
    NotEnoughPlayers,
    #[error("too many players")]
    TooManyPlayers,
    #[error("the deck cannot cover every opening hand")]
    DeckTooSmall,
    #[error("no such player")]
    UnknownPlayer,
    #[error("action not allowed in the {0} state")]
    IllegalState(GameState),
    #[error("the current player does not hold that card")]
    CardNotInHand,
    #[error("that card cannot be played on the current discard pile")]
    IllegalMove,
    #[error("the current player already drew a card this turn")]
    AlreadyDrew,
    #[error("the current player still holds a playable card")]
    HasPlayableCard,
    #[error("cannot pass before drawing a card")]
    MustDrawFirst,
    #[error("cards cannot be played after drawing this turn")]
    CannotPlayAfterDraw,
    #[error("that color cannot be chosen")]
    InvalidColor,
    #[error("that player cannot be targeted")]
    InvalidTarget,
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
