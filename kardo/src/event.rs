use crate::card::{CardColor, CardId};
use crate::player::PlayerId;

/// What happened during one action. Each action call returns the events it
/// produced, in order; the caller decides how to react to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    CardPlayed { player: PlayerId, card: CardId },
    CardsDrawn { player: PlayerId, count: usize },
    TurnAdvanced { player: PlayerId },
    DirectionReversed,
    PlayersSkipped { count: usize },
    ColorRequested,
    ColorChosen { color: CardColor },
    TargetRequested,
    HandsSwapped { chooser: PlayerId, target: PlayerId },
    WorldFlipped { dark_side: bool },
    UnoCalled { player: PlayerId },
    UnoPenalty { player: PlayerId },
    DeckReshuffled,
    RoundStarted,
    RoundEnded { winner: PlayerId, points: u32 },
    MatchEnded { winner: Option<PlayerId> },
}
