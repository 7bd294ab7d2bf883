use strum_macros::Display;

/// The engine's single active state. Every public action opens with an
/// exhaustive match over these, so each state/action pair is either handled
/// or rejected explicitly.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum GameState {
    /// Normal turn loop: play, draw or pass.
    Running,
    /// A wild card was played and its color choice is still outstanding.
    WaitingForColor,
    /// A wild card was played and its target choice is still outstanding.
    WaitingForPlayer,
    /// A hand emptied and the match continues; waiting for a new round.
    RoundOver,
    /// Terminal. Nothing is legal anymore.
    GameOver,
}
