use crate::player::{Player, PlayerId};

/// Points the round winner earns: the active-face value of every card still
/// held by everyone else.
pub(crate) fn round_points(winner: PlayerId, players: &[Player], world_flipped: bool) -> u32 {
    players
        .iter()
        .filter(|player| player.id() != winner)
        .flat_map(|player| player.hand.iter())
        .map(|card| card.active_face(world_flipped).points())
        .sum()
}
