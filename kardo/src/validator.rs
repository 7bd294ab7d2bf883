use crate::card::{Card, CardColor, Face};

/// Whether `card` may be placed on `top`. `hand` is the current player's
/// hand, consulted only for color-restricted wilds.
///
/// Default rule: the active face matches the active color, matches the top
/// card's active value, or is itself wild. A color-restricted wild ignores
/// the default rule entirely: it is legal exactly when no other non-wild
/// card in the hand matches the active color.
pub(crate) fn is_valid_move(
    card: &Card,
    hand: &[Card],
    top: Option<&Card>,
    active_color: Option<CardColor>,
    world_flipped: bool,
) -> bool {
    let Some(top) = top else {
        return false;
    };

    let face = card.active_face(world_flipped);

    if let Face::Wild(wild) = face {
        if wild.color_restricted {
            return !hand.iter().any(|other| {
                if other.id() == card.id() {
                    return false;
                }
                let other_face = other.active_face(world_flipped);
                !other_face.is_wild() && active_color == Some(other_face.color())
            });
        }
    }

    face.is_wild()
        || active_color == Some(face.color())
        || face.value() == top.active_face(world_flipped).value()
}

pub(crate) fn has_playable_card(
    hand: &[Card],
    top: Option<&Card>,
    active_color: Option<CardColor>,
    world_flipped: bool,
) -> bool {
    hand.iter()
        .any(|card| is_valid_move(card, hand, top, active_color, world_flipped))
}
