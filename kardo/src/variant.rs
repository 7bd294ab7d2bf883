use crate::card::{ActionKind, Card, CardColor, CardId, Face, WildFace, WildKind};
use crate::constants::*;
use crate::rules::{FacePair, Variant};

pub(crate) fn build_deck(variant: &Variant) -> Vec<Card> {
    match variant {
        Variant::Standard => standard_deck(),
        Variant::Flip { pairs } => flip_deck(pairs),
        Variant::AllWild => all_wild_deck(),
    }
}

fn single_faced(faces: Vec<Face>) -> Vec<Card> {
    faces
        .into_iter()
        .enumerate()
        .map(|(id, face)| Card::new(id as CardId, face, Face::Back))
        .collect()
}

fn standard_deck() -> Vec<Card> {
    let mut faces = Vec::with_capacity(STANDARD_DECK_SIZE);

    for color in CardColor::LIGHT {
        for digit in STANDARD_DIGITS_PER_COLOR {
            faces.push(Face::numeric(color, *digit));
        }

        for _ in 0..SKIP_CARDS_PER_COLOR {
            faces.push(Face::action(color, ActionKind::Skip));
        }

        for _ in 0..REVERSE_CARDS_PER_COLOR {
            faces.push(Face::action(color, ActionKind::Reverse));
        }

        for _ in 0..DRAW_CARDS_PER_COLOR {
            faces.push(Face::draw(color, 2));
        }
    }

    for _ in 0..WILD_CARDS_IN_DECK {
        faces.push(Face::wild(WildFace::plain()));
    }

    for _ in 0..WILD_DRAW_CARDS_IN_DECK {
        faces.push(Face::wild(WildFace::draw_four()));
    }

    single_faced(faces)
}

fn flip_deck(pairs: &[FacePair]) -> Vec<Card> {
    let mut cards = Vec::new();
    let mut id: CardId = 0;

    for pair in pairs {
        for _ in 0..pair.copies {
            cards.push(Card::new(id, pair.light.clone(), pair.dark.clone()));
            id += 1;
        }
    }

    cards
}

/// Default face mapping for the flip deck: each light color has a fixed dark
/// partner and faces pair like-for-like (numbers with the same digit, draw
/// with draw, skip with skip-everyone). A caller with the printed deck's
/// exact scramble supplies its own pairs instead.
pub fn flip_face_pairs() -> Vec<FacePair> {
    const PARTNERS: [(CardColor, CardColor); 4] = [
        (CardColor::Red, CardColor::Orange),
        (CardColor::Yellow, CardColor::Pink),
        (CardColor::Green, CardColor::Teal),
        (CardColor::Blue, CardColor::Purple),
    ];

    let mut pairs = Vec::new();

    for (light, dark) in PARTNERS {
        for digit in FLIP_DIGITS {
            pairs.push(FacePair {
                light: Face::numeric(light, *digit),
                dark: Face::numeric(dark, *digit),
                copies: FLIP_COPIES_PER_PAIR,
            });
        }

        pairs.push(FacePair {
            light: Face::draw(light, FLIP_DRAW_LIGHT),
            dark: Face::draw(dark, FLIP_DRAW_DARK),
            copies: FLIP_COPIES_PER_PAIR,
        });
        pairs.push(FacePair {
            light: Face::action(light, ActionKind::Skip),
            dark: Face::action(dark, ActionKind::SkipEveryone),
            copies: FLIP_COPIES_PER_PAIR,
        });
        pairs.push(FacePair {
            light: Face::action(light, ActionKind::Reverse),
            dark: Face::action(dark, ActionKind::Reverse),
            copies: FLIP_COPIES_PER_PAIR,
        });
        pairs.push(FacePair {
            light: Face::flip(light),
            dark: Face::flip(dark),
            copies: FLIP_COPIES_PER_PAIR,
        });
    }

    pairs.push(FacePair {
        light: Face::wild(WildFace::plain()),
        dark: Face::wild(WildFace::plain()),
        copies: FLIP_WILD_COPIES,
    });
    pairs.push(FacePair {
        light: Face::wild(WildFace::draw_two()),
        dark: Face::wild(WildFace::draw_color()),
        copies: FLIP_WILD_COPIES,
    });

    pairs
}

fn all_wild_deck() -> Vec<Card> {
    // No colors anywhere, so nothing chooses one and nothing is restricted.
    let specials = [
        WildFace {
            reverses: true,
            ..WildFace::bare(WildKind::Reverse)
        },
        WildFace {
            skip: 1,
            ..WildFace::bare(WildKind::Skip)
        },
        WildFace {
            skip: 2,
            ..WildFace::bare(WildKind::SkipTwo)
        },
        WildFace {
            draw: 2,
            skip: 1,
            ..WildFace::bare(WildKind::DrawTwo)
        },
        WildFace {
            draw: 4,
            skip: 1,
            ..WildFace::bare(WildKind::DrawFour)
        },
        WildFace {
            chooses_target: true,
            target_draw: 2,
            ..WildFace::bare(WildKind::TargetedDraw)
        },
        WildFace {
            chooses_target: true,
            ..WildFace::bare(WildKind::ForcedSwap)
        },
    ];

    let mut faces = Vec::with_capacity(ALL_WILD_DECK_SIZE);

    for _ in 0..ALL_WILD_PLAIN_COPIES {
        faces.push(Face::wild(WildFace::bare(WildKind::Plain)));
    }

    for special in specials {
        for _ in 0..ALL_WILD_SPECIAL_COPIES {
            faces.push(Face::wild(special));
        }
    }

    single_faced(faces)
}
