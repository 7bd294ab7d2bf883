pub(crate) const MIN_PLAYERS: usize = 2;
pub(crate) const MAX_PLAYERS: usize = 10;
pub(crate) const HAND_SIZE: usize = 7;

pub(crate) const WINNING_SCORE: u32 = 500;
pub(crate) const ACTION_CARD_POINTS: u32 = 20;
pub(crate) const WILD_CARD_POINTS: u32 = 50;

pub(crate) const UNO_PENALTY_CARDS: usize = 2;

// Standard deck: one zero and two of each other digit per color.
pub(crate) const STANDARD_DIGITS_PER_COLOR: &[u8] =
    &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];
pub(crate) const SKIP_CARDS_PER_COLOR: u8 = 2;
pub(crate) const REVERSE_CARDS_PER_COLOR: u8 = 2;
pub(crate) const DRAW_CARDS_PER_COLOR: u8 = 2;
pub(crate) const WILD_CARDS_IN_DECK: u8 = 4;
pub(crate) const WILD_DRAW_CARDS_IN_DECK: u8 = 4;

pub(crate) const COLORS_PER_SIDE: usize = 4;

pub(crate) const STANDARD_DECK_SIZE: usize = (STANDARD_DIGITS_PER_COLOR.len()
    + SKIP_CARDS_PER_COLOR as usize
    + REVERSE_CARDS_PER_COLOR as usize
    + DRAW_CARDS_PER_COLOR as usize)
    * COLORS_PER_SIDE
    + WILD_CARDS_IN_DECK as usize
    + WILD_DRAW_CARDS_IN_DECK as usize;

// Flip deck: no zeros, every face pair printed twice per color, wilds four
// times. Both sides carry the same structure, so only one table is needed.
pub(crate) const FLIP_DIGITS: &[u8] = &[1, 2, 3, 4, 5, 6, 7, 8, 9];
pub(crate) const FLIP_COPIES_PER_PAIR: u8 = 2;
pub(crate) const FLIP_WILD_COPIES: u8 = 4;
pub(crate) const FLIP_DRAW_LIGHT: u8 = 1;
pub(crate) const FLIP_DRAW_DARK: u8 = 5;

pub(crate) const FLIP_DECK_SIZE: usize = (FLIP_DIGITS.len() + 4)
    * FLIP_COPIES_PER_PAIR as usize
    * COLORS_PER_SIDE
    + 2 * FLIP_WILD_COPIES as usize;

// All-wild deck: a thick stack of plain wilds plus eight of each special.
pub(crate) const ALL_WILD_PLAIN_COPIES: u8 = 56;
pub(crate) const ALL_WILD_SPECIAL_COPIES: u8 = 8;
pub(crate) const ALL_WILD_SPECIAL_KINDS: usize = 7;

pub(crate) const ALL_WILD_DECK_SIZE: usize = ALL_WILD_PLAIN_COPIES as usize
    + ALL_WILD_SPECIAL_COPIES as usize * ALL_WILD_SPECIAL_KINDS;
