use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::constants::{ACTION_CARD_POINTS, WILD_CARD_POINTS};

/// Identity of a single physical card. Two structurally identical cards are
/// still distinct cards; containers track them by id, never by shape.
pub type CardId = u32;

#[derive(Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq)]
pub enum CardColor {
    Red,
    Green,
    Blue,
    Yellow,
    Pink,
    Teal,
    Orange,
    Purple,
    Wild,
}

impl CardColor {
    pub const LIGHT: [CardColor; 4] = [
        CardColor::Red,
        CardColor::Green,
        CardColor::Blue,
        CardColor::Yellow,
    ];

    pub const DARK: [CardColor; 4] = [
        CardColor::Pink,
        CardColor::Teal,
        CardColor::Orange,
        CardColor::Purple,
    ];

    /// The four concrete colors valid for the given world side.
    pub fn palette(dark_side: bool) -> &'static [CardColor; 4] {
        if dark_side {
            &Self::DARK
        } else {
            &Self::LIGHT
        }
    }

    pub fn is_wild(self) -> bool {
        self == CardColor::Wild
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Skip,
    SkipEveryone,
    Reverse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WildKind {
    Plain,
    DrawTwo,
    DrawFour,
    DrawColor,
    Reverse,
    Skip,
    SkipTwo,
    TargetedDraw,
    ForcedSwap,
}

/// Configuration of one wild face. Plain data, applied by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WildFace {
    pub kind: WildKind,
    /// Cards the next player is forced to draw when this face resolves.
    pub draw: u8,
    pub chooses_color: bool,
    pub chooses_target: bool,
    /// Cards the chosen target draws once a target has been picked.
    pub target_draw: u8,
    pub skip: u8,
    pub reverses: bool,
    /// Playable only while the holder has no other card matching the active
    /// color. Checked by the move validator.
    pub color_restricted: bool,
}

impl WildFace {
    /// A wild with no effect beyond its wild color. Base for struct updates.
    pub const fn bare(kind: WildKind) -> Self {
        Self {
            kind,
            draw: 0,
            chooses_color: false,
            chooses_target: false,
            target_draw: 0,
            skip: 0,
            reverses: false,
            color_restricted: false,
        }
    }

    pub const fn plain() -> Self {
        Self {
            chooses_color: true,
            ..Self::bare(WildKind::Plain)
        }
    }

    pub const fn draw_four() -> Self {
        Self {
            draw: 4,
            skip: 1,
            chooses_color: true,
            color_restricted: true,
            ..Self::bare(WildKind::DrawFour)
        }
    }

    pub const fn draw_two() -> Self {
        Self {
            draw: 2,
            skip: 1,
            chooses_color: true,
            color_restricted: true,
            ..Self::bare(WildKind::DrawTwo)
        }
    }

    /// The chosen color is resolved by making the next player draw until a
    /// card of that color turns up, so no draw count is configured here.
    pub const fn draw_color() -> Self {
        Self {
            chooses_color: true,
            color_restricted: true,
            ..Self::bare(WildKind::DrawColor)
        }
    }
}

/// One side of a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Face {
    Numeric { color: CardColor, digit: u8 },
    Action { color: CardColor, kind: ActionKind },
    Draw { color: CardColor, amount: u8 },
    Wild(WildFace),
    Flip { color: CardColor },
    /// The blank reverse of a single-faced card. Never the active face in
    /// correct play; reading its color or value is a programming error.
    Back,
}

impl Face {
    pub fn numeric(color: CardColor, digit: u8) -> Self {
        Face::Numeric { color, digit }
    }

    pub fn action(color: CardColor, kind: ActionKind) -> Self {
        Face::Action { color, kind }
    }

    pub fn draw(color: CardColor, amount: u8) -> Self {
        Face::Draw { color, amount }
    }

    pub fn wild(face: WildFace) -> Self {
        Face::Wild(face)
    }

    pub fn flip(color: CardColor) -> Self {
        Face::Flip { color }
    }

    pub fn color(&self) -> CardColor {
        match self {
            Face::Numeric { color, .. }
            | Face::Action { color, .. }
            | Face::Draw { color, .. }
            | Face::Flip { color } => *color,
            Face::Wild(_) => CardColor::Wild,
            Face::Back => unreachable!("the back of a card has no color"),
        }
    }

    pub fn value(&self) -> FaceValue {
        match self {
            Face::Numeric { digit, .. } => FaceValue::Number(*digit),
            Face::Action { kind, .. } => match kind {
                ActionKind::Skip => FaceValue::Skip,
                ActionKind::SkipEveryone => FaceValue::SkipEveryone,
                ActionKind::Reverse => FaceValue::Reverse,
            },
            Face::Draw { amount, .. } => FaceValue::Draw(*amount),
            Face::Wild(wild) => FaceValue::Wild(wild.kind),
            Face::Flip { .. } => FaceValue::Flip,
            Face::Back => unreachable!("the back of a card has no value"),
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            Face::Numeric { digit, .. } => u32::from(*digit),
            Face::Action { .. } | Face::Draw { .. } | Face::Flip { .. } => ACTION_CARD_POINTS,
            Face::Wild(_) => WILD_CARD_POINTS,
            Face::Back => unreachable!("the back of a card has no point value"),
        }
    }

    pub fn is_wild(&self) -> bool {
        matches!(self, Face::Wild(_))
    }
}

/// The matching key of a face, compared against the discard-pile top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceValue {
    Number(u8),
    Skip,
    SkipEveryone,
    Reverse,
    Draw(u8),
    Flip,
    Wild(WildKind),
}

/// A physical card: a front (light) face and a back (dark) face. Standard
/// and all-wild cards store `Face::Back` behind the front.
#[derive(Debug)]
pub struct Card {
    id: CardId,
    front: Face,
    back: Face,
}

impl Card {
    pub fn new(id: CardId, front: Face, back: Face) -> Self {
        Self { id, front, back }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    /// The only sanctioned reader of a card's faces. Everything the engine
    /// knows about a card goes through the side the world currently shows.
    pub fn active_face(&self, world_flipped: bool) -> &Face {
        if world_flipped {
            &self.back
        } else {
            &self.front
        }
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Skip => write!(f, "Skip"),
            ActionKind::SkipEveryone => write!(f, "Skip Everyone"),
            ActionKind::Reverse => write!(f, "Reverse"),
        }
    }
}

impl Display for WildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WildKind::Plain => write!(f, "Wild"),
            WildKind::DrawTwo => write!(f, "Wild Draw 2"),
            WildKind::DrawFour => write!(f, "Wild Draw 4"),
            WildKind::DrawColor => write!(f, "Wild Draw Color"),
            WildKind::Reverse => write!(f, "Wild Reverse"),
            WildKind::Skip => write!(f, "Wild Skip"),
            WildKind::SkipTwo => write!(f, "Wild Skip 2"),
            WildKind::TargetedDraw => write!(f, "Wild Targeted Draw"),
            WildKind::ForcedSwap => write!(f, "Wild Forced Swap"),
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Numeric { color, digit } => write!(f, "{} {}", color, digit),
            Face::Action { color, kind } => write!(f, "{} {}", color, kind),
            Face::Draw { color, amount } => write!(f, "{} Draw {}", color, amount),
            Face::Wild(wild) => write!(f, "{}", wild.kind),
            Face::Flip { color } => write!(f, "{} Flip", color),
            Face::Back => write!(f, "Back"),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.back {
            Face::Back => write!(f, "{}", self.front),
            back => write!(f, "{} / {}", self.front, back),
        }
    }
}
