use crate::card::Face;

/// Optional rule toggles, fixed for the lifetime of one engine instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rules {
    /// Penalize a player caught at their turn start with one card and no
    /// uno call.
    pub uno_penalty: bool,
    /// A drawn card may not be played; the turn must be passed.
    pub skip_after_draw: bool,
    /// An empty deck ends the game instead of recycling the discard pile.
    pub no_reshuffle: bool,
    /// Play rounds to 500 points instead of ending on the first won round.
    pub scoring_mode: bool,
}

/// One entry of a flip deck's face mapping: which light face is printed on
/// the same card as which dark face, and how many copies exist. The engine
/// consumes this as opaque seed data.
#[derive(Debug, Clone)]
pub struct FacePair {
    pub light: Face,
    pub dark: Face,
    pub copies: u8,
}

#[derive(Debug, Clone)]
pub enum Variant {
    Standard,
    Flip { pairs: Vec<FacePair> },
    AllWild,
}

#[derive(Debug)]
pub struct GameConfig {
    pub player_names: Vec<String>,
    pub variant: Variant,
    pub rules: Rules,
    /// Fix the randomness for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn standard(player_names: Vec<String>) -> Self {
        Self {
            player_names,
            variant: Variant::Standard,
            rules: Rules::default(),
            seed: None,
        }
    }

    /// Flip variant with the default face mapping.
    pub fn flip(player_names: Vec<String>) -> Self {
        Self {
            player_names,
            variant: Variant::Flip {
                pairs: crate::variant::flip_face_pairs(),
            },
            rules: Rules::default(),
            seed: None,
        }
    }

    pub fn all_wild(player_names: Vec<String>) -> Self {
        Self {
            player_names,
            variant: Variant::AllWild,
            rules: Rules::default(),
            seed: None,
        }
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
