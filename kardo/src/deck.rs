use crate::card::Card;
use crate::rng::EngineRng;

/// The draw pile. The top of the deck is the end of the backing vector.
#[derive(Debug, Default)]
pub struct Deck(Vec<Card>);

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }

    pub fn peek(&self) -> Option<&Card> {
        self.0.last()
    }

    pub fn add_card(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn refill(&mut self, cards: Vec<Card>) {
        self.0.extend(cards);
    }

    pub fn shuffle(&mut self, rng: &mut EngineRng) {
        rng.shuffle(&mut self.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Removes and returns the topmost card whose front face carries a
    /// concrete color. Used to reveal an opening card; an all-wild deck has
    /// none, in which case the caller falls back to a plain draw.
    pub(crate) fn take_first_front_colored(&mut self) -> Option<Card> {
        self.0
            .iter()
            .rposition(|card| !card.active_face(false).is_wild())
            .map(|position| self.0.remove(position))
    }
}

/// Played cards. The top is the most recently played card and the one
/// legality checks run against.
#[derive(Debug, Default)]
pub struct DiscardPile(Vec<Card>);

impl DiscardPile {
    pub fn add_card(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.0.last()
    }

    /// Removes and returns everything below the top card, leaving the top in
    /// place so legality checks stay valid while the deck is replenished.
    pub fn take_all_except_top(&mut self) -> Vec<Card> {
        match self.0.pop() {
            Some(top) => {
                let rest = std::mem::take(&mut self.0);
                self.0.push(top);
                rest
            }
            None => Vec::new(),
        }
    }

    /// Empties the pile entirely. Only used when a round resets.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
