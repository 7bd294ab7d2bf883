use crate::player::PlayerId;
use crate::rng::EngineRng;

/// Tracks whose turn it is. The seat list is fixed for the life of the
/// engine; only the cursor, direction and per-turn flags move.
#[derive(Debug)]
pub struct TurnManager {
    seats: Vec<PlayerId>,
    current: usize,
    reversed: bool,
    pending_skip: usize,
    has_drawn: bool,
}

impl TurnManager {
    pub fn new(seats: Vec<PlayerId>, rng: &mut EngineRng) -> Self {
        let current = rng.index(seats.len());
        Self {
            seats,
            current,
            reversed: false,
            pending_skip: 0,
            has_drawn: false,
        }
    }

    pub fn current_player(&self) -> PlayerId {
        self.seats[self.current]
    }

    /// The seat the next advance would land on, without moving anything.
    pub fn peek_next(&self) -> PlayerId {
        self.seats[self.target_index(self.pending_skip + 1)]
    }

    /// Consumes the pending skip, clears the per-turn flags and moves the
    /// cursor. Returns the player now on turn.
    pub fn advance(&mut self) -> PlayerId {
        let steps = self.pending_skip + 1;
        self.pending_skip = 0;
        self.has_drawn = false;
        self.current = self.target_index(steps);
        self.current_player()
    }

    /// Overwrites the pending skip; only one is tracked at a time.
    pub fn skip_players(&mut self, count: usize) {
        self.pending_skip = count;
    }

    /// With two seats a reverse hands the turn straight back, so it doubles
    /// as a skip.
    pub fn reverse_direction(&mut self) {
        self.reversed = !self.reversed;
        if self.seats.len() == 2 {
            self.pending_skip = 1;
        }
    }

    pub fn mark_drawn(&mut self) {
        self.has_drawn = true;
    }

    pub fn has_drawn(&self) -> bool {
        self.has_drawn
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn pending_skip(&self) -> usize {
        self.pending_skip
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Fresh cursor for a new round: random seat, forward direction.
    pub fn reset(&mut self, rng: &mut EngineRng) {
        self.current = rng.index(self.seats.len());
        self.reversed = false;
        self.pending_skip = 0;
        self.has_drawn = false;
    }

    fn target_index(&self, steps: usize) -> usize {
        let len = self.seats.len() as isize;
        let direction: isize = if self.reversed { -1 } else { 1 };
        (self.current as isize + direction * steps as isize).rem_euclid(len) as usize
    }
}
