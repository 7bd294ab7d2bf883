use std::mem;

use tracing::{debug, info};

use crate::card::{ActionKind, Card, CardColor, CardId, Face, WildFace, WildKind};
use crate::constants::{HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS, UNO_PENALTY_CARDS, WINNING_SCORE};
use crate::deck::{Deck, DiscardPile};
use crate::error::{GameError, Result};
use crate::event::GameEvent;
use crate::player::{Player, PlayerId};
use crate::rng::EngineRng;
use crate::rules::{GameConfig, Rules};
use crate::state::GameState;
use crate::turn::TurnManager;
use crate::{score, validator, variant};

/// The orchestrator. Owns every card, the turn cursor and the state
/// machine; the seven action methods are the only entry points that mutate
/// it, and each returns the events it produced.
#[derive(Debug)]
pub struct Game {
    rules: Rules,
    players: Vec<Player>,
    deck: Deck,
    discard: DiscardPile,
    turn: TurnManager,
    state: GameState,
    active_color: Option<CardColor>,
    world_flipped: bool,
    winner: Option<PlayerId>,
    rng: EngineRng,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self> {
        let GameConfig {
            player_names,
            variant,
            rules,
            seed,
        } = config;

        if player_names.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers);
        }
        if player_names.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers);
        }

        let mut rng = match seed {
            Some(seed) => EngineRng::seeded(seed),
            None => EngineRng::from_entropy(),
        };

        let mut deck = Deck::new(variant::build_deck(&variant));
        if deck.len() < player_names.len() * HAND_SIZE + 1 {
            return Err(GameError::DeckTooSmall);
        }
        deck.shuffle(&mut rng);

        let mut players = Vec::with_capacity(player_names.len());
        for (id, name) in player_names.into_iter().enumerate() {
            let mut hand = Vec::with_capacity(HAND_SIZE);
            for _ in 0..HAND_SIZE {
                hand.push(deck.draw().expect("the deck covers every opening hand"));
            }
            players.push(Player::new(id, name, hand));
        }

        let turn = TurnManager::new((0..players.len()).collect(), &mut rng);

        let mut game = Game {
            rules,
            players,
            deck,
            discard: DiscardPile::default(),
            turn,
            state: GameState::Running,
            active_color: None,
            world_flipped: false,
            winner: None,
            rng,
            events: Vec::new(),
        };
        game.reveal_opening_card();
        game.events.clear();
        Ok(game)
    }

    // ---- actions ----

    pub fn play_card(&mut self, card_id: CardId) -> Result<Vec<GameEvent>> {
        match self.state {
            GameState::Running => {}
            GameState::WaitingForColor
            | GameState::WaitingForPlayer
            | GameState::RoundOver
            | GameState::GameOver => return Err(GameError::IllegalState(self.state)),
        }

        let current = self.turn.current_player();
        let position = self.players[current]
            .position_of(card_id)
            .ok_or(GameError::CardNotInHand)?;
        if self.rules.skip_after_draw && self.turn.has_drawn() {
            return Err(GameError::CannotPlayAfterDraw);
        }
        if !self.is_valid_move(&self.players[current].hand[position]) {
            return Err(GameError::IllegalMove);
        }

        let card = self.players[current].remove_card(position);
        debug!(player = current, card = %card, "card played");
        self.events.push(GameEvent::CardPlayed {
            player: current,
            card: card.id(),
        });

        let face_color = card.active_face(self.world_flipped).color();
        self.active_color = if face_color.is_wild() {
            None
        } else {
            Some(face_color)
        };

        self.apply_effect(&card);
        self.discard.add_card(card);

        if matches!(self.state, GameState::GameOver) {
            return Ok(self.take_events());
        }

        if self.players[current].cards_count() == 0 {
            self.finish_round(current);
        } else if matches!(self.state, GameState::Running) {
            self.advance_turn();
        }

        Ok(self.take_events())
    }

    pub fn player_initiates_draw(&mut self) -> Result<Vec<GameEvent>> {
        match self.state {
            GameState::Running => {}
            GameState::WaitingForColor
            | GameState::WaitingForPlayer
            | GameState::RoundOver
            | GameState::GameOver => return Err(GameError::IllegalState(self.state)),
        }

        if self.turn.has_drawn() {
            return Err(GameError::AlreadyDrew);
        }
        let current = self.turn.current_player();
        if self.player_has_playable_card(current) {
            return Err(GameError::HasPlayableCard);
        }

        self.turn.mark_drawn();
        self.draw_cards_to(current, 1);
        Ok(self.take_events())
    }

    pub fn player_pass_turn(&mut self) -> Result<Vec<GameEvent>> {
        match self.state {
            GameState::Running => {}
            GameState::WaitingForColor
            | GameState::WaitingForPlayer
            | GameState::RoundOver
            | GameState::GameOver => return Err(GameError::IllegalState(self.state)),
        }

        if !self.turn.has_drawn() {
            return Err(GameError::MustDrawFirst);
        }
        let current = self.turn.current_player();
        if !self.rules.skip_after_draw && self.player_has_playable_card(current) {
            return Err(GameError::HasPlayableCard);
        }

        self.advance_turn();
        Ok(self.take_events())
    }

    pub fn call_uno(&mut self, player: PlayerId) -> Result<Vec<GameEvent>> {
        match self.state {
            GameState::Running => {}
            GameState::WaitingForColor
            | GameState::WaitingForPlayer
            | GameState::RoundOver
            | GameState::GameOver => return Err(GameError::IllegalState(self.state)),
        }

        if player >= self.players.len() {
            return Err(GameError::UnknownPlayer);
        }

        if self.players[player].cards_count() == 1 {
            self.players[player].mark_uno();
            self.events.push(GameEvent::UnoCalled { player });
        } else {
            debug!(player, "uno called with more than one card");
            self.events.push(GameEvent::UnoPenalty { player });
            self.draw_cards_to(player, UNO_PENALTY_CARDS);
        }
        Ok(self.take_events())
    }

    pub fn set_color(&mut self, color: CardColor) -> Result<Vec<GameEvent>> {
        match self.state {
            GameState::WaitingForColor => {}
            GameState::Running
            | GameState::WaitingForPlayer
            | GameState::RoundOver
            | GameState::GameOver => return Err(GameError::IllegalState(self.state)),
        }

        if !CardColor::palette(self.world_flipped).contains(&color) {
            return Err(GameError::InvalidColor);
        }

        let draws_until_color = matches!(
            self.discard
                .top_card()
                .map(|card| card.active_face(self.world_flipped)),
            Some(Face::Wild(WildFace {
                kind: WildKind::DrawColor,
                ..
            }))
        );

        self.state = GameState::Running;
        self.events.push(GameEvent::ColorChosen { color });

        if draws_until_color {
            self.draw_until_color(color);
        } else {
            self.active_color = Some(color);
            self.advance_turn();
        }
        Ok(self.take_events())
    }

    pub fn chosen_player(&mut self, target: PlayerId) -> Result<Vec<GameEvent>> {
        match self.state {
            GameState::WaitingForPlayer => {}
            GameState::Running
            | GameState::WaitingForColor
            | GameState::RoundOver
            | GameState::GameOver => return Err(GameError::IllegalState(self.state)),
        }

        if target >= self.players.len() {
            return Err(GameError::UnknownPlayer);
        }
        let chooser = self.turn.current_player();
        if target == chooser {
            return Err(GameError::InvalidTarget);
        }

        let wild = match self
            .discard
            .top_card()
            .map(|card| card.active_face(self.world_flipped))
        {
            Some(Face::Wild(wild)) => *wild,
            _ => unreachable!("a target is only requested by a wild card"),
        };

        self.state = GameState::Running;
        match wild.kind {
            WildKind::ForcedSwap => self.swap_hands(chooser, target),
            _ => self.draw_cards_to(target, wild.target_draw as usize),
        }

        if matches!(self.state, GameState::Running) {
            self.advance_turn();
        }
        Ok(self.take_events())
    }

    pub fn start_new_round(&mut self) -> Result<Vec<GameEvent>> {
        match self.state {
            GameState::RoundOver => {}
            GameState::Running
            | GameState::WaitingForColor
            | GameState::WaitingForPlayer
            | GameState::GameOver => return Err(GameError::IllegalState(self.state)),
        }

        info!("starting a new round");
        let mut recycled = Vec::new();
        for player in &mut self.players {
            recycled.extend(player.take_hand());
        }
        recycled.extend(self.discard.take_all());
        self.deck.refill(recycled);
        self.deck.shuffle(&mut self.rng);

        self.world_flipped = false;
        self.active_color = None;
        self.turn.reset(&mut self.rng);

        for id in 0..self.players.len() {
            for _ in 0..HAND_SIZE {
                let card = self
                    .deck
                    .draw()
                    .expect("the full deck covers every opening hand");
                self.players[id].add_card(card);
            }
        }

        self.reveal_opening_card();
        self.state = GameState::Running;
        self.events.push(GameEvent::RoundStarted);
        Ok(self.take_events())
    }

    // ---- reads ----

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn current_player(&self) -> PlayerId {
        self.turn.current_player()
    }

    pub fn active_color(&self) -> Option<CardColor> {
        self.active_color
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.discard.top_card()
    }

    pub fn is_reversed(&self) -> bool {
        self.turn.is_reversed()
    }

    pub fn world_flipped(&self) -> bool {
        self.world_flipped
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    pub fn discard_size(&self) -> usize {
        self.discard.len()
    }

    /// Legality of placing `card` on the current discard pile, checked
    /// against the current player's hand for restricted wilds.
    pub fn is_valid_move(&self, card: &Card) -> bool {
        validator::is_valid_move(
            card,
            &self.players[self.turn.current_player()].hand,
            self.discard.top_card(),
            self.active_color,
            self.world_flipped,
        )
    }

    pub fn player_has_playable_card(&self, player: PlayerId) -> bool {
        let Some(player) = self.players.get(player) else {
            return false;
        };
        validator::has_playable_card(
            &player.hand,
            self.discard.top_card(),
            self.active_color,
            self.world_flipped,
        )
    }

    // ---- internals ----

    fn apply_effect(&mut self, card: &Card) {
        match card.active_face(self.world_flipped) {
            Face::Numeric { .. } => {}
            Face::Action { kind, .. } => match kind {
                ActionKind::Skip => {
                    self.turn.skip_players(1);
                    self.events.push(GameEvent::PlayersSkipped { count: 1 });
                }
                ActionKind::SkipEveryone => {
                    let count = self.turn.seat_count() - 1;
                    self.turn.skip_players(count);
                    self.events.push(GameEvent::PlayersSkipped { count });
                }
                ActionKind::Reverse => self.reverse_direction(),
            },
            Face::Draw { amount, .. } => {
                let amount = *amount as usize;
                let target = self.turn.peek_next();
                self.draw_cards_to(target, amount);
                self.turn.skip_players(1);
                self.events.push(GameEvent::PlayersSkipped { count: 1 });
            }
            Face::Wild(wild) => {
                let wild = *wild;
                if wild.draw > 0 {
                    let target = self.turn.peek_next();
                    self.draw_cards_to(target, wild.draw as usize);
                    if matches!(self.state, GameState::GameOver) {
                        return;
                    }
                }
                if wild.chooses_color {
                    self.state = GameState::WaitingForColor;
                    self.events.push(GameEvent::ColorRequested);
                }
                if wild.chooses_target {
                    self.state = GameState::WaitingForPlayer;
                    self.events.push(GameEvent::TargetRequested);
                }
                if wild.skip > 0 {
                    self.turn.skip_players(wild.skip as usize);
                    self.events.push(GameEvent::PlayersSkipped {
                        count: wild.skip as usize,
                    });
                }
                if wild.reverses {
                    self.reverse_direction();
                }
            }
            Face::Flip { .. } => self.flip_world(card),
            Face::Back => unreachable!("the back of a card never resolves an effect"),
        }
    }

    /// Toggles the world and re-derives the active color from the card that
    /// is resolving right now, read on its newly active side. A wild face
    /// there gets a random concrete color of the new palette; nobody chose
    /// to play that side, so there is nobody to ask.
    fn flip_world(&mut self, resolving: &Card) {
        self.world_flipped = !self.world_flipped;
        info!(dark_side = self.world_flipped, "world flipped");
        self.events.push(GameEvent::WorldFlipped {
            dark_side: self.world_flipped,
        });

        let revealed = resolving.active_face(self.world_flipped).color();
        let color = if revealed.is_wild() {
            *self
                .rng
                .choose(CardColor::palette(self.world_flipped))
                .expect("palettes are never empty")
        } else {
            revealed
        };
        self.active_color = Some(color);
    }

    fn reverse_direction(&mut self) {
        self.turn.reverse_direction();
        self.events.push(GameEvent::DirectionReversed);
    }

    /// Draws from the deck, recycling the discard pile when it runs dry.
    /// With nothing left to recycle, or under the no-reshuffle rule, the
    /// game ends gracefully and `None` is returned.
    fn draw_from_deck(&mut self) -> Option<Card> {
        if let Some(card) = self.deck.draw() {
            return Some(card);
        }

        if self.rules.no_reshuffle || self.discard.len() <= 1 {
            info!("draw pile exhausted, ending the game");
            self.state = GameState::GameOver;
            self.events.push(GameEvent::MatchEnded { winner: None });
            return None;
        }

        let recycled = self.discard.take_all_except_top();
        debug!(count = recycled.len(), "reshuffling the discard pile");
        self.deck.refill(recycled);
        self.deck.shuffle(&mut self.rng);
        self.events.push(GameEvent::DeckReshuffled);
        self.deck.draw()
    }

    fn draw_cards_to(&mut self, player: PlayerId, count: usize) {
        let mut drawn = 0;
        for _ in 0..count {
            match self.draw_from_deck() {
                Some(card) => {
                    self.players[player].add_card(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        if drawn > 0 {
            self.events.push(GameEvent::CardsDrawn {
                player,
                count: drawn,
            });
        }
    }

    /// The next player draws until a card of the chosen color turns up,
    /// then the turn moves past them.
    fn draw_until_color(&mut self, color: CardColor) {
        let target = self.turn.peek_next();
        let mut drawn = 0;
        loop {
            let Some(card) = self.draw_from_deck() else {
                return;
            };
            let matched = card.active_face(self.world_flipped).color() == color;
            self.players[target].add_card(card);
            drawn += 1;
            if matched {
                break;
            }
        }
        self.events.push(GameEvent::CardsDrawn {
            player: target,
            count: drawn,
        });

        self.active_color = Some(color);
        self.turn.skip_players(1);
        self.advance_turn();
    }

    fn swap_hands(&mut self, chooser: PlayerId, target: PlayerId) {
        debug!(chooser, target, "hands swapped");
        let chooser_hand = self.players[chooser].take_hand();
        let target_hand = self.players[target].take_hand();
        self.players[chooser].replace_hand(target_hand);
        self.players[target].replace_hand(chooser_hand);
        self.events.push(GameEvent::HandsSwapped { chooser, target });
    }

    /// Moves the cursor and applies the start-of-turn uno penalty to the
    /// player now on turn.
    fn advance_turn(&mut self) {
        let next = self.turn.advance();
        self.events.push(GameEvent::TurnAdvanced { player: next });

        if self.rules.uno_penalty
            && self.players[next].cards_count() == 1
            && !self.players[next].has_called_uno()
        {
            debug!(player = next, "uno penalty at turn start");
            self.events.push(GameEvent::UnoPenalty { player: next });
            self.draw_cards_to(next, UNO_PENALTY_CARDS);
        }
    }

    fn finish_round(&mut self, winner: PlayerId) {
        let points = score::round_points(winner, &self.players, self.world_flipped);

        if !self.rules.scoring_mode {
            info!(winner, "match won");
            self.winner = Some(winner);
            self.state = GameState::GameOver;
            self.events.push(GameEvent::MatchEnded {
                winner: Some(winner),
            });
            return;
        }

        self.players[winner].add_score(points);
        info!(
            winner,
            points,
            total = self.players[winner].score(),
            "round won"
        );
        self.events.push(GameEvent::RoundEnded { winner, points });

        if self.players[winner].score() >= WINNING_SCORE {
            self.winner = Some(winner);
            self.state = GameState::GameOver;
            self.events.push(GameEvent::MatchEnded {
                winner: Some(winner),
            });
        } else {
            self.state = GameState::RoundOver;
        }
    }

    /// Puts the first concretely colored card of the deck on the discard
    /// pile and derives the opening active color from it. An all-wild deck
    /// has no such card; its top card opens with the color unset.
    fn reveal_opening_card(&mut self) {
        let card = self
            .deck
            .take_first_front_colored()
            .or_else(|| self.deck.draw())
            .expect("the deck is never empty when revealing an opening card");

        let face = card.active_face(self.world_flipped);
        self.active_color = if face.is_wild() {
            None
        } else {
            Some(face.color())
        };
        debug!(card = %card, "opening card revealed");
        self.discard.add_card(card);
    }

    fn take_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::FaceValue;

    fn player_names(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("Player {}", i + 1)).collect()
    }

    fn standard_game(count: usize, seed: u64) -> Game {
        Game::new(GameConfig::standard(player_names(count)).with_seed(seed)).unwrap()
    }

    /// A card guaranteed illegal on the current pile.
    fn unplayable_card(game: &Game, id: CardId) -> Card {
        let top = game.top_card().unwrap().active_face(game.world_flipped());
        let color = *CardColor::LIGHT
            .iter()
            .find(|color| Some(**color) != game.active_color())
            .unwrap();
        let digit = match top.value() {
            FaceValue::Number(digit) => (digit + 1) % 10,
            _ => 0,
        };
        Card::new(id, Face::numeric(color, digit), Face::Back)
    }

    /// A card guaranteed legal on the current pile.
    fn matching_card(game: &Game, id: CardId) -> Card {
        Card::new(
            id,
            Face::numeric(game.active_color().unwrap(), 5),
            Face::Back,
        )
    }

    fn total_cards(game: &Game) -> usize {
        game.deck_size()
            + game.discard_size()
            + game
                .players()
                .iter()
                .map(Player::cards_count)
                .sum::<usize>()
    }

    #[test]
    fn return_err_if_not_enough_players() {
        let error = Game::new(GameConfig::standard(player_names(1))).unwrap_err();
        assert!(matches!(error, GameError::NotEnoughPlayers));
    }

    #[test]
    fn return_err_if_too_many_players() {
        let error = Game::new(GameConfig::standard(player_names(11))).unwrap_err();
        assert!(matches!(error, GameError::TooManyPlayers));
    }

    #[test]
    fn return_err_if_custom_deck_cannot_deal() {
        let config = GameConfig {
            player_names: player_names(4),
            variant: crate::rules::Variant::Flip {
                pairs: vec![crate::rules::FacePair {
                    light: Face::numeric(CardColor::Red, 1),
                    dark: Face::numeric(CardColor::Pink, 1),
                    copies: 5,
                }],
            },
            rules: Rules::default(),
            seed: Some(1),
        };
        assert!(matches!(Game::new(config), Err(GameError::DeckTooSmall)));
    }

    #[test]
    fn all_players_start_with_7_cards_and_an_open_card() {
        let game = standard_game(4, 42);

        for player in game.players() {
            assert_eq!(player.cards_count(), 7);
        }
        assert_eq!(game.discard_size(), 1);
        assert!(game.active_color().is_some());
        assert_eq!(game.state(), GameState::Running);
    }

    #[test]
    fn same_seed_builds_the_same_game() {
        let a = standard_game(4, 7);
        let b = standard_game(4, 7);

        assert_eq!(a.current_player(), b.current_player());
        assert_eq!(a.active_color(), b.active_color());
        assert_eq!(
            a.top_card().unwrap().to_string(),
            b.top_card().unwrap().to_string()
        );
        for (left, right) in a.players().iter().zip(b.players()) {
            let left_hand: Vec<_> = left.hand.iter().map(Card::to_string).collect();
            let right_hand: Vec<_> = right.hand.iter().map(Card::to_string).collect();
            assert_eq!(left_hand, right_hand);
        }
    }

    #[test]
    fn the_card_pool_is_conserved() {
        let mut game = standard_game(3, 11);
        assert_eq!(total_cards(&game), 108);

        // A failed uno call moves two cards out of the deck but loses none.
        game.call_uno(game.current_player()).unwrap();
        assert_eq!(total_cards(&game), 108);
    }

    #[test]
    fn played_card_lands_on_top_and_leaves_the_hand() {
        let mut game = standard_game(4, 42);
        let current = game.current_player();
        let card = matching_card(&game, 900);
        game.player_mut(current).unwrap().hand[0] = card;
        let hand_before = game.player(current).unwrap().cards_count();

        game.play_card(900).unwrap();

        assert_eq!(game.top_card().unwrap().id(), 900);
        assert!(game.player(current).unwrap().position_of(900).is_none());
        assert_eq!(game.player(current).unwrap().cards_count(), hand_before - 1);
    }

    #[test]
    fn play_card_fails_if_card_not_in_hand() {
        let mut game = standard_game(4, 42);
        let top_before = game.top_card().unwrap().id();

        let error = game.play_card(9999).unwrap_err();

        assert!(matches!(error, GameError::CardNotInHand));
        assert_eq!(game.top_card().unwrap().id(), top_before);
        assert_eq!(game.current_player(), game.turn.current_player());
    }

    #[test]
    fn play_card_rejects_an_illegal_match() {
        let mut game = standard_game(4, 42);
        let current = game.current_player();
        game.player_mut(current).unwrap().hand[0] = unplayable_card(&game, 900);

        let error = game.play_card(900).unwrap_err();

        assert!(matches!(error, GameError::IllegalMove));
        assert!(game.player(current).unwrap().position_of(900).is_some());
    }

    #[test]
    fn wild_suspends_into_waiting_for_color() {
        let mut game = standard_game(4, 42);
        let current = game.current_player();
        game.player_mut(current).unwrap().hand[0] =
            Card::new(900, Face::wild(WildFace::plain()), Face::Back);

        let events = game.play_card(900).unwrap();

        assert_eq!(game.state(), GameState::WaitingForColor);
        assert_eq!(game.active_color(), None);
        assert!(events.contains(&GameEvent::ColorRequested));
        // The turn is suspended, not advanced.
        assert_eq!(game.current_player(), current);

        let error = game.play_card(0).unwrap_err();
        assert!(matches!(
            error,
            GameError::IllegalState(GameState::WaitingForColor)
        ));
    }

    #[test]
    fn set_color_resumes_and_advances() {
        let mut game = standard_game(4, 42);
        let current = game.current_player();
        game.player_mut(current).unwrap().hand[0] =
            Card::new(900, Face::wild(WildFace::plain()), Face::Back);
        game.play_card(900).unwrap();

        let events = game.set_color(CardColor::Red).unwrap();

        assert_eq!(game.state(), GameState::Running);
        assert_eq!(game.active_color(), Some(CardColor::Red));
        assert!(events.contains(&GameEvent::ColorChosen {
            color: CardColor::Red
        }));
        assert_ne!(game.current_player(), current);
    }

    #[test]
    fn set_color_rejects_off_palette_colors() {
        let mut game = standard_game(4, 42);
        let current = game.current_player();
        game.player_mut(current).unwrap().hand[0] =
            Card::new(900, Face::wild(WildFace::plain()), Face::Back);
        game.play_card(900).unwrap();

        assert!(matches!(
            game.set_color(CardColor::Wild),
            Err(GameError::InvalidColor)
        ));
        assert!(matches!(
            game.set_color(CardColor::Pink),
            Err(GameError::InvalidColor)
        ));
        assert_eq!(game.state(), GameState::WaitingForColor);
    }

    #[test]
    fn draw_until_color_feeds_the_next_player_and_skips_them() {
        let mut game = standard_game(2, 42);
        let current = game.current_player();
        let victim = (current + 1) % 2;
        game.player_mut(current).unwrap().hand[0] =
            Card::new(900, Face::wild(WildFace::draw_color()), Face::Back);
        // No other card may match the active color, or the wild is illegal.
        let filler = unplayable_card(&game, 901);
        let hand = &mut game.player_mut(current).unwrap().hand;
        hand.truncate(1);
        hand.push(filler);

        game.play_card(900).unwrap();
        assert_eq!(game.state(), GameState::WaitingForColor);

        let victim_before = game.player(victim).unwrap().cards_count();
        game.set_color(CardColor::Red).unwrap();

        assert_eq!(game.active_color(), Some(CardColor::Red));
        let victim_hand = &game.player(victim).unwrap().hand;
        assert!(victim_hand.len() > victim_before);
        assert_eq!(
            victim_hand.last().unwrap().active_face(false).color(),
            CardColor::Red
        );
        // Two players: the victim is skipped, control returns to the chooser.
        assert_eq!(game.current_player(), current);
    }

    #[test]
    fn exhausted_deck_without_reshuffle_source_ends_the_game() {
        let mut game = standard_game(2, 42);
        game.deck = Deck::new(Vec::new());
        let current = game.current_player();
        let filler_a = unplayable_card(&game, 900);
        let filler_b = unplayable_card(&game, 901);
        {
            let hand = &mut game.player_mut(current).unwrap().hand;
            hand.clear();
            hand.push(filler_a);
            hand.push(filler_b);
        }

        let events = game.player_initiates_draw().unwrap();

        assert_eq!(game.state(), GameState::GameOver);
        assert!(events.contains(&GameEvent::MatchEnded { winner: None }));
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn no_reshuffle_rule_ends_the_game_even_with_a_full_pile() {
        let rules = Rules {
            no_reshuffle: true,
            ..Rules::default()
        };
        let mut game =
            Game::new(GameConfig::standard(player_names(2)).with_rules(rules).with_seed(3))
                .unwrap();
        // Move the whole deck onto the discard pile; recycling would be
        // possible, the rule forbids it.
        while let Some(card) = game.deck.draw() {
            game.discard.add_card(card);
        }

        game.draw_cards_to(game.current_player(), 1);

        assert_eq!(game.state(), GameState::GameOver);
    }

    #[test]
    fn empty_deck_reshuffles_from_the_discard_pile() {
        let mut game = standard_game(2, 42);
        let mut moved = 0;
        while let Some(card) = game.deck.draw() {
            game.discard.add_card(card);
            moved += 1;
        }
        let top_before = game.top_card().unwrap().id();

        game.draw_cards_to(game.current_player(), 1);

        assert_eq!(game.state(), GameState::Running);
        // Everything but the old top was recycled, then one card was drawn.
        assert_eq!(game.deck_size(), moved - 1);
        assert_eq!(game.top_card().unwrap().id(), top_before);
        assert_eq!(game.discard_size(), 1);
        assert!(game.events.contains(&GameEvent::DeckReshuffled));
    }

    #[test]
    fn terminal_states_reject_every_action() {
        let mut game = standard_game(2, 42);
        let current = game.current_player();
        let card = matching_card(&game, 900);
        {
            let hand = &mut game.player_mut(current).unwrap().hand;
            hand.clear();
            hand.push(card);
        }

        game.play_card(900).unwrap();
        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.winner(), Some(current));

        assert!(matches!(
            game.play_card(0),
            Err(GameError::IllegalState(GameState::GameOver))
        ));
        assert!(matches!(
            game.player_initiates_draw(),
            Err(GameError::IllegalState(GameState::GameOver))
        ));
        assert!(matches!(
            game.player_pass_turn(),
            Err(GameError::IllegalState(GameState::GameOver))
        ));
        assert!(matches!(
            game.call_uno(0),
            Err(GameError::IllegalState(GameState::GameOver))
        ));
        assert!(matches!(
            game.set_color(CardColor::Red),
            Err(GameError::IllegalState(GameState::GameOver))
        ));
        assert!(matches!(
            game.chosen_player(0),
            Err(GameError::IllegalState(GameState::GameOver))
        ));
        assert!(matches!(
            game.start_new_round(),
            Err(GameError::IllegalState(GameState::GameOver))
        ));
    }

    #[test]
    fn running_rejects_follow_up_actions() {
        let mut game = standard_game(2, 42);

        assert!(matches!(
            game.set_color(CardColor::Red),
            Err(GameError::IllegalState(GameState::Running))
        ));
        assert!(matches!(
            game.chosen_player(1),
            Err(GameError::IllegalState(GameState::Running))
        ));
        assert!(matches!(
            game.start_new_round(),
            Err(GameError::IllegalState(GameState::Running))
        ));
    }

    #[test]
    fn ambiguous_flip_picks_a_concrete_dark_color() {
        let mut game = Game::new(GameConfig::flip(player_names(2)).with_seed(42)).unwrap();
        let current = game.current_player();
        let flip_card = Card::new(
            900,
            Face::flip(game.active_color().unwrap()),
            Face::wild(WildFace::plain()),
        );
        game.player_mut(current).unwrap().hand[0] = flip_card;

        game.play_card(900).unwrap();

        assert!(game.world_flipped());
        // The dark side of the flip card is wild, so the engine picked for us.
        let color = game.active_color().unwrap();
        assert!(CardColor::DARK.contains(&color));
        assert_eq!(game.state(), GameState::Running);
    }
}
