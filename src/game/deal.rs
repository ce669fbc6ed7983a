use tracing::info;

use crate::card::Deck;
use crate::error::DealError;
use crate::hand::Hand;

use super::{Game, GameState};

impl Game {
    /// Shuffles a fresh deck and deals eight cards to every seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in `Setup` state.
    pub fn deal(&self) -> Result<(), DealError> {
        if *self.state.lock() != GameState::Setup {
            return Err(DealError::InvalidState);
        }
        let deck = Deck::shuffled(&mut *self.rng.lock());
        self.deal_deck(deck)
    }

    /// Deals an arranged deck: seat 0 receives the first eight cards, seat 1
    /// the next eight, and so on. Bidding starts at Vorhand.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in `Setup` state.
    pub fn deal_deck(&self, deck: Deck) -> Result<(), DealError> {
        let mut state = self.state.lock();
        if *state != GameState::Setup {
            return Err(DealError::InvalidState);
        }

        let mut round = self.round.lock();
        round.clear_deal();
        self.bidding.lock().start(round.vorhand);

        let mut hands = self.hands.lock();
        for (hand, cards) in hands.iter_mut().zip(deck.into_hands()) {
            *hand = Hand::from_cards(cards);
        }
        drop(hands);

        for player in self.players.lock().iter_mut() {
            player.reset_round();
        }

        info!(
            round = round.round_number,
            vorhand = round.vorhand,
            redeals = round.redeals,
            "cards dealt"
        );
        drop(round);

        *state = GameState::Bidding;
        Ok(())
    }
}
