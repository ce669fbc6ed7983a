use tracing::info;

use crate::bidding::{Bid, BidOutcome, BiddingResult, cpu_bid, validate_bid};
use crate::error::BidError;
use crate::rules::{PLAYERS, Seat};
use crate::trick::Trick;

use super::{Game, GameState};

impl Game {
    /// Submits a bid for `seat`.
    ///
    /// When bidding finishes with four passes the game returns to `Setup` with
    /// the same Vorhand so the cards can be dealt again. Otherwise trick play
    /// starts with Vorhand leading.
    ///
    /// # Errors
    ///
    /// Returns an error if bidding is not active, it is not the seat's turn,
    /// the seat is unknown, or a Rufspiel calls an ace the hand cannot call.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn bid(&self, seat: Seat, bid: Bid) -> Result<BidOutcome, BidError> {
        if seat as usize >= PLAYERS {
            return Err(BidError::SeatNotFound);
        }

        let mut state = self.state.lock();
        if *state != GameState::Bidding {
            return Err(BidError::NotActive);
        }

        let mut round = self.round.lock();
        let mut bidding = self.bidding.lock();
        if bidding.current_bidder() != Some(seat) {
            return Err(BidError::OutOfTurn);
        }

        let mut hands = self.hands.lock();
        validate_bid(bid, hands[seat as usize].cards())?;

        let outcome = bidding.process_bid(seat, bid)?;
        let BidOutcome::Finished(result) = outcome else {
            return Ok(outcome);
        };

        match result {
            BiddingResult::NewDeal => {
                round.redeals += 1;
                for hand in hands.iter_mut() {
                    hand.clear();
                }
                info!(
                    round = round.round_number,
                    vorhand = round.vorhand,
                    "all seats passed, dealing again"
                );
                *state = GameState::Setup;
            }
            BiddingResult::Game(config) => {
                let vorhand = round.vorhand;
                round.config = Some(config);
                round.lead = vorhand;
                round.current_player = Some(vorhand);
                round.current_trick = Trick::new(vorhand);
                self.players.lock()[config.caller as usize].stats.games_called += 1;
                info!(
                    round = round.round_number,
                    caller = config.caller,
                    game = %config.game_type,
                    trump = ?config.trump_suit,
                    called_ace = ?config.called_ace,
                    "game announced"
                );
                *state = GameState::Playing;
            }
        }

        Ok(outcome)
    }

    /// Returns the bid the CPU policy would make for `seat`.
    ///
    /// # Errors
    ///
    /// Returns an error if the seat is unknown.
    pub fn cpu_bid(&self, seat: Seat) -> Result<Bid, BidError> {
        let hands = self.hands.lock();
        let hand = hands.get(seat as usize).ok_or(BidError::SeatNotFound)?;
        Ok(cpu_bid(hand.cards(), &self.options))
    }
}
