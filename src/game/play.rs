use core::mem;

use tracing::{debug, info, warn};

use crate::card::Card;
use crate::cpu::choose_card;
use crate::error::PlayError;
use crate::result::{PlayOutcome, TrickSummary};
use crate::rules::{PLAYERS, Seat};
use crate::trick::{CompletedTrick, Trick, legal_moves};

use super::scoring::score_round;
use super::{Game, GameState, PlayEvent, TRICKS_PER_ROUND};

impl Game {
    /// Plays `card` from the hand of `seat` into the current trick.
    ///
    /// A card completing the trick awards it to the winner, who leads next.
    /// The eighth trick finishes the round and returns its result.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in trick play, it is not the seat's
    /// turn, the card is not in the hand, or the card does not follow suit.
    /// [`PlayError::InvariantViolation`] means the round is corrupt and must
    /// be abandoned with [`Game::reset_round`].
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn play(&self, seat: Seat, card: Card) -> Result<PlayOutcome, PlayError> {
        if seat as usize >= PLAYERS {
            return Err(PlayError::SeatNotFound);
        }

        let mut state = self.state.lock();
        if *state != GameState::Playing {
            return Err(PlayError::InvalidState);
        }

        let mut round = self.round.lock();
        let config = round
            .config
            .ok_or(PlayError::InvariantViolation("trick play without a game"))?;
        if round.current_player != Some(seat) {
            return Err(PlayError::OutOfTurn);
        }

        let mut hands = self.hands.lock();
        let hand = &mut hands[seat as usize];
        if !hand.contains(card) {
            return Err(PlayError::CardNotInHand);
        }

        let legal = legal_moves(hand.cards(), round.current_trick.plays(), &config)?;
        if legal.is_empty() {
            warn!(seat, "empty legal move set for a non-empty hand");
            return Err(PlayError::InvariantViolation(
                "empty legal move set for a non-empty hand",
            ));
        }
        if !legal.contains(&card) {
            return Err(PlayError::IllegalMove);
        }

        round.current_trick.push(seat, card)?;
        hand.remove(card);
        drop(hands);

        let trick_number = round.trick_number + 1;
        debug!(round = round.round_number, trick = trick_number, seat, %card, "card played");

        let revealed_partner = !round.partner_revealed && config.called_ace_card() == Some(card);
        if revealed_partner {
            round.partner_revealed = true;
            info!(partner = seat, caller = config.caller, "called ace played, partner revealed");
        }

        let mut outcome = PlayOutcome {
            card,
            next_player: round.current_trick.next_seat(),
            revealed_partner,
            trick_completed: None,
            round_completed: None,
        };

        if round.current_trick.is_complete() {
            let winner = round.current_trick.winner(&config).ok_or(
                PlayError::InvariantViolation("complete trick without a winner"),
            )?;
            let trick = mem::replace(&mut round.current_trick, Trick::new(winner));
            let points = trick.points();

            let mut players = self.players.lock();
            players[winner as usize].tricks_won += 1;
            players[winner as usize].points += points;
            drop(players);

            round.completed_tricks.push(CompletedTrick {
                plays: trick.plays().to_vec(),
                winner,
                points,
            });
            round.trick_number = trick_number;
            round.lead = winner;
            round.current_player = Some(winner);
            outcome.next_player = Some(winner);
            outcome.trick_completed = Some(TrickSummary {
                trick_number,
                winner,
                points,
            });
            debug!(trick = trick_number, winner, points, "trick completed");

            if trick_number >= TRICKS_PER_ROUND {
                round.current_player = None;
                outcome.next_player = None;

                let result = score_round(&round, &config).inspect_err(|err| {
                    warn!(round = round.round_number, %err, "round scoring failed");
                })?;
                self.record_result(&result);
                info!(
                    round = result.round,
                    declarer_points = result.declarer_points,
                    declarers_won = result.declarers_won,
                    schneider = result.schneider,
                    schwarz = result.schwarz,
                    "round finished"
                );
                outcome.round_completed = Some(result);
                *state = GameState::Finished;
            }
        } else {
            round.current_player = outcome.next_player;
        }

        let event = PlayEvent {
            round: round.round_number,
            seat,
            card,
            trick_number,
            revealed_partner,
            trick_completed: outcome.trick_completed,
        };
        drop(round);
        drop(state);

        let observer = self.observer.lock().clone();
        if let Some(observer) = observer {
            let mut callback = observer.lock();
            (*callback)(&event);
        }

        Ok(outcome)
    }

    /// Returns the card the CPU policy would play for `seat` right now.
    ///
    /// # Errors
    ///
    /// Returns an error outside trick play, for an unknown seat, or for an
    /// empty hand.
    pub fn cpu_card(&self, seat: Seat) -> Result<Card, PlayError> {
        if *self.state.lock() != GameState::Playing {
            return Err(PlayError::InvalidState);
        }
        let round = self.round.lock();
        let config = round
            .config
            .ok_or(PlayError::InvariantViolation("trick play without a game"))?;
        let hands = self.hands.lock();
        let hand = hands.get(seat as usize).ok_or(PlayError::SeatNotFound)?;
        choose_card(hand.cards(), round.current_trick.plays(), &config)
    }
}
