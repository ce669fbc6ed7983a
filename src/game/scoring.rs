use tracing::info;

use crate::bidding::BiddingState;
use crate::card::{DECK_SIZE, TOTAL_POINTS};
use crate::error::{PlayError, RoundError};
use crate::result::{POINTS_TO_WIN, RoundResult, SCHNEIDER_POINTS};
use crate::rules::{GameConfig, GameType, PLAYERS, Seat, next_seat};

use super::{Game, GameState, RoundState, TRICKS_PER_ROUND};

/// Scores a round whose eight tricks are complete.
pub(super) fn score_round(round: &RoundState, config: &GameConfig) -> Result<RoundResult, PlayError> {
    if round.completed_tricks.len() != TRICKS_PER_ROUND as usize {
        return Err(PlayError::InvariantViolation("round scored before eight tricks"));
    }

    let mut seat_points = [0u16; PLAYERS];
    let mut seat_tricks = [0u8; PLAYERS];
    let mut played = [false; DECK_SIZE];
    let mut recorded: u16 = 0;
    let mut partner = None;
    let called_ace = config.called_ace_card();

    for trick in &round.completed_tricks {
        let mut seen = [false; PLAYERS];
        let mut points: u16 = 0;
        for &(seat, card) in &trick.plays {
            let slot = seen
                .get_mut(seat as usize)
                .ok_or(PlayError::InvariantViolation("trick holds an unknown seat"))?;
            if *slot {
                return Err(PlayError::InvariantViolation("seat played twice in one trick"));
            }
            *slot = true;

            let card_slot = &mut played[card.index() as usize];
            if *card_slot {
                return Err(PlayError::InvariantViolation("card played twice in one round"));
            }
            *card_slot = true;

            points += u16::from(card.points());
            if called_ace == Some(card) {
                partner = Some(seat);
            }
        }
        if seen.contains(&false) {
            return Err(PlayError::InvariantViolation("trick without four cards"));
        }
        if !seen.get(trick.winner as usize).copied().unwrap_or(false) {
            return Err(PlayError::InvariantViolation("trick winner outside the trick"));
        }
        seat_points[trick.winner as usize] += points;
        seat_tricks[trick.winner as usize] += 1;
        recorded += trick.points;
    }

    // Seats are credited from the cards; the recorded trick points must agree.
    if recorded != TOTAL_POINTS || seat_points.iter().sum::<u16>() != TOTAL_POINTS {
        return Err(PlayError::InvariantViolation("card points do not add up to 120"));
    }

    let mut declarers = [false; PLAYERS];
    declarers[config.caller as usize] = true;
    if config.game_type == GameType::Rufspiel {
        let partner = partner.ok_or(PlayError::InvariantViolation("called ace never played"))?;
        declarers[partner as usize] = true;
    }

    let (mut declarer_points, mut declarer_tricks) = (0, 0);
    for ((&declarer, &points), &tricks) in declarers.iter().zip(&seat_points).zip(&seat_tricks) {
        if declarer {
            declarer_points += points;
            declarer_tricks += tricks;
        }
    }
    let defender_points = TOTAL_POINTS - declarer_points;
    let defender_tricks = TRICKS_PER_ROUND - declarer_tricks;

    let declarers_won = declarer_points >= POINTS_TO_WIN;
    let (winner_points, winner_tricks) = if declarers_won {
        (declarer_points, declarer_tricks)
    } else {
        (defender_points, defender_tricks)
    };

    Ok(RoundResult {
        round: round.round_number,
        config: *config,
        declarers,
        partner: if config.game_type == GameType::Rufspiel { partner } else { None },
        declarer_points,
        defender_points,
        declarer_tricks,
        defender_tricks,
        seat_points,
        seat_tricks,
        declarers_won,
        schneider: winner_points >= SCHNEIDER_POINTS,
        schwarz: winner_tricks == TRICKS_PER_ROUND,
    })
}

impl Game {
    /// Folds a finished round into the seat statistics.
    pub(super) fn record_result(&self, result: &RoundResult) {
        let mut players = self.players.lock();
        for player in players.iter_mut() {
            let seat = player.seat;
            player.stats.rounds_played += 1;
            player.stats.total_points += u32::from(result.seat_points[seat as usize]);
            if result.is_winner(seat) {
                player.stats.rounds_won += 1;
            }
        }
        drop(players);
        *self.last_result.lock() = Some(*result);
    }

    /// Starts the next round after a finished one.
    ///
    /// The round number goes up by one and Vorhand moves one seat clockwise.
    ///
    /// # Errors
    ///
    /// Returns an error unless the current round is `Finished`.
    pub fn next_round(&self) -> Result<(), RoundError> {
        let mut state = self.state.lock();
        if *state != GameState::Finished {
            return Err(RoundError::InvalidState);
        }

        let mut round = self.round.lock();
        let vorhand: Seat = next_seat(round.vorhand);
        *round = RoundState::new(round.round_number + 1, vorhand);
        *self.bidding.lock() = BiddingState::new();
        for hand in self.hands.lock().iter_mut() {
            hand.clear();
        }
        for player in self.players.lock().iter_mut() {
            player.reset_round();
        }
        info!(round = round.round_number, vorhand, "next round");
        drop(round);

        *state = GameState::Setup;
        Ok(())
    }
}
