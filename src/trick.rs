//! Tricks, legal-move filtering and trick resolution.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::PlayError;
use crate::rules::{
    CardGroup, GameConfig, PLAYERS, Seat, beats_in_trick, card_group, seat_after,
};

/// The trick in progress: who led and the cards played so far.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trick {
    lead: Seat,
    plays: Vec<(Seat, Card)>,
}

impl Trick {
    /// Creates an empty trick led by `lead`.
    #[must_use]
    pub fn new(lead: Seat) -> Self {
        Self {
            lead,
            plays: Vec::with_capacity(PLAYERS),
        }
    }

    /// Seat that leads the trick.
    #[must_use]
    pub const fn lead(&self) -> Seat {
        self.lead
    }

    /// Cards played so far, in play order.
    #[must_use]
    pub fn plays(&self) -> &[(Seat, Card)] {
        &self.plays
    }

    /// The first card of the trick.
    #[must_use]
    pub fn led_card(&self) -> Option<Card> {
        self.plays.first().map(|&(_, card)| card)
    }

    /// Seat expected to play next, or `None` once complete.
    #[must_use]
    pub fn next_seat(&self) -> Option<Seat> {
        (!self.is_complete()).then(|| seat_after(self.lead, self.plays.len() as u8))
    }

    /// Adds a card for `seat`, which must be the next seat clockwise.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::OutOfTurn`] if `seat` is not next or the trick is
    /// already complete.
    pub fn push(&mut self, seat: Seat, card: Card) -> Result<(), PlayError> {
        if self.next_seat() != Some(seat) {
            return Err(PlayError::OutOfTurn);
        }
        self.plays.push((seat, card));
        Ok(())
    }

    /// Returns whether all four seats have played.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.plays.len() == PLAYERS
    }

    /// Returns whether no card has been played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Sum of card points in the trick.
    #[must_use]
    pub fn points(&self) -> u16 {
        self.plays.iter().map(|(_, c)| u16::from(c.points())).sum()
    }

    /// Seat holding the best card so far.
    #[must_use]
    pub fn winner(&self, config: &GameConfig) -> Option<Seat> {
        resolve_trick_winner(&self.plays, config)
    }
}

/// A finished trick.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletedTrick {
    /// The four plays, lead first.
    pub plays: Vec<(Seat, Card)>,
    /// Seat that won the trick.
    pub winner: Seat,
    /// Card points won.
    pub points: u16,
}

/// Returns the cards `hand` may play on `trick`.
///
/// The leader may play anything. Otherwise the hand must follow the group of
/// the led card (trump, or the plain led suit) when it can, and may play any
/// card when it is void in that group.
///
/// # Errors
///
/// Returns [`PlayError::NoPlayableCards`] for an empty hand.
pub fn legal_moves(
    hand: &[Card],
    trick: &[(Seat, Card)],
    config: &GameConfig,
) -> Result<Vec<Card>, PlayError> {
    if hand.is_empty() {
        return Err(PlayError::NoPlayableCards);
    }

    let Some(&(_, led)) = trick.first() else {
        return Ok(hand.to_vec());
    };

    let required = card_group(led, config);
    let following: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|&c| card_group(c, config) == required)
        .collect();

    if following.is_empty() {
        Ok(hand.to_vec())
    } else {
        Ok(following)
    }
}

/// Returns the seat holding the best card among `plays`, or `None` if empty.
///
/// The first play fixes the led group; trump beats everything, otherwise the
/// highest card of the led suit wins. Also usable on an incomplete trick to
/// show who is currently winning.
#[must_use]
pub fn resolve_trick_winner(plays: &[(Seat, Card)], config: &GameConfig) -> Option<Seat> {
    let (&first, rest) = plays.split_first()?;
    let led: CardGroup = card_group(first.1, config);
    let best = rest.iter().fold(first, |best, &play| {
        if beats_in_trick(play.1, best.1, led, config) {
            play
        } else {
            best
        }
    });
    Some(best.0)
}
