//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The deck does not hold each of the 32 cards exactly once.
    #[error("deck must hold each of the 32 cards exactly once")]
    InvalidDeck,
}

/// Errors that can occur during bidding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BidError {
    /// Bidding is not active.
    #[error("bidding is not active")]
    NotActive,
    /// Not this seat's turn to bid.
    #[error("not this seat's turn to bid")]
    OutOfTurn,
    /// The called ace cannot be called from this hand.
    #[error("the called ace cannot be called from this hand")]
    UncallableAce,
    /// Seat not found.
    #[error("seat not found")]
    SeatNotFound,
}

/// Errors that can occur while playing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for playing a card.
    #[error("invalid game state for playing a card")]
    InvalidState,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    OutOfTurn,
    /// Seat not found.
    #[error("seat not found")]
    SeatNotFound,
    /// The card is not in the seat's hand.
    #[error("card not in hand")]
    CardNotInHand,
    /// The card may not be played on the current trick.
    #[error("card may not be played on the current trick")]
    IllegalMove,
    /// The hand holds no cards.
    #[error("hand holds no cards")]
    NoPlayableCards,
    /// A rule invariant was broken; the round must be abandoned.
    #[error("invariant violated: {0}")]
    InvariantViolation(&'static str),
}

/// Errors that can occur when moving between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid game state for this round transition.
    #[error("invalid game state for this round transition")]
    InvalidState,
}
