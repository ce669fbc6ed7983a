//! Trick and round result types.

use crate::card::Card;
use crate::rules::{GameConfig, PLAYERS, Seat};

/// Card points the declaring side needs to win.
pub const POINTS_TO_WIN: u16 = 61;

/// Card points at or above which the winning side makes Schneider.
pub const SCHNEIDER_POINTS: u16 = 91;

/// Summary of a completed trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrickSummary {
    /// Trick number within the round (1-based).
    pub trick_number: u8,
    /// Seat that won the trick.
    pub winner: Seat,
    /// Card points in the trick.
    pub points: u16,
}

/// What happened after a card was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayOutcome {
    /// The card that was played.
    pub card: Card,
    /// Seat expected to play next, `None` once the round is over.
    pub next_player: Option<Seat>,
    /// Whether this card revealed the called-ace partner.
    pub revealed_partner: bool,
    /// Set when the card completed a trick.
    pub trick_completed: Option<TrickSummary>,
    /// Set when the card completed the round.
    pub round_completed: Option<RoundResult>,
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// Round number (1-based).
    pub round: u32,
    /// The game that was played.
    pub config: GameConfig,
    /// Seats on the declaring side (caller and, in a Rufspiel, the partner).
    pub declarers: [bool; PLAYERS],
    /// Partner revealed by the called ace, if any.
    pub partner: Option<Seat>,
    /// Card points taken by the declaring side.
    pub declarer_points: u16,
    /// Card points taken by the defending side.
    pub defender_points: u16,
    /// Tricks taken by the declaring side.
    pub declarer_tricks: u8,
    /// Tricks taken by the defending side.
    pub defender_tricks: u8,
    /// Card points per seat.
    pub seat_points: [u16; PLAYERS],
    /// Tricks per seat.
    pub seat_tricks: [u8; PLAYERS],
    /// Whether the declaring side reached [`POINTS_TO_WIN`].
    pub declarers_won: bool,
    /// Whether the winning side reached [`SCHNEIDER_POINTS`].
    pub schneider: bool,
    /// Whether the winning side took every trick.
    pub schwarz: bool,
}

impl RoundResult {
    /// Returns whether `seat` played on the declaring side.
    #[must_use]
    pub fn is_declarer(&self, seat: Seat) -> bool {
        self.declarers.get(seat as usize).copied().unwrap_or(false)
    }

    /// Returns whether `seat` is on the winning side.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        (seat as usize) < PLAYERS && self.is_declarer(seat) == self.declarers_won
    }
}
