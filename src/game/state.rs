//! Game state types.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::result::TrickSummary;
use crate::rules::{GameConfig, Seat};
use crate::trick::{CompletedTrick, Trick};

/// Tricks played in every round.
pub const TRICKS_PER_ROUND: u8 = 8;

/// Phase of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    /// Waiting for the cards to be dealt.
    Setup,
    /// Seats are bidding.
    Bidding,
    /// Tricks are being played.
    Playing,
    /// All eight tricks are played and the result is available.
    Finished,
}

/// Per-round bookkeeping.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Round number (1-based).
    pub round_number: u32,
    /// Seat that bids first and leads the first trick.
    pub vorhand: Seat,
    /// Seat leading the current trick.
    pub lead: Seat,
    /// Seat expected to play, `None` outside trick play.
    pub current_player: Option<Seat>,
    /// Number of completed tricks (0..=8).
    pub trick_number: u8,
    /// The trick in progress.
    pub current_trick: Trick,
    /// Completed tricks in play order.
    pub completed_tricks: Vec<CompletedTrick>,
    /// The game fixed by bidding.
    pub config: Option<GameConfig>,
    /// Whether the called ace has been played.
    pub partner_revealed: bool,
    /// Deals thrown in because every seat passed.
    pub redeals: u32,
}

impl RoundState {
    /// Creates the state of a round that has not been dealt yet.
    #[must_use]
    pub fn new(round_number: u32, vorhand: Seat) -> Self {
        Self {
            round_number,
            vorhand,
            lead: vorhand,
            current_player: None,
            trick_number: 0,
            current_trick: Trick::new(vorhand),
            completed_tricks: Vec::new(),
            config: None,
            partner_revealed: false,
            redeals: 0,
        }
    }

    /// Clears everything dealt or played, keeping round number, Vorhand and
    /// redeal count.
    pub fn clear_deal(&mut self) {
        let redeals = self.redeals;
        *self = Self::new(self.round_number, self.vorhand);
        self.redeals = redeals;
    }
}

/// Lifetime statistics of a seat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStats {
    /// Rounds played to the end.
    pub rounds_played: u32,
    /// Rounds finished on the winning side.
    pub rounds_won: u32,
    /// Games announced by this seat.
    pub games_called: u32,
    /// Card points taken over all rounds.
    pub total_points: u32,
}

/// A seat at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Seat index.
    pub seat: Seat,
    /// Display name.
    pub name: String,
    /// Whether a human controls this seat.
    pub is_human: bool,
    /// Tricks won this round.
    pub tricks_won: u8,
    /// Card points won this round.
    pub points: u16,
    /// Lifetime statistics.
    pub stats: PlayerStats,
}

impl Player {
    pub(super) const fn reset_round(&mut self) {
        self.tricks_won = 0;
        self.points = 0;
    }
}

/// Notification passed to the play observer after every accepted card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayEvent {
    /// Round number.
    pub round: u32,
    /// Seat that played.
    pub seat: Seat,
    /// Card played.
    pub card: Card,
    /// Trick the card was played into (1-based).
    pub trick_number: u8,
    /// Whether this card revealed the called-ace partner.
    pub revealed_partner: bool,
    /// Set when the card completed a trick.
    pub trick_completed: Option<TrickSummary>,
}
