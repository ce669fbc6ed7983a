//! Bidding state machine and CPU bidding policy.
//!
//! Bidding runs once per deal. Each seat, starting at Vorhand and going
//! clockwise, either passes or announces a game. A Solo or Wenz ends bidding
//! at once; a Rufspiel becomes the active bid while later seats may still
//! announce a Solo or Wenz. Four passes mean the cards are dealt again.

use tracing::debug;

use crate::card::{Card, Suit};
use crate::error::BidError;
use crate::hand::{callable_suits, evaluate};
use crate::options::TableOptions;
use crate::rules::{GameConfig, PLAYERS, Seat, seat_after};

/// Phase of the bidding state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BiddingPhase {
    /// Bidding has not started.
    Waiting,
    /// Seats are bidding.
    Active,
    /// Bidding is over and a result is available.
    Finished,
}

/// A single bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bid {
    /// No game.
    Pass,
    /// Partner game calling the ace of `called`.
    Rufspiel {
        /// Suit of the called ace.
        called: Suit,
    },
    /// Solo with the given trump suit.
    Solo {
        /// Trump suit.
        trump: Suit,
    },
    /// Wenz.
    Wenz,
}

impl Bid {
    /// Returns whether the bid ends bidding immediately.
    #[must_use]
    pub const fn is_solo_like(self) -> bool {
        matches!(self, Self::Solo { .. } | Self::Wenz)
    }

    fn into_config(self, caller: Seat) -> Option<GameConfig> {
        match self {
            Self::Pass => None,
            Self::Rufspiel { called } => Some(GameConfig::rufspiel(caller, called)),
            Self::Solo { trump } => Some(GameConfig::solo(caller, trump)),
            Self::Wenz => Some(GameConfig::wenz(caller)),
        }
    }
}

/// Final result of bidding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BiddingResult {
    /// Every seat passed; deal again with the same Vorhand.
    NewDeal,
    /// A game will be played.
    Game(GameConfig),
}

/// What happened after a bid was processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BidOutcome {
    /// Bidding continues with `next_bidder`.
    Continue {
        /// Seat that bids next.
        next_bidder: Seat,
    },
    /// Bidding is over.
    Finished(BiddingResult),
}

/// State of one bidding sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiddingState {
    phase: BiddingPhase,
    order: [Seat; PLAYERS],
    position: usize,
    bids: [Option<Bid>; PLAYERS],
    active: Option<(Seat, Bid)>,
    result: Option<BiddingResult>,
}

impl BiddingState {
    /// Creates a bidding state waiting to start.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: BiddingPhase::Waiting,
            order: [0, 1, 2, 3],
            position: 0,
            bids: [None; PLAYERS],
            active: None,
            result: None,
        }
    }

    /// Starts bidding with `vorhand` bidding first.
    pub fn start(&mut self, vorhand: Seat) {
        *self = Self::new();
        for (i, seat) in self.order.iter_mut().enumerate() {
            *seat = seat_after(vorhand, i as u8);
        }
        self.phase = BiddingPhase::Active;
    }

    /// Records a bid from `seat`.
    ///
    /// # Errors
    ///
    /// Returns [`BidError::NotActive`] if bidding is not running and
    /// [`BidError::OutOfTurn`] if `seat` is not the current bidder.
    pub fn process_bid(&mut self, seat: Seat, bid: Bid) -> Result<BidOutcome, BidError> {
        if self.phase != BiddingPhase::Active {
            return Err(BidError::NotActive);
        }
        if self.current_bidder() != Some(seat) {
            return Err(BidError::OutOfTurn);
        }

        debug!(seat, ?bid, "bid recorded");
        self.bids[seat as usize] = Some(bid);
        if bid != Bid::Pass {
            self.active = Some((seat, bid));
        }

        if bid.is_solo_like() {
            return Ok(BidOutcome::Finished(self.finish()));
        }

        self.position += 1;
        if self.position >= PLAYERS {
            return Ok(BidOutcome::Finished(self.finish()));
        }

        Ok(BidOutcome::Continue {
            next_bidder: self.order[self.position],
        })
    }

    fn finish(&mut self) -> BiddingResult {
        let result = self
            .active
            .and_then(|(seat, bid)| bid.into_config(seat))
            .map_or(BiddingResult::NewDeal, BiddingResult::Game);
        self.phase = BiddingPhase::Finished;
        self.result = Some(result);
        result
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> BiddingPhase {
        self.phase
    }

    /// Returns the seat expected to bid, if bidding is active.
    #[must_use]
    pub fn current_bidder(&self) -> Option<Seat> {
        match self.phase {
            BiddingPhase::Active => self.order.get(self.position).copied(),
            BiddingPhase::Waiting | BiddingPhase::Finished => None,
        }
    }

    /// Returns the bidding order, Vorhand first.
    #[must_use]
    pub const fn order(&self) -> [Seat; PLAYERS] {
        self.order
    }

    /// Returns the bid recorded for `seat`, if any.
    #[must_use]
    pub fn bid_of(&self, seat: Seat) -> Option<Bid> {
        self.bids.get(seat as usize).copied().flatten()
    }

    /// Returns the currently winning bid and its seat.
    #[must_use]
    pub const fn active_bid(&self) -> Option<(Seat, Bid)> {
        self.active
    }

    /// Returns the result once bidding has finished.
    #[must_use]
    pub const fn result(&self) -> Option<BiddingResult> {
        self.result
    }
}

impl Default for BiddingState {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks that `cards` may make `bid`.
///
/// # Errors
///
/// Returns [`BidError::UncallableAce`] for a Rufspiel on a suit the hand
/// cannot call (see [`callable_suits`]).
pub fn validate_bid(bid: Bid, cards: &[Card]) -> Result<(), BidError> {
    match bid {
        Bid::Rufspiel { called } if !callable_suits(cards).contains(&called) => {
            Err(BidError::UncallableAce)
        }
        _ => Ok(()),
    }
}

/// Chooses a bid for a computer-controlled seat.
///
/// Calls a Rufspiel when the hand holds at least `cpu_min_trumps` trumps, of
/// which at least `cpu_min_high_trumps` are Queens or Jacks, and some ace is
/// callable (Acorns before Leaves before Bells). Passes otherwise.
#[must_use]
pub fn cpu_bid(cards: &[Card], options: &TableOptions) -> Bid {
    let eval = evaluate(cards);
    if eval.trump_count < options.cpu_min_trumps
        || eval.high_trump_count < options.cpu_min_high_trumps
    {
        return Bid::Pass;
    }

    callable_suits(cards)
        .first()
        .map_or(Bid::Pass, |&called| Bid::Rufspiel { called })
}
