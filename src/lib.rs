//! A Bavarian Schafkopf rule engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a four-seat table round by
//! round: dealing the 32-card deck, bidding for Rufspiel, Solo or Wenz, trick
//! play with must-follow enforcement, and scoring with Schneider and Schwarz.
//! The card rules themselves live in [`rules`] and [`trick`] and can be used
//! without a [`Game`].
//!
//! # Example
//!
//! ```
//! use schafkopf::{Game, GameState, TableOptions};
//!
//! let game = Game::new(TableOptions::default(), 42);
//! game.deal().unwrap();
//! assert_eq!(game.state(), GameState::Bidding);
//!
//! // Let the CPU policy bid and play every seat.
//! while game.state() == GameState::Bidding {
//!     let seat = game.current_bidder().unwrap();
//!     let bid = game.cpu_bid(seat).unwrap();
//!     game.bid(seat, bid).unwrap();
//! }
//! if game.state() == GameState::Playing {
//!     while let Some(seat) = game.current_player() {
//!         let card = game.cpu_card(seat).unwrap();
//!         game.play(seat, card).unwrap();
//!     }
//!     let result = game.last_result().unwrap();
//!     assert_eq!(result.declarer_points + result.defender_points, 120);
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bidding;
pub mod card;
pub mod cpu;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod rules;
mod sync;
pub mod trick;

// Re-export main types
pub use bidding::{Bid, BidOutcome, BiddingPhase, BiddingResult, BiddingState};
pub use card::{Card, DECK_SIZE, Deck, Suit, TOTAL_POINTS, Value};
pub use error::{BidError, DealError, PlayError, RoundError};
pub use game::{Game, GameState, PlayEvent, PlayObserver, Player, PlayerStats};
pub use hand::{Hand, HandEvaluation};
pub use options::TableOptions;
pub use result::{PlayOutcome, RoundResult, TrickSummary};
pub use rules::{GameConfig, GameType, Seat};
pub use trick::{CompletedTrick, Trick};
