//! Game engine and state management.

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::sync::Mutex;

use crate::bidding::BiddingState;
use crate::card::Card;
use crate::error::PlayError;
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::result::RoundResult;
use crate::rules::{GameConfig, PLAYERS, Seat, seat_after};
use crate::trick::{CompletedTrick, Trick, legal_moves};

mod bid;
mod deal;
mod play;
mod scoring;
pub mod state;

pub use state::{GameState, PlayEvent, Player, PlayerStats, RoundState, TRICKS_PER_ROUND};

/// Callback invoked after every accepted card.
pub type PlayObserver = Box<dyn FnMut(&PlayEvent) + Send>;

/// A Schafkopf table that runs deals, bidding and trick play round by round.
///
/// The game owns the hands, the round bookkeeping and the random source used
/// for shuffling. Every action is checked against the seat whose turn it is.
pub struct Game {
    /// Table options.
    pub options: TableOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Per-round bookkeeping.
    pub round: Mutex<RoundState>,
    /// Hands per seat.
    pub hands: Mutex<[Hand; PLAYERS]>,
    /// Bidding for the current deal.
    bidding: Mutex<BiddingState>,
    /// Seats with names and counters.
    players: Mutex<[Player; PLAYERS]>,
    /// Result of the last finished round.
    last_result: Mutex<Option<RoundResult>>,
    /// Optional play observer, shared so it can be called without holding
    /// the slot.
    observer: Mutex<Option<Arc<Mutex<PlayObserver>>>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use schafkopf::{Game, TableOptions};
    ///
    /// let game = Game::new(TableOptions::default(), 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let players = core::array::from_fn(|i| Player {
            seat: i as Seat,
            name: options.player_names[i].clone(),
            is_human: options.human_seat == Some(i as Seat),
            tricks_won: 0,
            points: 0,
            stats: PlayerStats::default(),
        });
        let round = RoundState::new(1, seat_after(options.starting_vorhand, 0));

        Self {
            options,
            state: Mutex::new(GameState::Setup),
            round: Mutex::new(round),
            hands: Mutex::new(Default::default()),
            bidding: Mutex::new(BiddingState::new()),
            players: Mutex::new(players),
            last_result: Mutex::new(None),
            observer: Mutex::new(None),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Installs an observer called after every accepted card.
    ///
    /// The observer runs after all game locks are released and may replace
    /// or clear itself. It must not play cards on the same game.
    pub fn set_observer(&self, observer: PlayObserver) {
        *self.observer.lock() = Some(Arc::new(Mutex::new(observer)));
    }

    /// Removes the play observer.
    pub fn clear_observer(&self) {
        *self.observer.lock() = None;
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the current round number (1-based).
    pub fn round_number(&self) -> u32 {
        self.round.lock().round_number
    }

    /// Returns the Vorhand of the current round.
    pub fn vorhand(&self) -> Seat {
        self.round.lock().vorhand
    }

    /// Returns how many times the current round was dealt again.
    pub fn redeals(&self) -> u32 {
        self.round.lock().redeals
    }

    /// Returns the seat whose card is expected.
    ///
    /// Returns `None` outside trick play.
    pub fn current_player(&self) -> Option<Seat> {
        self.round.lock().current_player
    }

    /// Returns the seat whose bid is expected.
    ///
    /// Returns `None` outside bidding.
    pub fn current_bidder(&self) -> Option<Seat> {
        self.bidding.lock().current_bidder()
    }

    /// Returns a copy of the bidding state.
    pub fn bidding(&self) -> BiddingState {
        self.bidding.lock().clone()
    }

    /// Returns the seat whose action is expected, in bidding or in play.
    pub fn seat_to_act(&self) -> Option<Seat> {
        match self.state() {
            GameState::Bidding => self.current_bidder(),
            GameState::Playing => self.current_player(),
            GameState::Setup | GameState::Finished => None,
        }
    }

    /// Returns the hand of `seat`.
    pub fn hand(&self, seat: Seat) -> Option<Hand> {
        self.hands.lock().get(seat as usize).cloned()
    }

    /// Returns the trick in progress.
    pub fn current_trick(&self) -> Trick {
        self.round.lock().current_trick.clone()
    }

    /// Returns the tricks completed this round.
    pub fn completed_tricks(&self) -> Vec<CompletedTrick> {
        self.round.lock().completed_tricks.clone()
    }

    /// Returns the number of completed tricks this round.
    pub fn trick_number(&self) -> u8 {
        self.round.lock().trick_number
    }

    /// Returns the game fixed by bidding, if any.
    pub fn config(&self) -> Option<GameConfig> {
        self.round.lock().config
    }

    /// Returns whether the called ace has been played this round.
    pub fn partner_revealed(&self) -> bool {
        self.round.lock().partner_revealed
    }

    /// Returns the caller's partner once the called ace has been played.
    pub fn revealed_partner(&self) -> Option<Seat> {
        let round = self.round.lock();
        if !round.partner_revealed {
            return None;
        }
        let ace = round.config.and_then(|config| config.called_ace_card())?;
        round
            .completed_tricks
            .iter()
            .flat_map(|trick| trick.plays.iter())
            .chain(round.current_trick.plays())
            .find(|&&(_, card)| card == ace)
            .map(|&(seat, _)| seat)
    }

    /// Returns the seat currently winning the trick in progress.
    pub fn currently_winning(&self) -> Option<Seat> {
        let round = self.round.lock();
        let config = round.config?;
        round.current_trick.winner(&config)
    }

    /// Returns the cards `seat` may play right now.
    ///
    /// # Errors
    ///
    /// Returns an error outside trick play, for an unknown seat, or for an
    /// empty hand.
    pub fn legal_moves(&self, seat: Seat) -> Result<Vec<Card>, PlayError> {
        if *self.state.lock() != GameState::Playing {
            return Err(PlayError::InvalidState);
        }
        let round = self.round.lock();
        let config = round
            .config
            .ok_or(PlayError::InvariantViolation("trick play without a game"))?;
        let hands = self.hands.lock();
        let hand = hands.get(seat as usize).ok_or(PlayError::SeatNotFound)?;
        legal_moves(hand.cards(), round.current_trick.plays(), &config)
    }

    /// Returns a copy of the seats.
    pub fn players(&self) -> [Player; PLAYERS] {
        self.players.lock().clone()
    }

    /// Returns a copy of one seat.
    pub fn player(&self, seat: Seat) -> Option<Player> {
        self.players.lock().get(seat as usize).cloned()
    }

    /// Returns the result of the most recently finished round.
    pub fn last_result(&self) -> Option<RoundResult> {
        *self.last_result.lock()
    }

    /// Abandons the current deal and returns to `Setup`.
    ///
    /// Vorhand and round number are kept. Must be called between turns.
    pub fn reset_round(&self) {
        let mut state = self.state.lock();
        let mut round = self.round.lock();
        round.clear_deal();
        *self.bidding.lock() = BiddingState::new();
        for hand in self.hands.lock().iter_mut() {
            hand.clear();
        }
        for player in self.players.lock().iter_mut() {
            player.reset_round();
        }
        info!(round = round.round_number, "round abandoned");
        drop(round);
        *state = GameState::Setup;
    }
}
