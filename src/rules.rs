//! Game types, trump classification and card ranking.
//!
//! Every comparison between two cards goes through this module. Which cards
//! are trump, and how they are ordered, depends on the [`GameConfig`] chosen
//! during bidding:
//!
//! - **Rufspiel / Solo**: all Queens, then all Jacks (each Acorns > Leaves >
//!   Hearts > Bells), then the trump suit Ace > Ten > King > Nine > Eight >
//!   Seven. A Rufspiel always plays Hearts as trump suit.
//! - **Wenz**: only the four Jacks are trump; Queens are plain suit cards.

use core::fmt;

use crate::card::{Card, Suit, Value};

/// Seat index at the table (0..=3).
pub type Seat = u8;

/// Number of seats at the table.
pub const PLAYERS: usize = 4;

/// Trump suit of every Rufspiel.
pub const RUFSPIEL_TRUMP: Suit = Suit::Hearts;

/// Returns the seat `n` steps clockwise from `seat`.
#[inline]
#[must_use]
pub const fn seat_after(seat: Seat, n: u8) -> Seat {
    ((seat as usize + n as usize) % PLAYERS) as Seat
}

/// Returns the next seat clockwise.
#[inline]
#[must_use]
pub const fn next_seat(seat: Seat) -> Seat {
    seat_after(seat, 1)
}

/// Kind of game being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameType {
    /// Partner game: the caller plays with the holder of the called ace.
    Rufspiel,
    /// Caller plays alone with a chosen trump suit.
    Solo,
    /// Caller plays alone, only Jacks are trump.
    Wenz,
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rufspiel => "Rufspiel",
            Self::Solo => "Solo",
            Self::Wenz => "Wenz",
        };
        f.write_str(name)
    }
}

/// Configuration fixed at the end of bidding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Kind of game.
    pub game_type: GameType,
    /// Trump suit, `None` for Wenz.
    pub trump_suit: Option<Suit>,
    /// Suit of the called ace (Rufspiel only).
    pub called_ace: Option<Suit>,
    /// Seat that announced the game.
    pub caller: Seat,
}

impl GameConfig {
    /// Creates a Rufspiel configuration calling the ace of `called`.
    #[must_use]
    pub const fn rufspiel(caller: Seat, called: Suit) -> Self {
        Self {
            game_type: GameType::Rufspiel,
            trump_suit: Some(RUFSPIEL_TRUMP),
            called_ace: Some(called),
            caller,
        }
    }

    /// Creates a suit solo configuration.
    #[must_use]
    pub const fn solo(caller: Seat, trump: Suit) -> Self {
        Self {
            game_type: GameType::Solo,
            trump_suit: Some(trump),
            called_ace: None,
            caller,
        }
    }

    /// Creates a Wenz configuration.
    #[must_use]
    pub const fn wenz(caller: Seat) -> Self {
        Self {
            game_type: GameType::Wenz,
            trump_suit: None,
            called_ace: None,
            caller,
        }
    }

    /// The called ace as a card, if this is a Rufspiel.
    #[must_use]
    pub fn called_ace_card(&self) -> Option<Card> {
        self.called_ace.map(|suit| Card::new(suit, Value::Ace))
    }
}

/// Group a card belongs to for suit-following.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardGroup {
    /// Any trump card.
    Trump,
    /// A plain card of the given suit.
    Suit(Suit),
}

/// Position of a card in the trick ranking for a given game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardRank {
    /// Trump with its order (higher is stronger).
    Trump(u8),
    /// Plain suit card with its rank within the suit.
    Plain(Suit, u8),
}

/// Returns whether `card` is trump in the given game.
#[must_use]
pub fn is_trump(card: Card, config: &GameConfig) -> bool {
    trump_order(card, config).is_some()
}

/// Returns the trump order of `card`, or `None` if it is not trump.
///
/// In a Rufspiel or Solo the order runs from 0 (trump Seven) to 13 (Queen of
/// acorns). In a Wenz it runs from 0 (Jack of bells) to 3 (Jack of acorns).
#[must_use]
pub fn trump_order(card: Card, config: &GameConfig) -> Option<u8> {
    match config.game_type {
        GameType::Wenz => (card.value == Value::Jack).then(|| card.suit.priority()),
        GameType::Rufspiel | GameType::Solo => match card.value {
            Value::Queen => Some(10 + card.suit.priority()),
            Value::Jack => Some(6 + card.suit.priority()),
            value if Some(card.suit) == config.trump_suit => Some(match value {
                Value::Ace => 5,
                Value::Ten => 4,
                Value::King => 3,
                Value::Nine => 2,
                Value::Eight => 1,
                _ => 0,
            }),
            _ => None,
        },
    }
}

/// Returns the rank of `card` in the given game.
#[must_use]
pub fn rank(card: Card, config: &GameConfig) -> CardRank {
    trump_order(card, config).map_or_else(
        || CardRank::Plain(card.suit, card.value.plain_rank()),
        CardRank::Trump,
    )
}

/// Returns the suit-following group of `card`.
#[must_use]
pub fn card_group(card: Card, config: &GameConfig) -> CardGroup {
    if is_trump(card, config) {
        CardGroup::Trump
    } else {
        CardGroup::Suit(card.suit)
    }
}

/// Returns whether `a` beats `b`.
///
/// Trump beats non-trump; two trumps compare by trump order; two plain cards
/// of the same suit compare by rank. A plain card never beats a plain card of
/// another suit, so callers must compare against the best card of the trick
/// so far, which is always trump or of the led suit.
#[must_use]
pub fn is_card_higher(a: Card, b: Card, config: &GameConfig) -> bool {
    match (rank(a, config), rank(b, config)) {
        (CardRank::Trump(x), CardRank::Trump(y)) => x > y,
        (CardRank::Trump(_), CardRank::Plain(..)) => true,
        (CardRank::Plain(..), CardRank::Trump(_)) => false,
        (CardRank::Plain(sa, x), CardRank::Plain(sb, y)) => sa == sb && x > y,
    }
}

/// Returns whether `a` beats `b` in a trick whose lead belongs to `led`.
///
/// Unlike [`is_card_higher`] this is defined for every pair: a card following
/// the led suit beats any off-suit plain card, and two off-suit plain cards
/// never beat each other.
#[must_use]
pub fn beats_in_trick(a: Card, b: Card, led: CardGroup, config: &GameConfig) -> bool {
    match (rank(a, config), rank(b, config)) {
        (CardRank::Plain(sa, _), CardRank::Plain(sb, _)) if sa != sb => {
            led == CardGroup::Suit(sa)
        }
        _ => is_card_higher(a, b, config),
    }
}
