//! Card types and deck utilities.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::DealError;

/// Card suit (German-suited deck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Acorns (Eichel).
    Acorns,
    /// Leaves (Gras).
    Leaves,
    /// Hearts (Herz).
    Hearts,
    /// Bells (Schellen).
    Bells,
}

impl Suit {
    /// All suits, highest priority first.
    pub const ALL: [Self; 4] = [Self::Acorns, Self::Leaves, Self::Hearts, Self::Bells];

    /// Priority used to order Queens and Jacks (Acorns = 3 ... Bells = 0).
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Acorns => 3,
            Self::Leaves => 2,
            Self::Hearts => 1,
            Self::Bells => 0,
        }
    }

    const fn index(self) -> u8 {
        match self {
            Self::Acorns => 0,
            Self::Leaves => 1,
            Self::Hearts => 2,
            Self::Bells => 3,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Acorns => "acorns",
            Self::Leaves => "leaves",
            Self::Hearts => "hearts",
            Self::Bells => "bells",
        };
        f.write_str(name)
    }
}

/// Card value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack (Unter).
    Jack,
    /// Queen (Ober).
    Queen,
    /// King.
    King,
    /// Ace (Sau).
    Ace,
}

impl Value {
    /// All values in deck order.
    pub const ALL: [Self; 8] = [
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Card points of this value.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Seven | Self::Eight | Self::Nine => 0,
            Self::Ten => 10,
            Self::Jack => 2,
            Self::Queen => 3,
            Self::King => 4,
            Self::Ace => 11,
        }
    }

    /// Rank of the value as a plain suit card (Ace = 7 ... Seven = 0).
    #[must_use]
    pub const fn plain_rank(self) -> u8 {
        match self {
            Self::Ace => 7,
            Self::Ten => 6,
            Self::King => 5,
            Self::Queen => 4,
            Self::Jack => 3,
            Self::Nine => 2,
            Self::Eight => 1,
            Self::Seven => 0,
        }
    }

    const fn index(self) -> u8 {
        match self {
            Self::Seven => 0,
            Self::Eight => 1,
            Self::Nine => 2,
            Self::Ten => 3,
            Self::Jack => 4,
            Self::Queen => 5,
            Self::King => 6,
            Self::Ace => 7,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Seven => "seven",
            Self::Eight => "eight",
            Self::Nine => "nine",
            Self::Ten => "ten",
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
            Self::Ace => "ace",
        };
        f.write_str(name)
    }
}

/// A playing card.
///
/// Cards are plain values. Trick strength depends on the game being played and
/// is only available through [`crate::rules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The value of the card.
    pub value: Value,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, value: Value) -> Self {
        Self { suit, value }
    }

    /// Card points (Ace 11, Ten 10, King 4, Queen 3, Jack 2, others 0).
    #[must_use]
    pub const fn points(self) -> u8 {
        self.value.points()
    }

    /// Stable index of the card in `0..DECK_SIZE`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.suit.index() * 8 + self.value.index()
    }

    /// Returns the card with the given index, or `None` if out of range.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index as usize >= DECK_SIZE {
            return None;
        }
        let suit = Suit::ALL[(index / 8) as usize];
        let value = Value::ALL[(index % 8) as usize];
        Some(Self::new(suit, value))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 32;

/// Sum of card points over a full deck.
pub const TOTAL_POINTS: u16 = 120;

/// A full 32-card deck in dealing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an ordered deck.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for value in Value::ALL {
                cards.push(Card::new(suit, value));
            }
        }
        Self { cards }
    }

    /// Creates a freshly shuffled deck.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.cards.shuffle(rng);
        deck
    }

    /// Wraps an externally arranged deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidDeck`] unless `cards` holds each of the 32
    /// cards exactly once.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DealError> {
        if cards.len() != DECK_SIZE {
            return Err(DealError::InvalidDeck);
        }

        let mut seen = [false; DECK_SIZE];
        for card in &cards {
            let slot = &mut seen[card.index() as usize];
            if *slot {
                return Err(DealError::InvalidDeck);
            }
            *slot = true;
        }

        Ok(Self { cards })
    }

    /// Returns the cards in dealing order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Splits the deck into four hands of eight consecutive cards, seat 0 first.
    #[must_use]
    pub fn into_hands(self) -> [Vec<Card>; 4] {
        let mut hands: [Vec<Card>; 4] = Default::default();
        for (i, card) in self.cards.into_iter().enumerate() {
            hands[i / 8].push(card);
        }
        hands
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
