//! Player hands and hand evaluation.

use alloc::vec::Vec;

use crate::card::{Card, Suit, Value};
use crate::rules::{CardGroup, GameConfig, RUFSPIEL_TRUMP, card_group, is_trump};

/// Cards held by one seat during a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes `card` from the hand, returning whether it was held.
    pub fn remove(&mut self, card: Card) -> bool {
        self.cards
            .iter()
            .position(|&c| c == card)
            .map(|pos| self.cards.remove(pos))
            .is_some()
    }

    /// Returns whether the hand holds at least one card of `group`.
    #[must_use]
    pub fn has_group(&self, group: CardGroup, config: &GameConfig) -> bool {
        self.cards.iter().any(|&c| card_group(c, config) == group)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Evaluates the hand under the default Rufspiel trump model.
    #[must_use]
    pub fn evaluate(&self) -> HandEvaluation {
        evaluate(&self.cards)
    }
}

/// Aggregate features of a hand, used by bidding and CPU play.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandEvaluation {
    /// Number of trump cards held.
    pub trump_count: u8,
    /// Number of Queens and Jacks held (trump Jacks only in a Wenz).
    pub high_trump_count: u8,
    /// Non-trump suits without any plain card held.
    pub void_suits: Vec<Suit>,
    /// Non-trump suits with four or more cards, counted by raw suit.
    pub long_suits: Vec<Suit>,
    /// Total card points held.
    pub total_points: u16,
}

/// Evaluates a hand under the default trump model (Rufspiel, Hearts trump).
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandEvaluation {
    evaluate_with(cards, &GameConfig::rufspiel(0, Suit::Acorns))
}

/// Evaluates a hand for the given game.
#[must_use]
pub fn evaluate_with(cards: &[Card], config: &GameConfig) -> HandEvaluation {
    let trump_count = cards.iter().filter(|&&c| is_trump(c, config)).count() as u8;
    let high_trump_count = cards
        .iter()
        .filter(|&&c| is_trump(c, config) && matches!(c.value, Value::Queen | Value::Jack))
        .count() as u8;

    let trump_suit = config.trump_suit;
    let mut void_suits = Vec::new();
    let mut long_suits = Vec::new();

    for suit in Suit::ALL {
        if Some(suit) == trump_suit {
            continue;
        }
        let plain = cards
            .iter()
            .filter(|&&c| card_group(c, config) == CardGroup::Suit(suit))
            .count();
        if plain == 0 {
            void_suits.push(suit);
        }
        let raw = cards.iter().filter(|c| c.suit == suit).count();
        if raw >= 4 {
            long_suits.push(suit);
        }
    }

    let total_points = cards.iter().map(|c| u16::from(c.points())).sum();

    HandEvaluation {
        trump_count,
        high_trump_count,
        void_suits,
        long_suits,
        total_points,
    }
}

/// Suits whose ace `cards` may call in a Rufspiel, in preference order.
///
/// A suit is callable when it is not the Rufspiel trump suit, the hand holds
/// at least one plain card of it, and the hand lacks that suit's ace.
#[must_use]
pub fn callable_suits(cards: &[Card]) -> Vec<Suit> {
    let config = GameConfig::rufspiel(0, Suit::Acorns);
    Suit::ALL
        .into_iter()
        .filter(|&suit| suit != RUFSPIEL_TRUMP)
        .filter(|&suit| {
            let holds_plain = cards
                .iter()
                .any(|&c| card_group(c, &config) == CardGroup::Suit(suit));
            let holds_ace = cards.contains(&Card::new(suit, Value::Ace));
            holds_plain && !holds_ace
        })
        .collect()
}
