//! Baseline card choice for computer-controlled seats.
//!
//! The policy only looks at the legal moves and the current trick: win as
//! cheaply as possible, otherwise throw the weakest card. Partner awareness
//! and card counting are left to richer strategies built on the same
//! primitives.

use crate::card::Card;
use crate::error::PlayError;
use crate::rules::{CardGroup, CardRank, GameConfig, Seat, beats_in_trick, card_group, rank};
use crate::trick::{legal_moves, resolve_trick_winner};

/// Trumps needed before a CPU seat leads its highest trump.
const LEAD_TRUMP_THRESHOLD: usize = 3;

fn strength(card: Card, led: Option<CardGroup>, config: &GameConfig) -> u16 {
    match rank(card, config) {
        CardRank::Trump(order) => 100 + u16::from(order),
        CardRank::Plain(suit, r) if led == Some(CardGroup::Suit(suit)) => 50 + u16::from(r),
        CardRank::Plain(_, r) => u16::from(r),
    }
}

/// Chooses a card for a CPU seat holding `hand` on `trick`.
///
/// # Errors
///
/// Returns [`PlayError::NoPlayableCards`] for an empty hand.
pub fn choose_card(
    hand: &[Card],
    trick: &[(Seat, Card)],
    config: &GameConfig,
) -> Result<Card, PlayError> {
    let legal = legal_moves(hand, trick, config)?;

    let Some(&(_, led_card)) = trick.first() else {
        let trumps = legal
            .iter()
            .filter(|&&c| card_group(c, config) == CardGroup::Trump)
            .count();
        let lead = if trumps >= LEAD_TRUMP_THRESHOLD {
            legal.iter().max_by_key(|&&c| strength(c, None, config))
        } else {
            legal
                .iter()
                .filter(|&&c| card_group(c, config) != CardGroup::Trump)
                .max_by_key(|&&c| strength(c, None, config))
                .or_else(|| legal.iter().min_by_key(|&&c| strength(c, None, config)))
        };
        return lead.copied().ok_or(PlayError::NoPlayableCards);
    };

    let led = card_group(led_card, config);
    let best = resolve_trick_winner(trick, config)
        .and_then(|seat| trick.iter().find(|(s, _)| *s == seat))
        .map_or(led_card, |&(_, card)| card);

    let cheapest_winner = legal
        .iter()
        .filter(|&&c| beats_in_trick(c, best, led, config))
        .min_by_key(|&&c| strength(c, Some(led), config));

    cheapest_winner
        .or_else(|| {
            legal
                .iter()
                .min_by_key(|&&c| (c.points(), strength(c, Some(led), config)))
        })
        .copied()
        .ok_or(PlayError::NoPlayableCards)
}
