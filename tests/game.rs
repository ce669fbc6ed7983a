//! Game integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use schafkopf::{
    Bid, BidError, BidOutcome, BiddingResult, Card, DealError, Deck, Game, GameConfig, GameState,
    GameType, PlayError, RoundError, Suit, TableOptions, Value,
};

const fn card(suit: Suit, value: Value) -> Card {
    Card::new(suit, value)
}

fn deck_from_hands(hands: [[Card; 8]; 4]) -> Deck {
    Deck::from_cards(hands.concat()).unwrap()
}

/// Seat 0 holds every Queen and Jack; nobody else holds a high trump.
fn solo_deck() -> Deck {
    use Suit::{Acorns, Bells, Hearts, Leaves};
    use Value::{Ace, Eight, Jack, King, Nine, Queen, Seven, Ten};
    deck_from_hands([
        [
            card(Acorns, Queen),
            card(Leaves, Queen),
            card(Hearts, Queen),
            card(Bells, Queen),
            card(Acorns, Jack),
            card(Leaves, Jack),
            card(Hearts, Jack),
            card(Bells, Jack),
        ],
        [
            card(Acorns, Ace),
            card(Acorns, Ten),
            card(Acorns, King),
            card(Acorns, Nine),
            card(Acorns, Eight),
            card(Acorns, Seven),
            card(Leaves, Ace),
            card(Leaves, Ten),
        ],
        [
            card(Leaves, King),
            card(Leaves, Nine),
            card(Leaves, Eight),
            card(Leaves, Seven),
            card(Hearts, Ace),
            card(Hearts, Ten),
            card(Hearts, King),
            card(Hearts, Nine),
        ],
        [
            card(Hearts, Eight),
            card(Hearts, Seven),
            card(Bells, Ace),
            card(Bells, Ten),
            card(Bells, King),
            card(Bells, Nine),
            card(Bells, Eight),
            card(Bells, Seven),
        ],
    ])
}

/// Seat 0 can call the Acorns ace, which seat 1 holds.
fn rufspiel_deck() -> Deck {
    use Suit::{Acorns, Bells, Hearts, Leaves};
    use Value::{Ace, Eight, Jack, King, Nine, Queen, Seven, Ten};
    deck_from_hands([
        [
            card(Acorns, Queen),
            card(Leaves, Queen),
            card(Hearts, Queen),
            card(Acorns, Jack),
            card(Leaves, Jack),
            card(Hearts, Ace),
            card(Hearts, Ten),
            card(Acorns, Seven),
        ],
        [
            card(Acorns, Ace),
            card(Acorns, Ten),
            card(Acorns, King),
            card(Acorns, Nine),
            card(Acorns, Eight),
            card(Leaves, Ace),
            card(Leaves, Ten),
            card(Leaves, King),
        ],
        [
            card(Bells, Queen),
            card(Hearts, Jack),
            card(Bells, Jack),
            card(Hearts, King),
            card(Hearts, Nine),
            card(Leaves, Nine),
            card(Leaves, Eight),
            card(Leaves, Seven),
        ],
        [
            card(Hearts, Eight),
            card(Hearts, Seven),
            card(Bells, Ace),
            card(Bells, Ten),
            card(Bells, King),
            card(Bells, Nine),
            card(Bells, Eight),
            card(Bells, Seven),
        ],
    ])
}

fn pass_until_done(game: &Game) {
    while let Some(seat) = game.current_bidder() {
        game.bid(seat, Bid::Pass).unwrap();
    }
}

/// Plays the first legal card for every seat until the round ends.
fn play_out(game: &Game) {
    while let Some(seat) = game.current_player() {
        let card = game.legal_moves(seat).unwrap()[0];
        game.play(seat, card).unwrap();
    }
}

#[test]
fn deck_must_hold_every_card_once() {
    let mut cards = Deck::new().cards().to_vec();
    cards.pop();
    assert_eq!(Deck::from_cards(cards.clone()).unwrap_err(), DealError::InvalidDeck);

    cards.push(cards[0]);
    assert_eq!(Deck::from_cards(cards).unwrap_err(), DealError::InvalidDeck);
}

#[test]
fn deal_errors() {
    let game = Game::new(TableOptions::default(), 1);
    game.deal().unwrap();
    assert_eq!(game.state(), GameState::Bidding);
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.deal_deck(solo_deck()).unwrap_err(), DealError::InvalidState);
}

#[test]
fn random_deal_gives_eight_cards_each() {
    let game = Game::new(TableOptions::default(), 5);
    game.deal().unwrap();

    let mut all: Vec<Card> = (0..4)
        .flat_map(|seat| game.hand(seat).unwrap().cards().to_vec())
        .collect();
    for seat in 0..4 {
        assert_eq!(game.hand(seat).unwrap().len(), 8);
    }
    all.sort_by_key(|card| card.index());
    all.dedup();
    assert_eq!(all.len(), 32);
}

#[test]
fn same_seed_same_deal() {
    let a = Game::new(TableOptions::default(), 99);
    let b = Game::new(TableOptions::default(), 99);
    a.deal().unwrap();
    b.deal().unwrap();
    for seat in 0..4 {
        assert_eq!(a.hand(seat), b.hand(seat));
    }
}

#[test]
fn bid_errors() {
    let game = Game::new(TableOptions::default(), 1);
    assert_eq!(game.bid(0, Bid::Pass).unwrap_err(), BidError::NotActive);

    game.deal_deck(rufspiel_deck()).unwrap();
    assert_eq!(game.bid(4, Bid::Pass).unwrap_err(), BidError::SeatNotFound);
    assert_eq!(game.bid(1, Bid::Pass).unwrap_err(), BidError::OutOfTurn);

    // Seat 0 holds no Bells and cannot call Hearts.
    assert_eq!(
        game.bid(0, Bid::Rufspiel { called: Suit::Bells }).unwrap_err(),
        BidError::UncallableAce
    );
    assert_eq!(
        game.bid(0, Bid::Rufspiel { called: Suit::Hearts }).unwrap_err(),
        BidError::UncallableAce
    );
    assert_eq!(game.current_bidder(), Some(0));

    game.bid(0, Bid::Pass).unwrap();
    // Seat 1 holds the Acorns ace itself.
    assert_eq!(
        game.bid(1, Bid::Rufspiel { called: Suit::Acorns }).unwrap_err(),
        BidError::UncallableAce
    );
}

#[test]
fn four_passes_deal_again_with_same_vorhand() {
    let game = Game::new(TableOptions::default().with_starting_vorhand(2), 3);
    game.deal().unwrap();
    assert_eq!(game.current_bidder(), Some(2));

    pass_until_done(&game);
    assert_eq!(game.state(), GameState::Setup);
    assert_eq!(game.redeals(), 1);
    assert_eq!(game.vorhand(), 2);
    assert_eq!(game.round_number(), 1);
    assert!(game.hand(0).unwrap().is_empty());
    assert_eq!(game.bidding().result(), Some(BiddingResult::NewDeal));

    game.deal().unwrap();
    assert_eq!(game.current_bidder(), Some(2));
    assert_eq!(game.redeals(), 1);
}

#[test]
fn solo_ends_bidding_and_vorhand_leads() {
    let game = Game::new(TableOptions::default().with_starting_vorhand(3), 1);
    game.deal_deck(solo_deck()).unwrap();

    assert_eq!(
        game.bid(3, Bid::Pass).unwrap(),
        BidOutcome::Continue { next_bidder: 0 }
    );
    let outcome = game.bid(0, Bid::Solo { trump: Suit::Hearts }).unwrap();
    assert_eq!(
        outcome,
        BidOutcome::Finished(BiddingResult::Game(GameConfig::solo(0, Suit::Hearts)))
    );
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.current_player(), Some(3));
    assert_eq!(game.bid(1, Bid::Pass).unwrap_err(), BidError::NotActive);
}

#[test]
fn solo_round_is_schwarz() {
    let game = Game::new(TableOptions::default(), 1);
    game.deal_deck(solo_deck()).unwrap();
    game.bid(0, Bid::Solo { trump: Suit::Hearts }).unwrap();

    play_out(&game);

    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.trick_number(), 8);
    assert_eq!(game.current_player(), None);
    assert!(game.completed_tricks().iter().all(|trick| trick.winner == 0));

    let result = game.last_result().unwrap();
    assert_eq!(result.config.game_type, GameType::Solo);
    assert_eq!(result.declarers, [true, false, false, false]);
    assert_eq!(result.declarer_points, 120);
    assert_eq!(result.defender_points, 0);
    assert_eq!(result.declarer_tricks, 8);
    assert!(result.declarers_won);
    assert!(result.schneider);
    assert!(result.schwarz);

    let players = game.players();
    assert_eq!(players[0].tricks_won, 8);
    assert_eq!(players[0].points, 120);
    assert_eq!(players[0].stats.games_called, 1);
    assert_eq!(players[0].stats.rounds_won, 1);
    assert_eq!(players[0].stats.total_points, 120);
    assert_eq!(players[1].stats.rounds_played, 1);
    assert_eq!(players[1].stats.rounds_won, 0);
}

#[test]
fn rufspiel_reveals_partner_with_called_ace() {
    let game = Game::new(TableOptions::default(), 1);
    game.deal_deck(rufspiel_deck()).unwrap();

    game.bid(0, Bid::Rufspiel { called: Suit::Acorns }).unwrap();
    game.bid(1, Bid::Pass).unwrap();
    game.bid(2, Bid::Pass).unwrap();
    let outcome = game.bid(3, Bid::Pass).unwrap();
    assert_eq!(
        outcome,
        BidOutcome::Finished(BiddingResult::Game(GameConfig::rufspiel(0, Suit::Acorns)))
    );

    let lead = game.play(0, card(Suit::Acorns, Value::Seven)).unwrap();
    assert!(!lead.revealed_partner);
    assert_eq!(lead.next_player, Some(1));
    assert!(!game.partner_revealed());

    let ace = game.play(1, card(Suit::Acorns, Value::Ace)).unwrap();
    assert!(ace.revealed_partner);
    assert_eq!(game.revealed_partner(), Some(1));
    assert_eq!(game.currently_winning(), Some(1));

    game.play(2, card(Suit::Leaves, Value::Seven)).unwrap();
    let last = game.play(3, card(Suit::Bells, Value::Seven)).unwrap();
    let summary = last.trick_completed.unwrap();
    assert_eq!(summary.trick_number, 1);
    assert_eq!(summary.winner, 1);
    assert_eq!(summary.points, 11);
    assert_eq!(last.next_player, Some(1));
    assert!(game.current_trick().is_empty());

    play_out(&game);

    let result = game.last_result().unwrap();
    assert_eq!(result.partner, Some(1));
    assert_eq!(result.declarers, [true, true, false, false]);
    assert_eq!(result.declarer_points + result.defender_points, 120);
    assert_eq!(result.declarer_tricks + result.defender_tricks, 8);
    assert_eq!(result.seat_points.iter().sum::<u16>(), 120);
    assert_eq!(result.is_winner(0), result.is_winner(1));
    assert_ne!(result.is_winner(0), result.is_winner(2));
}

#[test]
fn play_errors() {
    let game = Game::new(TableOptions::default(), 1);
    assert_eq!(
        game.play(0, card(Suit::Acorns, Value::Seven)).unwrap_err(),
        PlayError::InvalidState
    );

    game.deal_deck(rufspiel_deck()).unwrap();
    assert_eq!(
        game.play(0, card(Suit::Acorns, Value::Seven)).unwrap_err(),
        PlayError::InvalidState
    );
    game.bid(0, Bid::Rufspiel { called: Suit::Acorns }).unwrap();
    pass_until_done(&game);

    assert_eq!(
        game.play(9, card(Suit::Acorns, Value::Seven)).unwrap_err(),
        PlayError::SeatNotFound
    );
    assert_eq!(
        game.play(1, card(Suit::Acorns, Value::Ace)).unwrap_err(),
        PlayError::OutOfTurn
    );
    assert_eq!(
        game.play(0, card(Suit::Bells, Value::Ace)).unwrap_err(),
        PlayError::CardNotInHand
    );

    game.play(0, card(Suit::Acorns, Value::Seven)).unwrap();
    // Seat 1 holds Acorns and must follow.
    assert_eq!(
        game.play(1, card(Suit::Leaves, Value::Ace)).unwrap_err(),
        PlayError::IllegalMove
    );
    assert_eq!(game.hand(1).unwrap().len(), 8);
    assert_eq!(game.current_trick().plays().len(), 1);
}

#[test]
fn trump_lead_must_be_followed_with_trump() {
    let game = Game::new(TableOptions::default(), 1);
    game.deal_deck(rufspiel_deck()).unwrap();
    game.bid(0, Bid::Rufspiel { called: Suit::Acorns }).unwrap();
    pass_until_done(&game);

    game.play(0, card(Suit::Acorns, Value::Queen)).unwrap();
    // Seat 1 holds no trump and may play anything.
    assert_eq!(game.legal_moves(1).unwrap().len(), 8);
    game.play(1, card(Suit::Leaves, Value::King)).unwrap();

    let legal = game.legal_moves(2).unwrap();
    assert_eq!(legal.len(), 5);
    assert!(!legal.contains(&card(Suit::Leaves, Value::Nine)));
    assert_eq!(
        game.play(2, card(Suit::Leaves, Value::Nine)).unwrap_err(),
        PlayError::IllegalMove
    );
    game.play(2, card(Suit::Hearts, Value::Nine)).unwrap();
}

#[test]
fn next_round_rotates_vorhand() {
    let game = Game::new(TableOptions::default(), 1);
    assert_eq!(game.next_round().unwrap_err(), RoundError::InvalidState);

    game.deal_deck(solo_deck()).unwrap();
    game.bid(0, Bid::Wenz).unwrap();
    assert_eq!(game.next_round().unwrap_err(), RoundError::InvalidState);
    play_out(&game);

    game.next_round().unwrap();
    assert_eq!(game.state(), GameState::Setup);
    assert_eq!(game.round_number(), 2);
    assert_eq!(game.vorhand(), 1);
    assert_eq!(game.config(), None);
    assert_eq!(game.players()[0].tricks_won, 0);
    assert_eq!(game.players()[0].stats.rounds_played, 1);

    game.deal().unwrap();
    assert_eq!(game.current_bidder(), Some(1));
}

#[test]
fn reset_round_abandons_deal() {
    let game = Game::new(TableOptions::default(), 1);
    game.deal_deck(solo_deck()).unwrap();
    game.bid(0, Bid::Solo { trump: Suit::Bells }).unwrap();
    game.play(0, card(Suit::Acorns, Value::Queen)).unwrap();

    game.reset_round();
    assert_eq!(game.state(), GameState::Setup);
    assert_eq!(game.vorhand(), 0);
    assert_eq!(game.round_number(), 1);
    assert_eq!(game.config(), None);
    assert!(game.current_trick().is_empty());
    assert!(game.hand(0).unwrap().is_empty());
    assert_eq!(game.current_bidder(), None);
    assert_eq!(game.seat_to_act(), None);

    game.deal_deck(solo_deck()).unwrap();
    assert_eq!(game.seat_to_act(), Some(0));
}

#[test]
fn observer_sees_every_card() {
    let game = Game::new(TableOptions::default(), 1);
    let cards = Arc::new(AtomicUsize::new(0));
    let tricks = Arc::new(AtomicUsize::new(0));
    {
        let cards = Arc::clone(&cards);
        let tricks = Arc::clone(&tricks);
        game.set_observer(Box::new(move |event| {
            cards.fetch_add(1, Ordering::SeqCst);
            if event.trick_completed.is_some() {
                tricks.fetch_add(1, Ordering::SeqCst);
            }
        }));
    }

    game.deal_deck(solo_deck()).unwrap();
    game.bid(0, Bid::Solo { trump: Suit::Hearts }).unwrap();
    play_out(&game);

    assert_eq!(cards.load(Ordering::SeqCst), 32);
    assert_eq!(tricks.load(Ordering::SeqCst), 8);

    game.clear_observer();
    game.next_round().unwrap();
    game.deal_deck(solo_deck()).unwrap();
    game.bid(1, Bid::Wenz).unwrap();
    game.play(1, game.cpu_card(1).unwrap()).unwrap();
    assert_eq!(cards.load(Ordering::SeqCst), 32);
}

#[test]
fn cpu_table_finishes_rounds() {
    let game = Game::new(TableOptions::default().with_human_seat(None), 2024);
    let mut finished = 0;
    for _ in 0..20 {
        game.deal().unwrap();
        while let Some(seat) = game.current_bidder() {
            let bid = game.cpu_bid(seat).unwrap();
            game.bid(seat, bid).unwrap();
        }
        if game.state() == GameState::Setup {
            continue;
        }
        while let Some(seat) = game.current_player() {
            let card = game.cpu_card(seat).unwrap();
            game.play(seat, card).unwrap();
        }
        let result = game.last_result().unwrap();
        assert_eq!(result.declarer_points + result.defender_points, 120);
        finished += 1;
        game.next_round().unwrap();
    }

    let played: u32 = game.players()[0].stats.rounds_played;
    assert_eq!(played, finished);
}

#[test]
fn options_builder_sets_fields() {
    let options = TableOptions::default()
        .with_human_seat(Some(3))
        .with_starting_vorhand(2)
        .with_cpu_min_trumps(4)
        .with_cpu_min_high_trumps(1)
        .with_player_name(1, "Sepp");

    assert_eq!(options.human_seat, Some(3));
    assert_eq!(options.starting_vorhand, 2);
    assert_eq!(options.cpu_min_trumps, 4);
    assert_eq!(options.cpu_min_high_trumps, 1);
    assert_eq!(options.player_names[1], "Sepp");

    let game = Game::new(options, 0);
    let players = game.players();
    assert!(players[3].is_human);
    assert!(!players[0].is_human);
    assert_eq!(players[1].name, "Sepp");
    assert_eq!(game.vorhand(), 2);
}

#[test]
fn observer_may_clear_itself() {
    let game = Arc::new(Game::new(TableOptions::default(), 1));
    let calls = Arc::new(AtomicUsize::new(0));
    {
        let handle = Arc::downgrade(&game);
        let calls = Arc::clone(&calls);
        game.set_observer(Box::new(move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            if let Some(game) = handle.upgrade() {
                game.clear_observer();
            }
        }));
    }

    game.deal_deck(solo_deck()).unwrap();
    game.bid(0, Bid::Solo { trump: Suit::Hearts }).unwrap();
    game.play(0, card(Suit::Acorns, Value::Queen)).unwrap();
    game.play(1, card(Suit::Acorns, Value::Ace)).unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn observer_may_replace_itself() {
    let game = Arc::new(Game::new(TableOptions::default(), 1));
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    {
        let handle = Arc::downgrade(&game);
        let first = Arc::clone(&first);
        let second = Arc::clone(&second);
        game.set_observer(Box::new(move |_| {
            first.fetch_add(1, Ordering::SeqCst);
            let second = Arc::clone(&second);
            if let Some(game) = handle.upgrade() {
                game.set_observer(Box::new(move |_| {
                    second.fetch_add(1, Ordering::SeqCst);
                }));
            }
        }));
    }

    game.deal_deck(solo_deck()).unwrap();
    game.bid(0, Bid::Solo { trump: Suit::Hearts }).unwrap();
    play_out(&game);

    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 31);
}
