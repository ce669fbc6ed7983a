use schafkopf::{
    Bid, BiddingPhase, Card, Game, GameState, GameType, Seat, Suit, TableOptions,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(TableOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(TableOptions::default(), seed as u64);
    }

    pub fn human_seat(&self) -> Option<u8> {
        self.game.options.human_seat
    }

    pub fn deal(&self) -> Result<(), JsValue> {
        self.game.deal().map_err(js_err)
    }

    pub fn bid_pass(&self) -> Result<(), JsValue> {
        self.human_bid(Bid::Pass)
    }

    pub fn bid_rufspiel(&self, suit: &str) -> Result<(), JsValue> {
        let called = parse_suit(suit)?;
        self.human_bid(Bid::Rufspiel { called })
    }

    pub fn bid_solo(&self, suit: &str) -> Result<(), JsValue> {
        let trump = parse_suit(suit)?;
        self.human_bid(Bid::Solo { trump })
    }

    pub fn bid_wenz(&self) -> Result<(), JsValue> {
        self.human_bid(Bid::Wenz)
    }

    /// Plays the card with the given deck index from the human hand.
    pub fn play(&self, card_index: u8) -> Result<JsValue, JsValue> {
        let seat = self.require_human()?;
        let card = Card::from_index(card_index)
            .ok_or_else(|| JsValue::from_str("unknown card index"))?;
        let outcome = self.game.play(seat, card).map_err(js_err)?;
        to_js_value(&outcome)
    }

    /// Lets the CPU act for one seat. Returns `false` when a human action or
    /// a new deal is needed.
    pub fn step_cpu(&self) -> Result<bool, JsValue> {
        let Some(seat) = self.game.seat_to_act() else {
            return Ok(false);
        };
        if Some(seat) == self.game.options.human_seat {
            return Ok(false);
        }

        match self.game.state() {
            GameState::Bidding => {
                let bid = self.game.cpu_bid(seat).map_err(js_err)?;
                self.game.bid(seat, bid).map_err(js_err)?;
            }
            GameState::Playing => {
                let card = self.game.cpu_card(seat).map_err(js_err)?;
                self.game.play(seat, card).map_err(js_err)?;
            }
            GameState::Setup | GameState::Finished => return Ok(false),
        }
        Ok(true)
    }

    /// Runs CPU seats until the human must act or the round stops.
    pub fn run_cpu(&self) -> Result<u32, JsValue> {
        let mut steps = 0;
        while self.step_cpu()? {
            steps += 1;
        }
        Ok(steps)
    }

    pub fn next_round(&self) -> Result<(), JsValue> {
        self.game.next_round().map_err(js_err)
    }

    pub fn reset_round(&self) {
        self.game.reset_round();
    }

    pub fn legal_moves(&self) -> Result<Vec<u8>, JsValue> {
        let seat = self.require_human()?;
        let cards = self.game.legal_moves(seat).map_err(js_err)?;
        Ok(cards.into_iter().map(Card::index).collect())
    }

    pub fn last_result(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.game.last_result())
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let human = self.game.options.human_seat;
        let hand: Vec<JsCard> = human
            .and_then(|seat| self.game.hand(seat))
            .map(|hand| hand.cards().iter().copied().map(card_to_js).collect())
            .unwrap_or_default();
        let legal = if self.game.seat_to_act() == human && self.game.state() == GameState::Playing
        {
            self.legal_moves().unwrap_or_default()
        } else {
            Vec::new()
        };

        let bidding = self.game.bidding();
        let bids: Vec<Option<&'static str>> = (0..4)
            .map(|seat| bidding.bid_of(seat).map(bid_to_str))
            .collect();

        let config = self.game.config();
        let players: Vec<JsPlayer> = self
            .game
            .players()
            .into_iter()
            .map(|player| JsPlayer {
                seat: player.seat,
                name: player.name,
                is_human: player.is_human,
                tricks_won: player.tricks_won,
                points: player.points,
                rounds_won: player.stats.rounds_won,
                total_points: player.stats.total_points,
            })
            .collect();

        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            round: self.game.round_number(),
            vorhand: self.game.vorhand(),
            seat_to_act: self.game.seat_to_act(),
            bidding_active: bidding.phase() == BiddingPhase::Active,
            bids,
            game_type: config.map(|config| game_type_to_str(config.game_type)),
            trump: config.and_then(|config| config.trump_suit).map(suit_to_str),
            called_ace: config.and_then(|config| config.called_ace).map(suit_to_str),
            caller: config.map(|config| config.caller),
            partner: self.game.revealed_partner(),
            hand,
            legal_moves: legal,
            trick: self
                .game
                .current_trick()
                .plays()
                .iter()
                .map(|&(seat, card)| JsPlay {
                    seat,
                    card: card_to_js(card),
                })
                .collect(),
            tricks_played: self.game.trick_number(),
            players,
        };

        to_js_value(&snapshot)
    }
}

impl WasmGame {
    fn require_human(&self) -> Result<Seat, JsValue> {
        self.game
            .options
            .human_seat
            .ok_or_else(|| JsValue::from_str("table has no human seat"))
    }

    fn human_bid(&self, bid: Bid) -> Result<(), JsValue> {
        let seat = self.require_human()?;
        self.game.bid(seat, bid).map(|_| ()).map_err(js_err)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    round: u32,
    vorhand: Seat,
    seat_to_act: Option<Seat>,
    bidding_active: bool,
    bids: Vec<Option<&'static str>>,
    game_type: Option<&'static str>,
    trump: Option<&'static str>,
    called_ace: Option<&'static str>,
    caller: Option<Seat>,
    partner: Option<Seat>,
    hand: Vec<JsCard>,
    legal_moves: Vec<u8>,
    trick: Vec<JsPlay>,
    tricks_played: u8,
    players: Vec<JsPlayer>,
}

#[derive(Serialize)]
struct JsCard {
    index: u8,
    suit: &'static str,
    value: String,
    points: u8,
}

#[derive(Serialize)]
struct JsPlay {
    seat: Seat,
    card: JsCard,
}

#[derive(Serialize)]
struct JsPlayer {
    seat: Seat,
    name: String,
    is_human: bool,
    tricks_won: u8,
    points: u16,
    rounds_won: u32,
    total_points: u32,
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        index: card.index(),
        suit: suit_to_str(card.suit),
        value: card.value.to_string(),
        points: card.points(),
    }
}

fn parse_suit(name: &str) -> Result<Suit, JsValue> {
    Suit::ALL
        .into_iter()
        .find(|&suit| suit_to_str(suit).eq_ignore_ascii_case(name))
        .ok_or_else(|| JsValue::from_str("unknown suit"))
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Acorns => "Acorns",
        Suit::Leaves => "Leaves",
        Suit::Hearts => "Hearts",
        Suit::Bells => "Bells",
    }
}

fn bid_to_str(bid: Bid) -> &'static str {
    match bid {
        Bid::Pass => "Pass",
        Bid::Rufspiel { .. } => "Rufspiel",
        Bid::Solo { .. } => "Solo",
        Bid::Wenz => "Wenz",
    }
}

fn game_type_to_str(game_type: GameType) -> &'static str {
    match game_type {
        GameType::Rufspiel => "Rufspiel",
        GameType::Solo => "Solo",
        GameType::Wenz => "Wenz",
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Setup => "Setup",
        GameState::Bidding => "Bidding",
        GameState::Playing => "Playing",
        GameState::Finished => "Finished",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
