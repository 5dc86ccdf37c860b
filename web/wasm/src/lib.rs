use spiders::{
    Card, Difficulty, Game, GameEvent, GameOptions, GameState, InputHandler, InputOutcome,
    PointerEvent, Suit,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    input: InputHandler,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, difficulty: u8) -> Result<WasmGame, JsValue> {
        let difficulty = Difficulty::try_from(difficulty).map_err(js_err)?;
        let options = GameOptions::default().with_difficulty(difficulty);
        Ok(Self {
            game: Game::new(options, seed as u64),
            input: InputHandler::default(),
        })
    }

    /// Deals a new game, reading the difficulty selector again.
    pub fn new_game(&mut self, difficulty: u8) -> Result<(), JsValue> {
        let difficulty = Difficulty::try_from(difficulty).map_err(js_err)?;
        self.input.cancel_drag();
        self.game.new_game_with(difficulty);
        Ok(())
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        self.pointer(PointerEvent::down(x, y))
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        self.pointer(PointerEvent::moved(x, y))
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        self.pointer(PointerEvent::up(x, y))
    }

    /// Called when the flip animation of `pile` has finished.
    pub fn complete_flip(&mut self, pile: u32) -> Result<(), JsValue> {
        let ticket = self
            .game
            .pending_flip(pile as usize)
            .ok_or_else(|| JsValue::from_str("no flip in progress on this pile"))?;
        self.game.complete_flip(ticket).map_err(js_err)
    }

    pub fn deal_row(&mut self) -> Result<u32, JsValue> {
        self.input
            .deal_row(&mut self.game)
            .map(|dealt| dealt as u32)
            .map_err(js_err)
    }

    /// Returns the queued events for sound playback and clears the queue.
    pub fn drain_events(&mut self) -> Result<JsValue, JsValue> {
        let events: Vec<JsEvent> = self
            .game
            .drain_events()
            .into_iter()
            .map(JsEvent::from)
            .collect();
        to_js_value(&events)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let table = self.game.table();
        let piles = table
            .piles
            .iter()
            .enumerate()
            .map(|(index, pile)| JsPile {
                cards: pile.cards().iter().copied().map(card_to_js).collect(),
                flipping: self.game.is_locked(index),
            })
            .collect();

        let drag = self.input.drag().map(|drag| {
            let (x, y) = drag.card_origin();
            JsDrag {
                pile: drag.pile as u32,
                index: drag.index as u32,
                x,
                y,
            }
        });

        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            difficulty: self.game.options.difficulty.level(),
            piles,
            stock: table.stock_len() as u32,
            retired: table.retired.iter().copied().map(suit_to_str).collect(),
            drag,
        };

        to_js_value(&snapshot)
    }
}

impl WasmGame {
    fn pointer(&mut self, event: PointerEvent) -> Result<JsValue, JsValue> {
        let outcome = JsOutcome::from(self.input.handle(&mut self.game, event));
        to_js_value(&outcome)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    difficulty: u8,
    piles: Vec<JsPile>,
    stock: u32,
    retired: Vec<&'static str>,
    drag: Option<JsDrag>,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    symbol: char,
    red: bool,
    rank: u8,
    face_up: bool,
}

#[derive(Serialize)]
struct JsPile {
    cards: Vec<JsCard>,
    flipping: bool,
}

#[derive(Serialize)]
struct JsDrag {
    pile: u32,
    index: u32,
    x: f64,
    y: f64,
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum JsOutcome {
    Ignored,
    RowDealt { cards: u32 },
    FlipStarted { pile: u32, index: u32 },
    DragStarted { pile: u32, index: u32 },
    Dragged,
    Moved { moved: u32, runs_retired: u32 },
    MoveRejected,
}

impl From<InputOutcome> for JsOutcome {
    fn from(outcome: InputOutcome) -> Self {
        match outcome {
            InputOutcome::Ignored => Self::Ignored,
            InputOutcome::RowDealt(cards) => Self::RowDealt {
                cards: cards as u32,
            },
            InputOutcome::FlipStarted(ticket) => Self::FlipStarted {
                pile: ticket.pile as u32,
                index: ticket.index as u32,
            },
            InputOutcome::DragStarted { pile, index } => Self::DragStarted {
                pile: pile as u32,
                index: index as u32,
            },
            InputOutcome::Dragged => Self::Dragged,
            InputOutcome::Moved(outcome) => Self::Moved {
                moved: outcome.moved as u32,
                runs_retired: outcome.runs_retired as u32,
            },
            InputOutcome::MoveRejected => Self::MoveRejected,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum JsEvent {
    GameDealt { dealt: u32, stock: u32 },
    CardFlipped { pile: u32 },
    RowDealt { cards: u32 },
    CardsMoved { from: u32, to: u32, count: u32 },
    RunCompleted { pile: u32, suit: &'static str },
    GameWon,
}

impl From<GameEvent> for JsEvent {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::GameDealt { dealt, stock } => Self::GameDealt {
                dealt: dealt as u32,
                stock: stock as u32,
            },
            GameEvent::CardFlipped { pile } => Self::CardFlipped { pile: pile as u32 },
            GameEvent::RowDealt { cards } => Self::RowDealt {
                cards: cards as u32,
            },
            GameEvent::CardsMoved { from, to, count } => Self::CardsMoved {
                from: from as u32,
                to: to as u32,
                count: count as u32,
            },
            GameEvent::RunCompleted { pile, suit } => Self::RunCompleted {
                pile: pile as u32,
                suit: suit_to_str(suit),
            },
            GameEvent::GameWon => Self::GameWon,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        symbol: card.suit.symbol(),
        red: card.suit.is_red(),
        rank: card.rank,
        face_up: card.face_up,
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "Spades",
        Suit::Hearts => "Hearts",
        Suit::Clubs => "Clubs",
        Suit::Diamonds => "Diamonds",
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Dealing => "Dealing",
        GameState::Playing => "Playing",
        GameState::Won => "Won",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
