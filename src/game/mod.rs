//! Game engine and state management.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::event::GameEvent;
use crate::options::GameOptions;
use crate::table::Table;

mod actions;
mod dealer;
mod runs;
pub mod state;

pub use state::{FlipTicket, GameState, MoveOutcome};

/// A spider solitaire engine that owns the table and applies player actions.
///
/// The game owns the piles, the stock, and the random number generator used
/// for shuffling. Use [`GameOptions`] to configure the difficulty and deck.
/// All mutation goes through `&mut self`; hosts read the table through
/// [`Game::table`] to render it.
pub struct Game {
    /// Game options. Read only when a new game is dealt; edits take effect
    /// with the next game.
    pub options: GameOptions,
    /// Piles, stock and retired runs.
    table: Table,
    /// Current game state.
    state: GameState,
    /// Runs the dealt deck holds; retiring this many wins the game.
    runs_in_deal: usize,
    /// Incremented on every new game; invalidates old flip tickets.
    generation: u32,
    /// Flips that have started but not completed (`pile` -> ticket).
    pending_flips: HashMap<usize, FlipTicket>,
    /// Events not yet drained by the host.
    events: Vec<GameEvent>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed and deals the first table.
    ///
    /// # Example
    ///
    /// ```
    /// use spiders::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Playing);
    /// assert_eq!(game.table().stock_len(), 50);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut game = Self {
            options,
            table: Table::new(),
            state: GameState::Dealing,
            runs_in_deal: 0,
            generation: 0,
            pending_flips: HashMap::new(),
            events: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        game.deal_table();
        game
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of runs that must be retired to win the current
    /// game.
    pub const fn runs_to_win(&self) -> usize {
        self.runs_in_deal
    }

    /// Returns whether the game has been won.
    pub fn is_won(&self) -> bool {
        self.state == GameState::Won
    }

    /// Returns the table for rendering.
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the table mutably.
    ///
    /// This bypasses every rule and is meant for staging positions (tests,
    /// puzzles). Pending flips are not adjusted.
    pub const fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    /// Returns the pending flip on `pile`, if any.
    pub fn pending_flip(&self, pile: usize) -> Option<FlipTicket> {
        self.pending_flips.get(&pile).copied()
    }

    /// Returns whether `pile` is locked by a pending flip.
    pub fn is_locked(&self, pile: usize) -> bool {
        self.pending_flips.contains_key(&pile)
    }

    /// Returns the events queued since the last drain.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Takes all queued events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }
}
