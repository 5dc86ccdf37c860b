use alloc::vec::Vec;

use log::debug;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, RANKS_PER_SUIT};
use crate::error::DealError;
use crate::event::GameEvent;
use crate::options::{Difficulty, GameOptions};
use crate::table::{PILE_COUNT, Table};

use super::{Game, GameState};

impl Game {
    /// Creates and shuffles a deck for the configured difficulty.
    ///
    /// Rank cycle `d` takes its suit from the difficulty's suit set,
    /// round-robin. All cards start face-down.
    fn create_deck(options: &GameOptions, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let suits = options.difficulty.suits();
        let mut cards = Vec::with_capacity(options.deck_size());

        for copy in 0..options.decks as usize {
            let suit = suits[copy % suits.len()];
            for rank in 1..=RANKS_PER_SUIT {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Replaces the table with a freshly dealt one.
    pub(super) fn deal_table(&mut self) {
        self.state = GameState::Dealing;
        self.generation = self.generation.wrapping_add(1);
        self.pending_flips.clear();
        self.events.clear();

        let mut deck = Self::create_deck(&self.options, &mut self.rng);
        self.runs_in_deal = self.options.total_runs();
        let mut table = Table::new();

        let initial = self.options.initial_deal.min(deck.len());
        for i in 0..initial {
            if let Some(card) = deck.pop() {
                table.piles[i % PILE_COUNT].push(card);
            }
        }
        for pile in &mut table.piles {
            pile.turn_top_up();
        }

        // The stock is filled by popping, so the deck's order is reversed.
        while let Some(card) = deck.pop() {
            table.stock.push(card);
        }

        debug!(
            "dealt {initial} cards, {} in stock ({:?})",
            table.stock.len(),
            self.options.difficulty
        );
        self.events.push(GameEvent::GameDealt {
            dealt: initial,
            stock: table.stock.len(),
        });
        self.table = table;
        self.state = GameState::Playing;
    }

    /// Starts a new game with the current options.
    ///
    /// The random number generator carries over, so consecutive games from
    /// the same `Game` are dealt differently. Pending flips are dropped and
    /// their tickets become stale.
    pub fn new_game(&mut self) {
        self.deal_table();
    }

    /// Starts a new game with a different difficulty.
    pub fn new_game_with(&mut self, difficulty: Difficulty) {
        self.options.difficulty = difficulty;
        self.deal_table();
    }

    /// Deals one card from the stock onto each pile, in pile order.
    ///
    /// When the stock holds fewer cards than there are piles, only the first
    /// piles receive a card. Afterwards the top card of every pile is turned
    /// face-up and completed runs are retired.
    ///
    /// Returns the number of cards dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not being played, the stock is empty,
    /// or a flip is in progress.
    pub fn deal_row(&mut self) -> Result<usize, DealError> {
        if self.state != GameState::Playing {
            return Err(DealError::InvalidState);
        }
        if self.table.stock.is_empty() {
            return Err(DealError::StockEmpty);
        }
        if !self.pending_flips.is_empty() {
            return Err(DealError::FlipPending);
        }

        let mut dealt = 0;
        for pile in &mut self.table.piles {
            let Some(mut card) = self.table.stock.pop() else {
                break;
            };
            card.face_up = false;
            pile.push(card);
            dealt += 1;
        }
        for pile in &mut self.table.piles {
            pile.turn_top_up();
        }

        debug!(
            "dealt a row of {dealt}, {} left in stock",
            self.table.stock.len()
        );
        self.events.push(GameEvent::RowDealt { cards: dealt });
        self.check_completed_runs();

        Ok(dealt)
    }
}
