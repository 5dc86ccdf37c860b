//! Piles, stock, and the table that holds them.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, RANKS_PER_SUIT, RUN_LENGTH, Suit};

/// Number of piles on the table.
pub const PILE_COUNT: usize = 10;

/// One tableau pile. Cards are added and removed at the tail only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Creates a new empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a pile holding `cards`, bottom first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the pile, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the top card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Pushes a card onto the top of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Turns the top card face-up. Returns `true` if it was face-down.
    pub fn turn_top_up(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if !card.face_up => {
                card.face_up = true;
                true
            }
            _ => false,
        }
    }

    /// Returns whether a run whose first card is `first` may be dropped here.
    ///
    /// An empty pile accepts anything. Otherwise the top card must be one
    /// rank higher and of the same suit.
    #[must_use]
    pub fn accepts(&self, first: &Card) -> bool {
        self.top().is_none_or(|top| first.follows(top))
    }

    /// Removes and returns the cards from `start` to the top.
    ///
    /// Returns `None` if `start` is past the last card.
    pub fn take_from(&mut self, start: usize) -> Option<Vec<Card>> {
        if start < self.cards.len() {
            Some(self.cards.split_off(start))
        } else {
            None
        }
    }

    /// Appends a run of cards on top of the pile.
    pub fn extend(&mut self, run: Vec<Card>) {
        self.cards.extend(run);
    }

    /// Returns the suit of the completed run sitting on top of the pile.
    ///
    /// A completed run is the last 13 cards reading King down to Ace, all of
    /// one suit.
    #[must_use]
    pub fn completed_run(&self) -> Option<Suit> {
        let start = self.cards.len().checked_sub(RUN_LENGTH)?;
        let run = &self.cards[start..];
        let suit = run[0].suit;
        let ordered = run
            .iter()
            .zip((1..=RANKS_PER_SUIT).rev())
            .all(|(card, rank)| card.rank == rank && card.suit == suit);
        ordered.then_some(suit)
    }

    /// Removes the completed run on top of the pile, if any.
    pub fn retire_run(&mut self) -> Option<Suit> {
        let suit = self.completed_run()?;
        self.cards.truncate(self.cards.len() - RUN_LENGTH);
        Some(suit)
    }
}

/// The full playing surface: ten piles, the stock, and retired runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// The tableau piles, indexed 0 through 9.
    pub piles: [Pile; PILE_COUNT],
    /// Cards reserved for later deals. The last card is dealt first.
    pub stock: Vec<Card>,
    /// Suits of the runs retired so far, in retirement order.
    pub retired: Vec<Suit>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            piles: core::array::from_fn(|_| Pile::new()),
            stock: Vec::new(),
            retired: Vec::new(),
        }
    }

    /// Returns the pile at `index`.
    #[must_use]
    pub fn pile(&self, index: usize) -> Option<&Pile> {
        self.piles.get(index)
    }

    /// Returns the number of cards still in the stock.
    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// Returns the number of cards on the piles and in the stock.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.piles.iter().map(Pile::len).sum::<usize>() + self.stock.len()
    }

    /// Returns the number of runs retired so far.
    #[must_use]
    pub fn retired_runs(&self) -> usize {
        self.retired.len()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(suit: Suit) -> Vec<Card> {
        (1..=13).rev().map(|rank| Card::new(suit, rank).turned_up()).collect()
    }

    #[test]
    fn empty_pile_accepts_anything() {
        let pile = Pile::new();
        assert!(pile.accepts(&Card::new(Suit::Hearts, 7)));
    }

    #[test]
    fn accepts_one_lower_same_suit_only() {
        let pile = Pile::from_cards(alloc::vec![Card::new(Suit::Spades, 5).turned_up()]);
        assert!(pile.accepts(&Card::new(Suit::Spades, 4)));
        assert!(!pile.accepts(&Card::new(Suit::Hearts, 4)));
        assert!(!pile.accepts(&Card::new(Suit::Spades, 3)));
        assert!(!pile.accepts(&Card::new(Suit::Spades, 6)));
    }

    #[test]
    fn completed_run_on_top_of_other_cards() {
        let mut cards = alloc::vec![Card::new(Suit::Clubs, 9)];
        cards.extend(run(Suit::Hearts));
        let mut pile = Pile::from_cards(cards);

        assert_eq!(pile.completed_run(), Some(Suit::Hearts));
        assert_eq!(pile.retire_run(), Some(Suit::Hearts));
        assert_eq!(pile.len(), 1);
        assert_eq!(pile.retire_run(), None);
    }

    #[test]
    fn mixed_suit_run_is_not_complete() {
        let mut cards = run(Suit::Spades);
        cards[6].suit = Suit::Hearts;
        let pile = Pile::from_cards(cards);
        assert_eq!(pile.completed_run(), None);
    }

    #[test]
    fn short_pile_has_no_run() {
        let mut cards = run(Suit::Spades);
        cards.remove(0);
        assert_eq!(Pile::from_cards(cards).completed_run(), None);
    }

    #[test]
    fn take_from_past_end_is_none() {
        let mut pile = Pile::from_cards(run(Suit::Spades));
        assert!(pile.take_from(13).is_none());
        assert_eq!(pile.take_from(10).map(|cards| cards.len()), Some(3));
        assert_eq!(pile.len(), 10);
    }

    #[test]
    fn turn_top_up_reports_change() {
        let mut pile = Pile::from_cards(alloc::vec![Card::new(Suit::Spades, 2)]);
        assert!(pile.turn_top_up());
        assert!(!pile.turn_top_up());
        assert!(!Pile::new().turn_top_up());
    }
}
