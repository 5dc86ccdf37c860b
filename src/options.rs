//! Game configuration options.

use crate::card::{RANKS_PER_SUIT, Suit};
use crate::error::DifficultyError;

/// How many suits the deck is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Spades only.
    #[default]
    OneSuit,
    /// Spades and hearts.
    TwoSuits,
    /// All four suits.
    FourSuits,
}

impl Difficulty {
    /// Returns the suits used by this difficulty.
    ///
    /// Rank cycle `d` of the deck uses `suits()[d % suits().len()]`.
    #[must_use]
    pub fn suits(self) -> &'static [Suit] {
        match self {
            Self::OneSuit => &[Suit::Spades],
            Self::TwoSuits => &[Suit::Spades, Suit::Hearts],
            Self::FourSuits => &Suit::ALL,
        }
    }

    /// Returns the selector level (1, 2 or 3) of this difficulty.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::OneSuit => 1,
            Self::TwoSuits => 2,
            Self::FourSuits => 3,
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = DifficultyError;

    /// Converts a selector level: 1 = one suit, 2 = two suits, 3 = four suits.
    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Self::OneSuit),
            2 => Ok(Self::TwoSuits),
            3 => Ok(Self::FourSuits),
            other => Err(DifficultyError::Unknown(other)),
        }
    }
}

/// Configuration options for a spider game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use spiders::{Difficulty, GameOptions};
///
/// let options = GameOptions::default()
///     .with_difficulty(Difficulty::TwoSuits)
///     .with_decks(8)
///     .with_initial_deal(54);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Suit set of the deck.
    pub difficulty: Difficulty,
    /// Number of Ace-to-King rank cycles in the deck.
    pub decks: u8,
    /// Number of cards dealt onto the piles at the start of a game.
    /// Clamped to the deck size.
    pub initial_deal: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::OneSuit,
            decks: 8,
            initial_deal: 54,
        }
    }
}

impl GameOptions {
    /// Sets the difficulty.
    ///
    /// # Example
    ///
    /// ```
    /// use spiders::{Difficulty, GameOptions};
    ///
    /// let options = GameOptions::default().with_difficulty(Difficulty::FourSuits);
    /// assert_eq!(options.difficulty, Difficulty::FourSuits);
    /// ```
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the number of rank cycles in the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use spiders::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(4);
    /// assert_eq!(options.decks, 4);
    /// assert_eq!(options.deck_size(), 52);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of cards in the initial deal.
    ///
    /// # Example
    ///
    /// ```
    /// use spiders::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_deal(44);
    /// assert_eq!(options.initial_deal, 44);
    /// ```
    #[must_use]
    pub const fn with_initial_deal(mut self, cards: usize) -> Self {
        self.initial_deal = cards;
        self
    }

    /// Returns the total number of cards in the deck.
    #[must_use]
    pub const fn deck_size(&self) -> usize {
        self.decks as usize * RANKS_PER_SUIT as usize
    }

    /// Returns the number of completed runs the deck can produce.
    #[must_use]
    pub const fn total_runs(&self) -> usize {
        self.decks as usize
    }
}
