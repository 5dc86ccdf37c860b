//! Card types and deck utilities.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All four suits, in the order difficulties add them.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Returns the printed symbol of the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
        }
    }

    /// Returns whether the suit is printed in red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// Whether the card is showing its face.
    pub face_up: bool,
}

impl Card {
    /// Creates a new face-down card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but can never be part of a completed run.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Returns the same card turned face-up.
    #[must_use]
    pub const fn turned_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    /// Returns whether `self` can sit directly on `below` in a pile:
    /// one rank lower, same suit.
    #[must_use]
    pub fn follows(&self, below: &Self) -> bool {
        below.suit == self.suit && self.rank.checked_add(1) == Some(below.rank)
    }
}

/// Number of ranks in one suit cycle (Ace through King).
pub const RANKS_PER_SUIT: u8 = 13;

/// Number of cards in a completed run.
pub const RUN_LENGTH: usize = RANKS_PER_SUIT as usize;
