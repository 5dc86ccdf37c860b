//! Notifications emitted by the game for hosts (sound, animation, status).

use crate::card::Suit;

/// Something that happened on the table.
///
/// Events are queued by [`Game`](crate::Game) actions and drained by the host
/// with [`Game::drain_events`](crate::Game::drain_events). The game never
/// waits for the host to consume them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game was dealt.
    GameDealt {
        /// Cards placed on the piles.
        dealt: usize,
        /// Cards left in the stock.
        stock: usize,
    },
    /// The top card of a pile was turned face-up by the player.
    CardFlipped {
        /// Pile index.
        pile: usize,
    },
    /// A row was dealt from the stock.
    RowDealt {
        /// Number of cards dealt.
        cards: usize,
    },
    /// A run of cards moved between piles.
    CardsMoved {
        /// Source pile.
        from: usize,
        /// Destination pile.
        to: usize,
        /// Number of cards moved.
        count: usize,
    },
    /// A completed run was retired from a pile.
    RunCompleted {
        /// Pile the run was removed from.
        pile: usize,
        /// Suit of the run.
        suit: Suit,
    },
    /// Every run has been retired.
    GameWon,
}
