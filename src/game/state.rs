//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Building and dealing a fresh table.
    Dealing,
    /// Waiting for player actions.
    Playing,
    /// Every run has been retired. Terminal until the next new game.
    Won,
}

/// Handle for a flip that has started but not yet been applied.
///
/// Returned by [`Game::begin_flip`](super::Game::begin_flip). The card stays
/// face-down and locked until the ticket is passed to
/// [`Game::complete_flip`](super::Game::complete_flip).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlipTicket {
    /// Pile holding the card.
    pub pile: usize,
    /// Index of the card in the pile.
    pub index: usize,
    /// Game the ticket was issued in.
    pub(crate) generation: u32,
}

/// Result of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Number of cards moved.
    pub moved: usize,
    /// Number of runs retired as a consequence of the move.
    pub runs_retired: usize,
}
