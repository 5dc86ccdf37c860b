//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when turning a card face-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlipError {
    /// Invalid game state for flipping.
    #[error("invalid game state for flipping")]
    InvalidState,
    /// Pile not found.
    #[error("pile not found")]
    PileNotFound,
    /// The card is not the top card of its pile.
    #[error("card is not the top card of its pile")]
    NotTopCard,
    /// The card is already face-up.
    #[error("card is already face-up")]
    AlreadyFaceUp,
    /// A flip of this card is already in progress.
    #[error("a flip of this card is already in progress")]
    FlipPending,
    /// The flip ticket does not belong to a pending flip of this game.
    #[error("flip ticket is stale")]
    StaleTicket,
}

/// Errors that can occur when moving a run between piles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Invalid game state for moving.
    #[error("invalid game state for moving")]
    InvalidState,
    /// Pile not found.
    #[error("pile not found")]
    PileNotFound,
    /// Start index is past the end of the source pile.
    #[error("card not found in source pile")]
    CardNotFound,
    /// Source and destination are the same pile.
    #[error("source and destination are the same pile")]
    SamePile,
    /// The first card of the run is face-down.
    #[error("first card of the run is face-down")]
    FaceDown,
    /// One of the piles has a flip in progress.
    #[error("pile is locked by a pending flip")]
    PileLocked,
    /// The destination does not accept the run.
    #[error("destination does not accept the run")]
    NotAccepted,
}

/// Errors that can occur when dealing a row from the stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The stock is empty.
    #[error("the stock is empty")]
    StockEmpty,
    /// A flip is in progress on some pile.
    #[error("a flip is in progress")]
    FlipPending,
}

/// Errors that can occur when reading a difficulty setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DifficultyError {
    /// The level is not one of the known selector values.
    #[error("unknown difficulty level {0}")]
    Unknown(u8),
}
