//! A spider solitaire game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals the table, applies flips,
//! moves and row deals, and retires completed King-to-Ace runs. Rendering and
//! sound are left to the host: it reads [`Game::table`], drains
//! [`GameEvent`]s, and feeds pointer input through an [`InputHandler`].
//!
//! # Example
//!
//! ```
//! use spiders::{Difficulty, Game, GameOptions};
//!
//! let options = GameOptions::default().with_difficulty(Difficulty::TwoSuits);
//! let mut game = Game::new(options, 42);
//! let dealt = game.deal_row().unwrap();
//! assert_eq!(dealt, 10);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod event;
pub mod game;
pub mod input;
pub mod layout;
pub mod options;
pub mod table;

// Re-export main types
pub use card::{Card, RANKS_PER_SUIT, RUN_LENGTH, Suit};
pub use error::{DealError, DifficultyError, FlipError, MoveError};
pub use event::GameEvent;
pub use game::{FlipTicket, Game, GameState, MoveOutcome};
pub use input::{Drag, InputHandler, InputOutcome, PointerEvent, PointerKind};
pub use layout::{Layout, Rect};
pub use options::{Difficulty, GameOptions};
pub use table::{PILE_COUNT, Pile, Table};
