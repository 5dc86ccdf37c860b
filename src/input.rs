//! Pointer input: turns presses, drags and releases into game actions.
//!
//! Hosts feed [`PointerEvent`]s in canvas coordinates. Touch input is
//! expected to be translated into the same down/move/up vocabulary before it
//! reaches the handler.

use log::trace;

use crate::error::DealError;
use crate::game::{FlipTicket, Game, GameState, MoveOutcome};
use crate::layout::Layout;

/// Kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Button pressed or touch started.
    Down,
    /// Pointer moved.
    Move,
    /// Button released or touch ended.
    Up,
}

/// A normalized pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,
    /// Horizontal canvas coordinate.
    pub x: f64,
    /// Vertical canvas coordinate.
    pub y: f64,
}

impl PointerEvent {
    /// Creates a press event.
    #[must_use]
    pub const fn down(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Down,
            x,
            y,
        }
    }

    /// Creates a move event.
    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Move,
            x,
            y,
        }
    }

    /// Creates a release event.
    #[must_use]
    pub const fn up(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Up,
            x,
            y,
        }
    }
}

/// A run of cards being dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    /// Pile the run is taken from.
    pub pile: usize,
    /// Index of the first dragged card.
    pub index: usize,
    /// Pointer offset from the left edge of the first card.
    pub offset_x: f64,
    /// Pointer offset from the top edge of the first card.
    pub offset_y: f64,
    /// Current pointer position.
    pub x: f64,
    /// Current pointer position.
    pub y: f64,
}

impl Drag {
    /// Returns where the top-left corner of the first dragged card is drawn.
    #[must_use]
    pub fn card_origin(&self) -> (f64, f64) {
        (self.x - self.offset_x, self.y - self.offset_y)
    }
}

/// What a pointer event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Nothing happened.
    Ignored,
    /// A row was dealt from the stock.
    RowDealt(usize),
    /// A face-down top card started flipping. Pass the ticket to
    /// [`Game::complete_flip`] when the animation ends.
    FlipStarted(FlipTicket),
    /// A drag began.
    DragStarted {
        /// Source pile.
        pile: usize,
        /// Index of the first dragged card.
        index: usize,
    },
    /// The dragged run followed the pointer.
    Dragged,
    /// The dragged run was dropped and moved.
    Moved(MoveOutcome),
    /// The dragged run was dropped where it does not fit; nothing changed.
    MoveRejected,
}

/// Maps pointer events onto a [`Game`].
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    layout: Layout,
    drag: Option<Drag>,
}

impl InputHandler {
    /// Creates a handler using `layout` for hit-testing.
    #[must_use]
    pub const fn new(layout: Layout) -> Self {
        Self { layout, drag: None }
    }

    /// Returns the layout.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the current drag, if any.
    #[must_use]
    pub const fn drag(&self) -> Option<&Drag> {
        self.drag.as_ref()
    }

    /// Drops the current drag without moving anything.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Deals a row from the stock on behalf of a control outside the canvas.
    ///
    /// Any drag in progress is dropped first; its indices would no longer
    /// describe the run under the pointer once cards land on the piles.
    ///
    /// # Errors
    ///
    /// Same as [`Game::deal_row`].
    pub fn deal_row(&mut self, game: &mut Game) -> Result<usize, DealError> {
        self.drag = None;
        game.deal_row()
    }

    /// Applies one pointer event to the game.
    pub fn handle(&mut self, game: &mut Game, event: PointerEvent) -> InputOutcome {
        match event.kind {
            PointerKind::Down => self.pointer_down(game, event.x, event.y),
            PointerKind::Move => self.pointer_move(event.x, event.y),
            PointerKind::Up => self.pointer_up(game, event.x, event.y),
        }
    }

    fn pointer_down(&mut self, game: &mut Game, x: f64, y: f64) -> InputOutcome {
        self.drag = None;
        if game.state() != GameState::Playing {
            return InputOutcome::Ignored;
        }

        if self.layout.hit_stock(x, y) && game.table().stock_len() > 0 {
            return match game.deal_row() {
                Ok(dealt) => InputOutcome::RowDealt(dealt),
                Err(err) => {
                    trace!("stock press ignored: {err}");
                    InputOutcome::Ignored
                }
            };
        }

        let Some((pile, row)) = self.layout.card_at(game.table(), x, y) else {
            return InputOutcome::Ignored;
        };
        let Some(card) = game.table().piles[pile].cards().get(row).copied() else {
            return InputOutcome::Ignored;
        };

        if !card.face_up {
            return match game.begin_flip(pile, row) {
                Ok(ticket) => InputOutcome::FlipStarted(ticket),
                Err(err) => {
                    trace!("press on face-down card ignored: {err}");
                    InputOutcome::Ignored
                }
            };
        }

        let rect = self.layout.card_rect(pile, row);
        self.drag = Some(Drag {
            pile,
            index: row,
            offset_x: x - rect.x,
            offset_y: y - rect.y,
            x,
            y,
        });
        InputOutcome::DragStarted { pile, index: row }
    }

    fn pointer_move(&mut self, x: f64, y: f64) -> InputOutcome {
        match self.drag.as_mut() {
            Some(drag) => {
                drag.x = x;
                drag.y = y;
                InputOutcome::Dragged
            }
            None => InputOutcome::Ignored,
        }
    }

    fn pointer_up(&mut self, game: &mut Game, x: f64, y: f64) -> InputOutcome {
        let Some(drag) = self.drag.take() else {
            return InputOutcome::Ignored;
        };

        let target = self
            .layout
            .drop_targets(game.table(), x, y)
            .find(|&to| game.can_move(drag.pile, drag.index, to).is_ok());

        match target.map(|to| game.move_run(drag.pile, drag.index, to)) {
            Some(Ok(outcome)) => InputOutcome::Moved(outcome),
            Some(Err(err)) => {
                trace!("drop rejected: {err}");
                InputOutcome::MoveRejected
            }
            None => InputOutcome::MoveRejected,
        }
    }
}
