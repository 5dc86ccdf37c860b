use log::{debug, trace};

use crate::error::{FlipError, MoveError};
use crate::event::GameEvent;

use super::{FlipTicket, Game, GameState, MoveOutcome};

impl Game {
    /// Starts turning the top card of `pile` face-up.
    ///
    /// The card stays face-down and locked until the returned ticket is
    /// passed to [`Game::complete_flip`]. While it is locked the pile cannot
    /// take part in moves and no row can be dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not being played, the pile cannot be
    /// found, `index` is not the top card, the card is already being
    /// flipped, or it is already face-up.
    pub fn begin_flip(&mut self, pile: usize, index: usize) -> Result<FlipTicket, FlipError> {
        if self.state != GameState::Playing {
            return Err(FlipError::InvalidState);
        }

        let target = self.table.pile(pile).ok_or(FlipError::PileNotFound)?;
        if target.len().checked_sub(1) != Some(index) {
            return Err(FlipError::NotTopCard);
        }
        if self.pending_flips.contains_key(&pile) {
            return Err(FlipError::FlipPending);
        }
        if target.top().is_some_and(|card| card.face_up) {
            return Err(FlipError::AlreadyFaceUp);
        }

        let ticket = FlipTicket {
            pile,
            index,
            generation: self.generation,
        };
        self.pending_flips.insert(pile, ticket);
        trace!("flip started on pile {pile}");

        Ok(ticket)
    }

    /// Finishes a flip started with [`Game::begin_flip`].
    ///
    /// [`GameEvent::CardFlipped`] is queued only if a face-down card was
    /// actually turned.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket was issued by an earlier game or was
    /// already completed.
    pub fn complete_flip(&mut self, ticket: FlipTicket) -> Result<(), FlipError> {
        if ticket.generation != self.generation
            || self.pending_flips.get(&ticket.pile) != Some(&ticket)
        {
            return Err(FlipError::StaleTicket);
        }

        self.pending_flips.remove(&ticket.pile);
        let pile = self
            .table
            .piles
            .get_mut(ticket.pile)
            .ok_or(FlipError::StaleTicket)?;
        if pile.turn_top_up() {
            debug!("flipped top card of pile {}", ticket.pile);
            self.events
                .push(GameEvent::CardFlipped { pile: ticket.pile });
        } else {
            trace!("flip on pile {} found no face-down top", ticket.pile);
        }

        Ok(())
    }

    /// Turns the top card of `pile` face-up in one step.
    ///
    /// # Errors
    ///
    /// Same as [`Game::begin_flip`].
    pub fn flip(&mut self, pile: usize, index: usize) -> Result<(), FlipError> {
        let ticket = self.begin_flip(pile, index)?;
        self.complete_flip(ticket)
    }

    /// Checks whether the cards of `from` starting at `start` may be moved
    /// onto `to`, without changing anything.
    ///
    /// Only the first card of the moving run is compared with the
    /// destination; the order of the cards above it is not checked.
    ///
    /// # Errors
    ///
    /// Returns the reason the move would be rejected.
    pub fn can_move(&self, from: usize, start: usize, to: usize) -> Result<(), MoveError> {
        if self.state != GameState::Playing {
            return Err(MoveError::InvalidState);
        }

        let source = self.table.pile(from).ok_or(MoveError::PileNotFound)?;
        let destination = self.table.pile(to).ok_or(MoveError::PileNotFound)?;

        if from == to {
            return Err(MoveError::SamePile);
        }
        if self.is_locked(from) || self.is_locked(to) {
            return Err(MoveError::PileLocked);
        }

        let first = source.cards().get(start).ok_or(MoveError::CardNotFound)?;
        if !first.face_up {
            return Err(MoveError::FaceDown);
        }
        if !destination.accepts(first) {
            return Err(MoveError::NotAccepted);
        }

        Ok(())
    }

    /// Moves the cards of `from` starting at `start` onto `to`, then retires
    /// completed runs.
    ///
    /// # Errors
    ///
    /// Returns an error if [`Game::can_move`] rejects the move. Nothing is
    /// changed in that case.
    pub fn move_run(
        &mut self,
        from: usize,
        start: usize,
        to: usize,
    ) -> Result<MoveOutcome, MoveError> {
        self.can_move(from, start, to)?;

        let run = self.table.piles[from]
            .take_from(start)
            .ok_or(MoveError::CardNotFound)?;
        let moved = run.len();
        self.table.piles[to].extend(run);

        debug!("moved {moved} cards from pile {from} to pile {to}");
        self.events.push(GameEvent::CardsMoved {
            from,
            to,
            count: moved,
        });
        let runs_retired = self.check_completed_runs();

        Ok(MoveOutcome {
            moved,
            runs_retired,
        })
    }

    /// Attempts a move and reports whether it happened.
    ///
    /// Rejected moves are not faults: the table is left as it was and
    /// `false` is returned.
    pub fn try_move(&mut self, from: usize, start: usize, to: usize) -> bool {
        match self.move_run(from, start, to) {
            Ok(_) => true,
            Err(err) => {
                trace!("move {from}[{start}..] -> {to} rejected: {err}");
                false
            }
        }
    }
}
