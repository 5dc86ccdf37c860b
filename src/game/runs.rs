use log::debug;

use crate::card::RUN_LENGTH;
use crate::event::GameEvent;
use crate::table::Pile;

use super::{Game, GameState};

impl Game {
    /// Retires every completed run sitting on top of a pile.
    ///
    /// A pile qualifies when its last 13 cards read King down to Ace in one
    /// suit. The game is won when this call retired at least one run, no
    /// pile is left with 13 or more cards, and every run of the dealt deck
    /// has been retired.
    ///
    /// Returns the number of runs retired by this call. Calling it again
    /// without changing the table retires nothing.
    pub fn check_completed_runs(&mut self) -> usize {
        let mut retired = 0;

        for (index, pile) in self.table.piles.iter_mut().enumerate() {
            if let Some(suit) = pile.retire_run() {
                debug!("retired {suit:?} run from pile {index}");
                self.table.retired.push(suit);
                self.events
                    .push(GameEvent::RunCompleted { pile: index, suit });
                retired += 1;
            }
        }

        if retired > 0
            && self.state == GameState::Playing
            && self.table.piles.iter().all(|pile| pile.len() < RUN_LENGTH)
            && self.table.retired_runs() >= self.runs_in_deal
        {
            debug!("all {} runs retired, game won", self.table.retired_runs());
            self.state = GameState::Won;
            self.events.push(GameEvent::GameWon);
        }

        retired
    }

    /// Returns the number of piles whose top 13 cards form a completed run.
    pub fn completed_runs_on_table(&self) -> usize {
        self.table
            .piles
            .iter()
            .filter_map(Pile::completed_run)
            .count()
    }
}
