//! Diagnostic events emitted during analysis.
//!
//! The engine never writes to a fixed stream. Callers pass an [`EventSink`];
//! [`NullSink`] drops everything, [`LogSink`] forwards to the `log` facade,
//! and a `Vec<Event>` records events for inspection.

use crate::board::{Color, Move};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Analysis started for `side` on `placement`
    Started { placement: String, side: Color },
    /// The opening book supplied the move
    BookHit { mv: Move },
    /// Legal moves were generated
    Generated { count: usize },
    /// A candidate move was scored by the evaluator
    Scored { mv: Move, score: i32 },
    /// A queen move was replaced by the loss sentinel
    QueenVeto { mv: Move },
    /// The side to move has no legal moves
    NoLegalMoves { in_check: bool },
    /// Final recommendation
    Selected { mv: Move, score: i32 },
}

pub trait EventSink {
    fn emit(&mut self, event: Event);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    #[inline]
    fn emit(&mut self, _event: Event) {}
}

/// Forwards events to the `log` facade under the `fallback_chess` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, event: Event) {
        match event {
            Event::Started { placement, side } => {
                log::debug!("analyzing {placement} ({} to move)", side.name())
            }
            Event::BookHit { mv } => log::info!("book move {mv}"),
            Event::Generated { count } => log::debug!("{count} legal moves"),
            Event::Scored { mv, score } => log::trace!("move {mv} score={score}"),
            Event::QueenVeto { mv } => log::debug!("queen veto on {mv}"),
            Event::NoLegalMoves { in_check } => {
                log::info!("no legal moves (in check: {in_check})")
            }
            Event::Selected { mv, score } => log::info!("best move {mv} score={score}"),
        }
    }
}

impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}
