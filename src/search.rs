//! Move ranking and the top-level analysis entry point.
//!
//! The ranker scores every legal move once and sorts them; there is no tree
//! search. [`Engine::analyze`] puts the opening book in front of it and
//! classifies the result.

use crate::board::{Board, Color, Move};
use crate::book::OpeningBook;
use crate::constants::{ALTERNATIVES, BOOK_SCORE, DISPLAY_CLAMP};
use crate::eval::evaluate_move;
use crate::events::{Event, EventSink, NullSink};
use crate::position::Position;
use crate::rules::{GamePhase, is_in_check, legal_moves};

/// A move with its raw evaluator score.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
    /// Set when the queen-safety veto replaced the score.
    pub vetoed: bool,
}

/// Result of ranking a position's legal moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ranked {
    pub best: ScoredMove,
    /// Up to three best moves, `best` first.
    pub alternatives: Vec<ScoredMove>,
}

/// Score every legal move of `color` and sort best first.
///
/// The sort is stable, so equal scores keep generation order (a8 to h1).
pub fn rank_moves(board: &Board, color: Color, sink: &mut dyn EventSink) -> Vec<ScoredMove> {
    let moves = legal_moves(board, color);
    sink.emit(Event::Generated { count: moves.len() });

    let mut scored: Vec<ScoredMove> = moves
        .into_iter()
        .map(|mv| {
            let eval = evaluate_move(board, mv, color);
            let score = eval.total();
            if eval.vetoed {
                sink.emit(Event::QueenVeto { mv });
            }
            sink.emit(Event::Scored { mv, score });
            ScoredMove {
                mv,
                score,
                vetoed: eval.vetoed,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Best legal move for `color` and the top alternatives, or `None` when
/// there are no legal moves.
pub fn best_move(board: &Board, color: Color) -> Option<Ranked> {
    let ranked = rank_moves(board, color, &mut NullSink);
    let best = *ranked.first()?;
    Some(Ranked {
        best,
        alternatives: ranked.into_iter().take(ALTERNATIVES).collect(),
    })
}

/// Convert a raw score to pawns, clamped to `[-5, 5]`.
pub fn display_score(raw: i32) -> f64 {
    (raw as f64 / 100.0).clamp(-DISPLAY_CLAMP, DISPLAY_CLAMP)
}

/// How a recommendation was produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Taken from the opening book.
    Book,
    /// Chosen by the evaluator.
    Generated,
    /// The side to move has no legal moves (mate or stalemate).
    NoLegalMoves,
}

impl Outcome {
    pub fn name(self) -> &'static str {
        match self {
            Outcome::Book => "book-move",
            Outcome::Generated => "generated-move",
            Outcome::NoLegalMoves => "no-legal-moves",
        }
    }
}

/// Everything a caller needs to present a recommendation.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    pub outcome: Outcome,
    pub best: Option<Move>,
    /// Unclamped score of `best`.
    pub score: i32,
    /// Ranked candidates, best first; book moves for a book hit.
    pub alternatives: Vec<ScoredMove>,
    pub phase: GamePhase,
}

impl Analysis {
    /// Score in pawns, clamped for display.
    pub fn display_score(&self) -> f64 {
        display_score(self.score)
    }

    /// Pick uniformly among the alternatives that were not vetoed.
    ///
    /// Falls back to `best` when there is nothing else to choose from.
    pub fn varied_move(&self, rng: &mut fastrand::Rng) -> Option<Move> {
        let pool: Vec<Move> = self
            .alternatives
            .iter()
            .filter(|s| !s.vetoed)
            .map(|s| s.mv)
            .collect();
        if pool.is_empty() {
            return self.best;
        }
        Some(pool[rng.usize(..pool.len())])
    }
}

/// Fallback engine: opening book plus one-ply heuristic ranking.
///
/// Holds no mutable state, so one engine can serve any number of callers.
#[derive(Clone, Debug)]
pub struct Engine {
    book: OpeningBook,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(OpeningBook::standard())
    }
}

impl Engine {
    pub fn new(book: OpeningBook) -> Self {
        Self { book }
    }

    /// An engine that always ranks moves, never consulting a book.
    pub fn without_book() -> Self {
        Self::new(OpeningBook::empty())
    }

    pub fn book(&self) -> &OpeningBook {
        &self.book
    }

    /// Recommend a move for the side to move in `pos`.
    pub fn analyze(&self, pos: &Position, sink: &mut dyn EventSink) -> Analysis {
        let board = &pos.board;
        let side = pos.side_to_move;
        let phase = GamePhase::of(board);
        sink.emit(Event::Started {
            placement: board.placement(),
            side,
        });

        let book_moves = self.book.candidates(board, side);
        if let Some(&mv) = book_moves.first() {
            sink.emit(Event::BookHit { mv });
            return Analysis {
                outcome: Outcome::Book,
                best: Some(mv),
                score: BOOK_SCORE,
                alternatives: book_moves
                    .into_iter()
                    .take(ALTERNATIVES)
                    .map(|mv| ScoredMove {
                        mv,
                        score: BOOK_SCORE,
                        vetoed: false,
                    })
                    .collect(),
                phase,
            };
        }

        let ranked = rank_moves(board, side, sink);
        let Some(&best) = ranked.first() else {
            sink.emit(Event::NoLegalMoves {
                in_check: is_in_check(board, side),
            });
            return Analysis {
                outcome: Outcome::NoLegalMoves,
                best: None,
                score: 0,
                alternatives: Vec::new(),
                phase,
            };
        };

        sink.emit(Event::Selected {
            mv: best.mv,
            score: best.score,
        });
        Analysis {
            outcome: Outcome::Generated,
            best: Some(best.mv),
            score: best.score,
            alternatives: ranked.into_iter().take(ALTERNATIVES).collect(),
            phase,
        }
    }
}
