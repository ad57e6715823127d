//! Opening shortcut: exact placement lookup.
//!
//! The book is plain data. [`OpeningBook::standard`] carries a handful of
//! built-in entries, [`OpeningBook::parse`] and [`OpeningBook::load`] read the
//! same kind of table from text so it can be replaced without touching code.
//!
//! ## Text format
//!
//! One entry per line: a FEN placement followed by one or more moves in
//! coordinate notation. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! # start position
//! rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR e2e4 d2d4 g1f3 c2c4
//! ```

use std::collections::HashMap;
use std::path::Path;

use crate::board::{Board, Color, Move};
use crate::error::{PositionError, PositionResult};
use crate::movegen::pseudo_legal_moves;
use crate::rules::is_in_check;

/// Built-in entries: start position and the main replies to 1.e4, 1.d4,
/// 1.Nf3 and 1.c4.
const STANDARD_BOOK: &str = "\
rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR e2e4 d2d4 g1f3 c2c4
rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR e7e5 c7c5 e7e6
rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR d7d5 g8f6
rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R g8f6 d7d5
rnbqkbnr/pppppppp/8/8/2P5/8/PP1PPPPP/RNBQKBNR e7e5 g8f6
rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR g1f3 b1c3
rnbqkbnr/ppp1pppp/8/3p4/3P4/8/PPP1PPPP/RNBQKBNR c2c4 g1f3
";

#[derive(Clone, Debug, Default)]
pub struct OpeningBook {
    entries: HashMap<String, Vec<Move>>,
}

impl OpeningBook {
    /// A book with no entries; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        Self::parse(STANDARD_BOOK).expect("built-in book is well formed")
    }

    /// Parse the text format described in the module docs.
    ///
    /// Placements are validated and stored in canonical form, so lookups
    /// match regardless of how the run-lengths were written.
    pub fn parse(text: &str) -> PositionResult<Self> {
        let mut book = Self::empty();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split_whitespace();
            let Some(placement) = fields.next() else {
                continue;
            };
            let board = Board::parse_placement(placement)?;
            let moves = fields.map(str::parse::<Move>).collect::<PositionResult<Vec<_>>>()?;
            if moves.is_empty() {
                return Err(PositionError::InvalidMove(line.to_string()));
            }
            book.insert(&board, moves);
        }
        Ok(book)
    }

    /// Read and parse a book file.
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Add or replace the moves listed for `board`.
    pub fn insert(&mut self, board: &Board, moves: Vec<Move>) {
        self.entries.insert(board.placement(), moves);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All moves listed for `board`, in book order.
    pub fn moves(&self, board: &Board) -> &[Move] {
        self.entries
            .get(&board.placement())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Book moves for `side` on `board` that are legal there. A placement
    /// listed for the other side yields nothing.
    ///
    /// Only the moving piece is generated, so a hit stays cheaper than a
    /// full legal-move search.
    pub fn candidates(&self, board: &Board, side: Color) -> Vec<Move> {
        self.moves(board)
            .iter()
            .copied()
            .filter(|mv| board.get(mv.from).is_some_and(|p| p.color == side))
            .filter(|&mv| {
                pseudo_legal_moves(board, mv.from).contains(&mv)
                    && !is_in_check(&board.apply(mv), side)
            })
            .collect()
    }

    /// First usable book move for `side`, if any.
    pub fn lookup(&self, board: &Board, side: Color) -> Option<Move> {
        self.candidates(board, side).into_iter().next()
    }
}
