//! Position: a board plus the side to move.
//!
//! Only the first two FEN fields are consumed. Castling rights, the
//! en-passant target and the move counters are accepted and ignored since
//! the engine never generates special moves.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Color, Move};
use crate::error::{PositionError, PositionResult};

/// Placement field of the standard starting position.
pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Full FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn new(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
        }
    }

    pub fn startpos() -> Self {
        Self::from_fen(START_FEN).expect("start position is valid")
    }

    /// Parse a FEN line. A missing active-color field defaults to White.
    pub fn from_fen(fen: &str) -> PositionResult<Position> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or(PositionError::Empty)?;
        let board = Board::parse_placement(placement)?;
        let side_to_move = match fields.next() {
            None => Color::White,
            Some(token) => parse_side(token)?,
        };
        Ok(Position::new(board, side_to_move))
    }

    /// The position after `mv`, with the turn passed to the opponent.
    ///
    /// No legality check is made; callers that need one filter through
    /// [`crate::rules::legal_moves`] first.
    pub fn play(&self, mv: Move) -> Position {
        Position::new(self.board.apply(mv), self.side_to_move.opponent())
    }

    /// FEN with neutral castling/en-passant/counter fields.
    pub fn to_fen(&self) -> String {
        let side = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!("{} {side} - - 0 1", self.board.placement())
    }
}

/// Parse an active-color token (`w`/`b`, or the full color name).
pub fn parse_side(token: &str) -> PositionResult<Color> {
    match token.to_ascii_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => Err(PositionError::SideToMove(token.to_string())),
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> PositionResult<Position> {
        Position::from_fen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f, "{} to move", self.side_to_move.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos() {
        let pos = Position::startpos();
        assert_eq!(pos.side_to_move, Color::White);
        assert_eq!(pos.board.placement(), START_PLACEMENT);
    }

    #[test]
    fn test_ignores_extra_fields() {
        let a = Position::from_fen("4k3/8/8/8/8/8/8/4K3 b KQkq e3 12 40").unwrap();
        let b = Position::from_fen("4k3/8/8/8/8/8/8/4K3 b").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.side_to_move, Color::Black);
    }

    #[test]
    fn test_missing_side_defaults_to_white() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(pos.side_to_move, Color::White);
    }

    #[test]
    fn test_rejects_bad_side_and_empty() {
        assert_eq!(
            Position::from_fen("4k3/8/8/8/8/8/8/4K3 x"),
            Err(PositionError::SideToMove("x".into()))
        );
        assert_eq!(Position::from_fen("   "), Err(PositionError::Empty));
    }

    #[test]
    fn test_play_switches_side() {
        let pos = Position::startpos();
        let next = pos.play("e2e4".parse().unwrap());
        assert_eq!(next.side_to_move, Color::Black);
        assert_eq!(next.to_fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1");
    }
}
