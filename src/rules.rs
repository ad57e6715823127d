//! Check detection, legality filtering, and game classification.
//!
//! Legality is brute force: every pseudo-legal move is applied to a fresh
//! copy of the board and the mover's king is tested for attack. At 8x8 with
//! at most a few hundred candidates this is cheap enough and leaves no
//! make/unmake state to get wrong.

use crate::attacks::square_attacked_by;
use crate::board::{Board, Color, Move};
use crate::constants::{ENDGAME_MAX_PIECES, OPENING_MIN_PIECES};
use crate::movegen::all_pseudo_legal_moves;

/// True iff `color`'s king is attacked.
///
/// A board with no king of `color` is reported as not in check. Validated
/// boards always have one king per side, so this only matters for boards
/// assembled by hand.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => square_attacked_by(board, king, color.opponent()),
        None => false,
    }
}

/// Pseudo-legal moves of `color` that do not leave its own king attacked.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    all_pseudo_legal_moves(board, color)
        .into_iter()
        .filter(|&mv| !is_in_check(&board.apply(mv), color))
        .collect()
}

/// True iff `color` is in check and no legal move resolves it.
///
/// Being out of moves while not in check is not mate; see [`game_status`].
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_in_check(board, color) && legal_moves(board, color).is_empty()
}

/// Whether the side to move can still play.
///
/// Checkmate and stalemate are both folded into `NoLegalMoves`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    NoLegalMoves,
}

pub fn game_status(board: &Board, color: Color) -> GameStatus {
    if legal_moves(board, color).is_empty() {
        GameStatus::NoLegalMoves
    } else {
        GameStatus::Ongoing
    }
}

/// Coarse game phase by number of pieces left on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Opening,
    Middlegame,
    Endgame,
}

impl GamePhase {
    pub fn of(board: &Board) -> GamePhase {
        let pieces = board.piece_count();
        if pieces > OPENING_MIN_PIECES {
            GamePhase::Opening
        } else if pieces < ENDGAME_MAX_PIECES {
            GamePhase::Endgame
        } else {
            GamePhase::Middlegame
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GamePhase::Opening => "opening",
            GamePhase::Middlegame => "middlegame",
            GamePhase::Endgame => "endgame",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind, Square};

    fn board(placement: &str) -> Board {
        Board::parse_placement(placement).unwrap()
    }

    #[test]
    fn test_start_position_has_twenty_moves() {
        let b = board("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
        assert_eq!(legal_moves(&b, Color::White).len(), 20);
        assert!(!is_in_check(&b, Color::White));
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        // White knight e2 pinned against e1 by the rook on e8.
        let b = board("4r1k1/8/8/8/8/8/4N3/4K3");
        let moves = legal_moves(&b, Color::White);
        let e2: Square = "e2".parse().unwrap();
        assert!(moves.iter().all(|m| m.from != e2));
        assert!(!moves.is_empty());
    }

    #[test]
    fn test_check_must_be_answered() {
        // Black rook on e8 checks the white king on e1.
        let b = board("4r1k1/8/8/8/8/8/8/R3K3");
        assert!(is_in_check(&b, Color::White));
        for mv in legal_moves(&b, Color::White) {
            assert!(!is_in_check(&b.apply(mv), Color::White), "{mv} leaves king in check");
        }
    }

    #[test]
    fn test_back_rank_mate() {
        // Black king g8 behind its own pawns, white rook delivers mate on e8.
        let b = board("4R1k1/5ppp/8/8/8/8/8/6K1");
        assert!(is_in_check(&b, Color::Black));
        assert!(is_checkmate(&b, Color::Black));

        let without_rook = b.with("e8".parse().unwrap(), None);
        assert!(!is_checkmate(&without_rook, Color::Black));
    }

    #[test]
    fn test_stalemate_is_not_mate() {
        // Black king a8, white queen b6, white king c1: black to move has no moves.
        let b = board("k7/8/1Q6/8/8/8/8/2K5");
        assert!(!is_in_check(&b, Color::Black));
        assert!(!is_checkmate(&b, Color::Black));
        assert_eq!(game_status(&b, Color::Black), GameStatus::NoLegalMoves);
        assert_eq!(game_status(&b, Color::White), GameStatus::Ongoing);
    }

    #[test]
    fn test_missing_king_is_not_in_check() {
        let b = Board::empty().with(
            "a1".parse().unwrap(),
            Some(Piece::new(PieceKind::Rook, Color::Black)),
        );
        assert!(!is_in_check(&b, Color::White));
        assert!(!is_checkmate(&b, Color::White));
    }

    #[test]
    fn test_game_phase() {
        assert_eq!(
            GamePhase::of(&board("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")),
            GamePhase::Opening
        );
        assert_eq!(GamePhase::of(&board("4k3/8/8/8/8/8/8/4K3")), GamePhase::Endgame);
        assert_eq!(
            GamePhase::of(&board("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R")),
            GamePhase::Middlegame
        );
    }
}
