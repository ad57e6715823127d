//! Attack detection.
//!
//! An attack is the capability to capture on a square, which is not the same
//! as being able to move there: a pawn attacks its two forward diagonals even
//! when they are empty, and never attacks the square straight ahead.

use crate::board::{Board, Color, PieceKind, Square};

/// True iff a `kind` of `color` standing on `from` threatens `to`.
///
/// Sliding pieces need every square strictly between the endpoints to be
/// empty. The contents of `from` and `to` are not inspected.
pub fn attacks(board: &Board, from: Square, kind: PieceKind, color: Color, to: Square) -> bool {
    let drow = to.row() as i8 - from.row() as i8;
    let dcol = to.col() as i8 - from.col() as i8;

    match kind {
        PieceKind::Pawn => drow == color.forward() && dcol.abs() == 1,
        PieceKind::Knight => {
            let (ar, ac) = (drow.abs(), dcol.abs());
            (ar == 2 && ac == 1) || (ar == 1 && ac == 2)
        }
        PieceKind::King => drow.abs() <= 1 && dcol.abs() <= 1 && !(drow == 0 && dcol == 0),
        PieceKind::Bishop => is_diagonal(drow, dcol) && ray_clear(board, from, to),
        PieceKind::Rook => is_straight(drow, dcol) && ray_clear(board, from, to),
        PieceKind::Queen => {
            (is_diagonal(drow, dcol) || is_straight(drow, dcol)) && ray_clear(board, from, to)
        }
    }
}

#[inline]
fn is_diagonal(drow: i8, dcol: i8) -> bool {
    drow != 0 && drow.abs() == dcol.abs()
}

#[inline]
fn is_straight(drow: i8, dcol: i8) -> bool {
    (drow == 0) != (dcol == 0)
}

/// Walk from `from` towards `to` and report whether every intermediate
/// square is empty. The caller guarantees the two squares share a line.
fn ray_clear(board: &Board, from: Square, to: Square) -> bool {
    let step_row = (to.row() as i8 - from.row() as i8).signum();
    let step_col = (to.col() as i8 - from.col() as i8).signum();

    let mut cur = from.offset(step_row, step_col);
    while let Some(sq) = cur {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        cur = sq.offset(step_row, step_col);
    }
    false
}

/// True iff any piece of `by` attacks `sq`.
pub fn square_attacked_by(board: &Board, sq: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(from, p)| from != sq && attacks(board, from, p.kind, by, sq))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn board(placement: &str) -> Board {
        Board::parse_placement(placement).unwrap()
    }

    #[test]
    fn test_pawn_attacks_diagonals_only() {
        let b = board("4k3/8/8/8/8/8/4P3/4K3");
        let e2 = sq("e2");
        assert!(attacks(&b, e2, PieceKind::Pawn, Color::White, sq("d3")));
        assert!(attacks(&b, e2, PieceKind::Pawn, Color::White, sq("f3")));
        assert!(!attacks(&b, e2, PieceKind::Pawn, Color::White, sq("e3")));
        assert!(!attacks(&b, e2, PieceKind::Pawn, Color::White, sq("d1")));
        // Black pawns attack downwards.
        assert!(attacks(&b, sq("e7"), PieceKind::Pawn, Color::Black, sq("d6")));
        assert!(!attacks(&b, sq("e7"), PieceKind::Pawn, Color::Black, sq("d8")));
    }

    #[test]
    fn test_knight_and_king_geometry() {
        let b = Board::empty();
        let d4 = sq("d4");
        for target in ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"] {
            assert!(attacks(&b, d4, PieceKind::Knight, Color::White, sq(target)));
        }
        assert!(!attacks(&b, d4, PieceKind::Knight, Color::White, sq("d6")));
        assert!(attacks(&b, d4, PieceKind::King, Color::White, sq("e5")));
        assert!(!attacks(&b, d4, PieceKind::King, Color::White, d4));
        assert!(!attacks(&b, d4, PieceKind::King, Color::White, sq("d6")));
    }

    #[test]
    fn test_sliders_blocked() {
        // White rook a1, white pawn a4; black king h8.
        let b = board("7k/8/8/8/P7/8/8/R3K3");
        let a1 = sq("a1");
        assert!(attacks(&b, a1, PieceKind::Rook, Color::White, sq("a3")));
        assert!(attacks(&b, a1, PieceKind::Rook, Color::White, sq("a4")));
        assert!(!attacks(&b, a1, PieceKind::Rook, Color::White, sq("a5")));
        assert!(attacks(&b, a1, PieceKind::Rook, Color::White, sq("d1")));
        assert!(!attacks(&b, a1, PieceKind::Rook, Color::White, sq("f1")));
        assert!(!attacks(&b, a1, PieceKind::Rook, Color::White, sq("b2")));
        assert!(attacks(&b, a1, PieceKind::Bishop, Color::White, sq("g7")));
        assert!(!attacks(&b, a1, PieceKind::Bishop, Color::White, a1));
        assert!(attacks(&b, a1, PieceKind::Queen, Color::White, sq("h8")));
        assert!(!attacks(&b, a1, PieceKind::Queen, Color::White, sq("b3")));
    }

    #[test]
    fn test_square_attacked_by() {
        let b = board("4k3/8/8/8/8/8/8/R3K3");
        assert!(square_attacked_by(&b, sq("a8"), Color::White));
        assert!(square_attacked_by(&b, sq("d8"), Color::Black));
        assert!(!square_attacked_by(&b, sq("c5"), Color::Black));
    }
}
