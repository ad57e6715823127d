//! Pseudo-legal move generation.
//!
//! Moves here obey each piece's movement pattern but may leave the mover's
//! own king attacked; [`crate::rules::legal_moves`] filters those out.
//! Castling, en-passant and promotion are never generated.

use crate::board::{Board, Color, Move, PieceKind, Square};
use crate::constants::{BLACK_PAWN_ROW, WHITE_PAWN_ROW};

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Pseudo-legal moves of the piece on `from`; empty if the square is empty.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Move> {
    let mut moves = Vec::new();
    let Some(piece) = board.get(from) else {
        return moves;
    };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color, &mut moves),
        PieceKind::Knight => step_moves(board, from, piece.color, &KNIGHT_STEPS, &mut moves),
        PieceKind::King => step_moves(board, from, piece.color, &KING_STEPS, &mut moves),
        PieceKind::Bishop => slide_moves(board, from, piece.color, &DIAGONALS, &mut moves),
        PieceKind::Rook => slide_moves(board, from, piece.color, &ORTHOGONALS, &mut moves),
        PieceKind::Queen => {
            slide_moves(board, from, piece.color, &DIAGONALS, &mut moves);
            slide_moves(board, from, piece.color, &ORTHOGONALS, &mut moves);
        }
    }
    moves
}

/// Pseudo-legal moves for every piece of `color`, scanning a8 to h1.
pub fn all_pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|(sq, _)| pseudo_legal_moves(board, sq))
        .collect()
}

/// True if `sq` is empty or holds a piece of the other color.
#[inline]
fn can_land(board: &Board, sq: Square, color: Color) -> bool {
    board.get(sq).is_none_or(|p| p.color != color)
}

fn pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    let fwd = color.forward();
    let start_row = match color {
        Color::White => WHITE_PAWN_ROW,
        Color::Black => BLACK_PAWN_ROW,
    };

    if let Some(one) = from.offset(fwd, 0).filter(|&sq| board.is_empty(sq)) {
        out.push(Move::new(from, one));
        if from.row() == start_row {
            if let Some(two) = one.offset(fwd, 0).filter(|&sq| board.is_empty(sq)) {
                out.push(Move::new(from, two));
            }
        }
    }

    for dcol in [-1, 1] {
        if let Some(target) = from.offset(fwd, dcol) {
            if board.get(target).is_some_and(|p| p.color != color) {
                out.push(Move::new(from, target));
            }
        }
    }
}

fn step_moves(board: &Board, from: Square, color: Color, steps: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in steps {
        if let Some(to) = from.offset(dr, dc) {
            if can_land(board, to, color) {
                out.push(Move::new(from, to));
            }
        }
    }
}

fn slide_moves(board: &Board, from: Square, color: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.get(to) {
                None => out.push(Move::new(from, to)),
                Some(p) => {
                    if p.color != color {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            cur = to.offset(dr, dc);
        }
    }
}
