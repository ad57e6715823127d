//! Single-move heuristic evaluation.
//!
//! A candidate move is scored by applying it to a copy of the board and
//! combining five groups of terms:
//!
//! 1. Exchange estimate for captures (one-ply, single square)
//! 2. Positional delta (material, centralization, pawn advancement)
//! 3. Strategic bonuses (center, development, exposure)
//! 4. Queen-safety veto, which replaces the whole score
//! 5. Tactical bonuses (fork, check, checkmate), skipped on veto
//!
//! All scores are relative to the side making the move.

use crate::attacks::{attacks, square_attacked_by};
use crate::board::{Board, Color, Move, Piece, PieceKind, Square};
use crate::constants::*;
use crate::rules::{is_checkmate, is_in_check};

/// Breakdown of a move's score.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub exchange: i32,
    pub positional: i32,
    pub strategic: i32,
    pub tactical: i32,
    /// The queen-safety veto fired; `total()` is the sentinel.
    pub vetoed: bool,
}

impl Evaluation {
    #[inline]
    pub fn total(&self) -> i32 {
        if self.vetoed {
            QUEEN_LOSS_SCORE
        } else {
            self.exchange + self.positional + self.strategic + self.tactical
        }
    }
}

/// Score `mv` for `side`. See [`evaluate_move`] for the breakdown.
pub fn score_move(board: &Board, mv: Move, side: Color) -> i32 {
    evaluate_move(board, mv, side).total()
}

/// Evaluate `mv` for `side` and return every term separately.
///
/// A move from an empty square or of an opposing piece scores zero.
pub fn evaluate_move(board: &Board, mv: Move, side: Color) -> Evaluation {
    let piece = match board.get(mv.from) {
        Some(p) if p.color == side => p,
        _ => return Evaluation::default(),
    };
    let opponent = side.opponent();
    let after = board.apply(mv);

    let captured = board
        .get(mv.to)
        .filter(|p| p.color == opponent)
        .map(|p| p.kind);
    let captured_value = captured.map_or(0, PieceKind::value);
    let destination_attacked = square_attacked_by(&after, mv.to, opponent);

    let mut eval = Evaluation {
        exchange: exchange_estimate(piece.kind, captured, destination_attacked),
        positional: static_eval(&after, side) - static_eval(board, side),
        strategic: strategic_bonus(mv, piece, destination_attacked),
        tactical: 0,
        vetoed: false,
    };

    if piece.kind == PieceKind::Queen && destination_attacked && captured_value < QUEEN_VALUE {
        eval.vetoed = true;
        return eval;
    }

    eval.tactical = tactical_bonus(board, &after, mv, piece);
    eval
}

/// One-ply estimate of what a capture nets if the capturing piece is taken
/// back on the same square.
fn exchange_estimate(mover: PieceKind, captured: Option<PieceKind>, defended: bool) -> i32 {
    let Some(victim) = captured else {
        return 0;
    };
    let gained = victim.value();
    if !defended {
        return gained + FREE_CAPTURE_BONUS;
    }

    let risked = mover.value();
    let trade = if risked > gained {
        -(risked - gained) * BAD_TRADE_NUM / BAD_TRADE_DEN
    } else if risked == gained {
        EVEN_TRADE_BONUS
    } else {
        WINNING_TRADE_BONUS
    };
    gained + trade
}

/// Material and placement of every piece, positive for `side`.
pub fn static_eval(board: &Board, side: Color) -> i32 {
    board
        .pieces()
        .map(|(sq, p)| {
            let v = piece_square_value(sq, p);
            if p.color == side { v } else { -v }
        })
        .sum()
}

fn piece_square_value(sq: Square, p: Piece) -> i32 {
    let centrality = CENTRALIZATION_BASE - sq.center_distance();
    match p.kind {
        PieceKind::King => -centrality * KING_CENTRALIZATION_WEIGHT,
        PieceKind::Pawn => {
            p.kind.value() + centrality * CENTRALIZATION_WEIGHT + pawn_progress(sq, p.color) * PAWN_ADVANCE_BONUS
        }
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            p.kind.value() + centrality * CENTRALIZATION_WEIGHT
        }
    }
}

/// Ranks a pawn has advanced from its starting rank.
fn pawn_progress(sq: Square, color: Color) -> i32 {
    match color {
        Color::White => WHITE_PAWN_ROW.saturating_sub(sq.row()) as i32,
        Color::Black => sq.row().saturating_sub(BLACK_PAWN_ROW) as i32,
    }
}

/// True if `sq` is the original back-rank square of a knight or bishop of
/// `color`.
fn is_minor_home(sq: Square, p: Piece) -> bool {
    let back_row = match p.color {
        Color::White => WHITE_BACK_ROW,
        Color::Black => BLACK_BACK_ROW,
    };
    let home_cols: &[usize] = match p.kind {
        PieceKind::Knight => &[1, 6],
        PieceKind::Bishop => &[2, 5],
        _ => &[],
    };
    sq.row() == back_row && home_cols.contains(&sq.col())
}

fn strategic_bonus(mv: Move, piece: Piece, destination_attacked: bool) -> i32 {
    let mut bonus = 0;
    if mv.to.is_center() {
        bonus += CENTER_SQUARE_BONUS;
    }
    if is_minor_home(mv.from, piece) {
        bonus += DEVELOPMENT_BONUS;
    }
    if piece.kind == PieceKind::Pawn && (3..=4).contains(&mv.from.col()) {
        bonus += CENTER_PAWN_BONUS;
    }
    if matches!(piece.kind, PieceKind::Queen | PieceKind::Rook) && destination_attacked {
        bonus -= EXPOSURE_PENALTY;
    }
    bonus
}

fn tactical_bonus(before: &Board, after: &Board, mv: Move, piece: Piece) -> i32 {
    let opponent = piece.color.opponent();
    let mut bonus = 0;

    let forked = fork_targets(before, after, mv, piece);
    if forked >= FORK_MIN_TARGETS {
        bonus += FORK_BONUS * forked as i32;
    }

    if is_in_check(after, opponent) {
        bonus += CHECK_BONUS;
        if is_checkmate(after, opponent) {
            bonus += CHECKMATE_BONUS;
        }
    }
    bonus
}

/// Enemy knights, bishops, rooks and queens the moved piece attacks from its
/// destination but did not attack from its origin.
fn fork_targets(before: &Board, after: &Board, mv: Move, piece: Piece) -> usize {
    after
        .pieces_of(piece.color.opponent())
        .filter(|(_, target)| {
            matches!(
                target.kind,
                PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
            )
        })
        .filter(|&(sq, _)| {
            attacks(after, mv.to, piece.kind, piece.color, sq)
                && !attacks(before, mv.from, piece.kind, piece.color, sq)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(placement: &str) -> Board {
        Board::parse_placement(placement).unwrap()
    }

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[test]
    fn test_start_position_is_balanced() {
        let b = board("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
        assert_eq!(static_eval(&b, Color::White), 0);
        assert_eq!(static_eval(&b, Color::Black), 0);
    }

    #[test]
    fn test_free_capture() {
        // White rook a1 takes an undefended knight on a5.
        let b = board("7k/8/8/n7/8/8/8/R6K");
        let e = evaluate_move(&b, mv("a1a5"), Color::White);
        assert_eq!(e.exchange, KNIGHT_VALUE + FREE_CAPTURE_BONUS);
        assert!(!e.vetoed);
    }

    #[test]
    fn test_defended_captures() {
        // Pawn takes a knight on a5 that a pawn on b6 defends.
        let b = board("7k/8/1p6/n7/1P6/8/8/7K");
        let e = evaluate_move(&b, mv("b4a5"), Color::White);
        assert_eq!(e.exchange, KNIGHT_VALUE + WINNING_TRADE_BONUS);

        // Rook takes a pawn on a5 defended by a rook on a8.
        let b = board("r6k/8/8/p7/8/8/8/R6K");
        let e = evaluate_move(&b, mv("a1a5"), Color::White);
        assert_eq!(
            e.exchange,
            PAWN_VALUE - (ROOK_VALUE - PAWN_VALUE) * BAD_TRADE_NUM / BAD_TRADE_DEN
        );
        assert!(e.strategic <= -EXPOSURE_PENALTY);
    }

    #[test]
    fn test_piece_for_pawn_is_a_bad_trade() {
        // The pawn on d5 is defended by the pawn on c6.
        let knight = board("4k3/8/2p5/3p4/8/4N3/8/4K3");
        let nxp = evaluate_move(&knight, mv("e3d5"), Color::White);
        assert_eq!(
            nxp.exchange,
            PAWN_VALUE - (KNIGHT_VALUE - PAWN_VALUE) * BAD_TRADE_NUM / BAD_TRADE_DEN
        );
        assert!(nxp.exchange < 0);

        let rook = board("4k3/8/2p5/3p4/8/8/8/3RK3");
        let rxp = evaluate_move(&rook, mv("d1d5"), Color::White);
        assert!(rxp.exchange < nxp.exchange);

        let pawn = board("4k3/8/2p5/3p4/4P3/8/8/4K3");
        let pxp = evaluate_move(&pawn, mv("e4d5"), Color::White);
        assert_eq!(pxp.exchange, PAWN_VALUE + EVEN_TRADE_BONUS);
        assert!(nxp.exchange < pxp.exchange);
    }

    #[test]
    fn test_queen_veto() {
        // Queen d1 takes pawn d5, defended by the rook on d8.
        let b = board("3r3k/p7/8/3p4/8/8/7P/K2Q4");
        let e = evaluate_move(&b, mv("d1d5"), Color::White);
        assert!(e.vetoed);
        assert_eq!(e.total(), QUEEN_LOSS_SCORE);
        assert_eq!(e.tactical, 0);
        assert_eq!(score_move(&b, mv("d1d5"), Color::White), QUEEN_LOSS_SCORE);
    }

    #[test]
    fn test_queen_trade_is_not_vetoed() {
        // Queen takes queen on d5, recaptured by the rook on d8.
        let b = board("3r3k/8/8/3q4/8/8/8/K2Q4");
        let e = evaluate_move(&b, mv("d1d5"), Color::White);
        assert!(!e.vetoed);
        assert_eq!(e.exchange, QUEEN_VALUE + EVEN_TRADE_BONUS);
    }

    #[test]
    fn test_fork_bonus() {
        // Knight e3-d5 hits the rooks on b6 and f4.
        let b = board("7k/8/1r6/8/5r2/4N3/8/K7");
        let fork = evaluate_move(&b, mv("e3d5"), Color::White);
        assert_eq!(fork.tactical, 2 * FORK_BONUS);

        let quiet = evaluate_move(&b, mv("e3c2"), Color::White);
        assert_eq!(quiet.tactical, 0);
        assert!(fork.total() > quiet.total());
    }

    #[test]
    fn test_check_and_mate_bonus() {
        // Rook a1-a8 mates the king boxed in on h8 by its pawns.
        let b = board("7k/6pp/8/8/8/8/8/R5K1");
        let e = evaluate_move(&b, mv("a1a8"), Color::White);
        assert_eq!(e.tactical, CHECK_BONUS + CHECKMATE_BONUS);

        // Without the pawns the king escapes to g7 or h7.
        let b = board("7k/8/8/8/8/8/8/R5K1");
        let e = evaluate_move(&b, mv("a1a8"), Color::White);
        assert_eq!(e.tactical, CHECK_BONUS);
    }

    #[test]
    fn test_development_and_center() {
        let b = board("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
        let knight = evaluate_move(&b, mv("g1f3"), Color::White);
        assert_eq!(knight.strategic, DEVELOPMENT_BONUS);

        let pawn = evaluate_move(&b, mv("e2e4"), Color::White);
        assert_eq!(pawn.strategic, CENTER_SQUARE_BONUS + CENTER_PAWN_BONUS);

        let rim = evaluate_move(&b, mv("a2a3"), Color::White);
        assert_eq!(rim.strategic, 0);
        assert!(pawn.total() > rim.total());
    }

    #[test]
    fn test_king_prefers_the_edge() {
        let b = board("7k/8/8/8/8/8/8/4K3");
        let toward_center = evaluate_move(&b, mv("e1e2"), Color::White);
        let along_edge = evaluate_move(&b, mv("e1f1"), Color::White);
        assert!(toward_center.positional < along_edge.positional);
    }

    #[test]
    fn test_empty_origin_scores_zero() {
        let b = board("7k/8/8/8/8/8/8/4K3");
        assert_eq!(evaluate_move(&b, mv("a1a2"), Color::White), Evaluation::default());
    }
}
