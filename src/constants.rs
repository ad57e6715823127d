//! Constants for board geometry, material values, and scoring weights.
//!
//! This module contains all the tuning constants for the heuristic engine.
//! Scores are integers on a material scale where a pawn is worth 100.
//!
//! Every weight is mover-relative: positive numbers favour the side that
//! plays the move being scored.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (8x8).
pub const N: usize = 8;

/// Number of squares on the board.
pub const BOARDSIZE: usize = N * N;

/// Row index (0 = rank 8) of White's back rank.
pub const WHITE_BACK_ROW: usize = 7;

/// Row index (0 = rank 8) of Black's back rank.
pub const BLACK_BACK_ROW: usize = 0;

/// Row index White's pawns start on (rank 2).
pub const WHITE_PAWN_ROW: usize = 6;

/// Row index Black's pawns start on (rank 7).
pub const BLACK_PAWN_ROW: usize = 1;

// =============================================================================
// Material Values
// =============================================================================

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;

/// Kings are never captured, so they carry no material in the static sum.
pub const KING_VALUE: i32 = 0;

// =============================================================================
// Exchange Estimate
// =============================================================================

/// Numerator/denominator of the bad-trade penalty (0.8 x value lost).
pub const BAD_TRADE_NUM: i32 = 4;
pub const BAD_TRADE_DEN: i32 = 5;

/// Bonus for a capture recaptured by a piece of equal value.
pub const EVEN_TRADE_BONUS: i32 = 10;

/// Bonus for a capture recaptured only by a cheaper piece.
pub const WINNING_TRADE_BONUS: i32 = 40;

/// Bonus for capturing onto a square the opponent does not attack.
pub const FREE_CAPTURE_BONUS: i32 = 60;

// =============================================================================
// Positional Terms
// =============================================================================

/// Centralization weight for every piece except the king.
pub const CENTRALIZATION_WEIGHT: i32 = 2;

/// Centralization weight for the king (applied negatively).
pub const KING_CENTRALIZATION_WEIGHT: i32 = 10;

/// Largest centralization distance is 6, so `7 - d` is always positive.
pub const CENTRALIZATION_BASE: i32 = 7;

/// Bonus per rank a pawn has advanced from its starting rank.
pub const PAWN_ADVANCE_BONUS: i32 = 5;

// =============================================================================
// Strategic Bonuses
// =============================================================================

/// Moving onto d4, e4, d5 or e5.
pub const CENTER_SQUARE_BONUS: i32 = 30;

/// Moving a knight or bishop off its original back-rank square.
pub const DEVELOPMENT_BONUS: i32 = 25;

/// Advancing a d- or e-pawn.
pub const CENTER_PAWN_BONUS: i32 = 20;

/// Queen or rook landing on an attacked square. Must stay well below the
/// queen veto so the two never interact.
pub const EXPOSURE_PENALTY: i32 = 50;

// =============================================================================
// Tactical Bonuses
// =============================================================================

/// Minimum number of valuable pieces attacked for a move to count as a fork.
pub const FORK_MIN_TARGETS: usize = 2;

/// Bonus per forked piece.
pub const FORK_BONUS: i32 = 75;

/// Flat bonus for giving check.
pub const CHECK_BONUS: i32 = 50;

/// Bonus for delivering checkmate; dominates every other term.
pub const CHECKMATE_BONUS: i32 = 50_000;

// =============================================================================
// Sentinels and Presentation
// =============================================================================

/// Score assigned to a move that hangs the queen for too little.
pub const QUEEN_LOSS_SCORE: i32 = -100_000;

/// Score reported for a move taken from the opening book.
pub const BOOK_SCORE: i32 = 30;

/// Display scores are clamped to `[-DISPLAY_CLAMP, DISPLAY_CLAMP]` pawns.
pub const DISPLAY_CLAMP: f64 = 5.0;

/// Number of ranked moves kept as alternatives.
pub const ALTERNATIVES: usize = 3;

// =============================================================================
// Game Phase Thresholds
// =============================================================================

/// More pieces than this on the board counts as the opening.
pub const OPENING_MIN_PIECES: usize = 24;

/// Fewer pieces than this on the board counts as the endgame.
pub const ENDGAME_MAX_PIECES: usize = 12;
