//! Error types for position parsing.

/// Rejections raised at the board/position boundary.
///
/// Move generation and evaluation never fail; only the text that describes a
/// position or a move can be malformed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Placement does not have exactly eight ranks
    #[error("invalid position: expected 8 ranks, found {0}")]
    RankCount(usize),

    /// A rank does not describe exactly eight squares
    #[error("invalid position: rank {rank} covers {squares} squares")]
    RankWidth { rank: usize, squares: usize },

    /// Unknown character in the placement field
    #[error("invalid position: unexpected character '{0}'")]
    InvalidChar(char),

    /// A side does not have exactly one king
    #[error("invalid position: {color} has {count} kings")]
    KingCount { color: &'static str, count: usize },

    /// Active-color token other than `w` or `b`
    #[error("invalid position: unknown side to move '{0}'")]
    SideToMove(String),

    /// Empty FEN line
    #[error("invalid position: empty input")]
    Empty,

    /// Malformed square or move in coordinate notation
    #[error("invalid move: '{0}'")]
    InvalidMove(String),
}

/// Result type for position parsing.
pub type PositionResult<T> = Result<T, PositionError>;
