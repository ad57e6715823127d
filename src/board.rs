//! 8x8 board representation.
//!
//! The board is a plain `Copy` grid of optional pieces. Rows run top to
//! bottom (row 0 = rank 8) and columns left to right (column 0 = file a),
//! matching the order in which a FEN placement string lists squares.
//!
//! Nothing here mutates a board that the caller still holds: [`Board::apply`]
//! returns a new value, so candidate moves can never corrupt the source.

use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::error::{PositionError, PositionResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn advance for this color.
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value on the pawn = 100 scale.
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => PAWN_VALUE,
            PieceKind::Knight => KNIGHT_VALUE,
            PieceKind::Bishop => BISHOP_VALUE,
            PieceKind::Rook => ROOK_VALUE,
            PieceKind::Queen => QUEEN_VALUE,
            PieceKind::King => KING_VALUE,
        }
    }

    fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Parse a FEN piece letter; upper case is White.
    pub fn from_char(c: char) -> Option<Piece> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    pub fn to_char(self) -> char {
        let c = self.kind.letter();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

/// A square on the board, stored as (row, column).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square from row (0 = rank 8) and column (0 = file a).
    ///
    /// Returns `None` when either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Square> {
        (row < N && col < N).then(|| Square {
            row: row as u8,
            col: col as u8,
        })
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Rank number 1..=8.
    #[inline]
    pub fn rank(self) -> usize {
        N - self.row()
    }

    /// Step by a (row, column) delta, or `None` if that leaves the board.
    #[inline]
    pub fn offset(self, drow: i8, dcol: i8) -> Option<Square> {
        let row = self.row as i8 + drow;
        let col = self.col as i8 + dcol;
        if (0..N as i8).contains(&row) && (0..N as i8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares in placement order (a8, b8, ..., h1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARDSIZE).map(|i| Square {
            row: (i / N) as u8,
            col: (i % N) as u8,
        })
    }

    /// Manhattan distance to the nearest of d4, e4, d5, e5 (0..=6).
    pub fn center_distance(self) -> i32 {
        let axis = |v: usize| if v < N / 2 { N / 2 - 1 - v } else { v - N / 2 };
        (axis(self.row()) + axis(self.col())) as i32
    }

    /// True for d4, e4, d5 and e5.
    #[inline]
    pub fn is_center(self) -> bool {
        self.center_distance() == 0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        write!(f, "{file}{}", self.rank())
    }
}

impl FromStr for Square {
    type Err = PositionError;

    fn from_str(s: &str) -> PositionResult<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(PositionError::InvalidMove(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(PositionError::InvalidMove(s.to_string()));
        }
        let col = (file - b'a') as usize;
        let row = N - (rank - b'0') as usize;
        Square::new(row, col).ok_or_else(|| PositionError::InvalidMove(s.to_string()))
    }
}

/// An ordered (from, to) pair. Special moves are never produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = PositionError;

    /// Parse coordinate notation such as `e2e4`. A trailing promotion letter
    /// (`q`, `r`, `b` or `n`) is accepted and ignored since pawns never
    /// promote here.
    fn from_str(s: &str) -> PositionResult<Move> {
        let s = s.trim();
        if !(4..=5).contains(&s.len()) || !s.is_ascii() {
            return Err(PositionError::InvalidMove(s.to_string()));
        }
        if s.len() == 5 && !matches!(s.as_bytes()[4], b'q' | b'r' | b'b' | b'n') {
            return Err(PositionError::InvalidMove(s.to_string()));
        }
        let from: Square = s[0..2]
            .parse()
            .map_err(|_| PositionError::InvalidMove(s.to_string()))?;
        let to: Square = s[2..4]
            .parse()
            .map_err(|_| PositionError::InvalidMove(s.to_string()))?;
        Ok(Move::new(from, to))
    }
}

/// The 8x8 grid of square contents.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; N]; N],
        }
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row()][sq.col()]
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Return a copy of this board with `sq` set to `piece`.
    pub fn with(mut self, sq: Square, piece: Option<Piece>) -> Board {
        self.cells[sq.row()][sq.col()] = piece;
        self
    }

    /// Return the board after `mv`; the moving piece replaces whatever stood
    /// on the destination. `self` is left untouched.
    pub fn apply(&self, mv: Move) -> Board {
        let mut next = *self;
        let piece = next.cells[mv.from.row()][mv.from.col()].take();
        next.cells[mv.to.row()][mv.to.col()] = piece;
        next
    }

    /// Every occupied square with its piece, in placement order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Occupied squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Square of `color`'s king, if it has one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces().find(|&(_, p)| p == king).map(|(sq, _)| sq)
    }

    /// Parse the placement field of a FEN string.
    ///
    /// Rejects anything that does not describe exactly 8 ranks of 8 squares,
    /// unknown characters, and boards without exactly one king per color.
    pub fn parse_placement(text: &str) -> PositionResult<Board> {
        let ranks: Vec<&str> = text.trim().split('/').collect();
        if ranks.len() != N {
            return Err(PositionError::RankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(PositionError::InvalidChar(c));
                    }
                    col += run as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(PositionError::InvalidChar(c))?;
                    if col < N {
                        board.cells[row][col] = Some(piece);
                    }
                    col += 1;
                }
            }
            if col != N {
                return Err(PositionError::RankWidth {
                    rank: N - row,
                    squares: col,
                });
            }
        }

        for color in [Color::White, Color::Black] {
            let king = Piece::new(PieceKind::King, color);
            let count = board.pieces().filter(|&(_, p)| p == king).count();
            if count != 1 {
                return Err(PositionError::KingCount {
                    color: color.name(),
                    count,
                });
            }
        }
        Ok(board)
    }

    /// Serialize back to a canonical FEN placement string.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in 0..N {
            let mut empty = 0;
            for col in 0..N {
                match self.cells[row][col] {
                    Some(p) => {
                        if empty > 0 {
                            out.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        out.push(p.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push(char::from(b'0' + empty));
            }
            if row + 1 < N {
                out.push('/');
            }
        }
        out
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.placement())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            write!(f, "{} ", N - row)?;
            for col in 0..N {
                let ch = self.cells[row][col].map_or('.', Piece::to_char);
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}
