//! Fallback-Chess: a local heuristic move recommender.
//!
//! When no external evaluation service is reachable, this crate picks a move
//! and a bounded score from the position alone: a one-ply heuristic ranking
//! of every legal move, with an opening-book shortcut in front.
//!
//! ## Modules
//!
//! - [`constants`] - Material values and scoring weights
//! - [`board`] - 8x8 board, pieces, squares, moves, placement parsing
//! - [`position`] - Board plus side to move, FEN front-end
//! - [`attacks`] - Attack oracle
//! - [`movegen`] - Pseudo-legal move generation
//! - [`rules`] - Check, legality, checkmate, game phase
//! - [`eval`] - Single-move evaluator
//! - [`search`] - Move ranker and [`Engine`]
//! - [`book`] - Opening shortcut
//! - [`events`] - Diagnostic event sinks
//! - [`uci`] - UCI protocol subset
//!
//! ## Example
//!
//! ```
//! use fallback_chess::events::NullSink;
//! use fallback_chess::position::Position;
//! use fallback_chess::search::{Engine, Outcome};
//!
//! let pos = Position::from_fen("6k1/5ppp/8/3q4/8/8/5PPP/3R2K1 w - - 0 1").unwrap();
//! let analysis = Engine::default().analyze(&pos, &mut NullSink);
//! assert_eq!(analysis.outcome, Outcome::Generated);
//! println!("best {} ({:+.2})", analysis.best.unwrap(), analysis.display_score());
//! ```

pub mod attacks;
pub mod board;
pub mod book;
pub mod constants;
pub mod error;
pub mod eval;
pub mod events;
pub mod movegen;
pub mod position;
pub mod rules;
pub mod search;
pub mod uci;

pub use error::{PositionError, PositionResult};
pub use search::Engine;
