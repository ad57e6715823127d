//! Universal Chess Interface (UCI) subset.
//!
//! Lets a GUI or a parent process drive the fallback engine over
//! stdin/stdout. Only what a one-shot move recommender needs is supported.
//!
//! ## Supported Commands
//!
//! - `uci` - Identify the engine, answer `uciok`
//! - `isready` - Answer `readyok`
//! - `ucinewgame` - Reset to the start position
//! - `position startpos|fen <FEN> [moves <m1> <m2> ...]` - Set the position
//! - `go [...]` - Analyze; search limits are accepted and ignored
//! - `d` - Print the current board
//! - `quit` - Exit the loop
//!
//! ## Example
//!
//! ```ignore
//! use fallback_chess::uci::UciEngine;
//! let mut engine = UciEngine::new();
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use crate::board::Move;
use crate::error::{PositionError, PositionResult};
use crate::events::LogSink;
use crate::position::Position;
use crate::rules::{is_checkmate, legal_moves};
use crate::search::{Engine, Outcome};

/// Protocol state: the engine and the position set by the last `position`.
pub struct UciEngine {
    engine: Engine,
    pos: Position,
}

impl Default for UciEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl UciEngine {
    pub fn new() -> Self {
        Self::with_engine(Engine::default())
    }

    pub fn with_engine(engine: Engine) -> Self {
        Self {
            engine,
            pos: Position::startpos(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    /// Run the command loop on stdin/stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the command loop on arbitrary streams until `quit` or EOF.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            let command = parts[0];
            let args = &parts[1..];

            if command == "quit" {
                break;
            }
            for reply in self.execute(command, args) {
                writeln!(output, "{reply}")?;
            }
            output.flush()?;
        }
        Ok(())
    }

    /// Execute one command and return the reply lines.
    fn execute(&mut self, command: &str, args: &[&str]) -> Vec<String> {
        match command {
            "uci" => vec![
                format!("id name fallback-chess {}", env!("CARGO_PKG_VERSION")),
                "uciok".to_string(),
            ],

            "isready" => vec!["readyok".to_string()],

            "ucinewgame" => {
                self.pos = Position::startpos();
                Vec::new()
            }

            "position" => match parse_position(args) {
                Ok(pos) => {
                    self.pos = pos;
                    Vec::new()
                }
                Err(e) => {
                    log::warn!("rejected position: {e}");
                    vec![format!("info string {e}")]
                }
            },

            "go" => self.go(),

            "d" => {
                let mut lines: Vec<String> =
                    self.pos.board.to_string().lines().map(String::from).collect();
                lines.push(format!("Fen: {}", self.pos.to_fen()));
                lines
            }

            _ => vec![format!("info string unknown command: {command}")],
        }
    }

    fn go(&self) -> Vec<String> {
        let analysis = self.engine.analyze(&self.pos, &mut LogSink);
        let mut out = vec![format!(
            "info string {} {}",
            analysis.outcome.name(),
            analysis.phase.name()
        )];
        match analysis.best {
            Some(mv) => {
                let after = self.pos.board.apply(mv);
                let score = if is_checkmate(&after, self.pos.side_to_move.opponent()) {
                    "mate 1".to_string()
                } else {
                    format!("cp {}", (analysis.display_score() * 100.0).round() as i32)
                };
                out.push(format!("info depth 1 score {score} pv {mv}"));
                out.push(format!("bestmove {mv}"));
            }
            None => {
                debug_assert_eq!(analysis.outcome, Outcome::NoLegalMoves);
                out.push("bestmove 0000".to_string());
            }
        }
        out
    }
}

/// Parse the arguments of a `position` command.
///
/// Every listed move must be legal in the position it is played from.
fn parse_position(args: &[&str]) -> PositionResult<Position> {
    let moves_at = args.iter().position(|&a| a == "moves").unwrap_or(args.len());
    let (setup, moves) = args.split_at(moves_at);

    let mut pos = match setup.split_first() {
        Some((&"startpos", _)) => Position::startpos(),
        Some((&"fen", fen)) => Position::from_fen(&fen.join(" "))?,
        _ => return Err(PositionError::Empty),
    };

    for token in moves.iter().skip(1) {
        let mv: Move = token.parse()?;
        if !legal_moves(&pos.board, pos.side_to_move).contains(&mv) {
            return Err(PositionError::InvalidMove(token.to_string()));
        }
        pos = pos.play(mv);
    }
    Ok(pos)
}
