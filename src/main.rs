//! Fallback-Chess: a local heuristic chess move recommender.
//!
//! ## Usage
//!
//! - `fallback-chess` - Show a demo
//! - `fallback-chess analyze <FEN>` - Recommend a move for a position
//! - `fallback-chess uci` - Start the UCI loop for GUI integration
//! - `fallback-chess demo` - Run the demo

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use fallback_chess::book::OpeningBook;
use fallback_chess::events::LogSink;
use fallback_chess::position::{Position, START_FEN};
use fallback_chess::search::{Analysis, Engine};
use fallback_chess::uci::UciEngine;

/// Fallback-Chess: local move recommendation without an engine service
#[derive(Parser)]
#[command(name = "fallback-chess")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Opening book file (one `<placement> <move>...` entry per line)
    #[arg(long, global = true, value_name = "FILE")]
    book: Option<PathBuf>,

    /// Never consult the opening book
    #[arg(long, global = true, conflicts_with = "book")]
    no_book: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a move for a FEN position
    Analyze {
        /// Position in FEN; fields after the active color are ignored
        fen: String,
        /// Pick randomly among the top candidates instead of the best one
        #[arg(long)]
        vary: bool,
        /// Seed for --vary
        #[arg(long, requires = "vary")]
        seed: Option<u64>,
    },
    /// Start the UCI loop for use with GUI applications
    Uci,
    /// Run a simple demo of the engine
    Demo,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let engine = build_engine(&cli)?;

    match cli.command {
        Some(Commands::Analyze { fen, vary, seed }) => run_analyze(&engine, &fen, vary, seed),
        Some(Commands::Uci) => UciEngine::with_engine(engine)
            .run()
            .context("UCI loop failed"),
        Some(Commands::Demo) | None => run_demo(&engine),
    }
}

fn build_engine(cli: &Cli) -> Result<Engine> {
    if cli.no_book {
        return Ok(Engine::without_book());
    }
    let book = match &cli.book {
        Some(path) => OpeningBook::load(path)
            .with_context(|| format!("failed to load opening book {}", path.display()))?,
        None => OpeningBook::standard(),
    };
    log::debug!("opening book with {} entries", book.len());
    Ok(Engine::new(book))
}

fn run_analyze(engine: &Engine, fen: &str, vary: bool, seed: Option<u64>) -> Result<()> {
    let pos = Position::from_fen(fen).with_context(|| format!("cannot analyze '{fen}'"))?;
    let analysis = engine.analyze(&pos, &mut LogSink);

    let chosen = if vary {
        let mut rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        analysis.varied_move(&mut rng)
    } else {
        analysis.best
    };

    match chosen {
        Some(mv) => println!("bestmove {mv}"),
        None => bail!("no legal moves for {}", pos.side_to_move.name()),
    }
    print_analysis(&analysis);
    Ok(())
}

fn print_analysis(analysis: &Analysis) {
    println!("eval     {:+.2}", analysis.display_score());
    println!("outcome  {}", analysis.outcome.name());
    println!("phase    {}", analysis.phase.name());
    for (i, alt) in analysis.alternatives.iter().enumerate() {
        println!("  {}. {} ({})", i + 1, alt.mv, alt.score);
    }
}

fn run_demo(engine: &Engine) -> Result<()> {
    println!("Fallback-Chess: local heuristic move recommender\n");

    println!("=== Start Position ===");
    let start = Position::from_fen(START_FEN)?;
    print!("{start}");
    print_analysis_with_move(&engine.analyze(&start, &mut LogSink));

    println!("\n=== Tactics Demo ===");
    // The knight on e3 can fork both black rooks from d5.
    let fork = Position::from_fen("7k/8/1r6/8/5r2/4N3/8/K7 w - - 0 1")?;
    print!("{fork}");
    print_analysis_with_move(&engine.analyze(&fork, &mut LogSink));
    Ok(())
}

fn print_analysis_with_move(analysis: &Analysis) {
    match analysis.best {
        Some(mv) => println!("Best move: {mv}"),
        None => println!("Best move: none"),
    }
    print_analysis(analysis);
}
