//! Terminal chess
//!
//! Play against one of the bundled engines from the terminal. Moves are
//! typed as coordinate pairs ("e2e4"); the engine replies under a
//! wall-clock budget taken from the config file.

mod config;

#[cfg(test)]
#[path = "main_tests.rs"]
mod main_tests;

use chesskit_core::{
    Engine, Game, GameStatus, MoveOutcome, Piece, PieceKind, SearchLimits, Side, Square,
};
use config::CliConfig;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use std::env;
use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Duration;

fn print_usage() {
    println!("chesskit - play chess in the terminal");
    println!();
    println!("Usage:");
    println!("  chesskit [--config FILE] [--fen FEN]");
    println!();
    println!("Config keys (TOML, all optional):");
    println!("  human_side    = \"white\" | \"black\"");
    println!("  engine        = \"minimax\" | \"random\"");
    println!("  think_time_ms = milliseconds per engine move");
    println!("  fen           = starting position");
    println!();
    println!("In-game commands:");
    println!("  e2e4          - move the piece on e2 to e4");
    println!("  moves e2      - list legal destinations for e2");
    println!("  quit          - resign and exit");
}

fn create_engine(spec: &str) -> Box<dyn Engine> {
    match spec.to_lowercase().as_str() {
        "minimax" => Box::new(MinimaxEngine::new()),
        "random" => Box::new(RandomEngine::new()),
        _ => {
            eprintln!("Unknown engine: {}, using minimax", spec);
            Box::new(MinimaxEngine::new())
        }
    }
}

fn piece_char(pc: Piece) -> char {
    let c = match pc.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match pc.side {
        Side::White => c.to_ascii_uppercase(),
        Side::Black => c,
    }
}

/// Print the board from the human's point of view.
fn print_board(game: &Game, human: Side) {
    let ranks: Vec<i8> = match human {
        Side::White => (0..8).rev().collect(),
        Side::Black => (0..8).collect(),
    };
    println!();
    for rank in ranks {
        print!("  {} ", rank + 1);
        for f in 0..8 {
            let file = if human == Side::White { f } else { 7 - f };
            let sq = Square::new(file, rank).unwrap();
            match game.position().piece_at(sq) {
                Some(pc) => print!(" {}", piece_char(pc)),
                None => print!(" ."),
            }
        }
        println!();
    }
    print!("    ");
    for f in 0..8 {
        let file = if human == Side::White { f } else { 7 - f };
        print!(" {}", (b'a' + file as u8) as char);
    }
    println!();
    println!();
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::White => "White",
        Side::Black => "Black",
    }
}

fn announce(outcome: &MoveOutcome) {
    if let Some(taken) = outcome.captured {
        println!("  captured {:?}", taken.kind);
    }
    if let Some((from, to)) = outcome.rook_move {
        println!("  castled (rook {} -> {})", from, to);
    }
    if let Some(sq) = outcome.en_passant_capture {
        println!("  en passant, pawn removed from {}", sq);
    }
    match outcome.status {
        GameStatus::Check => println!("  check!"),
        GameStatus::Checkmate(winner) => println!("Checkmate. {} wins.", side_name(winner)),
        GameStatus::Stalemate => println!("Stalemate. Draw."),
        GameStatus::InProgress => {}
    }
}

/// Parse a coordinate pair like "e2e4". The byte-boundary check keeps
/// multibyte input (say "aé4") from splitting mid-character.
fn parse_move(input: &str) -> Option<(Square, Square)> {
    if input.len() != 4 || !input.is_char_boundary(2) {
        return None;
    }
    let (from, to) = input.split_at(2);
    Some((Square::from_coord(from)?, Square::from_coord(to)?))
}

/// Read one human command. Returns the move to try, or None to quit.
fn read_human_move(game: &Game) -> Option<(Square, Square)> {
    let stdin = std::io::stdin();
    loop {
        print!("{} to move> ", side_name(game.side_to_move()));
        std::io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            return None;
        }
        let input = line.trim();

        match input {
            "" => continue,
            "quit" | "exit" | "resign" => return None,
            "help" => {
                print_usage();
                continue;
            }
            _ => {}
        }

        if let Some(coord) = input.strip_prefix("moves ") {
            match Square::from_coord(coord.trim()) {
                Some(sq) => {
                    let dests = game.select(sq);
                    if dests.is_empty() {
                        println!("No moves from {}", sq);
                    } else {
                        let list: Vec<String> = dests.iter().map(|d| d.to_string()).collect();
                        println!("{}: {}", sq, list.join(" "));
                    }
                }
                None => println!("Not a square: {}", coord),
            }
            continue;
        }

        if let Some(pair) = parse_move(input) {
            return Some(pair);
        }
        println!("Could not read '{}'. Type moves like e2e4, or 'help'.", input);
    }
}

fn run_game(config: &CliConfig) -> Result<(), String> {
    let human = config.human_side()?;
    let mut engine = create_engine(&config.engine);
    let limits = SearchLimits::time(Duration::from_millis(config.think_time_ms));

    let mut game = match &config.fen {
        Some(fen) => Game::from_fen(fen).map_err(|e| format!("Bad FEN: {}", e))?,
        None => Game::new(),
    };

    println!("Playing {} against {}", side_name(human), engine.name());
    engine.new_game();

    loop {
        print_board(&game, human);
        if game.is_over() {
            break;
        }

        if game.side_to_move() == human {
            let Some((from, to)) = read_human_move(&game) else {
                println!("Goodbye.");
                return Ok(());
            };
            match game.try_move(from, to) {
                Ok(outcome) => announce(&outcome),
                Err(e) => println!("Rejected: {}", e),
            }
        } else {
            let result = engine.search(game.position(), limits.clone());
            let Some(mv) = result.best_move else {
                break;
            };
            println!(
                "{} plays {} (depth {}, {} nodes{})",
                engine.name(),
                mv,
                result.depth,
                result.nodes,
                if result.stopped { ", out of time" } else { "" }
            );
            let outcome = game
                .apply_legal(mv)
                .map_err(|e| format!("Engine move rejected: {}", e))?;
            announce(&outcome);
        }
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 >= args.len() {
                    eprintln!("--config needs a file path");
                    std::process::exit(1);
                }
                config = match CliConfig::load(Path::new(&args[i + 1])) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("{}", e);
                        std::process::exit(1);
                    }
                };
                i += 1;
            }
            "--fen" => {
                if i + 1 >= args.len() {
                    eprintln!("--fen needs a position");
                    std::process::exit(1);
                }
                config.fen = Some(args[i + 1].clone());
                i += 1;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if let Err(e) = run_game(&config) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
