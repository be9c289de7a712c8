//! Autoplay CLI
//!
//! Text harness for watching the automated players. Prints boards to stdout;
//! diagnostics go through `tracing` (set `RUST_LOG=debug` for per-turn logs).

use std::env;
use std::path::Path;
use std::process::ExitCode;

use autoplay::{AutoplayConfig, GameOutcome, GameRunner, StrategyKind, TurnDriver};
use chess_core::{Board, Color};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("ML-chess Autoplay");
    println!();
    println!("Usage:");
    println!("  autoplay play [--config FILE] [--white S] [--black S] [--max-plies N]");
    println!("                [--seed N] [--sequential] [--show-board]");
    println!("  autoplay turn <placement> [--strategy S] [--seed N]");
    println!();
    println!("Strategies:");
    println!("  lookahead     - One-ply material lookahead");
    println!("  greedy        - Highest-value capture, else random");
    println!();
    println!("Examples:");
    println!("  autoplay play --white lookahead --black greedy --seed 7");
    println!("  autoplay turn \"4k3/8/8/3q4/8/8/8/3RK3 w\" --strategy greedy");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Value following a flag, or an error naming the flag.
fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} needs a value"))
}

fn parse_num<T: std::str::FromStr>(text: &str, flag: &str) -> Result<T, String> {
    text.parse()
        .map_err(|_| format!("{flag}: not a number: {text}"))
}

fn run_play(args: &[String]) -> Result<(), String> {
    // A config file, if given, is loaded first; flags override it.
    let mut config = match args.iter().position(|a| a == "--config" || a == "-c") {
        Some(i) => {
            let path = flag_value(args, i, "--config")?;
            AutoplayConfig::load(Path::new(path)).map_err(|e| e.to_string())?
        }
        None => AutoplayConfig::default(),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => i += 1,
            "--white" | "-w" => {
                config.white = flag_value(args, i, "--white")?
                    .parse::<StrategyKind>()
                    .map_err(|e| e.to_string())?;
                i += 1;
            }
            "--black" | "-b" => {
                config.black = flag_value(args, i, "--black")?
                    .parse::<StrategyKind>()
                    .map_err(|e| e.to_string())?;
                i += 1;
            }
            "--max-plies" | "-n" => {
                config.max_plies = parse_num(flag_value(args, i, "--max-plies")?, "--max-plies")?;
                i += 1;
            }
            "--seed" | "-s" => {
                config.seed = Some(parse_num(flag_value(args, i, "--seed")?, "--seed")?);
                i += 1;
            }
            "--sequential" => config.parallel = false,
            "--show-board" => config.show_board = true,
            other => warn!(arg = other, "ignoring unknown argument"),
        }
        i += 1;
    }

    println!("=== Game: {} (white) vs {} (black) ===", config.white, config.black);
    println!(
        "Max plies: {}, parallel collection: {}",
        config.max_plies, config.parallel
    );
    println!();

    let mut white = TurnDriver::new(config.white.build(config.seed_for(Color::White)))
        .with_parallel(config.parallel);
    let mut black = TurnDriver::new(config.black.build(config.seed_for(Color::Black)))
        .with_parallel(config.parallel);

    let runner = GameRunner::new(config.max_plies);
    let show_board = config.show_board;
    let record = runner
        .play_from(Board::new(), &mut white, &mut black, |board, mv| {
            if show_board {
                println!("{mv}");
                println!("{board}");
            }
        })
        .map_err(|e| e.to_string())?;

    let moves: Vec<String> = record.moves.iter().map(ToString::to_string).collect();
    println!("Moves: {}", moves.join(" "));
    println!();
    println!("{}", record.final_board);
    match record.outcome {
        GameOutcome::Checkmate { winner } => println!("Checkmate, {winner} wins"),
        GameOutcome::KingCaptured { winner } => println!("King captured, {winner} wins"),
        GameOutcome::NoMoves { side } => println!("{side} has no moves"),
        GameOutcome::MoveLimit => println!("Stopped after {} plies", record.moves.len()),
    }
    Ok(())
}

fn run_turn(args: &[String]) -> Result<(), String> {
    let placement = args
        .first()
        .ok_or_else(|| "turn requires a placement".to_string())?;
    let mut board = Board::from_placement(placement).map_err(|e| e.to_string())?;

    let mut kind = StrategyKind::Lookahead;
    let mut seed = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--strategy" | "-S" => {
                kind = flag_value(args, i, "--strategy")?
                    .parse::<StrategyKind>()
                    .map_err(|e| e.to_string())?;
                i += 1;
            }
            "--seed" | "-s" => {
                seed = Some(parse_num(flag_value(args, i, "--seed")?, "--seed")?);
                i += 1;
            }
            other => warn!(arg = other, "ignoring unknown argument"),
        }
        i += 1;
    }

    let mut driver = TurnDriver::new(kind.build(seed));
    let mv = driver.play_turn(&mut board).map_err(|e| e.to_string())?;
    println!("{} plays {mv}", driver.strategy_name());
    println!();
    println!("{board}");
    if board.is_checkmate() {
        println!("Checkmate");
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let result = match args[1].as_str() {
        "play" => run_play(&args[2..]),
        "turn" => run_turn(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(format!("unknown command: {other}")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
