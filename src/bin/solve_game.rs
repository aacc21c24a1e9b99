//! Bimatrix game solver binary.
//!
//! Usage:
//!   cargo run --release --bin solve_game -- [OPTIONS]
//!
//! Options:
//!   --game <FILE>        Game JSON file: {"a": [[..]], "b": [[..]]}
//!   --builtin <NAME>     Classic game (matching-pennies, rock-paper-scissors, ...)
//!   --random <MxN>       Random game of the given shape
//!   --seed <N>           Seed for --random (default: 0)
//!   --tolerance <VALUE>  Feasibility / best-response tolerance
//!   --threads <N>        Number of threads for --parallel (default: auto)
//!   --parallel           Evaluate candidates on all threads
//!   --first              Stop after the first equilibrium
//!   --output <FILE>      Output file (default: equilibria.json)
//!
//! Set RUST_LOG=debug to see skipped candidates.

use std::env;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use bimatrix_solver::games::{classic, random};
use bimatrix_solver::support::{
    BimatrixGame, SolutionOutput, SolveStats, SupportEnumConfig, SupportEnumSolver,
};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let mut game_file: Option<String> = None;
    let mut builtin: Option<String> = None;
    let mut random_shape: Option<(usize, usize)> = None;
    let mut seed: u64 = 0;
    let mut tolerance: Option<f64> = None;
    let mut threads: usize = 0;
    let mut parallel = false;
    let mut first_only = false;
    let mut output_file = "equilibria.json".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--game" | "-g" => {
                i += 1;
                if i < args.len() {
                    game_file = Some(args[i].clone());
                }
            }
            "--builtin" | "-b" => {
                i += 1;
                if i < args.len() {
                    builtin = Some(args[i].clone());
                }
            }
            "--random" | "-r" => {
                i += 1;
                if i < args.len() {
                    random_shape = parse_shape(&args[i]);
                    if random_shape.is_none() {
                        eprintln!("Invalid shape: {} (expected MxN)", args[i]);
                        return;
                    }
                }
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or(0);
                }
            }
            "--tolerance" => {
                i += 1;
                if i < args.len() {
                    tolerance = args[i].parse().ok();
                }
            }
            "--threads" | "-t" => {
                i += 1;
                if i < args.len() {
                    threads = args[i].parse().unwrap_or(0);
                }
            }
            "--parallel" | "-p" => {
                parallel = true;
            }
            "--first" | "-f" => {
                first_only = true;
            }
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output_file = args[i].clone();
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                return;
            }
        }
        i += 1;
    }

    println!("=================================================");
    println!("  Support Enumeration Solver");
    println!("=================================================");
    println!();

    // Load or create the game
    let loaded = if let Some(path) = &game_file {
        println!("Loading game from: {}", path);
        BimatrixGame::from_json_file(path).map(|g| (g, path.clone()))
    } else if let Some(name) = &builtin {
        match classic::by_name(name) {
            Some(game) => game.map(|g| (g, name.clone())),
            None => {
                eprintln!("Unknown builtin game: {}", name);
                eprintln!("Available: {}", classic::CLASSIC_GAMES.join(", "));
                return;
            }
        }
    } else if let Some((m, n)) = random_shape {
        random::random_game(m, n, seed).map(|g| (g, format!("Random {}x{} (seed {})", m, n, seed)))
    } else {
        println!("No game given, using the coordination game");
        classic::coordination().map(|g| (g, "coordination".to_string()))
    };
    let (game, name) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error loading game: {}", e);
            return;
        }
    };

    // Setup solver configuration
    let mut config = SupportEnumConfig::default();
    if let Some(t) = tolerance {
        config = config.with_tolerance(t);
    }
    if threads > 0 {
        config = config.with_threads(threads);
    }

    let solver = match SupportEnumSolver::new(game, config) {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };

    let (m, n) = solver.game().shape();
    println!("Game: {} ({}x{})", name, m, n);
    println!("Support pairs: {}", solver.num_candidates());
    println!();

    let start = Instant::now();

    let (equilibria, stats) = if first_only {
        let mut stream = solver.equilibria();
        let first: Vec<_> = stream.by_ref().take(1).collect();
        let mut stats = stream.stats();
        stats.elapsed_seconds = start.elapsed().as_secs_f64();
        (first, stats)
    } else if parallel {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Evaluating support pairs in parallel...");
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        let result = solver.solve_parallel();
        spinner.finish_and_clear();
        result
    } else {
        let pb = ProgressBar::new(solver.num_candidates());
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} supports {msg}")
        {
            pb.set_style(style);
        }
        let result = solver.solve_with_callback(1000, |s: &SolveStats| {
            pb.set_position(s.candidates as u64);
            pb.set_message(format!("{} equilibria", s.equilibria));
        });
        pb.finish_and_clear();
        result
    };

    println!("Solved in {:.3}s", start.elapsed().as_secs_f64());

    let output = SolutionOutput::new(&name, solver.game(), solver.config(), &equilibria, stats);
    output.print_summary();

    match output.save_json(&output_file) {
        Ok(_) => println!("\nSaved results: {}", output_file),
        Err(e) => eprintln!("Error saving results: {}", e),
    }
}

fn parse_shape(s: &str) -> Option<(usize, usize)> {
    let (m, n) = s.split_once(|c: char| c == 'x' || c == 'X')?;
    Some((m.trim().parse().ok()?, n.trim().parse().ok()?))
}

fn print_help() {
    println!("Support Enumeration Solver");
    println!();
    println!("Usage: solve_game [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --game, -g <FILE>       Game JSON file: {{\"a\": [[..]], \"b\": [[..]]}}");
    println!("  --builtin, -b <NAME>    Classic game: {}", classic::CLASSIC_GAMES.join(", "));
    println!("  --random, -r <MxN>      Random game of the given shape");
    println!("  --seed, -s <N>          Seed for --random (default: 0)");
    println!("  --tolerance <VALUE>     Feasibility / best-response tolerance");
    println!("  --threads, -t <N>       Threads for --parallel (default: auto)");
    println!("  --parallel, -p          Evaluate candidates on all threads");
    println!("  --first, -f             Stop after the first equilibrium");
    println!("  --output, -o <FILE>     Output file (default: equilibria.json)");
    println!("  --help, -h              Show this help message");
}
