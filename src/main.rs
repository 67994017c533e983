//! Palmerston -- scores Diplomacy games under tournament scoring systems.
//!
//! Reads a game description from a JSON file and prints each power's
//! score. Diagnostics go to stderr.

use std::env;
use std::fs;
use std::process;

use palmerston::batch;
use palmerston::cli::{parse_args, Command, USAGE};
use palmerston::registry::registry;
use palmerston::samples::SAMPLE_GAMES;
use palmerston::scoring::ScoringSystem;
use palmerston::state::{parse_game, GameState};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let cmd = match parse_args(&args) {
        Some(c) => c,
        None => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    match cmd {
        Command::List => {
            for system in registry().iter() {
                println!("{:<36} {}", system.name(), system.slug());
            }
        }
        Command::Describe { system } => {
            let system = find_system(&system);
            println!("{}\n\n{}", system.name(), system.description());
        }
        Command::Score { system, path } => {
            let system = find_system(&system);
            let state = load_game(&path);
            match system.scores(&state) {
                Ok(scores) => match serde_json::to_string_pretty(&scores) {
                    Ok(json) => println!("{}", json),
                    Err(e) => fail(&format!("failed to write scores: {}", e)),
                },
                Err(e) => fail(&format!("{}: {}", system.name(), e)),
            }
        }
        Command::ScoreAll { path } => {
            let state = load_game(&path);
            for (name, result) in batch::score_all(registry(), &*state) {
                match result {
                    Ok(scores) => println!("{:<36} {}", name, scores),
                    Err(e) => eprintln!("{:<36} error: {}", name, e),
                }
            }
        }
        Command::Samples { system } => {
            let system = find_system(&system);
            for sample in &SAMPLE_GAMES {
                let state = match sample.state() {
                    Ok(s) => s,
                    Err(e) => {
                        eprintln!("{}: {}", sample.label, e);
                        continue;
                    }
                };
                match system.scores(&state) {
                    Ok(scores) => println!("{:<36} {}", sample.label, scores),
                    Err(e) => eprintln!("{:<36} error: {}", sample.label, e),
                }
            }
        }
        Command::Help => {
            println!("{}", USAGE);
        }
    }
}

/// Looks a system up by name or slug, exiting if there is none.
fn find_system(key: &str) -> &'static dyn ScoringSystem {
    match registry().lookup(key) {
        Some(s) => s,
        None => fail(&format!("unknown scoring system: {}", key)),
    }
}

fn load_game(path: &str) -> Box<dyn GameState + Send + Sync> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => fail(&format!("failed to read {}: {}", path, e)),
    };
    match parse_game(&text) {
        Ok(state) => state,
        Err(e) => fail(&format!("{}: {}", path, e)),
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("{}", msg);
    process::exit(1);
}
