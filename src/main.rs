use std::io::Write;
use std::time::Instant;

use clap::{App, Arg};

use qless_solver::{load_dictionary, solve, SearchConfig, Tile};

const WORD_LIST: &str = include_str!("../assets/words.txt");

#[allow(unused_must_use)]
fn init_logger() {
    env_logger::builder()
        .format(|buf, record| writeln!(buf,
                                       "[{} {} {}:{}] {}",
                                       buf.timestamp(),
                                       record.level(),
                                       record.file().unwrap_or(record.target()),
                                       record.line().unwrap_or(0),
                                       record.args()))
        .try_init();
}

fn main() {
    init_logger();

    let matches = App::new("qless-solve")
        .version("0.1.0")
        .about("Solves a Q-Less letter multiset into a crossword-style grid")
        .arg(
            Arg::with_name("letters")
                .help("11 or 12 letters to solve, e.g. aeiorstnldmh")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("deadline-ms")
                .long("deadline-ms")
                .takes_value(true)
                .default_value("10000"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true),
        )
        .get_matches();

    let letters = matches.value_of("letters").unwrap().to_lowercase();
    let deadline_ms: i64 = matches
        .value_of("deadline-ms")
        .unwrap()
        .parse()
        .expect("--deadline-ms must be an integer");
    let seed: Option<u64> = matches.value_of("seed").map(|s| s.parse().expect("--seed must be an integer"));

    let tiles: Vec<Tile> = letters
        .chars()
        .enumerate()
        .map(|(i, ch)| Tile::new(format!("t{}", i), ch))
        .collect();

    let dictionary = load_dictionary(WORD_LIST.lines().map(|l| l.trim().to_string()).filter(|l| !l.is_empty()))
        .expect("bundled word list failed to load");

    let mut overrides = std::collections::HashMap::new();
    if let Some(seed) = seed {
        overrides.insert("seed", seed as usize);
    }
    let config = SearchConfig::new_from_overrides(overrides);

    let start = Instant::now();
    let result = solve(&tiles, deadline_ms, &dictionary, &config);
    let elapsed = start.elapsed();

    match result {
        Ok(outcome) if outcome.success => {
            println!(
                "solved in {:?} (removed letter: {:?})",
                elapsed, outcome.removed_letter
            );
            for (tile_id, row, col) in &outcome.placements {
                println!("{} -> ({}, {})", tile_id, row, col);
            }
            std::process::exit(0);
        }
        Ok(_) => {
            println!("no solution found within {:?}", elapsed);
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("input rejected: {}", err);
            std::process::exit(2);
        }
    }
}
