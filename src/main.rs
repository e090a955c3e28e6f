mod config;

use std::io::{self, Read};
use std::{env, fmt, fs, process};

use log::{error, info};

use seqradix::{render, RadixTree};

use config::{Config, Format};

#[derive(Debug)]
enum Error {
    /// Input could not be read
    Io(io::Error),

    /// A sequence was refused by the tree
    Tree(seqradix::Error),
}

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        },
    };

    // hold reference to the logger, otherwise it will be dropped
    let logger = match config.start_logger() {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        },
    };

    let result = run(&config, env::args().nth(1));
    if let Err(e) = &result {
        error!("{}", e);
    }

    // async writer must be flushed before exiting
    logger.shutdown();
    if result.is_err() {
        process::exit(1);
    }
}

/// Reads sequences from `path` (stdin if absent), builds the tree and prints
/// it in the configured format
fn run(config: &Config, path: Option<String>) -> Result<(), Error> {
    let input = match &path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        },
    };

    let sequences = parse_sequences(&input);
    info!(
        "read {} sequences from {}",
        sequences.len(),
        path.as_deref().unwrap_or("stdin"),
    );

    let tree = RadixTree::<String>::from_sequences(config.strategy, &sequences)?;
    info!(
        "built {} tree with {} nodes",
        tree.strategy(),
        tree.len(),
    );

    let generic = tree.to_underlying_tree();
    let rendered = match config.format {
        Format::Outline => render::outline(&generic),
        Format::Html => render::html(&generic),
    };
    print!("{}", rendered);
    if config.format == Format::Html {
        println!();
    }

    Ok(())
}

/// One sequence per line, elements separated by whitespace. Blank lines are
/// skipped.
fn parse_sequences(input: &str) -> Vec<Vec<String>> {
    input
        .lines()
        .map(|line| {
            line.split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|sequence| !sequence.is_empty())
        .collect()
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Tree(e) => write!(f, "tree error: {}", e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<seqradix::Error> for Error {
    fn from(e: seqradix::Error) -> Self {
        Error::Tree(e)
    }
}
