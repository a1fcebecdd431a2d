use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};

use cmap::Bimap;

/// Dual-direction lookup over a table of `key=value` pairs
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    cmd: Command,

    /// Input file of `key=value` lines (`#` starts a comment)
    #[clap(short, long)]
    input: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Looks up the value paired with the given key
    Value { key: String },

    /// Looks up the key paired with the given value
    Key { value: String },

    /// Prints every pair in key order
    List {
        /// Traverse in descending key order
        #[clap(long)]
        reverse: bool,
    },
}

fn load(path: &Path) -> Result<Bimap<String, String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {path:?}"))?;
    let mut map = Bimap::new();
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            bail!("missing `=` on line {}", n + 1);
        };
        let prev = map.insert(key.trim().to_owned(), value.trim().to_owned());
        if prev.did_overwrite() {
            warn!("line {} displaced an earlier pair: {prev:?}", n + 1);
        }
    }
    Ok(map)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .init();

    let now = Instant::now();
    let args = Args::parse();
    let map = load(&args.input)?;
    info!("Loaded {} pairs in {:?}", map.len(), now.elapsed());

    match args.cmd {
        Command::Value { key } => {
            let value = map.get_value(&key)?;
            println!("{value}");
        }
        Command::Key { value } => {
            let key = map.get_key(&value)?;
            println!("{key}");
        }
        Command::List { reverse } => {
            if reverse {
                for (k, v) in map.iter().rev() {
                    println!("{k}={v}");
                }
            } else {
                for (k, v) in &map {
                    println!("{k}={v}");
                }
            }
        }
    }
    Ok(())
}
