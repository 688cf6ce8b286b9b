mod protocol;

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use minimax_engine::{load_toml, EngineConfig, MinimaxEngine};
use tracing_subscriber::EnvFilter;

use protocol::UciSession;

fn init_tracing() {
    // stdout carries the protocol, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn engine_config() -> Result<EngineConfig> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" || arg == "-c" {
            let path = PathBuf::from(args.next().context("--config needs a path")?);
            return Ok(load_toml(&path)?);
        }
    }
    Ok(EngineConfig::default())
}

fn main() -> Result<()> {
    init_tracing();
    let mut session = UciSession::new(MinimaxEngine::with_config(engine_config()?));

    // UCI engines communicate via stdin/stdout.
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        if !session.handle(&line?, &mut stdout)? {
            break;
        }
    }
    Ok(())
}
