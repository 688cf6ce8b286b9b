//! Play against the minimax engine in the terminal.

mod command;
mod config;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chess_core::{color_name, Color, Engine, GameSession};
use minimax_engine::{load_toml, MinimaxEngine};
use tracing::info;
use tracing_subscriber::EnvFilter;

use command::{Command, HELP};
use config::{PlayConfig, Side};
use render::render_board;

fn print_usage() {
    println!("Usage: chess_play [--config FILE] [--human white|black] [--depth N] [--flip]");
}

fn parse_args() -> Result<Option<PlayConfig>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // The config file is read first so flags can override it
    let mut config = match args.iter().position(|a| a == "--config" || a == "-c") {
        Some(i) => {
            let path = PathBuf::from(args.get(i + 1).context("--config needs a path")?);
            load_toml(&path)?
        }
        None => PlayConfig::default(),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => i += 1,
            "--human" => {
                config.human = match args.get(i + 1).map(|s| s.to_ascii_lowercase()).as_deref() {
                    Some("white" | "w") => Side::White,
                    Some("black" | "b") => Side::Black,
                    _ => bail!("--human expects white or black"),
                };
                i += 1;
            }
            "--depth" | "-d" => {
                let depth = args
                    .get(i + 1)
                    .and_then(|d| d.parse().ok())
                    .context("--depth expects a number")?;
                config.engine = config.engine.with_depth(depth);
                i += 1;
            }
            "--flip" => config.flipped = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            other => bail!("unknown argument: {other}"),
        }
        i += 1;
    }
    Ok(Some(config))
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

struct Game {
    session: GameSession,
    engine: MinimaxEngine,
    flipped: bool,
}

impl Game {
    fn show(&self) {
        println!();
        print!("{}", render_board(self.session.position().board(), self.flipped));
        let history = self.session.history().text();
        if !history.is_empty() {
            println!("{history}");
        }
        match self.session.outcome() {
            Some(outcome) => println!("Game over! {outcome}"),
            None => {
                let side = self.session.position().side_to_move();
                let check = if self.session.position().in_check() { " (check)" } else { "" };
                println!("{} to move{check}", color_name(side));
            }
        }
    }

    /// Lets the engine move while it is not the human's turn.
    fn engine_turn(&mut self) {
        if self.session.is_over() || self.session.is_humans_turn() {
            return;
        }
        if let Some(san) = self.session.play_engine(&mut self.engine) {
            let stats = self.engine.last_stats();
            info!(mv = %san, nodes = stats.nodes, "engine replied");
            println!("Engine plays {san}");
        }
    }

    fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Move(text) => match self.session.play_human(&text) {
                Ok(_) => {
                    self.engine_turn();
                    self.show();
                }
                Err(e) => println!("{e}"),
            },
            Command::New => {
                self.session.reset();
                self.engine.new_game();
                self.engine_turn();
                self.show();
            }
            Command::Fen(fen) => match self.session.set_position(&fen) {
                Ok(()) => {
                    self.engine.new_game();
                    self.engine_turn();
                    self.show();
                }
                Err(e) => println!("{e}"),
            },
            Command::Flip => {
                self.flipped = !self.flipped;
                self.show();
            }
            Command::History => {
                let history = self.session.history().text();
                if history.is_empty() {
                    println!("No moves yet");
                } else {
                    println!("{history}");
                }
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => return false,
        }
        true
    }
}

fn main() -> Result<()> {
    let Some(config) = parse_args()? else {
        return Ok(());
    };
    init_tracing(&config.log);

    let human = Color::from(config.human);
    info!(human = color_name(human), depth = config.engine.depth, "starting game");
    let mut game = Game {
        session: GameSession::new(human),
        engine: MinimaxEngine::with_config(config.engine.clone()),
        flipped: config.flipped,
    };

    println!("Type 'help' for commands.");
    game.engine_turn();
    game.show();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let Some(command) = Command::parse(&line) else {
            continue;
        };
        if !game.handle(command) {
            break;
        }
    }
    Ok(())
}
