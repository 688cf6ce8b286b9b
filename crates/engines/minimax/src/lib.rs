//! Minimax Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a material and
//! center-control evaluation. No move ordering, transposition table or
//! iterative deepening: the search visits moves in generator order and
//! always runs to its configured depth.

pub mod config;
pub mod eval;
pub mod search;

use chess_core::{Engine, GamePosition, SearchResult};
use tracing::info;

pub use chess_core::Score;
pub use config::{load_toml, ConfigError, EngineConfig, MAX_DEPTH, MIN_DEPTH};
pub use eval::{evaluate, Evaluator, TerminalScoring};
pub use search::{find_best_move, minimax, SearchStats};

/// Chess engine using minimax with alpha-beta pruning.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: EngineConfig,
    evaluator: Evaluator,
    /// Counters from the most recent search
    stats: SearchStats,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let depth = config.depth;
        let config = config.with_depth(depth);
        Self {
            evaluator: Evaluator::new(config.terminal_scoring),
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.config = self.config.clone().with_depth(depth);
    }

    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches to `depth` for this call only; the configured depth is kept.
    pub fn search_to_depth(&mut self, pos: &mut GamePosition, depth: u8) -> SearchResult {
        self.stats = SearchStats::default();
        let depth = depth.clamp(MIN_DEPTH, MAX_DEPTH);

        let best = search::find_best_move(pos, depth, &self.evaluator, &mut self.stats);
        if let Some((mv, score)) = best {
            info!(
                mv = %chess_core::to_san(pos.board(), mv),
                score,
                depth,
                nodes = self.stats.nodes,
                cutoffs = self.stats.cutoffs,
                "move chosen"
            );
        }

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map(|(_, s)| s).unwrap_or(0.0),
            depth,
            nodes: self.stats.nodes,
            cutoffs: self.stats.cutoffs,
        }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, pos: &mut GamePosition) -> SearchResult {
        self.search_to_depth(pos, self.config.depth)
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.stats = SearchStats::default();
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        if !name.eq_ignore_ascii_case("depth") {
            return false;
        }
        match value.trim().parse::<u8>() {
            Ok(depth) => {
                self.set_depth(depth);
                true
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
