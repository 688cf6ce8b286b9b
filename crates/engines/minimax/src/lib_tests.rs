use super::*;

#[test]
fn minimax_engine_returns_legal_move() {
    let mut engine = MinimaxEngine::new();
    let mut pos = GamePosition::startpos();

    let result = engine.search(&mut pos);

    let mv = result.best_move.unwrap();
    assert!(pos.legal_moves().contains(&mv));
    assert_eq!(result.depth, 3);
    assert!(result.nodes > 0);
    assert_eq!(engine.last_stats().nodes, result.nodes);
}

#[test]
fn minimax_engine_handles_checkmate() {
    let mut engine = MinimaxEngine::new();
    let mut pos =
        GamePosition::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();

    assert!(engine.choose_move(&mut pos).is_none());
}

#[test]
fn minimax_engine_handles_stalemate() {
    let mut engine = MinimaxEngine::new();
    let mut pos = GamePosition::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();

    let result = engine.search(&mut pos);

    assert!(result.best_move.is_none());
    assert_eq!(result.score, 0.0);
}

#[test]
fn minimax_engine_is_deterministic() {
    let mut engine = MinimaxEngine::new();
    let mut pos = GamePosition::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    let before = pos.board().clone();

    let first = engine.choose_move(&mut pos);
    let second = engine.choose_move(&mut pos);

    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(pos.board(), &before);
}

#[test]
fn minimax_engine_depth_option() {
    let mut engine = MinimaxEngine::new();
    assert!(engine.set_option("Depth", "2"));
    assert_eq!(engine.config().depth, 2);

    assert!(engine.set_option("depth", "99"));
    assert_eq!(engine.config().depth, config::MAX_DEPTH);

    assert!(!engine.set_option("Depth", "deep"));
    assert!(!engine.set_option("Hash", "16"));
    assert_eq!(engine.config().depth, config::MAX_DEPTH);
}

#[test]
fn minimax_engine_clamps_configured_depth() {
    let engine = MinimaxEngine::with_config(EngineConfig {
        depth: 0,
        ..Default::default()
    });
    assert_eq!(engine.config().depth, config::MIN_DEPTH);
}

#[test]
fn minimax_engine_material_scoring_config() {
    let engine = MinimaxEngine::with_config(EngineConfig {
        terminal_scoring: TerminalScoring::Material,
        ..Default::default()
    });
    assert_eq!(engine.evaluator.terminal_scoring(), TerminalScoring::Material);
    assert_eq!(engine.name(), "Minimax v1.0");
}

#[test]
fn minimax_engine_one_off_depth_keeps_configured_depth() {
    let mut engine = MinimaxEngine::new();
    let mut pos = GamePosition::startpos();

    let shallow = engine.search_to_depth(&mut pos, 1);
    assert_eq!(shallow.depth, 1);
    assert_eq!(shallow.nodes, 20);
    assert_eq!(engine.config().depth, 3);

    let normal = engine.search(&mut pos);
    assert_eq!(normal.depth, 3);
    assert!(normal.nodes > shallow.nodes);
}
