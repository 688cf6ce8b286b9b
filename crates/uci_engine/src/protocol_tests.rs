use super::*;

/// Feeds `lines` to a fresh session and returns everything it wrote.
fn run(session: &mut UciSession, lines: &[&str]) -> Vec<String> {
    let mut out = Vec::new();
    for line in lines {
        if !session.handle(line, &mut out).unwrap() {
            break;
        }
    }
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn info_lines(output: &[String]) -> Vec<&String> {
    output.iter().filter(|l| l.starts_with("info")).collect()
}

#[test]
fn test_go_depth_only_limits_one_search() {
    let mut session = UciSession::new(MinimaxEngine::new());
    let output = run(&mut session, &["uci", "go", "go depth 1", "go", "uci"]);

    let infos = info_lines(&output);
    assert_eq!(infos.len(), 3);
    assert!(infos[0].starts_with("info depth 3 "), "{}", infos[0]);
    assert!(infos[1].starts_with("info depth 1 "), "{}", infos[1]);
    assert!(infos[1].ends_with("nodes 20"), "{}", infos[1]);
    assert!(infos[2].starts_with("info depth 3 "), "{}", infos[2]);

    let options: Vec<&String> = output.iter().filter(|l| l.starts_with("option")).collect();
    assert_eq!(options.len(), 2);
    assert!(options.iter().all(|l| l.contains("default 3 ")));
    assert_eq!(session.engine().config().depth, 3);
}

#[test]
fn test_setoption_depth_is_the_new_default() {
    let mut session = UciSession::new(MinimaxEngine::new());
    let output = run(
        &mut session,
        &["setoption name Depth value 2", "go", "go depth 1", "go"],
    );

    let infos = info_lines(&output);
    assert!(infos[0].starts_with("info depth 2 "));
    assert!(infos[1].starts_with("info depth 1 "));
    assert!(infos[2].starts_with("info depth 2 "));
}

#[test]
fn test_position_and_bestmove() {
    let mut session = UciSession::new(MinimaxEngine::new());
    let output = run(
        &mut session,
        &["position startpos moves e2e4 e7e5", "d", "go depth 2", "quit", "d"],
    );

    assert!(output[0].starts_with("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq "));
    let bestmove = output.iter().find(|l| l.starts_with("bestmove")).unwrap();
    let mv = bestmove.trim_start_matches("bestmove ");
    assert!(chess_core::parse_uci_move(session.position().board(), mv).is_ok());
    // Nothing after quit is handled
    assert_eq!(output.len(), 3);
}

#[test]
fn test_mate_is_reported_in_moves() {
    let mut session = UciSession::new(MinimaxEngine::new());
    let output = run(
        &mut session,
        &["position fen 6k1/5ppp/8/8/8/8/8/4R1K1 w - - 0 1", "go"],
    );

    let info = info_lines(&output)[0];
    assert!(info.contains(" score mate 1 "), "{info}");
    assert!(output.contains(&"bestmove e1e8".to_string()));
}

#[test]
fn test_no_moves_reports_null_move() {
    let mut session = UciSession::new(MinimaxEngine::new());
    let output = run(
        &mut session,
        &["position fen k7/8/1Q6/8/8/8/8/1K6 b - - 0 1", "go"],
    );
    assert!(output.contains(&"bestmove 0000".to_string()));
    assert!(info_lines(&output)[0].contains(" score cp 0 "));
}

#[test]
fn test_uci_score_conversion() {
    assert_eq!(UciScore::from_search(1.5, 3, Color::White), UciScore::Cp(150));
    assert_eq!(UciScore::from_search(1.5, 3, Color::Black), UciScore::Cp(-150));

    // Mate on the first ply leaves depth - 1 unused
    assert_eq!(UciScore::from_search(MATE_SCORE + 2.0, 3, Color::White), UciScore::Mate(1));
    // White mates on ply 3
    assert_eq!(UciScore::from_search(MATE_SCORE, 3, Color::White), UciScore::Mate(2));
    // Black to move is mated after its own move
    assert_eq!(UciScore::from_search(MATE_SCORE + 1.0, 3, Color::Black), UciScore::Mate(-1));

    assert_eq!(UciScore::Mate(-1).to_string(), "mate -1");
    assert_eq!(UciScore::Cp(40).to_string(), "cp 40");
}
