//! End-to-end move selection on concrete positions.

use connect_search::ai::{MinimaxAgent, SearchEngine, WindowHeuristic, LOSS_SCORE, WIN_SCORE};
use connect_search::game::{Board, GameState, Side};
use connect_search::{choose_move, Outcome};

fn board(rows: &[&str]) -> Board {
    Board::from_rows(rows, 4).expect("valid test board")
}

#[test]
fn empty_board_depth_one_takes_center() {
    let board = Board::standard();
    assert_eq!(choose_move(&board, Side::A, 1), Some(3));
}

#[test]
fn blocks_three_on_bottom_row() {
    let text = include_str!("../boards/block_threat.txt");
    let rows: Vec<&str> = text.lines().collect();
    let board = board(&rows);
    assert_eq!(board.classify(Side::A), Outcome::Undecided);

    for depth in 1..=5 {
        assert_eq!(choose_move(&board, Side::A, depth), Some(3), "depth {depth}");
    }
}

#[test]
fn failing_to_block_is_seen_as_a_loss() {
    let board = board(&[
        ".......",
        ".......",
        ".......",
        ".......",
        ".....A.",
        "BBB..AA",
    ]);
    let engine = SearchEngine::new(Box::new(WindowHeuristic::default()));
    // Force a non-blocking move, then search from the opponent's turn
    let mut after = board.clone();
    after.drop_piece(0, Side::A).unwrap();
    let result = engine.search_window(&after, Side::A, 1, i32::MIN, i32::MAX, false);
    assert_eq!(result.score, LOSS_SCORE);
    assert_eq!(result.column, Some(3));
}

#[test]
fn never_overlooks_immediate_win() {
    let positions: [(&[&str], usize); 3] = [
        (
            &[
                ".......",
                ".......",
                ".......",
                ".......",
                "BBB....",
                "AAA...B",
            ],
            3,
        ),
        (
            &[
                ".......",
                ".......",
                ".......",
                "......A",
                "B.....A",
                "B.B...A",
            ],
            6,
        ),
        (
            &[
                ".......",
                "...A...",
                "..AB...",
                ".ABB...",
                ".BAA...",
                "AABB...",
            ],
            0,
        ),
    ];

    for (rows, winning_col) in positions {
        let board = board(rows);
        for depth in 1..=2 {
            let col = choose_move(&board, Side::A, depth).unwrap();
            let mut after = board.clone();
            after.drop_piece(col, Side::A).unwrap();
            assert_eq!(
                after.classify(Side::A),
                Outcome::MoverWins,
                "depth {depth} chose {col}, expected a win such as {winning_col}\n{board}"
            );
            assert!(col <= winning_col);
        }
    }
}

#[test]
fn engine_prefers_sentinel_over_any_heuristic() {
    let board = board(&[
        ".......",
        ".......",
        ".......",
        ".......",
        "BBB....",
        "AAA...B",
    ]);
    let result = MinimaxAgent::new(3).search(&board, Side::A);
    assert_eq!(result.score, WIN_SCORE);
}

#[test]
fn full_board_is_draw_with_no_move() {
    let rows = ["AABBAAB", "BBAABBA", "AABBAAB", "BBAABBA", "AABBAAB", "BBAABBA"];
    let board = board(&rows);
    assert!(board.is_full());
    assert_eq!(board.classify(Side::A), Outcome::Draw);
    assert_eq!(choose_move(&board, Side::A, 4), None);
}

#[test]
fn repeated_calls_agree() {
    let mut state = GameState::initial(Board::standard());
    for col in [3, 2, 3, 4, 1] {
        state.apply_move_mut(col).unwrap();
    }
    let side = state.current_side();
    let first = choose_move(state.board(), side, 5);
    for _ in 0..3 {
        assert_eq!(choose_move(state.board(), side, 5), first);
    }
}

#[test]
fn parametric_board_connect_five() {
    let board = Board::from_rows(
        &[
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            "BBBB.....",
            "AAAA....B",
        ],
        5,
    )
    .unwrap();
    assert_eq!(choose_move(&board, Side::A, 2), Some(4));
    assert_eq!(choose_move(&board, Side::B, 2), Some(4));
}

#[test]
fn board_shorter_than_run_length_wins_along_rows() {
    let board = Board::from_rows(&[".......", ".......", "AAA.BB."], 4).unwrap();
    assert_eq!(board.classify(Side::A), Outcome::Undecided);

    for depth in 1..=3 {
        assert_eq!(choose_move(&board, Side::A, depth), Some(3), "depth {depth}");
    }
    // B must fill the gap or lose on the next ply
    assert_eq!(choose_move(&board, Side::B, 2), Some(3));

    let mut after = board.clone();
    after.drop_piece(3, Side::A).unwrap();
    assert_eq!(after.classify(Side::A), Outcome::MoverWins);
}
