//! Outcome judge checked against every reachable board

use std::collections::HashMap;

use td_tictactoe::tictactoe::{BoardState, LineAnalyzer, Outcome, Player, judge};

/// Walk the full game tree from the empty board, A moving first, and record
/// the judge's verdict for every distinct board reached.
fn reachable_outcomes() -> HashMap<BoardState, Outcome> {
    fn walk(board: BoardState, mover: Player, seen: &mut HashMap<BoardState, Outcome>) {
        for position in board.empty_cells() {
            let next = board.place(position, mover).unwrap();
            let outcome = judge(&next, mover);
            if seen.insert(next, outcome).is_some() {
                continue;
            }
            if !outcome.is_terminal() {
                walk(next, mover.opponent(), seen);
            }
        }
    }

    let mut seen = HashMap::new();
    seen.insert(BoardState::new(), Outcome::Ongoing);
    walk(BoardState::new(), Player::A, &mut seen);
    seen
}

#[test]
fn reachable_state_space_matches_known_counts() {
    let outcomes = reachable_outcomes();
    assert_eq!(outcomes.len(), 5478);

    let terminal = outcomes.values().filter(|o| o.is_terminal()).count();
    let wins_a = outcomes
        .values()
        .filter(|&&o| o == Outcome::Win(Player::A))
        .count();
    let wins_b = outcomes
        .values()
        .filter(|&&o| o == Outcome::Win(Player::B))
        .count();
    let draws = outcomes.values().filter(|&&o| o == Outcome::Draw).count();

    assert_eq!(terminal, 958);
    assert_eq!((wins_a, wins_b, draws), (626, 316, 16));
}

#[test]
fn verdicts_are_mutually_exclusive_and_consistent() {
    for (board, outcome) in reachable_outcomes() {
        let a_line = LineAnalyzer::has_won(&board.cells, Player::A);
        let b_line = LineAnalyzer::has_won(&board.cells, Player::B);
        assert!(!(a_line && b_line), "both players won on\n{board}");

        match outcome {
            Outcome::Win(Player::A) => assert!(a_line && !b_line),
            Outcome::Win(Player::B) => assert!(b_line && !a_line),
            Outcome::Draw => assert!(board.is_full() && !a_line && !b_line),
            Outcome::Ongoing => assert!(!board.is_full() && !a_line && !b_line),
        }
    }
}

#[test]
fn every_game_ends_within_nine_moves() {
    for (board, outcome) in reachable_outcomes() {
        assert!(board.occupied() <= 9);
        if board.is_full() {
            assert!(outcome.is_terminal(), "full board must be terminal");
        }
    }
}

#[test]
fn row_zero_completion_is_a_win() {
    let board = BoardState::from_codes([1, 1, 0, 2, 2, 0, 0, 0, 0]).unwrap();
    let after = board.place(2, Player::A).unwrap();
    assert_eq!(judge(&after, Player::A), Outcome::Win(Player::A));
}

#[test]
fn full_board_without_line_is_a_draw() {
    let board = BoardState::from_codes([2, 1, 2, 2, 1, 1, 1, 2, 2]).unwrap();
    assert_eq!(judge(&board, Player::B), Outcome::Draw);
}

#[test]
fn winning_ninth_move_beats_fullness() {
    // The ninth move fills the board and completes the left column.
    let before = BoardState::from_codes([1, 2, 1, 1, 2, 2, 0, 1, 2]).unwrap();
    let after = before.place(6, Player::A).unwrap();
    assert!(after.is_full());
    assert_eq!(judge(&after, Player::A), Outcome::Win(Player::A));
}
