//! Properties checked over every board reachable by alternating play.

use std::collections::HashSet;

use minimax_tictactoe::{
    apply_move, empty_cells, evaluate, has_winner, is_terminal, minimax, Board, Player, Position,
    SearchResult, Square,
};

/// Collects every board reachable from the empty board when `first` moves first.
fn reachable_boards(first: Player) -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![(Board::new(), first)];

    while let Some((board, to_move)) = stack.pop() {
        if !seen.insert(board.clone()) {
            continue;
        }
        if is_terminal(&board) {
            continue;
        }
        for pos in empty_cells(&board) {
            let mut next = board.clone();
            next.set(pos, Square::Occupied(to_move));
            stack.push((next, to_move.opponent()));
        }
    }

    seen
}

fn all_reachable() -> Vec<Board> {
    let mut boards: Vec<Board> = reachable_boards(Player::Human).into_iter().collect();
    boards.extend(reachable_boards(Player::Computer));
    boards
}

#[test]
fn test_state_space_size() {
    // 5478 distinct positions when one fixed side opens
    assert_eq!(reachable_boards(Player::Human).len(), 5478);
    assert_eq!(reachable_boards(Player::Computer).len(), 5478);
}

#[test]
fn test_never_two_winners() {
    for board in all_reachable() {
        assert!(
            !(has_winner(&board, Player::Human) && has_winner(&board, Player::Computer)),
            "{board:?}"
        );
    }
}

#[test]
fn test_mark_counts_alternate() {
    for board in all_reachable() {
        let human = board.count(Player::Human);
        let computer = board.count(Player::Computer);
        assert!(human.abs_diff(computer) <= 1, "{board:?}");
    }
}

#[test]
fn test_empty_cells_row_major_and_complete() {
    for board in all_reachable() {
        if is_terminal(&board) {
            continue;
        }
        let cells = empty_cells(&board);
        let marks = board.count(Player::Human) + board.count(Player::Computer);

        assert_eq!(cells.len(), 9 - marks, "{board:?}");
        assert!(cells.windows(2).all(|pair| pair[0] < pair[1]), "{board:?}");

        let expected: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|&pos| board.get(pos) == Square::Empty)
            .collect();
        assert_eq!(cells, expected);
    }
}

#[test]
fn test_leaves_score_as_evaluate() {
    for mut board in all_reachable() {
        let expected = SearchResult::new(None, evaluate(&board).score());
        assert_eq!(minimax(&mut board, 0, Player::Computer), expected);
        assert_eq!(minimax(&mut board, 0, Player::Human), expected);

        if is_terminal(&board) {
            let depth = empty_cells(&board).len();
            assert_eq!(minimax(&mut board, depth, Player::Computer), expected);
        }
    }
}

#[test]
fn test_apply_then_undo_is_identity() {
    for board in all_reachable() {
        for pos in empty_cells(&board) {
            let mut scratch = board.clone();
            apply_move(&mut scratch, pos, Player::Computer).unwrap();
            scratch.set(pos, Square::Empty);
            assert_eq!(scratch, board);
        }
    }
}
