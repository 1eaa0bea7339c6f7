//! Exposes the Takuzu board as a search problem

use crate::search::{SearchProblem, SearchState};
use crate::takuzu::{Board, Cell};
use std::sync::atomic::{AtomicU64, Ordering};

/// One search action: set a value at an open cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub value: Cell,
}

/// A board plus its creation-order identifier
#[derive(Debug, Clone)]
pub struct TakuzuState {
    pub board: Board,
    id: u64,
}

impl SearchState for TakuzuState {
    fn id(&self) -> u64 {
        self.id
    }
}

/// The search-problem adapter.
///
/// Each problem owns its own identifier counter, so concurrent search
/// sessions never share state; the counter is atomic only so `result`
/// can stay `&self` for the engines.
pub struct TakuzuProblem {
    initial: Board,
    next_id: AtomicU64,
}

impl TakuzuProblem {
    pub fn new(initial: Board) -> Self {
        Self {
            initial,
            next_id: AtomicU64::new(0),
        }
    }

    fn fresh_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

impl SearchProblem for TakuzuProblem {
    type State = TakuzuState;
    type Action = Placement;

    fn initial_state(&self) -> TakuzuState {
        TakuzuState {
            board: self.initial.clone(),
            id: self.fresh_id(),
        }
    }

    /// Branch only on the most constrained open cell: zero, one or two
    /// actions per state
    fn actions(&self, state: &TakuzuState) -> Vec<Placement> {
        match state.board.next_open_cell() {
            None => Vec::new(),
            Some((row, col)) => state
                .board
                .candidates_at(row, col)
                .values()
                .map(|value| Placement { row, col, value })
                .collect(),
        }
    }

    fn result(&self, state: &TakuzuState, action: &Placement) -> TakuzuState {
        let board = state
            .board
            .place(action.row, action.col, action.value)
            .expect("search actions are drawn from the candidate set");
        TakuzuState {
            board,
            id: self.fresh_id(),
        }
    }

    fn is_goal(&mut self, state: &TakuzuState) -> bool {
        state.board.remaining() == 0
    }

    /// Infinite for a certain dead end; otherwise the number of open
    /// cells still holding two candidates (forced cells cost nothing)
    fn heuristic(&self, state: &TakuzuState) -> f64 {
        let mut undecided = 0usize;
        for (row, col) in state.board.open_cells() {
            match state.board.candidates_at(row, col).count() {
                0 => return f64::INFINITY,
                2 => undecided += 1,
                _ => {}
            }
        }
        undecided as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::takuzu::parse_board_from_string;

    fn forced_row_board() -> Board {
        parse_board_from_string("4\n0\t0\t2\t1\n2\t2\t2\t2\n2\t2\t2\t2\n2\t2\t2\t2\n").unwrap()
    }

    #[test]
    fn test_single_forced_action() {
        let mut problem = TakuzuProblem::new(forced_row_board());
        let state = problem.initial_state();

        // the forced cell produces exactly one action, no branching
        let actions = problem.actions(&state);
        assert_eq!(
            actions,
            vec![Placement {
                row: 0,
                col: 2,
                value: Cell::One
            }]
        );

        let next = problem.result(&state, &actions[0]);
        assert_eq!(next.board.row_cells(0), forced_row_board().place(0, 2, Cell::One).unwrap().row_cells(0));
        assert!(!problem.is_goal(&next));
    }

    #[test]
    fn test_state_ids_increase() {
        let problem = TakuzuProblem::new(Board::empty(4).unwrap());
        let a = problem.initial_state();
        let action = problem.actions(&a)[0];
        let b = problem.result(&a, &action);
        let c = problem.result(&a, &action);
        assert!(a.id() < b.id());
        assert!(b.id() < c.id());
    }

    #[test]
    fn test_goal_requires_no_open_cells() {
        let mut problem = TakuzuProblem::new(
            parse_board_from_string("2\n0\t1\n1\t0\n").unwrap(),
        );
        let state = problem.initial_state();
        assert!(problem.is_goal(&state));
        assert!(problem.actions(&state).is_empty());
        assert_eq!(problem.heuristic(&state), 0.0);
    }

    #[test]
    fn test_heuristic_counts_undecided_cells() {
        let problem = TakuzuProblem::new(forced_row_board());
        let state = problem.initial_state();
        // 13 open cells, one of them forced
        assert_eq!(problem.heuristic(&state), 12.0);
    }

    #[test]
    fn test_heuristic_is_infinite_at_dead_ends() {
        let board = parse_board_from_string(
            "4\n0\t1\t0\t1\n0\t1\t2\t2\n2\t2\t2\t2\n2\t2\t2\t2\n",
        )
        .unwrap();
        // placing a zero leaves (1, 3) without any legal value
        let dead = board.place(1, 2, Cell::Zero).unwrap();
        assert!(dead.has_dead_end());

        let problem = TakuzuProblem::new(dead);
        let state = problem.initial_state();
        assert!(problem.heuristic(&state).is_infinite());
    }
}
