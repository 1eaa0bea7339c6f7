//! A search-problem decorator that collects several distinct solutions
//! from a single search run

use crate::search::SearchProblem;
use crate::solver::{Placement, TakuzuState};
use crate::takuzu::Cell;

/// Wraps a puzzle problem so the search keeps going past the first
/// solved grid.
///
/// Every goal state the engine reaches is recorded (deduplicated, in
/// discovery order). The goal test only succeeds once `limit` distinct
/// grids have been collected, so a search that exhausts its frontier
/// first has proven that fewer than `limit` solutions exist.
pub struct MultiSolutionProblem<P> {
    inner: P,
    limit: usize,
    found: Vec<Vec<Vec<Cell>>>,
}

impl<P> MultiSolutionProblem<P>
where
    P: SearchProblem<State = TakuzuState, Action = Placement>,
{
    pub fn new(inner: P, limit: usize) -> Self {
        Self {
            inner,
            limit,
            found: Vec::new(),
        }
    }

    /// Grids recorded so far, in discovery order
    pub fn found(&self) -> &[Vec<Vec<Cell>>] {
        &self.found
    }

    /// Consume the problem and take ownership of the recorded grids
    pub fn into_found(self) -> Vec<Vec<Vec<Cell>>> {
        self.found
    }
}

impl<P> SearchProblem for MultiSolutionProblem<P>
where
    P: SearchProblem<State = TakuzuState, Action = Placement>,
{
    type State = TakuzuState;
    type Action = Placement;

    fn initial_state(&self) -> TakuzuState {
        self.inner.initial_state()
    }

    fn actions(&self, state: &TakuzuState) -> Vec<Placement> {
        self.inner.actions(state)
    }

    fn result(&self, state: &TakuzuState, action: &Placement) -> TakuzuState {
        self.inner.result(state, action)
    }

    fn is_goal(&mut self, state: &TakuzuState) -> bool {
        if self.inner.is_goal(state) {
            let rows = state.board.to_rows();
            if !self.found.contains(&rows) {
                self.found.push(rows);
            }
        }
        self.found.len() >= self.limit
    }

    fn heuristic(&self, state: &TakuzuState) -> f64 {
        self.inner.heuristic(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchStrategy;
    use crate::search;
    use crate::solver::TakuzuProblem;
    use crate::takuzu::{parse_board_from_string, Board, TakuzuRules};

    #[test]
    fn test_collects_both_solutions_of_empty_2x2() {
        let board = Board::empty(2).unwrap();
        let mut problem = MultiSolutionProblem::new(TakuzuProblem::new(board), 2);
        let outcome = search::run(SearchStrategy::Greedy, &mut problem);

        assert!(outcome.goal.is_some());
        let found = problem.into_found();
        assert_eq!(found.len(), 2);
        assert_ne!(found[0], found[1]);
        for rows in &found {
            assert!(TakuzuRules::is_valid_solution(rows));
        }
    }

    #[test]
    fn test_limit_one_stops_at_first_solution() {
        let board = Board::empty(2).unwrap();
        let mut problem = MultiSolutionProblem::new(TakuzuProblem::new(board), 1);
        let outcome = search::run(SearchStrategy::DepthFirst, &mut problem);

        assert!(outcome.goal.is_some());
        assert_eq!(problem.found().len(), 1);
    }

    #[test]
    fn test_exhaustion_proves_uniqueness() {
        // A fully forced puzzle has exactly one solution. Asking for two
        // exhausts the frontier with a single grid recorded.
        let board = parse_board_from_string("2\n0\t1\n1\t2\n").unwrap();
        let mut problem = MultiSolutionProblem::new(TakuzuProblem::new(board), 2);
        let outcome = search::run(SearchStrategy::Greedy, &mut problem);

        assert!(outcome.goal.is_none());
        assert_eq!(problem.found().len(), 1);
        assert_eq!(
            problem.found()[0],
            parse_board_from_string("2\n0\t1\n1\t0\n").unwrap().to_rows()
        );
    }
}
