//! The search-problem interface consumed by the tree-search engines

/// A state with a stable creation-order identifier.
///
/// Identifiers are assigned in strictly increasing order by the problem
/// that creates the states; the engines use them to break ties between
/// frontier entries of equal priority, so runs are deterministic.
pub trait SearchState {
    fn id(&self) -> u64;
}

/// A search problem as seen by the engines: an initial state, legal
/// actions per state, a transition function, a goal test, and an optional
/// heuristic.
///
/// `is_goal` takes `&mut self` so that decorating problems can record the
/// goals they observe; all other operations are read-only.
pub trait SearchProblem {
    type State: Clone + SearchState;
    type Action: Clone;

    fn initial_state(&self) -> Self::State;

    /// Legal actions in the given state; an empty list means the state
    /// cannot be expanded further
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The successor state reached by applying an action returned by
    /// `actions` for this state
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    fn is_goal(&mut self, state: &Self::State) -> bool;

    /// Estimated cost to reach a goal; `f64::INFINITY` marks a state that
    /// must never be expanded or returned as a goal
    fn heuristic(&self, _state: &Self::State) -> f64 {
        0.0
    }
}
