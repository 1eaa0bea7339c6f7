//! Takuzu core: board model, rule predicates, and text I/O

pub mod board;
pub mod io;
pub mod rules;

pub use board::{Board, BoardError, Candidates, Cell, LineCounts};
pub use io::{
    create_example_puzzles, load_board_from_file, parse_board_from_string, rows_to_string,
    rows_to_string_with_header, save_board_to_file,
};
pub use rules::TakuzuRules;
