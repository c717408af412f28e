//! Tic-Tac-Toe board, winning lines and outcome judging

pub mod board;
pub mod judge;
pub mod lines;

pub use board::{BoardState, CELL_COUNT, Cell, Player, STATE_COUNT};
pub use judge::{Outcome, judge};
pub use lines::{LineAnalyzer, WINNING_LINES};
