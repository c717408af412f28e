//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// The first completed line for `player`, if any
    pub fn winning_line(cells: &[Cell; 9], player: Player) -> Option<[usize; 3]> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .copied()
            .find(|line| line.iter().all(|&idx| cells[idx] == target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::A;
        cells[1] = Cell::A;
        cells[2] = Cell::A;

        assert!(LineAnalyzer::has_won(&cells, Player::A));
        assert!(!LineAnalyzer::has_won(&cells, Player::B));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[1] = Cell::B;
        cells[4] = Cell::B;
        cells[7] = Cell::B;

        assert!(LineAnalyzer::has_won(&cells, Player::B));
        assert!(!LineAnalyzer::has_won(&cells, Player::A));
    }

    #[test]
    fn test_has_won_anti_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::A;
        cells[4] = Cell::A;
        cells[6] = Cell::A;

        assert!(LineAnalyzer::has_won(&cells, Player::A));
        assert_eq!(
            LineAnalyzer::winning_line(&cells, Player::A),
            Some([2, 4, 6])
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::A;
        cells[4] = Cell::B;
        cells[8] = Cell::A;

        assert!(!LineAnalyzer::has_won(&cells, Player::A));
        assert_eq!(LineAnalyzer::winning_line(&cells, Player::A), None);
    }
}
