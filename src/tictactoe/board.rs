//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// Number of distinct board configurations (3^9)
pub const STATE_COUNT: usize = 19_683;

/// A cell on the Tic-Tac-Toe board
///
/// The numeric codes (`0`, `1`, `2`) are the trinary digits used by
/// [`BoardState::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    A,
    B,
}

impl Cell {
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::A => 1,
            Cell::B => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::A),
            2 => Some(Cell::B),
            _ => None,
        }
    }

    /// Player A plays `O`, player B plays `X`.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::A => 'O',
            Cell::B => 'X',
        }
    }

    fn to_player(self) -> Option<Player> {
        match self {
            Cell::A => Some(Player::A),
            Cell::B => Some(Player::B),
            Cell::Empty => None,
        }
    }
}

/// One of the two self-play agents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Convert player to the marker it places
    pub fn to_cell(self) -> Cell {
        match self {
            Player::A => Cell::A,
            Player::B => Cell::B,
        }
    }

    pub fn code(self) -> u8 {
        self.to_cell().code()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::A => write!(f, "A (O)"),
            Player::B => write!(f, "B (X)"),
        }
    }
}

/// A full board configuration
///
/// Boards are small `Copy` values: moving never mutates a board in place,
/// [`BoardState::place`] returns the successor instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; CELL_COUNT],
}

impl BoardState {
    /// Create a new empty board
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from trinary cell codes (`0` empty, `1` A, `2` B).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCellCode`] for any code above 2.
    pub fn from_codes(codes: [u8; CELL_COUNT]) -> Result<Self, crate::Error> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (position, &code) in codes.iter().enumerate() {
            cells[position] =
                Cell::from_code(code).ok_or(crate::Error::InvalidCellCode { code, position })?;
        }
        Ok(BoardState { cells })
    }

    pub fn codes(&self) -> [u8; CELL_COUNT] {
        self.cells.map(Cell::code)
    }

    /// Empty positions in ascending index order
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Cell::Empty)
    }

    /// Number of markers on the board
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    /// Owner of the marker at `position`, if any
    pub fn owner(&self, position: usize) -> Option<Player> {
        self.cells.get(position).and_then(|cell| cell.to_player())
    }

    /// Place `player`'s marker on `position`, returning the new board.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is out of bounds or already occupied.
    pub fn place(&self, position: usize, player: Player) -> Result<BoardState, crate::Error> {
        if position >= CELL_COUNT {
            return Err(crate::Error::InvalidPosition { position });
        }
        if self.cells[position] != Cell::Empty {
            return Err(crate::Error::InvalidMove { position });
        }
        Ok(self.with_marker(position, player))
    }

    /// Unchecked variant of [`BoardState::place`] for positions taken from
    /// [`BoardState::empty_cells`].
    pub(crate) fn with_marker(&self, position: usize, player: Player) -> BoardState {
        let mut next = *self;
        next.cells[position] = player.to_cell();
        next
    }

    /// Base-3 encoding of the board, cell 0 most significant.
    ///
    /// Always in `0..STATE_COUNT`.
    pub fn index(&self) -> usize {
        self.cells
            .iter()
            .fold(0, |acc, cell| acc * 3 + cell.code() as usize)
    }

    /// Inverse of [`BoardState::index`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidStateIndex`] for indices outside
    /// `0..STATE_COUNT`.
    pub fn from_index(index: usize) -> Result<Self, crate::Error> {
        if index >= STATE_COUNT {
            return Err(crate::Error::InvalidStateIndex { index });
        }
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut rest = index;
        for cell in cells.iter_mut().rev() {
            *cell = match rest % 3 {
                0 => Cell::Empty,
                1 => Cell::A,
                _ => Cell::B,
            };
            rest /= 3;
        }
        Ok(BoardState { cells })
    }

    /// Single-line rendering, rows separated by `/`
    pub fn compact(&self) -> String {
        let c: Vec<char> = self.cells.iter().map(|cell| cell.to_char()).collect();
        format!(
            "{}{}{} / {}{}{} / {}{}{}",
            c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7], c[8]
        )
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
