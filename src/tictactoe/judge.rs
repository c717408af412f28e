//! Terminal outcome detection

use serde::{Deserialize, Serialize};

use super::{BoardState, LineAnalyzer, Player};

/// Result of evaluating a board after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
    Ongoing,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }

    /// Numeric outcome code: `0` ongoing, `1` A wins, `2` B wins, `3` draw.
    pub fn code(self) -> u8 {
        match self {
            Outcome::Ongoing => 0,
            Outcome::Win(player) => player.code(),
            Outcome::Draw => 3,
        }
    }
}

/// Evaluate `board` right after `mover` placed a marker.
///
/// Only the mover can have completed a line with the last move, so only the
/// mover's lines are checked. The win check runs before and independently of
/// the fullness check: a full board with a winning line is a win.
pub fn judge(board: &BoardState, mover: Player) -> Outcome {
    if LineAnalyzer::has_won(&board.cells, mover) {
        Outcome::Win(mover)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
