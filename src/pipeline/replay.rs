//! Final greedy match between two trained agents

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::MatchRenderer,
    td_learning::TdAgent,
    tictactoe::{BoardState, CELL_COUNT, Outcome, judge},
};

/// Board snapshots of one match, from the empty board to the terminal one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub snapshots: Vec<BoardState>,
    pub outcome: Outcome,
}

impl MatchRecord {
    /// Outcome code handed to renderers (`1` A, `2` B, `3` draw)
    pub fn winner_code(&self) -> u8 {
        self.outcome.code()
    }

    /// Number of moves played
    pub fn moves(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    pub fn final_board(&self) -> Option<&BoardState> {
        self.snapshots.last()
    }

    /// Hand the match to a renderer
    pub fn render(&self, renderer: &mut dyn MatchRenderer) -> Result<()> {
        renderer.render(&self.snapshots, self.outcome)
    }

    /// Save record to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load record from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let record = serde_json::from_reader(file)?;
        Ok(record)
    }
}

/// Replay two agents greedily from the empty board, `first` moving first.
///
/// Exploration is ignored and neither value table is touched, so replaying
/// the same pair always yields the same match.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] if both agents play the same side.
pub fn play_match(first: &TdAgent, second: &TdAgent) -> Result<MatchRecord> {
    if first.player() == second.player() {
        return Err(Error::config(format!(
            "both agents play as {}",
            first.player()
        )));
    }

    let agents = [first, second];
    let mut board = BoardState::new();
    let mut snapshots = Vec::with_capacity(CELL_COUNT + 1);
    snapshots.push(board);

    let mut turn = 0;
    let outcome = loop {
        let mover = agents[turn % 2];
        board = mover.greedy_move(&board)?;
        snapshots.push(board);

        let outcome = judge(&board, mover.player());
        if outcome.is_terminal() {
            break outcome;
        }
        turn += 1;
    };

    log::info!(
        "final match finished after {} moves: {:?}",
        snapshots.len() - 1,
        outcome
    );
    Ok(MatchRecord { snapshots, outcome })
}
