//! Dense state-value table for temporal difference learning

use serde::{Deserialize, Serialize};

use crate::tictactoe::{BoardState, STATE_COUNT};

/// State-value table covering every board configuration
///
/// One estimate per configuration, indexed by [`BoardState::index`], so any
/// 9-cell board is a valid key. All entries start at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueTable {
    values: Vec<f64>,
}

impl ValueTable {
    /// Create a zero-initialized table
    pub fn new() -> Self {
        Self {
            values: vec![0.0; STATE_COUNT],
        }
    }

    /// Current estimate for a board
    pub fn get(&self, state: &BoardState) -> f64 {
        self.values[state.index()]
    }

    /// Overwrite the estimate for a board
    pub fn set(&mut self, state: &BoardState, value: f64) {
        self.values[state.index()] = value;
    }

    /// TD(0) update toward a successor estimate
    ///
    /// V(s) ← V(s) + α[V(s') - V(s)]
    ///
    /// Returns the new V(s).
    pub fn update(&mut self, state: &BoardState, target: &BoardState, alpha: f64) -> f64 {
        let current = self.get(state);
        let td_error = self.get(target) - current;
        let updated = current + alpha * td_error;
        self.set(state, updated);
        updated
    }

    /// Number of entries, always 3^9
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of entries that moved away from zero
    pub fn visited(&self) -> usize {
        self.values.iter().filter(|&&v| v != 0.0).count()
    }
}

impl Default for ValueTable {
    fn default() -> Self {
        Self::new()
    }
}
