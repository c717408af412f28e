//! Self-play TD agent
//!
//! The agent learns state values (not state-action values): it evaluates the
//! board each candidate move would produce and bootstraps the board after its
//! previous move toward the board after its current move.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    app::AgentConfig,
    error::{Error, Result},
    td_learning::value_table::ValueTable,
    tictactoe::{BoardState, Player},
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// ε-greedy state-value agent for one side of the board
#[derive(Debug, Clone)]
pub struct TdAgent {
    player: Player,
    epsilon: f64,
    learning_rate: f64,
    values: ValueTable,
    last_own_state: BoardState,
    rng: StdRng,
}

impl TdAgent {
    /// Create an agent with a zero-initialized value table.
    ///
    /// The random source is seeded from the OS; use [`TdAgent::with_seed`]
    /// for reproducible runs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if either rate is outside
    /// `[0, 1]`.
    pub fn new(player: Player, config: &AgentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            player,
            epsilon: config.exploration_rate,
            learning_rate: config.learning_rate,
            values: ValueTable::new(),
            last_own_state: BoardState::new(),
            rng: build_rng(None),
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = build_rng(Some(seed));
        self
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn exploration_rate(&self) -> f64 {
        self.epsilon
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn values(&self) -> &ValueTable {
        &self.values
    }

    /// Current estimate for `board` in this agent's table
    pub fn value(&self, board: &BoardState) -> f64 {
        self.values.get(board)
    }

    /// Board produced by this agent's previous move in the current episode
    pub fn last_own_state(&self) -> &BoardState {
        &self.last_own_state
    }

    /// Switch to pure greedy play for good.
    pub fn disable_exploration(&mut self) {
        self.epsilon = 0.0;
    }

    /// Forget the previous move; call before the first move of an episode.
    pub fn reset(&mut self) {
        self.last_own_state = BoardState::new();
    }

    /// Choose a move with the ε-greedy policy and apply the TD step.
    ///
    /// The entry for the board after this agent's previous move is pulled
    /// toward the value of the board after the move chosen now.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if `current` has no empty cell.
    pub fn select_move(&mut self, current: &BoardState) -> Result<BoardState> {
        let available = Self::available_cells(current)?;

        let position = if self.rng.random::<f64>() < self.epsilon {
            // Explore: random empty cell
            available[self.rng.random_range(0..available.len())]
        } else {
            // Exploit: best-valued successor
            self.best_position(current, &available)
        };
        let next = current.with_marker(position, self.player);

        self.values
            .update(&self.last_own_state, &next, self.learning_rate);
        self.last_own_state = next;

        Ok(next)
    }

    /// Greedy successor of `current` without exploring or learning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if `current` has no empty cell.
    pub fn greedy_move(&self, current: &BoardState) -> Result<BoardState> {
        let available = Self::available_cells(current)?;
        let position = self.best_position(current, &available);
        Ok(current.with_marker(position, self.player))
    }

    /// Hard override of one table entry at the end of an episode.
    pub fn apply_terminal_reward(&mut self, board: &BoardState, value: f64) {
        self.values.set(board, value);
    }

    fn available_cells(current: &BoardState) -> Result<Vec<usize>> {
        let available = current.empty_cells();
        if available.is_empty() {
            return Err(Error::InvalidState {
                board: current.compact(),
            });
        }
        Ok(available)
    }

    /// Stable argmax: the first position among equal maxima wins.
    fn best_position(&self, current: &BoardState, available: &[usize]) -> usize {
        let mut best = available[0];
        let mut best_value = f64::NEG_INFINITY;
        for &position in available {
            let value = self.values.get(&current.with_marker(position, self.player));
            if value > best_value {
                best = position;
                best_value = value;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greedy(player: Player) -> TdAgent {
        let config = AgentConfig::new().with_exploration_rate(0.0);
        TdAgent::new(player, &config).unwrap().with_seed(7)
    }

    #[test]
    fn test_rejects_invalid_rates() {
        let config = AgentConfig::new().with_learning_rate(-0.5);
        assert!(matches!(
            TdAgent::new(Player::A, &config),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_zero_table_opens_at_index_zero() {
        let mut agent = greedy(Player::A);
        let next = agent.select_move(&BoardState::new()).unwrap();
        assert_eq!(next.owner(0), Some(Player::A));
        assert_eq!(next.occupied(), 1);
    }

    #[test]
    fn test_greedy_picks_highest_value() {
        let mut agent = greedy(Player::A);
        let empty = BoardState::new();
        let center = empty.place(4, Player::A).unwrap();
        agent.apply_terminal_reward(&center, 0.5);

        assert_eq!(agent.greedy_move(&empty).unwrap(), center);
        assert_eq!(agent.select_move(&empty).unwrap(), center);
    }

    #[test]
    fn test_ties_break_to_first_index() {
        let mut agent = greedy(Player::B);
        let board = BoardState::from_codes([1, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        for position in [3, 5] {
            agent.apply_terminal_reward(&board.place(position, Player::B).unwrap(), 0.3);
        }
        let next = agent.greedy_move(&board).unwrap();
        assert_eq!(next.owner(3), Some(Player::B));
    }

    #[test]
    fn test_td_step_updates_previous_own_state() {
        let mut agent = greedy(Player::A);
        let empty = BoardState::new();
        let first = empty.place(0, Player::A).unwrap();
        agent.apply_terminal_reward(&first, 1.0);

        // First move: empty board pulled toward V(first) = 1.0
        let produced = agent.select_move(&empty).unwrap();
        assert_eq!(produced, first);
        assert!((agent.value(&empty) - 0.1).abs() < 1e-12);
        assert_eq!(agent.last_own_state(), &first);

        // Second move: V(first) is pulled toward the new zero-valued board
        let after_reply = first.place(4, Player::B).unwrap();
        let second = agent.select_move(&after_reply).unwrap();
        assert!((agent.value(&first) - 0.9).abs() < 1e-12);
        assert_eq!(agent.last_own_state(), &second);
        assert_eq!(agent.value(&after_reply), 0.0, "opponent's board untouched");
    }

    #[test]
    fn test_reset_returns_to_empty_board() {
        let mut agent = greedy(Player::A);
        agent.select_move(&BoardState::new()).unwrap();
        assert!(!agent.last_own_state().is_empty());
        agent.reset();
        assert!(agent.last_own_state().is_empty());
    }

    #[test]
    fn test_full_board_is_invalid_state() {
        let mut agent = greedy(Player::A);
        let full = BoardState::from_codes([1, 2, 1, 1, 2, 2, 2, 1, 1]).unwrap();
        assert!(matches!(
            agent.select_move(&full),
            Err(Error::InvalidState { .. })
        ));
        assert!(matches!(
            agent.greedy_move(&full),
            Err(Error::InvalidState { .. })
        ));
    }

    #[test]
    fn test_full_exploration_only_plays_empty_cells() {
        let config = AgentConfig::new().with_exploration_rate(1.0);
        let mut agent = TdAgent::new(Player::B, &config).unwrap().with_seed(3);
        let board = BoardState::from_codes([1, 2, 1, 0, 2, 0, 0, 1, 0]).unwrap();

        for _ in 0..50 {
            agent.reset();
            let next = agent.select_move(&board).unwrap();
            assert_eq!(next.occupied(), board.occupied() + 1);
            let placed = (0..9).find(|&i| board.owner(i) != next.owner(i)).unwrap();
            assert!(board.empty_cells().contains(&placed));
            assert_eq!(next.owner(placed), Some(Player::B));
        }
    }

    #[test]
    fn test_disable_exploration_is_permanent() {
        let mut agent = TdAgent::new(Player::A, &AgentConfig::new()).unwrap();
        agent.disable_exploration();
        agent.reset();
        assert_eq!(agent.exploration_rate(), 0.0);
    }
}
