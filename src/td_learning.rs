//! Tabular temporal difference learning over board states
//!
//! Each agent owns a [`ValueTable`] holding one estimate per board
//! configuration. Moves are chosen ε-greedily by comparing the estimates of
//! the boards each legal move would produce, and every move applies a TD(0)
//! step:
//!
//! ```text
//! V(s_prev) ← V(s_prev) + α[V(s_next) - V(s_prev)]
//! ```
//!
//! where `s_prev` is the board after the agent's previous move and `s_next`
//! the board after its current move. The opponent's intervening board is
//! skipped. Terminal outcomes enter the tables as hard overrides
//! (`+1.0` for the winning board, `-1.0` for the loser's last board).
//!
//! ## Usage Example
//!
//! ```
//! use td_tictactoe::{
//!     app::AgentConfig,
//!     td_learning::TdAgent,
//!     tictactoe::{BoardState, Player},
//! };
//!
//! let config = AgentConfig::new().with_exploration_rate(0.0);
//! let mut agent = TdAgent::new(Player::A, &config).unwrap().with_seed(42);
//! agent.reset();
//! let next = agent.select_move(&BoardState::new()).unwrap();
//! assert_eq!(next.owner(0), Some(Player::A));
//! ```

pub mod agent;
pub mod value_table;

pub use agent::TdAgent;
pub use value_table::ValueTable;
