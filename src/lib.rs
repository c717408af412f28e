//! Self-play temporal difference learning for Tic-Tac-Toe
//!
//! This crate provides:
//! - Tic-Tac-Toe boards and a pure outcome judge
//! - Dense state-value tables with TD(0) updates
//! - ε-greedy TD agents that bootstrap from their own successive moves
//! - A self-play training loop with a hard exploration cutoff
//! - A greedy final match handed to pluggable renderers

pub mod app;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod td_learning;
pub mod tictactoe;

pub use app::AgentConfig;
pub use error::{Error, Result};
pub use pipeline::{MatchRecord, SelfPlayTrainer, TrainingConfig, TrainingResult};
pub use td_learning::{TdAgent, ValueTable};
pub use tictactoe::{BoardState, Outcome, Player};
