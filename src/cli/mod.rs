//! CLI infrastructure for the td-tictactoe trainer
//!
//! This module provides the command-line interface for self-play training
//! and the final greedy match.

pub mod commands;
pub mod output;
