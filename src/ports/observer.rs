//! Observer port - abstraction for training observation and data collection
//!
//! This port defines the interface for observing self-play training,
//! allowing composable data collection without coupling the training loop
//! to specific output formats or metrics.

use crate::{
    Result,
    tictactoe::{BoardState, Outcome, Player},
};

/// Observer trait for monitoring self-play training
///
/// # Event Sequence
///
/// The observer methods are called in the following order:
/// 1. `on_training_start(total_episodes)` - Once at the beginning
/// 2. For each episode:
///    - `on_exploration_cutoff(episode)` - Only on the cutoff episode
///    - `on_episode_start(episode)`
///    - `on_move(...)` - After each move, before judging it
///    - `on_episode_end(episode, outcome)`
/// 3. `on_training_end()` - Once at the end
///
/// # Examples
///
/// ```no_run
/// use td_tictactoe::{ports::Observer, tictactoe::Outcome};
///
/// struct DrawCounter {
///     draws: usize,
/// }
///
/// impl Observer for DrawCounter {
///     fn on_episode_end(&mut self, _episode: usize, outcome: Outcome) -> td_tictactoe::Result<()> {
///         if outcome == Outcome::Draw {
///             self.draws += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called once before the first episode.
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called when both agents switch to pure greedy play.
    fn on_exploration_cutoff(&mut self, _episode: usize) -> Result<()> {
        Ok(())
    }

    /// Called when an episode starts (0-based index).
    fn on_episode_start(&mut self, _episode: usize) -> Result<()> {
        Ok(())
    }

    /// Called for each move in an episode.
    ///
    /// # Parameters
    ///
    /// * `episode` - Index of the current episode
    /// * `step` - Move number within the episode (0-based)
    /// * `mover` - Player who just moved
    /// * `board` - Board produced by the move
    fn on_move(
        &mut self,
        _episode: usize,
        _step: usize,
        _mover: Player,
        _board: &BoardState,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when an episode reaches a terminal outcome.
    fn on_episode_end(&mut self, _episode: usize, _outcome: Outcome) -> Result<()> {
        Ok(())
    }

    /// Called once after the last episode.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
