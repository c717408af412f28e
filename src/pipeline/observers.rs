//! Observer adapters for self-play training
//!
//! Observers allow composable data collection during training without coupling
//! the training loop to specific output formats.

use std::{
    collections::VecDeque,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{BoardState, Outcome, Player},
};

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    wins_a: usize,
    wins_b: usize,
    draws: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            wins_a: 0,
            wins_b: 0,
            draws: 0,
        }
    }

    fn message(&self) -> String {
        format!("A:{} B:{} D:{}", self.wins_a, self.wins_b, self.draws)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_exploration_cutoff(&mut self, episode: usize) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.println(format!("exploration disabled at episode {episode}"));
        }
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Win(Player::A) => self.wins_a += 1,
            Outcome::Win(Player::B) => self.wins_b += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(episode as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Metrics observer - Tracks outcome counts and episode lengths
pub struct MetricsObserver {
    wins_a: usize,
    wins_b: usize,
    draws: usize,
    total_episodes: usize,
    move_counts: Vec<usize>,
    recent: VecDeque<Outcome>,
    window: usize,
}

impl MetricsObserver {
    /// Create a new metrics observer with a 1000-episode recent window
    pub fn new() -> Self {
        Self::with_window(1000)
    }

    /// Create a metrics observer tracking the last `window` outcomes
    pub fn with_window(window: usize) -> Self {
        Self {
            wins_a: 0,
            wins_b: 0,
            draws: 0,
            total_episodes: 0,
            move_counts: Vec::new(),
            recent: VecDeque::with_capacity(window),
            window: window.max(1),
        }
    }

    fn rate(&self, n: usize) -> f64 {
        if self.total_episodes == 0 {
            0.0
        } else {
            n as f64 / self.total_episodes as f64
        }
    }

    /// Draw rate over the most recent episodes
    pub fn recent_draw_rate(&self) -> f64 {
        if self.recent.is_empty() {
            0.0
        } else {
            let draws = self.recent.iter().filter(|&&o| o == Outcome::Draw).count();
            draws as f64 / self.recent.len() as f64
        }
    }

    /// Get average episode length in moves
    pub fn avg_episode_length(&self) -> f64 {
        if self.move_counts.is_empty() {
            0.0
        } else {
            self.move_counts.iter().sum::<usize>() as f64 / self.move_counts.len() as f64
        }
    }

    pub fn max_episode_length(&self) -> usize {
        self.move_counts.iter().copied().max().unwrap_or(0)
    }

    /// Get metrics summary
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            total_episodes: self.total_episodes,
            wins_a: self.wins_a,
            wins_b: self.wins_b,
            draws: self.draws,
            win_rate_a: self.rate(self.wins_a),
            win_rate_b: self.rate(self.wins_b),
            draw_rate: self.rate(self.draws),
            recent_draw_rate: self.recent_draw_rate(),
            avg_episode_length: self.avg_episode_length(),
            max_episode_length: self.max_episode_length(),
        }
    }
}

/// Summary of training metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_episodes: usize,
    pub wins_a: usize,
    pub wins_b: usize,
    pub draws: usize,
    pub win_rate_a: f64,
    pub win_rate_b: f64,
    pub draw_rate: f64,
    pub recent_draw_rate: f64,
    pub avg_episode_length: f64,
    pub max_episode_length: usize,
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MetricsObserver {
    fn on_episode_start(&mut self, _episode: usize) -> Result<()> {
        self.move_counts.push(0);
        Ok(())
    }

    fn on_move(
        &mut self,
        _episode: usize,
        _step: usize,
        _mover: Player,
        _board: &BoardState,
    ) -> Result<()> {
        if let Some(last) = self.move_counts.last_mut() {
            *last += 1;
        }
        Ok(())
    }

    fn on_episode_end(&mut self, _episode: usize, outcome: Outcome) -> Result<()> {
        self.total_episodes += 1;
        match outcome {
            Outcome::Win(Player::A) => self.wins_a += 1,
            Outcome::Win(Player::B) => self.wins_b += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
        if self.recent.len() == self.window {
            self.recent.pop_front();
        }
        self.recent.push_back(outcome);
        Ok(())
    }
}

/// One recorded episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeObservation {
    pub episode: usize,
    pub outcome: Outcome,
    /// Boards after each move, as trinary cell codes
    pub boards: Vec<[u8; 9]>,
}

/// JSONL observer - Exports every episode to JSON Lines format
pub struct JsonlObserver {
    writer: BufWriter<File>,
    current_boards: Vec<[u8; 9]>,
}

impl JsonlObserver {
    /// Create a new JSONL observer
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            current_boards: Vec::new(),
        })
    }
}

impl Observer for JsonlObserver {
    fn on_episode_start(&mut self, _episode: usize) -> Result<()> {
        self.current_boards.clear();
        Ok(())
    }

    fn on_move(
        &mut self,
        _episode: usize,
        _step: usize,
        _mover: Player,
        board: &BoardState,
    ) -> Result<()> {
        self.current_boards.push(board.codes());
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, outcome: Outcome) -> Result<()> {
        let observation = EpisodeObservation {
            episode,
            outcome,
            boards: std::mem::take(&mut self.current_boards),
        };

        // Write as JSONL (one JSON object per line)
        serde_json::to_writer(&mut self.writer, &observation)?;
        writeln!(&mut self.writer)?;
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
