//! Self-play training and final match pipeline
//!
//! This module provides:
//! - The self-play training loop with a hard exploration cutoff
//! - Observer adapters for progress, metrics and JSONL export
//! - The greedy final match handed to renderers

pub mod observers;
pub mod replay;
pub mod training;

// Re-export observer implementations (adapters)
pub use observers::{
    EpisodeObservation, JsonlObserver, MetricsObserver, MetricsSummary, ProgressObserver,
};
pub use replay::{MatchRecord, play_match};
pub use training::{
    LOSS_REWARD, SelfPlayTrainer, TrainingConfig, TrainingResult, WIN_REWARD,
};

pub use crate::ports::Observer;
