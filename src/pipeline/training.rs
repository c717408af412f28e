//! Self-play training loop

use serde::{Deserialize, Serialize};

use super::replay::{MatchRecord, play_match};
use crate::{
    Error, Result,
    app::{AgentConfig, config::check_rate},
    ports::Observer,
    td_learning::TdAgent,
    tictactoe::{BoardState, Outcome, Player, judge},
};

/// Value written into the winner's table for the winning board
pub const WIN_REWARD: f64 = 1.0;

/// Value written into the loser's table for the board it last produced
pub const LOSS_REWARD: f64 = -1.0;

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of self-play episodes
    pub episode_count: usize,

    /// 0-based episode at which both agents stop exploring for good
    pub exploration_cutoff_episode: usize,

    /// Hyperparameters of player A (moves first)
    pub agent_a: AgentConfig,

    /// Hyperparameters of player B
    pub agent_b: AgentConfig,

    /// Random seed; A uses `seed`, B uses `seed + 1`
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episode_count: 30_000,
            exploration_cutoff_episode: 20_000,
            agent_a: AgentConfig::default(),
            agent_b: AgentConfig::default(),
            seed: None,
        }
    }
}

impl TrainingConfig {
    pub fn with_episodes(mut self, episode_count: usize) -> Self {
        self.episode_count = episode_count;
        self
    }

    pub fn with_cutoff(mut self, episode: usize) -> Self {
        self.exploration_cutoff_episode = episode;
        self
    }

    pub fn with_agents(mut self, agent_a: AgentConfig, agent_b: AgentConfig) -> Self {
        self.agent_a = agent_a;
        self.agent_b = agent_b;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every hyperparameter against its domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the episode count is zero,
    /// the cutoff lies outside `[0, episode_count]` or any rate lies outside
    /// `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.episode_count == 0 {
            return Err(Error::config("episode count must be positive"));
        }
        if self.exploration_cutoff_episode > self.episode_count {
            return Err(Error::config(format!(
                "exploration cutoff {} must lie in [0, {}]",
                self.exploration_cutoff_episode, self.episode_count
            )));
        }
        check_rate("agent A exploration rate", self.agent_a.exploration_rate)?;
        check_rate("agent A learning rate", self.agent_a.learning_rate)?;
        check_rate("agent B exploration rate", self.agent_b.exploration_rate)?;
        check_rate("agent B learning rate", self.agent_b.learning_rate)
    }
}

/// Result of a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total episodes played
    pub total_episodes: usize,

    /// Episodes won by A
    pub wins_a: usize,

    /// Episodes won by B
    pub wins_b: usize,

    /// Drawn episodes
    pub draws: usize,

    pub win_rate_a: f64,
    pub win_rate_b: f64,
    pub draw_rate: f64,

    /// Outcome of every episode, in order
    pub history: Vec<Outcome>,
}

impl TrainingResult {
    /// Summarize a per-episode outcome history
    pub fn from_history(history: Vec<Outcome>) -> Self {
        let total_episodes = history.len();
        let count = |wanted: Outcome| history.iter().filter(|&&o| o == wanted).count();
        let wins_a = count(Outcome::Win(Player::A));
        let wins_b = count(Outcome::Win(Player::B));
        let draws = count(Outcome::Draw);
        let rate = |n: usize| {
            if total_episodes > 0 {
                n as f64 / total_episodes as f64
            } else {
                0.0
            }
        };

        Self {
            total_episodes,
            wins_a,
            wins_b,
            draws,
            win_rate_a: rate(wins_a),
            win_rate_b: rate(wins_b),
            draw_rate: rate(draws),
            history,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Borrow the two agents as (mover, waiter) for the given turn.
fn rotation(agents: &mut [TdAgent; 2], turn: usize) -> (&mut TdAgent, &mut TdAgent) {
    let [first, second] = agents;
    if turn.is_multiple_of(2) {
        (first, second)
    } else {
        (second, first)
    }
}

/// Self-play trainer for a pair of TD agents
pub struct SelfPlayTrainer {
    config: TrainingConfig,
    agents: [TdAgent; 2],
    observers: Vec<Box<dyn Observer>>,
}

impl SelfPlayTrainer {
    /// Create a trainer with two fresh agents.
    ///
    /// # Errors
    ///
    /// Fails fast with [`Error::InvalidConfiguration`] before any episode
    /// runs if the configuration is out of domain.
    pub fn new(config: TrainingConfig) -> Result<Self> {
        config.validate()?;

        let mut agent_a = TdAgent::new(Player::A, &config.agent_a)?;
        let mut agent_b = TdAgent::new(Player::B, &config.agent_b)?;
        if let Some(seed) = config.seed {
            agent_a = agent_a.with_seed(seed);
            agent_b = agent_b.with_seed(seed.wrapping_add(1));
        }

        Ok(Self {
            config,
            agents: [agent_a, agent_b],
            observers: Vec::new(),
        })
    }

    /// Add an observer to the trainer
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// The trained pair, A first
    pub fn agents(&self) -> (&TdAgent, &TdAgent) {
        let [a, b] = &self.agents;
        (a, b)
    }

    pub fn into_agents(self) -> (TdAgent, TdAgent) {
        let [a, b] = self.agents;
        (a, b)
    }

    /// Run every configured episode.
    pub fn run(&mut self) -> Result<TrainingResult> {
        let total = self.config.episode_count;
        log::info!(
            "beginning self-play training ({} episodes, cutoff at {})",
            total,
            self.config.exploration_cutoff_episode
        );

        for observer in &mut self.observers {
            observer.on_training_start(total)?;
        }

        let mut history = Vec::with_capacity(total);
        for episode in 0..total {
            if episode == self.config.exploration_cutoff_episode {
                self.stop_exploring(episode)?;
            }
            let outcome = self.play_episode(episode)?;
            log::debug!("episode {episode} finished: {outcome:?}");
            history.push(outcome);
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        let result = TrainingResult::from_history(history);
        let (a, b) = self.agents();
        log::info!(
            "training finished: A {} / B {} / draws {} (visited states A {} B {})",
            result.wins_a,
            result.wins_b,
            result.draws,
            a.values().visited(),
            b.values().visited()
        );
        Ok(result)
    }

    /// Greedy replay of the trained pair from the empty board
    pub fn play_match(&self) -> Result<MatchRecord> {
        let (a, b) = self.agents();
        play_match(a, b)
    }

    fn stop_exploring(&mut self, episode: usize) -> Result<()> {
        log::debug!("exploration cutoff at episode {episode}: both agents now greedy");
        for agent in &mut self.agents {
            agent.disable_exploration();
        }
        for observer in &mut self.observers {
            observer.on_exploration_cutoff(episode)?;
        }
        Ok(())
    }

    /// Play one episode, A moving first, and inject terminal rewards.
    fn play_episode(&mut self, episode: usize) -> Result<Outcome> {
        for agent in &mut self.agents {
            agent.reset();
        }
        for observer in &mut self.observers {
            observer.on_episode_start(episode)?;
        }

        let mut board = BoardState::new();
        let mut turn = 0;
        let outcome = loop {
            let (mover, waiter) = rotation(&mut self.agents, turn);
            let before = board;
            board = mover.select_move(&before)?;

            for observer in &mut self.observers {
                observer.on_move(episode, turn, mover.player(), &board)?;
            }

            let outcome = judge(&board, mover.player());
            if outcome == Outcome::Win(mover.player()) {
                mover.apply_terminal_reward(&board, WIN_REWARD);
                waiter.apply_terminal_reward(&before, LOSS_REWARD);
            }
            if outcome.is_terminal() {
                break outcome;
            }
            turn += 1;
        };

        for observer in &mut self.observers {
            observer.on_episode_end(episode, outcome)?;
        }
        Ok(outcome)
    }
}
