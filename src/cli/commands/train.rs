//! Train command - Self-play training followed by the final greedy match

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::AgentConfig,
    cli::output::{format_number, print_kv, print_section, print_subsection},
    pipeline::{JsonlObserver, ProgressObserver, SelfPlayTrainer, TrainingConfig},
    ports::TextRenderer,
};

fn sanitize_json_path(raw: &Path, default_name: &str) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // Treat trailing separators or missing filename as a directory target.
    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push(default_name);
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    Ok(())
}

#[derive(Parser, Debug)]
#[command(about = "Train two TD agents by self-play, then replay a greedy match")]
pub struct TrainArgs {
    /// Number of self-play episodes
    #[arg(long, short = 'e', default_value_t = 30_000)]
    pub episodes: usize,

    /// Episode (0-based) at which both agents stop exploring
    #[arg(long, short = 'c', default_value_t = 20_000)]
    pub cutoff: usize,

    /// Exploration rate of player A
    #[arg(long, default_value_t = 0.1)]
    pub epsilon_a: f64,

    /// Exploration rate of player B
    #[arg(long, default_value_t = 0.1)]
    pub epsilon_b: f64,

    /// Learning rate of player A
    #[arg(long, default_value_t = 0.1)]
    pub alpha_a: f64,

    /// Learning rate of player B
    #[arg(long, default_value_t = 0.1)]
    pub alpha_b: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Optional path for writing the training summary JSON
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Optional path for writing the final match record JSON
    #[arg(long)]
    pub match_output: Option<PathBuf>,

    /// Optional file for per-episode JSONL observations
    #[arg(long)]
    pub observations: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,
}

impl TrainArgs {
    pub fn training_config(&self) -> TrainingConfig {
        let agent_a = AgentConfig::new()
            .with_exploration_rate(self.epsilon_a)
            .with_learning_rate(self.alpha_a);
        let agent_b = AgentConfig::new()
            .with_exploration_rate(self.epsilon_b)
            .with_learning_rate(self.alpha_b);

        TrainingConfig {
            episode_count: self.episodes,
            exploration_cutoff_episode: self.cutoff,
            agent_a,
            agent_b,
            seed: self.seed,
        }
    }
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let config = args.training_config();
    let mut trainer =
        SelfPlayTrainer::new(config).context("invalid training configuration")?;

    if !args.quiet {
        trainer = trainer.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.observations {
        ensure_parent(path)?;
        trainer = trainer.with_observer(Box::new(JsonlObserver::new(path)?));
    }

    let result = trainer.run()?;

    print_section("Self-play training");
    print_kv("Episodes", &format_number(result.total_episodes));
    print_kv(
        "A wins",
        &format!("{} ({:.1}%)", result.wins_a, result.win_rate_a * 100.0),
    );
    print_kv(
        "B wins",
        &format!("{} ({:.1}%)", result.wins_b, result.win_rate_b * 100.0),
    );
    print_kv(
        "Draws",
        &format!("{} ({:.1}%)", result.draws, result.draw_rate * 100.0),
    );

    if let Some(raw) = &args.summary {
        let path = sanitize_json_path(raw, "training_summary.json");
        ensure_parent(&path)?;
        result
            .save(&path)
            .with_context(|| format!("writing summary to {}", path.display()))?;
        print_kv("Summary", &path.display().to_string());
    }

    let record = trainer.play_match()?;

    print_subsection("Final match (greedy)");
    let stdout = std::io::stdout();
    let mut renderer = TextRenderer::new(stdout.lock());
    record.render(&mut renderer)?;

    if let Some(raw) = &args.match_output {
        let path = sanitize_json_path(raw, "final_match.json");
        ensure_parent(&path)?;
        record
            .save(&path)
            .with_context(|| format!("writing match record to {}", path.display()))?;
        print_kv("Match record", &path.display().to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_appends_json_extension() {
        let path = sanitize_json_path(Path::new("out/run"), "x.json");
        assert_eq!(path, PathBuf::from("out/run.json"));
    }

    #[test]
    fn test_sanitize_keeps_json_extension() {
        let path = sanitize_json_path(Path::new("out/run.JSON"), "x.json");
        assert_eq!(path, PathBuf::from("out/run.JSON"));
    }

    #[test]
    fn test_sanitize_directory_gets_default_name() {
        let raw = format!("out{}", std::path::MAIN_SEPARATOR);
        let path = sanitize_json_path(Path::new(&raw), "final_match.json");
        assert_eq!(path, Path::new("out").join("final_match.json"));
    }

    #[test]
    fn test_args_map_to_config() {
        let args = TrainArgs::parse_from([
            "train",
            "--episodes",
            "100",
            "--cutoff",
            "50",
            "--epsilon-b",
            "0.3",
            "--alpha-a",
            "0.2",
            "--seed",
            "9",
        ]);
        let config = args.training_config();
        assert_eq!(config.episode_count, 100);
        assert_eq!(config.exploration_cutoff_episode, 50);
        assert_eq!(config.agent_a.learning_rate, 0.2);
        assert_eq!(config.agent_b.exploration_rate, 0.3);
        assert_eq!(config.seed, Some(9));
    }
}
