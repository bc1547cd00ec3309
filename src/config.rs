//! Command-line and environment configuration.
//!
//! Flags win over environment variables; anything left unset falls back to a
//! default (difficulty menu, wall-clock seed, sound on, temp-dir logs).

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::types::Difficulty;

/// Terminal tile-matching memory game
#[derive(Debug, Parser)]
#[command(name = "tui-memory")]
#[command(about = "Terminal tile-matching memory game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Skip the menu and start at this difficulty (easy, medium, hard)
    #[arg(short, long, env = "MEMORY_DIFFICULTY", value_parser = parse_difficulty)]
    pub difficulty: Option<Difficulty>,

    /// Seed for dealing boards and picking hint tiles
    #[arg(long, env = "MEMORY_SEED")]
    pub seed: Option<u64>,

    /// Do not ring the terminal bell on matches, misses and time-up
    #[arg(long)]
    pub no_sound: bool,

    /// Directory for the log file
    #[arg(long, env = "MEMORY_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(s).ok_or_else(|| format!("unknown difficulty '{s}' (expected easy, medium or hard)"))
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` shows the difficulty menu first.
    pub difficulty: Option<Difficulty>,
    pub seed: u64,
    pub sound: bool,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Parse the process arguments and environment.
    pub fn load() -> Self {
        Self::from_cli(Cli::parse())
    }

    pub fn from_cli(cli: Cli) -> Self {
        let sound = !cli.no_sound && sound_enabled(env::var("MEMORY_SOUND").ok().as_deref());
        Self {
            difficulty: cli.difficulty,
            seed: cli.seed.unwrap_or_else(clock_seed),
            sound,
            log_dir: cli.log_dir.unwrap_or_else(default_log_dir),
        }
    }
}

/// Interpret `MEMORY_SOUND`. Unset or unrecognised values keep sound on.
pub fn sound_enabled(value: Option<&str>) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) => !matches!(v.as_str(), "0" | "false" | "off" | "no"),
        None => true,
    }
}

pub fn default_log_dir() -> PathBuf {
    env::temp_dir().join("tui-memory")
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from([
            "tui-memory",
            "--difficulty",
            "hard",
            "--seed",
            "42",
            "--no-sound",
            "--log-dir",
            "/tmp/mem",
        ])
        .unwrap();
        assert_eq!(cli.difficulty, Some(Difficulty::Hard));
        assert_eq!(cli.seed, Some(42));
        assert!(cli.no_sound);

        let config = AppConfig::from_cli(cli);
        assert_eq!(config.seed, 42);
        assert!(!config.sound);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/mem"));
    }

    #[test]
    fn test_short_difficulty_aliases() {
        let cli = Cli::try_parse_from(["tui-memory", "-d", "2", "--seed", "1"]).unwrap();
        assert_eq!(cli.difficulty, Some(Difficulty::Medium));
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        assert!(Cli::try_parse_from(["tui-memory", "--difficulty", "extreme"]).is_err());
    }

    #[test]
    fn test_sound_env_values() {
        assert!(sound_enabled(None));
        assert!(sound_enabled(Some("1")));
        assert!(sound_enabled(Some("yes")));
        assert!(!sound_enabled(Some("0")));
        assert!(!sound_enabled(Some(" OFF ")));
        assert!(!sound_enabled(Some("false")));
    }
}
