//! Runtime settings for the terminal game.
//!
//! Values are layered, later sources winning:
//!
//! 1. built-in defaults
//! 2. a TOML file (`--config` or `TUI_MEMORY_CONFIG`)
//! 3. environment (`TUI_MEMORY_SEED`, `TUI_MEMORY_ROWS`, `TUI_MEMORY_COLUMNS`)
//! 4. command-line flags
//!
//! ```toml
//! rows = 2
//! columns = 3
//! vocabulary = ["Fire", "Water", "Grass"]
//! seed = 7
//! shuffle = "single-pass-swap"
//!
//! [theme]
//! Fire = "FLM"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, GameConfig, ShuffleStrategy};
use crate::types::{FaceId, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_VOCABULARY, HIDE_DELAY_MS, PREVIEW_MS};

pub const CONFIG_ENV: &str = "TUI_MEMORY_CONFIG";
pub const SEED_ENV: &str = "TUI_MEMORY_SEED";
pub const ROWS_ENV: &str = "TUI_MEMORY_ROWS";
pub const COLUMNS_ENV: &str = "TUI_MEMORY_COLUMNS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub rows: u16,
    pub columns: u16,
    pub vocabulary: Vec<String>,
    pub seed: Option<u64>,
    pub shuffle: ShuffleStrategy,
    pub preview_ms: u32,
    pub hide_delay_ms: u32,
    pub preview_on_restart: bool,
    /// Face name -> glyph text
    pub theme: BTreeMap<String, String>,
    /// Empty disables logging
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            vocabulary: DEFAULT_VOCABULARY.iter().map(|s| s.to_string()).collect(),
            seed: None,
            shuffle: ShuffleStrategy::default(),
            preview_ms: PREVIEW_MS,
            hide_delay_ms: HIDE_DELAY_MS,
            preview_on_restart: false,
            theme: BTreeMap::new(),
            log_file: PathBuf::from("tui-memory.log"),
        }
    }
}

/// Command-line overrides (flattened into the binary's parser).
#[derive(Debug, Clone, Default, Args)]
pub struct SettingsArgs {
    /// TOML settings file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub rows: Option<u16>,

    #[arg(long)]
    pub columns: Option<u16>,

    /// Comma-separated face names, one per pair
    #[arg(long, value_delimiter = ',')]
    pub vocabulary: Option<Vec<String>>,

    /// Deck seed (random when unset)
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum)]
    pub shuffle: Option<ShuffleStrategy>,

    #[arg(long, value_name = "MS")]
    pub preview_ms: Option<u32>,

    #[arg(long, value_name = "MS")]
    pub hide_delay_ms: Option<u32>,

    /// Show the face-up preview again after every restart
    #[arg(long)]
    pub preview_on_restart: bool,

    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Resolve settings from the process environment and `args`.
    pub fn load(args: &SettingsArgs) -> Result<Self> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup.
    pub fn resolve(args: &SettingsArgs, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let path = args
            .config
            .clone()
            .or_else(|| env(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from));

        let mut settings = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        settings.apply_env(env)?;
        settings.apply_args(args);
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse settings file {}", path.display()))
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(seed) = env(SEED_ENV).filter(|v| !v.is_empty()) {
            self.seed = Some(seed.parse().with_context(|| format!("invalid {SEED_ENV}: {seed}"))?);
        }
        if let Some(rows) = env(ROWS_ENV).filter(|v| !v.is_empty()) {
            self.rows = rows.parse().with_context(|| format!("invalid {ROWS_ENV}: {rows}"))?;
        }
        if let Some(columns) = env(COLUMNS_ENV).filter(|v| !v.is_empty()) {
            self.columns = columns
                .parse()
                .with_context(|| format!("invalid {COLUMNS_ENV}: {columns}"))?;
        }
        Ok(())
    }

    fn apply_args(&mut self, args: &SettingsArgs) {
        if let Some(rows) = args.rows {
            self.rows = rows;
        }
        if let Some(columns) = args.columns {
            self.columns = columns;
        }
        if let Some(vocabulary) = &args.vocabulary {
            self.vocabulary = vocabulary.clone();
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        if let Some(shuffle) = args.shuffle {
            self.shuffle = shuffle;
        }
        if let Some(ms) = args.preview_ms {
            self.preview_ms = ms;
        }
        if let Some(ms) = args.hide_delay_ms {
            self.hide_delay_ms = ms;
        }
        if args.preview_on_restart {
            self.preview_on_restart = true;
        }
        if let Some(path) = &args.log_file {
            self.log_file = path.clone();
        }
    }

    /// Validate into the core's configuration. Fails fast on a bad board.
    pub fn game_config(&self) -> Result<GameConfig> {
        let vocabulary = self.vocabulary.iter().map(|name| FaceId::new(name)).collect();
        let board = BoardConfig::new(self.rows, self.columns, vocabulary)
            .context("invalid board configuration")?;

        Ok(GameConfig {
            seed: self.seed,
            shuffle: self.shuffle,
            preview_ms: self.preview_ms,
            hide_delay_ms: self.hide_delay_ms,
            preview_on_restart: self.preview_on_restart,
            ..GameConfig::new(board)
        })
    }

    pub fn log_path(&self) -> Option<&Path> {
        if self.log_file.as_os_str().is_empty() {
            None
        } else {
            Some(&self.log_file)
        }
    }
}
