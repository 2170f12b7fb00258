// src/config.rs
//! Runtime configuration: built-in defaults, optional `docrank.toml`,
//! CLI flag overrides (applied by the caller).

use crate::error::{RankError, Result};
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "docrank.toml";

#[derive(Debug, Clone)]
pub struct Config {
    /// Probability that rank mass follows links instead of teleporting
    /// back to the base distribution. Must lie in [0, 1].
    pub damping: f64,
    /// Safety bound on sweep count before giving up on convergence.
    pub max_sweeps: usize,
    /// Corpus root directory.
    pub root: PathBuf,
    pub include_patterns: Vec<Regex>,
    pub exclude_patterns: Vec<Regex>,
    pub verbose: bool,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self {
            damping: default_damping(),
            max_sweeps: default_max_sweeps(),
            root: default_root(),
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
            verbose: false,
        }
    }

    /// Creates a config from defaults merged with `docrank.toml` if one
    /// exists in the working directory.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if a filter pattern is not a valid regex.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Same as [`Config::load`] but with an explicit file path.
    ///
    /// # Errors
    /// Returns an error on unreadable or invalid config files.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let raw = fs::read_to_string(path).map_err(|source| RankError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let file: ConfigFile = toml::from_str(&raw)?;
        Self::from_file(file)
    }

    fn from_file(file: ConfigFile) -> Result<Self> {
        Ok(Self {
            damping: file.ranking.damping,
            max_sweeps: file.ranking.max_sweeps,
            root: file.corpus.root,
            include_patterns: compile_patterns(&file.corpus.include)?,
            exclude_patterns: compile_patterns(&file.corpus.exclude)?,
            verbose: false,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns an error if the damping factor lies outside [0, 1] or the
    /// sweep bound is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.damping.is_finite() || !(0.0..=1.0).contains(&self.damping) {
            return Err(RankError::InvalidDamping(self.damping));
        }
        if self.max_sweeps == 0 {
            return Err(RankError::InvalidSweepBound);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(RankError::from))
        .collect()
}

// --- On-disk representation ---

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    ranking: RankingSection,
    #[serde(default)]
    corpus: CorpusSection,
}

#[derive(Debug, Clone, Deserialize)]
struct RankingSection {
    #[serde(default = "default_damping")]
    damping: f64,
    #[serde(default = "default_max_sweeps")]
    max_sweeps: usize,
}

impl Default for RankingSection {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            max_sweeps: default_max_sweeps(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CorpusSection {
    #[serde(default = "default_root")]
    root: PathBuf,
    /// Regex patterns matched against corpus-relative paths.
    #[serde(default)]
    include: Vec<String>,
    #[serde(default)]
    exclude: Vec<String>,
}

impl Default for CorpusSection {
    fn default() -> Self {
        Self {
            root: default_root(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

fn default_damping() -> f64 {
    0.7
}

fn default_max_sweeps() -> usize {
    1000
}

fn default_root() -> PathBuf {
    PathBuf::from("docs")
}
