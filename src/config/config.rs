use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Run defaults read from `config.toml`; command-line flags win over them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum correlation length in base pairs.
    pub max_corr_length: usize,
    pub num_boot: usize,
    pub codon_position: u8,
    pub genetic_code: String,
    pub seed: u64,
    /// Queue slots per worker.
    pub channel_capacity: usize,
    /// 0 = all available cores.
    pub num_cpu: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_corr_length: 300,
            num_boot: 1000,
            codon_position: 4,
            genetic_code: "11".to_string(),
            seed: 1,
            channel_capacity: 2,
            num_cpu: 0,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "mcorr", "mcorr-pair")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads the user config, falling back to defaults when it is missing
    /// or cannot be parsed.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Config::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Could not read config {}: {}", path.display(), e);
                return Config::default();
            }
        };
        match toml::from_str(&content) {
            Ok(config) => {
                log::debug!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring invalid config {}: {}", path.display(), e);
                Config::default()
            }
        }
    }
}
