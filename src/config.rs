use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::engine::EngineConfig;

/// Model file name, both in the working directory and the data directory.
pub const MODEL_FILE: &str = "model.json";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// are applied on top by the binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Profile store to classify against (SCRIPTSNIFF_MODEL)
    pub model_path: PathBuf,
    /// Engine parameters (SCRIPTSNIFF_NGRAM_SIZE, SCRIPTSNIFF_AMPLIFICATION,
    /// SCRIPTSNIFF_TRUNCATE)
    pub engine: EngineConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default. A variable that is set but doesn't parse
    /// is an error rather than being silently ignored.
    pub fn load() -> Result<Self> {
        let model_path = env::var("SCRIPTSNIFF_MODEL")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_model_path());

        let defaults = EngineConfig::default();
        let engine = EngineConfig {
            ngram_size: parse_var("SCRIPTSNIFF_NGRAM_SIZE", defaults.ngram_size)?,
            amplification_power: parse_var(
                "SCRIPTSNIFF_AMPLIFICATION",
                defaults.amplification_power,
            )?,
            truncation_limit: parse_var("SCRIPTSNIFF_TRUNCATE", defaults.truncation_limit)?,
        };

        Ok(Self { model_path, engine })
    }

    /// Check that the profile store exists before trying to classify.
    pub fn require_model(&self) -> Result<()> {
        if !self.model_path.exists() {
            anyhow::bail!(
                "Profile store not found at {}\n\
                 Run `scriptsniff train <samples-dir>` to build one,\n\
                 or set SCRIPTSNIFF_MODEL to point at an existing store.",
                self.model_path.display()
            );
        }
        Ok(())
    }
}

/// `./model.json` if it exists, otherwise the per-user data directory.
pub fn default_model_path() -> PathBuf {
    let local = Path::new(MODEL_FILE);
    if local.exists() {
        return local.to_path_buf();
    }
    data_model_path()
}

/// Model location under the platform data directory.
pub fn data_model_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scriptsniff")
        .join(MODEL_FILE)
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
