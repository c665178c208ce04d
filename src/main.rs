use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use scriptsniff::config::Config;
use scriptsniff::engine::EngineConfig;
use scriptsniff::profiles::{store, train};

/// scriptsniff: guess which dialect a script is written in.
///
/// Compares the character trigram fingerprint of a file against trained
/// per-dialect profiles and ranks the closest matches.
#[derive(Parser)]
#[command(name = "scriptsniff", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the dialect of a script file
    Detect {
        /// The file to analyze
        file: PathBuf,

        /// Profile store to compare against (default: SCRIPTSNIFF_MODEL or model.json)
        #[arg(long)]
        model: Option<PathBuf>,

        /// Print results as JSON instead of a report
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Build a profile store from a directory of samples (one subdirectory per category)
    Train {
        /// Directory containing one subdirectory of samples per category
        dir: PathBuf,

        /// Where to write the store (default: SCRIPTSNIFF_MODEL or model.json)
        #[arg(long)]
        output: Option<PathBuf>,

        /// N-gram length to train with
        #[arg(long)]
        ngram_size: Option<usize>,
    },

    /// List the categories in a profile store
    Profiles {
        /// Profile store to inspect
        #[arg(long)]
        model: Option<PathBuf>,
    },
}

/// Engine overrides, applied on top of environment configuration.
#[derive(Args)]
struct EngineArgs {
    /// N-gram length (default: 3)
    #[arg(long)]
    ngram_size: Option<usize>,

    /// Amplification exponent applied to overlap scores (default: 8)
    #[arg(long)]
    power: Option<i32>,

    /// Number of leading characters to analyze (default: 20000)
    #[arg(long)]
    truncate: Option<usize>,
}

impl EngineArgs {
    fn apply(&self, base: EngineConfig) -> EngineConfig {
        EngineConfig {
            ngram_size: self.ngram_size.unwrap_or(base.ngram_size),
            amplification_power: self.power.unwrap_or(base.amplification_power),
            truncation_limit: self.truncate.unwrap_or(base.truncation_limit),
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so `--json` output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("scriptsniff=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect {
            file,
            model,
            json,
            engine,
        } => {
            let mut config = Config::load()?;
            if let Some(model) = model {
                config.model_path = model;
            }
            config.engine = engine.apply(config.engine);
            config.engine.validate()?;

            if !file.exists() {
                anyhow::bail!("File {} not found.", file.display());
            }
            config.require_model()?;

            let profiles = store::load(&config.model_path)?;
            if profiles.is_empty() {
                anyhow::bail!(
                    "Profile store {} has no categories.",
                    config.model_path.display()
                );
            }

            info!(file = %file.display(), "Analyzing");
            let content = scriptsniff::input::read_lossy(&file)?;

            let started = Instant::now();
            let results = scriptsniff::classify(&content, &profiles, &config.engine);
            let elapsed = started.elapsed();

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                scriptsniff::output::terminal::display_detection(&file, &results, elapsed);
            }
        }

        Commands::Train {
            dir,
            output,
            ngram_size,
        } => {
            let config = Config::load()?;
            let output = output.unwrap_or(config.model_path);
            let engine = EngineConfig {
                ngram_size: ngram_size.unwrap_or(config.engine.ngram_size),
                ..config.engine
            };

            println!("Training profiles from {}...", dir.display());
            let profiles = train::train_from_dir(&dir, &engine)?;
            store::save(&profiles, &output)?;

            println!(
                "{}",
                format!(
                    "Saved {} profiles to {}",
                    profiles.len(),
                    output.display()
                )
                .bold()
            );
            println!("You can now run `scriptsniff detect <file>`.");
        }

        Commands::Profiles { model } => {
            let mut config = Config::load()?;
            if let Some(model) = model {
                config.model_path = model;
            }
            config.require_model()?;

            let profiles = store::load(&config.model_path)?;
            scriptsniff::output::terminal::display_profiles(&profiles);
        }
    }

    Ok(())
}
